//! UI widgets for the chooser window.

pub mod colors;
pub mod sliders;
pub mod sv_square;
pub mod swatches;
pub mod toast;
pub mod wheel;

pub use colors::{chrome, from_color32, to_color32};
pub use sv_square::SvSquare;
pub use toast::Toast;
pub use wheel::HueWheel;
