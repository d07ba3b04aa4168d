//! Hue-wheel color chooser.
//!
//! The [`color`] module is the reusable core: pure HSV/RGB conversion, hex
//! parsing and evenly spaced palette sampling, free of any UI types. The
//! remaining modules are the egui desktop front end built on top of it.

pub mod app;
pub mod color;
pub mod config;
pub mod platform;
pub mod ui;
