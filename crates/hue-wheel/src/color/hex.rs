//! Six-digit hex color parsing and formatting.

use super::Rgb;

/// Parse a six-digit hex color (e.g. "FF7043" or "#FF7043").
///
/// Anything other than exactly six hex digits after the optional `#` is
/// rejected. Case-insensitive.
pub fn parse_hex(text: &str) -> Option<Rgb> {
    let hex = text.strip_prefix('#').unwrap_or(text);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgb::from_bytes([r, g, b]))
}

/// Format as six uppercase hex digits, no `#` prefix.
pub fn format_hex(rgb: Rgb) -> String {
    let [r, g, b] = rgb.to_bytes();
    format!("{r:02X}{g:02X}{b:02X}")
}
