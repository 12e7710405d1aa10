//! Color value conversion.
//!
//! Converts the color notations found in shadcn theme files into `#rrggbb`:
//!   - `oklch(L C H)`  (Tailwind v4 / shadcn default tokens)
//!   - `hsl(H S L)`    (shadcn v3 tokens)
//!   - `#hex`          (passed through as written)
//!
//! Functional notations are parsed and converted to sRGB by `lightningcss`.
//! Out-of-gamut channels are clamped.

use lightningcss::traits::Parse;
use lightningcss::values::color::{CssColor, SRGB};

/// Convert a CSS color value to hex, trying oklch, then hsl, then hex.
///
/// Returns `None` for anything else, including malformed `oklch()`/`hsl()`.
pub fn to_hex(value: &str) -> Option<String> {
    let value = value.trim();

    if value.starts_with("oklch(") {
        if let Some(hex) = css_to_hex(value) {
            return Some(hex);
        }
    }

    if value.starts_with("hsl(") || value.starts_with("hsla(") {
        if let Some(hex) = css_to_hex(value) {
            return Some(hex);
        }
    }

    if value.starts_with('#') {
        return Some(value.to_string());
    }

    None
}

/// Format an 8-bit RGB triple as lowercase `#rrggbb`.
pub fn format_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

fn css_to_hex(value: &str) -> Option<String> {
    let color = CssColor::parse_string(value).ok()?;
    let srgb = SRGB::try_from(&color).ok()?;
    Some(format_hex(channel(srgb.r), channel(srgb.g), channel(srgb.b)))
}

/// Unit sRGB channel to 8 bits. NaN (a missing component) maps to 0.
fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(hex: &str) -> (u8, u8, u8) {
        let n = u32::from_str_radix(&hex[1..], 16).unwrap();
        ((n >> 16) as u8, (n >> 8) as u8, n as u8)
    }

    #[test]
    fn test_to_hex_passes_hex_through() {
        assert_eq!(to_hex("#FFF").as_deref(), Some("#FFF"));
        assert_eq!(to_hex(" #09090b ").as_deref(), Some("#09090b"));
    }

    #[test]
    fn test_to_hex_rejects_unknown_notation() {
        assert_eq!(to_hex("0.5rem"), None);
        assert_eq!(to_hex("rgb(0, 0, 0)"), None);
        assert_eq!(to_hex("var(--primary)"), None);
        assert_eq!(to_hex("red"), None);
    }

    #[test]
    fn test_to_hex_malformed_functions_are_skipped() {
        assert_eq!(to_hex("oklch(0.5 0.1)"), None);
        assert_eq!(to_hex("oklch(abc def ghi)"), None);
        assert_eq!(to_hex("hsl(0 100%)"), None);
    }

    #[test]
    fn test_oklch_extremes() {
        assert_eq!(to_hex("oklch(1 0 0)").as_deref(), Some("#ffffff"));
        assert_eq!(to_hex("oklch(0 0 0)").as_deref(), Some("#000000"));
    }

    #[test]
    fn test_oklch_percent_lightness() {
        assert_eq!(to_hex("oklch(50% 0 0)"), to_hex("oklch(0.5 0 0)"));
    }

    #[test]
    fn test_oklch_achromatic_is_gray() {
        let (r, g, b) = rgb(&to_hex("oklch(0.5 0 120deg)").unwrap());
        assert!(r.abs_diff(g) <= 1 && g.abs_diff(b) <= 1);
    }

    #[test]
    fn test_oklch_red_is_red() {
        let (r, g, b) = rgb(&to_hex("oklch(0.637 0.237 25.331)").unwrap());
        assert!(r > 200);
        assert!(r > g && r > b);
    }

    #[test]
    fn test_hsl_notations() {
        assert_eq!(to_hex("hsl(0 100% 50%)").as_deref(), Some("#ff0000"));
        assert_eq!(to_hex("hsl(120, 100%, 50%)").as_deref(), Some("#00ff00"));
        assert_eq!(to_hex("hsla(240 100% 50% / 0.5)").as_deref(), Some("#0000ff"));
        assert_eq!(to_hex("hsl(0 0% 100%)").as_deref(), Some("#ffffff"));
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(255, 0, 16), "#ff0010");
    }
}
