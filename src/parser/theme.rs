//! Theme definition parser.
//!
//! Reads shadcn-style CSS (`:root { --primary: oklch(...); }`) and resolves
//! every custom property whose value is a recognized color to hex.

use crate::color::to_hex;
use crate::error::ThemeError;
use crate::types::ThemeColors;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_ROOT_BLOCK: Regex = Regex::new(r"(?s):root\s*\{([^}]+)\}").unwrap();
    static ref RE_DECLARATION: Regex = Regex::new(r"--(\w+(?:-\w+)*):\s*(.+);").unwrap();
}

/// Resolve the color custom properties of a theme definition.
///
/// Only the first `:root` block is read when one exists; otherwise every line
/// of `css` is considered. Declarations whose value is not an oklch, hsl or hex
/// color are skipped. Fails only when nothing resolves.
pub fn extract_theme_colors(css: &str) -> Result<ThemeColors, ThemeError> {
    let content = RE_ROOT_BLOCK
        .captures(css)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(css);

    let mut colors = ThemeColors::new();
    for line in content.lines() {
        let Some(caps) = RE_DECLARATION.captures(line) else {
            continue;
        };
        let name = &caps[1];
        let value = caps[2].trim();
        match to_hex(value) {
            Some(hex) => {
                colors.insert(name.to_string(), hex);
            }
            None => tracing::trace!("skipping --{}: {}", name, value),
        }
    }

    if colors.is_empty() {
        return Err(ThemeError::NoColors);
    }
    tracing::debug!("extracted {} theme colors", colors.len());
    Ok(colors)
}
