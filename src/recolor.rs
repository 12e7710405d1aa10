//! Live-preview recoloring.
//!
//! Preview edits always start again from the original markup so that
//! switching a color back restores it exactly.

use crate::types::{ColorMap, ThemeColors, ThemeMapping};

/// Replace every literal occurrence of `old` with `new`.
pub fn replace_color(markup: &str, old: &str, new: &str) -> String {
    if old.is_empty() {
        return markup.to_string();
    }
    markup.replace(old, new)
}

/// Apply every entry of `color_map` to `original`, in insertion order.
pub fn recolor(original: &str, color_map: &ColorMap) -> String {
    color_map
        .iter()
        .fold(original.to_string(), |markup, (old, new)| replace_color(&markup, old, new))
}

/// Resolve a theme mapping to concrete hex colors for preview.
///
/// Tokens missing from `theme_colors` are skipped.
pub fn preview_color_map(theme_mapping: &ThemeMapping, theme_colors: &ThemeColors) -> ColorMap {
    theme_mapping
        .iter()
        .filter_map(|(color, token)| match theme_colors.get(token) {
            Some(hex) => Some((color.clone(), hex.clone())),
            None => {
                tracing::debug!("theme token `{}` is not defined, keeping {}", token, color);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_color_is_literal() {
        let out = replace_color(r#"<g fill="rgb(0,0,0)"/>"#, "rgb(0,0,0)", "#111");
        assert_eq!(out, r##"<g fill="#111"/>"##);
        assert_eq!(replace_color("<g/>", "", "#111"), "<g/>");
    }

    #[test]
    fn test_recolor_from_original() {
        let mut map = ColorMap::new();
        map.insert("#f00".into(), "#0f0".into());
        map.insert("#00f".into(), "#ff0".into());
        let out = recolor(r##"<g fill="#f00" stroke="#00f"/>"##, &map);
        assert_eq!(out, r##"<g fill="#0f0" stroke="#ff0"/>"##);
    }

    #[test]
    fn test_preview_color_map() {
        let mut mapping = ThemeMapping::new();
        mapping.insert("#f00".into(), "primary".into());
        mapping.insert("#00f".into(), "missing".into());
        let mut colors = ThemeColors::new();
        colors.insert("primary".into(), "#e11d48".into());

        let preview = preview_color_map(&mapping, &colors);
        assert_eq!(preview.len(), 1);
        assert_eq!(preview.get("#f00").map(String::as_str), Some("#e11d48"));
    }
}
