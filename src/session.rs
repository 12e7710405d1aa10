//! Editing session: one imported SVG plus the color choices made on it.
//!
//! The transform itself stays a pure function; the session only keeps the
//! inputs together and recomputes derived values whenever one changes.

use crate::error::{ThemeError, TransformError};
use crate::format::{Formatter, JsxFormatter};
use crate::parser::{extract_colors, extract_theme_colors};
use crate::recolor::{preview_color_map, recolor, replace_color};
use crate::transform::transform_with;
use crate::types::{ColorMap, ThemeColors, ThemeMapping, TransformSettings, KEEP_ORIGINAL};

#[derive(Debug, Clone)]
pub struct Session {
    original: String,
    current: String,
    colors: Vec<String>,
    theme_colors: ThemeColors,
    theme_mapping: ThemeMapping,
    color_map: ColorMap,
}

impl Session {
    pub fn new(markup: impl Into<String>) -> Self {
        let original = markup.into();
        let colors = extract_colors(&original);
        tracing::debug!("detected {} colors", colors.len());
        Self {
            current: original.clone(),
            original,
            colors,
            theme_colors: ThemeColors::new(),
            theme_mapping: ThemeMapping::new(),
            color_map: ColorMap::new(),
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Preview markup with the current color choices applied.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Colors detected in the original markup.
    ///
    /// Detected once on import and not refreshed by preview edits, since
    /// mappings are keyed by the original colors.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn theme_colors(&self) -> &ThemeColors {
        &self.theme_colors
    }

    pub fn theme_mapping(&self) -> &ThemeMapping {
        &self.theme_mapping
    }

    pub fn color_map(&self) -> &ColorMap {
        &self.color_map
    }

    /// Manually replace one color in the preview.
    pub fn set_color(&mut self, old: &str, new: &str) {
        self.color_map.insert(old.to_string(), new.to_string());
        self.current = replace_color(&self.current, old, new);
    }

    /// Resolve a theme definition. Returns the number of colors found.
    pub fn load_theme(&mut self, css: &str) -> Result<usize, ThemeError> {
        self.theme_colors = extract_theme_colors(css)?;
        Ok(self.theme_colors.len())
    }

    /// Map an SVG color onto a theme token, or back to itself with
    /// [`KEEP_ORIGINAL`].
    pub fn map_theme_color(&mut self, color: &str, token: &str) {
        if token == KEEP_ORIGINAL {
            self.theme_mapping.shift_remove(color);
            self.color_map.shift_remove(color);
        } else {
            self.theme_mapping.insert(color.to_string(), token.to_string());
            let mut preview = preview_color_map(&self.theme_mapping, &self.theme_colors);
            match preview.shift_remove(color) {
                Some(hex) => {
                    self.color_map.insert(color.to_string(), hex);
                }
                None => {
                    self.color_map.shift_remove(color);
                }
            }
        }
        self.current = recolor(&self.original, &self.color_map);
    }

    /// Drop the preview edits.
    pub fn reset(&mut self) {
        self.current = self.original.clone();
    }

    /// Transform the original markup with the theme mapping applied.
    pub fn transform(&self, settings: &TransformSettings) -> Result<String, TransformError> {
        self.transform_with(settings, &JsxFormatter::default())
    }

    pub fn transform_with(
        &self,
        settings: &TransformSettings,
        formatter: &dyn Formatter,
    ) -> Result<String, TransformError> {
        transform_with(settings, &self.original, &self.theme_mapping, formatter)
    }

    /// Output text for display: the transform result, or the original markup
    /// when the transform fails.
    pub fn output(&self, settings: &TransformSettings) -> String {
        self.output_with(settings, &JsxFormatter::default())
    }

    pub fn output_with(&self, settings: &TransformSettings, formatter: &dyn Formatter) -> String {
        match self.transform_with(settings, formatter) {
            Ok(out) => out,
            Err(e) => {
                tracing::warn!("transform failed, showing original: {}", e);
                self.original.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SVG: &str = r##"<svg><path fill="#f00" stroke="#00f"/><path fill="currentColor"/></svg>"##;
    const THEME: &str = ":root {\n  --primary: #e11d48;\n  --secondary: #2563eb;\n}";

    #[test]
    fn test_new_detects_colors() {
        let session = Session::new(SVG);
        assert_eq!(session.colors(), ["#f00", "#00f"]);
        assert_eq!(session.current(), SVG);
    }

    #[test]
    fn test_set_color_and_reset() {
        let mut session = Session::new(SVG);
        session.set_color("#f00", "#0f0");
        assert!(session.current().contains(r##"fill="#0f0""##));
        assert_eq!(session.original(), SVG);

        session.reset();
        assert_eq!(session.current(), SVG);
    }

    #[test]
    fn test_theme_mapping_drives_preview_and_output() {
        let mut session = Session::new(SVG);
        assert_eq!(session.load_theme(THEME), Ok(2));

        session.map_theme_color("#f00", "primary");
        assert!(session.current().contains(r##"fill="#e11d48""##));

        let out = session.transform(&TransformSettings::none()).unwrap();
        assert!(out.contains(r#"fill="hsl(var(--primary))""#));
        assert!(out.contains(r##"stroke="#00f""##));
    }

    #[test]
    fn test_keep_original_clears_mapping() {
        let mut session = Session::new(SVG);
        session.load_theme(THEME).unwrap();
        session.map_theme_color("#f00", "primary");
        session.map_theme_color("#f00", KEEP_ORIGINAL);

        assert!(session.theme_mapping().is_empty());
        assert!(session.color_map().is_empty());
        assert_eq!(session.current(), SVG);
    }

    #[test]
    fn test_output_falls_back_to_original() {
        let session = Session::new(r#"<?xml version="1.0"?><svg/>"#);
        let out = session.output(&TransformSettings::default());
        assert_eq!(out, session.original());

        let invalid = Session::new("<svg>");
        assert_eq!(invalid.output(&TransformSettings::default()), "<svg>");

        let styled = Session::new("<svg><style>.a{fill:red}</style></svg>");
        assert_eq!(styled.output(&TransformSettings::default()), styled.original());
    }

    #[test]
    fn test_colors_track_original_markup() {
        let mut session = Session::new(SVG);
        session.set_color("#f00", "#0f0");
        assert_eq!(session.colors(), ["#f00", "#00f"]);

        session.load_theme(THEME).unwrap();
        session.map_theme_color("#00f", "secondary");
        assert_eq!(session.colors(), ["#f00", "#00f"]);
    }
}
