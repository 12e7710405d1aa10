//! Parsers for SVG markup and theme definitions

pub mod colors;
pub mod theme;

pub use colors::extract_colors;
pub use theme::extract_theme_colors;

use roxmltree::{Document, ParsingOptions};

/// Parse markup as an XML document. DTDs are accepted since many exported
/// SVG files still carry a `<!DOCTYPE svg ...>` line.
pub fn parse_markup(text: &str) -> Result<Document<'_>, roxmltree::Error> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(text, options)
}

/// Check that `text` is well-formed XML.
///
/// Stricter than a bare well-formedness check: namespace prefixes must be
/// declared, and only the predefined XML entities (plus DTD-declared ones)
/// resolve, so HTML entities such as `&nbsp;` are rejected.
pub fn validate_markup(text: &str) -> Result<(), String> {
    parse_markup(text).map(|_| ()).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_markup() {
        assert!(validate_markup(r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"/></svg>"#).is_ok());
        assert!(validate_markup("<svg><path></svg>").is_err());
        assert!(validate_markup("<svg").is_err());
        assert!(validate_markup("").is_err());
    }

    #[test]
    fn test_validate_rejects_undeclared_names() {
        assert!(validate_markup(r##"<svg><use xlink:href="#a"/></svg>"##).is_err());
        assert!(validate_markup("<svg><text>a&nbsp;b</text></svg>").is_err());
        assert!(validate_markup("<svg><text>a&amp;b&#160;</text></svg>").is_ok());
        assert!(validate_markup(
            r##"<svg xmlns:xlink="http://www.w3.org/1999/xlink"><use xlink:href="#a"/></svg>"##
        )
        .is_ok());
    }

    #[test]
    fn test_validate_accepts_doctype() {
        let input = r#"<?xml version="1.0"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg xmlns="http://www.w3.org/2000/svg"/>"#;
        assert!(validate_markup(input).is_ok());
    }
}
