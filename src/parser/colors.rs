//! Color detection over `fill` / `stroke` attributes

use super::parse_markup;

/// Collect the distinct `fill` and `stroke` values of every element, in
/// document order.
///
/// `none` is never collected and `currentColor` is dropped from the result,
/// since it defers to the surrounding context. Values are kept exactly as
/// written. Markup that does not parse yields no colors.
pub fn extract_colors(markup: &str) -> Vec<String> {
    let doc = match parse_markup(markup) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::debug!("no colors detected, markup does not parse: {}", e);
            return Vec::new();
        }
    };

    let mut colors: Vec<String> = Vec::new();
    for node in doc.descendants().filter(|n| n.is_element()) {
        for attr in ["fill", "stroke"] {
            if let Some(value) = node.attribute(attr) {
                if !value.is_empty() && value != "none" && !colors.iter().any(|c| c == value) {
                    colors.push(value.to_string());
                }
            }
        }
    }

    colors.retain(|c| c != "currentColor");
    colors
}
