//! Transform pipeline - turns imported SVG markup into the final output text.
//!
//! Steps run in a fixed order, each gated by its setting:
//!   validate → theme substitution → remove ids → React → remove classes
//!   → remove sizing → format → trailing cleanup
//!
//! Every rewrite is textual. A color or attribute that appears inside an
//! unrelated string is rewritten too.

mod react;
mod rewrite;

pub use react::{wrap_component, REACT_TEMPLATE};
pub use rewrite::{
    remove_classes, remove_first_semicolon, remove_ids, remove_sizing, substitute_theme,
    theme_reference,
};

use crate::error::TransformError;
use crate::format::{Formatter, JsxFormatter};
use crate::parser::validate_markup;
use crate::types::{ThemeMapping, TransformSettings};

/// Run the pipeline with the built-in [`JsxFormatter`].
///
/// # Example
/// ```rust
/// use shadecn::{transform, ThemeMapping, TransformSettings};
///
/// let settings = TransformSettings::none();
/// let mut mapping = ThemeMapping::new();
/// mapping.insert("#ff0000".to_string(), "primary".to_string());
///
/// let out = transform(&settings, r##"<svg fill="#ff0000"/>"##, &mapping).unwrap();
/// assert_eq!(out, r#"<svg fill="hsl(var(--primary))"/>"#);
/// ```
pub fn transform(
    settings: &TransformSettings,
    markup: &str,
    theme_mapping: &ThemeMapping,
) -> Result<String, TransformError> {
    transform_with(settings, markup, theme_mapping, &JsxFormatter::default())
}

/// Run the pipeline with a caller-supplied formatter.
pub fn transform_with(
    settings: &TransformSettings,
    markup: &str,
    theme_mapping: &ThemeMapping,
    formatter: &dyn Formatter,
) -> Result<String, TransformError> {
    validate_markup(markup).map_err(TransformError::InvalidSvg)?;

    let mut out = markup.to_string();

    if !theme_mapping.is_empty() {
        tracing::trace!("applying {} theme mappings", theme_mapping.len());
        out = substitute_theme(&out, theme_mapping);
    }

    if settings.remove_ids {
        out = remove_ids(&out);
    }

    if settings.react {
        out = wrap_component(&out);
    }

    if settings.remove_classes {
        out = remove_classes(&out);
    }

    if settings.remove_sizing {
        out = remove_sizing(&out);
    }

    if settings.format {
        out = formatter.format(&out)?;
    }

    Ok(remove_first_semicolon(&out))
}
