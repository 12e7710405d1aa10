//! Textual rewrites applied by the pipeline

use crate::types::ThemeMapping;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_ID: Regex = Regex::new(r#"id="[^"]*""#).unwrap();
    static ref RE_CLASS_NAME: Regex = Regex::new(r#"className="[^"]*""#).unwrap();
    static ref RE_CLASS: Regex = Regex::new(r#"class="[^"]*""#).unwrap();
    static ref RE_WIDTH: Regex = Regex::new(r#"width="[^"]*""#).unwrap();
    static ref RE_HEIGHT: Regex = Regex::new(r#"height="[^"]*""#).unwrap();
}

/// CSS expression referencing a theme token, e.g. `hsl(var(--primary))`.
pub fn theme_reference(token: &str) -> String {
    format!("hsl(var(--{}))", token)
}

/// Replace every literal occurrence of each mapped color with its theme
/// reference, in mapping order.
pub fn substitute_theme(markup: &str, mapping: &ThemeMapping) -> String {
    let mut out = markup.to_string();
    for (color, token) in mapping.iter() {
        if color.is_empty() {
            continue;
        }
        out = out.replace(color, &theme_reference(token));
    }
    out
}

/// Remove every `id="..."` attribute.
pub fn remove_ids(markup: &str) -> String {
    RE_ID.replace_all(markup, "").into_owned()
}

/// Remove every `className="..."` and `class="..."` attribute.
pub fn remove_classes(markup: &str) -> String {
    let out = RE_CLASS_NAME.replace_all(markup, "");
    RE_CLASS.replace_all(&out, "").into_owned()
}

/// Remove the first `width="..."` and the first `height="..."`.
///
/// Only the first match of each is touched, so nested elements keep their
/// dimensions.
pub fn remove_sizing(markup: &str) -> String {
    let out = RE_WIDTH.replace(markup, "");
    RE_HEIGHT.replace(&out, "").into_owned()
}

/// Remove the first `;` in the text.
pub fn remove_first_semicolon(text: &str) -> String {
    text.replacen(';', "", 1)
}
