//! React function-component output

/// Component template. `CODE` is replaced by the markup.
pub const REACT_TEMPLATE: &str = "const svg = () => {\nCODE\n}\n";

const XLINK_NAMESPACE: &str = r#"xmlns:xlink="http://www.w3.org/1999/xlink""#;

/// Rename `class=` to `className=`, drop the XLink namespace declaration and
/// wrap the markup in [`REACT_TEMPLATE`].
pub fn wrap_component(markup: &str) -> String {
    let markup = markup
        .replace("class=", "className=")
        .replace(XLINK_NAMESPACE, "");
    REACT_TEMPLATE.replacen("CODE", &markup, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_component() {
        let out = wrap_component(r#"<svg class="a"><g class="b"/></svg>"#);
        assert_eq!(
            out,
            "const svg = () => {\n<svg className=\"a\"><g className=\"b\"/></svg>\n}\n"
        );
    }

    #[test]
    fn test_xlink_namespace_removed() {
        let out = wrap_component(
            r##"<svg xmlns:xlink="http://www.w3.org/1999/xlink"><use xlink:href="#a"/></svg>"##,
        );
        assert!(!out.contains("xmlns:xlink"));
        assert!(out.contains(r##"xlink:href="#a""##));
    }

    #[test]
    fn test_markup_containing_placeholder() {
        let out = wrap_component("<text>CODE</text>");
        assert_eq!(out, "const svg = () => {\n<text>CODE</text>\n}\n");
    }
}
