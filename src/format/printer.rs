//! JSX-style printer for [`Element`] trees.
//!
//! Layout rules:
//!   - an opening tag that does not fit puts each attribute on its own line
//!   - element children always go on their own lines
//!   - an element holding only text stays on one line when it fits

use super::tree::{Element, Node};

/// No-semicolon style protects a statement that opens with `<`.
const STATEMENT_GUARD: &str = ";";

pub struct Printer {
    width: usize,
    indent: usize,
}

impl Printer {
    pub fn new(width: usize, indent: usize) -> Self {
        Self { width, indent }
    }

    /// Print `root` as an expression statement at nesting level `depth`.
    pub fn statement(&self, root: &Element, depth: usize, out: &mut String) {
        self.element(root, depth, STATEMENT_GUARD, out);
    }

    fn element(&self, el: &Element, depth: usize, prefix: &str, out: &mut String) {
        let pad = " ".repeat(depth * self.indent);
        let attrs: Vec<String> = el
            .attributes
            .iter()
            .map(|(name, value)| attribute(name, value))
            .collect();
        let lead = format!("{}{}<{}", pad, prefix, el.name);
        let tail = if el.self_closing { " />" } else { ">" };
        let flat = flat_tag(&lead, &attrs, tail);
        let broken = !attrs.is_empty() && width(&flat) > self.width;

        if el.self_closing {
            if broken {
                self.broken_tag(&lead, &attrs, &pad, "/>", out);
            } else {
                push_line(out, &flat);
            }
            return;
        }

        let close = format!("</{}>", el.name);

        if el.children.is_empty() {
            if broken {
                self.broken_tag(&lead, &attrs, &pad, &format!(">{}", close), out);
            } else {
                push_line(out, &format!("{}{}", flat, close));
            }
            return;
        }

        if let [Node::Text(text)] = el.children.as_slice() {
            let line = format!("{}{}{}", flat, text, close);
            if !broken && width(&line) <= self.width {
                push_line(out, &line);
                return;
            }
        }

        if broken {
            self.broken_tag(&lead, &attrs, &pad, ">", out);
        } else {
            push_line(out, &flat);
        }

        let child_pad = " ".repeat((depth + 1) * self.indent);
        for child in &el.children {
            match child {
                Node::Element(child) => self.element(child, depth + 1, "", out),
                Node::Text(text) => push_line(out, &format!("{}{}", child_pad, text)),
            }
        }

        push_line(out, &format!("{}{}", pad, close));
    }

    fn broken_tag(&self, lead: &str, attrs: &[String], pad: &str, tail: &str, out: &mut String) {
        push_line(out, lead);
        let attr_pad = format!("{}{}", pad, " ".repeat(self.indent));
        for attr in attrs {
            push_line(out, &format!("{}{}", attr_pad, attr));
        }
        push_line(out, &format!("{}{}", pad, tail));
    }
}

fn attribute(name: &str, value: &str) -> String {
    if value.contains('"') {
        format!("{}='{}'", name, value)
    } else {
        format!("{}=\"{}\"", name, value)
    }
}

fn flat_tag(lead: &str, attrs: &[String], tail: &str) -> String {
    let mut tag = lead.to_string();
    for attr in attrs {
        tag.push(' ');
        tag.push_str(attr);
    }
    tag.push_str(tail);
    tag
}

fn width(line: &str) -> usize {
    line.chars().count()
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
