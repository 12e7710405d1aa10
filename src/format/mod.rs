//! Output formatting.
//!
//! The pipeline only needs "text in, pretty text out, or failure", so the
//! formatter sits behind the [`Formatter`] trait. [`JsxFormatter`] is the
//! built-in implementation: it reads markup with `quick-xml`, prints it the
//! way a no-semicolon JSX printer would, and checks the result with the `oxc`
//! JSX parser.

mod printer;
mod tree;

pub use tree::{parse_tree, Element, Node};

use crate::error::FormatError;
use lazy_static::lazy_static;
use oxc::allocator::Allocator;
use oxc::parser::Parser;
use oxc::span::SourceType;
use printer::Printer;
use regex::Regex;

lazy_static! {
    static ref RE_COMPONENT: Regex =
        Regex::new(r"(?s)\A\s*const\s+([A-Za-z_$][\w$]*)\s*=\s*\(\)\s*=>\s*\{(.*)\}\s*\z").unwrap();
}

/// A pretty-printing service.
pub trait Formatter {
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

/// Formats SVG markup, bare or wrapped in a React arrow-function component.
#[derive(Debug, Clone)]
pub struct JsxFormatter {
    /// Maximum line width before an opening tag is split. Default: 80
    pub print_width: usize,
    /// Spaces per nesting level. Default: 2
    pub indent_width: usize,
}

impl Default for JsxFormatter {
    fn default() -> Self {
        Self {
            print_width: 80,
            indent_width: 2,
        }
    }
}

impl Formatter for JsxFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        let printer = Printer::new(self.print_width, self.indent_width);

        if let Some(caps) = RE_COMPONENT.captures(source) {
            let name = &caps[1];
            let root = parse_tree(&caps[2])?;
            tracing::trace!("formatting component `{}`", name);

            let mut out = format!("const {} = () => {{\n", name);
            printer.statement(&root, 1, &mut out);
            out.push_str("}\n");
            check_jsx(&out)?;
            return Ok(out);
        }

        let root = parse_tree(source)?;
        let mut out = String::new();
        printer.statement(&root, 0, &mut out);
        check_jsx(&out)?;
        Ok(out)
    }
}

/// Parse `source` as a JSX module and report the first error.
pub fn check_jsx(source: &str) -> Result<(), FormatError> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, SourceType::jsx()).parse();
    if let Some(error) = ret.errors.first() {
        return Err(FormatError::Jsx(error.to_string()));
    }
    Ok(())
}
