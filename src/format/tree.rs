//! Element tree built from `quick-xml` events

use crate::error::FormatError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Whitespace-collapsed text, entities left escaped
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// Attribute name and raw (still escaped) value
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
    pub self_closing: bool,
}

impl Element {
    fn open(start: &BytesStart, self_closing: bool, position: u64) -> Result<Self, FormatError> {
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| FormatError::Syntax {
                position,
                message: e.to_string(),
            })?;
            attributes.push((
                lossy(attr.key.as_ref()).into_owned(),
                lossy(&attr.value).into_owned(),
            ));
        }

        Ok(Self {
            name: lossy(start.name().as_ref()).into_owned(),
            attributes,
            children: Vec::new(),
            self_closing,
        })
    }
}

fn lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Parse markup holding exactly one root element.
pub fn parse_tree(markup: &str) -> Result<Element, FormatError> {
    let mut reader = Reader::from_str(markup);
    let mut stack: Vec<Element> = Vec::new();
    let mut roots: Vec<Element> = Vec::new();
    let mut text = String::new();

    loop {
        let position = reader.buffer_position() as u64;
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => {
                return Err(FormatError::Syntax {
                    position: reader.error_position() as u64,
                    message: e.to_string(),
                })
            }
        };

        match event {
            Event::Start(e) => {
                flush_text(&mut text, &mut stack, position)?;
                stack.push(Element::open(&e, false, position)?);
            }
            Event::Empty(e) => {
                flush_text(&mut text, &mut stack, position)?;
                let element = Element::open(&e, true, position)?;
                attach(element, &mut stack, &mut roots);
            }
            Event::End(_) => {
                flush_text(&mut text, &mut stack, position)?;
                let element = stack.pop().ok_or_else(|| FormatError::Syntax {
                    position,
                    message: "unexpected closing tag".to_string(),
                })?;
                attach(element, &mut stack, &mut roots);
            }
            Event::Text(e) => text.push_str(&lossy(&e)),
            Event::GeneralRef(e) => {
                text.push('&');
                text.push_str(&lossy(&e));
                text.push(';');
            }
            Event::CData(_) => return Err(FormatError::Unsupported("CDATA section")),
            Event::Comment(_) => return Err(FormatError::Unsupported("comment")),
            Event::Decl(_) => return Err(FormatError::Unsupported("XML declaration")),
            Event::PI(_) => return Err(FormatError::Unsupported("processing instruction")),
            Event::DocType(_) => return Err(FormatError::Unsupported("doctype")),
            Event::Eof => break,
        }
    }

    let position = reader.buffer_position() as u64;
    if let Some(open) = stack.last() {
        return Err(FormatError::Syntax {
            position,
            message: format!("unclosed element <{}>", open.name),
        });
    }
    flush_text(&mut text, &mut stack, position)?;

    match roots.len() {
        0 => Err(FormatError::NoRoot),
        1 => Ok(roots.remove(0)),
        _ => Err(FormatError::MultipleRoots),
    }
}

fn flush_text(text: &mut String, stack: &mut [Element], position: u64) -> Result<(), FormatError> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    text.clear();
    if collapsed.is_empty() {
        return Ok(());
    }

    if let Some(c) = collapsed.chars().find(|c| matches!(c, '{' | '}' | '>')) {
        return Err(FormatError::Syntax {
            position,
            message: format!("`{}` in text must be escaped in JSX", c),
        });
    }

    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Text(collapsed));
            Ok(())
        }
        None => Err(FormatError::Syntax {
            position,
            message: "text outside the root element".to_string(),
        }),
    }
}

fn attach(element: Element, stack: &mut [Element], roots: &mut Vec<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None => roots.push(element),
    }
}
