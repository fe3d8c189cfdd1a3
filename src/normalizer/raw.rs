//! Loose document model for feed markup.
//!
//! The feed is read into a small element tree first. Fields whose shape
//! varies between feeds are then surfaced as tagged unions ([`OneOrMany`],
//! [`RawLink`]) so the normalizer can flatten them in one place.

use html_escape::decode_html_entities;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::DecodeError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
    pub text: String,
}

impl Element {
    fn open(start: &BytesStart<'_>) -> Result<Self, DecodeError> {
        let name = utf8(start.local_name().as_ref())?.to_string();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| DecodeError::Malformed(e.to_string()))?;
            let key = utf8(attr.key.local_name().as_ref())?.to_string();
            let value = decode_html_entities(utf8(&attr.value)?).into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child elements named `name`, shaped as the feed presented them.
    pub fn field(&self, name: &str) -> Option<OneOrMany<&Element>> {
        let mut found: Vec<&Element> = self.children.iter().filter(|c| c.name == name).collect();
        match found.len() {
            0 => None,
            1 => found.pop().map(OneOrMany::One),
            _ => Some(OneOrMany::Many(found)),
        }
    }

    /// Text of the first child named `name`.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.field(name)
            .and_then(|f| f.into_vec().into_iter().next())
            .map(|el| el.text.as_str())
    }
}

/// A field that may appear once or repeatedly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

/// A `link` field, either bare text or an element carrying an `href`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawLink {
    Text(String),
    Attributed { href: Option<String> },
}

impl RawLink {
    fn from_element(el: &Element) -> Self {
        if el.attributes.is_empty() {
            RawLink::Text(el.text.clone())
        } else {
            RawLink::Attributed {
                href: el.attribute("href").map(String::from),
            }
        }
    }

    pub fn into_href(self) -> String {
        match self {
            RawLink::Text(text) => text,
            RawLink::Attributed { href } => href.unwrap_or_default(),
        }
    }
}

/// One `entry` before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub link: Option<RawLink>,
}

impl RawEntry {
    pub fn from_element(el: &Element) -> Self {
        let link = el
            .field("link")
            .and_then(|links| links.into_vec().into_iter().next())
            .map(RawLink::from_element);

        Self {
            title: el.child_text("title").map(String::from),
            summary: el.child_text("summary").map(String::from),
            link,
        }
    }
}

/// Parse `input` into its root element.
///
/// Fails on anything that is not a single well-formed XML document.
pub fn parse_document(input: &str) -> Result<Element, DecodeError> {
    let mut reader = Reader::from_str(input);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| DecodeError::Malformed(e.to_string()))?;

        match event {
            Event::Start(start) => stack.push(Element::open(&start)?),
            Event::Empty(start) => {
                let el = Element::open(&start)?;
                attach(&mut stack, &mut root, el)?;
            }
            Event::End(_) => {
                let mut el = stack
                    .pop()
                    .ok_or_else(|| DecodeError::Malformed("unexpected closing tag".into()))?;
                el.text = el.text.trim().to_string();
                attach(&mut stack, &mut root, el)?;
            }
            Event::Text(text) => {
                let text = decode_html_entities(utf8(&text)?).into_owned();
                push_text(&mut stack, &text)?;
            }
            Event::CData(data) => {
                let text = utf8(&data)?.to_string();
                push_text(&mut stack, &text)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype.
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(DecodeError::Malformed(format!(
            "unclosed element <{}>",
            open.name
        )));
    }

    root.ok_or_else(|| DecodeError::Malformed("document has no root element".into()))
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    el: Element,
) -> Result<(), DecodeError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(el);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(el);
            Ok(())
        }
        None => Err(DecodeError::Malformed(format!(
            "second root element <{}>",
            el.name
        ))),
    }
}

fn push_text(stack: &mut [Element], text: &str) -> Result<(), DecodeError> {
    match stack.last_mut() {
        Some(el) => {
            el.text.push_str(text);
            Ok(())
        }
        None if text.trim_start_matches('\u{feff}').trim().is_empty() => Ok(()),
        None => Err(DecodeError::Malformed("text outside of root element".into())),
    }
}

fn utf8(bytes: &[u8]) -> Result<&str, DecodeError> {
    std::str::from_utf8(bytes).map_err(|e| DecodeError::Malformed(e.to_string()))
}
