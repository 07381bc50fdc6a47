// crates/els-vcf/src/model.rs

//! Internal XML element tree that both the parser and the builder work on.
//!
//! VCF element names are data (channel ids, sound and pattern names), so the
//! document is kept as a plain tree of named elements rather than a fixed
//! schema of structs.

use crate::error::VcfError;
use alloc::string::String;
use alloc::vec::Vec;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// A single XML element: tag, attributes in document order, child elements.
///
/// Text content is not part of the VCF grammar and is not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets `key` to `value`, replacing an existing attribute of that name.
    pub fn set_attribute(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((key.into(), value)),
        }
    }

    /// Sets `key` to the literal `"true"` or `"false"`.
    pub fn set_flag(&mut self, key: &str, value: bool) {
        self.set_attribute(key, if value { "true" } else { "false" });
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First direct child named `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }
}

/// A complete XML document: leading comments followed by a single root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    pub comments: Vec<String>,
    pub root: Element,
}

impl XmlDocument {
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Serializes the document, with an XML declaration, to a string.
    ///
    /// `indent` is the number of spaces per nesting level; `None` writes the
    /// document without any whitespace between elements.
    pub fn to_xml_string(&self, indent: Option<usize>) -> Result<String, VcfError> {
        let mut writer = match indent {
            Some(width) => Writer::new_with_indent(Vec::new(), b' ', width),
            None => Writer::new(Vec::new()),
        };

        write_event(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        for comment in &self.comments {
            // Comment bodies are written verbatim; quick-xml must not escape them.
            write_event(&mut writer, Event::Comment(BytesText::from_escaped(comment.as_str())))?;
        }
        write_element(&mut writer, &self.root)?;

        let buffer = writer.into_inner();
        Ok(String::from_utf8(buffer)?)
    }
}

// --- Helper Functions ---

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), VcfError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        // push_attribute escapes the value.
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        return write_event(writer, Event::Empty(start));
    }

    write_event(writer, Event::Start(start))?;
    for child in &element.children {
        write_element(writer, child)?;
    }
    write_event(writer, Event::End(BytesEnd::new(element.name.as_str())))
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), VcfError> {
    writer
        .write_event(event)
        .map_err(|e| VcfError::XmlWriting(quick_xml::Error::from(e)))
}
