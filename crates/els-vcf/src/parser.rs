// crates/els-vcf/src/parser.rs

use crate::error::VcfError;
use crate::model::Element;
use crate::resolver;
use crate::types::VcfDocument;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::{debug, warn};
use quick_xml::Reader;
use quick_xml::errors::IllFormedError;
use quick_xml::events::{BytesStart, Event};

/// Decodes a VCF XML string slice into a [`VcfDocument`].
///
/// # Arguments
/// * `xml_content` - A string slice containing the full VCF XML file.
///
/// # Errors
/// Returns `VcfError::MissingElement` if the `vcfroot` element or any of the
/// `EOVERRIDE`, `STATIC`, `SOUNDS` and `PATTERN` sections is absent, and an
/// XML error if the text is not well-formed. No partial document is returned.
pub fn load_vcf_from_str(xml_content: &str) -> Result<VcfDocument, VcfError> {
    // 1. Build the raw element tree.
    let root = parse_tree(xml_content)?.ok_or(VcfError::MissingElement {
        element: resolver::ROOT_ELEMENT,
    })?;

    // 2. Map the tree onto the public model.
    let document = resolver::resolve_document(&root)?;
    debug!(
        "Decoded VCF: {} lights, {} statics, {} sounds, {} patterns, {} flashes",
        document.light_channels.len(),
        document.static_labels.len(),
        document.sound_options.len(),
        document.patterns.len(),
        document.flashes.len()
    );
    Ok(document)
}

/// Reads `xml_content` into an element tree and returns its root element,
/// or `None` if the document contains no element at all.
///
/// Only the first top-level element is kept. Text, comments, processing
/// instructions and the declaration are skipped.
pub(crate) fn parse_tree(xml_content: &str) -> Result<Option<Element>, VcfError> {
    let mut reader = Reader::from_str(xml_content);
    reader.config_mut().trim_text(true);

    // Elements that are open, innermost last.
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                stack.push(start_element(e, &reader)?);
            }
            Event::Empty(ref e) => {
                let element = start_element(e, &reader)?;
                attach(element, &mut stack, &mut root);
            }
            Event::End(_) => {
                // quick-xml has already checked that the end tag matches.
                if let Some(element) = stack.pop() {
                    attach(element, &mut stack, &mut root);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(VcfError::XmlParsing(quick_xml::Error::IllFormed(
            IllFormedError::MissingEndTag(open.name),
        )));
    }

    Ok(root)
}

/// Creates an element (without children) from a start or empty tag.
fn start_element(tag: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<Element, VcfError> {
    let qname = tag.name();
    let name = core::str::from_utf8(qname.as_ref())?;
    let mut element = Element::new(name);

    for attr in tag.attributes() {
        let attr = attr?;
        let key = core::str::from_utf8(attr.key.as_ref())?.to_string();
        let value: String = attr.decode_and_unescape_value(reader.decoder())?.into_owned();
        element.attributes.push((key, value));
    }

    Ok(element)
}

/// Appends a finished element to its parent, or makes it the root.
fn attach(element: Element, stack: &mut [Element], root: &mut Option<Element>) {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        warn!("Ignoring extra top-level element <{}>", element.name);
    }
}
