// crates/els-vcf/src/builder/mod.rs

//! Provides functionality to encode `VcfDocument` structs into VCF XML.
//!
//! The public `types` are first converted into the internal element tree
//! (`model::XmlDocument`), which is then written out with `quick-xml`.

mod lights;
mod patterns;
mod sounds;
mod statics;

use crate::error::VcfError;
use crate::model::{Element, XmlDocument};
use crate::naming::StaticTagStyle;
use crate::resolver::{ROOT_ELEMENT, Section};
use crate::types::VcfDocument;
use alloc::string::String;
use alloc::vec;
use log::debug;

/// The two comments written ahead of `<vcfroot>`.
pub const LEADING_COMMENTS: [&str; 2] = [
    " THIS FILE WAS GENERATED BY THE MISS ELS VCF CONFIGURATOR ",
    " ELS VEHICLE CONFIGURATION FILE ",
];

/// Options controlling how a `VcfDocument` is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Spelling of `<STATIC>` child tags.
    pub static_tags: StaticTagStyle,
    /// Spaces per nesting level, or `None` for compact output.
    pub indent: Option<usize>,
    /// Whether to write the generator comments ahead of the root.
    pub include_comments: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            static_tags: StaticTagStyle::Legacy,
            indent: Some(2),
            include_comments: true,
        }
    }
}

/// Serializes a `VcfDocument` into a VCF XML string using the default
/// [`EncodeOptions`].
///
/// # Errors
/// Returns a `VcfError` if the XML writer fails.
pub fn save_vcf_to_string(document: &VcfDocument) -> Result<String, VcfError> {
    save_vcf_to_string_with(document, &EncodeOptions::default())
}

/// Serializes a `VcfDocument` into a VCF XML string.
///
/// # Arguments
/// * `document` - The decoded or hand-built document to write.
/// * `options` - Tag spelling and layout settings.
///
/// # Errors
/// Returns a `VcfError` if the XML writer fails.
pub fn save_vcf_to_string_with(
    document: &VcfDocument,
    options: &EncodeOptions,
) -> Result<String, VcfError> {
    build_vcf_document(document, options).to_xml_string(options.indent)
}

/// Converts a `VcfDocument` into the VCF element tree.
///
/// This never fails: every well-typed document has an XML form.
pub fn build_vcf_document(document: &VcfDocument, options: &EncodeOptions) -> XmlDocument {
    // 1. Root with document metadata
    let mut root = Element::new(ROOT_ELEMENT);
    root.set_attribute("Description", document.description.as_str());
    root.set_attribute("Author", document.author.as_str());

    // 2. Sections, always all four and in this order
    root.push_child(lights::build_light_section(
        Section::LightOverride.tag(),
        &document.light_channels,
    ));
    root.push_child(statics::build_static_section(
        Section::Static.tag(),
        &document.static_labels,
        options.static_tags,
    ));
    root.push_child(sounds::build_sound_section(
        Section::Sounds.tag(),
        &document.sound_options,
        document.use_server_sirens,
    ));
    root.push_child(patterns::build_pattern_section(Section::Pattern.tag(), document));

    debug!(
        "Encoded VCF with {} patterns and {} flashes",
        document.patterns.len(),
        document.flashes.len()
    );

    let comments = if options.include_comments {
        LEADING_COMMENTS.iter().map(|c| String::from(*c)).collect()
    } else {
        vec![]
    };

    XmlDocument { comments, root }
}
