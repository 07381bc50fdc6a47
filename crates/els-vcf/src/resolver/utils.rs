// crates/els-vcf/src/resolver/utils.rs

//! Utility functions for the resolver.

use crate::error::VcfError;
use crate::model::Element;
use alloc::string::{String, ToString};
use log::warn;

pub(crate) const ROOT_ELEMENT: &str = "vcfroot";

/// The four required sections under `<vcfroot>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    LightOverride,
    Static,
    Sounds,
    Pattern,
}

impl Section {
    pub(crate) fn tag(self) -> &'static str {
        match self {
            Section::LightOverride => "EOVERRIDE",
            Section::Static => "STATIC",
            Section::Sounds => "SOUNDS",
            Section::Pattern => "PATTERN",
        }
    }
}

/// Looks up a required section among the root's direct children.
pub(super) fn find_section(root: &Element, section: Section) -> Result<&Element, VcfError> {
    root.child(section.tag()).ok_or(VcfError::MissingElement {
        element: section.tag(),
    })
}

/// True iff the attribute is present and exactly `"true"`.
pub(super) fn flag(element: &Element, key: &str) -> bool {
    element.attribute(key) == Some("true")
}

pub(super) fn optional_attribute(element: &Element, key: &str) -> Option<String> {
    element.attribute(key).map(ToString::to_string)
}

pub(super) fn attribute_or_empty(element: &Element, key: &str) -> String {
    element.attribute(key).unwrap_or_default().to_string()
}

/// Parses a numeric attribute, falling back to `default` when it is absent
/// or not a number.
pub(super) fn numeric_attribute_or(element: &Element, key: &str, default: u32) -> u32 {
    match element.attribute(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(
                "<{}> has invalid {}=\"{}\", using {}",
                element.name, key, raw, default
            );
            default
        }),
    }
}
