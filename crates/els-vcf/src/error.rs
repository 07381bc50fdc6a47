// crates/els-vcf/src/error.rs

use alloc::fmt;
use alloc::string::FromUtf8Error;
use core::str::Utf8Error;
use quick_xml::Error as XmlError;
use quick_xml::events::attributes::AttrError;

/// Errors that can occur during VCF decoding or encoding.
///
/// Malformed attribute *values* (a non-numeric `Duration`, an unparsable
/// channel tag) are never errors; they fall back to defaults and are logged.
#[derive(Debug)]
pub enum VcfError {
    /// The input is not well-formed XML (e.g., mismatched or unclosed tags).
    XmlParsing(XmlError),

    /// An element carried syntactically broken attributes.
    XmlAttribute(AttrError),

    /// An error from the underlying `quick-xml` writer.
    XmlWriting(XmlError),

    /// A tag name, attribute or the generated output was not valid UTF-8.
    InvalidUtf8(Utf8Error),

    /// A required element was missing: the `vcfroot` root or one of the
    /// `EOVERRIDE`, `STATIC`, `SOUNDS` and `PATTERN` sections.
    MissingElement { element: &'static str },
}

impl From<XmlError> for VcfError {
    fn from(e: XmlError) -> Self {
        VcfError::XmlParsing(e)
    }
}

impl From<AttrError> for VcfError {
    fn from(e: AttrError) -> Self {
        VcfError::XmlAttribute(e)
    }
}

impl From<Utf8Error> for VcfError {
    fn from(e: Utf8Error) -> Self {
        VcfError::InvalidUtf8(e)
    }
}

impl From<FromUtf8Error> for VcfError {
    fn from(e: FromUtf8Error) -> Self {
        VcfError::InvalidUtf8(e.utf8_error())
    }
}

impl fmt::Display for VcfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VcfError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            VcfError::XmlAttribute(e) => write!(f, "XML attribute error: {}", e),
            VcfError::XmlWriting(e) => write!(f, "XML writing error: {}", e),
            VcfError::InvalidUtf8(e) => write!(f, "Invalid UTF-8: {}", e),
            VcfError::MissingElement { element } => {
                write!(f, "Missing required XML element: {}", element)
            }
        }
    }
}

impl core::error::Error for VcfError {}
