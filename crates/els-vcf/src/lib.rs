// src/lib.rs

#![no_std]
#![doc = "Parses and generates ELS VCF (Vehicle Configuration File) documents."]
#![doc = ""]
#![doc = "This `no_std + alloc` library transcodes between the VCF XML format"]
#![doc = "(light channels, static labels, siren sounds and flash patterns of an"]
#![doc = "emergency-lighting rig) and a typed in-memory model."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `load_vcf_from_str`: Decoding a VCF XML string into a `VcfDocument`."]
#![doc = "- `build_vcf_document`: Encoding a `VcfDocument` into an `XmlDocument` tree."]
#![doc = "- `save_vcf_to_string`: Encoding a `VcfDocument` straight to VCF XML text."]

extern crate alloc;

// --- Crate Modules ---

mod builder;
mod error;
mod model;
pub mod naming;
mod parser;
mod resolver;
mod types;

// --- Public API Re-exports ---

pub use builder::{
    EncodeOptions, LEADING_COMMENTS, build_vcf_document, save_vcf_to_string,
    save_vcf_to_string_with,
};
pub use error::VcfError;
pub use model::{Element, XmlDocument};
pub use naming::StaticTagStyle;
pub use parser::load_vcf_from_str;
pub use types::{
    ChannelKind, ChannelRef, Flash, LightChannel, Pattern, SoundOption, StaticLabel, VcfDocument,
};
