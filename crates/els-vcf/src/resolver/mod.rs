// crates/els-vcf/src/resolver/mod.rs

//! Maps the raw element tree onto the public `types` model.
//!
//! This module contains the `resolve_document` orchestrator and one
//! sub-module per VCF section.

use crate::error::VcfError;
use crate::model::Element;
use crate::types::VcfDocument;

// --- Sub-modules ---

mod lights;
mod patterns;
mod sounds;
mod statics;
mod utils;

pub(crate) use utils::{ROOT_ELEMENT, Section};

/// Resolves the final `VcfDocument` from the parsed root element.
///
/// Every required section is looked up before any of them is resolved, so a
/// missing section fails the decode before any work is done.
pub(crate) fn resolve_document(root: &Element) -> Result<VcfDocument, VcfError> {
    if root.name != ROOT_ELEMENT {
        return Err(VcfError::MissingElement {
            element: ROOT_ELEMENT,
        });
    }

    let lights_section = utils::find_section(root, Section::LightOverride)?;
    let static_section = utils::find_section(root, Section::Static)?;
    let sounds_section = utils::find_section(root, Section::Sounds)?;
    let pattern_section = utils::find_section(root, Section::Pattern)?;

    let light_channels = lights::resolve_light_channels(lights_section);
    let static_labels = statics::resolve_static_labels(static_section);
    let sound_options = sounds::resolve_sound_options(sounds_section);
    let (patterns, flashes) = patterns::resolve_patterns(pattern_section);

    let mut document = VcfDocument {
        description: utils::attribute_or_empty(root, "Description"),
        author: utils::attribute_or_empty(root, "Author"),
        use_server_sirens: false,
        light_channels,
        static_labels,
        sound_options,
        patterns,
        flashes,
    };
    document.refresh_server_sirens();

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_tree;

    fn resolve(xml: &str) -> Result<VcfDocument, VcfError> {
        resolve_document(&parse_tree(xml).unwrap().unwrap())
    }

    #[test]
    fn test_resolve_root_attributes() {
        let doc = resolve(
            r#"<vcfroot Description="Pursuit" Author="Jane">
                 <EOVERRIDE/><STATIC/><SOUNDS/><PATTERN/>
               </vcfroot>"#,
        )
        .unwrap();
        assert_eq!(doc.description, "Pursuit");
        assert_eq!(doc.author, "Jane");
        assert!(!doc.use_server_sirens);
    }

    #[test]
    fn test_resolve_missing_root_attributes_are_empty() {
        let doc = resolve("<vcfroot><EOVERRIDE/><STATIC/><SOUNDS/><PATTERN/></vcfroot>").unwrap();
        assert_eq!(doc.description, "");
        assert_eq!(doc.author, "");
    }

    #[test]
    fn test_resolve_wrong_root_name() {
        let result = resolve("<config><EOVERRIDE/><STATIC/><SOUNDS/><PATTERN/></config>");
        assert!(matches!(
            result,
            Err(VcfError::MissingElement { element: "vcfroot" })
        ));
    }

    #[test]
    fn test_resolve_reports_first_missing_section() {
        let result = resolve("<vcfroot><EOVERRIDE/><SOUNDS/></vcfroot>");
        assert!(matches!(
            result,
            Err(VcfError::MissingElement { element: "STATIC" })
        ));
    }

    #[test]
    fn test_resolve_server_sirens_flag_is_derived() {
        let doc = resolve(
            r#"<vcfroot><EOVERRIDE/><STATIC/>
                 <SOUNDS>
                   <MainHorn AllowUse="true" AudioString="SIRENS_AIRHORN"/>
                   <SrnTone1 AllowUse="true" AudioString="VEHICLES_HORNS_SIREN_1" SoundSet="0"/>
                 </SOUNDS>
               <PATTERN/></vcfroot>"#,
        )
        .unwrap();
        assert!(doc.use_server_sirens);
    }
}
