// crates/els-vcf/src/resolver/sounds.rs

use super::utils::{flag, optional_attribute};
use crate::model::Element;
use crate::types::SoundOption;
use alloc::vec::Vec;

/// Resolves every child of `<SOUNDS>` into a sound option named after its tag.
pub(super) fn resolve_sound_options(section: &Element) -> Vec<SoundOption> {
    section
        .children
        .iter()
        .map(|element| SoundOption {
            name: element.name.clone(),
            allow_use: flag(element, "AllowUse"),
            audio_string: optional_attribute(element, "AudioString"),
            sound_set: optional_attribute(element, "SoundSet"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_tree;

    #[test]
    fn test_resolve_sound_options() {
        let section = parse_tree(
            r#"<SOUNDS>
                 <MainHorn AllowUse="true" AudioString="SIRENS_AIRHORN" SoundSet="0"/>
                 <ManTone1 AllowUse="false"/>
                 <SrnTone1/>
               </SOUNDS>"#,
        )
        .unwrap()
        .unwrap();

        let sounds = resolve_sound_options(&section);
        assert_eq!(sounds.len(), 3);

        assert_eq!(sounds[0].name, "MainHorn");
        assert!(sounds[0].allow_use);
        assert_eq!(sounds[0].audio_string.as_deref(), Some("SIRENS_AIRHORN"));
        assert_eq!(sounds[0].sound_set.as_deref(), Some("0"));

        assert_eq!(sounds[1].name, "ManTone1");
        assert!(!sounds[1].allow_use);
        assert_eq!(sounds[1].audio_string, None);

        assert_eq!(sounds[2].name, "SrnTone1");
        assert!(!sounds[2].allow_use);
        assert_eq!(sounds[2].sound_set, None);
    }
}
