// crates/els-vcf/src/builder/sounds.rs

use crate::model::Element;
use crate::types::SoundOption;

/// Builds `<SOUNDS>`. `SoundSet` is only written when the document uses
/// server sirens.
pub(super) fn build_sound_section(tag: &str, options: &[SoundOption], use_server_sirens: bool) -> Element {
    let mut section = Element::new(tag);
    for option in options {
        let mut element = Element::new(option.name.as_str());
        element.set_flag("AllowUse", option.allow_use);

        if option.allow_use {
            if let Some(audio_string) = &option.audio_string {
                element.set_attribute("AudioString", audio_string.as_str());
            }
            if use_server_sirens {
                if let Some(sound_set) = &option.sound_set {
                    element.set_attribute("SoundSet", sound_set.as_str());
                }
            }
        }
        section.push_child(element);
    }
    section
}
