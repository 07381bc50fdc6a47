// crates/els-vcf/src/builder/patterns.rs

use crate::model::Element;
use crate::types::{Flash, VcfDocument};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::warn;

/// Tag written for every flash step.
const FLASH_TAG: &str = "Flash";

/// Builds `<PATTERN>`, nesting each pattern's flashes under it by name.
pub(super) fn build_pattern_section(tag: &str, document: &VcfDocument) -> Element {
    let mut section = Element::new(tag);
    for pattern in &document.patterns {
        let mut element = Element::new(pattern.name.as_str());
        element.set_flag("IsEmergency", pattern.is_emergency);
        element.set_flag("FlashHighBeam", pattern.flash_high_beam);
        element.set_flag("EnableWarningBeep", pattern.enable_warning_beep);

        for flash in document.flashes_for(&pattern.name) {
            element.push_child(build_flash(flash));
        }
        section.push_child(element);
    }

    let orphans = document
        .flashes
        .iter()
        .filter(|f| document.pattern(&f.pattern_name).is_none())
        .count();
    if orphans > 0 {
        warn!("Dropped {} flashes that reference no pattern", orphans);
    }

    section
}

fn build_flash(flash: &Flash) -> Element {
    let mut element = Element::new(FLASH_TAG);

    if flash.duration_ms != 0 {
        element.set_attribute("Duration", flash.duration_ms.to_string());
    }

    if !flash.extra_ids.is_empty() {
        let mut extras = flash.extra_ids.clone();
        extras.sort_unstable();
        element.set_attribute("Extras", join(extras.iter().map(ToString::to_string)));
    }

    if !flash.misc_ids.is_empty() {
        let mut miscs: Vec<&str> = flash.misc_ids.iter().map(String::as_str).collect();
        miscs.sort_unstable();
        element.set_attribute("Miscs", miscs.join(","));
    }

    element
}

fn join(pieces: impl Iterator<Item = String>) -> String {
    pieces.collect::<Vec<_>>().join(",")
}
