// crates/els-vcf/src/resolver/patterns.rs

use super::utils::{flag, numeric_attribute_or};
use crate::model::Element;
use crate::types::{Flash, Pattern};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::{debug, warn};

/// Duration used when a flash has no usable `Duration` attribute.
pub(crate) const DEFAULT_FLASH_DURATION_MS: u32 = 100;

/// Resolves the children of `<PATTERN>` into patterns and their flashes.
///
/// Every child of a pattern is a flash step, whatever its tag. Flash ids
/// are handed out 1, 2, 3, ... across the whole section in document order.
pub(super) fn resolve_patterns(section: &Element) -> (Vec<Pattern>, Vec<Flash>) {
    let mut patterns = Vec::with_capacity(section.children.len());
    let mut flashes = Vec::new();
    let mut next_flash_id: u32 = 1;

    for element in &section.children {
        patterns.push(Pattern {
            name: element.name.clone(),
            is_emergency: flag(element, "IsEmergency"),
            flash_high_beam: flag(element, "FlashHighBeam"),
            enable_warning_beep: flag(element, "EnableWarningBeep"),
        });

        for step in &element.children {
            flashes.push(resolve_flash(next_flash_id, &element.name, step));
            next_flash_id += 1;
        }
        debug!(
            "Pattern {} has {} flashes",
            element.name,
            element.children.len()
        );
    }

    (patterns, flashes)
}

fn resolve_flash(id: u32, pattern_name: &str, step: &Element) -> Flash {
    Flash {
        id,
        duration_ms: numeric_attribute_or(step, "Duration", DEFAULT_FLASH_DURATION_MS),
        extra_ids: step
            .attribute("Extras")
            .map(|raw| parse_extra_ids(pattern_name, raw))
            .unwrap_or_default(),
        misc_ids: step
            .attribute("Miscs")
            .map(parse_misc_ids)
            .unwrap_or_default(),
        pattern_name: pattern_name.to_string(),
    }
}

/// Splits `"1,5,12"` into `[1, 5, 12]`. Pieces that are not integers
/// (including empty ones) are dropped.
fn parse_extra_ids(pattern_name: &str, raw: &str) -> Vec<u8> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .filter_map(|piece| match piece.parse::<u8>() {
            Ok(id) => Some(id),
            Err(_) => {
                warn!("Dropping invalid extra id {:?} in pattern {}", piece, pattern_name);
                None
            }
        })
        .collect()
}

/// Splits `"A, C"` into `["A", "C"]`, keeping each trimmed piece as text.
fn parse_misc_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(ToString::to_string)
        .collect()
}
