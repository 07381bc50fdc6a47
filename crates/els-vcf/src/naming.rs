// crates/els-vcf/src/naming.rs

//! Maps channel identities to VCF element names and back.
//!
//! The VCF format has no id attribute: a channel's identity is spelled into
//! its tag. Light channels use `Extra` + a two-digit id (`Extra01`) and
//! `Misc` + a letter (`MiscA`). Static labels are written by existing tools
//! as `EXTRA` + the unpadded id (`EXTRA1`) and `MISC` + a letter (`MISCA`).

use crate::types::ChannelRef;
use alloc::format;
use alloc::string::String;
use serde::{Deserialize, Serialize};

pub const EXTRA_PREFIX: &str = "Extra";
pub const MISC_PREFIX: &str = "Misc";
pub const STATIC_EXTRA_PREFIX: &str = "EXTRA";
pub const STATIC_MISC_PREFIX: &str = "MISC";

/// Smallest and largest valid extra channel id.
pub const EXTRA_ID_RANGE: core::ops::RangeInclusive<u8> = 1..=99;

/// Selects how static label tags are spelled on encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StaticTagStyle {
    /// `EXTRA1` / `MISCA`: uppercase prefix, no padding. Matches files
    /// produced by existing configurators.
    #[default]
    Legacy,
    /// `Extra01` / `MiscA`: the same spelling as light channel tags.
    Channel,
}

// --- Encoding ---

/// `1` -> `Extra01`, `12` -> `Extra12`.
pub fn extra_tag(id: u8) -> String {
    format!("{}{:02}", EXTRA_PREFIX, id)
}

/// `'a'` -> `MiscA`.
pub fn misc_tag(id: char) -> String {
    format!("{}{}", MISC_PREFIX, id.to_ascii_uppercase())
}

/// Formats the light channel tag for `channel`.
pub fn tag_from_id(channel: ChannelRef) -> String {
    match channel {
        ChannelRef::Extra(id) => extra_tag(id),
        ChannelRef::Misc(id) => misc_tag(id),
    }
}

/// Formats the static label tag for `channel` in the given style.
pub fn static_tag(channel: ChannelRef, style: StaticTagStyle) -> String {
    match (style, channel) {
        (StaticTagStyle::Legacy, ChannelRef::Extra(id)) => format!("{}{}", STATIC_EXTRA_PREFIX, id),
        (StaticTagStyle::Legacy, ChannelRef::Misc(id)) => {
            format!("{}{}", STATIC_MISC_PREFIX, id.to_ascii_uppercase())
        }
        (StaticTagStyle::Channel, channel) => tag_from_id(channel),
    }
}

// --- Decoding ---

/// Parses a light channel tag (`Extra01`, `Extra12`, `MiscA`).
///
/// Returns `None` for tags with neither prefix, or whose suffix does not
/// yield a valid id.
pub fn id_from_tag(tag: &str) -> Option<ChannelRef> {
    if let Some(rest) = tag.strip_prefix(EXTRA_PREFIX) {
        extra_id_from_suffix(rest).map(ChannelRef::Extra)
    } else if let Some(rest) = tag.strip_prefix(MISC_PREFIX) {
        misc_id_from_suffix(rest).map(ChannelRef::Misc)
    } else {
        None
    }
}

/// Parses a static label tag.
///
/// Accepts the light channel spelling (`Extra01`, `MiscA`) as well as the
/// uppercase spelling the encoder writes in `Legacy` style (`EXTRA1`, `MISCA`).
pub fn static_id_from_tag(tag: &str) -> Option<ChannelRef> {
    if let Some(channel) = id_from_tag(tag) {
        return Some(channel);
    }
    if let Some(rest) = tag.strip_prefix(STATIC_EXTRA_PREFIX) {
        extra_id_from_suffix(rest).map(ChannelRef::Extra)
    } else if let Some(rest) = tag.strip_prefix(STATIC_MISC_PREFIX) {
        misc_id_from_suffix(rest).map(ChannelRef::Misc)
    } else {
        None
    }
}

/// Parses the longest trailing run of digits as an extra id.
fn extra_id_from_suffix(suffix: &str) -> Option<u8> {
    // ASCII digits are single bytes, so the split point is a char boundary.
    let digits_start = suffix.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    let digits = &suffix[digits_start..];
    if digits.is_empty() {
        return None;
    }
    // Strip leading zeros ourselves so "0000012" still fits in a u8.
    let significant = digits.trim_start_matches('0');
    let id = if significant.is_empty() {
        0
    } else {
        significant.parse::<u8>().ok()?
    };
    EXTRA_ID_RANGE.contains(&id).then_some(id)
}

/// Takes the single trailing uppercase letter as a misc id.
fn misc_id_from_suffix(suffix: &str) -> Option<char> {
    suffix.chars().last().filter(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_tag_zero_pads_single_digits() {
        assert_eq!(extra_tag(1), "Extra01");
        assert_eq!(extra_tag(9), "Extra09");
        assert_eq!(extra_tag(12), "Extra12");
        assert_eq!(extra_tag(99), "Extra99");
    }

    #[test]
    fn test_misc_tag_uppercases() {
        assert_eq!(misc_tag('A'), "MiscA");
        assert_eq!(misc_tag('k'), "MiscK");
    }

    #[test]
    fn test_id_from_tag_extra() {
        assert_eq!(id_from_tag("Extra01"), Some(ChannelRef::Extra(1)));
        assert_eq!(id_from_tag("Extra1"), Some(ChannelRef::Extra(1)));
        assert_eq!(id_from_tag("Extra12"), Some(ChannelRef::Extra(12)));
        assert_eq!(id_from_tag("Extra99"), Some(ChannelRef::Extra(99)));
    }

    #[test]
    fn test_id_from_tag_rejects_out_of_range_extras() {
        assert_eq!(id_from_tag("Extra"), None);
        assert_eq!(id_from_tag("Extra00"), None);
        assert_eq!(id_from_tag("Extra100"), None);
        assert_eq!(id_from_tag("Extra300"), None);
        assert_eq!(id_from_tag("ExtraX"), None);
    }

    #[test]
    fn test_id_from_tag_with_non_ascii_suffix() {
        assert_eq!(id_from_tag("Extra1é"), None);
        assert_eq!(id_from_tag("Extraé7"), Some(ChannelRef::Extra(7)));
        assert_eq!(id_from_tag("Miscé"), None);
        assert_eq!(static_id_from_tag("EXTRAé7"), Some(ChannelRef::Extra(7)));
        assert_eq!(static_id_from_tag("EXTRA1é"), None);
        assert_eq!(static_id_from_tag("MISCÉ"), None);
    }

    #[test]
    fn test_id_from_tag_misc() {
        assert_eq!(id_from_tag("MiscA"), Some(ChannelRef::Misc('A')));
        assert_eq!(id_from_tag("MiscZ"), Some(ChannelRef::Misc('Z')));
        assert_eq!(id_from_tag("Misca"), None);
        assert_eq!(id_from_tag("Misc"), None);
        assert_eq!(id_from_tag("Misc1"), None);
    }

    #[test]
    fn test_id_from_tag_is_case_sensitive_on_prefix() {
        assert_eq!(id_from_tag("EXTRA1"), None);
        assert_eq!(id_from_tag("MISCA"), None);
        assert_eq!(id_from_tag("Light01"), None);
    }

    #[test]
    fn test_tag_and_id_are_inverse_for_valid_ids() {
        for id in EXTRA_ID_RANGE {
            let channel = ChannelRef::Extra(id);
            assert_eq!(id_from_tag(&tag_from_id(channel)), Some(channel));
        }
        for id in 'A'..='Z' {
            let channel = ChannelRef::Misc(id);
            assert_eq!(id_from_tag(&tag_from_id(channel)), Some(channel));
        }
    }

    #[test]
    fn test_static_tag_styles() {
        assert_eq!(static_tag(ChannelRef::Extra(1), StaticTagStyle::Legacy), "EXTRA1");
        assert_eq!(static_tag(ChannelRef::Extra(12), StaticTagStyle::Legacy), "EXTRA12");
        assert_eq!(static_tag(ChannelRef::Misc('b'), StaticTagStyle::Legacy), "MISCB");
        assert_eq!(static_tag(ChannelRef::Extra(1), StaticTagStyle::Channel), "Extra01");
        assert_eq!(static_tag(ChannelRef::Misc('B'), StaticTagStyle::Channel), "MiscB");
    }

    #[test]
    fn test_static_id_from_tag_accepts_both_spellings() {
        assert_eq!(static_id_from_tag("Extra01"), Some(ChannelRef::Extra(1)));
        assert_eq!(static_id_from_tag("EXTRA1"), Some(ChannelRef::Extra(1)));
        assert_eq!(static_id_from_tag("EXTRA12"), Some(ChannelRef::Extra(12)));
        assert_eq!(static_id_from_tag("MiscC"), Some(ChannelRef::Misc('C')));
        assert_eq!(static_id_from_tag("MISCC"), Some(ChannelRef::Misc('C')));
        assert_eq!(static_id_from_tag("Siren"), None);
    }
}
