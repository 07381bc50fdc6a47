// crates/els-vcf/src/builder/statics.rs

use crate::model::Element;
use crate::naming::{self, StaticTagStyle};
use crate::types::{ChannelKind, StaticLabel};

/// Builds `<STATIC>`: all extra labels, then all misc labels.
pub(super) fn build_static_section(
    tag: &str,
    labels: &[StaticLabel],
    style: StaticTagStyle,
) -> Element {
    let mut section = Element::new(tag);
    for kind in [ChannelKind::Extra, ChannelKind::Misc] {
        for label in labels.iter().filter(|l| l.channel.kind() == kind) {
            section.push_child(build_static_label(label, style));
        }
    }
    section
}

fn build_static_label(label: &StaticLabel, style: StaticTagStyle) -> Element {
    let label_tag = naming::static_tag(label.channel, style);
    let mut element = Element::new(label_tag.as_str());
    let name = if label.name.is_empty() {
        label_tag.as_str()
    } else {
        label.name.as_str()
    };
    element.set_attribute("Name", name);
    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChannelRef;
    use alloc::string::{String, ToString};
    use alloc::vec;

    #[test]
    fn test_build_static_section_groups_extras_first() {
        let labels = vec![
            StaticLabel {
                channel: ChannelRef::Misc('c'),
                name: String::new(),
            },
            StaticLabel {
                channel: ChannelRef::Extra(1),
                name: "Front".to_string(),
            },
        ];

        let section = build_static_section("STATIC", &labels, StaticTagStyle::Legacy);
        assert_eq!(section.children[0].name, "EXTRA1");
        assert_eq!(section.children[0].attribute("Name"), Some("Front"));
        assert_eq!(section.children[1].name, "MISCC");
        assert_eq!(section.children[1].attribute("Name"), Some("MISCC"));
    }

    #[test]
    fn test_build_static_section_channel_tags() {
        let labels = vec![StaticLabel {
            channel: ChannelRef::Extra(4),
            name: "Grille".to_string(),
        }];

        let section = build_static_section("STATIC", &labels, StaticTagStyle::Channel);
        assert_eq!(section.children[0].name, "Extra04");
    }
}
