// crates/els-vcf/src/resolver/statics.rs

use crate::model::Element;
use crate::naming;
use crate::types::{ChannelKind, ChannelRef, StaticLabel};
use alloc::vec::Vec;
use log::warn;

/// Resolves the children of `<STATIC>` into static labels.
///
/// Extra labels come first, then misc labels. A label without a `Name`
/// attribute is named after its raw tag.
pub(super) fn resolve_static_labels(section: &Element) -> Vec<StaticLabel> {
    let labels: Vec<StaticLabel> = section
        .children
        .iter()
        .filter_map(|element| match naming::static_id_from_tag(&element.name) {
            Some(channel) => Some(resolve_static_label(channel, element)),
            None => {
                warn!("Skipping <{}> in STATIC: not a channel tag", element.name);
                None
            }
        })
        .collect();

    let (mut extras, miscs): (Vec<_>, Vec<_>) = labels
        .into_iter()
        .partition(|label| label.channel.kind() == ChannelKind::Extra);
    extras.extend(miscs);
    extras
}

fn resolve_static_label(channel: ChannelRef, element: &Element) -> StaticLabel {
    StaticLabel {
        channel,
        name: element
            .attribute("Name")
            .unwrap_or(element.name.as_str())
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_tree;

    #[test]
    fn test_resolve_static_labels() {
        let section = parse_tree(
            r#"<STATIC>
                 <MiscC Name="Takedowns"/>
                 <Extra01 Name="Front Lightbar"/>
                 <Extra11/>
                 <Spotlight Name="ignored"/>
               </STATIC>"#,
        )
        .unwrap()
        .unwrap();

        let labels = resolve_static_labels(&section);
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0].channel, ChannelRef::Extra(1));
        assert_eq!(labels[0].name, "Front Lightbar");
        assert_eq!(labels[1].channel, ChannelRef::Extra(11));
        assert_eq!(labels[1].name, "Extra11");
        assert_eq!(labels[2].channel, ChannelRef::Misc('C'));
        assert_eq!(labels[2].name, "Takedowns");
    }

    #[test]
    fn test_resolve_static_labels_accepts_uppercase_tags() {
        let section = parse_tree(r#"<STATIC><EXTRA2 Name="Rear"/><MISCD/></STATIC>"#)
            .unwrap()
            .unwrap();

        let labels = resolve_static_labels(&section);
        assert_eq!(labels[0].channel, ChannelRef::Extra(2));
        assert_eq!(labels[0].name, "Rear");
        assert_eq!(labels[1].channel, ChannelRef::Misc('D'));
        assert_eq!(labels[1].name, "MISCD");
    }
}
