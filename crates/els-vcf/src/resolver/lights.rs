// crates/els-vcf/src/resolver/lights.rs

use super::utils::{flag, optional_attribute};
use crate::model::Element;
use crate::naming;
use crate::types::{ChannelKind, ChannelRef, LightChannel};
use alloc::vec::Vec;
use log::{trace, warn};

/// Resolves the children of `<EOVERRIDE>` into light channels.
///
/// Extra channels come first, then misc channels, each group in document
/// order. Elements whose tag is not a valid channel tag are skipped.
pub(super) fn resolve_light_channels(section: &Element) -> Vec<LightChannel> {
    let channels: Vec<(ChannelRef, &Element)> = section
        .children
        .iter()
        .filter_map(|element| match naming::id_from_tag(&element.name) {
            Some(channel) => Some((channel, element)),
            None => {
                warn!("Skipping <{}> in EOVERRIDE: not a light channel tag", element.name);
                None
            }
        })
        .collect();

    [ChannelKind::Extra, ChannelKind::Misc]
        .into_iter()
        .flat_map(|kind| {
            channels
                .iter()
                .filter(move |(channel, _)| channel.kind() == kind)
        })
        .map(|&(channel, element)| resolve_light_channel(channel, element))
        .collect()
}

fn resolve_light_channel(channel: ChannelRef, element: &Element) -> LightChannel {
    trace!("Resolving light channel {:?} from <{}>", channel, element.name);
    LightChannel {
        channel,
        enabled: flag(element, "IsElsControlled"),
        allow_env_light: flag(element, "AllowEnvLight"),
        color: optional_attribute(element, "Color"),
    }
}
