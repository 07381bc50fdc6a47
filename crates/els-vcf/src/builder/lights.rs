// crates/els-vcf/src/builder/lights.rs

use crate::model::Element;
use crate::naming;
use crate::types::{ChannelKind, LightChannel};

/// Builds `<EOVERRIDE>`: all extra channels, then all misc channels.
pub(super) fn build_light_section(tag: &str, channels: &[LightChannel]) -> Element {
    let mut section = Element::new(tag);
    for kind in [ChannelKind::Extra, ChannelKind::Misc] {
        for channel in channels.iter().filter(|c| c.channel.kind() == kind) {
            section.push_child(build_light_channel(channel));
        }
    }
    section
}

fn build_light_channel(channel: &LightChannel) -> Element {
    let mut element = Element::new(naming::tag_from_id(channel.channel));
    element.set_flag("IsElsControlled", channel.enabled);

    if channel.allow_env_light {
        element.set_flag("AllowEnvLight", true);
        if let Some(color) = &channel.color {
            element.set_attribute("Color", color.as_str());
        }
    }
    element
}
