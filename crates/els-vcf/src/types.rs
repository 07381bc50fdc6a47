// crates/els-vcf/src/types.rs

//! Public, ergonomic data structures for representing a decoded VCF file.

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

// --- Channel Identity ---

/// The two disjoint categories of controllable light channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelKind {
    /// Numbered channels (`Extra01` .. `Extra99`).
    Extra,
    /// Lettered channels (`MiscA` .. `MiscZ`).
    Misc,
}

/// Identity of a light channel: its kind together with its id.
///
/// Extra ids are integers in `1..=99`, misc ids are single uppercase letters.
/// Keeping the id inside the kind variant makes the two id domains disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelRef {
    Extra(u8),
    Misc(char),
}

impl ChannelRef {
    /// Returns which category this channel belongs to.
    pub fn kind(&self) -> ChannelKind {
        match self {
            ChannelRef::Extra(_) => ChannelKind::Extra,
            ChannelRef::Misc(_) => ChannelKind::Misc,
        }
    }
}

// --- Root VCF Structure ---

/// Represents a fully decoded VCF document.
///
/// The document owns every child collection. Patterns and their flashes live
/// in sibling flat lists and are joined by pattern name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VcfDocument {
    /// `Description` attribute of `<vcfroot>`, empty when absent.
    pub description: String,
    /// `Author` attribute of `<vcfroot>`, empty when absent.
    pub author: String,
    /// True iff any sound option carries a `SoundSet`. Computed by the
    /// decoder; the encoder only writes `SoundSet` attributes when it is set.
    pub use_server_sirens: bool,
    /// Children of `<EOVERRIDE>`.
    pub light_channels: Vec<LightChannel>,
    /// Children of `<STATIC>`.
    pub static_labels: Vec<StaticLabel>,
    /// Children of `<SOUNDS>`.
    pub sound_options: Vec<SoundOption>,
    /// Children of `<PATTERN>`.
    pub patterns: Vec<Pattern>,
    /// Flash steps of every pattern, in document order.
    pub flashes: Vec<Flash>,
}

impl VcfDocument {
    /// Looks up a pattern by its (unique) name.
    pub fn pattern(&self, name: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    /// Returns the flashes owned by `pattern_name`, in stored order.
    pub fn flashes_for<'a>(&'a self, pattern_name: &'a str) -> impl Iterator<Item = &'a Flash> + 'a {
        self.flashes
            .iter()
            .filter(move |f| f.pattern_name == pattern_name)
    }

    /// Looks up a light channel by its identity.
    pub fn light(&self, channel: ChannelRef) -> Option<&LightChannel> {
        self.light_channels.iter().find(|l| l.channel == channel)
    }

    /// Returns the id a newly created flash should receive.
    ///
    /// This is one past the highest id currently in use, so a freshly decoded
    /// document with `n` flashes yields `n + 1`.
    pub fn next_flash_id(&self) -> u32 {
        self.flashes.iter().map(|f| f.id).max().unwrap_or(0) + 1
    }

    /// True iff at least one sound option carries a `SoundSet`.
    pub fn has_sound_sets(&self) -> bool {
        self.sound_options.iter().any(|s| s.sound_set.is_some())
    }

    /// Recomputes `use_server_sirens` from the sound options.
    pub fn refresh_server_sirens(&mut self) {
        self.use_server_sirens = self.has_sound_sets();
    }
}

// --- Lights ---

/// One controllable light output (a child of `<EOVERRIDE>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightChannel {
    pub channel: ChannelRef,
    /// `IsElsControlled`
    pub enabled: bool,
    /// `AllowEnvLight`
    pub allow_env_light: bool,
    /// `Color`, only written when `allow_env_light` is set.
    pub color: Option<String>,
}

/// A human-readable name bound to a channel (a child of `<STATIC>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticLabel {
    pub channel: ChannelRef,
    /// `Name`. The decoder falls back to the raw tag when absent; the
    /// encoder falls back to the generated tag when empty.
    pub name: String,
}

// --- Sounds ---

/// One siren/sound toggle (a child of `<SOUNDS>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundOption {
    /// The element tag, which is also the identifier.
    pub name: String,
    /// `AllowUse`
    pub allow_use: bool,
    /// `AudioString`, only written when `allow_use` is set.
    pub audio_string: Option<String>,
    /// `SoundSet`, only written when `allow_use` and the document's
    /// `use_server_sirens` are set.
    pub sound_set: Option<String>,
}

// --- Patterns ---

/// A named flash sequence (a child of `<PATTERN>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// The element tag. Unique within a document.
    pub name: String,
    pub is_emergency: bool,
    pub flash_high_beam: bool,
    pub enable_warning_beep: bool,
}

/// One timed step belonging to a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    /// Synthetic handle, assigned 1, 2, 3, ... in document order on decode.
    ///
    /// Flash ids are not part of the VCF format. Two independent decodes of
    /// an edited file may assign different ids to the same step, so callers
    /// must not cache flashes by id across decodes.
    pub id: u32,
    /// `Duration` in milliseconds. Defaults to 100 when absent or invalid.
    pub duration_ms: u32,
    /// `Extras`: ids of the extra channels lit during this step.
    pub extra_ids: Vec<u8>,
    /// `Miscs`: ids of the misc channels lit during this step, kept as text.
    pub misc_ids: Vec<String>,
    /// Name of the owning [`Pattern`].
    pub pattern_name: String,
}
