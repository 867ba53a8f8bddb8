//! Card discovery and registration
//!
//! The machine driver does not parse device trees or implement a sound
//! framework. It asks a [`DeviceTree`] for the two phandles it needs,
//! builds a [`CardDescriptor`], and hands that to a [`SoundCardRegistry`].
//!
//! ```text
//! DeviceTree ──probe()──> CardDescriptor ──register()──> SoundCardRegistry
//!                              │
//!                              └── link_config ──> AudioLink::new
//! ```
//!
//! The CPU phandle names both the I2S controller and the PCM DMA platform.

use platform::{CodecRegisters, DaiFormat, SysclkControl};

use crate::audio::sequencer::AudioLink;
use crate::audio::topology::{Topology, CSYS_TOPOLOGY};
use crate::config::{LinkConfig, CARD_NAME, CSYS_LINK, PROP_AUDIO_CODEC, PROP_AUDIO_CPU};

/// Why the codec DAI name could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DaiNameError {
    /// The codec node exposes no DAI.
    NotFound,
    /// The codec driver has not bound yet; try again later.
    Defer,
}

/// Read-only view of the machine node in the device tree.
pub trait DeviceTree {
    /// Handle to a referenced node.
    type Node: Clone;

    /// Follow the phandle in `property`, `None` if it is missing or invalid.
    fn parse_phandle(&self, property: &'static str) -> Option<Self::Node>;

    /// DAI name the driver bound to `codec` registered.
    fn codec_dai_name(&self, codec: &Self::Node) -> Result<&'static str, DaiNameError>;
}

/// Card bring-up or registration failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A required device-tree property is missing or invalid.
    MissingProperty(&'static str),
    /// The codec DAI name could not be resolved.
    CodecDaiName,
    /// A dependency is not ready yet; the caller should retry later.
    ProbeDefer,
    /// The sound framework refused the card.
    Registration(i32),
}

impl ConfigError {
    /// `true` if probing should be retried rather than abandoned.
    pub const fn is_defer(&self) -> bool {
        matches!(self, Self::ProbeDefer)
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingProperty(name) => write!(f, "property '{name}' missing or invalid"),
            Self::CodecDaiName => write!(f, "unable to get codec DAI name"),
            Self::ProbeDefer => write!(f, "probe deferred"),
            Self::Registration(code) => write!(f, "sound card registration failed: {code}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// The card's single CPU ↔ codec link, as resolved from the device tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaiLinkDescriptor<N> {
    /// Link name.
    pub name: &'static str,
    /// PCM stream name.
    pub stream_name: &'static str,
    /// I2S controller node.
    pub cpu: N,
    /// PCM DMA platform node (same node as `cpu` on this board).
    pub platform: N,
    /// Codec node.
    pub codec: N,
    /// DAI name of the codec.
    pub codec_dai_name: &'static str,
    /// Link format.
    pub format: DaiFormat,
}

/// Everything the sound framework needs to register the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDescriptor<N> {
    /// Card name.
    pub name: &'static str,
    /// The one DAI link.
    pub link: DaiLinkDescriptor<N>,
    /// Widgets, routes and pin switches.
    pub topology: &'static Topology,
    /// Clocking and rate of the link, shared with the sequencer.
    pub link_config: &'static LinkConfig,
}

impl<N> CardDescriptor<N> {
    /// Number of DAI links. Always one on this card.
    pub const fn num_links(&self) -> usize {
        1
    }

    /// Build the lifecycle sequencer for this card's link.
    pub fn audio_link<Cpu, CodecDai, Codec>(
        &self,
        cpu_dai: Cpu,
        codec_dai: CodecDai,
        codec: Option<Codec>,
    ) -> AudioLink<'static, Cpu, CodecDai, Codec>
    where
        Cpu: SysclkControl,
        CodecDai: SysclkControl,
        Codec: CodecRegisters,
    {
        AudioLink::new(self.link_config, cpu_dai, codec_dai, codec)
    }
}

/// Resolve the card from the device tree.
pub fn probe<D: DeviceTree>(dt: &D) -> Result<CardDescriptor<D::Node>, ConfigError> {
    let cpu = required_phandle(dt, PROP_AUDIO_CPU)?;
    let codec = required_phandle(dt, PROP_AUDIO_CODEC)?;

    let codec_dai_name = dt.codec_dai_name(&codec).map_err(|e| match e {
        DaiNameError::Defer => {
            debug!("codec DAI not ready, deferring");
            ConfigError::ProbeDefer
        }
        DaiNameError::NotFound => {
            error!("unable to get codec DAI name");
            ConfigError::CodecDaiName
        }
    })?;

    Ok(CardDescriptor {
        name: CARD_NAME,
        link: DaiLinkDescriptor {
            name: CSYS_LINK.name,
            stream_name: CSYS_LINK.stream_name,
            platform: cpu.clone(),
            cpu,
            codec,
            codec_dai_name,
            format: CSYS_LINK.format,
        },
        topology: &CSYS_TOPOLOGY,
        link_config: &CSYS_LINK,
    })
}

fn required_phandle<D: DeviceTree>(dt: &D, property: &'static str) -> Result<D::Node, ConfigError> {
    dt.parse_phandle(property).ok_or_else(|| {
        error!("property '{}' missing or invalid", property);
        ConfigError::MissingProperty(property)
    })
}

/// Why the sound framework did not take the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistrationError {
    /// A component is not ready yet.
    Defer,
    /// Any other failure, with the framework's error code.
    Failed(i32),
}

/// The sound framework's card registration entry point.
pub trait SoundCardRegistry<N> {
    /// Register `card`.
    fn register_card(&mut self, card: &CardDescriptor<N>) -> Result<(), RegistrationError>;
}

/// Probe the device tree and register the resulting card.
///
/// Returns the registered descriptor so the caller can build the
/// [`AudioLink`] from it.
pub fn register<D, R>(dt: &D, registry: &mut R) -> Result<CardDescriptor<D::Node>, ConfigError>
where
    D: DeviceTree,
    R: SoundCardRegistry<D::Node>,
{
    let card = probe(dt)?;
    match registry.register_card(&card) {
        Ok(()) => {
            info!("registered card {}", card.name);
            Ok(card)
        }
        Err(RegistrationError::Defer) => Err(ConfigError::ProbeDefer),
        Err(RegistrationError::Failed(code)) => {
            error!("sound card registration failed {}", code);
            Err(ConfigError::Registration(code))
        }
    }
}
