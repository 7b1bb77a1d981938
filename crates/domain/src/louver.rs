//! Vertical louver — encoded frontend positions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Encoded vertical louver position as understood by the driver's frontend
/// setter.
///
/// The named constants are the positions the vendor protocol defines. Any
/// other byte is carried as-is: validating it is the driver's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VLouverFrontend(u8);

impl VLouverFrontend {
    pub const SWING: Self = Self(0x00);
    pub const STOP: Self = Self(0x01);
    pub const TOP: Self = Self(0x02);
    pub const MIDDLE_ABOVE: Self = Self(0x03);
    pub const MIDDLE: Self = Self(0x04);
    pub const MIDDLE_BELOW: Self = Self(0x05);
    pub const BOTTOM: Self = Self(0x06);

    /// Wrap a raw encoded position.
    #[must_use]
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// The raw encoded byte.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Name of the position when it is one of the protocol's named ones.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::SWING => Some("swing"),
            Self::STOP => Some("stop"),
            Self::TOP => Some("top"),
            Self::MIDDLE_ABOVE => Some("middle_above"),
            Self::MIDDLE => Some("middle"),
            Self::MIDDLE_BELOW => Some("middle_below"),
            Self::BOTTOM => Some("bottom"),
            _ => None,
        }
    }
}

impl From<u8> for VLouverFrontend {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl From<VLouverFrontend> for u8 {
    fn from(pos: VLouverFrontend) -> Self {
        pos.0
    }
}

impl fmt::Display for VLouverFrontend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{:#04x}", self.0),
        }
    }
}
