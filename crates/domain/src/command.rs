//! Command — one driver sequence, with its argument if it takes one.
//!
//! Used to describe what an action asked the driver to do: the virtual driver
//! records these, and logs render them through [`Display`](std::fmt::Display).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::louver::VLouverFrontend;

/// A single sequence request sent to an air-conditioner driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    DisplayOff,
    DisplayOn,
    #[serde(rename = "vlouver_swing")]
    VLouverSwing,
    #[serde(rename = "vlouver_stop")]
    VLouverStop,
    #[serde(rename = "vlouver_top")]
    VLouverTop,
    #[serde(rename = "vlouver_middle_above")]
    VLouverMiddleAbove,
    #[serde(rename = "vlouver_middle")]
    VLouverMiddle,
    #[serde(rename = "vlouver_middle_below")]
    VLouverMiddleBelow,
    #[serde(rename = "vlouver_bottom")]
    VLouverBottom,
    /// Move the louver to an arbitrary encoded position.
    #[serde(rename = "vlouver_frontend")]
    VLouverFrontend { position: VLouverFrontend },
    /// Raw bytes handed to the driver for transmission.
    SendTestPacket { data: Vec<u8> },
    PowerLimitationOff,
    /// Enable power limitation at the given level.
    PowerLimitationOn { level: u8 },
}

impl Command {
    /// Short `snake_case` name of the driver sequence.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::DisplayOff => "display_off",
            Self::DisplayOn => "display_on",
            Self::VLouverSwing => "vlouver_swing",
            Self::VLouverStop => "vlouver_stop",
            Self::VLouverTop => "vlouver_top",
            Self::VLouverMiddleAbove => "vlouver_middle_above",
            Self::VLouverMiddle => "vlouver_middle",
            Self::VLouverMiddleBelow => "vlouver_middle_below",
            Self::VLouverBottom => "vlouver_bottom",
            Self::VLouverFrontend { .. } => "vlouver_frontend",
            Self::SendTestPacket { .. } => "send_test_packet",
            Self::PowerLimitationOff => "power_limitation_off",
            Self::PowerLimitationOn { .. } => "power_limitation_on",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VLouverFrontend { position } => write!(f, "{}({})", self.name(), position.raw()),
            Self::SendTestPacket { data } => {
                write!(f, "{}(", self.name())?;
                for (i, byte) in data.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{byte:02x}")?;
                }
                f.write_str(")")
            }
            Self::PowerLimitationOn { level } => write!(f, "{}({level})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}
