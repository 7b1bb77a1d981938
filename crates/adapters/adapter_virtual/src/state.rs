//! Simulated unit state — what the indoor unit would look like after the
//! sequences it has accepted so far.

use chrono::{DateTime, Utc};
use serde::Serialize;

use auxac_domain::command::Command;
use auxac_domain::louver::VLouverFrontend;

/// Snapshot of a virtual unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VirtualAirConState {
    pub display_on: bool,
    /// Last commanded vertical louver position.
    pub vlouver: VLouverFrontend,
    /// Active power limitation level, `None` when limitation is off.
    pub power_limitation: Option<u8>,
    pub last_test_packet: Option<Vec<u8>>,
    pub last_command_at: Option<DateTime<Utc>>,
}

impl Default for VirtualAirConState {
    fn default() -> Self {
        Self {
            display_on: true,
            vlouver: VLouverFrontend::STOP,
            power_limitation: None,
            last_test_packet: None,
            last_command_at: None,
        }
    }
}

impl VirtualAirConState {
    /// Fold one accepted command into the state.
    ///
    /// Fixed louver sequences are recorded as the matching named frontend
    /// position.
    pub fn apply(&mut self, command: &Command, at: DateTime<Utc>) {
        match command {
            Command::DisplayOff => self.display_on = false,
            Command::DisplayOn => self.display_on = true,
            Command::VLouverSwing => self.vlouver = VLouverFrontend::SWING,
            Command::VLouverStop => self.vlouver = VLouverFrontend::STOP,
            Command::VLouverTop => self.vlouver = VLouverFrontend::TOP,
            Command::VLouverMiddleAbove => self.vlouver = VLouverFrontend::MIDDLE_ABOVE,
            Command::VLouverMiddle => self.vlouver = VLouverFrontend::MIDDLE,
            Command::VLouverMiddleBelow => self.vlouver = VLouverFrontend::MIDDLE_BELOW,
            Command::VLouverBottom => self.vlouver = VLouverFrontend::BOTTOM,
            Command::VLouverFrontend { position } => self.vlouver = *position,
            Command::SendTestPacket { data } => self.last_test_packet = Some(data.clone()),
            Command::PowerLimitationOff => self.power_limitation = None,
            Command::PowerLimitationOn { level } => self.power_limitation = Some(*level),
        }
        self.last_command_at = Some(at);
    }

    /// Whether the louver is oscillating.
    #[must_use]
    pub fn is_swinging(&self) -> bool {
        self.vlouver == VLouverFrontend::SWING
    }
}
