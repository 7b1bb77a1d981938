//! Spy driver shared by the action tests.

use std::sync::Mutex;

use auxac_domain::command::Command;
use auxac_domain::error::AirConError;
use auxac_domain::louver::VLouverFrontend;

use crate::ports::AirCon;

/// Records every call; optionally rejects all of them.
#[derive(Default)]
pub(crate) struct SpyAirCon {
    calls: Mutex<Vec<Command>>,
    disconnected: bool,
}

impl SpyAirCon {
    /// A spy that answers every call with [`AirConError::NotConnected`].
    pub(crate) fn disconnected() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            disconnected: true,
        }
    }

    pub(crate) fn calls(&self) -> Vec<Command> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, command: Command) -> Result<(), AirConError> {
        if self.disconnected {
            return Err(AirConError::NotConnected);
        }
        self.calls.lock().unwrap().push(command);
        Ok(())
    }
}

impl AirCon for SpyAirCon {
    fn display_off_sequence(&self) -> Result<(), AirConError> {
        self.record(Command::DisplayOff)
    }

    fn display_on_sequence(&self) -> Result<(), AirConError> {
        self.record(Command::DisplayOn)
    }

    fn set_vlouver_swing_sequence(&self) -> Result<(), AirConError> {
        self.record(Command::VLouverSwing)
    }

    fn set_vlouver_stop_sequence(&self) -> Result<(), AirConError> {
        self.record(Command::VLouverStop)
    }

    fn set_vlouver_top_sequence(&self) -> Result<(), AirConError> {
        self.record(Command::VLouverTop)
    }

    fn set_vlouver_middle_above_sequence(&self) -> Result<(), AirConError> {
        self.record(Command::VLouverMiddleAbove)
    }

    fn set_vlouver_middle_sequence(&self) -> Result<(), AirConError> {
        self.record(Command::VLouverMiddle)
    }

    fn set_vlouver_middle_below_sequence(&self) -> Result<(), AirConError> {
        self.record(Command::VLouverMiddleBelow)
    }

    fn set_vlouver_bottom_sequence(&self) -> Result<(), AirConError> {
        self.record(Command::VLouverBottom)
    }

    fn set_vlouver_frontend_sequence(&self, position: VLouverFrontend) -> Result<(), AirConError> {
        self.record(Command::VLouverFrontend { position })
    }

    fn send_test_packet(&self, data: &[u8]) -> Result<(), AirConError> {
        self.record(Command::SendTestPacket {
            data: data.to_vec(),
        })
    }

    fn power_limitation_off_sequence(&self) -> Result<(), AirConError> {
        self.record(Command::PowerLimitationOff)
    }

    fn power_limitation_on_sequence(&self, level: u8) -> Result<(), AirConError> {
        self.record(Command::PowerLimitationOn { level })
    }
}
