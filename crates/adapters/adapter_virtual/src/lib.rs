//! # auxac-adapter-virtual
//!
//! Virtual air-conditioner driver for testing and demonstration.
//!
//! [`VirtualAirCon`] implements the [`AirCon`] port without any hardware: every
//! accepted sequence is recorded as a [`Command`] and folded into a simulated
//! [`VirtualAirConState`].
//!
//! | Knob | Effect |
//! |------|--------|
//! | [`set_connected(false)`](VirtualAirCon::set_connected) | every sequence fails with [`AirConError::NotConnected`] |
//! | [`with_queue_capacity(n)`](VirtualAirCon::with_queue_capacity) | after `n` recorded sequences, further ones fail with [`AirConError::SequenceQueueFull`] until [`clear`](VirtualAirCon::clear) |
//!
//! ## Dependency rule
//!
//! Depends on `auxac-app` (port trait) and `auxac-domain` only.

mod state;

pub use state::VirtualAirConState;

use std::sync::{Mutex, MutexGuard, PoisonError};

use auxac_app::ports::AirCon;
use auxac_domain::command::Command;
use auxac_domain::error::AirConError;
use auxac_domain::louver::VLouverFrontend;

/// A simulated air conditioner.
pub struct VirtualAirCon {
    name: String,
    inner: Mutex<Inner>,
}

struct Inner {
    connected: bool,
    queue_capacity: Option<usize>,
    commands: Vec<Command>,
    state: VirtualAirConState,
}

impl Default for VirtualAirCon {
    fn default() -> Self {
        Self::new("Virtual AC")
    }
}

impl VirtualAirCon {
    /// Create a connected unit with an unbounded sequence queue.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: Mutex::new(Inner {
                connected: true,
                queue_capacity: None,
                commands: Vec::new(),
                state: VirtualAirConState::default(),
            }),
        }
    }

    /// Bound the number of sequences recorded before [`clear`](Self::clear).
    #[must_use]
    pub fn with_queue_capacity(self, capacity: usize) -> Self {
        self.lock().queue_capacity = Some(capacity);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Simulate the link to the indoor unit going up or down.
    pub fn set_connected(&self, connected: bool) {
        self.lock().connected = connected;
        tracing::info!(aircon = %self.name, connected, "virtual link state changed");
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.lock().connected
    }

    /// Every accepted sequence, oldest first.
    #[must_use]
    pub fn commands(&self) -> Vec<Command> {
        self.lock().commands.clone()
    }

    #[must_use]
    pub fn last_command(&self) -> Option<Command> {
        self.lock().commands.last().cloned()
    }

    #[must_use]
    pub fn command_count(&self) -> usize {
        self.lock().commands.len()
    }

    /// Current simulated unit state.
    #[must_use]
    pub fn state(&self) -> VirtualAirConState {
        self.lock().state.clone()
    }

    /// Forget recorded sequences, freeing the queue. The unit state is kept.
    pub fn clear(&self) {
        self.lock().commands.clear();
    }

    fn submit(&self, command: Command) -> Result<(), AirConError> {
        let mut inner = self.lock();
        if !inner.connected {
            tracing::warn!(aircon = %self.name, %command, "sequence rejected: not connected");
            return Err(AirConError::NotConnected);
        }
        if inner
            .queue_capacity
            .is_some_and(|capacity| inner.commands.len() >= capacity)
        {
            tracing::warn!(aircon = %self.name, %command, "sequence rejected: queue full");
            return Err(AirConError::SequenceQueueFull);
        }

        tracing::info!(aircon = %self.name, %command, "sequence accepted");
        inner.state.apply(&command, chrono::Utc::now());
        inner.commands.push(command);
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AirCon for VirtualAirCon {
    fn display_off_sequence(&self) -> Result<(), AirConError> {
        self.submit(Command::DisplayOff)
    }

    fn display_on_sequence(&self) -> Result<(), AirConError> {
        self.submit(Command::DisplayOn)
    }

    fn set_vlouver_swing_sequence(&self) -> Result<(), AirConError> {
        self.submit(Command::VLouverSwing)
    }

    fn set_vlouver_stop_sequence(&self) -> Result<(), AirConError> {
        self.submit(Command::VLouverStop)
    }

    fn set_vlouver_top_sequence(&self) -> Result<(), AirConError> {
        self.submit(Command::VLouverTop)
    }

    fn set_vlouver_middle_above_sequence(&self) -> Result<(), AirConError> {
        self.submit(Command::VLouverMiddleAbove)
    }

    fn set_vlouver_middle_sequence(&self) -> Result<(), AirConError> {
        self.submit(Command::VLouverMiddle)
    }

    fn set_vlouver_middle_below_sequence(&self) -> Result<(), AirConError> {
        self.submit(Command::VLouverMiddleBelow)
    }

    fn set_vlouver_bottom_sequence(&self) -> Result<(), AirConError> {
        self.submit(Command::VLouverBottom)
    }

    fn set_vlouver_frontend_sequence(&self, position: VLouverFrontend) -> Result<(), AirConError> {
        self.submit(Command::VLouverFrontend { position })
    }

    fn send_test_packet(&self, data: &[u8]) -> Result<(), AirConError> {
        self.submit(Command::SendTestPacket {
            data: data.to_vec(),
        })
    }

    fn power_limitation_off_sequence(&self) -> Result<(), AirConError> {
        self.submit(Command::PowerLimitationOff)
    }

    fn power_limitation_on_sequence(&self, level: u8) -> Result<(), AirConError> {
        self.submit(Command::PowerLimitationOn { level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_default_name() {
        let ac = VirtualAirCon::default();
        assert_eq!(ac.name(), "Virtual AC");
    }

    #[test]
    fn should_start_connected_with_no_commands() {
        let ac = VirtualAirCon::new("Bedroom");
        assert!(ac.is_connected());
        assert_eq!(ac.command_count(), 0);
        assert!(ac.last_command().is_none());
    }

    #[test]
    fn should_record_accepted_commands_in_order() {
        let ac = VirtualAirCon::default();
        ac.display_off_sequence().unwrap();
        ac.set_vlouver_frontend_sequence(VLouverFrontend::new(4)).unwrap();
        ac.power_limitation_on_sequence(70).unwrap();

        assert_eq!(
            ac.commands(),
            vec![
                Command::DisplayOff,
                Command::VLouverFrontend {
                    position: VLouverFrontend::new(4)
                },
                Command::PowerLimitationOn { level: 70 },
            ]
        );
        assert_eq!(
            ac.last_command(),
            Some(Command::PowerLimitationOn { level: 70 })
        );
    }

    #[test]
    fn should_update_state_from_accepted_commands() {
        let ac = VirtualAirCon::default();
        ac.display_off_sequence().unwrap();
        ac.set_vlouver_bottom_sequence().unwrap();
        ac.send_test_packet(&[0xBB, 0x00]).unwrap();

        let state = ac.state();
        assert!(!state.display_on);
        assert_eq!(state.vlouver, VLouverFrontend::BOTTOM);
        assert_eq!(state.last_test_packet, Some(vec![0xBB, 0x00]));
        assert!(state.last_command_at.is_some());
    }

    #[test]
    fn should_reject_commands_while_disconnected() {
        let ac = VirtualAirCon::default();
        ac.set_connected(false);

        let result = ac.display_on_sequence();

        assert!(matches!(result, Err(AirConError::NotConnected)));
        assert_eq!(ac.command_count(), 0);
        assert_eq!(ac.state(), VirtualAirConState::default());
    }

    #[test]
    fn should_accept_commands_again_after_reconnect() {
        let ac = VirtualAirCon::default();
        ac.set_connected(false);
        assert!(ac.power_limitation_off_sequence().is_err());

        ac.set_connected(true);

        assert!(ac.power_limitation_off_sequence().is_ok());
        assert_eq!(ac.commands(), vec![Command::PowerLimitationOff]);
    }

    #[test]
    fn should_reject_commands_when_queue_is_full() {
        let ac = VirtualAirCon::default().with_queue_capacity(2);
        ac.set_vlouver_swing_sequence().unwrap();
        ac.set_vlouver_stop_sequence().unwrap();

        let result = ac.set_vlouver_top_sequence();

        assert!(matches!(result, Err(AirConError::SequenceQueueFull)));
        assert_eq!(ac.command_count(), 2);
        assert_eq!(ac.state().vlouver, VLouverFrontend::STOP);
    }

    #[test]
    fn should_free_queue_on_clear_and_keep_state() {
        let ac = VirtualAirCon::default().with_queue_capacity(1);
        ac.power_limitation_on_sequence(40).unwrap();

        ac.clear();

        assert_eq!(ac.command_count(), 0);
        assert_eq!(ac.state().power_limitation, Some(40));
        assert!(ac.set_vlouver_middle_sequence().is_ok());
    }

    #[test]
    fn should_record_every_fixed_sequence() {
        let ac = VirtualAirCon::default();
        ac.display_on_sequence().unwrap();
        ac.set_vlouver_middle_above_sequence().unwrap();
        ac.set_vlouver_middle_below_sequence().unwrap();

        assert_eq!(
            ac.commands(),
            vec![
                Command::DisplayOn,
                Command::VLouverMiddleAbove,
                Command::VLouverMiddleBelow,
            ]
        );
    }
}
