//! Send-test-packet action — hands raw bytes to the driver for transmission.

use std::fmt;
use std::sync::Arc;

use auxac_domain::error::AirConError;
use auxac_domain::templatable::Templatable;

use crate::action::{Action, log_failure};
use crate::ports::AirCon;

/// Sends a byte sequence to the unit, either a fixed one or one computed from
/// the runtime arguments each time the action plays.
///
/// The two modes are exclusive: whichever of
/// [`set_data_static`](Self::set_data_static) and
/// [`set_data_template`](Self::set_data_template) was called last wins. An
/// action that was never configured sends an empty packet.
pub struct SendTestPacketAction<A: ?Sized, Args> {
    ac: Arc<A>,
    data: Templatable<Vec<u8>, Args>,
}

impl<A: ?Sized, Args> SendTestPacketAction<A, Args> {
    /// Create the action bound to `ac`.
    #[must_use]
    pub fn new(ac: Arc<A>) -> Self {
        Self {
            ac,
            data: Templatable::default(),
        }
    }

    /// Always send `data`, whatever the runtime arguments.
    pub fn set_data_static(&mut self, data: impl Into<Vec<u8>>) {
        self.data = Templatable::Static(data.into());
    }

    /// Compute the packet from the runtime arguments on every play.
    pub fn set_data_template<F>(&mut self, f: F)
    where
        F: Fn(&Args) -> Vec<u8> + Send + Sync + 'static,
    {
        self.data = Templatable::lambda(f);
    }

    /// Builder form of [`set_data_static`](Self::set_data_static).
    #[must_use]
    pub fn with_data_static(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.set_data_static(data);
        self
    }

    /// Builder form of [`set_data_template`](Self::set_data_template).
    #[must_use]
    pub fn with_data_template<F>(mut self, f: F) -> Self
    where
        F: Fn(&Args) -> Vec<u8> + Send + Sync + 'static,
    {
        self.set_data_template(f);
        self
    }

    /// Whether the static mode is the one in effect.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.data.is_static()
    }

    /// The driver this action plays against.
    #[must_use]
    pub fn air_con(&self) -> &A {
        &self.ac
    }
}

impl<A: AirCon + ?Sized, Args> Action<Args> for SendTestPacketAction<A, Args> {
    fn name(&self) -> &'static str {
        "send_test_packet"
    }

    fn play(&self, args: &Args) -> Result<(), AirConError> {
        let data = self.data.value(args);
        tracing::debug!(
            action = "send_test_packet",
            data = ?data,
            static_data = self.data.is_static(),
            "playing action"
        );
        self.ac
            .send_test_packet(&data)
            .inspect_err(|err| log_failure("send_test_packet", err))
    }
}

impl<A: ?Sized, Args> fmt::Debug for SendTestPacketAction<A, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SendTestPacketAction")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
