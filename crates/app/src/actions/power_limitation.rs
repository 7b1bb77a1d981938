//! Power limitation actions — cap the unit's power draw, or lift the cap.

use std::fmt;
use std::sync::Arc;

use auxac_domain::error::AirConError;
use auxac_domain::templatable::Templatable;

use crate::action::{Action, log_failure};
use crate::ports::AirCon;

define_sequence_action!(
    /// Disables power limitation.
    PowerLimitationOffAction,
    "power_limitation_off",
    power_limitation_off_sequence
);

/// Enables power limitation at a level resolved when the action plays.
///
/// The level is forwarded uninspected; the driver decides which values the
/// unit accepts.
pub struct PowerLimitationOnAction<A: ?Sized, Args> {
    ac: Arc<A>,
    level: Templatable<u8, Args>,
}

impl<A: ?Sized, Args> PowerLimitationOnAction<A, Args> {
    /// Create the action bound to `ac`, with level `0` until one is configured.
    #[must_use]
    pub fn new(ac: Arc<A>) -> Self {
        Self {
            ac,
            level: Templatable::default(),
        }
    }

    /// Builder form of [`set_level`](Self::set_level).
    #[must_use]
    pub fn with_level(mut self, level: impl Into<Templatable<u8, Args>>) -> Self {
        self.set_level(level);
        self
    }

    /// Configure the limitation level: a constant or a [`Templatable::lambda`].
    pub fn set_level(&mut self, level: impl Into<Templatable<u8, Args>>) {
        self.level = level.into();
    }

    /// The driver this action plays against.
    #[must_use]
    pub fn air_con(&self) -> &A {
        &self.ac
    }
}

impl<A: AirCon + ?Sized, Args> Action<Args> for PowerLimitationOnAction<A, Args> {
    fn name(&self) -> &'static str {
        "power_limitation_on"
    }

    fn play(&self, args: &Args) -> Result<(), AirConError> {
        let level = self.level.value(args);
        tracing::debug!(action = "power_limitation_on", level, "playing action");
        self.ac
            .power_limitation_on_sequence(level)
            .inspect_err(|err| log_failure("power_limitation_on", err))
    }
}

impl<A: ?Sized, Args> fmt::Debug for PowerLimitationOnAction<A, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PowerLimitationOnAction")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}
