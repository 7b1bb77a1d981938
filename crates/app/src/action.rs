//! Action — the entry point the host automation framework calls when a
//! trigger fires.
//!
//! `Args` is the runtime argument type carried by the trigger: `()` when it
//! carries nothing, a tuple when it carries several values. Arguments are
//! passed by reference; an action that needs to keep one clones it.

use auxac_domain::error::AirConError;

/// A single-shot command played against a driver.
pub trait Action<Args> {
    /// Short `snake_case` name used in logs.
    fn name(&self) -> &'static str;

    /// Run the action once, synchronously.
    ///
    /// Templated parameters are resolved against `args` here, once per call.
    ///
    /// # Errors
    ///
    /// Returns the driver's [`AirConError`] unchanged when the forwarded call
    /// fails. The action itself never fails.
    fn play(&self, args: &Args) -> Result<(), AirConError>;
}

/// Log a driver failure reported while playing `action`.
pub(crate) fn log_failure(action: &'static str, err: &AirConError) {
    tracing::warn!(action, error = %err, "air conditioner rejected action");
}
