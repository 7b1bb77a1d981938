//! Error types shared across the workspace.
//!
//! The action layer adds no errors of its own: the only failure an action can
//! report is the one its driver returned.

/// Failure reported by an air-conditioner driver while running a sequence.
#[derive(Debug, thiserror::Error)]
pub enum AirConError {
    /// The driver has no working link to the indoor unit.
    #[error("air conditioner not connected")]
    NotConnected,

    /// The driver's sequence queue cannot accept another sequence right now.
    #[error("sequence queue is full")]
    SequenceQueueFull,

    /// The underlying transport (UART, IR, …) failed.
    #[error("transport error")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}
