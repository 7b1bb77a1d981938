//! # auxac-app
//!
//! Application layer — the driver **port** and the **actions** built on it.
//!
//! ## Responsibilities
//! - Define the [`AirCon`](ports::AirCon) port trait that driver adapters implement
//! - Define the [`Action`](action::Action) entry point the host automation
//!   framework calls when a trigger fires
//! - Provide one action per driver sequence (display, vertical louver, test
//!   packet, power limitation), each forwarding to exactly one driver call
//!
//! ## Dependency rule
//! Depends on `auxac-domain` only (plus `tracing` for logs).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod action;
pub mod actions;
pub mod ports;

#[cfg(test)]
mod spy;
