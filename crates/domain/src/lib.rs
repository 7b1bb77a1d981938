//! # auxac-domain
//!
//! Pure domain model for the auxac air-conditioner automation component.
//!
//! ## Responsibilities
//! - Foundational types: error conventions
//! - Define **louver positions** ([`louver::VLouverFrontend`]) as carried by the driver
//! - Define the **command vocabulary** ([`command::Command`]) one variant per driver sequence
//! - Define **templatable values** ([`templatable::Templatable`]): a constant or a
//!   function of the action's runtime arguments, resolved when the action plays
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! The driver boundary is expressed as a trait in the `app` crate (port).

pub mod error;

pub mod command;
pub mod louver;
pub mod templatable;
