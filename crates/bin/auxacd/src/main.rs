//! # auxacd — auxac demo daemon
//!
//! Composition root that wires the virtual air conditioner into one action of
//! every kind and plays them as an automation routine would.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise logging
//! - Construct the driver adapter
//! - Construct the actions, injecting the driver handle
//! - Play the routine and print the resulting unit state as JSON
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no action logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use auxac_adapter_virtual::VirtualAirCon;
use auxac_app::action::Action;
use auxac_app::actions::{
    DisplayOffAction, DisplayOnAction, PowerLimitationOffAction, PowerLimitationOnAction,
    SendTestPacketAction, VLouverBottomAction, VLouverMiddleAboveAction, VLouverMiddleAction,
    VLouverMiddleBelowAction, VLouverSetAction, VLouverStopAction, VLouverSwingAction,
    VLouverTopAction,
};
use auxac_domain::louver::VLouverFrontend;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, DemoConfig};

/// Runtime arguments of the demo trigger: the run number.
type Trigger = (u8,);

const RUNS: u8 = 2;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter).context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(aircon = %config.aircon.name, "auxacd starting");

    // Driver
    let ac = Arc::new(VirtualAirCon::new(config.aircon.name.clone()));
    ac.set_connected(config.aircon.connected);

    // Actions
    let routine = build_routine(&ac, &config.demo);

    let mut failures = 0_usize;
    for run in 1..=RUNS {
        for action in &routine {
            // Failures are already logged by the action.
            if action.play(&(run,)).is_err() {
                failures += 1;
            }
        }
    }
    tracing::info!(
        accepted = ac.command_count(),
        failures,
        "demo routine finished"
    );

    let state = serde_json::to_string_pretty(&ac.state()).context("failed to render state")?;
    println!("{state}");

    Ok(())
}

/// One action of every kind, in the order a "night mode" automation might
/// play them.
fn build_routine(ac: &Arc<VirtualAirCon>, demo: &DemoConfig) -> Vec<Box<dyn Action<Trigger>>> {
    let base_packet = demo.test_packet.clone();

    vec![
        Box::new(DisplayOffAction::new(Arc::clone(ac))),
        Box::new(VLouverSwingAction::new(Arc::clone(ac))),
        Box::new(VLouverStopAction::new(Arc::clone(ac))),
        Box::new(VLouverTopAction::new(Arc::clone(ac))),
        Box::new(VLouverMiddleAboveAction::new(Arc::clone(ac))),
        Box::new(VLouverMiddleAction::new(Arc::clone(ac))),
        Box::new(VLouverMiddleBelowAction::new(Arc::clone(ac))),
        Box::new(VLouverBottomAction::new(Arc::clone(ac))),
        Box::new(
            VLouverSetAction::<_, Trigger>::new(Arc::clone(ac))
                .with_position(VLouverFrontend::new(demo.vlouver_position)),
        ),
        Box::new(
            PowerLimitationOnAction::<_, Trigger>::new(Arc::clone(ac)).with_level(demo.power_limit),
        ),
        Box::new(
            SendTestPacketAction::<_, Trigger>::new(Arc::clone(ac))
                .with_data_static(demo.test_packet.clone()),
        ),
        Box::new(
            SendTestPacketAction::<_, Trigger>::new(Arc::clone(ac)).with_data_template(
                move |(run,): &Trigger| {
                    let mut data = base_packet.clone();
                    data.push(*run);
                    data
                },
            ),
        ),
        Box::new(PowerLimitationOffAction::new(Arc::clone(ac))),
        Box::new(DisplayOnAction::new(Arc::clone(ac))),
    ]
}
