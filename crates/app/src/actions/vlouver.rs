//! Vertical louver actions — swing, stop, the named fixed positions, and an
//! arbitrary encoded position.

use std::fmt;
use std::sync::Arc;

use auxac_domain::error::AirConError;
use auxac_domain::louver::VLouverFrontend;
use auxac_domain::templatable::Templatable;

use crate::action::{Action, log_failure};
use crate::ports::AirCon;

define_sequence_action!(
    /// Starts oscillating the vertical louver.
    VLouverSwingAction,
    "vlouver_swing",
    set_vlouver_swing_sequence
);

define_sequence_action!(
    /// Stops the vertical louver where it is.
    VLouverStopAction,
    "vlouver_stop",
    set_vlouver_stop_sequence
);

define_sequence_action!(VLouverTopAction, "vlouver_top", set_vlouver_top_sequence);

define_sequence_action!(
    VLouverMiddleAboveAction,
    "vlouver_middle_above",
    set_vlouver_middle_above_sequence
);

define_sequence_action!(
    VLouverMiddleAction,
    "vlouver_middle",
    set_vlouver_middle_sequence
);

define_sequence_action!(
    VLouverMiddleBelowAction,
    "vlouver_middle_below",
    set_vlouver_middle_below_sequence
);

define_sequence_action!(
    VLouverBottomAction,
    "vlouver_bottom",
    set_vlouver_bottom_sequence
);

/// Moves the vertical louver to a position resolved when the action plays.
///
/// The position is forwarded to the driver as-is.
pub struct VLouverSetAction<A: ?Sized, Args> {
    ac: Arc<A>,
    position: Templatable<VLouverFrontend, Args>,
}

impl<A: ?Sized, Args> VLouverSetAction<A, Args> {
    /// Create the action bound to `ac`, targeting [`VLouverFrontend::default`]
    /// until a position is configured.
    #[must_use]
    pub fn new(ac: Arc<A>) -> Self {
        Self {
            ac,
            position: Templatable::default(),
        }
    }

    /// Builder form of [`set_position`](Self::set_position).
    #[must_use]
    pub fn with_position(mut self, position: impl Into<Templatable<VLouverFrontend, Args>>) -> Self {
        self.set_position(position);
        self
    }

    /// Configure the target position: a constant or a [`Templatable::lambda`].
    pub fn set_position(&mut self, position: impl Into<Templatable<VLouverFrontend, Args>>) {
        self.position = position.into();
    }

    /// The driver this action plays against.
    #[must_use]
    pub fn air_con(&self) -> &A {
        &self.ac
    }
}

impl<A: AirCon + ?Sized, Args> Action<Args> for VLouverSetAction<A, Args> {
    fn name(&self) -> &'static str {
        "vlouver_set"
    }

    fn play(&self, args: &Args) -> Result<(), AirConError> {
        let position = self.position.value(args);
        tracing::debug!(action = "vlouver_set", position = position.raw(), "playing action");
        self.ac
            .set_vlouver_frontend_sequence(position)
            .inspect_err(|err| log_failure("vlouver_set", err))
    }
}

impl<A: ?Sized, Args> fmt::Debug for VLouverSetAction<A, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VLouverSetAction")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

    use auxac_domain::command::Command;

    use super::*;
    use crate::spy::SpyAirCon;

    fn frontend(raw: u8) -> Command {
        Command::VLouverFrontend {
            position: VLouverFrontend::new(raw),
        }
    }

    #[test]
    fn should_call_each_fixed_sequence_exactly_once() {
        let ac = Arc::new(SpyAirCon::default());
        let actions: Vec<(Box<dyn Action<()>>, Command)> = vec![
            (Box::new(VLouverSwingAction::new(Arc::clone(&ac))), Command::VLouverSwing),
            (Box::new(VLouverStopAction::new(Arc::clone(&ac))), Command::VLouverStop),
            (Box::new(VLouverTopAction::new(Arc::clone(&ac))), Command::VLouverTop),
            (
                Box::new(VLouverMiddleAboveAction::new(Arc::clone(&ac))),
                Command::VLouverMiddleAbove,
            ),
            (Box::new(VLouverMiddleAction::new(Arc::clone(&ac))), Command::VLouverMiddle),
            (
                Box::new(VLouverMiddleBelowAction::new(Arc::clone(&ac))),
                Command::VLouverMiddleBelow,
            ),
            (Box::new(VLouverBottomAction::new(Arc::clone(&ac))), Command::VLouverBottom),
        ];

        for (action, expected) in actions {
            let before = ac.calls().len();
            action.play(&()).unwrap();
            let calls = ac.calls();
            assert_eq!(calls.len(), before + 1);
            assert_eq!(calls.last(), Some(&expected));
        }
    }

    #[test]
    fn should_forward_every_static_position_unchanged() {
        for raw in 0..=u8::MAX {
            let ac = Arc::new(SpyAirCon::default());
            let action =
                VLouverSetAction::new(Arc::clone(&ac)).with_position(VLouverFrontend::new(raw));

            action.play(&()).unwrap();

            assert_eq!(ac.calls(), vec![frontend(raw)]);
        }
    }

    #[test]
    fn should_forward_every_computed_position_unchanged() {
        let ac = Arc::new(SpyAirCon::default());
        let action = VLouverSetAction::new(Arc::clone(&ac))
            .with_position(Templatable::lambda(|(raw,): &(u8,)| VLouverFrontend::new(*raw)));

        for raw in 0..=u8::MAX {
            action.play(&(raw,)).unwrap();
        }

        let expected: Vec<Command> = (0..=u8::MAX).map(frontend).collect();
        assert_eq!(ac.calls(), expected);
    }

    #[test]
    fn should_resolve_position_at_play_time() {
        let source = Arc::new(AtomicU8::new(1));
        let reader = Arc::clone(&source);
        let ac = Arc::new(SpyAirCon::default());
        let action = VLouverSetAction::new(Arc::clone(&ac))
            .with_position(Templatable::lambda(move |(): &()| {
                VLouverFrontend::new(reader.load(Ordering::SeqCst))
            }));

        source.store(5, Ordering::SeqCst);
        action.play(&()).unwrap();
        source.store(6, Ordering::SeqCst);
        action.play(&()).unwrap();

        assert_eq!(ac.calls(), vec![frontend(5), frontend(6)]);
    }

    #[test]
    fn should_evaluate_position_template_once_per_play() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let ac = Arc::new(SpyAirCon::default());
        let action = VLouverSetAction::new(Arc::clone(&ac)).with_position(Templatable::lambda(
            move |(raw,): &(u8,)| {
                counter.fetch_add(1, Ordering::SeqCst);
                VLouverFrontend::new(*raw)
            },
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        for raw in [2, 4, 6] {
            action.play(&(raw,)).unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(ac.calls().len(), 3);
    }

    #[test]
    fn should_default_to_swing_position() {
        let ac = Arc::new(SpyAirCon::default());
        let action = VLouverSetAction::new(Arc::clone(&ac));

        action.play(&()).unwrap();

        assert_eq!(ac.calls(), vec![frontend(0)]);
    }

    #[test]
    fn should_use_last_configured_position() {
        let ac = Arc::new(SpyAirCon::default());
        let mut action = VLouverSetAction::new(Arc::clone(&ac));
        action.set_position(VLouverFrontend::TOP);
        action.set_position(VLouverFrontend::BOTTOM);

        action.play(&()).unwrap();

        assert_eq!(ac.calls(), vec![frontend(0x06)]);
    }

    #[test]
    fn should_propagate_driver_error_from_set_action() {
        let ac = Arc::new(SpyAirCon::disconnected());
        let action = VLouverSetAction::new(Arc::clone(&ac)).with_position(VLouverFrontend::MIDDLE);

        let result = action.play(&());

        assert!(matches!(result, Err(AirConError::NotConnected)));
    }

    #[test]
    fn should_play_through_dyn_driver_handle() {
        let spy = Arc::new(SpyAirCon::default());
        let ac: Arc<dyn AirCon> = spy.clone();
        let action = VLouverSetAction::new(ac).with_position(VLouverFrontend::MIDDLE_BELOW);

        action.play(&()).unwrap();

        assert_eq!(spy.calls(), vec![frontend(0x05)]);
    }

    #[test]
    fn should_debug_print_configured_position() {
        let ac = Arc::new(SpyAirCon::default());
        let action: VLouverSetAction<_, ()> =
            VLouverSetAction::new(ac).with_position(VLouverFrontend::new(3));
        assert_eq!(
            format!("{action:?}"),
            "VLouverSetAction { position: Static(VLouverFrontend(3)), .. }"
        );
    }
}
