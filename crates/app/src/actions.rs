//! Actions — one per driver sequence.
//!
//! | Action | Driver call |
//! |--------|-------------|
//! | [`DisplayOffAction`] / [`DisplayOnAction`] | `display_{off,on}_sequence()` |
//! | [`VLouverSwingAction`] / [`VLouverStopAction`] | `set_vlouver_{swing,stop}_sequence()` |
//! | [`VLouverTopAction`] … [`VLouverBottomAction`] | fixed-position setters |
//! | [`VLouverSetAction`] | `set_vlouver_frontend_sequence(position)` |
//! | [`SendTestPacketAction`] | `send_test_packet(bytes)` |
//! | [`PowerLimitationOffAction`] | `power_limitation_off_sequence()` |
//! | [`PowerLimitationOnAction`] | `power_limitation_on_sequence(level)` |
//!
//! Every action holds a shared handle to its driver, set once in `new`.
//! Fixed-sequence actions ignore their runtime arguments and therefore play
//! for any `Args`.

/// Define an action that forwards to a driver method taking no argument.
macro_rules! define_sequence_action {
    ($(#[doc = $doc:expr])* $name:ident, $label:literal, $method:ident) => {
        $(#[doc = $doc])*
        pub struct $name<A: ?Sized> {
            ac: std::sync::Arc<A>,
        }

        impl<A: ?Sized> $name<A> {
            /// Create the action bound to `ac`.
            #[must_use]
            pub fn new(ac: std::sync::Arc<A>) -> Self {
                Self { ac }
            }

            /// The driver this action plays against.
            #[must_use]
            pub fn air_con(&self) -> &A {
                &self.ac
            }
        }

        impl<A, Args> $crate::action::Action<Args> for $name<A>
        where
            A: $crate::ports::AirCon + ?Sized,
        {
            fn name(&self) -> &'static str {
                $label
            }

            fn play(&self, _args: &Args) -> Result<(), auxac_domain::error::AirConError> {
                tracing::debug!(action = $label, "playing action");
                self.ac
                    .$method()
                    .inspect_err(|err| $crate::action::log_failure($label, err))
            }
        }

        impl<A: ?Sized> std::fmt::Debug for $name<A> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name)).finish_non_exhaustive()
            }
        }
    };
}

mod display;
mod power_limitation;
mod test_packet;
mod vlouver;

pub use display::{DisplayOffAction, DisplayOnAction};
pub use power_limitation::{PowerLimitationOffAction, PowerLimitationOnAction};
pub use test_packet::SendTestPacketAction;
pub use vlouver::{
    VLouverBottomAction, VLouverMiddleAboveAction, VLouverMiddleAction, VLouverMiddleBelowAction,
    VLouverSetAction, VLouverStopAction, VLouverSwingAction, VLouverTopAction,
};
