//! Display actions — switch the unit's front display off and on.

define_sequence_action!(
    /// Switches the display off.
    DisplayOffAction,
    "display_off",
    display_off_sequence
);

define_sequence_action!(
    /// Switches the display on.
    DisplayOnAction,
    "display_on",
    display_on_sequence
);
