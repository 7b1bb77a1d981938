//! Air-conditioner driver port — the sequences actions can request.
//!
//! A driver owns the link to the indoor unit (UART framing, checksums,
//! sequence queueing). Each method asks it to run one sequence; what the
//! sequence puts on the wire is entirely the driver's business.

use auxac_domain::error::AirConError;
use auxac_domain::louver::VLouverFrontend;

/// Driver for a single air conditioner.
///
/// Methods take `&self`: drivers that keep state use interior mutability and
/// are responsible for their own thread-safety.
pub trait AirCon {
    /// Switch the unit's front display off.
    ///
    /// # Errors
    ///
    /// Returns [`AirConError`] when the driver cannot accept or run the
    /// sequence.
    fn display_off_sequence(&self) -> Result<(), AirConError>;

    /// Switch the unit's front display on.
    ///
    /// # Errors
    ///
    /// Returns [`AirConError`] when the driver cannot accept or run the
    /// sequence.
    fn display_on_sequence(&self) -> Result<(), AirConError>;

    /// Start oscillating the vertical louver.
    ///
    /// # Errors
    ///
    /// Returns [`AirConError`] when the driver cannot accept or run the
    /// sequence.
    fn set_vlouver_swing_sequence(&self) -> Result<(), AirConError>;

    /// Stop the vertical louver where it is.
    ///
    /// # Errors
    ///
    /// Returns [`AirConError`] when the driver cannot accept or run the
    /// sequence.
    fn set_vlouver_stop_sequence(&self) -> Result<(), AirConError>;

    /// Point the vertical louver at its top position.
    ///
    /// # Errors
    ///
    /// Returns [`AirConError`] when the driver cannot accept or run the
    /// sequence.
    fn set_vlouver_top_sequence(&self) -> Result<(), AirConError>;

    /// Point the vertical louver between top and middle.
    ///
    /// # Errors
    ///
    /// Returns [`AirConError`] when the driver cannot accept or run the
    /// sequence.
    fn set_vlouver_middle_above_sequence(&self) -> Result<(), AirConError>;

    /// Point the vertical louver at its middle position.
    ///
    /// # Errors
    ///
    /// Returns [`AirConError`] when the driver cannot accept or run the
    /// sequence.
    fn set_vlouver_middle_sequence(&self) -> Result<(), AirConError>;

    /// Point the vertical louver between middle and bottom.
    ///
    /// # Errors
    ///
    /// Returns [`AirConError`] when the driver cannot accept or run the
    /// sequence.
    fn set_vlouver_middle_below_sequence(&self) -> Result<(), AirConError>;

    /// Point the vertical louver at its bottom position.
    ///
    /// # Errors
    ///
    /// Returns [`AirConError`] when the driver cannot accept or run the
    /// sequence.
    fn set_vlouver_bottom_sequence(&self) -> Result<(), AirConError>;

    /// Move the vertical louver to an encoded frontend position.
    ///
    /// # Errors
    ///
    /// Returns [`AirConError`] when the driver cannot accept or run the
    /// sequence.
    fn set_vlouver_frontend_sequence(&self, position: VLouverFrontend) -> Result<(), AirConError>;

    /// Transmit an arbitrary byte sequence to the unit.
    ///
    /// # Errors
    ///
    /// Returns [`AirConError`] when the driver cannot accept or run the
    /// sequence.
    fn send_test_packet(&self, data: &[u8]) -> Result<(), AirConError>;

    /// Disable power limitation.
    ///
    /// # Errors
    ///
    /// Returns [`AirConError`] when the driver cannot accept or run the
    /// sequence.
    fn power_limitation_off_sequence(&self) -> Result<(), AirConError>;

    /// Enable power limitation at `level`.
    ///
    /// # Errors
    ///
    /// Returns [`AirConError`] when the driver cannot accept or run the
    /// sequence.
    fn power_limitation_on_sequence(&self, level: u8) -> Result<(), AirConError>;
}
