//! Unified error type for joystick-panel.
//!
//! We avoid `alloc` - all error variants carry no payload.
//! Implements `defmt::Format` for on-target logging when the
//! `defmt` feature is enabled.

/// Top-level error type used across the application.
///
/// None of these ever escape the main loop: the loop logs them and keeps
/// going, since there is nothing above it to report to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // UI / Display
    /// I²C transfer of the frame buffer to the display failed.
    Display,

    /// The display did not accept its init sequence.
    DisplayInit,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Display => f.write_str("display transfer failed"),
            Error::DisplayInit => f.write_str("display init failed"),
        }
    }
}
