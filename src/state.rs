//! Output flags shared between the edge tasks and the main loop.
//!
//! Each flag is its own atomic. The edge observers are the only writers;
//! the main loop only reads. No operation ever touches two fields at once,
//! so readers cannot observe a half-applied update.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Border drawn around the display edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BorderStyle {
    /// No border.
    #[default]
    None = 0,
    /// Single outline along the screen edge.
    Single = 1,
    /// Single outline inset by 2 px from the screen edge.
    Double = 2,
}

impl BorderStyle {
    /// Next style in the 0 → 1 → 2 → 0 cycle.
    pub const fn next(self) -> Self {
        match self {
            BorderStyle::None => BorderStyle::Single,
            BorderStyle::Single => BorderStyle::Double,
            BorderStyle::Double => BorderStyle::None,
        }
    }

    /// Decode a stored index. Anything out of range maps to `None`.
    pub const fn from_index(index: u8) -> Self {
        match index {
            1 => BorderStyle::Single,
            2 => BorderStyle::Double,
            _ => BorderStyle::None,
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Process-wide output flags.
///
/// Intended to live in a `static`; [`OutputState::new`] is `const`.
pub struct OutputState {
    green_led_on: AtomicBool,
    pwm_enabled: AtomicBool,
    border_style: AtomicU8,
}

impl OutputState {
    /// Power-on state: green LED off, PWM enabled, no border.
    pub const fn new() -> Self {
        Self {
            green_led_on: AtomicBool::new(false),
            pwm_enabled: AtomicBool::new(true),
            border_style: AtomicU8::new(BorderStyle::None as u8),
        }
    }

    pub fn green_led_on(&self) -> bool {
        self.green_led_on.load(Ordering::Acquire)
    }

    pub fn pwm_enabled(&self) -> bool {
        self.pwm_enabled.load(Ordering::Acquire)
    }

    pub fn border_style(&self) -> BorderStyle {
        BorderStyle::from_index(self.border_style.load(Ordering::Acquire))
    }

    /// Flip the green LED flag, returning the new value.
    pub fn toggle_green_led(&self) -> bool {
        !self.green_led_on.fetch_xor(true, Ordering::AcqRel)
    }

    /// Flip the PWM enable flag, returning the new value.
    pub fn toggle_pwm(&self) -> bool {
        !self.pwm_enabled.fetch_xor(true, Ordering::AcqRel)
    }

    /// Advance the border style one step, returning the new style.
    pub fn advance_border(&self) -> BorderStyle {
        // Single writer, so load + store cannot lose an update.
        let next = self.border_style().next();
        self.border_style.store(next.index(), Ordering::Release);
        next
    }
}

impl Default for OutputState {
    fn default() -> Self {
        Self::new()
    }
}
