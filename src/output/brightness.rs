//! Axis deflection → LED brightness.

use crate::config::{ADC_CENTER, BRIGHTNESS_DIVISOR, PWM_MAX_DUTY};
use crate::state::OutputState;

/// 8-bit brightness for a raw axis magnitude.
///
/// `|magnitude - 2048| / 16`, so full deflection towards 0 gives 128 while
/// full deflection towards 4095 gives 127.
pub fn brightness(magnitude: u16) -> u8 {
    let deflection = magnitude.abs_diff(ADC_CENTER);
    (deflection / BRIGHTNESS_DIVISOR).min(PWM_MAX_DUTY) as u8
}

/// A PWM channel driving one LED.
pub trait DutyOutput {
    /// Set the duty cycle, `0..=255`.
    fn set_duty(&mut self, duty: u8);
}

/// Push the brightness for `magnitude` to `out` if PWM is enabled.
///
/// When PWM is disabled nothing is written and the LED keeps whatever
/// level it was last given. Returns the duty written, if any.
pub fn apply_brightness<O: DutyOutput>(
    out: &mut O,
    magnitude: u16,
    state: &OutputState,
) -> Option<u8> {
    if !state.pwm_enabled() {
        return None;
    }

    let duty = brightness(magnitude);
    out.set_duty(duty);
    Some(duty)
}

/// Compare value that makes an active-high LED lit for `duty`/255 of the
/// period on a PWM whose compare register sets the *low* time.
///
/// nRF `SimplePwm` counts the compare value as time low, so 0 brightness
/// needs the full 255.
pub fn low_time_compare(duty: u8) -> u16 {
    PWM_MAX_DUTY - u16::from(duty)
}
