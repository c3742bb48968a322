//! PWM-driven LEDs.
//!
//! `SimplePwm` compare values set the time the pin is *low*. The LEDs are
//! active-high, so every brightness goes through
//! [`low_time_compare`]: duty 0 writes 255 (dark), duty 255 writes 0.

use embassy_nrf::pwm::{Instance, Prescaler, SimplePwm};
use joystick_panel::config::PWM_MAX_DUTY;
use joystick_panel::output::brightness::{low_time_compare, DutyOutput};

/// One LED on channel 0 of its own PWM instance, 8-bit duty.
pub struct LedPwm<'d, T: Instance> {
    pwm: SimplePwm<'d, T>,
}

impl<'d, T: Instance> LedPwm<'d, T> {
    /// 16 MHz / 16 / 255 ≈ 3.9 kHz, starting dark.
    pub fn new(mut pwm: SimplePwm<'d, T>) -> Self {
        pwm.set_prescaler(Prescaler::Div16);
        pwm.set_max_duty(PWM_MAX_DUTY);
        pwm.set_duty(0, low_time_compare(0));
        Self { pwm }
    }
}

impl<T: Instance> DutyOutput for LedPwm<'_, T> {
    fn set_duty(&mut self, duty: u8) {
        self.pwm.set_duty(0, low_time_compare(duty));
    }
}
