//! Debounced falling-edge handling for the two push buttons.
//!
//! Every monitored input gets its own [`Debouncer`]; the observers below
//! own one each, so the joystick button and button A never share a timer.
//!
//! Observers run in interrupt context. They only flip flags in
//! [`OutputState`] and, for the joystick button, write the green LED pin.
//! The display, PWM and ADC belong to the main loop and are never touched
//! from here.

use embedded_hal::digital::{OutputPin, PinState};

use crate::config::DEBOUNCE_MS;
use crate::state::OutputState;

/// Result of feeding one edge through an observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Edge passed the debounce window and its action ran.
    Accepted,
    /// Edge arrived inside the debounce window and was dropped.
    Rejected,
}

/// Per-input debounce timer.
///
/// An edge is accepted if nothing has been accepted yet, or if at least
/// `window_ms` passed since the previous accepted edge.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    window_ms: u64,
    last_accepted_ms: Option<u64>,
}

impl Debouncer {
    /// Debouncer with the default 200 ms window.
    pub const fn new() -> Self {
        Self::with_window(DEBOUNCE_MS)
    }

    pub const fn with_window(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_accepted_ms: None,
        }
    }

    /// Decide whether an edge seen at `now_ms` counts.
    ///
    /// Rejected edges leave the timer untouched, so a burst of bounces
    /// cannot keep pushing the window forward.
    pub fn accept(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms.saturating_sub(last) < self.window_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

/// Something that reacts to a falling edge on one digital input.
///
/// Implementations are registered with the platform's edge interrupt at
/// setup and must stay short and non-blocking.
pub trait EdgeObserver {
    fn on_falling_edge(&mut self, now_ms: u64) -> EdgeOutcome;
}

/// Joystick push-button: toggles the green LED and cycles the border style.
pub struct JoystickButtonObserver<'a, P> {
    debouncer: Debouncer,
    state: &'a OutputState,
    green_led: P,
}

impl<'a, P: OutputPin> JoystickButtonObserver<'a, P> {
    pub fn new(state: &'a OutputState, green_led: P) -> Self {
        Self {
            debouncer: Debouncer::new(),
            state,
            green_led,
        }
    }

    #[cfg(test)]
    pub(crate) fn green_led(&self) -> &P {
        &self.green_led
    }
}

impl<P: OutputPin> EdgeObserver for JoystickButtonObserver<'_, P> {
    fn on_falling_edge(&mut self, now_ms: u64) -> EdgeOutcome {
        if !self.debouncer.accept(now_ms) {
            return EdgeOutcome::Rejected;
        }

        let on = self.state.toggle_green_led();
        // GPIO writes are infallible on every HAL we target.
        let _ = self.green_led.set_state(PinState::from(on));
        self.state.advance_border();

        EdgeOutcome::Accepted
    }
}

/// Button A: enables or disables PWM brightness updates.
pub struct ButtonAObserver<'a> {
    debouncer: Debouncer,
    state: &'a OutputState,
}

impl<'a> ButtonAObserver<'a> {
    pub fn new(state: &'a OutputState) -> Self {
        Self {
            debouncer: Debouncer::new(),
            state,
        }
    }
}

impl EdgeObserver for ButtonAObserver<'_> {
    fn on_falling_edge(&mut self, now_ms: u64) -> EdgeOutcome {
        if !self.debouncer.accept(now_ms) {
            return EdgeOutcome::Rejected;
        }

        self.state.toggle_pwm();
        EdgeOutcome::Accepted
    }
}
