//! GPIO button input on edge interrupts.
//!
//! Two buttons (active-low with internal pull-up):
//!   - JOYSTICK - toggles the green LED and cycles the border style
//!   - A        - enables / disables PWM brightness updates
//!
//! Each button is handled by a task on the high-priority interrupt
//! executor. The task waits for a GPIOTE falling edge and hands it to the
//! button's observer, which does its own debouncing.

use defmt::{debug, trace};
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::Instant;
use joystick_panel::input::debounce::{EdgeObserver, EdgeOutcome};
use joystick_panel::OutputState;

/// Feed every falling edge on `pin` to `observer`, forever.
pub async fn watch_falling_edges<O: EdgeObserver>(
    pin: AnyPin,
    name: &'static str,
    mut observer: O,
    state: &'static OutputState,
) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        btn.wait_for_falling_edge().await;

        match observer.on_falling_edge(Instant::now().as_millis()) {
            EdgeOutcome::Accepted => debug!(
                "Button {}: green={} pwm={} border={}",
                name,
                state.green_led_on(),
                state.pwm_enabled(),
                state.border_style()
            ),
            EdgeOutcome::Rejected => trace!("Button {}: bounce ignored", name),
        }
    }
}
