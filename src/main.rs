//! Joystick panel firmware for nRF52840.
//!
//! # Architecture
//!
//! - Thread mode: the main loop samples both joystick axes, updates the
//!   red/blue LED brightness, redraws the cursor on the OLED and sleeps
//!   for 50 ms.
//! - Interrupt executor (EGU1_SWI1, priority 6): one task per button,
//!   woken by GPIOTE falling edges. These preempt the main loop and only
//!   touch the shared output flags and the green LED pin.
//!
//! # Button Controls
//!
//! - **Joystick**: toggle green LED, cycle border (none → single → double)
//! - **A**: enable / disable PWM brightness updates

#![no_std]
#![no_main]

mod hw;

use defmt::{info, trace, warn};
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive};
use embassy_nrf::interrupt;
use embassy_nrf::interrupt::{InterruptExt, Priority};
use embassy_nrf::pwm::SimplePwm;
use embassy_nrf::{bind_interrupts, peripherals, saadc, twim};
use embassy_time::{Duration, Timer};
use joystick_panel::config::LOOP_PERIOD_MS;
use joystick_panel::input::debounce::{ButtonAObserver, JoystickButtonObserver};
use joystick_panel::{OutputState, Panel};
use {defmt_rtt as _, panic_probe as _};

use crate::hw::buttons::watch_falling_edges;
use crate::hw::display::Oled;
use crate::hw::pwm::LedPwm;
use crate::hw::saadc::SaadcSampler;

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Flags written by the button tasks, read by the main loop.
static OUTPUT_STATE: OutputState = OutputState::new();

/// Runs the button tasks above thread mode.
static EXECUTOR_EDGES: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn EGU1_SWI1() {
    EXECUTOR_EDGES.on_interrupt()
}

#[embassy_executor::task]
async fn joystick_button_task(
    pin: AnyPin,
    observer: JoystickButtonObserver<'static, Output<'static>>,
) {
    watch_falling_edges(pin, "JOYSTICK", observer, &OUTPUT_STATE).await
}

#[embassy_executor::task]
async fn button_a_task(pin: AnyPin, observer: ButtonAObserver<'static>) {
    watch_falling_edges(pin, "A", observer, &OUTPUT_STATE).await
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("joystick-panel starting");

    // Buttons + green LED
    let green = Output::new(p.P1_12, Level::Low, OutputDrive::Standard);

    interrupt::EGU1_SWI1.set_priority(Priority::P6);
    let edge_spawner = EXECUTOR_EDGES.start(interrupt::EGU1_SWI1);
    edge_spawner.must_spawn(joystick_button_task(
        AnyPin::from(p.P0_11),
        JoystickButtonObserver::new(&OUTPUT_STATE, green),
    ));
    edge_spawner.must_spawn(button_a_task(
        AnyPin::from(p.P0_12),
        ButtonAObserver::new(&OUTPUT_STATE),
    ));
    info!("Buttons armed");

    // Joystick axes
    let mut saadc_config = saadc::Config::default();
    saadc_config.resolution = saadc::Resolution::_12BIT;
    let saadc = saadc::Saadc::new(
        p.SAADC,
        Irqs,
        saadc_config,
        [
            saadc::ChannelConfig::single_ended(p.P0_03),
            saadc::ChannelConfig::single_ended(p.P0_04),
        ],
    );
    let sampler = SaadcSampler::new(saadc).await;

    // LEDs
    let red = LedPwm::new(SimplePwm::new_1ch(p.PWM0, p.P1_10));
    let blue = LedPwm::new(SimplePwm::new_1ch(p.PWM1, p.P1_11));

    // Display
    let mut twim_config = twim::Config::default();
    twim_config.frequency = twim::Frequency::K400;
    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim_config);
    let mut oled = Oled::new(i2c);
    match oled.init() {
        Ok(()) => info!("Display ready"),
        Err(e) => warn!("Display: {}, continuing without it", e),
    }

    let mut panel = Panel::new(sampler, red, blue, oled, &OUTPUT_STATE);
    info!("Entering main loop");

    loop {
        let it = panel.iterate().await;
        trace!(
            "x={} y={} red={} blue={} frame={}",
            it.x.magnitude,
            it.y.magnitude,
            it.red_duty,
            it.blue_duty,
            it.frame
        );
        if let Err(e) = it.render {
            warn!("Display: {}, retrying next frame", e);
        }

        Timer::after(Duration::from_millis(LOOP_PERIOD_MS)).await;
    }
}
