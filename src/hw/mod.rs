//! nRF52840 bindings for the panel's traits.
//!
//! ## Components
//!
//! - **Buttons**: GPIOTE falling-edge tasks feeding the edge observers
//! - **SAADC**: both joystick axes, 12-bit
//! - **PWM**: red and blue LEDs, one PWM instance each
//! - **Display**: SSD1306 128×64 OLED via I²C (TWIM0)

pub mod buttons;
pub mod display;
pub mod pwm;
pub mod saadc;
