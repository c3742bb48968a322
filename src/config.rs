//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and mapping
//! constants live here so they can be tuned in one place.

// Display

/// SSD1306 panel width in pixels.
pub const SCREEN_WIDTH: u32 = 128;

/// SSD1306 panel height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

/// Side length of the cursor square (pixels).
pub const SQUARE_SIZE: u32 = 8;

/// Inset of the inner line of the double border (pixels).
pub const DOUBLE_BORDER_INSET: u32 = 2;

/// 7-bit I²C address of the SSD1306.
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

/// I²C bus clock for the display (Hz). Selected as `twim::Frequency::K400`.
pub const DISPLAY_I2C_FREQ_HZ: u32 = 400_000;

// Analog input

/// Full-scale SAADC result at 12-bit resolution.
pub const ADC_MAX: u16 = 4095;

/// Nominal joystick rest position.
pub const ADC_CENTER: u16 = 2048;

// PWM

/// PWM counter top - 8-bit duty resolution.
pub const PWM_MAX_DUTY: u16 = 255;

/// Deflection counts per brightness step.
pub const BRIGHTNESS_DIVISOR: u16 = 16;

// Timing

/// Minimum spacing between two accepted edges on the same button (ms).
pub const DEBOUNCE_MS: u64 = 200;

/// Sleep at the end of each main loop iteration (ms).
pub const LOOP_PERIOD_MS: u64 = 50;

// GPIO pin assignments (nRF52840-DK)
//
// These are logical names; actual `embassy_nrf::peripherals::*` values are
// picked in `main.rs`.  Adjust for your wiring.
//
//   Red LED (PWM0)       → P1.10
//   Blue LED (PWM1)      → P1.11
//   Green LED            → P1.12
//   Joystick X           → P0.03 (AIN1)
//   Joystick Y           → P0.04 (AIN2)
//   Joystick button      → P0.11
//   Button A             → P0.12
//   I²C SDA              → P0.26
//   I²C SCL              → P0.27
