//! Host-testable core of joystick-panel.
//!
//! This crate holds the logic that does not depend on the nRF52840:
//! debouncing, output flags, brightness mapping, cursor placement,
//! frame drawing and the main loop body. The firmware binary
//! (`main.rs`, `embedded` feature) binds these to embassy-nrf peripherals.
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod panel;
pub mod state;

// ═══════════════════════════════════════════════════════════════════════════
// Inputs: joystick axes + debounced buttons
// ═══════════════════════════════════════════════════════════════════════════

pub mod input {
    pub mod analog;
    pub mod debounce;
}

// ═══════════════════════════════════════════════════════════════════════════
// Outputs: LED brightness + display frames
// ═══════════════════════════════════════════════════════════════════════════

pub mod output {
    pub mod brightness;
    pub mod render;
}

pub use error::Error;
pub use panel::{Iteration, Panel};
pub use state::{BorderStyle, OutputState};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
