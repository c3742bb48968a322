//! Joystick axis readings.

use crate::config::ADC_MAX;

/// Which joystick axis a reading came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisChannel {
    X,
    Y,
}

impl AxisChannel {
    /// Slot of this channel in the ADC scan order.
    pub const fn index(self) -> usize {
        match self {
            AxisChannel::X => 0,
            AxisChannel::Y => 1,
        }
    }
}

/// One 12-bit sample, taken fresh every loop iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogReading {
    pub channel: AxisChannel,
    /// Always within `0..=4095`.
    pub magnitude: u16,
}

impl AnalogReading {
    pub fn new(channel: AxisChannel, magnitude: u16) -> Self {
        Self {
            channel,
            magnitude: magnitude.min(ADC_MAX),
        }
    }

    /// Build a reading from a signed SAADC result.
    ///
    /// Single-ended conversions can dip a few counts below zero near
    /// ground; those clamp to 0.
    pub fn from_raw(channel: AxisChannel, raw: i16) -> Self {
        let magnitude = raw.clamp(0, ADC_MAX as i16) as u16;
        Self { channel, magnitude }
    }
}

/// Source of axis samples.
///
/// One ADC serves both channels, so callers sample one channel at a time;
/// the `&mut self` receiver rules out overlapping conversions.
#[allow(async_fn_in_trait)]
pub trait AnalogSampler {
    async fn sample(&mut self, channel: AxisChannel) -> AnalogReading;
}
