//! SAADC-backed joystick sampler.

use defmt::info;
use embassy_nrf::saadc::Saadc;
use joystick_panel::input::analog::{AnalogReading, AnalogSampler, AxisChannel};

/// Both joystick axes on one SAADC, scan order X then Y.
pub struct SaadcSampler<'d> {
    saadc: Saadc<'d, 2>,
}

impl<'d> SaadcSampler<'d> {
    /// Take ownership of a configured SAADC and run offset calibration.
    pub async fn new(saadc: Saadc<'d, 2>) -> Self {
        saadc.calibrate().await;
        info!("SAADC: calibrated");
        Self { saadc }
    }
}

impl AnalogSampler for SaadcSampler<'_> {
    async fn sample(&mut self, channel: AxisChannel) -> AnalogReading {
        // One scan per request; only the requested slot is kept.
        let mut buf = [0i16; 2];
        self.saadc.sample(&mut buf).await;
        AnalogReading::from_raw(channel, buf[channel.index()])
    }
}
