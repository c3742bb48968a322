//! Host stand-ins for the panel's hardware.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use joystick_panel::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use joystick_panel::input::analog::{AnalogReading, AnalogSampler, AxisChannel};
use joystick_panel::output::brightness::DutyOutput;
use joystick_panel::output::render::FrameDisplay;
use joystick_panel::Error;

/// Returns fixed magnitudes and records the order channels were asked for.
pub struct StickSampler {
    pub x: u16,
    pub y: u16,
    pub requests: Vec<AxisChannel>,
}

impl StickSampler {
    pub fn at(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            requests: Vec::new(),
        }
    }
}

impl AnalogSampler for StickSampler {
    async fn sample(&mut self, channel: AxisChannel) -> AnalogReading {
        self.requests.push(channel);
        let magnitude = match channel {
            AxisChannel::X => self.x,
            AxisChannel::Y => self.y,
        };
        AnalogReading::new(channel, magnitude)
    }
}

#[derive(Default)]
pub struct Led {
    pub duty: Option<u8>,
}

impl DutyOutput for Led {
    fn set_duty(&mut self, duty: u8) {
        self.duty = Some(duty);
    }
}

/// 128×64 frame buffer that counts flushes.
pub struct Screen {
    pixels: Vec<bool>,
    pub flushes: usize,
    pub fail_flush: bool,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            pixels: vec![false; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
            flushes: 0,
            fail_flush: false,
        }
    }

    pub fn on(&self, x: u32, y: u32) -> bool {
        self.pixels[(y * SCREEN_WIDTH + x) as usize]
    }

    /// Bounding box of lit pixels as (min_x, min_y, max_x, max_y).
    pub fn lit_bounds(&self) -> Option<(u32, u32, u32, u32)> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for y in 0..SCREEN_HEIGHT {
            for x in 0..SCREEN_WIDTH {
                if !self.on(x, y) {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        bounds
    }
}

impl OriginDimensions for Screen {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl DrawTarget for Screen {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if let (Ok(x), Ok(y)) = (u32::try_from(p.x), u32::try_from(p.y)) {
                if x < SCREEN_WIDTH && y < SCREEN_HEIGHT {
                    self.pixels[(y * SCREEN_WIDTH + x) as usize] = color.is_on();
                }
            }
        }
        Ok(())
    }
}

impl FrameDisplay for Screen {
    fn flush_frame(&mut self) -> Result<(), Error> {
        if self.fail_flush {
            return Err(Error::Display);
        }
        self.flushes += 1;
        Ok(())
    }
}
