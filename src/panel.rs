//! Main loop body: sample → brightness → cursor → render.
//!
//! The firmware calls [`Panel::iterate`] forever with a fixed sleep in
//! between. `Panel` owns every peripheral the loop uses (ADC, both PWM
//! channels, display); the edge tasks only ever reach it through the
//! shared [`OutputState`].

use crate::error::Error;
use crate::input::analog::{AnalogReading, AnalogSampler, AxisChannel};
use crate::output::brightness::{apply_brightness, DutyOutput};
use crate::output::render::{CursorPosition, Frame, FrameDisplay, RenderOutcome, Renderer};
use crate::state::OutputState;

/// Summary of one loop iteration, for logging and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Iteration {
    pub x: AnalogReading,
    pub y: AnalogReading,
    /// Duty written to the red LED, `None` while PWM is disabled.
    pub red_duty: Option<u8>,
    /// Duty written to the blue LED, `None` while PWM is disabled.
    pub blue_duty: Option<u8>,
    pub frame: Frame,
    pub render: Result<RenderOutcome, Error>,
}

pub struct Panel<'a, S, R, B, D> {
    sampler: S,
    red: R,
    blue: B,
    display: D,
    renderer: Renderer,
    state: &'a OutputState,
}

impl<'a, S, R, B, D> Panel<'a, S, R, B, D>
where
    S: AnalogSampler,
    R: DutyOutput,
    B: DutyOutput,
    D: FrameDisplay,
{
    pub fn new(sampler: S, red: R, blue: B, display: D, state: &'a OutputState) -> Self {
        Self {
            sampler,
            red,
            blue,
            display,
            renderer: Renderer::new(),
            state,
        }
    }

    /// Run one pass of the loop body.
    ///
    /// Never fails: a render error is reported in the returned
    /// [`Iteration`] and the next pass redraws from scratch.
    pub async fn iterate(&mut self) -> Iteration {
        let x = self.sampler.sample(AxisChannel::X).await;
        let y = self.sampler.sample(AxisChannel::Y).await;

        let red_duty = apply_brightness(&mut self.red, x.magnitude, self.state);
        let blue_duty = apply_brightness(&mut self.blue, y.magnitude, self.state);

        let frame = Frame {
            cursor: CursorPosition::from_magnitudes(x.magnitude, y.magnitude),
            border: self.state.border_style(),
        };
        let render = self.renderer.render(&mut self.display, frame);

        Iteration {
            x,
            y,
            red_duty,
            blue_duty,
            frame,
            render,
        }
    }

    pub fn sampler_mut(&mut self) -> &mut S {
        &mut self.sampler
    }

    pub fn red(&self) -> &R {
        &self.red
    }

    pub fn blue(&self) -> &B {
        &self.blue
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}
