//! Cursor placement and frame drawing for the 128×64 monochrome display.
//!
//! A frame is always drawn in full: clear, square, border, then one flush.
//! The display never sees a half-drawn frame.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment,
};

use crate::config::{ADC_MAX, DOUBLE_BORDER_INSET, SCREEN_HEIGHT, SCREEN_WIDTH, SQUARE_SIZE};
use crate::error::Error;
use crate::state::BorderStyle;

/// Map an axis magnitude onto one screen axis.
///
/// `magnitude * (screen_extent - square_extent) / 4095`, truncating, so the
/// square always fits: 0 maps to 0 and 4095 maps to `screen - square`.
pub fn position(magnitude: u16, screen_extent: u32, square_extent: u32) -> u32 {
    let travel = screen_extent.saturating_sub(square_extent);
    u32::from(magnitude.min(ADC_MAX)) * travel / u32::from(ADC_MAX)
}

/// Top-left corner of the cursor square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorPosition {
    pub x: u32,
    pub y: u32,
}

impl CursorPosition {
    /// Cursor for the given X/Y magnitudes on the configured panel.
    pub fn from_magnitudes(x: u16, y: u16) -> Self {
        Self {
            x: position(x, SCREEN_WIDTH, SQUARE_SIZE),
            y: position(y, SCREEN_HEIGHT, SQUARE_SIZE),
        }
    }

    fn top_left(self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Everything one display update shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub cursor: CursorPosition,
    pub border: BorderStyle,
}

/// A display that can take an `embedded-graphics` frame and push it out
/// in one transfer.
pub trait FrameDisplay: DrawTarget<Color = BinaryColor> {
    fn flush_frame(&mut self) -> Result<(), Error>;
}

fn outline() -> PrimitiveStyle<BinaryColor> {
    PrimitiveStyleBuilder::new()
        .stroke_color(BinaryColor::On)
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build()
}

fn inset_rect(inset: u32) -> Rectangle {
    Rectangle::new(
        Point::new(inset as i32, inset as i32),
        Size::new(SCREEN_WIDTH - 2 * inset, SCREEN_HEIGHT - 2 * inset),
    )
}

/// Draw `frame` into `target` without flushing.
pub fn draw_frame<D>(target: &mut D, frame: &Frame) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    Rectangle::new(frame.cursor.top_left(), Size::new_equal(SQUARE_SIZE))
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(target)?;

    match frame.border {
        BorderStyle::None => {}
        BorderStyle::Single => {
            inset_rect(0).into_styled(outline()).draw(target)?;
        }
        BorderStyle::Double => {
            inset_rect(DOUBLE_BORDER_INSET).into_styled(outline()).draw(target)?;
        }
    }

    Ok(())
}

/// What [`Renderer::render`] did with a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderOutcome {
    /// Frame was drawn and flushed.
    Flushed,
    /// Same as the last flushed frame; nothing sent.
    Unchanged,
}

/// Owns the redraw policy: skip identical frames, retry after failures.
#[derive(Debug, Default)]
pub struct Renderer {
    last_flushed: Option<Frame>,
}

impl Renderer {
    pub const fn new() -> Self {
        Self { last_flushed: None }
    }

    /// Clear, draw and flush `frame` unless it is already on screen.
    pub fn render<D: FrameDisplay>(
        &mut self,
        display: &mut D,
        frame: Frame,
    ) -> Result<RenderOutcome, Error> {
        if self.last_flushed == Some(frame) {
            return Ok(RenderOutcome::Unchanged);
        }

        // Forget the cached frame first: if anything below fails the
        // screen content is unknown and the next call must redraw.
        self.last_flushed = None;

        draw_frame(display, &frame).map_err(|_| Error::Display)?;
        display.flush_frame()?;

        self.last_flushed = Some(frame);
        Ok(RenderOutcome::Flushed)
    }
}
