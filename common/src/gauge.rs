//! Text gauges: fixed-width bars like `|||||||          `.
//!
//! A gauge is `width` characters long. The first `floor(width * fraction)`
//! are [`GAUGE_FILLED`], the rest [`GAUGE_BLANK`]. The fraction is never
//! clamped by callers, so the renderer owns both edges:
//!
//! - fill counts at or below zero (negative or NaN fraction) draw nothing
//! - fill counts above `width` (fraction > 1) draw a full track, never longer
//!
//! [`Gauge`] implements `Display` and works for any width. [`render_bar`]
//! renders into a fixed [`GaugeText`] buffer for the display surface.

use core::fmt::{self, Write};

use heapless::String;
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::config::{GAUGE_BLANK, GAUGE_FILLED, MAX_GAUGE_WIDTH};
use crate::error::FaceError;

/// Rendered gauge text.
pub type GaugeText = String<MAX_GAUGE_WIDTH>;

/// Number of filled glyphs for a track of `width` at `fraction`.
pub fn fill_count(
    width: u32,
    fraction: f32,
) -> u32 {
    let raw = (width as f32 * fraction).floor();
    if raw.is_nan() || raw <= 0.0 {
        0
    } else if raw >= width as f32 {
        width
    } else {
        raw as u32
    }
}

/// A gauge that can be written to any `fmt::Write` sink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gauge {
    pub width: u32,
    pub fraction: f32,
}

impl Gauge {
    pub const fn new(
        width: u32,
        fraction: f32,
    ) -> Self {
        Self { width, fraction }
    }

    /// Filled glyphs in this gauge.
    pub fn filled(&self) -> u32 { fill_count(self.width, self.fraction) }
}

impl fmt::Display for Gauge {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let filled = self.filled();
        for i in 0..self.width {
            f.write_char(if i < filled { GAUGE_FILLED } else { GAUGE_BLANK })?;
        }
        Ok(())
    }
}

/// Render a gauge of `width` characters at `fraction`.
pub fn render_bar(
    width: u32,
    fraction: f32,
) -> Result<GaugeText, FaceError> {
    if width as usize > MAX_GAUGE_WIDTH {
        return Err(FaceError::GaugeTooWide {
            width,
            capacity: MAX_GAUGE_WIDTH,
        });
    }

    let mut text = GaugeText::new();
    write!(text, "{}", Gauge::new(width, fraction))?;
    Ok(text)
}

/// Ratio of `current` to `goal`, or 0 when there is no goal.
pub fn progress_fraction(
    current: u32,
    goal: u32,
) -> f32 {
    if goal == 0 {
        0.0
    } else {
        current as f32 / goal as f32
    }
}

// =============================================================================
// Tests
// =============================================================================
