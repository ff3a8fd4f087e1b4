//! Color constants for the simulated watch face.
//!
//! Rgb565 is the native format of the simulated AMOLED panel, so colors need
//! no conversion when written to the display buffer.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Face background; AMOLED pixels are off.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Time text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Heart-rate gauge.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). Steps gauge.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow (31, 63, 0). Marker icon.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors
// =============================================================================

/// Orange for the calories gauge.
/// RGB565: (31, 32, 0) - slightly darker than yellow.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Light blue for the time-of-day gauge.
/// RGB565: (8, 40, 31).
pub const SKY: Rgb565 = Rgb565::new(8, 40, 31);

/// Dark gray for captions, gauge brackets and the log overlay.
/// RGB565: (12, 24, 12) - roughly 40% brightness.
pub const GRAY: Rgb565 = Rgb565::new(12, 24, 12);
