//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` are `const`, so the face redraw builds no
//! style objects per frame.

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_12_POINT, PROFONT_24_POINT};

use crate::colors::{GRAY, GREEN, ORANGE, RED, SKY, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text. Time and status line.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Captions and gauges.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Activity labels.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Large white time text.
pub const TIME_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// Activity and heart-rate values.
pub const VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, WHITE);

/// Small gray captions ("STEPS", "KCAL") and the log overlay.
pub const CAPTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);

/// Time-of-day gauge glyphs.
pub const TIME_GAUGE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, SKY);

/// Steps gauge glyphs.
pub const STEPS_GAUGE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, GREEN);

/// Calories gauge glyphs.
pub const CALORIES_GAUGE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, ORANGE);

/// Heart-rate gauge glyphs.
pub const HEART_RATE_GAUGE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, RED);
