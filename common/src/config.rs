//! Watch face configuration.
//!
//! Fixed values (screen geometry, buffer capacities, placeholders) are
//! compile-time constants with `const` assertions, so a bad edit fails the
//! build instead of the first render. Values the host may legitimately vary
//! (12/24-hour clock, label scaling, marker bias) live in [`FaceConfig`].

use crate::clock::ClockMode;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (square 336x336 AMOLED).
pub const SCREEN_WIDTH: u32 = 336;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 336;

// =============================================================================
// Gauge Configuration
// =============================================================================

/// Default track width of every gauge, in characters.
pub const GAUGE_WIDTH: u32 = 17;

/// Capacity of a rendered gauge buffer. Widths above this are rejected.
pub const MAX_GAUGE_WIDTH: usize = 64;

/// Glyph for the filled part of a gauge.
pub const GAUGE_FILLED: char = '|';

/// Glyph for the unfilled part of a gauge.
pub const GAUGE_BLANK: char = ' ';

const _: () = assert!(GAUGE_WIDTH > 0);
const _: () = assert!(GAUGE_WIDTH as usize <= MAX_GAUGE_WIDTH);

// =============================================================================
// Time Configuration
// =============================================================================

/// Minutes in one day. Denominator of the day fraction.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Default marker offset in pixels: half the marker icon width, pulled left so
/// the icon is centred on its computed position.
pub const MARKER_BIAS: i32 = -50;

/// Default number of discrete marker positions across one day.
pub const MARKER_RESOLUTION: u32 = 100;

// =============================================================================
// Heart Rate Configuration
// =============================================================================

/// Heart rate shown as a full gauge. Readings above it overflow the gauge.
pub const HEART_RATE_GAUGE_MAX_BPM: f32 = 200.0;

/// Sampling frequency requested from the heart-rate sensor.
pub const HEART_RATE_FREQUENCY_HZ: u32 = 1;

/// Heart-rate label shown while no reading is available.
pub const HEART_RATE_PLACEHOLDER: &str = "N/A";

const _: () = assert!(HEART_RATE_GAUGE_MAX_BPM > 0.0);

// =============================================================================
// Label Configuration
// =============================================================================

/// Activity label shown when a metric has never been read successfully.
pub const ACTIVITY_PLACEHOLDER: &str = "--/--";

/// Capacity of label buffers (time, activity, heart rate).
pub const LABEL_LEN: usize = 32;

/// Capacity of the time text buffer ("23:59").
pub const TIME_TEXT_LEN: usize = 8;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// How an activity counter is scaled and printed.
///
/// `8_500` steps with `divisor = 1000, decimals = 0` prints `"9"`; calories
/// `1_234` with `divisor = 1000, decimals = 1` prints `"1.2"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelFormat {
    /// Each value is divided by this before printing. Zero is treated as 1.
    pub divisor: u32,
    /// Decimal places (0 or 1; larger values are capped at 3).
    pub decimals: u8,
    /// Optional suffix appended after the goal (e.g. `"k"`).
    pub unit: Option<&'static str>,
}

impl LabelFormat {
    /// Print counters as-is.
    pub const PLAIN: Self = Self {
        divisor: 1,
        decimals: 0,
        unit: None,
    };

    /// Thousands, whole numbers.
    pub const THOUSANDS: Self = Self {
        divisor: 1000,
        decimals: 0,
        unit: None,
    };

    /// Thousands, one decimal place.
    pub const THOUSANDS_TENTHS: Self = Self {
        divisor: 1000,
        decimals: 1,
        unit: None,
    };

    /// Same format with a unit suffix.
    pub const fn with_unit(
        self,
        unit: &'static str,
    ) -> Self {
        Self {
            unit: Some(unit),
            ..self
        }
    }
}

/// Runtime configuration for a [`WatchFace`](crate::face::WatchFace).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceConfig {
    /// 12- or 24-hour clock, from the user's preferences.
    pub clock_mode: ClockMode,
    /// Track width of every gauge, in characters.
    pub gauge_width: u32,
    /// Steps label scaling.
    pub steps_format: LabelFormat,
    /// Calories label scaling.
    pub calories_format: LabelFormat,
    /// Pixel offset added to the marker position.
    pub marker_bias: i32,
    /// Discrete marker positions per day; `0` disables quantization.
    pub marker_resolution: u32,
}

impl FaceConfig {
    /// Layout of the stock face: 24-hour clock, steps in thousands,
    /// calories in thousands with one decimal.
    pub const DEFAULT: Self = Self {
        clock_mode: ClockMode::TwentyFourHour,
        gauge_width: GAUGE_WIDTH,
        steps_format: LabelFormat::THOUSANDS,
        calories_format: LabelFormat::THOUSANDS_TENTHS,
        marker_bias: MARKER_BIAS,
        marker_resolution: MARKER_RESOLUTION,
    };

    /// Same configuration with a different clock mode.
    pub const fn with_clock_mode(
        self,
        clock_mode: ClockMode,
    ) -> Self {
        Self { clock_mode, ..self }
    }

    /// Same configuration with a different marker bias.
    pub const fn with_marker_bias(
        self,
        marker_bias: i32,
    ) -> Self {
        Self { marker_bias, ..self }
    }
}

impl Default for FaceConfig {
    fn default() -> Self { Self::DEFAULT }
}

#[cfg(test)]
#[allow(clippy::assertions_on_constants)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_width_fits_buffer() {
        assert!(GAUGE_WIDTH as usize <= MAX_GAUGE_WIDTH);
    }

    #[test]
    fn test_default_config_matches_stock_face() {
        let config = FaceConfig::default();
        assert_eq!(config.clock_mode, ClockMode::TwentyFourHour);
        assert_eq!(config.gauge_width, 17);
        assert_eq!(config.steps_format.divisor, 1000);
        assert_eq!(config.steps_format.decimals, 0);
        assert_eq!(config.calories_format.decimals, 1);
        assert_eq!(config.marker_bias, -50);
    }

    #[test]
    fn test_with_helpers_only_touch_one_field() {
        let config = FaceConfig::DEFAULT
            .with_clock_mode(ClockMode::TwelveHour)
            .with_marker_bias(0);
        assert_eq!(config.clock_mode, ClockMode::TwelveHour);
        assert_eq!(config.marker_bias, 0);
        assert_eq!(config.steps_format, FaceConfig::DEFAULT.steps_format);
    }

    #[test]
    fn test_label_format_with_unit() {
        let fmt = LabelFormat::THOUSANDS.with_unit("k");
        assert_eq!(fmt.unit, Some("k"));
        assert_eq!(fmt.divisor, 1000);
    }
}
