//! Time samples and wall-clock formatting.

use core::fmt::Write;

use heapless::String;

use crate::config::{MINUTES_PER_DAY, TIME_TEXT_LEN};
use crate::error::FaceError;

/// Formatted time text, e.g. `"09:05"` or `"9:05"`.
pub type TimeText = String<TIME_TEXT_LEN>;

/// Two-digit component text.
pub type ComponentText = String<2>;

/// Hour display convention, taken from the user's preferences.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ClockMode {
    /// `00` to `23`, zero-padded.
    #[default]
    TwentyFourHour,
    /// `1` to `12`, not padded.
    TwelveHour,
}

impl ClockMode {
    /// Switch between the two conventions.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::TwentyFourHour => Self::TwelveHour,
            Self::TwelveHour => Self::TwentyFourHour,
        }
    }
}

/// One clock reading, as delivered by the host tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TimeSample {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeSample {
    /// Midnight.
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Build a sample, rejecting out-of-range components.
    pub const fn new(
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, FaceError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(FaceError::InvalidTime { hour, minute, second });
        }
        Ok(Self { hour, minute, second })
    }

    #[inline]
    pub const fn hour(&self) -> u8 { self.hour }

    #[inline]
    pub const fn minute(&self) -> u8 { self.minute }

    #[inline]
    pub const fn second(&self) -> u8 { self.second }

    /// Minutes since midnight (`hour * 60 + minute`).
    pub const fn elapsed_minutes(&self) -> u32 { self.hour as u32 * 60 + self.minute as u32 }

    /// Fraction of the day elapsed, `elapsed_minutes / 1440`, in `[0, 1)`.
    pub fn day_fraction(&self) -> f32 { self.elapsed_minutes() as f32 / MINUTES_PER_DAY as f32 }

    /// The sample `minutes` later, wrapping at midnight. Seconds are kept.
    pub const fn plus_minutes(
        &self,
        minutes: u32,
    ) -> Self {
        let total = (self.elapsed_minutes() + minutes % MINUTES_PER_DAY) % MINUTES_PER_DAY;
        Self {
            hour: (total / 60) as u8,
            minute: (total % 60) as u8,
            second: self.second,
        }
    }
}

/// Two-digit, zero-padded text for a clock component (`3` -> `"03"`).
///
/// Values of 100 or more do not fit and are reduced modulo 100.
pub fn zero_pad(value: u8) -> ComponentText {
    let value = value % 100;
    let mut text = ComponentText::new();
    text.push(char::from(b'0' + value / 10)).ok();
    text.push(char::from(b'0' + value % 10)).ok();
    text
}

/// Hour text for the given clock mode.
///
/// 24-hour mode pads to two digits. 12-hour mode maps `hour % 12` with 0 shown
/// as 12 and no padding.
pub fn format_hour(
    hour: u8,
    mode: ClockMode,
) -> ComponentText {
    match mode {
        ClockMode::TwentyFourHour => zero_pad(hour),
        ClockMode::TwelveHour => {
            let hour = match hour % 12 {
                0 => 12,
                h => h,
            };
            let mut text = ComponentText::new();
            // Two digits at most, always fits
            write!(text, "{hour}").ok();
            text
        }
    }
}

/// `"HH:MM"` (24-hour) or `"H:MM"` (12-hour).
pub fn format_time(
    time: &TimeSample,
    mode: ClockMode,
) -> TimeText {
    let mut text = TimeText::new();
    text.push_str(&format_hour(time.hour(), mode)).ok();
    text.push(':').ok();
    text.push_str(&zero_pad(time.minute())).ok();
    text
}
