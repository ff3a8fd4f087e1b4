//! Error types for the watch face core.
//!
//! Nothing in the render path surfaces these to the host: the tick handler
//! and the sensor listeners degrade locally. They exist for the pure helpers
//! (time samples, gauge buffers) and for activity sources to report why a
//! reading is missing.

use thiserror_no_std::Error;

/// Errors produced by the formatting helpers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceError {
    /// A time component is outside its wall-clock range.
    #[error("invalid time {hour}:{minute}:{second}")]
    InvalidTime { hour: u8, minute: u8, second: u8 },

    /// Requested gauge width does not fit the fixed gauge buffer.
    #[error("gauge width {width} exceeds buffer capacity {capacity}")]
    GaugeTooWide { width: u32, capacity: usize },

    /// A formatted string did not fit its fixed-size buffer.
    #[error("formatted text exceeds buffer capacity")]
    Capacity,
}

/// Errors reported by an [`ActivitySource`](crate::activity::ActivitySource).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityError {
    /// The host has no activity data for this metric right now.
    #[error("activity data unavailable")]
    Unavailable,

    /// The host returned data that cannot be interpreted.
    #[error("activity data malformed")]
    Malformed,
}

impl From<core::fmt::Error> for FaceError {
    fn from(_: core::fmt::Error) -> Self { Self::Capacity }
}
