//! Numeric labels for the activity and heart-rate fields.
//!
//! Scaling uses integer arithmetic with half-up rounding, so `8_500` steps in
//! thousands prints `"9"` and `1_250` calories at one decimal prints `"1.3"`
//! regardless of float representation.

use core::fmt::{self, Write};

use heapless::String;

use crate::activity::Progress;
use crate::config::{HEART_RATE_PLACEHOLDER, LABEL_LEN, LabelFormat};
use crate::error::FaceError;

/// Rendered label text.
pub type LabelText = String<LABEL_LEN>;

/// Decimal places beyond this are ignored.
const MAX_DECIMALS: u8 = 3;

/// Write `value / divisor` with `decimals` places.
pub fn write_scaled<W: Write>(
    out: &mut W,
    value: u32,
    format: &LabelFormat,
) -> fmt::Result {
    let divisor = u64::from(format.divisor.max(1));
    let decimals = format.decimals.min(MAX_DECIMALS);
    let scale = 10u64.pow(u32::from(decimals));

    // Half-up rounding at the last printed place
    let scaled = (u64::from(value) * scale + divisor / 2) / divisor;
    let whole = scaled / scale;

    if decimals == 0 {
        write!(out, "{whole}")
    } else {
        write!(out, "{whole}.{:0width$}", scaled % scale, width = usize::from(decimals))
    }
}

/// `"{current}/{goal}{unit}"` with both values scaled by `format`.
pub fn format_progress(
    progress: &Progress,
    format: &LabelFormat,
) -> Result<LabelText, FaceError> {
    let mut text = LabelText::new();
    write_scaled(&mut text, progress.current, format)?;
    text.push('/').map_err(|_| FaceError::Capacity)?;
    write_scaled(&mut text, progress.goal, format)?;
    if let Some(unit) = format.unit {
        text.push_str(unit).map_err(|_| FaceError::Capacity)?;
    }
    Ok(text)
}

/// `"{bpm} bpm"`, or the placeholder when there is no reading.
pub fn format_heart_rate(bpm: Option<u16>) -> LabelText {
    let mut text = LabelText::new();
    match bpm {
        // "65535 bpm" is well inside LABEL_LEN
        Some(bpm) => write!(text, "{bpm} bpm").ok(),
        None => text.push_str(HEART_RATE_PLACEHOLDER).ok(),
    };
    text
}
