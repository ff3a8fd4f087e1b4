//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

/// Target frame time (~20 FPS). The face only changes on events, so the
/// window does not need a high frame rate.
pub const FRAME_TIME: Duration = Duration::from_millis(50);

/// Clock tick interval. Second granularity keeps the marker moving smoothly
/// even though the time text only changes each minute.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Interval between simulated heart-rate readings (1 Hz sensor).
pub const HEART_RATE_INTERVAL: Duration = Duration::from_secs(1);

/// Interval between simulated presence readings.
pub const PRESENCE_INTERVAL: Duration = Duration::from_secs(5);

/// Simulated minutes added per frame in fast-forward mode (a day in ~72 s).
pub const FAST_FORWARD_MINUTES: u32 = 1;
