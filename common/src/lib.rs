//! Render core for the activity watch face.
//!
//! This crate contains the platform-agnostic logic shared by every host
//! (the desktop simulator, a device build):
//!
//! - [`gauge`]: Fixed-width text gauges (`|||||     `)
//! - [`clock`]: Time samples and 12/24-hour formatting
//! - [`label`]: Scaled activity labels and the heart-rate label
//! - [`activity`]: Daily totals and the host activity source trait
//! - [`sensors`]: Optional heart-rate and body-presence capabilities
//! - [`surface`]: Display element names and the surface traits
//! - [`face`]: The tick handler and sensor callbacks
//! - [`config`]: Layout constants and runtime configuration
//! - [`debug_log`]: Ring buffer of recent observational messages
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` and allocation-free: all text is built in
//! `heapless::String` buffers sized in [`config`].

#![no_std]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod activity;
pub mod clock;
pub mod config;
pub mod debug_log;
pub mod error;
pub mod face;
pub mod gauge;
pub mod label;
pub mod sensors;
pub mod surface;

// Re-export commonly used items
pub use activity::{ActivitySnapshot, ActivitySource, Metric, Progress};
pub use clock::{ClockMode, TimeSample, format_time};
pub use config::{FaceConfig, LabelFormat};
pub use error::{ActivityError, FaceError};
pub use face::WatchFace;
pub use gauge::render_bar;
pub use sensors::{HeartRateSensor, NoSensor, PresenceSensor};
pub use surface::{DisplayPower, ElementId, FaceFrame, Surface};
