//! Optional hardware capabilities and their listeners.
//!
//! Heart-rate and body-presence sensors may be missing on a given device.
//! Availability is decided once, when the listener is built, and is never
//! re-checked per tick:
//!
//! ```text
//!   NotPresent                    (capability absent, terminal)
//!   PresentUnstarted --start()--> PresentStarted   (terminal, no stop)
//! ```
//!
//! Readings arrive through the host's event loop one at a time and run to
//! completion, so the cached values are plain fields.

use crate::config::{HEART_RATE_FREQUENCY_HZ, HEART_RATE_GAUGE_MAX_BPM};

/// A capability decided at startup.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Capability<T> {
    Unavailable,
    Available(T),
}

impl<T> Capability<T> {
    /// Wrap whatever the host detected.
    pub fn detect(handle: Option<T>) -> Self {
        match handle {
            Some(handle) => Self::Available(handle),
            None => Self::Unavailable,
        }
    }

    #[inline]
    pub const fn is_available(&self) -> bool { matches!(self, Self::Available(_)) }

    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Available(handle) => Some(handle),
            Self::Unavailable => None,
        }
    }
}

impl<T> From<Option<T>> for Capability<T> {
    fn from(handle: Option<T>) -> Self { Self::detect(handle) }
}

/// Lifecycle of a sensor listener.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ListenerState {
    NotPresent,
    PresentUnstarted,
    PresentStarted,
}

/// Host heart-rate sensor. Readings come back through
/// [`WatchFace::on_heart_rate`](crate::face::WatchFace::on_heart_rate).
pub trait HeartRateSensor {
    /// Begin delivering readings at roughly `frequency_hz`.
    fn start(
        &mut self,
        frequency_hz: u32,
    );
}

/// Host body-presence sensor. Readings come back through
/// [`WatchFace::on_presence`](crate::face::WatchFace::on_presence).
pub trait PresenceSensor {
    fn start(&mut self);
}

/// Stand-in sensor type for hosts that never have the capability.
///
/// Uninhabited, so a listener over it is always `NotPresent`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoSensor {}

impl HeartRateSensor for NoSensor {
    fn start(
        &mut self,
        _frequency_hz: u32,
    ) {
        match *self {}
    }
}

impl PresenceSensor for NoSensor {
    fn start(&mut self) { match *self {} }
}

// =============================================================================
// Heart Rate
// =============================================================================

/// Gauge fraction for a heart rate, `bpm / 200`. Not clamped.
#[inline]
pub fn heart_rate_fraction(bpm: u16) -> f32 { f32::from(bpm) / HEART_RATE_GAUGE_MAX_BPM }

/// Caches the most recent heart-rate reading.
pub struct HeartRateListener<H> {
    sensor: Capability<H>,
    started: bool,
    last_bpm: Option<u16>,
}

impl<H: HeartRateSensor> HeartRateListener<H> {
    pub fn new(sensor: Option<H>) -> Self {
        Self {
            sensor: Capability::detect(sensor),
            started: false,
            last_bpm: None,
        }
    }

    pub const fn state(&self) -> ListenerState {
        match (&self.sensor, self.started) {
            (Capability::Unavailable, _) => ListenerState::NotPresent,
            (Capability::Available(_), false) => ListenerState::PresentUnstarted,
            (Capability::Available(_), true) => ListenerState::PresentStarted,
        }
    }

    #[inline]
    pub const fn is_available(&self) -> bool { self.sensor.is_available() }

    /// Start the sensor if present. Calling again has no effect.
    pub fn start(&mut self) -> ListenerState {
        if !self.started
            && let Some(sensor) = self.sensor.as_mut()
        {
            sensor.start(HEART_RATE_FREQUENCY_HZ);
            self.started = true;
        }
        self.state()
    }

    /// Record a reading. Returns `false` if the listener is not started.
    pub fn on_reading(
        &mut self,
        bpm: u16,
    ) -> bool {
        if self.state() != ListenerState::PresentStarted {
            return false;
        }
        self.last_bpm = Some(bpm);
        true
    }

    /// Most recent reading, `None` until the first one arrives.
    #[inline]
    pub const fn last_bpm(&self) -> Option<u16> { self.last_bpm }

    /// Gauge fraction for the cached reading.
    pub fn gauge_fraction(&self) -> Option<f32> { self.last_bpm.map(heart_rate_fraction) }
}

// =============================================================================
// Body Presence
// =============================================================================

/// Caches whether the device is currently worn. Observational only.
pub struct PresenceListener<P> {
    sensor: Capability<P>,
    started: bool,
    present: Option<bool>,
}

impl<P: PresenceSensor> PresenceListener<P> {
    pub fn new(sensor: Option<P>) -> Self {
        Self {
            sensor: Capability::detect(sensor),
            started: false,
            present: None,
        }
    }

    pub const fn state(&self) -> ListenerState {
        match (&self.sensor, self.started) {
            (Capability::Unavailable, _) => ListenerState::NotPresent,
            (Capability::Available(_), false) => ListenerState::PresentUnstarted,
            (Capability::Available(_), true) => ListenerState::PresentStarted,
        }
    }

    #[inline]
    pub const fn is_available(&self) -> bool { self.sensor.is_available() }

    /// Start the sensor if present. Calling again has no effect.
    pub fn start(&mut self) -> ListenerState {
        if !self.started
            && let Some(sensor) = self.sensor.as_mut()
        {
            sensor.start();
            self.started = true;
        }
        self.state()
    }

    /// Record a reading. Returns `false` if the listener is not started.
    pub fn on_reading(
        &mut self,
        present: bool,
    ) -> bool {
        if self.state() != ListenerState::PresentStarted {
            return false;
        }
        self.present = Some(present);
        true
    }

    /// Most recent worn state, `None` until the first reading.
    #[inline]
    pub const fn is_present(&self) -> Option<bool> { self.present }
}
