//! Synthetic host inputs: activity totals and sensor readings.
//!
//! The values only need to look plausible and move over time so every
//! element of the face can be watched changing without hardware.

use log::info;
use watchface_common::{ActivityError, ActivitySource, HeartRateSensor, PresenceSensor, Progress, TimeSample};

// =============================================================================
// Activity
// =============================================================================

/// Daily step goal used by the simulator.
const STEPS_GOAL: u32 = 10_000;

/// Daily calorie goal used by the simulator.
const CALORIES_GOAL: u32 = 2_500;

/// Steps credited per simulated minute already elapsed at startup.
const STEPS_PER_MINUTE: u32 = 7;

/// Activity totals that grow on every tick.
pub struct MockActivity {
    steps: u32,
    calories: u32,
    ticks: u32,
    available: bool,
}

impl MockActivity {
    /// Totals consistent with how much of the day has passed.
    pub fn new(now: &TimeSample) -> Self {
        let minutes = now.elapsed_minutes();
        Self {
            steps: minutes * STEPS_PER_MINUTE,
            calories: minutes * CALORIES_GOAL / (24 * 60),
            ticks: 0,
            available: true,
        }
    }

    /// Advance by one tick. Steps come in bursts, calories trickle.
    pub fn advance(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        self.steps = self.steps.saturating_add(fake_burst(self.ticks));
        if self.ticks.is_multiple_of(3) {
            self.calories = self.calories.saturating_add(1);
        }
    }

    /// Simulate the host losing activity data (or getting it back).
    pub fn toggle_available(&mut self) -> bool {
        self.available = !self.available;
        self.available
    }

    fn read(
        &self,
        current: u32,
        goal: u32,
    ) -> Result<Progress, ActivityError> {
        if self.available {
            Ok(Progress::new(current, goal))
        } else {
            Err(ActivityError::Unavailable)
        }
    }
}

impl ActivitySource for MockActivity {
    fn steps(&mut self) -> Result<Progress, ActivityError> { MockActivity::read(self, self.steps, STEPS_GOAL) }

    fn calories(&mut self) -> Result<Progress, ActivityError> { MockActivity::read(self, self.calories, CALORIES_GOAL) }
}

/// Step burst for a tick: walking for 20 ticks, resting for 10.
fn fake_burst(tick: u32) -> u32 { if tick % 30 < 20 { 2 } else { 0 } }

// =============================================================================
// Sensors
// =============================================================================

/// Sensor handle that only records being started. Readings are generated by
/// the main loop and delivered through the face callbacks.
pub struct MockSensor {
    name: &'static str,
}

impl MockSensor {
    pub const fn new(name: &'static str) -> Self { Self { name } }
}

impl HeartRateSensor for MockSensor {
    fn start(
        &mut self,
        frequency_hz: u32,
    ) {
        info!("{} started at {} Hz", self.name, frequency_hz);
    }
}

impl PresenceSensor for MockSensor {
    fn start(&mut self) {
        info!("{} started", self.name);
    }
}

/// Heart rate oscillating between about 60 and 180 bpm, with a short
/// excursion above the 200 bpm gauge range every few minutes.
pub fn fake_heart_rate(t: f32) -> u16 {
    let base = 120.0 + 60.0 * (t * 0.05).sin();
    let spike = if (t as u32) % 240 < 5 { 95.0 } else { 0.0 };
    (base + spike).clamp(0.0, f32::from(u16::MAX)) as u16
}
