//! Daily activity totals and the source the host exposes them through.

use crate::error::ActivityError;
use crate::gauge::progress_fraction;

/// Activity metrics shown on the face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Metric {
    Steps,
    Calories,
}

impl Metric {
    /// Both metrics, in display order.
    pub const ALL: [Self; 2] = [Self::Steps, Self::Calories];

    /// Lowercase name for logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::Calories => "calories",
        }
    }
}

/// Today's value of one metric against its daily goal.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Progress {
    pub current: u32,
    pub goal: u32,
}

impl Progress {
    pub const fn new(
        current: u32,
        goal: u32,
    ) -> Self {
        Self { current, goal }
    }

    /// `current / goal`, 0 when the goal is zero. Not clamped above 1.
    pub fn fraction(&self) -> f32 { progress_fraction(self.current, self.goal) }
}

/// Plain activity totals: `{steps_today, steps_goal, calories_today, calories_goal}`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ActivitySnapshot {
    pub steps: Progress,
    pub calories: Progress,
}

impl ActivitySnapshot {
    pub const fn new(
        steps_today: u32,
        steps_goal: u32,
        calories_today: u32,
        calories_goal: u32,
    ) -> Self {
        Self {
            steps: Progress::new(steps_today, steps_goal),
            calories: Progress::new(calories_today, calories_goal),
        }
    }

    /// Progress for one metric.
    pub const fn get(
        &self,
        metric: Metric,
    ) -> Progress {
        match metric {
            Metric::Steps => self.steps,
            Metric::Calories => self.calories,
        }
    }
}

/// Host-provided activity data.
///
/// Each metric is read separately so one failing counter never blocks the
/// other, nor the time fields.
pub trait ActivitySource {
    fn steps(&mut self) -> Result<Progress, ActivityError>;

    fn calories(&mut self) -> Result<Progress, ActivityError>;

    /// Read one metric.
    fn read(
        &mut self,
        metric: Metric,
    ) -> Result<Progress, ActivityError> {
        match metric {
            Metric::Steps => self.steps(),
            Metric::Calories => self.calories(),
        }
    }
}

/// A snapshot always has data.
impl ActivitySource for ActivitySnapshot {
    fn steps(&mut self) -> Result<Progress, ActivityError> { Ok(self.steps) }

    fn calories(&mut self) -> Result<Progress, ActivityError> { Ok(self.calories) }
}

/// Hosts without activity tracking.
impl ActivitySource for () {
    fn steps(&mut self) -> Result<Progress, ActivityError> { Err(ActivityError::Unavailable) }

    fn calories(&mut self) -> Result<Progress, ActivityError> { Err(ActivityError::Unavailable) }
}
