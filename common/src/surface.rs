//! The display surface the face writes to.
//!
//! The host owns the actual elements (text labels, the moving marker icon)
//! and addresses them by stable names. The core only ever sets text and
//! x offsets, through [`Surface`].

use heapless::String;

use crate::config::{LABEL_LEN, MAX_GAUGE_WIDTH, SCREEN_WIDTH};

/// Addressable display elements.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ElementId {
    /// Time text (`"09:05"`).
    Time,
    /// Steps label (`"9/10"`).
    Steps,
    /// Calories label (`"1.2/2.5"`).
    Calories,
    /// Heart-rate label (`"72 bpm"` or placeholder).
    HeartRate,
    /// Time-of-day gauge.
    TimeGauge,
    /// Steps gauge.
    StepsGauge,
    /// Calories gauge.
    CaloriesGauge,
    /// Heart-rate gauge.
    HeartRateGauge,
    /// Icon sliding across the screen with the time of day.
    Marker,
}

impl ElementId {
    /// Every element, labels first.
    pub const ALL: [Self; 9] = [
        Self::Time,
        Self::Steps,
        Self::Calories,
        Self::HeartRate,
        Self::TimeGauge,
        Self::StepsGauge,
        Self::CaloriesGauge,
        Self::HeartRateGauge,
        Self::Marker,
    ];

    /// Stable element name in the host layout.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Steps => "steps",
            Self::Calories => "calories",
            Self::HeartRate => "hr",
            Self::TimeGauge => "time_progress",
            Self::StepsGauge => "steps_progress",
            Self::CaloriesGauge => "calories_progress",
            Self::HeartRateGauge => "hr_progress",
            Self::Marker => "bike",
        }
    }

    /// Look an element up by its layout name.
    pub fn from_name(name: &str) -> Option<Self> { Self::ALL.into_iter().find(|id| id.name() == name) }

    #[inline]
    pub const fn is_gauge(self) -> bool {
        matches!(
            self,
            Self::TimeGauge | Self::StepsGauge | Self::CaloriesGauge | Self::HeartRateGauge
        )
    }
}

/// Text and position sink for the render cycle.
pub trait Surface {
    /// Replace an element's text.
    fn set_text(
        &mut self,
        id: ElementId,
        text: &str,
    );

    /// Move an element horizontally.
    fn set_x(
        &mut self,
        id: ElementId,
        x: i32,
    );

    /// Width of the root element in pixels.
    fn width(&self) -> u32;
}

/// Host display power settings. Touched once at startup, never per tick.
pub trait DisplayPower {
    fn set_always_on_allowed(
        &mut self,
        allowed: bool,
    );
}

// =============================================================================
// In-memory Surface
// =============================================================================

/// Capacity of a [`FaceFrame`] slot: the longer of a label and a gauge.
const SLOT_LEN: usize = if LABEL_LEN > MAX_GAUGE_WIDTH { LABEL_LEN } else { MAX_GAUGE_WIDTH };

/// Text held by a [`FaceFrame`] slot.
pub type SlotText = String<SLOT_LEN>;

/// Latest value of every element.
///
/// Hosts that redraw a whole frame (the simulator) render from this; tests
/// compare two frames for equality.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FaceFrame {
    texts: [SlotText; 9],
    marker_x: i32,
    width: u32,
    always_on_allowed: bool,
    writes: u32,
}

impl FaceFrame {
    /// Blank frame for a surface `width` pixels wide.
    pub fn new(width: u32) -> Self {
        Self {
            texts: Default::default(),
            marker_x: 0,
            width,
            always_on_allowed: false,
            writes: 0,
        }
    }

    /// Current text of an element. The marker has no text.
    pub fn text(
        &self,
        id: ElementId,
    ) -> &str {
        &self.texts[Self::slot(id)]
    }

    /// Current marker x offset.
    #[inline]
    pub const fn marker_x(&self) -> i32 { self.marker_x }

    #[inline]
    pub const fn always_on_allowed(&self) -> bool { self.always_on_allowed }

    /// Total `set_text`/`set_x` calls received. Not part of equality checks
    /// callers care about; use [`FaceFrame::same_content`] for those.
    #[inline]
    pub const fn writes(&self) -> u32 { self.writes }

    /// Same texts and marker position, ignoring write counts.
    pub fn same_content(
        &self,
        other: &Self,
    ) -> bool {
        self.texts == other.texts && self.marker_x == other.marker_x
    }

    const fn slot(id: ElementId) -> usize {
        match id {
            ElementId::Time => 0,
            ElementId::Steps => 1,
            ElementId::Calories => 2,
            ElementId::HeartRate => 3,
            ElementId::TimeGauge => 4,
            ElementId::StepsGauge => 5,
            ElementId::CaloriesGauge => 6,
            ElementId::HeartRateGauge => 7,
            ElementId::Marker => 8,
        }
    }
}

impl Default for FaceFrame {
    fn default() -> Self { Self::new(SCREEN_WIDTH) }
}

impl Surface for FaceFrame {
    fn set_text(
        &mut self,
        id: ElementId,
        text: &str,
    ) {
        let slot = &mut self.texts[Self::slot(id)];
        slot.clear();
        // Truncate rather than drop the whole update
        for c in text.chars() {
            if slot.push(c).is_err() {
                break;
            }
        }
        self.writes = self.writes.wrapping_add(1);
    }

    fn set_x(
        &mut self,
        id: ElementId,
        x: i32,
    ) {
        if id == ElementId::Marker {
            self.marker_x = x;
        }
        self.writes = self.writes.wrapping_add(1);
    }

    fn width(&self) -> u32 { self.width }
}

impl DisplayPower for FaceFrame {
    fn set_always_on_allowed(
        &mut self,
        allowed: bool,
    ) {
        self.always_on_allowed = allowed;
    }
}
