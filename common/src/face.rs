//! The watch face render controller.
//!
//! [`WatchFace`] owns the configuration and the only state that outlives a
//! tick: cached sensor readings and the last good activity totals. The host
//! event loop calls one method per event, each running to completion:
//!
//! | Event | Method | Writes |
//! |-------|--------|--------|
//! | startup | [`WatchFace::start`] | always-on permission, `hr` placeholder |
//! | clock tick (1 Hz) | [`WatchFace::on_tick`] | every element |
//! | heart-rate reading | [`WatchFace::on_heart_rate`] | `hr`, `hr_progress` |
//! | presence reading | [`WatchFace::on_presence`] | nothing (logged only) |
//!
//! # Failure Isolation
//!
//! Each field of a tick is computed on its own. A failing activity metric
//! falls back to its last good value (or a placeholder) without touching the
//! time fields or the other metric.

use core::fmt::{self, Write};

use heapless::String;
use log::Level;

use crate::activity::{ActivitySource, Metric, Progress};
use crate::clock::{ClockMode, TimeSample, format_time};
use crate::config::{ACTIVITY_PLACEHOLDER, FaceConfig, HEART_RATE_PLACEHOLDER, LabelFormat, MAX_GAUGE_WIDTH, MINUTES_PER_DAY};
use crate::debug_log::{DebugLog, LOG_LINE_LENGTH};
use crate::gauge::render_bar;
use crate::label::{format_heart_rate, format_progress};
use crate::sensors::{HeartRateListener, HeartRateSensor, ListenerState, PresenceListener, PresenceSensor};
use crate::surface::{DisplayPower, ElementId, Surface};

/// Marker x offset for `elapsed_minutes` into the day.
///
/// The day fraction is `elapsed_minutes / 1440`. With a non-zero
/// `resolution` it is first rounded (half up) to the nearest
/// `1 / resolution` of the day. The scaled offset is then shifted by `bias`.
pub fn marker_position(
    elapsed_minutes: u32,
    screen_width: u32,
    resolution: u32,
    bias: i32,
) -> i32 {
    let day = u64::from(MINUTES_PER_DAY);
    let elapsed = u64::from(elapsed_minutes.min(MINUTES_PER_DAY));
    let width = u64::from(screen_width);

    let offset = if resolution == 0 {
        elapsed * width / day
    } else {
        let resolution = u64::from(resolution);
        let steps = (2 * elapsed * resolution + day) / (2 * day);
        steps * width / resolution
    };

    i32::try_from(offset).unwrap_or(i32::MAX).saturating_add(bias)
}

/// Label and gauge elements for an activity metric.
const fn metric_elements(metric: Metric) -> (ElementId, ElementId) {
    match metric {
        Metric::Steps => (ElementId::Steps, ElementId::StepsGauge),
        Metric::Calories => (ElementId::Calories, ElementId::CaloriesGauge),
    }
}

const fn metric_slot(metric: Metric) -> usize {
    match metric {
        Metric::Steps => 0,
        Metric::Calories => 1,
    }
}

/// Render controller for the activity watch face.
pub struct WatchFace<H, P> {
    config: FaceConfig,
    heart_rate: HeartRateListener<H>,
    presence: PresenceListener<P>,
    /// Last successful read per metric, indexed by `metric_slot`.
    last_activity: [Option<Progress>; 2],
    /// Whether the last read per metric failed, for edge-triggered logging.
    degraded: [bool; 2],
    log: DebugLog,
}

impl<H: HeartRateSensor, P: PresenceSensor> WatchFace<H, P> {
    /// Build a face. Sensor availability is fixed here for the whole session.
    pub fn new(
        config: FaceConfig,
        heart_rate: Option<H>,
        presence: Option<P>,
    ) -> Self {
        let mut config = config;
        if config.gauge_width as usize > MAX_GAUGE_WIDTH {
            log::warn!("gauge width {} capped at {}", config.gauge_width, MAX_GAUGE_WIDTH);
            config.gauge_width = MAX_GAUGE_WIDTH as u32;
        }

        Self {
            config,
            heart_rate: HeartRateListener::new(heart_rate),
            presence: PresenceListener::new(presence),
            last_activity: [None; 2],
            degraded: [false; 2],
            log: DebugLog::new(),
        }
    }

    /// One-time setup: allow always-on display, start the listeners, show the
    /// heart-rate placeholder.
    pub fn start<S: Surface + DisplayPower>(
        &mut self,
        surface: &mut S,
    ) {
        surface.set_always_on_allowed(true);
        surface.set_text(ElementId::HeartRate, HEART_RATE_PLACEHOLDER);

        match self.heart_rate.start() {
            ListenerState::PresentStarted => self.record(Level::Info, format_args!("Heart rate sensor started")),
            _ => self.record(Level::Info, format_args!("No heart rate sensor")),
        }

        if self.presence.is_available() {
            self.record(Level::Info, format_args!("This device has a BodyPresenceSensor"));
            self.presence.start();
        } else {
            self.record(Level::Info, format_args!("This device does NOT have a BodyPresenceSensor"));
        }
    }

    /// Clock tick: recompute and push every element.
    pub fn on_tick<A, S>(
        &mut self,
        time: &TimeSample,
        activity: &mut A,
        surface: &mut S,
    ) where
        A: ActivitySource + ?Sized,
        S: Surface,
    {
        surface.set_text(ElementId::Time, &format_time(time, self.config.clock_mode));

        let x = marker_position(
            time.elapsed_minutes(),
            surface.width(),
            self.config.marker_resolution,
            self.config.marker_bias,
        );
        surface.set_x(ElementId::Marker, x);
        self.set_gauge(surface, ElementId::TimeGauge, time.day_fraction());

        for metric in Metric::ALL {
            self.render_metric(metric, activity, surface);
        }

        surface.set_text(ElementId::HeartRate, &format_heart_rate(self.heart_rate.last_bpm()));
        if let Some(fraction) = self.heart_rate.gauge_fraction() {
            self.set_gauge(surface, ElementId::HeartRateGauge, fraction);
        }
    }

    /// Heart-rate reading: cache it and refresh the label and gauge.
    pub fn on_heart_rate<S: Surface>(
        &mut self,
        bpm: u16,
        surface: &mut S,
    ) {
        if !self.heart_rate.on_reading(bpm) {
            log::debug!("heart rate reading {bpm} ignored, listener not started");
            return;
        }

        surface.set_text(ElementId::HeartRate, &format_heart_rate(Some(bpm)));
        if let Some(fraction) = self.heart_rate.gauge_fraction() {
            self.set_gauge(surface, ElementId::HeartRateGauge, fraction);
        }
    }

    /// Presence reading: cache and report it. No rendered field changes.
    pub fn on_presence(
        &mut self,
        present: bool,
    ) {
        if !self.presence.on_reading(present) {
            log::debug!("presence reading ignored, listener not started");
            return;
        }

        let state = if present { "on" } else { "not on" };
        self.record(Level::Info, format_args!("The device is {state} the user's body"));
    }

    #[inline]
    pub const fn config(&self) -> &FaceConfig { &self.config }

    /// Change the clock convention. Takes effect on the next tick.
    pub fn set_clock_mode(
        &mut self,
        mode: ClockMode,
    ) {
        self.config.clock_mode = mode;
    }

    #[inline]
    pub const fn heart_rate_state(&self) -> ListenerState { self.heart_rate.state() }

    #[inline]
    pub const fn presence_state(&self) -> ListenerState { self.presence.state() }

    /// Cached heart rate, `None` before the first reading or without a sensor.
    #[inline]
    pub const fn heart_rate(&self) -> Option<u16> { self.heart_rate.last_bpm() }

    /// Cached worn state, `None` before the first reading or without a sensor.
    #[inline]
    pub const fn is_worn(&self) -> Option<bool> { self.presence.is_present() }

    /// Recent observational messages.
    #[inline]
    pub const fn log(&self) -> &DebugLog { &self.log }

    fn render_metric<A, S>(
        &mut self,
        metric: Metric,
        activity: &mut A,
        surface: &mut S,
    ) where
        A: ActivitySource + ?Sized,
        S: Surface,
    {
        let slot = metric_slot(metric);
        let (label_id, gauge_id) = metric_elements(metric);

        let progress = match activity.read(metric) {
            Ok(progress) => {
                if self.degraded[slot] {
                    self.degraded[slot] = false;
                    self.record(Level::Info, format_args!("{} data restored", metric.name()));
                }
                self.last_activity[slot] = Some(progress);
                Some(progress)
            }
            Err(err) => {
                if !self.degraded[slot] {
                    self.degraded[slot] = true;
                    self.record(Level::Warn, format_args!("{} read failed: {}", metric.name(), err));
                }
                self.last_activity[slot]
            }
        };

        match progress {
            Some(progress) => {
                let format = self.label_format(metric);
                match format_progress(&progress, &format) {
                    Ok(label) => surface.set_text(label_id, &label),
                    Err(err) => {
                        log::warn!("{} label: {}", metric.name(), err);
                        surface.set_text(label_id, ACTIVITY_PLACEHOLDER);
                    }
                }
                self.set_gauge(surface, gauge_id, progress.fraction());
            }
            None => {
                surface.set_text(label_id, ACTIVITY_PLACEHOLDER);
                self.set_gauge(surface, gauge_id, 0.0);
            }
        }
    }

    const fn label_format(
        &self,
        metric: Metric,
    ) -> LabelFormat {
        match metric {
            Metric::Steps => self.config.steps_format,
            Metric::Calories => self.config.calories_format,
        }
    }

    fn set_gauge<S: Surface>(
        &self,
        surface: &mut S,
        id: ElementId,
        fraction: f32,
    ) {
        match render_bar(self.config.gauge_width, fraction) {
            Ok(bar) => surface.set_text(id, &bar),
            Err(err) => log::warn!("{}: {}", id.name(), err),
        }
    }

    /// Forward to the `log` facade and keep a copy in the debug log.
    fn record(
        &mut self,
        level: Level,
        args: fmt::Arguments<'_>,
    ) {
        log::log!(level, "{args}");
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        // Overlong messages keep whatever fit
        line.write_fmt(args).ok();
        self.log.push(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivitySnapshot;
    use crate::config::{GAUGE_BLANK, GAUGE_FILLED, LabelFormat, SCREEN_WIDTH};
    use crate::error::ActivityError;
    use crate::sensors::NoSensor;
    use crate::surface::FaceFrame;

    // -------------------------------------------------------------------------
    // Test Doubles
    // -------------------------------------------------------------------------

    #[derive(Default)]
    struct FakeSensor {
        started: bool,
    }

    impl HeartRateSensor for FakeSensor {
        fn start(
            &mut self,
            _frequency_hz: u32,
        ) {
            self.started = true;
        }
    }

    impl PresenceSensor for FakeSensor {
        fn start(&mut self) { self.started = true; }
    }

    /// Activity source whose metrics can be switched off independently.
    struct ScriptedActivity {
        snapshot: ActivitySnapshot,
        steps_ok: bool,
        calories_ok: bool,
    }

    impl ScriptedActivity {
        fn new(snapshot: ActivitySnapshot) -> Self {
            Self {
                snapshot,
                steps_ok: true,
                calories_ok: true,
            }
        }
    }

    impl ActivitySource for ScriptedActivity {
        fn steps(&mut self) -> Result<Progress, ActivityError> {
            if self.steps_ok { Ok(self.snapshot.steps) } else { Err(ActivityError::Unavailable) }
        }

        fn calories(&mut self) -> Result<Progress, ActivityError> {
            if self.calories_ok { Ok(self.snapshot.calories) } else { Err(ActivityError::Malformed) }
        }
    }

    type FullFace = WatchFace<FakeSensor, FakeSensor>;
    type BareFace = WatchFace<NoSensor, NoSensor>;

    fn full_face() -> FullFace {
        WatchFace::new(FaceConfig::DEFAULT, Some(FakeSensor::default()), Some(FakeSensor::default()))
    }

    fn bare_face() -> BareFace { WatchFace::new(FaceConfig::DEFAULT, None, None) }

    fn at(
        hour: u8,
        minute: u8,
    ) -> TimeSample {
        TimeSample::new(hour, minute, 0).unwrap()
    }

    fn snapshot() -> ActivitySnapshot { ActivitySnapshot::new(8_500, 10_000, 1_234, 2_500) }

    fn filled(text: &str) -> usize { text.chars().filter(|&c| c == GAUGE_FILLED).count() }

    // -------------------------------------------------------------------------
    // Marker Position Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_marker_position_midday() {
        assert_eq!(marker_position(720, 336, 100, 0), 168);
        assert_eq!(marker_position(720, 336, 100, -50), 118);
        assert_eq!(marker_position(720, 336, 0, 0), 168);
    }

    #[test]
    fn test_marker_position_quantized_to_resolution() {
        // 1 minute is 0.0007 of a day, rounds to 0.00
        assert_eq!(marker_position(1, 336, 100, 0), 0);
        // 8 minutes is 0.0056, rounds to 0.01
        assert_eq!(marker_position(8, 336, 100, 0), 3);
        // Without quantization the position moves smoothly
        assert_eq!(marker_position(8, 1440, 0, 0), 8);
    }

    #[test]
    fn test_marker_position_bias_is_configurable() {
        let plain = marker_position(360, SCREEN_WIDTH, 100, 0);
        assert_eq!(marker_position(360, SCREEN_WIDTH, 100, 25), plain + 25);
        assert_eq!(marker_position(360, SCREEN_WIDTH, 100, -50), plain - 50);
    }

    #[test]
    fn test_marker_position_clamps_to_day() {
        assert_eq!(marker_position(5_000, 336, 0, 0), 336);
    }

    // -------------------------------------------------------------------------
    // Startup Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_start_allows_always_on_and_shows_placeholder() {
        let mut face = full_face();
        let mut frame = FaceFrame::default();
        face.start(&mut frame);

        assert!(frame.always_on_allowed());
        assert_eq!(frame.text(ElementId::HeartRate), HEART_RATE_PLACEHOLDER);
        assert_eq!(face.heart_rate_state(), ListenerState::PresentStarted);
        assert_eq!(face.presence_state(), ListenerState::PresentStarted);
    }

    #[test]
    fn test_start_without_sensors() {
        let mut face = bare_face();
        let mut frame = FaceFrame::default();
        face.start(&mut frame);

        assert_eq!(face.heart_rate_state(), ListenerState::NotPresent);
        assert_eq!(face.presence_state(), ListenerState::NotPresent);
        assert!(face.log().contains("does NOT have a BodyPresenceSensor"));
    }

    // -------------------------------------------------------------------------
    // Tick Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_tick_renders_every_field() {
        let mut face = full_face();
        let mut frame = FaceFrame::default();
        face.start(&mut frame);
        face.on_tick(&at(12, 0), &mut snapshot(), &mut frame);

        assert_eq!(frame.text(ElementId::Time), "12:00");
        assert_eq!(frame.marker_x(), 118);
        assert_eq!(filled(frame.text(ElementId::TimeGauge)), 8, "17 * 0.5 floors to 8");
        assert_eq!(frame.text(ElementId::Steps), "9/10");
        assert_eq!(filled(frame.text(ElementId::StepsGauge)), 14, "17 * 0.85 floors to 14");
        assert_eq!(frame.text(ElementId::Calories), "1.2/2.5");
        assert_eq!(filled(frame.text(ElementId::CaloriesGauge)), 8, "17 * 0.4936 floors to 8");
        assert_eq!(frame.text(ElementId::HeartRate), HEART_RATE_PLACEHOLDER);
        assert_eq!(frame.text(ElementId::HeartRateGauge), "", "no gauge before the first reading");
    }

    #[test]
    fn test_tick_gauges_have_configured_width() {
        let mut face = full_face();
        let mut frame = FaceFrame::default();
        face.on_tick(&at(23, 59), &mut snapshot(), &mut frame);

        for id in [ElementId::TimeGauge, ElementId::StepsGauge, ElementId::CaloriesGauge] {
            assert_eq!(frame.text(id).len(), 17, "{} width", id.name());
        }
    }

    #[test]
    fn test_tick_12_hour_mode() {
        let config = FaceConfig::DEFAULT.with_clock_mode(ClockMode::TwelveHour);
        let mut face: BareFace = WatchFace::new(config, None, None);
        let mut frame = FaceFrame::default();

        face.on_tick(&at(0, 7), &mut snapshot(), &mut frame);
        assert_eq!(frame.text(ElementId::Time), "12:07");

        face.on_tick(&at(13, 45), &mut snapshot(), &mut frame);
        assert_eq!(frame.text(ElementId::Time), "1:45");
    }

    #[test]
    fn test_set_clock_mode_applies_next_tick() {
        let mut face = bare_face();
        let mut frame = FaceFrame::default();
        face.on_tick(&at(15, 5), &mut snapshot(), &mut frame);
        assert_eq!(frame.text(ElementId::Time), "15:05");

        face.set_clock_mode(ClockMode::TwelveHour);
        face.on_tick(&at(15, 5), &mut snapshot(), &mut frame);
        assert_eq!(frame.text(ElementId::Time), "3:05");
    }

    #[test]
    fn test_tick_zero_goal_renders_blank_gauge() {
        let mut face = bare_face();
        let mut frame = FaceFrame::default();
        let mut activity = ActivitySnapshot::new(5_000, 0, 800, 0);
        face.on_tick(&at(8, 0), &mut activity, &mut frame);

        let gauge = frame.text(ElementId::StepsGauge);
        assert_eq!(gauge.len(), 17);
        assert!(gauge.chars().all(|c| c == GAUGE_BLANK), "zero goal should render all blank");
        assert_eq!(frame.text(ElementId::Steps), "5/0");
        assert_eq!(filled(frame.text(ElementId::CaloriesGauge)), 0);
    }

    #[test]
    fn test_tick_is_idempotent() {
        let mut face = full_face();
        let mut first = FaceFrame::default();
        let mut second = FaceFrame::default();
        face.start(&mut first);
        face.start(&mut second);
        face.on_heart_rate(90, &mut first);
        face.on_heart_rate(90, &mut second);

        face.on_tick(&at(17, 42), &mut snapshot(), &mut first);
        face.on_tick(&at(17, 42), &mut snapshot(), &mut second);
        assert_eq!(first, second, "identical inputs should produce identical frames");

        face.on_tick(&at(17, 42), &mut snapshot(), &mut second);
        assert!(first.same_content(&second));
    }

    #[test]
    fn test_tick_with_activity_unavailable_still_updates_time() {
        let mut face = bare_face();
        let mut frame = FaceFrame::default();
        face.on_tick(&at(6, 30), &mut (), &mut frame);

        assert_eq!(frame.text(ElementId::Time), "06:30");
        assert_eq!(frame.marker_x(), marker_position(390, SCREEN_WIDTH, 100, -50));
        assert_eq!(frame.text(ElementId::Steps), ACTIVITY_PLACEHOLDER);
        assert_eq!(frame.text(ElementId::Calories), ACTIVITY_PLACEHOLDER);
        assert_eq!(filled(frame.text(ElementId::StepsGauge)), 0);
    }

    #[test]
    fn test_tick_falls_back_to_last_known_activity() {
        let mut face = bare_face();
        let mut frame = FaceFrame::default();
        let mut activity = ScriptedActivity::new(snapshot());
        face.on_tick(&at(9, 0), &mut activity, &mut frame);
        assert_eq!(frame.text(ElementId::Steps), "9/10");

        // Steps fail, calories keep updating from fresh data
        activity.steps_ok = false;
        activity.snapshot = ActivitySnapshot::new(9_900, 10_000, 2_000, 2_500);
        face.on_tick(&at(9, 1), &mut activity, &mut frame);

        assert_eq!(frame.text(ElementId::Time), "09:01");
        assert_eq!(frame.text(ElementId::Steps), "9/10", "steps keep the last known value");
        assert_eq!(frame.text(ElementId::Calories), "2.0/2.5", "calories are unaffected");
        assert!(face.log().contains("steps read failed"));
    }

    #[test]
    fn test_degraded_metric_logged_once_and_on_recovery() {
        let mut face = bare_face();
        let mut frame = FaceFrame::default();
        let mut activity = ScriptedActivity::new(snapshot());
        activity.calories_ok = false;

        for minute in 0..5 {
            face.on_tick(&at(10, minute), &mut activity, &mut frame);
        }
        let failures = face.log().iter().filter(|line| line.contains("calories read failed")).count();
        assert_eq!(failures, 1, "a failing metric should be logged once, not every tick");

        activity.calories_ok = true;
        face.on_tick(&at(10, 5), &mut activity, &mut frame);
        assert!(face.log().contains("calories data restored"));
        assert_eq!(frame.text(ElementId::Calories), "1.2/2.5");
    }

    #[test]
    fn test_custom_label_format() {
        let config = FaceConfig {
            steps_format: LabelFormat::PLAIN.with_unit(" steps"),
            ..FaceConfig::DEFAULT
        };
        let mut face: BareFace = WatchFace::new(config, None, None);
        let mut frame = FaceFrame::default();
        face.on_tick(&at(9, 0), &mut snapshot(), &mut frame);
        assert_eq!(frame.text(ElementId::Steps), "8500/10000 steps");
    }

    #[test]
    fn test_oversized_gauge_width_is_capped() {
        let config = FaceConfig {
            gauge_width: 500,
            ..FaceConfig::DEFAULT
        };
        let face: BareFace = WatchFace::new(config, None, None);
        assert_eq!(face.config().gauge_width as usize, MAX_GAUGE_WIDTH);
    }

    // -------------------------------------------------------------------------
    // Heart Rate Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_heart_rate_reading_updates_label_and_gauge() {
        let mut face = full_face();
        let mut frame = FaceFrame::default();
        face.start(&mut frame);
        face.on_heart_rate(100, &mut frame);

        assert_eq!(frame.text(ElementId::HeartRate), "100 bpm");
        assert_eq!(filled(frame.text(ElementId::HeartRateGauge)), 8, "17 * 0.5 floors to 8");
        assert_eq!(face.heart_rate(), Some(100));
    }

    #[test]
    fn test_heart_rate_overflow_fills_gauge() {
        let mut face = full_face();
        let mut frame = FaceFrame::default();
        face.start(&mut frame);
        face.on_heart_rate(240, &mut frame);

        let gauge = frame.text(ElementId::HeartRateGauge);
        assert_eq!(gauge.len(), 17, "overflow must not lengthen the gauge");
        assert_eq!(filled(gauge), 17);
    }

    #[test]
    fn test_heart_rate_cached_across_ticks() {
        let mut face = full_face();
        let mut frame = FaceFrame::default();
        face.start(&mut frame);
        face.on_heart_rate(72, &mut frame);
        face.on_tick(&at(7, 0), &mut snapshot(), &mut frame);

        assert_eq!(frame.text(ElementId::HeartRate), "72 bpm");
        assert_eq!(filled(frame.text(ElementId::HeartRateGauge)), 6, "17 * 0.36 floors to 6");
    }

    #[test]
    fn test_heart_rate_placeholder_persists_without_sensor() {
        let mut face = bare_face();
        let mut frame = FaceFrame::default();
        face.start(&mut frame);

        for i in 0..1_000u32 {
            let time = at(0, 0).plus_minutes(i);
            face.on_heart_rate(80, &mut frame);
            face.on_tick(&time, &mut snapshot(), &mut frame);
            assert_eq!(frame.text(ElementId::HeartRate), HEART_RATE_PLACEHOLDER);
        }
        assert_eq!(frame.text(ElementId::HeartRateGauge), "", "gauge never updated");
        assert_eq!(face.heart_rate(), None);
    }

    // -------------------------------------------------------------------------
    // Presence Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_presence_is_logged_only() {
        let mut face = full_face();
        let mut frame = FaceFrame::default();
        face.start(&mut frame);
        face.on_tick(&at(11, 11), &mut snapshot(), &mut frame);
        let before = frame.clone();

        face.on_presence(false);
        assert_eq!(face.is_worn(), Some(false));
        assert_eq!(face.log().last(), Some("The device is not on the user's body"));

        face.on_presence(true);
        assert_eq!(face.log().last(), Some("The device is on the user's body"));
        assert_eq!(frame, before, "presence must not touch the surface");
    }

    #[test]
    fn test_presence_without_sensor_ignored() {
        let mut face = bare_face();
        let mut frame = FaceFrame::default();
        face.start(&mut frame);
        face.on_presence(true);
        assert_eq!(face.is_worn(), None);
    }
}
