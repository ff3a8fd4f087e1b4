//! Activity Watch Face Simulator for desktop.
//!
//! Runs the shared face core against the wall clock, synthetic activity
//! totals and synthetic sensors, drawing into an embedded-graphics-simulator
//! window.
//!
//! Keys: `T` toggles 12/24-hour time, `F` toggles fast-forward, `P` toggles
//! whether the watch is worn, `A` toggles activity data availability, `Q`
//! quits.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod colors;
mod mock;
mod render;
mod styles;
mod timing;

use std::thread;
use std::time::Instant;

use chrono::{Local, Timelike};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{error, info};
use watchface_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use watchface_common::{FaceConfig, FaceFrame, TimeSample, WatchFace};

use crate::colors::BLACK;
use crate::mock::{MockActivity, MockSensor, fake_heart_rate};
use crate::render::{draw_face, draw_status, status_text};
use crate::timing::{FAST_FORWARD_MINUTES, FRAME_TIME, HEART_RATE_INTERVAL, PRESENCE_INTERVAL, TICK_INTERVAL};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Watch Face Sim", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let mut face = WatchFace::new(
        FaceConfig::DEFAULT,
        Some(MockSensor::new("Heart rate sensor")),
        Some(MockSensor::new("Body presence sensor")),
    );
    let mut frame = FaceFrame::new(SCREEN_WIDTH);
    face.start(&mut frame);

    // Main loop state
    let mut t = 0.0f32;
    let mut offset_minutes = 0u32;
    let mut fast_forward = false;
    let mut worn = true;
    let mut activity = match local_time(0) {
        Some(now) => MockActivity::new(&now),
        None => MockActivity::new(&TimeSample::MIDNIGHT),
    };

    // First tick fires immediately
    let mut last_tick: Option<Instant> = None;
    let mut last_heart_rate = Instant::now();
    let mut last_presence: Option<Instant> = None;

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::T => {
                            let mode = face.config().clock_mode.toggle();
                            face.set_clock_mode(mode);
                            last_tick = None;
                            info!("Clock mode: {mode:?}");
                        }
                        Keycode::F => {
                            fast_forward = !fast_forward;
                            info!("Fast-forward: {}", if fast_forward { "ON" } else { "OFF" });
                        }
                        Keycode::P => {
                            worn = !worn;
                            last_presence = None;
                        }
                        Keycode::A => {
                            let available = activity.toggle_available();
                            info!("Activity data: {}", if available { "available" } else { "unavailable" });
                            last_tick = None;
                        }
                        Keycode::Q => return,
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if fast_forward {
            offset_minutes = (offset_minutes + FAST_FORWARD_MINUTES) % (24 * 60);
            last_tick = None;
        }

        // Clock tick
        if last_tick.is_none_or(|at| at.elapsed() >= TICK_INTERVAL) {
            match local_time(offset_minutes) {
                Some(now) => {
                    activity.advance();
                    face.on_tick(&now, &mut activity, &mut frame);
                }
                None => error!("Wall clock returned an invalid time"),
            }
            last_tick = Some(frame_start);
        }

        // Sensor readings
        if last_heart_rate.elapsed() >= HEART_RATE_INTERVAL {
            face.on_heart_rate(fake_heart_rate(t), &mut frame);
            last_heart_rate = frame_start;
        }
        if last_presence.is_none_or(|at| at.elapsed() >= PRESENCE_INTERVAL) {
            face.on_presence(worn);
            last_presence = Some(frame_start);
        }

        // Redraw
        display.clear(BLACK).ok();
        draw_face(&mut display, &frame);
        let status = status_text(face.config().clock_mode, face.is_worn(), face.log().last());
        draw_status(&mut display, &status);
        window.update(&display);

        t += FRAME_TIME.as_secs_f32();

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}

/// Wall-clock time shifted by the fast-forward offset.
fn local_time(offset_minutes: u32) -> Option<TimeSample> {
    let now = Local::now();
    TimeSample::new(now.hour() as u8, now.minute() as u8, now.second() as u8)
        .ok()
        .map(|sample| sample.plus_minutes(offset_minutes))
}
