//! Draws a [`FaceFrame`] onto the simulated panel.
//!
//! The face core only produces element texts and the marker offset; layout,
//! fonts and colors live here, the way a device layout file would hold them.

use std::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use heapless::String;
use watchface_common::{ClockMode, ElementId, FaceFrame};

use crate::colors::{GRAY, YELLOW};
use crate::styles::{
    CALORIES_GAUGE_STYLE,
    CAPTION_STYLE,
    CENTERED,
    HEART_RATE_GAUGE_STYLE,
    LEFT_ALIGNED,
    RIGHT_ALIGNED,
    STEPS_GAUGE_STYLE,
    TIME_GAUGE_STYLE,
    TIME_STYLE,
    VALUE_STYLE,
};

// =============================================================================
// Layout
// =============================================================================

/// Top of the marker icon.
const MARKER_Y: i32 = 36;

/// Marker icon width. The -50 bias centers it on the day position.
const MARKER_WIDTH: i32 = 100;

/// Time text baseline.
const TIME_Y: i32 = 118;

/// Time gauge baseline.
const TIME_GAUGE_Y: i32 = 142;

/// First activity row baseline; rows are `ROW_SPACING` apart.
const FIRST_ROW_Y: i32 = 190;
const ROW_SPACING: i32 = 44;

/// Left edge of captions and gauges.
const ROW_LEFT: i32 = 40;

/// Right edge of value labels.
const ROW_RIGHT: i32 = 296;

/// Gap between a caption and its gauge line.
const CAPTION_GAP: i32 = 14;

/// Status line baseline.
const STATUS_Y: i32 = 326;

/// One labeled gauge row.
struct Row {
    caption: &'static str,
    label: ElementId,
    gauge: ElementId,
    style: MonoTextStyle<'static, Rgb565>,
}

const ROWS: [Row; 3] = [
    Row {
        caption: "STEPS (K)",
        label: ElementId::Steps,
        gauge: ElementId::StepsGauge,
        style: STEPS_GAUGE_STYLE,
    },
    Row {
        caption: "KCAL (K)",
        label: ElementId::Calories,
        gauge: ElementId::CaloriesGauge,
        style: CALORIES_GAUGE_STYLE,
    },
    Row {
        caption: "HEART RATE",
        label: ElementId::HeartRate,
        gauge: ElementId::HeartRateGauge,
        style: HEART_RATE_GAUGE_STYLE,
    },
];

// =============================================================================
// Face
// =============================================================================

/// Draw every element of `frame`. The caller clears the display first.
pub fn draw_face<D>(
    display: &mut D,
    frame: &FaceFrame,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_marker(display, frame.marker_x(), MARKER_Y);

    let center = display.bounding_box().center().x;
    Text::with_text_style(frame.text(ElementId::Time), Point::new(center, TIME_Y), TIME_STYLE, CENTERED)
        .draw(display)
        .ok();
    draw_gauge(display, frame.text(ElementId::TimeGauge), ROW_LEFT, TIME_GAUGE_Y, TIME_GAUGE_STYLE);

    for (i, row) in ROWS.iter().enumerate() {
        let y = FIRST_ROW_Y + ROW_SPACING * i as i32;
        Text::with_text_style(row.caption, Point::new(ROW_LEFT, y - CAPTION_GAP), CAPTION_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
        Text::with_text_style(frame.text(row.label), Point::new(ROW_RIGHT, y), VALUE_STYLE, RIGHT_ALIGNED)
            .draw(display)
            .ok();
        draw_gauge(display, frame.text(row.gauge), ROW_LEFT, y, row.style);
    }
}

/// Gauge text between gray brackets so empty gauges still show their extent.
fn draw_gauge<D>(
    display: &mut D,
    bar: &str,
    x: i32,
    y: i32,
    style: MonoTextStyle<'static, Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let bracket = MonoTextStyle::new(style.font, GRAY);
    let next = Text::with_text_style("[", Point::new(x, y), bracket, LEFT_ALIGNED)
        .draw(display)
        .unwrap_or(Point::new(x, y));
    let next = Text::with_text_style(bar, next, style, LEFT_ALIGNED)
        .draw(display)
        .unwrap_or(next);
    Text::with_text_style("]", next, bracket, LEFT_ALIGNED).draw(display).ok();
}

/// Bicycle icon whose left edge sits at `x`.
fn draw_marker<D>(
    display: &mut D,
    x: i32,
    y: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let stroke = PrimitiveStyle::with_stroke(YELLOW, 2);
    let wheel: u32 = 30;
    let rear = Point::new(x + 10 + wheel as i32 / 2, y + 20 + wheel as i32 / 2);
    let front = Point::new(x + MARKER_WIDTH - 10 - wheel as i32 / 2, rear.y);
    let crank = Point::new(x + MARKER_WIDTH / 2, rear.y);
    let seat = Point::new(crank.x - 8, y + 12);
    let bars = Point::new(front.x - 6, y + 8);

    Circle::with_center(rear, wheel).into_styled(stroke).draw(display).ok();
    Circle::with_center(front, wheel).into_styled(stroke).draw(display).ok();

    for (from, to) in [(rear, crank), (crank, seat), (seat, rear), (seat, bars), (bars, crank), (bars, front)] {
        Line::new(from, to).into_styled(stroke).draw(display).ok();
    }
}

// =============================================================================
// Status Line
// =============================================================================

/// Status line text: clock mode, worn state and the latest log line.
pub fn status_text(
    mode: ClockMode,
    worn: Option<bool>,
    last_log: Option<&str>,
) -> String<64> {
    let mut text: String<64> = String::new();
    let mode = match mode {
        ClockMode::TwentyFourHour => "24H",
        ClockMode::TwelveHour => "12H",
    };
    let worn = match worn {
        Some(true) => "WORN",
        Some(false) => "OFF",
        None => "?",
    };
    // Log lines are shorter than the buffer minus the prefix
    write!(text, "{mode} {worn} {}", last_log.unwrap_or("")).ok();
    text
}

/// Draw the status line at the bottom of the panel.
pub fn draw_status<D>(
    display: &mut D,
    text: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let center = display.bounding_box().center().x;
    Text::with_text_style(text, Point::new(center, STATUS_Y), CAPTION_STYLE, CENTERED)
        .draw(display)
        .ok();
}
