//! Debug/profiling page rendering.

use core::fmt::Write;

use clockface_common::calendar::{day_name, day_of_week, month_name};
use clockface_common::config::{SCREEN_WIDTH, TICK_PERIOD_MS};
use clockface_common::entities::CreatureStyle;
use clockface_common::{ClockState, EventLog, FaceSettings, Region, Scheduler, TimeFormat};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;
use profont::PROFONT_7_POINT;

use crate::profiling::ProfilingMetrics;

const FONT: &MonoFont = &PROFONT_7_POINT;
const LINE_HEIGHT: i32 = 9;
const COL_X: i32 = 1;
const STATS_Y: i32 = 0;
const LOG_DIVIDER_Y: i32 = 55;
const LOG_Y: i32 = 56;
const LOG_LINES: usize = 1;

pub fn draw_debug_page(
    display: &mut SimulatorDisplay<BinaryColor>,
    metrics: &ProfilingMetrics,
    log: &EventLog,
    scheduler: &Scheduler,
    clock: &ClockState,
    settings: &FaceSettings,
) {
    display.clear(BinaryColor::Off).ok();
    draw_stats(display, metrics, clock, settings);
    draw_entities(display, scheduler);
    Line::new(Point::new(0, LOG_DIVIDER_Y), Point::new(SCREEN_WIDTH as i32 - 1, LOG_DIVIDER_Y))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(display)
        .ok();
    draw_log_tail(display, log);
}

fn draw_stats(
    display: &mut SimulatorDisplay<BinaryColor>,
    metrics: &ProfilingMetrics,
    clock: &ClockState,
    settings: &FaceSettings,
) {
    let mut y = STATS_Y;

    let mut s: String<32> = String::new();
    let _ = write!(
        s,
        "{} {} {:02} {:02}:{:02}:{:02}{}",
        day_name(day_of_week(clock.month, clock.day, clock.year)),
        month_name(clock.month),
        clock.day,
        clock.hour,
        clock.minute,
        clock.second,
        if clock.alarming { " AL" } else { "" },
    );
    draw_line(display, &s, y);
    y += LINE_HEIGHT;

    let mut s: String<32> = String::new();
    let _ = write!(s, "UP {} #{}", metrics.uptime_string(), metrics.total_ticks);
    draw_line(display, &s, y);
    y += LINE_HEIGHT;

    let min_ms = if metrics.tick_time_min_us == u32::MAX {
        0.0
    } else {
        metrics.tick_time_min_us as f32 / 1000.0
    };
    let mut s: String<32> = String::new();
    let _ = write!(
        s,
        "{:.1}/{:.1}/{:.1} of {TICK_PERIOD_MS}ms",
        min_ms,
        metrics.tick_time_avg_us() as f32 / 1000.0,
        metrics.tick_time_max_us as f32 / 1000.0,
    );
    draw_line(display, &s, y);
    y += LINE_HEIGHT;

    let mut s: String<32> = String::new();
    let _ = write!(s, "J{} C{} S{} F{}", metrics.jumps, metrics.coins, metrics.score_repaints, metrics.face_redraws);
    draw_line(display, &s, y);
    y += LINE_HEIGHT;

    let format = match settings.time_format {
        TimeFormat::H24 => "24H",
        TimeFormat::H12 => "12H",
    };
    let region = match settings.region {
        Region::Us => "US",
        Region::Eu => "EU",
        Region::DowUs => "DOW-US",
        Region::DowEu => "DOW-EU",
    };
    let mut s: String<32> = String::new();
    let _ = write!(s, "{} {format} {region}", settings.score_mode.label());
    draw_line(display, &s, y);
}

/// Hero and creature positions below the stats.
fn draw_entities(
    display: &mut SimulatorDisplay<BinaryColor>,
    scheduler: &Scheduler,
) {
    let hero = scheduler.hero();
    let creature = scheduler.creature();
    let style = match creature.style() {
        CreatureStyle::Walking => "WALK",
        CreatureStyle::Spin => "SPIN",
    };
    let mut s: String<32> = String::new();
    let _ = write!(
        s,
        "H{:>2}{} C{:>3} {style}{}",
        hero.x(),
        if hero.is_jumping() { "J" } else { " " },
        creature.x(),
        if scheduler.is_reveal_active() { " COIN" } else { "" },
    );
    draw_line(display, &s, STATS_Y + 5 * LINE_HEIGHT);
}

/// The most recent log lines, newest last.
fn draw_log_tail(
    display: &mut SimulatorDisplay<BinaryColor>,
    log: &EventLog,
) {
    let mut y = LOG_Y;
    for line in log.iter().skip(log.len().saturating_sub(LOG_LINES)) {
        let mut s: String<40> = String::new();
        let _ = write!(s, ">{line}");
        draw_line(display, &s, y);
        y += LINE_HEIGHT;
    }
}

fn draw_line(
    display: &mut SimulatorDisplay<BinaryColor>,
    text: &str,
    y: i32,
) {
    let style = MonoTextStyle::new(FONT, BinaryColor::On);
    Text::with_baseline(text, Point::new(COL_X, y), style, Baseline::Top)
        .draw(display)
        .ok();
}
