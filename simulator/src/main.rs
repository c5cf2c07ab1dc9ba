//! Animated clock face simulator for desktop platforms.
//!
//! Runs the face at its nominal tick rate in an SDL window using the
//! embedded-graphics-simulator crate, driven by the host's system clock.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `M` | Next score mode |
//! | `F` | Toggle 12/24-hour format |
//! | `R` | Next date region |
//! | `A` | Toggle the alarm (sounding, set to now) |
//! | `I` | Toggle inverted display |
//! | `S` | Skip to the next minute |
//! | `N` | Log a draw from the random generator |
//! | `Y` | Toggle face/debug page |

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod host_clock;
mod pages;
mod profiling;
mod screens;
mod timing;

use core::fmt::Write;
use std::thread;
use std::time::Instant;

use clockface_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use clockface_common::prng::Draw;
use clockface_common::{EventLog, FaceSettings, Scheduler};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;

use crate::host_clock::HostClock;
use crate::pages::Page;
use crate::profiling::ProfilingMetrics;
use crate::screens::draw_debug_page;
use crate::timing::TICK_PERIOD;

fn main() {
    let mut display: SimulatorDisplay<BinaryColor> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new()
        .scale(4)
        .theme(BinaryColorTheme::LcdGreen)
        .build();
    let mut window = Window::new("Clock Face Sim", &output_settings);

    display.clear(BinaryColor::Off).ok();
    window.update(&display);

    let mut clock = HostClock::from_system_time();
    let mut settings = FaceSettings::default();
    let mut inverted = false;
    let mut scheduler = Scheduler::new(clock.state());

    // Render state
    let mut current_page = Page::default();
    let mut face_needs_redraw = true;

    // Profiling
    let mut metrics = ProfilingMetrics::new();
    let mut event_log = EventLog::new();
    event_log.push("Face started");

    loop {
        let tick_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    let mut line: String<32> = String::new();
                    match keycode {
                        Keycode::M => {
                            settings.score_mode = settings.score_mode.next();
                            let _ = write!(line, "Mode: {}", settings.score_mode.label());
                        }
                        Keycode::F => {
                            settings.time_format = settings.time_format.toggle();
                            let _ = write!(line, "Format: {:?}", settings.time_format);
                        }
                        Keycode::R => {
                            settings.region = settings.region.next();
                            let _ = write!(line, "Region: {:?}", settings.region);
                        }
                        Keycode::A => {
                            let on = clock.toggle_alarm();
                            let _ = write!(line, "Alarm: {}", if on { "ON" } else { "OFF" });
                        }
                        Keycode::I => {
                            inverted = !inverted;
                            face_needs_redraw = true;
                            let _ = write!(line, "Inverted: {}", if inverted { "ON" } else { "OFF" });
                        }
                        Keycode::S => {
                            clock.skip_to_next_minute();
                            event_log.push_value("Skip to minute ", u32::from(clock.state().minute));
                        }
                        Keycode::N => {
                            let _ = write!(
                                line,
                                "RNG {} {} {}",
                                scheduler.random(Draw::Full),
                                scheduler.random(Draw::TwoBit),
                                scheduler.random(Draw::OneBit),
                            );
                        }
                        Keycode::Y => {
                            current_page = current_page.toggle();
                            face_needs_redraw = current_page == Page::Face;
                            let _ = line.push_str(current_page.label());
                        }
                        _ => {}
                    }
                    if !line.is_empty() {
                        event_log.push(&line);
                    }
                }
                _ => {}
            }
        }

        clock.poll();

        // Render based on current page
        match current_page {
            Page::Face => {
                if face_needs_redraw {
                    scheduler.init(&mut display, clock.state(), &settings, inverted);
                    metrics.inc_face_redraws();
                    face_needs_redraw = false;
                }

                let report = scheduler.tick(&mut display, clock.state_mut(), &settings);
                metrics.record_report(&report);
                event_log.record(scheduler.ticks(), &report);
            }

            Page::Debug => {
                draw_debug_page(&mut display, &metrics, &event_log, &scheduler, clock.state(), &settings);
            }
        }

        let draw_time = tick_start.elapsed();
        window.update(&display);

        let pre_sleep = tick_start.elapsed();
        if pre_sleep < TICK_PERIOD {
            thread::sleep(TICK_PERIOD.saturating_sub(pre_sleep));
        }
        let sleep_time = tick_start.elapsed().saturating_sub(pre_sleep);

        metrics.record_tick(tick_start.elapsed(), draw_time, sleep_time);
    }
}
