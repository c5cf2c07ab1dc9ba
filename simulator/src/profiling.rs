//! Profiling metrics with time-based measurements.
//!
//! Provides tick timing statistics and face event counters.
//! The `EventLog` type is in the common crate since it doesn't need time.

use std::time::{Duration, Instant};

use clockface_common::TickReport;
use clockface_common::event_log::{push_two_digits, push_u32};
use heapless::String;

/// Tick timing and event statistics.
pub struct ProfilingMetrics {
    // Tick timing (microseconds)
    pub tick_time_us: u32,
    pub draw_time_us: u32,
    pub sleep_time_us: u32,

    // Statistics
    pub tick_time_min_us: u32,
    pub tick_time_max_us: u32,
    tick_time_avg_us: f32,

    // Counters
    pub total_ticks: u64,
    pub jumps: u32,
    pub coins: u32,
    pub score_repaints: u32,
    pub face_redraws: u32,

    // Uptime tracking
    start_time: Instant,
}

impl ProfilingMetrics {
    const EMA_ALPHA: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            tick_time_us: 0,
            draw_time_us: 0,
            sleep_time_us: 0,
            tick_time_min_us: u32::MAX,
            tick_time_max_us: 0,
            tick_time_avg_us: 0.0,
            total_ticks: 0,
            jumps: 0,
            coins: 0,
            score_repaints: 0,
            face_redraws: 0,
            start_time: Instant::now(),
        }
    }

    /// Record timing for one tick.
    pub fn record_tick(
        &mut self,
        total_time: Duration,
        draw_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = total_time.as_micros() as u32;

        self.tick_time_us = total_us;
        self.draw_time_us = draw_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        self.tick_time_min_us = self.tick_time_min_us.min(total_us);
        self.tick_time_max_us = self.tick_time_max_us.max(total_us);

        if self.total_ticks == 0 {
            self.tick_time_avg_us = total_us as f32;
        } else {
            self.tick_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.tick_time_avg_us);
        }

        self.total_ticks += 1;
    }

    /// Count the events of one tick.
    pub fn record_report(
        &mut self,
        report: &TickReport,
    ) {
        self.jumps += u32::from(report.jump_started);
        self.coins += u32::from(report.box_hit);
        self.score_repaints += u32::from(report.score_repainted);
    }

    /// Average tick time in microseconds.
    #[inline]
    pub const fn tick_time_avg_us(&self) -> u32 { self.tick_time_avg_us as u32 }

    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Format uptime as HH:MM:SS.
    pub fn uptime_string(&self) -> String<12> {
        let secs = self.uptime().as_secs();
        let mut s = String::new();
        let hours = secs / 3600;
        if hours < 10 {
            s.push('0').ok();
        }
        push_u32(&mut s, hours as u32);
        s.push(':').ok();
        push_two_digits(&mut s, (secs % 3600 / 60) as u8);
        s.push(':').ok();
        push_two_digits(&mut s, (secs % 60) as u8);
        s
    }

    #[inline]
    pub fn inc_face_redraws(&mut self) { self.face_redraws += 1; }
}

impl Default for ProfilingMetrics {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tick_tracks_min_max() {
        let mut metrics = ProfilingMetrics::new();
        metrics.record_tick(Duration::from_micros(900), Duration::from_micros(100), Duration::from_micros(800));
        metrics.record_tick(Duration::from_micros(300), Duration::from_micros(100), Duration::ZERO);
        assert_eq!(metrics.tick_time_min_us, 300);
        assert_eq!(metrics.tick_time_max_us, 900);
        assert_eq!(metrics.total_ticks, 2);
        assert!((300..=900).contains(&metrics.tick_time_avg_us()));
    }

    #[test]
    fn test_record_report() {
        let mut metrics = ProfilingMetrics::new();
        metrics.record_report(&TickReport {
            jump_started: true,
            box_hit: true,
            ..TickReport::default()
        });
        metrics.record_report(&TickReport::default());
        assert_eq!((metrics.jumps, metrics.coins, metrics.score_repaints), (1, 1, 0));
    }

    #[test]
    fn test_uptime_string_format() {
        let metrics = ProfilingMetrics::new();
        assert_eq!(metrics.uptime_string().as_str(), "00:00:00");
    }
}
