//! Host-side stand-in for the RTC.
//!
//! Starts from the system time (UTC) and ticks the shared [`ClockState`] once
//! per elapsed wall-clock second, raising the minute/hour flags the way the
//! RTC interrupt does on hardware.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use clockface_common::ClockState;

use crate::timing::CLOCK_SECOND;

pub struct HostClock {
    state: ClockState,
    last_second: Instant,
}

impl HostClock {
    /// Clock reading the current system time.
    pub fn from_system_time() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        Self {
            state: clock_from_unix(secs),
            last_second: Instant::now(),
        }
    }

    /// Advance the clock by every whole second elapsed since the last poll.
    /// Returns the number of seconds applied.
    pub fn poll(&mut self) -> u32 {
        let mut applied = 0;
        while self.last_second.elapsed() >= CLOCK_SECOND {
            self.state.advance_second();
            self.last_second += CLOCK_SECOND;
            applied += 1;
        }
        applied
    }

    /// Jump straight to the next minute boundary.
    pub fn skip_to_next_minute(&mut self) {
        self.state.second = 59;
        self.state.advance_second();
    }

    /// Toggle the alarm. Turning it on sets the alarm time to now.
    pub fn toggle_alarm(&mut self) -> bool {
        let state = &mut self.state;
        state.alarming = !state.alarming;
        if state.alarming {
            state.alarm_hour = state.hour;
            state.alarm_minute = state.minute;
        }
        state.alarming
    }

    #[inline]
    pub const fn state(&self) -> &ClockState { &self.state }

    #[inline]
    pub fn state_mut(&mut self) -> &mut ClockState { &mut self.state }
}

/// Clock registers for a Unix timestamp (UTC).
pub fn clock_from_unix(secs: u64) -> ClockState {
    let days = (secs / 86_400) as i64;
    let time_of_day = secs % 86_400;
    let (year, month, day) = civil_from_days(days);
    ClockState::at(
        year.rem_euclid(100) as u8,
        month,
        day,
        (time_of_day / 3600) as u8,
        (time_of_day % 3600 / 60) as u8,
        (time_of_day % 60) as u8,
    )
}

/// Proleptic Gregorian (year, month, day) for days since 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month as u8, day as u8)
}
