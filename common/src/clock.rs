//! Real-time clock snapshot and face settings.
//!
//! The RTC itself lives outside this crate. Whatever drives it publishes its
//! registers into a [`ClockState`] and raises the `minute_changed` /
//! `hour_changed` flags; the face consumes those flags once per tick with
//! [`ClockState::take_edges`].

use crate::calendar::days_in_month;
use crate::scoreboard::ScoreMode;

// =============================================================================
// Settings
// =============================================================================

/// Hour display format.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeFormat {
    #[default]
    H24,
    H12,
}

impl TimeFormat {
    pub const fn toggle(self) -> Self {
        match self {
            Self::H24 => Self::H12,
            Self::H12 => Self::H24,
        }
    }
}

/// Date ordering region. The day-of-week variants share the ordering of
/// their base region.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Region {
    #[default]
    Us,
    Eu,
    DowUs,
    DowEu,
}

impl Region {
    /// Whether dates read month first.
    #[inline]
    pub const fn month_first(self) -> bool { matches!(self, Self::Us | Self::DowUs) }

    /// Order a (month, day) pair for this region.
    #[inline]
    pub const fn order(
        self,
        month: u8,
        day: u8,
    ) -> (u8, u8) {
        if self.month_first() { (month, day) } else { (day, month) }
    }

    /// Cycle: Us -> Eu -> DowUs -> DowEu -> Us
    pub const fn next(self) -> Self {
        match self {
            Self::Us => Self::Eu,
            Self::Eu => Self::DowUs,
            Self::DowUs => Self::DowEu,
            Self::DowEu => Self::Us,
        }
    }
}

/// Persisted face configuration, owned by the host.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceSettings {
    pub time_format: TimeFormat,
    pub region: Region,
    pub score_mode: ScoreMode,
}

// =============================================================================
// Clock State
// =============================================================================

/// Minute/hour boundary flags consumed by one tick.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeEdges {
    pub minute: bool,
    pub hour: bool,
}

impl TimeEdges {
    /// Whether any time boundary was crossed.
    #[inline]
    pub const fn any(self) -> bool { self.minute || self.hour }
}

/// Snapshot of the RTC registers the face reads.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Hour before the last hour boundary.
    pub old_hour: u8,
    /// Minute before the last minute boundary.
    pub old_minute: u8,
    pub alarm_hour: u8,
    pub alarm_minute: u8,
    /// Alarm is currently sounding.
    pub alarming: bool,
    pub month: u8,
    pub day: u8,
    /// Two-digit year (2000-based).
    pub year: u8,
    pub minute_changed: bool,
    pub hour_changed: bool,
}

impl ClockState {
    /// Midnight, January 1st 2000, no alarm.
    pub const fn new() -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0,
            old_hour: 0,
            old_minute: 0,
            alarm_hour: 0,
            alarm_minute: 0,
            alarming: false,
            month: 1,
            day: 1,
            year: 0,
            minute_changed: false,
            hour_changed: false,
        }
    }

    /// A clock reading the given date and time with no pending edges.
    pub const fn at(
        year: u8,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        let mut clock = Self::new();
        clock.year = year;
        clock.month = month;
        clock.day = day;
        clock.hour = hour;
        clock.minute = minute;
        clock.second = second;
        clock.old_hour = hour;
        clock.old_minute = minute;
        clock
    }

    /// Read and clear the boundary flags.
    pub fn take_edges(&mut self) -> TimeEdges {
        let edges = TimeEdges {
            minute: self.minute_changed,
            hour: self.hour_changed,
        };
        self.minute_changed = false;
        self.hour_changed = false;
        edges
    }

    /// Advance by one second, rolling minutes, hours and the date.
    ///
    /// Records the previous minute/hour and raises the matching flags, the
    /// way the RTC interrupt does on hardware.
    pub fn advance_second(&mut self) {
        self.second += 1;
        if self.second < 60 {
            return;
        }
        self.second = 0;

        self.old_minute = self.minute;
        self.old_hour = self.hour;
        self.minute_changed = true;
        self.minute += 1;
        if self.minute < 60 {
            return;
        }
        self.minute = 0;

        self.hour_changed = true;
        self.hour += 1;
        if self.hour < 24 {
            return;
        }
        self.hour = 0;
        self.advance_day();
    }

    fn advance_day(&mut self) {
        self.day += 1;
        if self.day <= days_in_month(self.month, self.year) {
            return;
        }
        self.day = 1;
        self.month += 1;
        if self.month <= 12 {
            return;
        }
        self.month = 1;
        self.year = (self.year + 1) % 100;
    }
}

impl Default for ClockState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================
