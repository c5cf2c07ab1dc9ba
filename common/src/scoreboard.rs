//! Scoreboard: the two numeric pairs in the header.
//!
//! The primary pair sits right of the coin icon (`x` + `HHMM` in time mode),
//! the secondary pair under the "WORLD" label (`MM-DD` in the default
//! modes). Values are recomputed every tick but only repainted when the
//! board is dirty: after a mode change, or when the coin reveal asks for it.
//! That means a new minute appears on screen when the hero bumps the box,
//! not the instant the clock rolls over.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::clock::{ClockState, FaceSettings, TimeEdges, TimeFormat};
use crate::config::{CENTURY, PRIMARY_SCORE_POS, SECONDARY_SCORE_POS};
use crate::text::{FontSelect, TextWriter};

/// What the scoreboard shows.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScoreMode {
    /// Time plus date; the host draws the weekday elsewhere.
    Dow,
    /// Time plus date with the raw day on the right.
    DateLong,
    /// Time plus date.
    #[default]
    Time,
    /// Date in the primary pair.
    Date,
    /// Century and two-digit year in the secondary pair.
    Year,
    /// Alarm time in the secondary pair.
    Alarm,
}

impl ScoreMode {
    /// Cycle through every mode in declaration order.
    pub const fn next(self) -> Self {
        match self {
            Self::Dow => Self::DateLong,
            Self::DateLong => Self::Time,
            Self::Time => Self::Date,
            Self::Date => Self::Year,
            Self::Year => Self::Alarm,
            Self::Alarm => Self::Dow,
        }
    }

    /// Short label for logs and the debug page.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dow => "DOW",
            Self::DateLong => "DATELONG",
            Self::Time => "TIME",
            Self::Date => "DATE",
            Self::Year => "YEAR",
            Self::Alarm => "ALARM",
        }
    }
}

/// A (left, right) pair of two-digit fields.
pub type ScorePair = (u8, u8);

/// Displayed values plus the repaint request.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Scoreboard {
    primary: ScorePair,
    secondary: ScorePair,
    last_mode: Option<ScoreMode>,
    dirty: bool,
}

impl Scoreboard {
    /// An empty board. The first [`update`](Self::update) always counts as
    /// a mode change.
    pub const fn new() -> Self {
        Self {
            primary: (0, 0),
            secondary: (0, 0),
            last_mode: None,
            dirty: false,
        }
    }

    /// Recompute both pairs from the clock and settings.
    ///
    /// `edges` are the boundary flags consumed at the start of this tick.
    pub fn update(
        &mut self,
        clock: &ClockState,
        settings: &FaceSettings,
        edges: TimeEdges,
    ) {
        let mode = settings.score_mode;
        let date = settings.region.order(clock.month, clock.day);

        if self.last_mode != Some(mode) {
            self.dirty = true;
            self.last_mode = Some(mode);
            self.primary = (clock.hour, clock.minute);
            self.secondary = date;
        }

        match mode {
            ScoreMode::Dow => {}
            ScoreMode::DateLong => self.secondary.1 = clock.day,
            ScoreMode::Time => {
                if clock.alarming && edges.any() {
                    // Hold the pre-boundary time while the alarm transition is shown
                    if edges.hour {
                        self.primary = (clock.old_hour, clock.old_minute);
                    } else {
                        self.primary.1 = clock.old_minute;
                    }
                } else {
                    self.primary = (clock.hour, clock.minute);
                }
            }
            ScoreMode::Date => self.primary = date,
            ScoreMode::Year => self.secondary = (CENTURY, clock.year),
            ScoreMode::Alarm => self.secondary = (clock.alarm_hour, clock.alarm_minute),
        }

        self.primary.0 = normalize_hour(self.primary.0, settings.time_format);
    }

    /// Ask for a repaint on the next render check.
    #[inline]
    pub fn request_repaint(&mut self) { self.dirty = true; }

    #[inline]
    pub const fn is_dirty(&self) -> bool { self.dirty }

    /// Read and clear the repaint request.
    #[inline]
    pub fn take_dirty(&mut self) -> bool { core::mem::take(&mut self.dirty) }

    #[inline]
    pub const fn primary(&self) -> ScorePair { self.primary }

    #[inline]
    pub const fn secondary(&self) -> ScorePair { self.secondary }

    /// Mode seen by the last update.
    #[inline]
    pub const fn mode(&self) -> Option<ScoreMode> { self.last_mode }

    /// Forget the last mode so the next update resets and repaints.
    pub fn force_mode_change(&mut self) { self.last_mode = None; }

    /// Write both pairs in the score font, then restore the writer's font.
    pub fn render<D>(
        &self,
        display: &mut D,
        writer: &mut TextWriter,
        inverted: bool,
    ) where
        D: DrawTarget<Color = BinaryColor>,
    {
        let previous_font = writer.font();
        writer.set_font(FontSelect::Score);

        writer.set_address(SECONDARY_SCORE_POS.0, SECONDARY_SCORE_POS.1);
        writer.write_two_digits(display, self.secondary.0, inverted);
        writer.write_char(display, '-', inverted);
        writer.write_two_digits(display, self.secondary.1, inverted);

        writer.set_address(PRIMARY_SCORE_POS.0, PRIMARY_SCORE_POS.1);
        writer.write_char(display, 'x', inverted);
        writer.write_two_digits(display, self.primary.0, inverted);
        writer.write_two_digits(display, self.primary.1, inverted);

        writer.set_font(previous_font);
    }
}

/// 12-hour wraparound of the primary-left field. Values up to 12 pass through.
#[inline]
pub const fn normalize_hour(
    value: u8,
    format: TimeFormat,
) -> u8 {
    if matches!(format, TimeFormat::H12) && value > 12 { value % 12 } else { value }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::Rectangle;

    use super::*;
    use crate::clock::Region;
    use crate::framebuffer::Framebuffer;

    const NO_EDGES: TimeEdges = TimeEdges { minute: false, hour: false };

    fn settings(mode: ScoreMode) -> FaceSettings {
        FaceSettings {
            score_mode: mode,
            ..FaceSettings::default()
        }
    }

    #[test]
    fn test_first_update_is_dirty() {
        let mut board = Scoreboard::new();
        board.update(&ClockState::at(24, 12, 25, 9, 5, 0), &settings(ScoreMode::Time), NO_EDGES);
        assert!(board.take_dirty());
        assert!(!board.take_dirty());
        assert_eq!(board.primary(), (9, 5));
        assert_eq!(board.secondary(), (12, 25));
    }

    #[test]
    fn test_same_mode_stays_clean() {
        let clock = ClockState::at(24, 12, 25, 9, 5, 0);
        let mut board = Scoreboard::new();
        board.update(&clock, &settings(ScoreMode::Time), NO_EDGES);
        board.take_dirty();
        board.update(&clock, &settings(ScoreMode::Time), NO_EDGES);
        assert!(!board.is_dirty());

        board.update(&clock, &settings(ScoreMode::Year), NO_EDGES);
        assert!(board.is_dirty());
    }

    #[test]
    fn test_time_updates_without_repaint() {
        let mut clock = ClockState::at(24, 12, 25, 9, 5, 0);
        let mut board = Scoreboard::new();
        board.update(&clock, &settings(ScoreMode::Time), NO_EDGES);
        board.take_dirty();

        clock.minute = 6;
        board.update(&clock, &settings(ScoreMode::Time), NO_EDGES);
        assert_eq!(board.primary(), (9, 6));
        assert!(!board.is_dirty());
    }

    #[test]
    fn test_region_orders_date() {
        let clock = ClockState::at(24, 12, 25, 9, 5, 0);
        for (region, expected) in [
            (Region::Us, (12, 25)),
            (Region::DowUs, (12, 25)),
            (Region::Eu, (25, 12)),
            (Region::DowEu, (25, 12)),
        ] {
            let mut board = Scoreboard::new();
            let settings = FaceSettings {
                region,
                score_mode: ScoreMode::Date,
                ..FaceSettings::default()
            };
            board.update(&clock, &settings, NO_EDGES);
            assert_eq!(board.secondary(), expected, "{region:?}");
            assert_eq!(board.primary(), expected, "{region:?}");
        }
    }

    #[test]
    fn test_date_long_puts_day_on_right() {
        let clock = ClockState::at(24, 12, 25, 9, 5, 0);
        let mut board = Scoreboard::new();
        let settings = FaceSettings {
            region: Region::Eu,
            score_mode: ScoreMode::DateLong,
            ..FaceSettings::default()
        };
        board.update(&clock, &settings, NO_EDGES);
        assert_eq!(board.secondary(), (25, 25));
    }

    #[test]
    fn test_year_and_alarm_modes() {
        let mut clock = ClockState::at(26, 3, 4, 22, 15, 0);
        clock.alarm_hour = 6;
        clock.alarm_minute = 45;

        let mut board = Scoreboard::new();
        board.update(&clock, &settings(ScoreMode::Year), NO_EDGES);
        assert_eq!(board.secondary(), (20, 26));

        board.update(&clock, &settings(ScoreMode::Alarm), NO_EDGES);
        assert_eq!(board.secondary(), (6, 45));
        assert_eq!(board.primary(), (22, 15));
    }

    #[test]
    fn test_alarm_hour_boundary_shows_old_time_for_one_tick() {
        let mut clock = ClockState::at(24, 5, 17, 6, 59, 59);
        clock.alarming = true;
        let mut board = Scoreboard::new();
        board.update(&clock, &settings(ScoreMode::Time), NO_EDGES);

        clock.advance_second();
        let edges = clock.take_edges();
        assert!(edges.hour);
        board.update(&clock, &settings(ScoreMode::Time), edges);
        assert_eq!(board.primary(), (6, 59));

        let edges = clock.take_edges();
        board.update(&clock, &settings(ScoreMode::Time), edges);
        assert_eq!(board.primary(), (7, 0));
    }

    #[test]
    fn test_alarm_minute_boundary_holds_old_minute() {
        let mut clock = ClockState::at(24, 5, 17, 6, 30, 59);
        clock.alarming = true;
        let mut board = Scoreboard::new();
        board.update(&clock, &settings(ScoreMode::Time), NO_EDGES);

        clock.advance_second();
        let edges = clock.take_edges();
        board.update(&clock, &settings(ScoreMode::Time), edges);
        assert_eq!(board.primary(), (6, 30));
    }

    #[test]
    fn test_boundary_without_alarm_shows_current_time() {
        let mut clock = ClockState::at(24, 5, 17, 6, 59, 59);
        let mut board = Scoreboard::new();
        clock.advance_second();
        let edges = clock.take_edges();
        board.update(&clock, &settings(ScoreMode::Time), edges);
        assert_eq!(board.primary(), (7, 0));
    }

    #[test]
    fn test_twelve_hour_normalization() {
        for value in 0..=23u8 {
            let expected = if value > 12 { value % 12 } else { value };
            assert_eq!(normalize_hour(value, TimeFormat::H12), expected);
            assert_eq!(normalize_hour(value, TimeFormat::H24), value);
        }

        let mut board = Scoreboard::new();
        let settings = FaceSettings {
            time_format: TimeFormat::H12,
            ..FaceSettings::default()
        };
        board.update(&ClockState::at(24, 1, 1, 23, 0, 0), &settings, NO_EDGES);
        assert_eq!(board.primary(), (11, 0));
        board.update(&ClockState::at(24, 1, 1, 12, 0, 0), &settings, NO_EDGES);
        assert_eq!(board.primary(), (12, 0));
    }

    #[test]
    fn test_mode_cycle_visits_every_mode() {
        let mut mode = ScoreMode::Dow;
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(mode, ScoreMode::Dow);
        seen.dedup();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_render_restores_font_and_stays_in_header() {
        let mut board = Scoreboard::new();
        board.update(&ClockState::at(24, 12, 25, 9, 5, 0), &settings(ScoreMode::Time), NO_EDGES);

        let mut fb = Framebuffer::new();
        let mut writer = TextWriter::new();
        board.render(&mut fb, &mut writer, false);

        assert_eq!(writer.font(), FontSelect::Standard);
        let header = Rectangle::new(Point::zero(), Size::new(128, 16));
        assert!(fb.count_lit() > 0);
        assert_eq!(fb.count_lit_in(&header), fb.count_lit());
    }

    #[test]
    fn test_render_matches_manual_writes() {
        let mut board = Scoreboard::new();
        board.update(&ClockState::at(24, 12, 25, 9, 5, 0), &settings(ScoreMode::Time), NO_EDGES);
        let mut fb = Framebuffer::new();
        board.render(&mut fb, &mut TextWriter::new(), false);

        let mut expected = Framebuffer::new();
        let mut writer = TextWriter::new();
        writer.set_font(FontSelect::Score);
        writer.set_address(1, 8);
        writer.write_str(&mut expected, "12-25", false);
        writer.set_address(89, 0);
        writer.write_str(&mut expected, "x0905", false);
        assert_eq!(fb, expected);
    }
}
