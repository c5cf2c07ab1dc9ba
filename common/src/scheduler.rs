//! Frame scheduler.
//!
//! Owns every piece of animation state and advances it once per tick in a
//! fixed order: hero, creature, coin reveal, scoreboard. The host calls
//! [`Scheduler::tick`] and then pauses for [`TICK_PERIOD_MS`]; a tick that
//! overruns simply delays the next one.
//!
//! [`TICK_PERIOD_MS`]: crate::config::TICK_PERIOD_MS

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::clock::{ClockState, FaceSettings, TimeEdges};
use crate::entities::{Creature, Hero, Reveal, Status};
use crate::prng::{Draw, Xtea};
use crate::scene::draw_backdrop;
use crate::scoreboard::Scoreboard;
use crate::text::TextWriter;

/// What happened during one tick.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    pub jump_started: bool,
    pub box_hit: bool,
    pub reveal_finished: bool,
    pub score_repainted: bool,
}

impl TickReport {
    /// Whether anything worth logging happened.
    #[inline]
    pub const fn any(&self) -> bool {
        self.jump_started || self.box_hit || self.reveal_finished || self.score_repainted
    }
}

pub struct Scheduler {
    hero: Hero,
    creature: Creature,
    reveal: Reveal,
    reveal_active: bool,
    scoreboard: Scoreboard,
    writer: TextWriter,
    rng: Xtea,
    inverted: bool,
    ticks: u32,
}

impl Scheduler {
    /// Fresh animation state with the generator seeded from `clock`.
    pub fn new(clock: &ClockState) -> Self {
        Self {
            hero: Hero::new(),
            creature: Creature::new(),
            reveal: Reveal::new(),
            reveal_active: false,
            scoreboard: Scoreboard::new(),
            writer: TextWriter::new(),
            rng: Xtea::seeded(clock),
            inverted: false,
            ticks: 0,
        }
    }

    /// Draw the whole face from scratch: backdrop plus a forced score paint.
    ///
    /// Also used to switch between normal and inverted output.
    pub fn init<D>(
        &mut self,
        display: &mut D,
        clock: &ClockState,
        settings: &FaceSettings,
        inverted: bool,
    ) where
        D: DrawTarget<Color = BinaryColor>,
    {
        self.inverted = inverted;
        self.hero.forget_drawn();
        self.creature.forget_drawn();
        self.reveal.forget_drawn();

        self.scoreboard.force_mode_change();
        self.scoreboard.update(clock, settings, TimeEdges::default());

        draw_backdrop(display, &mut self.writer, inverted);

        self.scoreboard.take_dirty();
        self.scoreboard.render(display, &mut self.writer, inverted);

        #[cfg(feature = "defmt")]
        defmt::debug!("face init, inverted={}", inverted);
    }

    /// Advance every entity once and repaint the score if needed.
    ///
    /// Consumes the clock's boundary flags; the hero and the scoreboard both
    /// see the same snapshot.
    pub fn tick<D>(
        &mut self,
        display: &mut D,
        clock: &mut ClockState,
        settings: &FaceSettings,
    ) -> TickReport
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let edges = clock.take_edges();
        let mut report = TickReport::default();

        let hero = self.hero.advance(display, edges, self.inverted);
        report.jump_started = hero.jump_started;
        report.box_hit = hero.box_hit;
        if hero.box_hit {
            self.reveal_active = true;
        }

        self.creature.advance(display, self.inverted);

        if self.reveal_active && self.reveal.advance(display, &mut self.scoreboard, self.inverted) == Status::Finished
        {
            self.reveal_active = false;
            report.reveal_finished = true;
        }

        self.scoreboard.update(clock, settings, edges);
        if self.scoreboard.take_dirty() {
            self.scoreboard.render(display, &mut self.writer, self.inverted);
            report.score_repainted = true;
        }

        #[cfg(feature = "defmt")]
        if report.any() {
            defmt::debug!("tick {}: {}", self.ticks, report);
        }

        self.ticks = self.ticks.wrapping_add(1);
        report
    }

    /// Draw from the seeded generator.
    #[inline]
    pub fn random(
        &mut self,
        draw: Draw,
    ) -> u16 {
        self.rng.next(draw)
    }

    /// Ticks run since creation.
    #[inline]
    pub const fn ticks(&self) -> u32 { self.ticks }

    #[inline]
    pub const fn is_inverted(&self) -> bool { self.inverted }

    #[inline]
    pub const fn is_reveal_active(&self) -> bool { self.reveal_active }

    #[inline]
    pub const fn hero(&self) -> &Hero { &self.hero }

    #[inline]
    pub const fn creature(&self) -> &Creature { &self.creature }

    #[inline]
    pub const fn scoreboard(&self) -> &Scoreboard { &self.scoreboard }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::Rectangle;

    use super::*;
    use crate::config::{
        CREATURE_MAX,
        CREATURE_MIN,
        CREATURE_STYLE,
        HERO_WALK_MAX,
        JUMP_BOX_HIT_INDEX,
        JUMP_TRIGGER_RIGHT,
        PRIMARY_SCORE_POS,
        REVEAL_LAST_STEP,
        REVEAL_SCORE_STEP,
    };
    use crate::framebuffer::Framebuffer;
    use crate::scoreboard::ScoreMode;
    use crate::text::FontSelect;

    fn primary_area() -> Rectangle {
        Rectangle::new(Point::new(PRIMARY_SCORE_POS.0, PRIMARY_SCORE_POS.1), Size::new(25, 8))
    }

    fn rendered_primary(text: &str) -> Framebuffer {
        let mut fb = Framebuffer::new();
        let mut writer = TextWriter::new();
        writer.set_font(FontSelect::Score);
        writer.set_address(PRIMARY_SCORE_POS.0, PRIMARY_SCORE_POS.1);
        writer.write_str(&mut fb, text, false);
        fb
    }

    fn same_in(
        a: &Framebuffer,
        b: &Framebuffer,
        area: &Rectangle,
    ) -> bool {
        use embedded_graphics::primitives::PointsIter;
        area.points().all(|p| a.is_lit(p.x, p.y) == b.is_lit(p.x, p.y))
    }

    #[test]
    fn test_init_paints_score() {
        let clock = ClockState::at(24, 12, 25, 9, 5, 0);
        let mut fb = Framebuffer::new();
        let mut scheduler = Scheduler::new(&clock);
        scheduler.init(&mut fb, &clock, &FaceSettings::default(), false);

        assert!(same_in(&fb, &rendered_primary("x0905"), &primary_area()));
        assert_eq!(scheduler.scoreboard().mode(), Some(ScoreMode::Time));
        assert!(!scheduler.scoreboard().is_dirty());
    }

    #[test]
    fn test_quiet_ticks_do_not_repaint() {
        let mut clock = ClockState::at(24, 12, 25, 9, 5, 0);
        let mut fb = Framebuffer::new();
        let mut scheduler = Scheduler::new(&clock);
        let settings = FaceSettings::default();
        scheduler.init(&mut fb, &clock, &settings, false);

        for _ in 0..100 {
            assert_eq!(scheduler.tick(&mut fb, &mut clock, &settings), TickReport::default());
        }
        assert_eq!(scheduler.ticks(), 100);
    }

    #[test]
    fn test_entities_stay_in_bounds() {
        let mut clock = ClockState::at(24, 12, 25, 9, 5, 0);
        let mut fb = Framebuffer::new();
        let mut scheduler = Scheduler::new(&clock);
        let settings = FaceSettings::default();
        scheduler.init(&mut fb, &clock, &settings, false);

        for _ in 0..400 {
            scheduler.tick(&mut fb, &mut clock, &settings);
            assert!((0..=HERO_WALK_MAX).contains(&scheduler.hero().x()));
            assert!((CREATURE_MIN..=CREATURE_MAX).contains(&scheduler.creature().x()));
        }
        assert_eq!(scheduler.creature().style(), CREATURE_STYLE);
        assert!(!scheduler.hero().is_jumping());
    }

    #[test]
    fn test_minute_change_shows_after_coin() {
        let mut clock = ClockState::at(24, 12, 25, 9, 5, 59);
        let mut fb = Framebuffer::new();
        let mut scheduler = Scheduler::new(&clock);
        let settings = FaceSettings::default();
        scheduler.init(&mut fb, &clock, &settings, false);

        clock.advance_second();
        assert!(clock.minute_changed);

        let jump_tick = JUMP_TRIGGER_RIGHT as usize;
        let hit_tick = jump_tick + JUMP_BOX_HIT_INDEX - 1;
        let repaint_tick = hit_tick + REVEAL_SCORE_STEP as usize;
        let finish_tick = hit_tick + REVEAL_LAST_STEP as usize;

        for tick in 0..=finish_tick {
            let report = scheduler.tick(&mut fb, &mut clock, &settings);
            assert!(!clock.minute_changed, "edges are consumed every tick");
            assert_eq!(report.jump_started, tick == jump_tick, "tick {tick}");
            assert_eq!(report.box_hit, tick == hit_tick, "tick {tick}");
            assert_eq!(report.score_repainted, tick == repaint_tick, "tick {tick}");
            assert_eq!(report.reveal_finished, tick == finish_tick, "tick {tick}");

            let expected = if tick < repaint_tick { "x0905" } else { "x0906" };
            assert!(same_in(&fb, &rendered_primary(expected), &primary_area()), "tick {tick}");
        }
        assert!(!scheduler.is_reveal_active());
    }

    #[test]
    fn test_mode_change_repaints_next_tick() {
        let mut clock = ClockState::at(24, 12, 25, 9, 5, 0);
        let mut fb = Framebuffer::new();
        let mut scheduler = Scheduler::new(&clock);
        let mut settings = FaceSettings::default();
        scheduler.init(&mut fb, &clock, &settings, false);

        settings.score_mode = ScoreMode::Date;
        assert!(scheduler.tick(&mut fb, &mut clock, &settings).score_repainted);
        assert!(same_in(&fb, &rendered_primary("x1225"), &primary_area()));
        assert!(!scheduler.tick(&mut fb, &mut clock, &settings).score_repainted);
    }

    #[test]
    fn test_reinit_inverted() {
        let mut clock = ClockState::at(24, 12, 25, 9, 5, 0);
        let settings = FaceSettings::default();
        let mut fb = Framebuffer::new();
        let mut scheduler = Scheduler::new(&clock);
        scheduler.init(&mut fb, &clock, &settings, false);
        for _ in 0..10 {
            scheduler.tick(&mut fb, &mut clock, &settings);
        }

        scheduler.init(&mut fb, &clock, &settings, true);
        assert!(scheduler.is_inverted());
        // Sky is lit on an inverted face
        assert!(fb.is_lit(0, 40));
        scheduler.tick(&mut fb, &mut clock, &settings);
        assert!(fb.is_lit(0, 40));
        let hero = scheduler.hero().last_footprint().unwrap();
        let body = Rectangle::new(hero.origin, Size::new(8, 12));
        let unlit = 8 * 12 - fb.count_lit_in(&body);
        assert_eq!(unlit, crate::sprites::HERO.lit_cells(hero.frame).count());
    }

    #[test]
    fn test_generator_is_seeded_from_clock() {
        let clock = ClockState::at(24, 12, 25, 9, 5, 0);
        let mut a = Scheduler::new(&clock);
        let mut b = Xtea::seeded(&clock);
        assert_eq!(a.random(Draw::Full), b.next(Draw::Full));
    }
}
