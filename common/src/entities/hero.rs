//! The walking, jumping hero.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use super::Direction;
use crate::clock::TimeEdges;
use crate::config::{
    HERO_GROUND_Y,
    HERO_WALK_MAX,
    JUMP_ARC,
    JUMP_BOX_HIT_INDEX,
    JUMP_TRIGGER_LEFT,
    JUMP_TRIGGER_RIGHT,
};
use crate::sprite::{Footprint, SpriteSlot};
use crate::sprites::{HERO, HERO_LEFT_POSE, HERO_RIGHT_POSE};

/// What happened during one hero tick.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeroEvents {
    /// A jump began this tick.
    pub jump_started: bool,
    /// The hero's head reached the question box this tick.
    pub box_hit: bool,
}

/// Hero state: walks the ground between the left edge and the bolted box,
/// and jumps into the question box after every minute or hour boundary.
#[derive(Clone, Debug)]
pub struct Hero {
    x: i32,
    direction: Direction,
    jump_pending: bool,
    jumping: bool,
    arc_index: usize,
    stride: bool,
    slot: SpriteSlot,
}

impl Hero {
    /// Hero at the left edge, walking right.
    pub const fn new() -> Self { Self::at(0, Direction::Right) }

    /// Hero at `x` walking in `direction`, nothing drawn yet.
    pub const fn at(
        x: i32,
        direction: Direction,
    ) -> Self {
        Self {
            x,
            direction,
            jump_pending: false,
            jumping: false,
            arc_index: 0,
            stride: false,
            slot: SpriteSlot::new(),
        }
    }

    /// Advance one tick: update the jump, redraw, then walk one pixel.
    pub fn advance<D>(
        &mut self,
        display: &mut D,
        edges: TimeEdges,
        inverted: bool,
    ) -> HeroEvents
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let mut events = HeroEvents::default();

        if edges.any() {
            self.jump_pending = true;
        }

        if self.jump_pending && !self.jumping && self.x == Self::trigger(self.direction) {
            self.jumping = true;
            events.jump_started = true;
        }

        let mut y = HERO_GROUND_Y;
        if self.jumping {
            debug_assert!(self.arc_index < JUMP_ARC.len(), "jump arc overrun");
            y -= JUMP_ARC[self.arc_index];
            self.arc_index += 1;

            if self.arc_index == JUMP_BOX_HIT_INDEX {
                events.box_hit = true;
            }

            if self.arc_index == JUMP_ARC.len() {
                self.jumping = false;
                self.jump_pending = false;
                self.arc_index = 0;
            }
        }

        self.stride = !self.stride;
        let base = match self.direction {
            Direction::Right => HERO_RIGHT_POSE,
            Direction::Left => HERO_LEFT_POSE,
        };
        let pose = base + usize::from(self.stride);
        self.slot.redraw(display, &HERO, Footprint::new(self.x, y, pose), inverted);

        self.x += self.direction.step();
        if self.x >= HERO_WALK_MAX {
            self.direction = Direction::Left;
        }
        if self.x <= 0 {
            self.direction = Direction::Right;
        }

        events
    }

    /// Trigger x for a direction.
    #[inline]
    pub const fn trigger(direction: Direction) -> i32 {
        match direction {
            Direction::Right => JUMP_TRIGGER_RIGHT,
            Direction::Left => JUMP_TRIGGER_LEFT,
        }
    }

    #[inline]
    pub const fn x(&self) -> i32 { self.x }

    #[inline]
    pub const fn direction(&self) -> Direction { self.direction }

    #[inline]
    pub const fn is_jumping(&self) -> bool { self.jumping }

    #[inline]
    pub const fn is_jump_pending(&self) -> bool { self.jump_pending }

    /// Next arc entry to consume.
    #[inline]
    pub const fn arc_index(&self) -> usize { self.arc_index }

    /// Where the hero was drawn last tick.
    #[inline]
    pub const fn last_footprint(&self) -> Option<Footprint> { self.slot.last() }

    /// Forget the drawn footprint after the display was cleared.
    #[inline]
    pub fn forget_drawn(&mut self) { self.slot.forget(); }
}

impl Default for Hero {
    fn default() -> Self { Self::new() }
}
