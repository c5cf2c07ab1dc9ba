//! The creature patrolling the top of the bolted box at half the hero's pace.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use super::{CreatureStyle, Direction};
use crate::config::{CREATURE_MAX, CREATURE_MIN, CREATURE_SPIN_DROP, CREATURE_STYLE, CREATURE_Y};
use crate::sprite::{Footprint, SpriteSlot};
use crate::sprites::{CREATURE, CREATURE_LEFT_POSE, CREATURE_RIGHT_POSE, CREATURE_SPIN_FRAMES, CREATURE_SPIN_POSE};

#[derive(Clone, Debug)]
pub struct Creature {
    x: i32,
    direction: Direction,
    style: CreatureStyle,
    /// Skip the next tick.
    resting: bool,
    /// Walking: second pose of the pair. Spin: frame within the spin cycle.
    phase: usize,
    slot: SpriteSlot,
}

impl Creature {
    /// Creature at the left end of its patrol in the configured style.
    pub const fn new() -> Self { Self::with_style(CREATURE_STYLE) }

    pub const fn with_style(style: CreatureStyle) -> Self {
        Self {
            x: CREATURE_MIN,
            direction: Direction::Right,
            style,
            resting: false,
            phase: 0,
            slot: SpriteSlot::new(),
        }
    }

    /// Advance one tick. Moves and redraws on every other tick only; the
    /// bound checks run every tick.
    pub fn advance<D>(
        &mut self,
        display: &mut D,
        inverted: bool,
    ) where
        D: DrawTarget<Color = BinaryColor>,
    {
        if self.resting {
            self.resting = false;
        } else {
            let next = self.next_footprint();
            self.slot.redraw(display, &CREATURE, next, inverted);
            self.x += self.direction.step();
            self.resting = true;
        }

        if self.x >= CREATURE_MAX {
            self.direction = Direction::Left;
        }
        if self.x <= CREATURE_MIN {
            self.direction = Direction::Right;
        }
    }

    fn next_footprint(&mut self) -> Footprint {
        match self.style {
            CreatureStyle::Walking => {
                self.phase ^= 1;
                let base = match self.direction {
                    Direction::Right => CREATURE_RIGHT_POSE,
                    Direction::Left => CREATURE_LEFT_POSE,
                };
                Footprint::new(self.x, CREATURE_Y, base + self.phase)
            }
            CreatureStyle::Spin => {
                self.phase = (self.phase + 1) % CREATURE_SPIN_FRAMES;
                Footprint::new(self.x, CREATURE_Y + CREATURE_SPIN_DROP, CREATURE_SPIN_POSE + self.phase)
            }
        }
    }

    #[inline]
    pub const fn x(&self) -> i32 { self.x }

    #[inline]
    pub const fn direction(&self) -> Direction { self.direction }

    #[inline]
    pub const fn style(&self) -> CreatureStyle { self.style }

    #[inline]
    pub const fn last_footprint(&self) -> Option<Footprint> { self.slot.last() }

    #[inline]
    pub fn forget_drawn(&mut self) { self.slot.forget(); }
}

impl Default for Creature {
    fn default() -> Self { Self::new() }
}
