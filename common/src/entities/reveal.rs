//! Coin popping out of the question box.
//!
//! Twenty logical steps play over the sprite's physical frames: the coin
//! rises (0-4), turns (5-7), turns back (8-9 reuse 6 and 5), then turns
//! again and breaks up into sparkles ending on a blank frame (10-19 map to
//! 6-15). The blank final frame erases the last sparkle.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use super::Status;
use crate::config::{REVEAL_LAST_STEP, REVEAL_SCORE_STEP, REVEAL_X, REVEAL_Y};
use crate::scoreboard::Scoreboard;
use crate::sprite::{Footprint, SpriteSlot};
use crate::sprites::{REVEAL, REVEAL_FRAME_COUNT};

/// Offset from logical step to physical frame past the bounce.
const FRAME_SHIFT: u8 = 4;

/// Last physical frame, blank.
const LAST_FRAME: usize = REVEAL_FRAME_COUNT - 1;

const _: () = assert!((REVEAL_LAST_STEP - FRAME_SHIFT) as usize == LAST_FRAME);

/// Physical frame for a logical reveal step. Steps past the end clamp to
/// the last (blank) frame.
pub const fn reveal_frame(step: u8) -> usize {
    let frame = match step {
        0..=7 => step,
        8 => 6,
        9 => 5,
        _ => step - FRAME_SHIFT,
    };
    if frame as usize > LAST_FRAME { LAST_FRAME } else { frame as usize }
}

#[derive(Clone, Debug, Default)]
pub struct Reveal {
    step: u8,
    slot: SpriteSlot,
}

impl Reveal {
    pub const fn new() -> Self {
        Self {
            step: 0,
            slot: SpriteSlot::new(),
        }
    }

    /// Draw the current step and move on.
    ///
    /// Requests a scoreboard repaint when the coin is fully visible. Returns
    /// [`Status::Finished`] after the last step, already reset for the next
    /// trigger.
    pub fn advance<D>(
        &mut self,
        display: &mut D,
        scoreboard: &mut Scoreboard,
        inverted: bool,
    ) -> Status
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        debug_assert!(self.step <= REVEAL_LAST_STEP, "reveal step out of range");
        let frame = reveal_frame(self.step);
        self.slot.redraw(display, &REVEAL, Footprint::new(REVEAL_X, REVEAL_Y, frame), inverted);

        if self.step == REVEAL_SCORE_STEP {
            scoreboard.request_repaint();
        }

        if self.step >= REVEAL_LAST_STEP {
            self.step = 0;
            return Status::Finished;
        }

        self.step += 1;
        Status::Active
    }

    /// Next step to draw.
    #[inline]
    pub const fn step(&self) -> u8 { self.step }

    #[inline]
    pub fn forget_drawn(&mut self) { self.slot.forget(); }
}
