//! Animated entities.
//!
//! Each entity is a self-contained state machine advanced once per tick by
//! the scheduler. There is no shared trait: every `advance` takes exactly the
//! collaborators that entity needs and erases its previous footprint before
//! drawing the next one.

mod creature;
mod hero;
mod reveal;

pub use creature::Creature;
pub use hero::{Hero, HeroEvents};
pub use reveal::{Reveal, reveal_frame};

/// Horizontal travel direction.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    #[default]
    Right,
    Left,
}

impl Direction {
    /// One-pixel step along the x axis.
    #[inline]
    pub const fn step(self) -> i32 {
        match self {
            Self::Right => 1,
            Self::Left => -1,
        }
    }
}

/// Result of advancing a finite effect.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// Keep calling `advance` next tick.
    Active,
    /// The effect reset itself; stop calling until retriggered.
    Finished,
}

/// Creature look, fixed at build time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CreatureStyle {
    /// Left/right walking poses.
    Walking,
    /// Spinning shell, independent of direction.
    Spin,
}
