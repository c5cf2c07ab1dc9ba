//! Core of the animated clock face.
//!
//! This crate contains all platform-agnostic logic, shared between the
//! desktop simulator and any LCD firmware that hosts the face:
//!
//! - [`config`]: Layout, bounds and tick-rate constants
//! - [`sprite`]: Column-encoded sprites, blit and erase-before-draw slots
//! - [`sprites`]: Sprite art
//! - [`framebuffer`]: 128x64 one-bit draw target
//! - [`text`]: Cursor-based character output
//! - [`scene`]: Static backdrop
//! - [`entities`]: Hero, creature and coin reveal state machines
//! - [`scoreboard`]: Score pairs and lazy repaint
//! - [`scheduler`]: Per-tick driver
//! - [`clock`]: Clock snapshot and face settings
//! - [`calendar`]: Day of week and month lengths
//! - [`prng`]: XTEA pseudo-random generator
//! - [`event_log`]: Ring buffer of event lines
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible and draws through any
//! `DrawTarget<Color = BinaryColor>`. It has no time dependencies; the host
//! owns the clock and the tick pause.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod calendar;
pub mod clock;
pub mod config;
pub mod entities;
pub mod event_log;
pub mod framebuffer;
pub mod prng;
pub mod scene;
pub mod scheduler;
pub mod scoreboard;
pub mod sprite;
pub mod sprites;
pub mod text;

// Re-export commonly used items
pub use clock::{ClockState, FaceSettings, Region, TimeEdges, TimeFormat};
pub use event_log::EventLog;
pub use framebuffer::Framebuffer;
pub use scheduler::{Scheduler, TickReport};
pub use scoreboard::ScoreMode;
