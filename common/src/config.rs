//! Layout and timing configuration constants.
//!
//! Everything the face needs to know about geometry lives here as `const`.
//! Positions that depend on other objects (walk limits, jump triggers,
//! creature patrol range) are derived from the primary layout constants
//! rather than repeated as literals, so moving the bolted box or the question
//! box moves everything tied to it.
//!
//! # Compile-Time Validation
//!
//! Each group ends with `const` assertions. A layout that would put a sprite
//! off the display, or a patrol range that is empty, fails to compile.

use crate::entities::CreatureStyle;
use crate::scene::BoxStyle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (KS0108-style 128x64 graphic LCD).
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Nominal animation rate. Each tick advances every entity once.
pub const TICK_HZ: u32 = 16;

/// Nominal pause between ticks in milliseconds (best effort, no catch-up).
pub const TICK_PERIOD_MS: u32 = 1000 / TICK_HZ;

// =============================================================================
// Scenery Layout
// =============================================================================

/// Top row of the ground strip.
pub const GROUND_Y: i32 = 58;

/// Cloud position.
pub const CLOUD_X: i32 = 65;
pub const CLOUD_Y: i32 = 11;

/// Question box position. The hero jumps into it from below.
pub const BOX_X: i32 = 50;
pub const BOX_Y: i32 = 26;

/// Bolted box the creature patrols on top of. Its lower edge is hidden
/// behind the ground strip, so the height only has to reach past it.
pub const BOLTED_BOX_X: i32 = 80;
pub const BOLTED_BOX_Y: i32 = 43;
pub const BOLTED_BOX_WIDTH: u32 = 44;
pub const BOLTED_BOX_HEIGHT: u32 = 20;

/// Inset of the bolt heads from the bolted box corners.
pub const BOLT_INSET: i32 = 2;

/// Coin icon next to the score.
pub const COIN_ICON_X: i32 = 80;
pub const COIN_ICON_Y: i32 = 0;

const _: () = assert!(GROUND_Y + 6 <= SCREEN_HEIGHT as i32);
const _: () = assert!(BOLTED_BOX_X + BOLTED_BOX_WIDTH as i32 <= SCREEN_WIDTH as i32);
const _: () = assert!(BOLTED_BOX_Y + BOLTED_BOX_HEIGHT as i32 >= GROUND_Y);

// =============================================================================
// Scoreboard Layout
// =============================================================================

/// Where the secondary pair ("DD-MM") starts.
pub const SECONDARY_SCORE_POS: (i32, i32) = (1, 8);

/// Where the primary pair ("xHHMM") starts, right of the coin icon.
pub const PRIMARY_SCORE_POS: (i32, i32) = (89, 0);

/// Top-left label.
pub const WORLD_LABEL: &str = "WORLD";

/// Century shown in front of the two-digit year in year mode.
pub const CENTURY: u8 = 20;

// =============================================================================
// Hero
// =============================================================================

pub const HERO_WIDTH: i32 = 8;
pub const HERO_HEIGHT: i32 = 12;

/// Standing height: feet on the ground strip.
pub const HERO_GROUND_Y: i32 = GROUND_Y - HERO_HEIGHT;

/// Right walk limit, where the hero touches the bolted box.
pub const HERO_WALK_MAX: i32 = BOLTED_BOX_X - HERO_WIDTH;

/// Distance from the question box at which a pending jump starts.
pub const JUMP_LEAD: i32 = 5;

/// Jump trigger while walking right.
pub const JUMP_TRIGGER_RIGHT: i32 = BOX_X - JUMP_LEAD;

/// Jump trigger while walking left.
pub const JUMP_TRIGGER_LEFT: i32 = BOX_X + JUMP_LEAD;

/// Vertical offsets of the jump, one per tick.
pub const JUMP_ARC: [i32; 7] = [3, 9, 10, 12, 9, 6, 2];

/// Arc index at which the hero's head reaches the question box.
pub const JUMP_BOX_HIT_INDEX: usize = 3;

const _: () = assert!(JUMP_TRIGGER_RIGHT > 0 && JUMP_TRIGGER_LEFT < HERO_WALK_MAX);
const _: () = assert!(JUMP_BOX_HIT_INDEX < JUMP_ARC.len());
const _: () = assert!(HERO_GROUND_Y - JUMP_ARC[JUMP_BOX_HIT_INDEX] == BOX_Y + 8);

// =============================================================================
// Creature
// =============================================================================

pub const CREATURE_WIDTH: i32 = 8;
pub const CREATURE_HEIGHT: i32 = 16;

/// Patrol row: standing on the bolted box.
pub const CREATURE_Y: i32 = BOLTED_BOX_Y - CREATURE_HEIGHT;

/// Left patrol limit, just inside the left bolt.
pub const CREATURE_MIN: i32 = BOLTED_BOX_X + 3;

/// Right patrol limit, clear of the right bolt.
pub const CREATURE_MAX: i32 = BOLTED_BOX_X + BOLTED_BOX_WIDTH as i32 - CREATURE_WIDTH - 6;

/// Extra drop applied to the shorter spin frames.
pub const CREATURE_SPIN_DROP: i32 = 8;

/// Design-time creature look.
pub const CREATURE_STYLE: CreatureStyle = CreatureStyle::Walking;

/// Design-time look of the box the hero bumps.
pub const BOX_STYLE: BoxStyle = BoxStyle::Question;

const _: () = assert!(CREATURE_MIN < CREATURE_MAX);

// =============================================================================
// Coin Reveal
// =============================================================================

/// Where the reveal coin pops out, above the question box.
pub const REVEAL_X: i32 = BOX_X;
pub const REVEAL_Y: i32 = BOX_Y - 10;

/// Last logical reveal step.
pub const REVEAL_LAST_STEP: u8 = 19;

/// Step at which the coin is fully visible and the score is repainted.
pub const REVEAL_SCORE_STEP: u8 = 4;

const _: () = assert!(REVEAL_SCORE_STEP < REVEAL_LAST_STEP);
