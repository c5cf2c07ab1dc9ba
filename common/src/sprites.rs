//! Sprite art for the clock face.
//!
//! All tables are column encoded (see [`crate::sprite`]); the LSB of each
//! column is the top row.

use crate::sprite::{Sprite, columns_from_rows};

// =============================================================================
// Hero (8x12)
// =============================================================================

/// First walking pose facing right; the second pose follows it.
pub const HERO_RIGHT_POSE: usize = 0;

/// First walking pose facing left; the second pose follows it.
pub const HERO_LEFT_POSE: usize = 2;

static HERO_FRAMES: [[u16; 8]; 4] = [
    [0x918, 0xE9C, 0xEC6, 0x7CB, 0x6C3, 0x7D6, 0x492, 0x500], // Right, step 1
    [0x518, 0x49C, 0x6C6, 0x7CB, 0x6C3, 0xFD6, 0xE92, 0x900], // Right, step 2
    [0x500, 0x492, 0x7D6, 0x6C3, 0x7CB, 0xEC6, 0xE9C, 0x918], // Left, step 1
    [0x900, 0xE92, 0xFD6, 0x6C3, 0x7CB, 0x6C6, 0x49C, 0x518], // Left, step 2
];

pub static HERO: Sprite<8> = Sprite::new(12, &HERO_FRAMES);

// =============================================================================
// Creature (8x16, spin frames use the top 8 rows)
// =============================================================================

pub const CREATURE_RIGHT_POSE: usize = 0;
pub const CREATURE_LEFT_POSE: usize = 2;

/// First of four shell spin frames.
pub const CREATURE_SPIN_POSE: usize = 4;

/// Number of shell spin frames.
pub const CREATURE_SPIN_FRAMES: usize = 4;

static CREATURE_FRAMES: [[u16; 8]; 8] = [
    [0x1C00, 0xF780, 0xFE80, 0x9FC0, 0x3BFE, 0x3FFF, 0x2C33, 0x0078], // Right, step 1
    [0x1C00, 0x3780, 0x3E80, 0x3FC0, 0xFBFE, 0xFFFF, 0x8C33, 0x0078], // Right, step 2
    [0x0078, 0x2C33, 0x3FFF, 0x3BFE, 0x9FC0, 0xFE80, 0xF780, 0x1C00], // Left, step 1
    [0x0078, 0x8C33, 0xFFFF, 0xFBFE, 0x3FC0, 0x3E80, 0x3780, 0x1C00], // Left, step 2
    [0x30, 0x6E, 0xEB, 0xD5, 0xD5, 0xEB, 0x6E, 0x30],                 // Spin 1
    [0xF0, 0x6E, 0x6B, 0xD5, 0xD5, 0xEB, 0xEE, 0xF0],                 // Spin 2
    [0xF0, 0x6E, 0x6B, 0x75, 0x75, 0x6B, 0x6E, 0xF0],                 // Spin 3
    [0xF0, 0xEE, 0xEB, 0xD5, 0xD5, 0x6B, 0x6E, 0xF0],                 // Spin 4
];

pub static CREATURE: Sprite<8> = Sprite::new(16, &CREATURE_FRAMES);

// =============================================================================
// Coin Reveal (8x16)
// =============================================================================

/// Physical frames in the coin reveal.
pub const REVEAL_FRAME_COUNT: usize = 16;

/// Physical frames of the reveal: pop up, spin, sparkle out, then blanks.
static REVEAL_FRAMES: [[u16; 8]; REVEAL_FRAME_COUNT] = [
    [0x00, 0x00, 0x00, 0xE0, 0xE0, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x78, 0x78, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x38, 0xC6, 0xD6, 0x38, 0x00, 0x00],
    [0x00, 0x38, 0x44, 0x82, 0x92, 0x44, 0x38, 0x00],
    [0x3C, 0x42, 0x81, 0x81, 0xA1, 0x9D, 0x42, 0x3C], // Fully visible
    [0x00, 0x3C, 0x42, 0x81, 0xBD, 0x42, 0x3C, 0x00], // Starts to rotate
    [0x00, 0x00, 0x7E, 0x81, 0xBD, 0x7E, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0x00], // Edge on
    [0x00, 0x00, 0x00, 0x55, 0xAA, 0x00, 0x00, 0x00], // Breaking up
    [0x00, 0x00, 0x00, 0x3C, 0x3C, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x24, 0x18, 0x18, 0x24, 0x00, 0x00],
    [0x00, 0x42, 0x24, 0x00, 0x00, 0x24, 0x42, 0x00],
    [0x81, 0x42, 0x00, 0x00, 0x00, 0x00, 0x42, 0x81],
    [0x81, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x81],
    [0x00; 8],
    [0x00; 8],
];

pub static REVEAL: Sprite<8> = Sprite::new(16, &REVEAL_FRAMES);

// =============================================================================
// Scenery
// =============================================================================

static GROUND_FRAMES: [[u16; 8]; 1] = [[0x0D, 0x10, 0x09, 0x04, 0x19, 0x20, 0x11, 0x08]];

/// One 8x6 tile of the ground strip.
pub static GROUND: Sprite<8> = Sprite::new(6, &GROUND_FRAMES);

static CLOUD_FRAMES: [[u16; 16]; 1] =
    [columns_from_rows([0x3776, 0x6889, 0x8441, 0x8002, 0x6005, 0x8001, 0x8892, 0x776C])];

/// 16x8 cloud, drawn sideways and transposed at compile time.
pub static CLOUD: Sprite<16> = Sprite::new(8, &CLOUD_FRAMES);

static BOLT_FRAMES: [[u16; 4]; 1] = [[0x6, 0xD, 0xB, 0x6]];

pub static BOLT: Sprite<4> = Sprite::new(4, &BOLT_FRAMES);

static COIN_FRAMES: [[u16; 8]; 1] = [[0x3C, 0x42, 0x81, 0x81, 0xA1, 0x9D, 0x42, 0x3C]];

/// Coin icon drawn next to the score.
pub static COIN: Sprite<8> = Sprite::new(8, &COIN_FRAMES);

/// Box frames, indexed by [`BoxStyle::frame`](crate::scene::BoxStyle::frame).
static BOX_FRAMES: [[u16; 8]; 2] = [
    [0x7E, 0xD5, 0xAB, 0xD5, 0xAB, 0xD5, 0xAB, 0x7E],
    [0x7E, 0x81, 0x85, 0xD3, 0xDB, 0x8D, 0x81, 0x7E],
];

pub static BOX: Sprite<8> = Sprite::new(8, &BOX_FRAMES);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_counts() {
        assert_eq!(HERO.frame_count(), 4);
        assert_eq!(CREATURE.frame_count(), CREATURE_SPIN_POSE + CREATURE_SPIN_FRAMES);
        assert_eq!(REVEAL.frame_count(), REVEAL_FRAME_COUNT);
        assert_eq!(BOX.frame_count(), 2);
    }

    #[test]
    fn test_reveal_ends_on_blank_frames() {
        assert_eq!(REVEAL.lit_cells(14).count(), 0);
        assert_eq!(REVEAL.lit_cells(15).count(), 0);
        assert!(REVEAL.lit_cells(4).count() > 0);
    }

    #[test]
    fn test_full_reveal_coin_matches_icon() {
        assert!(REVEAL.lit_cells(4).eq(COIN.lit_cells(0)));
    }

    #[test]
    fn test_spin_frames_fit_in_top_half() {
        for frame in CREATURE_SPIN_POSE..CREATURE.frame_count() {
            assert!(CREATURE.lit_cells(frame).all(|p| p.y < 8));
        }
    }

    #[test]
    fn test_hero_poses_fit_sprite_height() {
        for columns in &HERO_FRAMES {
            assert!(columns.iter().all(|&column| column < 1 << 12));
        }
    }
}
