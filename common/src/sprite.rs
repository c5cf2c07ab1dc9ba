//! Column-encoded bitmap sprites and the blit primitive.
//!
//! A sprite frame is `W` columns; bit `r` of column `c` lights the pixel at
//! row `r`. Every animated and static drawing routine on the face goes
//! through [`blit`], so drawing and erasing always use the same pixel test:
//! erasing a frame at an origin clears exactly the pixels that drawing it set.
//!
//! # Erase-Before-Draw
//!
//! There is no back buffer. Moving sprites keep a [`SpriteSlot`] recording
//! what they drew last tick; [`SpriteSlot::redraw`] clears that footprint
//! before drawing the new one. Sprites that overlap are not composited: one
//! sprite's erase pass can clear pixels another sprite set.

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

// =============================================================================
// Sprite Definition
// =============================================================================

/// Immutable table of column-encoded frames, `W` columns wide.
pub struct Sprite<const W: usize> {
    height: u8,
    frames: &'static [[u16; W]],
}

impl<const W: usize> Sprite<W> {
    /// Create a sprite. Rows past `height` are never drawn.
    pub const fn new(
        height: u8,
        frames: &'static [[u16; W]],
    ) -> Self {
        assert!(height <= 16, "column data is 16 bits");
        Self { height, frames }
    }

    #[inline]
    pub const fn width(&self) -> u32 { W as u32 }

    #[inline]
    pub const fn height(&self) -> u32 { self.height as u32 }

    #[inline]
    pub const fn frame_count(&self) -> usize { self.frames.len() }

    /// Whether the cell at (`column`, `row`) of `frame` is lit.
    pub fn is_lit(
        &self,
        frame: usize,
        column: usize,
        row: u32,
    ) -> bool {
        row < self.height() && self.frames[frame][column] & (1 << row) != 0
    }

    /// Offsets of every lit cell of `frame`, row by row.
    pub fn lit_cells(
        &self,
        frame: usize,
    ) -> impl Iterator<Item = Point> + '_ {
        debug_assert!(frame < self.frames.len(), "sprite frame out of range");
        let columns = &self.frames[frame];
        (0..self.height()).flat_map(move |row| {
            (0..W)
                .filter(move |&column| columns[column] & (1 << row) != 0)
                .map(move |column| Point::new(column as i32, row as i32))
        })
    }
}

/// Turn row-major art (bit `c` of row `r` = column `c`) into column-encoded
/// data, for art that is easier to write sideways.
pub const fn columns_from_rows<const W: usize, const H: usize>(rows: [u16; H]) -> [u16; W] {
    let mut columns = [0u16; W];
    let mut row = 0;
    while row < H {
        let mut column = 0;
        while column < W {
            if rows[row] & (1 << column) != 0 {
                columns[column] |= 1 << row;
            }
            column += 1;
        }
        row += 1;
    }
    columns
}

// =============================================================================
// Blit
// =============================================================================

/// Whether a blit lights or clears the sprite's lit cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pen {
    Draw,
    Erase,
}

/// Pixel colour for a pen. An inverted face swaps ink and paper.
#[inline]
pub const fn pen_color(
    pen: Pen,
    inverted: bool,
) -> BinaryColor {
    let lit = matches!(pen, Pen::Draw) != inverted;
    if lit { BinaryColor::On } else { BinaryColor::Off }
}

/// Draw or erase `frame` of `sprite` with its top-left corner at `origin`.
///
/// Only lit cells are touched. No clipping is done here; pixels that fall
/// outside the target are handled by the target's own contract.
pub fn blit<D, const W: usize>(
    display: &mut D,
    sprite: &Sprite<W>,
    frame: usize,
    origin: Point,
    pen: Pen,
    inverted: bool,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let color = pen_color(pen, inverted);
    display
        .draw_iter(sprite.lit_cells(frame).map(|offset| Pixel(origin + offset, color)))
        .ok();
}

/// Draw every cell of `frame`: lit cells set, unlit cells cleared.
pub fn blit_opaque<D, const W: usize>(
    display: &mut D,
    sprite: &Sprite<W>,
    frame: usize,
    origin: Point,
    inverted: bool,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let ink = pen_color(Pen::Draw, inverted);
    let paper = pen_color(Pen::Erase, inverted);
    let cells = (0..sprite.height()).flat_map(move |row| {
        (0..W).map(move |column| {
            let color = if sprite.is_lit(frame, column, row) { ink } else { paper };
            Pixel(origin + Point::new(column as i32, row as i32), color)
        })
    });
    display.draw_iter(cells).ok();
}

// =============================================================================
// Last-Drawn Record
// =============================================================================

/// A frame drawn at a position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Footprint {
    pub origin: Point,
    pub frame: usize,
}

impl Footprint {
    #[inline]
    pub const fn new(
        x: i32,
        y: i32,
        frame: usize,
    ) -> Self {
        Self {
            origin: Point::new(x, y),
            frame,
        }
    }
}

/// Remembers what a moving sprite drew last so it can be erased exactly.
#[derive(Clone, Copy, Default, Debug)]
pub struct SpriteSlot {
    last: Option<Footprint>,
}

impl SpriteSlot {
    /// A slot that has not drawn anything yet.
    pub const fn new() -> Self { Self { last: None } }

    /// What was drawn last, if anything.
    #[inline]
    pub const fn last(&self) -> Option<Footprint> { self.last }

    /// Erase the previous footprint (if any), then draw and record `next`.
    pub fn redraw<D, const W: usize>(
        &mut self,
        display: &mut D,
        sprite: &Sprite<W>,
        next: Footprint,
        inverted: bool,
    ) where
        D: DrawTarget<Color = BinaryColor>,
    {
        if let Some(previous) = self.last {
            blit(display, sprite, previous.frame, previous.origin, Pen::Erase, inverted);
        }
        blit(display, sprite, next.frame, next.origin, Pen::Draw, inverted);
        self.last = Some(next);
    }

    /// Forget the last footprint, e.g. after the whole display was cleared.
    #[inline]
    pub fn forget(&mut self) { self.last = None; }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use crate::sprites::{CLOUD, CREATURE, HERO};

    #[test]
    fn test_lit_cells_match_column_bits() {
        static FRAMES: [[u16; 2]; 1] = [[0b101, 0b010]];
        let sprite = Sprite::new(3, &FRAMES);
        let cells: Vec<Point> = sprite.lit_cells(0).collect();
        assert_eq!(cells, vec![Point::new(0, 0), Point::new(1, 1), Point::new(0, 2)]);
    }

    #[test]
    fn test_rows_past_height_are_ignored() {
        static FRAMES: [[u16; 1]; 1] = [[0b1111]];
        let sprite = Sprite::new(2, &FRAMES);
        assert_eq!(sprite.lit_cells(0).count(), 2);
        assert!(!sprite.is_lit(0, 0, 3));
    }

    #[test]
    fn test_columns_from_rows_transposes() {
        let columns: [u16; 3] = columns_from_rows([0b001, 0b110]);
        assert_eq!(columns, [0b01, 0b10, 0b10]);
    }

    #[test]
    fn test_cloud_is_transposed_row_art() {
        // Top row of the cloud art is 0x3776: columns 1, 2, 4, 5, 6, 8, 9, 10, 12, 13
        for column in 0..16 {
            assert_eq!(CLOUD.is_lit(0, column, 0), 0x3776 & (1 << column) != 0);
        }
    }

    #[test]
    fn test_erase_exactly_reverses_draw() {
        let mut fb = Framebuffer::new();
        let origin = Point::new(20, 30);
        for frame in 0..HERO.frame_count() {
            blit(&mut fb, &HERO, frame, origin, Pen::Draw, false);
            assert_eq!(fb.count_lit(), HERO.lit_cells(frame).count());
            blit(&mut fb, &HERO, frame, origin, Pen::Erase, false);
            assert_eq!(fb.count_lit(), 0, "frame {frame} left stray pixels");
        }
    }

    #[test]
    fn test_redraw_at_same_position_is_stable() {
        let mut fb = Framebuffer::new();
        let mut slot = SpriteSlot::new();
        let footprint = Footprint::new(90, 27, 1);

        slot.redraw(&mut fb, &CREATURE, footprint, false);
        let before = fb.clone();
        slot.redraw(&mut fb, &CREATURE, footprint, false);
        assert_eq!(fb, before);
    }

    #[test]
    fn test_redraw_erases_previous_footprint() {
        let mut fb = Framebuffer::new();
        let mut slot = SpriteSlot::new();

        slot.redraw(&mut fb, &HERO, Footprint::new(10, 40, 0), false);
        slot.redraw(&mut fb, &HERO, Footprint::new(11, 40, 1), false);

        let mut expected = Framebuffer::new();
        blit(&mut expected, &HERO, 1, Point::new(11, 40), Pen::Draw, false);
        assert_eq!(fb, expected);
        assert_eq!(slot.last(), Some(Footprint::new(11, 40, 1)));
    }

    #[test]
    fn test_first_redraw_erases_nothing() {
        let mut fb = Framebuffer::new();
        fb.fill(true);
        let mut slot = SpriteSlot::new();
        slot.redraw(&mut fb, &HERO, Footprint::new(0, 0, 0), false);
        assert_eq!(fb.count_lit(), Framebuffer::PIXELS);
    }

    #[test]
    fn test_inverted_pen_swaps_colors() {
        assert_eq!(pen_color(Pen::Draw, false), BinaryColor::On);
        assert_eq!(pen_color(Pen::Erase, false), BinaryColor::Off);
        assert_eq!(pen_color(Pen::Draw, true), BinaryColor::Off);
        assert_eq!(pen_color(Pen::Erase, true), BinaryColor::On);
    }

    #[test]
    fn test_inverted_erase_restores_lit_background() {
        let mut fb = Framebuffer::new();
        fb.fill(true);
        blit(&mut fb, &HERO, 2, Point::new(5, 5), Pen::Draw, true);
        assert!(fb.count_lit() < Framebuffer::PIXELS);
        blit(&mut fb, &HERO, 2, Point::new(5, 5), Pen::Erase, true);
        assert_eq!(fb.count_lit(), Framebuffer::PIXELS);
    }

    #[test]
    fn test_opaque_blit_clears_unlit_cells() {
        static FRAMES: [[u16; 2]; 1] = [[0b01, 0b00]];
        let sprite = Sprite::new(2, &FRAMES);
        let mut fb = Framebuffer::new();
        fb.fill(true);
        blit_opaque(&mut fb, &sprite, 0, Point::zero(), false);
        assert!(fb.is_lit(0, 0));
        assert!(!fb.is_lit(0, 1));
        assert!(!fb.is_lit(1, 0));
        assert!(!fb.is_lit(1, 1));
        assert!(fb.is_lit(2, 0));
    }
}
