//! One-bit frame buffer matching the 128x64 panel.
//!
//! Hosts that already have a pixel driver draw straight into it; this buffer
//! is for targets that only accept whole frames, and for host-side tests that
//! need to inspect what the face drew.

use core::convert::Infallible;

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PointsIter, Rectangle};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

const _: () = assert!(SCREEN_WIDTH == u128::BITS);

/// 128x64 monochrome bitmap, one `u128` per row (bit `x` = column `x`).
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    rows: [u128; SCREEN_HEIGHT as usize],
}

impl Framebuffer {
    /// Total pixel count.
    pub const PIXELS: usize = (SCREEN_WIDTH * SCREEN_HEIGHT) as usize;

    /// A fully cleared buffer.
    pub const fn new() -> Self {
        Self {
            rows: [0; SCREEN_HEIGHT as usize],
        }
    }

    /// Set or clear every pixel.
    pub fn fill(
        &mut self,
        lit: bool,
    ) {
        self.rows = [if lit { u128::MAX } else { 0 }; SCREEN_HEIGHT as usize];
    }

    /// Whether (`x`, `y`) is lit. Out-of-range coordinates read as unlit.
    pub fn is_lit(
        &self,
        x: i32,
        y: i32,
    ) -> bool {
        Self::index(x, y).is_some_and(|(row, bit)| self.rows[row] & (1u128 << bit) != 0)
    }

    /// Number of lit pixels.
    pub fn count_lit(&self) -> usize { self.rows.iter().map(|row| row.count_ones() as usize).sum() }

    /// Number of lit pixels inside `area`.
    pub fn count_lit_in(
        &self,
        area: &Rectangle,
    ) -> usize {
        area.points().filter(|p| self.is_lit(p.x, p.y)).count()
    }

    fn index(
        x: i32,
        y: i32,
    ) -> Option<(usize, u32)> {
        let x = u32::try_from(x).ok().filter(|&x| x < SCREEN_WIDTH)?;
        let y = u32::try_from(y).ok().filter(|&y| y < SCREEN_HEIGHT)?;
        Some((y as usize, x))
    }
}

impl Default for Framebuffer {
    fn default() -> Self { Self::new() }
}

impl core::fmt::Debug for Framebuffer {
    /// One line per row, `#` for lit pixels.
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        for row in &self.rows {
            for bit in 0..SCREEN_WIDTH {
                f.write_str(if *row & (1u128 << bit) != 0 { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some((row, bit)) = Self::index(point.x, point.y) {
                match color {
                    BinaryColor::On => self.rows[row] |= 1u128 << bit,
                    BinaryColor::Off => self.rows[row] &= !(1u128 << bit),
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::PrimitiveStyle;

    use super::*;

    #[test]
    fn test_new_is_blank() {
        let fb = Framebuffer::new();
        assert_eq!(fb.count_lit(), 0);
        assert_eq!(fb.size(), Size::new(128, 64));
    }

    #[test]
    fn test_set_and_clear_pixel() {
        let mut fb = Framebuffer::new();
        Pixel(Point::new(127, 63), BinaryColor::On).draw(&mut fb).ok();
        assert!(fb.is_lit(127, 63));
        assert_eq!(fb.count_lit(), 1);

        Pixel(Point::new(127, 63), BinaryColor::Off).draw(&mut fb).ok();
        assert!(!fb.is_lit(127, 63));
    }

    #[test]
    fn test_out_of_range_pixels_are_dropped() {
        let mut fb = Framebuffer::new();
        Pixel(Point::new(128, 0), BinaryColor::On).draw(&mut fb).ok();
        Pixel(Point::new(-1, 5), BinaryColor::On).draw(&mut fb).ok();
        Pixel(Point::new(3, 64), BinaryColor::On).draw(&mut fb).ok();
        assert_eq!(fb.count_lit(), 0);
        assert!(!fb.is_lit(-1, 5));
    }

    #[test]
    fn test_filled_rectangle() {
        let mut fb = Framebuffer::new();
        let area = Rectangle::new(Point::new(10, 10), Size::new(4, 3));
        area.into_styled(PrimitiveStyle::with_fill(BinaryColor::On)).draw(&mut fb).ok();
        assert_eq!(fb.count_lit(), 12);
        assert_eq!(fb.count_lit_in(&area), 12);
    }

    #[test]
    fn test_fill() {
        let mut fb = Framebuffer::new();
        fb.fill(true);
        assert_eq!(fb.count_lit(), Framebuffer::PIXELS);
        fb.fill(false);
        assert_eq!(fb.count_lit(), 0);
    }
}
