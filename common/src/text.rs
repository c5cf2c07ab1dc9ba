//! Cursor-based character output.
//!
//! Models the LCD driver's text path: a cursor address, a selected font, and
//! a "write one character and advance" primitive. Glyphs are drawn with their
//! background so rewriting a field needs no separate erase.

use embedded_graphics::mono_font::ascii::{FONT_5X7, FONT_5X8};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::sprite::{Pen, pen_color};

/// Font selector.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSelect {
    /// General text.
    #[default]
    Standard,
    /// Taller digits for the scoreboard and the label.
    Score,
}

impl FontSelect {
    /// Backing font.
    pub const fn font(self) -> &'static MonoFont<'static> {
        match self {
            Self::Standard => &FONT_5X7,
            Self::Score => &FONT_5X8,
        }
    }

    /// Horizontal cursor advance per character.
    pub const fn advance(self) -> i32 {
        let font = self.font();
        (font.character_size.width + font.character_spacing) as i32
    }
}

/// Text cursor and font selection.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct TextWriter {
    position: Point,
    font: FontSelect,
}

impl TextWriter {
    /// Cursor at the origin, standard font.
    pub const fn new() -> Self {
        Self {
            position: Point::zero(),
            font: FontSelect::Standard,
        }
    }

    /// Move the cursor to (`x`, `y`), top-left of the next glyph.
    #[inline]
    pub fn set_address(
        &mut self,
        x: i32,
        y: i32,
    ) {
        self.position = Point::new(x, y);
    }

    #[inline]
    pub const fn position(&self) -> Point { self.position }

    #[inline]
    pub const fn font(&self) -> FontSelect { self.font }

    #[inline]
    pub fn set_font(
        &mut self,
        font: FontSelect,
    ) {
        self.font = font;
    }

    /// Draw `c` at the cursor with its background and advance.
    pub fn write_char<D>(
        &mut self,
        display: &mut D,
        c: char,
        inverted: bool,
    ) where
        D: DrawTarget<Color = BinaryColor>,
    {
        let mut buf = [0u8; 4];
        Text::with_baseline(c.encode_utf8(&mut buf), self.position, self.style(inverted), Baseline::Top)
            .draw(display)
            .ok();
        self.position.x += self.font.advance();
    }

    /// Write each character of `s`.
    pub fn write_str<D>(
        &mut self,
        display: &mut D,
        s: &str,
        inverted: bool,
    ) where
        D: DrawTarget<Color = BinaryColor>,
    {
        for c in s.chars() {
            self.write_char(display, c, inverted);
        }
    }

    /// Write the last two decimal digits of `value`, zero padded.
    pub fn write_two_digits<D>(
        &mut self,
        display: &mut D,
        value: u8,
        inverted: bool,
    ) where
        D: DrawTarget<Color = BinaryColor>,
    {
        self.write_char(display, digit(value / 10), inverted);
        self.write_char(display, digit(value), inverted);
    }

    fn style(
        &self,
        inverted: bool,
    ) -> MonoTextStyle<'static, BinaryColor> {
        MonoTextStyleBuilder::new()
            .font(self.font.font())
            .text_color(pen_color(Pen::Draw, inverted))
            .background_color(pen_color(Pen::Erase, inverted))
            .build()
    }
}

/// ASCII digit for the ones place of `value`.
#[inline]
const fn digit(value: u8) -> char { (b'0' + value % 10) as char }
