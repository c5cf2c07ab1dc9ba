//! Static backdrop drawn once at start-up.
//!
//! Nothing here is redrawn per tick; moving sprites that pass over the
//! scenery may leave holes in it until the next full redraw.

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::config::{
    BOLT_INSET,
    BOLTED_BOX_HEIGHT,
    BOLTED_BOX_WIDTH,
    BOLTED_BOX_X,
    BOLTED_BOX_Y,
    BOX_STYLE,
    BOX_X,
    BOX_Y,
    CLOUD_X,
    CLOUD_Y,
    COIN_ICON_X,
    COIN_ICON_Y,
    GROUND_Y,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    WORLD_LABEL,
};
use crate::sprite::{Pen, blit, blit_opaque, pen_color};
use crate::sprites::{BOLT, BOX, CLOUD, COIN, GROUND};
use crate::text::{FontSelect, TextWriter};

/// Look of the box above the hero's path.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoxStyle {
    /// Plain brick.
    Brick,
    /// Question mark.
    Question,
}

impl BoxStyle {
    /// Frame index in [`BOX`].
    #[inline]
    pub const fn frame(self) -> usize {
        match self {
            Self::Brick => 0,
            Self::Question => 1,
        }
    }
}

/// Clear the display and draw every static element.
pub fn draw_backdrop<D>(
    display: &mut D,
    writer: &mut TextWriter,
    inverted: bool,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let ink = pen_color(Pen::Draw, inverted);
    let paper = pen_color(Pen::Erase, inverted);

    Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(paper))
        .draw(display)
        .ok();

    draw_label(display, writer, inverted);
    blit(display, &COIN, 0, Point::new(COIN_ICON_X, COIN_ICON_Y), Pen::Draw, inverted);

    // Bolted box: lower edge runs under the ground strip
    Rectangle::new(
        Point::new(BOLTED_BOX_X, BOLTED_BOX_Y),
        Size::new(BOLTED_BOX_WIDTH, BOLTED_BOX_HEIGHT),
    )
    .into_styled(PrimitiveStyle::with_stroke(ink, 1))
    .draw(display)
    .ok();
    let right = BOLTED_BOX_X + BOLTED_BOX_WIDTH as i32 - 1;
    display
        .draw_iter([
            Pixel(Point::new(BOLTED_BOX_X, BOLTED_BOX_Y), paper),
            Pixel(Point::new(right, BOLTED_BOX_Y), paper),
        ])
        .ok();
    let bolt_y = BOLTED_BOX_Y + BOLT_INSET;
    blit(display, &BOLT, 0, Point::new(BOLTED_BOX_X + BOLT_INSET, bolt_y), Pen::Draw, inverted);
    blit(
        display,
        &BOLT,
        0,
        Point::new(right - BOLT_INSET - BOLT.width() as i32 + 1, bolt_y),
        Pen::Draw,
        inverted,
    );

    draw_ground(display, inverted);
    blit(display, &CLOUD, 0, Point::new(CLOUD_X, CLOUD_Y), Pen::Draw, inverted);
    draw_box(display, BOX_STYLE, inverted);
}

/// The box the hero bumps, at its fixed position.
pub fn draw_box<D>(
    display: &mut D,
    style: BoxStyle,
    inverted: bool,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    blit(display, &BOX, style.frame(), Point::new(BOX_X, BOX_Y), Pen::Draw, inverted);
}

/// "WORLD" in the score font at the top-left corner.
fn draw_label<D>(
    display: &mut D,
    writer: &mut TextWriter,
    inverted: bool,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let previous_font = writer.font();
    writer.set_font(FontSelect::Score);
    writer.set_address(0, 0);
    writer.write_str(display, WORLD_LABEL, inverted);
    writer.set_font(previous_font);
}

/// Opaque ground tiles across the full width.
fn draw_ground<D>(
    display: &mut D,
    inverted: bool,
) where
    D: DrawTarget<Color = BinaryColor>,
{
    let tile = GROUND.width() as i32;
    for x in (0..SCREEN_WIDTH as i32).step_by(tile as usize) {
        blit_opaque(display, &GROUND, 0, Point::new(x, GROUND_Y), inverted);
    }
}
