//! Frame renderer: turns a glyph mask plus a color into the per-pixel
//! commands the strip expects.

use smart_leds::RGB8;

use crate::glyphs::{Glyph, NUM_PIXELS};

/// RGB color representation re-exported from `smart_leds`.
pub type Rgb = RGB8;

const OFF: Rgb = Rgb::new(0, 0, 0);

/// Renders a full frame from a glyph mask.
///
/// Emits exactly [`NUM_PIXELS`] entries in raster order, every call, no
/// matter how many pixels are lit: lit positions carry `color`, unlit
/// positions are all-channels-zero. The downstream strip driver consumes a
/// complete frame per call; a partial frame would desynchronize it.
#[must_use]
pub fn render_frame(buffer: &Glyph, color: Rgb) -> [Rgb; NUM_PIXELS] {
    let mut frame = [OFF; NUM_PIXELS];
    for (slot, lit) in frame.iter_mut().zip(buffer.iter()) {
        if lit {
            *slot = color;
        }
    }
    frame
}

/// Packs a color into the 32-bit WS2812 wire word.
///
/// GRB byte order with the low 8 bits zero: the PIO state machine shifts
/// the word out left-first with a 24-bit threshold, so only the top three
/// bytes reach the strip.
#[expect(
    clippy::cast_lossless,
    reason = "u32::from is not usable in a const fn; u8 to u32 is lossless."
)]
#[must_use]
pub const fn pack_grb(color: Rgb) -> u32 {
    ((color.g as u32) << 24) | ((color.r as u32) << 16) | ((color.b as u32) << 8)
}
