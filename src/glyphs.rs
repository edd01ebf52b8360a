//! Fixed 5x5 pixel patterns for the digits 0-9.
//!
//! Glyphs are immutable, defined at compile time, and looked up by digit
//! value with a plain indexed read. Row-major raster order throughout:
//! left-to-right within a row, top row first.

/// Side length of the square LED matrix.
pub const GRID_SIDE: usize = 5;

/// Total pixel count of the matrix (and of every glyph).
pub const NUM_PIXELS: usize = GRID_SIDE * GRID_SIDE;

/// A fixed boolean pixel pattern, one entry per matrix position in raster order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub struct Glyph([bool; NUM_PIXELS]);

impl Glyph {
    /// A glyph with every pixel off.
    pub const BLANK: Self = Self([false; NUM_PIXELS]);

    #[must_use]
    pub const fn new(pixels: [bool; NUM_PIXELS]) -> Self {
        Self(pixels)
    }

    /// Builds a glyph from five row patterns, one `u8` per row.
    ///
    /// Only the low five bits of each row are used; bit 4 is the leftmost
    /// column.
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        reason = "Row and column stay below GRID_SIDE, so indexes stay below NUM_PIXELS \
        and the shift amount stays below 5."
    )]
    #[must_use]
    pub const fn from_rows(rows: [u8; GRID_SIDE]) -> Self {
        let mut pixels = [false; NUM_PIXELS];
        let mut row = 0;
        while row < GRID_SIDE {
            let mut column = 0;
            while column < GRID_SIDE {
                pixels[row * GRID_SIDE + column] =
                    (rows[row] >> (GRID_SIDE - 1 - column)) & 1 == 1;
                column += 1;
            }
            row += 1;
        }
        Self(pixels)
    }

    /// The raw row-major pixel mask.
    #[must_use]
    pub const fn pixels(&self) -> &[bool; NUM_PIXELS] {
        &self.0
    }

    /// Whether the pixel at `index` (raster order) is lit. Out-of-range
    /// indexes read as unlit.
    #[must_use]
    pub fn is_lit(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// Number of lit pixels.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.0.iter().filter(|lit| **lit).count()
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

/// The ten digit glyphs, indexed by digit value.
pub static DIGITS: [Glyph; 10] = [
    Glyph::from_rows([0b01110, 0b10001, 0b10001, 0b10001, 0b01110]), // 0
    Glyph::from_rows([0b00100, 0b01100, 0b00100, 0b00100, 0b01110]), // 1
    Glyph::from_rows([0b01110, 0b10001, 0b00010, 0b00100, 0b11111]), // 2
    Glyph::from_rows([0b11110, 0b00001, 0b00110, 0b00001, 0b11110]), // 3
    Glyph::from_rows([0b00010, 0b00110, 0b01010, 0b11111, 0b00010]), // 4
    Glyph::from_rows([0b11111, 0b10000, 0b11110, 0b00001, 0b11110]), // 5
    Glyph::from_rows([0b01110, 0b10000, 0b11110, 0b10001, 0b01110]), // 6
    Glyph::from_rows([0b11111, 0b00001, 0b00010, 0b00100, 0b00100]), // 7
    Glyph::from_rows([0b01110, 0b10001, 0b01110, 0b10001, 0b01110]), // 8
    Glyph::from_rows([0b01110, 0b10001, 0b01111, 0b00001, 0b01110]), // 9
];

/// Looks up the glyph for a digit.
///
/// Callers keep `digit` in `0..=9` (the counter guarantees this); the modulo
/// makes the read total rather than panicking on a violated precondition.
#[expect(
    clippy::indexing_slicing,
    clippy::integer_division_remainder_used,
    clippy::arithmetic_side_effects,
    reason = "DIGITS has 10 elements and (digit % 10) is in 0..=9."
)]
#[must_use]
pub fn glyph_for(digit: u8) -> &'static Glyph {
    &DIGITS[(digit % 10) as usize]
}
