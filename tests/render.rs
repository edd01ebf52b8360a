//! Host-level tests for the glyph table and the frame renderer.

#![expect(
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    reason = "Test indexes and arithmetic stay inside the ten-glyph table."
)]

use digit_counter::{glyph_for, pack_grb, render_frame, Glyph, Rgb, DIGITS, NUM_PIXELS};

#[test]
fn table_holds_exactly_ten_glyphs_of_twenty_five_pixels() {
    assert_eq!(DIGITS.len(), 10);
    for glyph in &DIGITS {
        assert_eq!(glyph.pixels().len(), NUM_PIXELS);
        // Every digit lights something.
        assert!(glyph.lit_count() > 0);
    }
}

#[test]
fn lookup_is_total_and_stable_over_the_digit_range() {
    for digit in 0..=9_u8 {
        assert_eq!(glyph_for(digit), glyph_for(digit));
        assert_eq!(glyph_for(digit), &DIGITS[usize::from(digit)]);
    }
}

#[test]
fn digit_glyphs_are_pairwise_distinct() {
    for (left, left_glyph) in DIGITS.iter().enumerate() {
        for right_glyph in DIGITS.iter().skip(left + 1) {
            assert_ne!(left_glyph, right_glyph);
        }
    }
}

#[test]
fn out_of_range_pixel_reads_as_unlit() {
    assert!(!glyph_for(8).is_lit(NUM_PIXELS));
}

#[test]
fn frame_lights_exactly_the_masked_pixels() {
    let color = Rgb::new(6, 214, 160);
    for digit in 0..=9_u8 {
        let glyph = glyph_for(digit);
        let frame = render_frame(glyph, color);

        // A full frame, every call.
        assert_eq!(frame.len(), NUM_PIXELS);
        for (index, pixel) in frame.iter().enumerate() {
            if glyph.is_lit(index) {
                assert_eq!(*pixel, color);
            } else {
                assert_eq!(*pixel, Rgb::new(0, 0, 0));
            }
        }
    }
}

#[test]
fn blank_glyph_renders_all_off() {
    let frame = render_frame(&Glyph::BLANK, Rgb::new(255, 255, 255));
    assert!(frame.iter().all(|pixel| *pixel == Rgb::new(0, 0, 0)));
}

#[test]
fn wire_word_is_grb_with_zero_padding_in_the_low_byte() {
    assert_eq!(pack_grb(Rgb::new(0x12, 0x34, 0x56)), 0x3412_5600);
    assert_eq!(pack_grb(Rgb::new(255, 0, 0)), 0x00FF_0000);
    assert_eq!(pack_grb(Rgb::new(0, 255, 0)), 0xFF00_0000);
    assert_eq!(pack_grb(Rgb::new(0, 0, 255)), 0x0000_FF00);
    assert_eq!(pack_grb(Rgb::new(0, 0, 0)), 0);
}

#[test]
fn glyph_rows_unpack_left_to_right() {
    // Bit 4 of each row byte is the leftmost column.
    let glyph = Glyph::from_rows([0b10000, 0, 0, 0, 0b00001]);
    assert!(glyph.is_lit(0));
    assert!(!glyph.is_lit(1));
    assert!(glyph.is_lit(NUM_PIXELS - 1));
    assert_eq!(glyph.lit_count(), 2);
}
