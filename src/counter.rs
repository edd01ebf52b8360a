//! The counter state machine: current digit, display buffer, redraw flag.

use crate::debounce::{ButtonEvent, ButtonId, DebounceGate};
use crate::glyphs::{glyph_for, Glyph};

/// Displayed-digit state.
///
/// This struct replaces what a bare-metal C version would keep in globals:
/// the digit, the active pixel buffer, and the "needs redraw" flag. The
/// buffer is overwritten wholesale on every digit change, never patched,
/// and is read-only to the renderer.
#[derive(Clone, Debug, defmt::Format)]
pub struct DigitCounter {
    digit: u8,
    buffer: Glyph,
    needs_redraw: bool,
}

impl DigitCounter {
    /// Starts at digit 0 with a redraw pending, so the first pass of the
    /// event loop paints the startup frame.
    #[must_use]
    pub fn new() -> Self {
        Self {
            digit: 0,
            buffer: *glyph_for(0),
            needs_redraw: true,
        }
    }

    /// Applies an accepted button press and returns the new digit.
    ///
    /// Increment and decrement are modular: 9 + 1 wraps to 0 and 0 - 1
    /// wraps to 9. Wraparound is defined behavior, not an error. The
    /// display buffer is replaced with the new digit's glyph and the
    /// redraw flag is set.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        reason = "digit stays in 0..=9, so digit + 9 is at most 18 and (..) % 10 is in 0..=9."
    )]
    pub fn apply(&mut self, button: ButtonId) -> u8 {
        self.digit = match button {
            ButtonId::Increment => (self.digit + 1) % 10,
            ButtonId::Decrement => (self.digit + 9) % 10,
        };
        self.buffer = *glyph_for(self.digit);
        self.needs_redraw = true;
        self.digit
    }

    /// Runs one raw edge through the debounce gate; applies it if accepted.
    ///
    /// Returns the new digit for an accepted press, `None` for bounce noise.
    pub fn press(&mut self, gate: &mut DebounceGate, event: ButtonEvent) -> Option<u8> {
        gate.accept_event(event).then(|| self.apply(event.button))
    }

    /// The current digit, always in `0..=9`.
    #[must_use]
    pub const fn digit(&self) -> u8 {
        self.digit
    }

    /// The active display buffer (the current digit's glyph).
    #[must_use]
    pub const fn buffer(&self) -> &Glyph {
        &self.buffer
    }

    /// Observes and clears the redraw flag.
    ///
    /// The event loop calls this once per iteration and pushes a frame to
    /// the hardware when it returns `true`. Exactly one redraw is produced
    /// per accepted button event (plus the initial one).
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.needs_redraw)
    }
}

impl Default for DigitCounter {
    fn default() -> Self {
        Self::new()
    }
}
