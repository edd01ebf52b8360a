//! Building blocks for a 5x5 LED-matrix digit counter.
//!
//! Two push-buttons increment and decrement a single displayed digit (0-9,
//! with wraparound) on a WS2812 5x5 matrix, while a status LED blinks a
//! heartbeat. The counting core ([`DebounceGate`], [`DigitCounter`], the
//! glyph table, and the frame renderer) is hardware-free and tested on the
//! host; the device layer (buttons, strip driver, heartbeat) runs on an
//! RP2040 under Embassy. See `demos/digit_counter.rs` for the full firmware.
#![no_std]

mod counter;
mod debounce;
mod error;
mod glyphs;
mod render;

#[cfg(not(feature = "host"))]
mod button;
#[cfg(not(feature = "host"))]
mod heartbeat;
#[cfg(not(feature = "host"))]
mod led_strip;
#[cfg(not(feature = "host"))]
mod pio_irqs;

// Re-export commonly used items
pub use counter::DigitCounter;
pub use debounce::{ButtonEvent, ButtonId, DebounceGate, DEBOUNCE_THRESHOLD_MS};
pub use error::{Error, Result};
pub use glyphs::{glyph_for, Glyph, DIGITS, GRID_SIDE, NUM_PIXELS};
pub use render::{pack_grb, render_frame, Rgb};

#[cfg(not(feature = "host"))]
pub use button::{button_task, Button, ButtonChannel, ButtonReceiver, ButtonSender};
#[cfg(not(feature = "host"))]
pub use heartbeat::{Heartbeat, HEARTBEAT_OFF_DELAY, HEARTBEAT_ON_DELAY};
#[cfg(not(feature = "host"))]
pub use led_strip::{colors, LedStrip, Milliamps};
