//! A device abstraction for WS2812-style LED strips, CPU-fed over PIO.
//!
//! One PIO state machine clocks the 800 kHz WS2812 waveform; the CPU packs
//! each pixel into a GRB wire word and pushes it into the TX FIFO with a
//! blocking push, one word per pixel, in strip order. A frame is always
//! pushed whole: `N` words, then the reset latch delay.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::program::{Assembler, JmpCondition, OutDestination, SetDestination, SideSet};
use embassy_rp::pio::{
    Common, Config, FifoJoin, Instance, LoadedProgram, PioPin, ShiftConfig, ShiftDirection,
    StateMachine,
};
use embassy_time::{Duration, Timer};
use fixed::types::U24F8;
/// RGB color constants.
pub use smart_leds::colors;

use crate::pio_irqs::{Pio0Irqs, Pio1Irqs};
use crate::render::{pack_grb, Rgb};
use crate::Result;

/// Current budget for LED strips, specified in milliamps.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct Milliamps(pub u16);

// WS2812 bit timing in PIO cycles: T1 high, T2 data, T3 low.
const T1: u8 = 2;
const T2: u8 = 5;
const T3: u8 = 3;
const CYCLES_PER_BIT: u32 = T1 as u32 + T2 as u32 + T3 as u32;
const RESET_DELAY_US: u64 = 55;

#[expect(
    clippy::arithmetic_side_effects,
    reason = "Delay operands subtract 1 from nonzero timing constants."
)]
fn load_ws2812_program<'d, PIO: Instance>(common: &mut Common<'d, PIO>) -> LoadedProgram<'d, PIO> {
    let side_set = SideSet::new(false, 1, false);
    let mut assembler: Assembler<32> = Assembler::new_with_side_set(side_set);

    let mut wrap_target = assembler.label();
    let mut wrap_source = assembler.label();
    let mut do_zero = assembler.label();
    assembler.set_with_side_set(SetDestination::PINDIRS, 1, 0);
    assembler.bind(&mut wrap_target);
    assembler.out_with_delay_and_side_set(OutDestination::X, 1, T3 - 1, 0);
    assembler.jmp_with_delay_and_side_set(JmpCondition::XIsZero, &mut do_zero, T1 - 1, 1);
    assembler.jmp_with_delay_and_side_set(JmpCondition::Always, &mut wrap_target, T2 - 1, 1);
    assembler.bind(&mut do_zero);
    assembler.nop_with_delay_and_side_set(T2 - 1, 0);
    assembler.bind(&mut wrap_source);

    let program = assembler.assemble_with_wrap(wrap_source, wrap_target);
    common.load_program(&program)
}

#[inline]
#[expect(
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    clippy::integer_division_remainder_used,
    reason = "u8 values widened to u16 cannot overflow, and the quotient is back below 256."
)]
fn scale_brightness(value: u8, brightness: u8) -> u8 {
    ((u16::from(value) * u16::from(brightness)) / 255) as u8
}

#[expect(
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    clippy::integer_division_remainder_used,
    reason = "u16/u32 inputs widened to u64 cannot overflow, the divisor is nonzero by the \
    asserts, and the quotient is clamped to 255 before narrowing."
)]
fn max_brightness_for<const N: usize>(max_current: Milliamps) -> u8 {
    assert!(N > 0, "strip must contain at least one LED");
    assert!(max_current.0 > 0, "max_current must be positive");

    let led_count = u64::try_from(N).expect("strip length fits in u64");
    let numerator = u64::from(max_current.0) * 255;
    let denominator = led_count * 60; // 60mA per LED at full white.
    let brightness = numerator / denominator;

    if brightness >= 255 {
        255
    } else {
        brightness as u8
    }
}

/// Applies a brightness cap to an entire frame in place.
fn apply_max_brightness<const N: usize>(frame: &mut [Rgb; N], max_brightness: u8) {
    for color in frame.iter_mut() {
        *color = Rgb::new(
            scale_brightness(color.r, max_brightness),
            scale_brightness(color.g, max_brightness),
            scale_brightness(color.b, max_brightness),
        );
    }
}

/// Device abstraction for a single WS2812-style LED strip on PIO0 or PIO1.
///
/// # Example
/// ```no_run
/// # #![no_std]
/// # use panic_probe as _;
/// # fn main() {}
/// use digit_counter::{colors, LedStrip, Milliamps, Result};
///
/// async fn example(p: embassy_rp::Peripherals) -> Result<()> {
///     let mut strip: LedStrip<'static, embassy_rp::peripherals::PIO0, 8> =
///         LedStrip::new_pio0(p.PIO0, p.PIN_2, Milliamps(50)).await;
///
///     let mut frame = [colors::BLACK; 8];
///     frame[0] = colors::WHITE;
///     strip.update_pixels(&frame).await?;
///     Ok(())
/// }
/// ```
pub struct LedStrip<'d, PIO: Instance, const N: usize> {
    sm: StateMachine<'d, PIO, 0>,
    // Keeps the instruction memory allocated for the lifetime of the strip.
    _program: LoadedProgram<'d, PIO>,
    max_brightness: u8,
}

impl<'d, PIO: Instance, const N: usize> LedStrip<'d, PIO, N> {
    /// Number of LEDs in the strip.
    pub const LEN: usize = N;

    /// Configures the state machine and prepares it for writes.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        reason = "Fixed-point divider setup; clk_sys_freq is well above 1 kHz and the \
        bit frequency is a nonzero constant."
    )]
    fn new(
        mut common: Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, 0>,
        pin: embassy_rp::Peri<'d, impl PioPin>,
        max_current: Milliamps,
    ) -> Self {
        let program = load_ws2812_program(&mut common);

        let mut cfg = Config::default();
        let out_pin = common.make_pio_pin(pin);
        cfg.set_out_pins(&[&out_pin]);
        cfg.set_set_pins(&[&out_pin]);
        cfg.use_program(&program, &[&out_pin]);

        let clock_freq = U24F8::from_num(clk_sys_freq() / 1000);
        let ws2812_freq = U24F8::from_num(800);
        let bit_freq = ws2812_freq * CYCLES_PER_BIT;
        cfg.clock_divider = clock_freq / bit_freq;

        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 24,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_enable(true);

        Self {
            sm,
            _program: program,
            max_brightness: max_brightness_for::<N>(max_current),
        }
    }

    /// Update all pixels at once.
    ///
    /// Pushes exactly `N` GRB wire words in strip order, then waits out the
    /// WS2812 reset latch so the strip commits the frame.
    pub async fn update_pixels(&mut self, pixels: &[Rgb; N]) -> Result<()> {
        let mut frame = *pixels;
        apply_max_brightness(&mut frame, self.max_brightness);

        let tx = self.sm.tx();
        for color in frame {
            tx.wait_push(pack_grb(color)).await;
        }

        Timer::after(Duration::from_micros(RESET_DELAY_US)).await;
        Ok(())
    }
}

impl<const N: usize> LedStrip<'static, embassy_rp::peripherals::PIO0, N> {
    /// Builds a `LedStrip` on PIO0/SM0 and blanks it so the LEDs start dark.
    pub async fn new_pio0(
        pio: embassy_rp::Peri<'static, embassy_rp::peripherals::PIO0>,
        pin: embassy_rp::Peri<'static, impl PioPin>,
        max_current: Milliamps,
    ) -> Self {
        let embassy_rp::pio::Pio { common, sm0, .. } = embassy_rp::pio::Pio::new(pio, Pio0Irqs);
        let mut strip = Self::new(common, sm0, pin, max_current);
        let blank = [Rgb::new(0, 0, 0); N];
        strip.update_pixels(&blank).await.ok();
        strip
    }
}

impl<const N: usize> LedStrip<'static, embassy_rp::peripherals::PIO1, N> {
    /// Builds a `LedStrip` on PIO1/SM0 and blanks it so the LEDs start dark.
    pub async fn new_pio1(
        pio: embassy_rp::Peri<'static, embassy_rp::peripherals::PIO1>,
        pin: embassy_rp::Peri<'static, impl PioPin>,
        max_current: Milliamps,
    ) -> Self {
        let embassy_rp::pio::Pio { common, sm0, .. } = embassy_rp::pio::Pio::new(pio, Pio1Irqs);
        let mut strip = Self::new(common, sm0, pin, max_current);
        let blank = [Rgb::new(0, 0, 0); N];
        strip.update_pixels(&blank).await.ok();
        strip
    }
}
