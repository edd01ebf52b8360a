//! Single-digit counter on a 5x5 WS2812 matrix (BitDogLab wiring).
//!
//! Button A (GPIO5) increments the displayed digit, button B (GPIO6)
//! decrements it, both with 400 ms debouncing and 0-9 wraparound. The
//! matrix hangs off GPIO7 via PIO0 and the red status LED on GPIO13
//! blinks a heartbeat.
#![no_std]
#![no_main]

use core::convert::Infallible;

use defmt::info;
use defmt_rtt as _;
use digit_counter::{
    button_task, render_frame, Button, ButtonChannel, ButtonId, DebounceGate, DigitCounter,
    Heartbeat, LedStrip, Milliamps, Result, Rgb, NUM_PIXELS,
};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use panic_probe as _;

type Matrix = LedStrip<'static, embassy_rp::peripherals::PIO0, NUM_PIXELS>;

/// Fixed display color for lit pixels.
const DIGIT_COLOR: Rgb = Rgb::new(6, 214, 160);
/// Current budget for the 25-LED matrix (USB-friendly).
const MAX_CURRENT: Milliamps = Milliamps(150);

static BUTTON_EVENTS: ButtonChannel = ButtonChannel::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    core::panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let _heartbeat = Heartbeat::spawn(Output::new(p.PIN_13, Level::Low), spawner)?;

    let increment = Button::new(Input::new(p.PIN_5, Pull::Up), ButtonId::Increment);
    let decrement = Button::new(Input::new(p.PIN_6, Pull::Up), ButtonId::Decrement);
    spawner.spawn(button_task(increment, BUTTON_EVENTS.sender()))?;
    spawner.spawn(button_task(decrement, BUTTON_EVENTS.sender()))?;

    let mut matrix = Matrix::new_pio0(p.PIO0, p.PIN_7, MAX_CURRENT).await;

    let mut gate = DebounceGate::new();
    let mut counter = DigitCounter::new();
    let receiver = BUTTON_EVENTS.receiver();

    info!("digit counter ready, showing {}", counter.digit());
    loop {
        // The redraw flag starts set, so this paints digit 0 before the
        // first button event.
        if counter.take_redraw() {
            let frame = render_frame(counter.buffer(), DIGIT_COLOR);
            matrix.update_pixels(&frame).await?;
        }

        let event = receiver.receive().await;
        if let Some(digit) = counter.press(&mut gate, event) {
            info!("accepted {:?}, digit now {}", event.button, digit);
        }
    }
}
