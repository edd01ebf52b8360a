//! Minimal heartbeat demo: blinks the BitDogLab red status LED (GPIO13)
//! at the firmware's fixed cadence. Useful as a board bring-up smoke test.
#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use digit_counter::{HEARTBEAT_OFF_DELAY, HEARTBEAT_ON_DELAY};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::Timer;
use panic_probe as _;

#[embassy_executor::main]
pub async fn main(_spawner: Spawner) -> ! {
    let p = embassy_rp::init(Default::default());

    let mut led = Output::new(p.PIN_13, Level::Low);

    info!("heartbeat demo starting");
    loop {
        led.set_high();
        Timer::after(HEARTBEAT_ON_DELAY).await;
        led.set_low();
        Timer::after(HEARTBEAT_OFF_DELAY).await;
    }
}
