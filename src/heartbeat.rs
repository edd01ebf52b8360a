//! Status-LED heartbeat: a fixed blink showing the firmware is alive.

use embassy_executor::Spawner;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Timer};

use crate::Result;

pub const HEARTBEAT_ON_DELAY: Duration = Duration::from_millis(50);
pub const HEARTBEAT_OFF_DELAY: Duration = Duration::from_millis(150);

/// Handle for the heartbeat task. Creating one starts the blink; there is
/// no way to stop it, matching a permanently running device.
pub struct Heartbeat(());

impl Heartbeat {
    /// Spawns the heartbeat task driving `led` at the fixed cadence
    /// (on 50 ms / off 150 ms).
    ///
    /// # Errors
    ///
    /// Returns a [`TaskSpawn`](crate::Error::TaskSpawn) error if the task
    /// cannot be spawned.
    pub fn spawn(led: Output<'static>, spawner: Spawner) -> Result<Self> {
        spawner.spawn(device_loop(led))?;
        Ok(Self(()))
    }
}

#[embassy_executor::task]
async fn device_loop(mut led: Output<'static>) -> ! {
    loop {
        led.set_high();
        Timer::after(HEARTBEAT_ON_DELAY).await;
        led.set_low();
        Timer::after(HEARTBEAT_OFF_DELAY).await;
    }
}
