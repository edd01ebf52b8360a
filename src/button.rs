//! Push-button inputs and the event channel feeding the counter loop.
//!
//! Buttons are wired active-low with pull-ups, so a press is a falling
//! edge. Each button gets its own task that timestamps every raw edge and
//! forwards it to the event loop; debouncing happens there, in
//! [`DebounceGate`](crate::DebounceGate), so the raw edge stream stays
//! observable. The bounded channel preserves arrival order, which is what
//! makes "whichever press is serviced first wins" hold without any shared
//! mutable state.

use defmt::info;
use embassy_rp::gpio::Input;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::Instant;

use crate::debounce::{ButtonEvent, ButtonId};

/// Channel depth for raw button edges. Deeper than any press burst a human
/// can produce inside one debounce window.
pub const BUTTON_EVENT_DEPTH: usize = 8;

/// Channel carrying raw edges from the button tasks to the event loop.
pub type ButtonChannel = Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_EVENT_DEPTH>;
pub type ButtonSender = Sender<'static, CriticalSectionRawMutex, ButtonEvent, BUTTON_EVENT_DEPTH>;
pub type ButtonReceiver =
    Receiver<'static, CriticalSectionRawMutex, ButtonEvent, BUTTON_EVENT_DEPTH>;

/// One physical push-button bound to a logical [`ButtonId`].
pub struct Button {
    inner: Input<'static>,
    id: ButtonId,
}

impl Button {
    #[must_use]
    pub fn new(inner: Input<'static>, id: ButtonId) -> Self {
        Self { inner, id }
    }

    /// Waits for the next falling edge and timestamps it with the
    /// monotonic clock.
    pub async fn wait_for_press(&mut self) -> ButtonEvent {
        self.inner.wait_for_falling_edge().await;
        ButtonEvent {
            button: self.id,
            at_ms: Instant::now().as_millis(),
        }
    }
}

/// Forwards every raw edge of one button into the shared channel, forever.
// pool_size 2: one task per physical button.
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut button: Button, sender: ButtonSender) -> ! {
    loop {
        let event = button.wait_for_press().await;
        info!("edge: {:?} at {} ms", event.button, event.at_ms);
        // A full channel means a bounce burst; the gate would reject the
        // excess edges anyway, so dropping them here is equivalent.
        let _ = sender.try_send(event);
    }
}
