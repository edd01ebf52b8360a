//! Debounce gate: decides whether a raw button edge is a real press or
//! mechanical contact bounce.
//!
//! Mechanical buttons "bounce": one physical press produces a burst of
//! electrical edges on the microsecond-to-millisecond scale, and a human
//! double-tap lands well inside a few hundred milliseconds. The gate keeps a
//! last-accepted timestamp per logical button and rejects any edge that
//! arrives within [`DEBOUNCE_THRESHOLD_MS`] of it. Timestamps come from a
//! monotonic clock, so `now_ms` is non-decreasing across calls.

/// Minimum spacing between accepted presses of the same button, in
/// milliseconds. Chosen empirically to suppress contact bounce and
/// accidental double-presses.
pub const DEBOUNCE_THRESHOLD_MS: u64 = 400;

/// The two logical buttons of the counter.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub enum ButtonId {
    /// Advances the digit (wraps 9 -> 0).
    Increment,
    /// Backs the digit up (wraps 0 -> 9).
    Decrement,
}

impl ButtonId {
    /// Number of logical buttons.
    pub const COUNT: usize = 2;

    const fn index(self) -> usize {
        match self {
            Self::Increment => 0,
            Self::Decrement => 1,
        }
    }
}

/// A timestamped raw button edge, as produced by the device layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub struct ButtonEvent {
    pub button: ButtonId,
    /// Monotonic milliseconds at which the edge fired.
    pub at_ms: u64,
}

/// Per-button bounce filter.
///
/// `None` means no press has been accepted on that button yet, so the first
/// press always passes, even at time zero.
#[derive(Clone, Debug, defmt::Format)]
pub struct DebounceGate {
    last_accepted: [Option<u64>; ButtonId::COUNT],
    threshold_ms: u64,
}

impl DebounceGate {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_threshold(DEBOUNCE_THRESHOLD_MS)
    }

    /// A gate with a custom threshold (milliseconds).
    #[must_use]
    pub const fn with_threshold(threshold_ms: u64) -> Self {
        Self {
            last_accepted: [None; ButtonId::COUNT],
            threshold_ms,
        }
    }

    /// Accepts or rejects an edge on `button` observed at `now_ms`.
    ///
    /// Rejection leaves the gate untouched; a rejected edge does not extend
    /// the suppression window. Each button is judged only against its own
    /// last-accepted timestamp, so one button never locks out the other.
    #[expect(
        clippy::indexing_slicing,
        reason = "ButtonId::index is below ButtonId::COUNT by construction."
    )]
    pub fn accept(&mut self, button: ButtonId, now_ms: u64) -> bool {
        let slot = &mut self.last_accepted[button.index()];
        match *slot {
            Some(last) if now_ms.saturating_sub(last) < self.threshold_ms => false,
            _ => {
                *slot = Some(now_ms);
                true
            }
        }
    }

    /// [`accept`](Self::accept) for an already-bundled event.
    pub fn accept_event(&mut self, event: ButtonEvent) -> bool {
        self.accept(event.button, event.at_ms)
    }

    /// Timestamp of the last accepted press on `button`, if any.
    #[expect(
        clippy::indexing_slicing,
        reason = "ButtonId::index is below ButtonId::COUNT by construction."
    )]
    #[must_use]
    pub fn last_accepted(&self, button: ButtonId) -> Option<u64> {
        self.last_accepted[button.index()]
    }
}

impl Default for DebounceGate {
    fn default() -> Self {
        Self::new()
    }
}
