//! Host-level tests for the debounce gate.

#![expect(
    clippy::arithmetic_side_effects,
    reason = "Test arithmetic on small constants cannot overflow."
)]

use digit_counter::{ButtonEvent, ButtonId, DebounceGate, DEBOUNCE_THRESHOLD_MS};

#[test]
fn first_press_is_accepted_even_at_time_zero() {
    let mut gate = DebounceGate::new();
    assert!(gate.accept(ButtonId::Increment, 0));
    assert_eq!(gate.last_accepted(ButtonId::Increment), Some(0));
}

#[test]
fn press_inside_window_is_rejected_and_leaves_state_untouched() {
    let mut gate = DebounceGate::new();
    assert!(gate.accept(ButtonId::Increment, 1_000));
    assert!(!gate.accept(ButtonId::Increment, 1_000 + DEBOUNCE_THRESHOLD_MS - 1));
    // The rejection must not move the timestamp.
    assert_eq!(gate.last_accepted(ButtonId::Increment), Some(1_000));
}

#[test]
fn presses_exactly_threshold_apart_are_both_accepted() {
    let mut gate = DebounceGate::new();
    assert!(gate.accept(ButtonId::Decrement, 500));
    assert!(gate.accept(ButtonId::Decrement, 500 + DEBOUNCE_THRESHOLD_MS));
}

#[test]
fn rejected_press_does_not_extend_the_window() {
    let mut gate = DebounceGate::new();
    assert!(gate.accept(ButtonId::Increment, 0));
    assert!(!gate.accept(ButtonId::Increment, 399));
    // 450 is within 400ms of the rejected edge but not of the accepted one.
    assert!(gate.accept(ButtonId::Increment, 450));
}

#[test]
fn buttons_debounce_independently() {
    let mut gate = DebounceGate::new();
    assert!(gate.accept(ButtonId::Increment, 100));
    // The other button has its own timestamp; no cross-button lockout.
    assert!(gate.accept(ButtonId::Decrement, 150));
    // Each button is still locked out against itself.
    assert!(!gate.accept(ButtonId::Increment, 200));
    assert!(!gate.accept(ButtonId::Decrement, 250));
}

#[test]
fn accept_event_matches_accept() {
    let mut by_parts = DebounceGate::new();
    let mut by_event = DebounceGate::new();

    for (button, at_ms) in [
        (ButtonId::Increment, 0),
        (ButtonId::Increment, 100),
        (ButtonId::Decrement, 120),
        (ButtonId::Increment, 600),
        (ButtonId::Decrement, 700),
    ] {
        assert_eq!(
            by_parts.accept(button, at_ms),
            by_event.accept_event(ButtonEvent { button, at_ms })
        );
    }
}

#[test]
fn custom_threshold_is_honored() {
    let mut gate = DebounceGate::with_threshold(10);
    assert!(gate.accept(ButtonId::Increment, 0));
    assert!(!gate.accept(ButtonId::Increment, 9));
    assert!(gate.accept(ButtonId::Increment, 10));
}
