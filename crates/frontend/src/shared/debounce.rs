//! Trailing-edge debounce.
//!
//! Each call takes a ticket from a generation counter and waits; when the
//! timer fires the action only runs if no newer call took a ticket meanwhile.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebounceGate {
    latest: u64,
}

impl DebounceGate {
    /// Supersede every pending ticket
    pub fn ticket(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }

    /// Drop the pending ticket without issuing a usable one
    pub fn cancel(&mut self) {
        self.ticket();
    }
}

/// Debounced callback bound to a component's lifetime.
#[derive(Clone, Copy)]
pub struct Debouncer {
    gate: StoredValue<DebounceGate>,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            gate: StoredValue::new(DebounceGate::default()),
            delay_ms,
        }
    }

    /// Run `action` after the delay unless called again before it elapses.
    pub fn call(&self, action: impl FnOnce() + 'static) {
        let mut ticket = 0;
        self.gate.update_value(|g| ticket = g.ticket());
        let gate = self.gate;
        let delay = self.delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            // the owner may be gone by now
            if gate.try_with_value(|g| g.is_current(ticket)) == Some(true) {
                action();
            }
        });
    }

    pub fn cancel(&self) {
        self.gate.update_value(|g| g.cancel());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut gate = DebounceGate::default();
        let first = gate.ticket();
        let second = gate.ticket();
        let third = gate.ticket();
        assert!(!gate.is_current(first));
        assert!(!gate.is_current(second));
        assert!(gate.is_current(third));
    }

    #[test]
    fn test_cancel_invalidates_pending() {
        let mut gate = DebounceGate::default();
        let pending = gate.ticket();
        gate.cancel();
        assert!(!gate.is_current(pending));
    }
}
