//! Deferred UI transitions
//!
//! Controllers never sleep. A delayed transition (close a dialog, navigate,
//! hide a toast) is stored as a [`Scheduled`] value and applied when the
//! owner's `poll(now)` observes that its deadline has passed.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled<T> {
    due: Instant,
    value: T,
}

impl<T> Scheduled<T> {
    pub fn after(now: Instant, delay: Duration, value: T) -> Self {
        Self {
            due: now + delay,
            value,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

/// Take the pending value out of `slot` once it is due
pub fn take_due<T>(slot: &mut Option<Scheduled<T>>, now: Instant) -> Option<T> {
    match slot {
        Some(pending) if pending.is_due(now) => slot.take().map(|p| p.value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_due_waits_for_deadline() {
        let t0 = Instant::now();
        let mut slot = Some(Scheduled::after(t0, Duration::from_millis(800), "login"));

        assert_eq!(take_due(&mut slot, t0 + Duration::from_millis(799)), None);
        assert!(slot.is_some());
        assert_eq!(take_due(&mut slot, t0 + Duration::from_millis(800)), Some("login"));
        assert!(slot.is_none());
        assert_eq!(take_due(&mut slot, t0 + Duration::from_secs(5)), None);
    }
}
