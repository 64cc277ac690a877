//! Transient notifications

use std::time::{Duration, Instant};

use shared::i18n::Notice;

use crate::schedule::{take_due, Scheduled};

/// How long a toast stays visible
pub const TOAST_DURATION: Duration = Duration::from_millis(2200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: Notice,
    pub kind: ToastKind,
}

/// Holds at most one toast; a new one replaces the current one and restarts the timer
#[derive(Debug, Clone, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
    hide: Option<Scheduled<()>>,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<Notice>, kind: ToastKind, now: Instant) {
        self.current = Some(Toast {
            message: message.into(),
            kind,
        });
        self.hide = Some(Scheduled::after(now, TOAST_DURATION, ()));
    }

    pub fn success(&mut self, message: impl Into<Notice>, now: Instant) {
        self.show(message, ToastKind::Success, now);
    }

    pub fn error(&mut self, message: impl Into<Notice>, now: Instant) {
        self.show(message, ToastKind::Error, now);
    }

    /// Hide the toast once its time is up; returns true when it was hidden
    pub fn poll(&mut self, now: Instant) -> bool {
        if take_due(&mut self.hide, now).is_some() {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.hide = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::i18n::StatusKey;

    #[test]
    fn test_toast_auto_dismisses() {
        let t0 = Instant::now();
        let mut slot = ToastSlot::new();
        slot.success(StatusKey::HomeAdded, t0);

        assert!(!slot.poll(t0 + Duration::from_millis(2000)));
        assert_eq!(slot.current().map(|t| t.kind), Some(ToastKind::Success));
        assert!(slot.poll(t0 + TOAST_DURATION));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_new_toast_restarts_timer() {
        let t0 = Instant::now();
        let mut slot = ToastSlot::new();
        slot.success(StatusKey::HomeAdded, t0);
        slot.error(Notice::Text("Out of stock".into()), t0 + Duration::from_millis(2000));

        assert!(!slot.poll(t0 + TOAST_DURATION));
        let toast = slot.current().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, Notice::Text("Out of stock".into()));
    }
}
