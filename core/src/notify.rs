//! Toast queue with message de-duplication.
//!
//! One [`ToastQueue`] exists per running application. The same message is
//! never shown twice at once: a second push while the first is visible is
//! dropped, and the text becomes available again once that toast is
//! dismissed.

use std::collections::HashSet;

/// How long a toast stays on screen.
pub const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Set of messages currently on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationDeduper {
    active: HashSet<String>,
}

impl NotificationDeduper {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if the message was not active and is now claimed.
    pub fn claim(&mut self, message: &str) -> bool {
        self.active.insert(message.to_string())
    }

    pub fn release(&mut self, message: &str) {
        self.active.remove(message);
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    deduper: NotificationDeduper,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the new toast id, or `None` when the message is already shown.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> Option<u64> {
        let message = message.into();
        if message.trim().is_empty() || !self.deduper.claim(&message) {
            return None;
        }
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message });
        Some(id)
    }

    pub fn dismiss(&mut self, id: u64) {
        if let Some(pos) = self.toasts.iter().position(|t| t.id == id) {
            let toast = self.toasts.remove(pos);
            self.deduper.release(&toast.message);
        }
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
        self.deduper.clear();
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deduper_claims_once() {
        let mut dedupe = NotificationDeduper::new();
        assert!(dedupe.claim("hola"));
        assert!(!dedupe.claim("hola"));
        dedupe.release("hola");
        assert!(dedupe.claim("hola"));
        dedupe.clear();
        assert!(dedupe.claim("hola"));
    }

    #[test]
    fn duplicate_message_is_dropped_while_visible() {
        let mut queue = ToastQueue::new();
        let first = queue.push(ToastKind::Error, "Sin conexión");
        assert_eq!(first, Some(1));
        assert_eq!(queue.push(ToastKind::Error, "Sin conexión"), None);
        assert_eq!(queue.toasts().len(), 1);

        queue.dismiss(1);
        assert!(queue.toasts().is_empty());
        assert_eq!(queue.push(ToastKind::Error, "Sin conexión"), Some(2));
    }

    #[test]
    fn distinct_messages_stack() {
        let mut queue = ToastQueue::new();
        queue.push(ToastKind::Success, "Guardado");
        queue.push(ToastKind::Info, "Cargando");
        let kinds: Vec<ToastKind> = queue.toasts().iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![ToastKind::Success, ToastKind::Info]);
    }

    #[test]
    fn blank_messages_ignored() {
        let mut queue = ToastQueue::new();
        assert_eq!(queue.push(ToastKind::Info, "  "), None);
    }

    #[test]
    fn clear_resets_dedupe() {
        let mut queue = ToastQueue::new();
        queue.push(ToastKind::Info, "a");
        queue.clear();
        assert!(queue.toasts().is_empty());
        assert!(queue.push(ToastKind::Info, "a").is_some());
    }

    #[test]
    fn dismissing_unknown_id_is_noop() {
        let mut queue = ToastQueue::new();
        queue.push(ToastKind::Info, "a");
        queue.dismiss(99);
        assert_eq!(queue.toasts().len(), 1);
    }
}
