//! Toast queue for submit confirmations.
//!
//! Toasts are appended newest-last and removed either by the user or by a
//! browser timer started when they are pushed (see `components::toaster`).

use forms::Notification;

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

/// How long a toast stays up without interaction.
pub const TOAST_DURATION_MS: u32 = 5_000;

/// At most this many toasts are visible; older ones are dropped first.
pub const TOAST_LIMIT: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast for `notification` and return its id.
    pub fn push(&mut self, notification: &Notification) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, title: notification.title.clone(), description: notification.description.clone() });
        if self.toasts.len() > TOAST_LIMIT {
            let overflow = self.toasts.len() - TOAST_LIMIT;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove toast `id`. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }
}
