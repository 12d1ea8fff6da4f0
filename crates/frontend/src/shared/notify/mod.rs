//! Toast notifications.
//!
//! `NotificationService` is provided once at the application root and
//! rendered by `Toaster`. Pages push notifications into it and never own
//! them, so a toast survives the page that raised it.

mod toaster;

pub use toaster::Toaster;

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

/// Label of the action that dismisses a toast
pub const CLOSE_LABEL: &str = "Close";

#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
    timeout_ms: u32,
}

impl NotificationService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
            timeout_ms,
        }
    }

    /// Delay after which `Toaster` dismisses a toast on its own
    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    pub fn items(&self) -> Vec<Notification> {
        self.items.get()
    }

    pub fn len(&self) -> usize {
        self.items.with(|items| items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Push a toast; returns its id, or `None` if the service is already disposed
    pub fn push(
        &self,
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Option<u64> {
        let id = self.next_id.try_update(|next| {
            let id = *next;
            *next += 1;
            id
        })?;

        let notification = Notification {
            id,
            kind,
            title: title.into(),
            description: description.into(),
        };
        self.items.try_update(|items| items.push(notification))?;
        Some(id)
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) -> Option<u64> {
        self.push(NotificationKind::Success, title, description)
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) -> Option<u64> {
        self.push(NotificationKind::Error, title, description)
    }

    pub fn dismiss(&self, id: u64) {
        self.items.try_update(|items| items.retain(|n| n.id != id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let owner = Owner::new();
        owner.with(|| {
            let svc = NotificationService::new(5_000);
            let a = svc.success("Saved", "first").unwrap();
            let b = svc.error("Failed", "second").unwrap();
            assert!(b > a);

            let items = svc.items();
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].kind, NotificationKind::Success);
            assert_eq!(items[1].kind, NotificationKind::Error);
            assert_eq!(items[1].description, "second");
        });
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let owner = Owner::new();
        owner.with(|| {
            let svc = NotificationService::new(5_000);
            let a = svc.success("one", "").unwrap();
            let b = svc.success("two", "").unwrap();

            svc.dismiss(a);
            let items = svc.items();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].id, b);

            svc.dismiss(a);
            assert_eq!(svc.len(), 1);
        });
    }

    #[test]
    fn dismissing_every_toast_empties_the_stack() {
        let owner = Owner::new();
        owner.with(|| {
            let svc = NotificationService::new(5_000);
            let ids = [svc.error("x", "y").unwrap(), svc.error("x", "y").unwrap()];
            for id in ids {
                svc.dismiss(id);
            }
            assert!(svc.is_empty());
        });
    }
}
