#![allow(dead_code)]

//! Transient notification queue — the in-process rendition of the toast
//! stack. Entries auto-dismiss after their lifetime; display is out of scope.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Default notification lifetime before auto-dismissal.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: Severity,
}

/// Shared notification queue. Cheap to clone; all clones see the same entries.
#[derive(Clone, Default)]
pub struct Notifier {
    inner: Arc<NotifierInner>,
}

#[derive(Default)]
struct NotifierInner {
    next_id: AtomicU64,
    entries: Mutex<Vec<Notification>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification and returns its id.
    /// With a lifetime set, a timer removes the entry once it elapses.
    pub fn push(&self, message: impl Into<String>, kind: Severity, ttl: Option<Duration>) -> u64 {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let notification = Notification {
            id,
            message: message.into(),
            kind,
        };

        self.inner
            .entries
            .lock()
            .expect("notification queue poisoned")
            .push(notification);

        if let Some(ttl) = ttl {
            let notifier = self.clone();
            tokio::spawn(async move {
                tokio::time::sleep(ttl).await;
                notifier.dismiss(id);
            });
        }

        id
    }

    /// Removes an entry. Unknown ids are a no-op (it may have auto-dismissed).
    pub fn dismiss(&self, id: u64) {
        self.inner
            .entries
            .lock()
            .expect("notification queue poisoned")
            .retain(|n| n.id != id);
    }

    /// Live entries in insertion order.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.inner
            .entries
            .lock()
            .expect("notification queue poisoned")
            .clone()
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(message, Severity::Success, Some(DEFAULT_TTL))
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(message, Severity::Error, Some(DEFAULT_TTL))
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.push(message, Severity::Warning, Some(DEFAULT_TTL))
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(message, Severity::Info, Some(DEFAULT_TTL))
    }
}
