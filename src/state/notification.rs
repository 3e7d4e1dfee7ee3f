//! Notification side-channel: transient toasts reporting action outcomes

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Visual intent of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Neutral or positive outcome
    Informational,
    /// Failure the visitor should act on
    Destructive,
}

/// A notification payload as produced by the contact workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationState {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl NotificationState {
    pub fn new(kind: NotificationKind, title: &str, description: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.kind == NotificationKind::Destructive
    }
}

/// Receiver of notifications. Fire-and-forget.
pub trait Notifier {
    fn notify(&mut self, notification: NotificationState);
}

/// A notification on screen, with the moment it appeared
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: NotificationState,
    pub shown_at: Instant,
    pub timestamp: DateTime<Local>,
}

impl Toast {
    fn new(notification: NotificationState) -> Self {
        Self {
            notification,
            shown_at: Instant::now(),
            timestamp: Local::now(),
        }
    }

    /// Check if the toast has outlived its display duration
    pub fn is_expired(&self, duration: Duration) -> bool {
        self.shown_at.elapsed() >= duration
    }
}

/// Queue of toasts; the newest one is displayed.
#[derive(Debug)]
pub struct NotificationCenter {
    toasts: VecDeque<Toast>,
    duration: Duration,
}

impl NotificationCenter {
    /// Only a handful are ever kept; older ones are dropped first
    const MAX_TOASTS: usize = 3;
    pub const DEFAULT_DURATION: Duration = Duration::from_secs(5);

    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            duration,
        }
    }

    /// Toast currently on screen
    pub fn current(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Dismiss the toast on screen
    pub fn dismiss(&mut self) {
        self.toasts.pop_back();
    }

    /// Drop toasts whose display time has passed
    pub fn prune_expired(&mut self) {
        let duration = self.duration;
        self.toasts.retain(|t| !t.is_expired(duration));
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION)
    }
}

impl Notifier for NotificationCenter {
    fn notify(&mut self, notification: NotificationState) {
        tracing::debug!(title = %notification.title, kind = ?notification.kind, "Showing notification");
        if self.toasts.len() == Self::MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast::new(notification));
    }
}
