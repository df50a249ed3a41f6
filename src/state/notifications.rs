//! Transient notification banners.
//!
//! Each banner carries its own creation time and lifetime. Banners are not
//! deduplicated and share one fixed screen position, so bursts overlap.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use uuid::Uuid;

/// Visual category of a notification, mapped onto the `alert-*` classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Parse a category name; unknown names fall back to `Info`.
    #[must_use]
    pub fn from_category(category: &str) -> Self {
        match category {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" | "danger" => Self::Error,
            _ => Self::Info,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Class list for the banner element.
    #[must_use]
    pub fn alert_class(self) -> String {
        format!("alert alert-{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at_ms: f64,
    pub duration_ms: u32,
}

impl Notification {
    /// Milliseconds left before the banner's lifetime elapses at `now_ms`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn remaining_ms(&self, now_ms: f64) -> u32 {
        let left = f64::from(self.duration_ms) - (now_ms - self.created_at_ms);
        left.clamp(0.0, f64::from(self.duration_ms)).ceil() as u32
    }
}

/// Banners currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    pub items: Vec<Notification>,
}

impl NotificationState {
    /// Show a new banner. Returns its id and the delay after which its
    /// removal timer must fire.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>, duration_ms: u32, now_ms: f64) -> (Uuid, u32) {
        let id = Uuid::new_v4();
        let item = Notification { id, kind, message: message.into(), created_at_ms: now_ms, duration_ms };
        let delay = item.remaining_ms(now_ms);
        self.items.push(item);
        (id, delay)
    }

    /// Remove a banner by id (close control or its own timer). Removing an
    /// id that is already gone is a no-op.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }
}
