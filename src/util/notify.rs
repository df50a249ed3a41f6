//! Notification dispatch shared by every component.
//!
//! [`Notifier`] is provided through context by the app root. Each banner
//! gets its own removal timer; a banner closed by hand before its timer fires
//! makes the later removal a no-op.

use leptos::prelude::*;
use uuid::Uuid;

use crate::state::notifications::{NotificationKind, NotificationState};

/// Milliseconds since the Unix epoch (0 outside the browser).
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Handle for showing and dismissing notification banners.
#[derive(Clone, Copy)]
pub struct Notifier {
    notifications: RwSignal<NotificationState>,
    default_ms: u32,
}

impl Notifier {
    pub fn new(notifications: RwSignal<NotificationState>, default_ms: u32) -> Self {
        Self { notifications, default_ms }
    }

    pub fn state(&self) -> RwSignal<NotificationState> {
        self.notifications
    }

    /// Show a banner for the default duration.
    pub fn show(&self, kind: NotificationKind, message: impl Into<String>) -> Option<Uuid> {
        self.show_for(kind, message, self.default_ms)
    }

    /// Show a banner that removes itself after `duration_ms`.
    pub fn show_for(&self, kind: NotificationKind, message: impl Into<String>, duration_ms: u32) -> Option<Uuid> {
        let message = message.into();
        let (id, delay_ms) = self
            .notifications
            .try_update(|state| state.push(kind, message, duration_ms, now_ms()))?;

        #[cfg(feature = "hydrate")]
        {
            let notifications = self.notifications;
            gloo_timers::callback::Timeout::new(delay_ms, move || {
                notifications.try_update(|state| state.dismiss(id));
            })
            .forget();
        }

        #[cfg(not(feature = "hydrate"))]
        let _ = delay_ms;

        Some(id)
    }

    /// Remove a banner now (its close control).
    pub fn dismiss(&self, id: Uuid) {
        self.notifications.try_update(|state| state.dismiss(id));
    }
}

/// Fetch the app-wide notifier from context.
pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}
