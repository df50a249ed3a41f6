//! Flash-message lifecycle.
//!
//! Messages rendered with the page share one timeline: fully visible for the
//! configured delay, then an opacity fade, then removal. Only messages present
//! when the page loads are tracked; later alerts go through
//! [`crate::state::notifications`].

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use crate::net::types::FlashMessage;
use crate::state::notifications::NotificationKind;

/// Where the shared flash timeline currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum FlashPhase {
    #[default]
    Visible,
    Fading,
    Gone,
}

impl FlashPhase {
    /// Phase reached `elapsed_ms` after page load.
    #[must_use]
    pub fn at(elapsed_ms: u32, visible_ms: u32, fade_ms: u32) -> Self {
        if elapsed_ms < visible_ms {
            Self::Visible
        } else if elapsed_ms < visible_ms.saturating_add(fade_ms) {
            Self::Fading
        } else {
            Self::Gone
        }
    }
}

/// One server-rendered flash alert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashEntry {
    pub id: usize,
    pub message: FlashMessage,
}

impl FlashEntry {
    /// Class list for the alert, normalising the server category
    /// (`danger` renders as `alert-error`, unknown names as `alert-info`).
    #[must_use]
    pub fn alert_class(&self) -> String {
        NotificationKind::from_category(&self.message.category).alert_class()
    }
}

/// All flash alerts captured at load plus the shared fade phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlashState {
    pub entries: Vec<FlashEntry>,
    pub phase: FlashPhase,
}

impl FlashState {
    #[must_use]
    pub fn from_messages(messages: Vec<FlashMessage>) -> Self {
        let entries = messages
            .into_iter()
            .enumerate()
            .map(|(id, message)| FlashEntry { id, message })
            .collect();
        Self { entries, phase: FlashPhase::Visible }
    }

    /// Move the timeline forward; it never moves back.
    pub fn advance(&mut self, elapsed_ms: u32, visible_ms: u32, fade_ms: u32) {
        let next = FlashPhase::at(elapsed_ms, visible_ms, fade_ms);
        if next > self.phase {
            self.phase = next;
        }
        if self.phase == FlashPhase::Gone {
            self.entries.clear();
        }
    }

    /// Remove one alert immediately (its close control). Returns whether it existed.
    pub fn dismiss(&mut self, id: usize) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inline style for every alert in the current phase.
    #[must_use]
    pub fn alert_style(&self, fade_ms: u32) -> String {
        match self.phase {
            FlashPhase::Visible => String::new(),
            FlashPhase::Fading | FlashPhase::Gone => {
                format!("transition: opacity {}s ease; opacity: 0", f64::from(fade_ms) / 1000.0)
            }
        }
    }
}
