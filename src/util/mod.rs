//! Utility helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers (`number`, `table_sort`, `task_gate`, `embedded`) run
//! anywhere; browser glue (`clipboard`, `download`, `file_read`, `dialogs`)
//! is real only in hydrate builds and degrades to errors or no-ops on the
//! server.

pub mod clipboard;
pub mod dialogs;
pub mod download;
pub mod embedded;
#[cfg(feature = "hydrate")]
pub mod file_read;
pub mod notify;
pub mod number;
pub mod table_sort;
pub mod task_gate;
