//! Component state for the page behaviours.
//!
//! DESIGN
//! ======
//! Each behaviour keeps its presentation state in a small plain-Rust model
//! (`nav`, `flash`, `form`, `table`, `notifications`). Components hold these
//! in signals and render from them, so every state transition can be
//! exercised without a browser.

pub mod flash;
pub mod form;
pub mod nav;
pub mod notifications;
pub mod table;
