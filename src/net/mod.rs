//! Networking and wire types.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the payload the host server embeds for hydration, and
//! `api` wraps the few HTTP calls the page makes (binary exports).

pub mod api;
pub mod types;
