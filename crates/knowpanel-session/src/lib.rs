//! Fetch and session controller
//!
//! Owns the selected product identifier, the active locale, the current
//! document and its expansion state. Every identifier or locale change
//! issues a new [`FetchTicket`]; only the most recently issued ticket may
//! apply its result, so an in-flight retrieval superseded by a newer
//! trigger has its eventual result dropped on arrival (last request
//! wins). The store and document are exclusively owned by the session,
//! mutated only by user actions and retrieval completion.

pub mod controller;

// Re-exports for convenience
pub use controller::{FetchTicket, SessionController, SessionState};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
