//! Knowpanel rendering engine
//!
//! Turns a flat panel graph into a nested, order-preserving tree:
//! - [`ExpansionState`] tracks which panels are currently open
//! - [`render`] walks the graph from a root identifier, cycle-safe and
//!   tolerant of dangling references
//! - [`render_document`] wraps a whole document, attaching the product
//!   summary exactly once
//!
//! Nothing in this crate can fail outward. Missing panels, dangling
//! references and cycles all degrade to omitted content, because a
//! partially complete document is more useful than a blank failure
//! screen. The renderer is a pure function of `(root, graph, expansion)`.

pub mod expansion;
pub mod tree;

// Re-exports for convenience
pub use expansion::ExpansionState;
pub use tree::{render, render_document, RenderedDocument, RenderedElement, RenderedPanel};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
