//! Knowpanel data model
//!
//! Defines the panel graph fetched for a product:
//! - Panels addressed by identifier in a flat map
//! - Body elements as a closed tagged union (markup or panel reference)
//! - The top-level document with its optional product summary
//!
//! Panels reference each other by identifier only, so a document stays a
//! flat, serializable map. Reference resolution, cycle defense and
//! expansion state live in `knowpanel-render`.

pub mod document;
pub mod locale;
pub mod panel;

// Re-exports for convenience
pub use document::{KnowledgePanelDocument, PanelGraph, ProductSummary};
pub use locale::{Locale, UnsupportedLocale};
pub use panel::{Element, Panel, PanelId, TitleElement};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with knowledge panel documents
    pub use crate::{
        Element, KnowledgePanelDocument, Locale, Panel, PanelGraph, PanelId, ProductSummary,
        TitleElement,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
