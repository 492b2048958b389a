//! Retrieval boundary for knowledge panel documents
//!
//! Treats the remote API as an opaque fetch operation: a request keyed by
//! `(barcode, locale)` either yields a parsed
//! [`KnowledgePanelDocument`](knowpanel_model::KnowledgePanelDocument)
//! or one of three error kinds, all recovered at the session boundary.
//! The [`PanelFetcher`] trait is the seam the session controller is
//! generic over; [`HttpPanelFetcher`] is the production implementation.

pub mod error;
pub mod fetcher;

// Re-exports for convenience
pub use error::FetchError;
pub use fetcher::{FetcherConfig, HttpPanelFetcher, PanelFetcher};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
