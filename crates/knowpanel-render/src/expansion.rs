//! Expansion state store
//!
//! A mapping from panel identifier to an "expanded" flag, owned by the
//! session and consulted by the renderer. A fresh document implies a
//! fresh map: [`ExpansionState::initialize`] replaces the whole map, so
//! entries never leak across documents.

use knowpanel_model::PanelId;
use std::collections::HashMap;

/// Per-panel expansion flags for the current document
///
/// Identifiers never explicitly set read as expanded, so a panel present
/// in the document but not yet initialized still renders open.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    expanded: HashMap<PanelId, bool>,
}

impl ExpansionState {
    /// Create an empty store (everything reads as expanded)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire map, setting every given identifier to expanded
    ///
    /// Called the instant a new document loads. Previous entries are
    /// discarded, never merged.
    pub fn initialize<I>(&mut self, panel_ids: I)
    where
        I: IntoIterator,
        I::Item: Into<PanelId>,
    {
        self.expanded = panel_ids.into_iter().map(|id| (id.into(), true)).collect();
    }

    /// Flip a single entry
    ///
    /// An absent identifier is treated as currently expanded, so the
    /// first toggle collapses it; subsequent toggles alternate normally.
    pub fn toggle(&mut self, panel_id: impl Into<PanelId>) {
        let flag = self.expanded.entry(panel_id.into()).or_insert(true);
        *flag = !*flag;
    }

    /// Whether a panel's body is currently rendered
    #[inline]
    #[must_use]
    pub fn is_expanded(&self, panel_id: &str) -> bool {
        self.expanded
            .get(panel_id)
            .copied()
            .unwrap_or(true)
    }

    /// Number of tracked identifiers
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Whether any identifiers are tracked
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
