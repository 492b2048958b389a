//! The top-level fetched artifact
//!
//! A [`KnowledgePanelDocument`] is replaced wholesale on each successful
//! fetch and discarded on error or while a new fetch is in flight, so
//! stale content is never shown under a new identifier.

use crate::panel::{Panel, PanelId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from panel identifier to panel
///
/// Conceptually a DAG rooted at [`PanelId::MAIN`]. Panel references
/// *should* resolve to a key in this map, but dangling references and
/// accidental cycles are tolerated by the renderer rather than rejected
/// here. Insertion order is preserved so expansion-state seeding and
/// serialization stay deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelGraph {
    panels: IndexMap<PanelId, Panel>,
}

impl PanelGraph {
    /// Create an empty graph
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a panel under an identifier
    pub fn insert(&mut self, id: impl Into<PanelId>, panel: Panel) {
        self.panels.insert(id.into(), panel);
    }

    /// Look up a panel by identifier
    #[inline]
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Panel> {
        self.panels.get(id)
    }

    /// Whether an identifier resolves in this graph
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.panels.contains_key(id)
    }

    /// All panel identifiers in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &PanelId> {
        self.panels.keys()
    }

    /// Iterate panels in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&PanelId, &Panel)> {
        self.panels.iter()
    }

    /// Number of panels
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether the graph holds no panels
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

impl FromIterator<(PanelId, Panel)> for PanelGraph {
    fn from_iter<T: IntoIterator<Item = (PanelId, Panel)>>(iter: T) -> Self {
        Self {
            panels: iter.into_iter().collect(),
        }
    }
}

/// Optional product summary attached to a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Display name
    pub name: String,
    /// Image reference
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ProductSummary {
    /// Create a product summary
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: None,
        }
    }

    /// With image reference
    #[inline]
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// The top-level fetched artifact: panel graph plus product summary
///
/// A response without a `panels` field does not deserialize; the fetch
/// boundary reports that as a malformed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgePanelDocument {
    /// The panel graph for this product
    pub panels: PanelGraph,
    /// Optional product summary
    #[serde(default)]
    pub product: Option<ProductSummary>,
}

impl KnowledgePanelDocument {
    /// Create a document from a panel graph
    #[inline]
    #[must_use]
    pub fn new(panels: PanelGraph) -> Self {
        Self {
            panels,
            product: None,
        }
    }

    /// With product summary
    #[inline]
    #[must_use]
    pub fn with_product(mut self, product: ProductSummary) -> Self {
        self.product = Some(product);
        self
    }

    /// All panel identifiers, used to seed expansion state
    pub fn panel_ids(&self) -> impl Iterator<Item = &PanelId> {
        self.panels.ids()
    }

    /// The designated root panel, if present
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<&Panel> {
        self.panels.get(PanelId::MAIN)
    }
}
