//! Recursive panel tree renderer
//!
//! Walks the panel graph from a root identifier and produces a nested,
//! order-preserving tree mirroring the traversed subgraph. Each node
//! carries its panel identifier (so a toggle affordance can address the
//! right expansion entry) and its nesting depth (presentation only).
//!
//! The traversal threads the set of identifiers on the current path
//! through the recursion. A reference to an identifier already on the
//! path is treated as unresolved, which bounds the walk to the graph's
//! simple-path length even when the nominally acyclic graph contains an
//! accidental cycle.

use crate::expansion::ExpansionState;
use knowpanel_model::{Element, KnowledgePanelDocument, PanelGraph, PanelId, ProductSummary};
use serde::Serialize;

/// A rendered panel node: header plus (if expanded) its body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPanel {
    /// Identifier the toggle affordance addresses
    pub panel_id: PanelId,
    /// Display title
    pub title: String,
    /// Optional subtitle
    pub subtitle: Option<String>,
    /// Optional icon reference
    pub icon_url: Option<String>,
    /// Severity/grade classifier carried through for presentation
    pub grade: String,
    /// State of the toggle affordance
    pub expanded: bool,
    /// Nesting depth, zero at the root (presentation only)
    pub depth: usize,
    /// Body in element order, empty when collapsed
    pub body: Vec<RenderedElement>,
}

impl RenderedPanel {
    /// Number of panel nodes in this subtree, this one included
    #[must_use]
    pub fn panel_count(&self) -> usize {
        1 + self
            .body
            .iter()
            .map(|element| match element {
                RenderedElement::Nested(panel) => panel.panel_count(),
                RenderedElement::Content { .. } => 0,
            })
            .sum::<usize>()
    }

    /// First rendered occurrence of a panel identifier in this subtree
    #[must_use]
    pub fn find(&self, panel_id: &str) -> Option<&RenderedPanel> {
        if self.panel_id.as_str() == panel_id {
            return Some(self);
        }
        self.body.iter().find_map(|element| match element {
            RenderedElement::Nested(panel) => panel.find(panel_id),
            RenderedElement::Content { .. } => None,
        })
    }
}

/// One rendered unit of a panel's body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderedElement {
    /// Self-contained content block of trusted markup
    Content {
        /// The markup fragment, verbatim from the document
        html: String,
    },
    /// A nested panel rendering
    Nested(RenderedPanel),
}

/// A rendered document: product summary plus the tree from `main`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedDocument {
    /// Product summary, attached exactly once regardless of graph shape
    pub product: Option<ProductSummary>,
    /// Rendered tree rooted at [`PanelId::MAIN`], absent when the
    /// document has no root panel
    pub root: Option<RenderedPanel>,
}

impl RenderedDocument {
    /// Number of panel nodes rendered
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.root.as_ref().map_or(0, RenderedPanel::panel_count)
    }
}

/// Render the panel tree rooted at `root_id`
///
/// Returns `None` when the identifier does not resolve; that is how
/// dangling references degrade. The header of a resolved panel is always
/// rendered; a collapsed panel gets an empty body and its descendants
/// are not visited at all, so collapsing also collapses rendering cost.
#[must_use]
pub fn render(
    root_id: &str,
    graph: &PanelGraph,
    expansion: &ExpansionState,
) -> Option<RenderedPanel> {
    let mut path = Vec::new();
    render_at(root_id, graph, expansion, 0, &mut path)
}

/// Render a whole document from its designated root
///
/// The product summary is carried over exactly once, independent of the
/// panel graph shape.
#[must_use]
pub fn render_document(
    document: &KnowledgePanelDocument,
    expansion: &ExpansionState,
) -> RenderedDocument {
    RenderedDocument {
        product: document.product.clone(),
        root: render(PanelId::MAIN, &document.panels, expansion),
    }
}

fn render_at(
    panel_id: &str,
    graph: &PanelGraph,
    expansion: &ExpansionState,
    depth: usize,
    path: &mut Vec<PanelId>,
) -> Option<RenderedPanel> {
    let Some(panel) = graph.get(panel_id) else {
        tracing::debug!(panel_id, "dangling panel reference, rendering nothing");
        return None;
    };

    let expanded = expansion.is_expanded(panel_id);
    let mut body = Vec::new();

    if expanded {
        path.push(PanelId::new(panel_id));
        for element in &panel.elements {
            match element {
                Element::Text { html } => {
                    body.push(RenderedElement::Content { html: html.clone() });
                }
                Element::PanelRef { panel_id: child } => {
                    if path.iter().any(|seen| seen == child) {
                        tracing::warn!(
                            panel_id = child.as_str(),
                            "cycle in panel graph, skipping repeated panel"
                        );
                        continue;
                    }
                    if let Some(nested) =
                        render_at(child.as_str(), graph, expansion, depth + 1, path)
                    {
                        body.push(RenderedElement::Nested(nested));
                    }
                }
            }
        }
        path.pop();
    }

    let title = &panel.title_element;
    Some(RenderedPanel {
        panel_id: PanelId::new(panel_id),
        title: title.title.clone(),
        subtitle: title.subtitle.clone(),
        icon_url: title.icon_url.clone(),
        grade: title.grade.clone(),
        expanded,
        depth,
        body,
    })
}
