//! Testing utilities for the knowpanel workspace
//!
//! Shared graph fixtures and a scripted fetcher double.

#![allow(missing_docs)]

use async_trait::async_trait;
use knowpanel_client::{FetchError, PanelFetcher};
use knowpanel_model::{
    Element, KnowledgePanelDocument, Locale, Panel, PanelGraph, ProductSummary, TitleElement,
};
use std::collections::HashMap;
use std::sync::Mutex;

pub fn titled_panel(title: &str) -> Panel {
    Panel::new(TitleElement::new("a", title, "grade"))
}

/// main -> environment -> sourcing, main -> welfare; every panel carries text
pub fn branching_graph() -> PanelGraph {
    let mut graph = PanelGraph::new();
    graph.insert(
        "main",
        titled_panel("Overview")
            .with_element(Element::text("<p>summary</p>"))
            .with_element(Element::panel_ref("welfare"))
            .with_element(Element::panel_ref("environment")),
    );
    graph.insert(
        "welfare",
        titled_panel("Animal welfare").with_element(Element::text("<p>welfare</p>")),
    );
    graph.insert(
        "environment",
        titled_panel("Environment")
            .with_element(Element::text("<p>environment</p>"))
            .with_element(Element::panel_ref("sourcing")),
    );
    graph.insert(
        "sourcing",
        titled_panel("Sourcing").with_element(Element::text("<p>sourcing</p>")),
    );
    graph
}

/// main -> back -> main
pub fn cyclic_graph() -> PanelGraph {
    let mut graph = PanelGraph::new();
    graph.insert(
        "main",
        titled_panel("Forward").with_element(Element::panel_ref("back")),
    );
    graph.insert(
        "back",
        titled_panel("Back").with_element(Element::panel_ref("main")),
    );
    graph
}

/// main references a panel that is not in the graph
pub fn dangling_graph() -> PanelGraph {
    let mut graph = PanelGraph::new();
    graph.insert(
        "main",
        titled_panel("Overview")
            .with_element(Element::panel_ref("missing"))
            .with_element(Element::text("<p>kept</p>")),
    );
    graph
}

pub fn document_with_product(name: &str, image_url: &str) -> KnowledgePanelDocument {
    KnowledgePanelDocument::new(branching_graph())
        .with_product(ProductSummary::new(name).with_image_url(image_url))
}

/// Fetcher double answering from a script of canned results
///
/// Results are cloned per call, so a barcode can be fetched repeatedly.
/// Calls are recorded for assertions on request ordering.
#[derive(Debug, Default)]
pub struct ScriptedFetcher {
    script: HashMap<String, Result<KnowledgePanelDocument, FetchError>>,
    calls: Mutex<Vec<(String, Locale)>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_document(mut self, barcode: &str, document: KnowledgePanelDocument) -> Self {
        self.script.insert(barcode.to_string(), Ok(document));
        self
    }

    #[must_use]
    pub fn with_error(mut self, barcode: &str, error: FetchError) -> Self {
        self.script.insert(barcode.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<(String, Locale)> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

#[async_trait]
impl PanelFetcher for ScriptedFetcher {
    async fn fetch(
        &self,
        barcode: &str,
        locale: Locale,
    ) -> Result<KnowledgePanelDocument, FetchError> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push((barcode.to_string(), locale));

        self.script
            .get(barcode)
            .cloned()
            .unwrap_or_else(|| {
                Err(FetchError::NotFound {
                    barcode: barcode.to_string(),
                })
            })
    }
}
