//! Session controller
//!
//! Single logical thread of control per session: the only suspension
//! point is the network retrieval, and results are applied in
//! last-request-wins order through a monotonically increasing sequence
//! number carried by [`FetchTicket`].

use knowpanel_client::{FetchError, PanelFetcher};
use knowpanel_model::{KnowledgePanelDocument, Locale, ProductSummary};
use knowpanel_render::{render_document, ExpansionState, RenderedDocument};

/// Observable retrieval status of the session
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// No retrieval triggered yet
    #[default]
    Idle,
    /// A retrieval is in flight; any previous document is discarded
    Loading,
    /// The latest retrieval failed; terminal until re-triggered
    Error(FetchError),
    /// The latest retrieval produced this document
    Ready(KnowledgePanelDocument),
}

/// Authorization to apply one retrieval's result
///
/// Issued when a retrieval is triggered and consumed on completion. A
/// ticket whose sequence number is no longer the latest is stale and its
/// result is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    barcode: String,
    locale: Locale,
}

impl FetchTicket {
    /// Product identifier this retrieval is for
    #[inline]
    #[must_use]
    pub fn barcode(&self) -> &str {
        &self.barcode
    }

    /// Locale this retrieval carries
    #[inline]
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }
}

/// The fetch & session controller
#[derive(Debug, Default)]
pub struct SessionController {
    barcode: Option<String>,
    locale: Locale,
    state: SessionState,
    expansion: ExpansionState,
    latest_seq: u64,
}

impl SessionController {
    /// Create a controller for the given locale
    #[inline]
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    /// Currently selected product identifier
    #[inline]
    #[must_use]
    pub fn barcode(&self) -> Option<&str> {
        self.barcode.as_deref()
    }

    /// Currently active locale
    #[inline]
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Observable state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The current document, if the latest retrieval succeeded
    #[inline]
    #[must_use]
    pub fn document(&self) -> Option<&KnowledgePanelDocument> {
        match &self.state {
            SessionState::Ready(document) => Some(document),
            _ => None,
        }
    }

    /// Product summary of the current document
    #[inline]
    #[must_use]
    pub fn product(&self) -> Option<&ProductSummary> {
        self.document().and_then(|doc| doc.product.as_ref())
    }

    /// Error of the latest retrieval, if it failed
    #[inline]
    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        match &self.state {
            SessionState::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Whether a retrieval is in flight
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    /// Expansion state of the current document
    #[inline]
    #[must_use]
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Flip one panel's expansion flag
    pub fn toggle(&mut self, panel_id: &str) {
        self.expansion.toggle(panel_id);
    }

    /// Select a product identifier, triggering a retrieval
    pub fn select(&mut self, barcode: impl Into<String>) -> FetchTicket {
        self.barcode = Some(barcode.into());
        self.begin()
    }

    /// Submit a manually entered identifier, triggering a retrieval
    ///
    /// Surrounding whitespace is trimmed; the identifier is otherwise
    /// not validated.
    pub fn submit(&mut self, barcode: &str) -> FetchTicket {
        self.select(barcode.trim())
    }

    /// Switch locale; re-triggers retrieval when an identifier is selected
    pub fn set_locale(&mut self, locale: Locale) -> Option<FetchTicket> {
        if self.locale == locale {
            return None;
        }
        self.locale = locale;
        self.barcode.is_some().then(|| self.begin())
    }

    /// Apply a retrieval result
    ///
    /// Returns `false` when the ticket was superseded by a newer trigger;
    /// the result is dropped and the visible state is untouched, so
    /// staleness never reaches it. On success the expansion store is
    /// re-initialized with every panel in the new document.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<KnowledgePanelDocument, FetchError>,
    ) -> bool {
        if ticket.seq != self.latest_seq {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                barcode = %ticket.barcode,
                "superseded retrieval result dropped"
            );
            return false;
        }

        match result {
            Ok(document) => {
                self.expansion
                    .initialize(document.panel_ids().cloned());
                tracing::info!(
                    barcode = %ticket.barcode,
                    panels = document.panels.len(),
                    "document loaded"
                );
                self.state = SessionState::Ready(document);
            }
            Err(err) => {
                tracing::warn!(barcode = %ticket.barcode, error = %err, "retrieval failed");
                self.state = SessionState::Error(err);
            }
        }
        true
    }

    /// Drive one ticket through a fetcher and apply the result
    ///
    /// Returns `false` when the result arrived stale and was dropped.
    pub async fn run<F: PanelFetcher>(&mut self, fetcher: &F, ticket: FetchTicket) -> bool {
        let result = fetcher.fetch(&ticket.barcode, ticket.locale).await;
        self.complete(ticket, result)
    }

    /// Select an identifier and fetch its document in one step
    pub async fn load<F: PanelFetcher>(&mut self, fetcher: &F, barcode: impl Into<String>) {
        let ticket = self.select(barcode);
        self.run(fetcher, ticket).await;
    }

    /// Render the current document against the expansion state
    #[inline]
    #[must_use]
    pub fn rendered(&self) -> Option<RenderedDocument> {
        self.document()
            .map(|document| render_document(document, &self.expansion))
    }

    fn begin(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        // Discard any previous document immediately so stale content is
        // never shown under the new identifier
        self.state = SessionState::Loading;

        let barcode = self.barcode.clone().unwrap_or_default();
        tracing::info!(seq = self.latest_seq, barcode = %barcode, locale = %self.locale, "retrieval triggered");
        FetchTicket {
            seq: self.latest_seq,
            barcode,
            locale: self.locale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knowpanel_model::{Element, Panel, PanelGraph, TitleElement};

    fn doc(marker: &str) -> KnowledgePanelDocument {
        let mut graph = PanelGraph::new();
        graph.insert(
            "main",
            Panel::new(TitleElement::new("a", marker, "grade"))
                .with_element(Element::text(marker)),
        );
        KnowledgePanelDocument::new(graph)
    }

    #[test]
    fn starts_idle() {
        let session = SessionController::new(Locale::En);
        assert_eq!(*session.state(), SessionState::Idle);
        assert!(session.barcode().is_none());
    }

    #[test]
    fn select_moves_to_loading_and_clears_document() {
        let mut session = SessionController::new(Locale::En);
        let ticket = session.select("111");
        assert!(session.complete(ticket, Ok(doc("one"))));
        assert!(session.document().is_some());

        let _ticket = session.select("222");
        assert!(session.is_loading());
        assert!(session.document().is_none());
    }

    #[test]
    fn submit_trims_whitespace() {
        let mut session = SessionController::new(Locale::En);
        let ticket = session.submit(" 0605388714565  ");
        assert_eq!(ticket.barcode(), "0605388714565");
        assert_eq!(session.barcode(), Some("0605388714565"));
    }

    #[test]
    fn stale_ticket_is_dropped() {
        let mut session = SessionController::new(Locale::En);
        let ticket_a = session.select("aaa");
        let ticket_b = session.select("bbb");

        // A's response arrives after B was triggered
        assert!(!session.complete(ticket_a, Ok(doc("A"))));
        assert!(session.is_loading());

        assert!(session.complete(ticket_b, Ok(doc("B"))));
        let document = session.document().unwrap();
        assert_eq!(document.root().unwrap().title_element.title, "B");
    }

    #[test]
    fn locale_change_retriggers_only_with_selection() {
        let mut session = SessionController::new(Locale::En);
        assert!(session.set_locale(Locale::Fr).is_none());
        assert_eq!(session.locale(), Locale::Fr);

        let _ticket = session.select("111");
        let ticket = session.set_locale(Locale::En).unwrap();
        assert_eq!(ticket.locale(), Locale::En);
        assert_eq!(ticket.barcode(), "111");
    }

    #[test]
    fn same_locale_does_not_retrigger() {
        let mut session = SessionController::new(Locale::En);
        let _ticket = session.select("111");
        assert!(session.set_locale(Locale::En).is_none());
    }

    #[test]
    fn success_seeds_expansion_all_true() {
        let mut session = SessionController::new(Locale::En);
        let ticket = session.select("111");

        let mut graph = PanelGraph::new();
        graph.insert("main", Panel::new(TitleElement::new("a", "M", "grade")));
        graph.insert("sub", Panel::new(TitleElement::new("a", "S", "grade")));
        assert!(session.complete(ticket, Ok(KnowledgePanelDocument::new(graph))));

        assert_eq!(session.expansion().len(), 2);
        assert!(session.expansion().is_expanded("main"));
        assert!(session.expansion().is_expanded("sub"));
    }

    #[test]
    fn error_is_terminal_until_retriggered() {
        let mut session = SessionController::new(Locale::En);
        let ticket = session.select("000");
        session.complete(
            ticket,
            Err(FetchError::NotFound {
                barcode: "000".to_string(),
            }),
        );

        assert!(session.error().is_some());
        assert!(session.document().is_none());

        // Re-triggering leaves the error state behind
        let _ticket = session.select("000");
        assert!(session.is_loading());
        assert!(session.error().is_none());
    }

    #[test]
    fn rendered_reflects_toggles() {
        let mut session = SessionController::new(Locale::En);
        let ticket = session.select("111");
        session.complete(ticket, Ok(doc("one")));

        let open = session.rendered().unwrap();
        assert_eq!(open.root.as_ref().unwrap().body.len(), 1);

        session.toggle("main");
        let collapsed = session.rendered().unwrap();
        let root = collapsed.root.unwrap();
        assert!(!root.expanded);
        assert!(root.body.is_empty());
    }
}
