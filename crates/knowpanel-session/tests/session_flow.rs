//! End-to-end session flows against a scripted fetcher

use knowpanel_client::FetchError;
use knowpanel_model::{KnowledgePanelDocument, Locale, PanelGraph};
use knowpanel_session::{SessionController, SessionState};
use knowpanel_test_utils::{
    branching_graph, cyclic_graph, dangling_graph, document_with_product, titled_panel,
    ScriptedFetcher,
};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn load_renders_product_and_panels() {
    let fetcher = ScriptedFetcher::new()
        .with_document("3450970045360", document_with_product("Eggs", "http://x/img.png"));
    let mut session = SessionController::new(Locale::En);

    session.load(&fetcher, "3450970045360").await;

    let rendered = session.rendered().unwrap();
    let product = rendered.product.unwrap();
    assert_eq!(product.name, "Eggs");
    assert_eq!(product.image_url.as_deref(), Some("http://x/img.png"));
    // Overview, welfare, environment, sourcing
    assert_eq!(rendered.root.unwrap().panel_count(), 4);

    assert_eq!(fetcher.calls(), vec![("3450970045360".to_string(), Locale::En)]);
}

#[tokio::test]
async fn not_found_clears_document() {
    let fetcher = ScriptedFetcher::new()
        .with_document("111", document_with_product("Eggs", "http://x/img.png"))
        .with_error(
            "0000000000000",
            FetchError::NotFound {
                barcode: "0000000000000".to_string(),
            },
        );
    let mut session = SessionController::new(Locale::En);

    session.load(&fetcher, "111").await;
    assert!(session.document().is_some());

    session.load(&fetcher, "0000000000000").await;
    assert_eq!(
        session.error(),
        Some(&FetchError::NotFound {
            barcode: "0000000000000".to_string()
        })
    );
    // Cleared, not merged with the previous document
    assert!(session.document().is_none());
    assert!(session.rendered().is_none());
}

#[tokio::test]
async fn late_response_for_superseded_request_is_ignored() {
    let doc_a = KnowledgePanelDocument::new({
        let mut graph = PanelGraph::new();
        graph.insert("main", titled_panel("A"));
        graph
    });
    let doc_b = KnowledgePanelDocument::new({
        let mut graph = PanelGraph::new();
        graph.insert("main", titled_panel("B"));
        graph
    });

    let mut session = SessionController::new(Locale::En);

    // A triggered, then B before A resolves
    let ticket_a = session.select("aaa");
    let ticket_b = session.select("bbb");

    // B resolves first, then A's stale response arrives
    assert!(session.complete(ticket_b, Ok(doc_b)));
    assert!(!session.complete(ticket_a, Ok(doc_a)));

    let visible = session.document().unwrap();
    assert_eq!(visible.root().unwrap().title_element.title, "B");
}

#[tokio::test]
async fn locale_switch_refetches_with_new_tag() {
    let fetcher = ScriptedFetcher::new()
        .with_document("111", document_with_product("Eggs", "http://x/img.png"));
    let mut session = SessionController::new(Locale::En);

    session.load(&fetcher, "111").await;
    let ticket = session.set_locale(Locale::Fr).unwrap();
    session.run(&fetcher, ticket).await;

    assert_eq!(
        fetcher.calls(),
        vec![
            ("111".to_string(), Locale::En),
            ("111".to_string(), Locale::Fr),
        ]
    );
    assert!(session.document().is_some());
}

#[tokio::test]
async fn new_document_resets_expansion() {
    let fetcher = ScriptedFetcher::new()
        .with_document(
            "111",
            KnowledgePanelDocument::new(branching_graph()),
        )
        .with_document(
            "222",
            KnowledgePanelDocument::new(dangling_graph()),
        );
    let mut session = SessionController::new(Locale::En);

    session.load(&fetcher, "111").await;
    session.toggle("welfare");
    assert!(!session.expansion().is_expanded("welfare"));

    session.load(&fetcher, "222").await;
    // Fresh map: the toggle did not leak across documents
    assert_eq!(session.expansion().len(), 1);
    assert!(session.expansion().is_expanded("welfare"));
}

#[tokio::test]
async fn collapsing_prunes_descendants_from_rendering() {
    let fetcher = ScriptedFetcher::new()
        .with_document("111", KnowledgePanelDocument::new(branching_graph()));
    let mut session = SessionController::new(Locale::En);
    session.load(&fetcher, "111").await;

    session.toggle("environment");
    let rendered = session.rendered().unwrap();
    let root = rendered.root.unwrap();

    let environment = root.find("environment").unwrap();
    assert!(!environment.expanded);
    assert!(environment.body.is_empty());
    assert!(root.find("sourcing").is_none());
    // Sibling rendering unchanged
    assert_eq!(root.find("welfare").unwrap().body.len(), 1);
}

#[tokio::test]
async fn cyclic_document_still_renders() {
    let fetcher = ScriptedFetcher::new()
        .with_document("111", KnowledgePanelDocument::new(cyclic_graph()));
    let mut session = SessionController::new(Locale::En);
    session.load(&fetcher, "111").await;

    let rendered = session.rendered().unwrap();
    assert_eq!(rendered.root.unwrap().panel_count(), 2);
}

#[tokio::test]
async fn malformed_response_surfaces_as_error_state() {
    let fetcher = ScriptedFetcher::new().with_error(
        "111",
        FetchError::MalformedResponse("missing field `panels`".to_string()),
    );
    let mut session = SessionController::new(Locale::En);
    session.load(&fetcher, "111").await;

    match session.state() {
        SessionState::Error(FetchError::MalformedResponse(msg)) => {
            assert!(msg.contains("panels"));
        }
        other => panic!("expected malformed-response error, got {other:?}"),
    }
}
