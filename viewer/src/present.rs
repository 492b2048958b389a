//! Plain-text presentation of a rendered document
//!
//! Indents nested panels by depth and marks each header with its toggle
//! state. Markup fragments are machine-authored and trusted; for a
//! terminal they are reduced to their text content here, purely as
//! presentation. The underlying model keeps fragments verbatim.

use knowpanel_model::Locale;
use knowpanel_render::{RenderedDocument, RenderedElement, RenderedPanel};
use std::fmt::Write;

use crate::messages;

/// Render a document as indented terminal text
pub(crate) fn render_text(document: &RenderedDocument, locale: Locale) -> String {
    let mut out = String::new();

    if let Some(product) = &document.product {
        let name = if product.name.is_empty() {
            messages::lookup(locale, "product.no_name")
        } else {
            &product.name
        };
        out.push_str(name);
        if let Some(image_url) = &product.image_url {
            let _ = write!(out, "  [{image_url}]");
        }
        out.push_str("\n\n");
    }

    if let Some(root) = &document.root {
        write_panel(&mut out, root);
    }

    out
}

fn write_panel(out: &mut String, panel: &RenderedPanel) {
    let indent = "  ".repeat(panel.depth);
    let marker = if panel.expanded { "▼" } else { "▶" };
    let _ = write!(out, "{indent}{marker} {}", panel.title);
    let _ = writeln!(out, "  ({})", panel.panel_id);
    if let Some(subtitle) = &panel.subtitle {
        let _ = writeln!(out, "{indent}  {subtitle}");
    }

    for element in &panel.body {
        match element {
            RenderedElement::Content { html } => {
                let text = strip_tags(html);
                if !text.is_empty() {
                    let _ = writeln!(out, "{indent}    {text}");
                }
            }
            RenderedElement::Nested(nested) => write_panel(out, nested),
        }
    }
}

/// Reduce a markup fragment to its text content
///
/// Tags are dropped, a handful of common entities decoded, whitespace
/// collapsed.
fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }

    let decoded = text
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use knowpanel_render::{render_document, ExpansionState};
    use knowpanel_test_utils::document_with_product;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_tags_and_entities() {
        assert_eq!(
            strip_tags("<p>Eggs &amp; <b>chicken</b></p>"),
            "Eggs & chicken"
        );
        assert_eq!(strip_tags("<img src=\"x\"/>"), "");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(strip_tags("<p>a\n   b</p>\n<p>c</p>"), "a b c");
    }

    #[test]
    fn text_output_shows_product_and_tree() {
        let doc = document_with_product("Eggs", "http://x/img.png");
        let rendered = render_document(&doc, &ExpansionState::new());

        let text = render_text(&rendered, Locale::En);
        assert!(text.starts_with("Eggs  [http://x/img.png]"));
        assert!(text.contains("▼ Overview  (main)"));
        assert!(text.contains("  ▼ Environment  (environment)"));
        assert!(text.contains("    ▼ Sourcing  (sourcing)"));
        // Product name appears exactly once
        assert_eq!(text.matches("Eggs").count(), 1);
    }

    #[test]
    fn collapsed_panel_shows_marker_without_body() {
        let doc = document_with_product("Eggs", "http://x/img.png");
        let mut expansion = ExpansionState::new();
        expansion.initialize(doc.panel_ids().cloned());
        expansion.toggle("environment");

        let rendered = render_document(&doc, &expansion);
        let text = render_text(&rendered, Locale::En);

        assert!(text.contains("▶ Environment"));
        assert!(!text.contains("Sourcing"));
    }
}
