//! Panels and their body elements
//!
//! A panel is one node of displayable content: a header (`TitleElement`)
//! and an ordered body of `Element`s. Element order is significant, it
//! determines vertical layout.
//!
//! The wire format describes elements with an open `element_type` string
//! and nullable payload objects. Internally the union is closed: adding a
//! new element kind means adding a variant and every `match` stops
//! compiling until it handles it. Wire elements whose discriminator and
//! payload disagree, or whose kind is unknown, are dropped during
//! deserialization so a partially understood document still renders.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;

/// Panel identifier, the key into a [`PanelGraph`](crate::PanelGraph)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(String);

impl PanelId {
    /// Identifier of the designated root panel
    pub const MAIN: &'static str = "main";

    /// Create a panel identifier
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The root panel identifier every document is rendered from
    #[inline]
    #[must_use]
    pub fn main() -> Self {
        Self(Self::MAIN.to_string())
    }

    /// Identifier as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PanelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for PanelId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One unit of a panel's body
///
/// Closed tagged union: exactly one payload per instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Opaque markup fragment rendered verbatim as rich content
    Text {
        /// Machine-authored markup, trusted as-is
        html: String,
    },
    /// Reference to another panel in the same graph
    PanelRef {
        /// Identifier of the referenced panel
        panel_id: PanelId,
    },
}

impl Element {
    /// Create a text element
    #[inline]
    #[must_use]
    pub fn text(html: impl Into<String>) -> Self {
        Self::Text { html: html.into() }
    }

    /// Create a panel reference element
    #[inline]
    #[must_use]
    pub fn panel_ref(panel_id: impl Into<PanelId>) -> Self {
        Self::PanelRef {
            panel_id: panel_id.into(),
        }
    }

    fn from_wire(raw: WireElement) -> Option<Self> {
        match raw.element_type.as_str() {
            "text" => raw.text_element.map(|t| Element::Text { html: t.html }),
            "panel" => raw.panel_element.map(|p| Element::PanelRef {
                panel_id: p.panel_id,
            }),
            _ => None,
        }
    }

    fn to_wire(&self) -> WireElement {
        match self {
            Element::Text { html } => WireElement {
                element_type: "text".to_string(),
                text_element: Some(WireTextElement { html: html.clone() }),
                panel_element: None,
            },
            Element::PanelRef { panel_id } => WireElement {
                element_type: "panel".to_string(),
                text_element: None,
                panel_element: Some(WirePanelElement {
                    panel_id: panel_id.clone(),
                }),
            },
        }
    }
}

/// Wire shape of an element: open discriminator, nullable payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireElement {
    element_type: String,
    #[serde(default)]
    text_element: Option<WireTextElement>,
    #[serde(default)]
    panel_element: Option<WirePanelElement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireTextElement {
    html: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WirePanelElement {
    panel_id: PanelId,
}

fn elements_from_wire<'de, D>(deserializer: D) -> Result<Vec<Element>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<WireElement>::deserialize(deserializer)?;
    Ok(raw.into_iter().filter_map(Element::from_wire).collect())
}

fn elements_to_wire<S>(elements: &[Element], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let raw: Vec<WireElement> = elements.iter().map(Element::to_wire).collect();
    raw.serialize(serializer)
}

/// Attributes of a panel's header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleElement {
    /// Severity/grade classifier
    pub grade: String,
    /// Display title
    pub title: String,
    /// Content-type tag
    #[serde(rename = "type")]
    pub content_type: String,
    /// Optional subtitle shown under the title
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Optional short name
    #[serde(default)]
    pub name: Option<String>,
    /// Optional icon reference
    #[serde(default)]
    pub icon_url: Option<String>,
}

impl TitleElement {
    /// Create a title element
    #[inline]
    #[must_use]
    pub fn new(
        grade: impl Into<String>,
        title: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            grade: grade.into(),
            title: title.into(),
            content_type: content_type.into(),
            subtitle: None,
            name: None,
            icon_url: None,
        }
    }

    /// With subtitle
    #[inline]
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// With short name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// With icon reference
    #[inline]
    #[must_use]
    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }
}

/// A node in the panel graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    /// Ordered body elements
    #[serde(
        deserialize_with = "elements_from_wire",
        serialize_with = "elements_to_wire"
    )]
    pub elements: Vec<Element>,
    /// Level classifier (severity tier)
    #[serde(default)]
    pub level: String,
    /// Header attributes
    pub title_element: TitleElement,
    /// Topic tags used for categorization, not rendered
    #[serde(default)]
    pub topics: Vec<String>,
}

impl Panel {
    /// Create a panel with an empty body
    #[inline]
    #[must_use]
    pub fn new(title_element: TitleElement) -> Self {
        Self {
            elements: Vec::new(),
            level: String::new(),
            title_element,
            topics: Vec::new(),
        }
    }

    /// With a body element appended
    #[inline]
    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// With level classifier
    #[inline]
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// With a topic tag
    #[inline]
    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topics.push(topic.into());
        self
    }

    /// Identifiers of all panels referenced from this panel's body
    pub fn referenced_ids(&self) -> impl Iterator<Item = &PanelId> {
        self.elements.iter().filter_map(|element| match element {
            Element::PanelRef { panel_id } => Some(panel_id),
            Element::Text { .. } => None,
        })
    }
}
