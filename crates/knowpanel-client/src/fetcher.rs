//! Panel document fetchers
//!
//! [`PanelFetcher`] is the async seam between the session controller and
//! the network. The production [`HttpPanelFetcher`] talks to the
//! knowledge panel API over reqwest; tests substitute scripted doubles.

use crate::error::FetchError;
use async_trait::async_trait;
use knowpanel_model::{KnowledgePanelDocument, Locale};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Opaque fetch operation keyed by `(barcode, locale)`
#[async_trait]
pub trait PanelFetcher: Send + Sync {
    /// Retrieve and parse the document for one product identifier
    async fn fetch(
        &self,
        barcode: &str,
        locale: Locale,
    ) -> Result<KnowledgePanelDocument, FetchError>;
}

/// Configuration for the HTTP fetcher
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Base URL of the knowledge panel API
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl FetcherConfig {
    /// Create a configuration for the given base URL
    #[inline]
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// With per-request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 10,
        }
    }
}

/// HTTP client for the knowledge panel API
///
/// # Example
///
/// ```rust,no_run
/// use knowpanel_client::{FetcherConfig, HttpPanelFetcher, PanelFetcher};
/// use knowpanel_model::Locale;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = HttpPanelFetcher::new(FetcherConfig::default())?;
/// let document = fetcher.fetch("3450970045360", Locale::En).await?;
/// println!("{} panels", document.panels.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpPanelFetcher {
    config: FetcherConfig,
    client: Client,
}

impl HttpPanelFetcher {
    /// Build an HTTP fetcher from configuration
    ///
    /// # Errors
    /// `FetchError::TransportOrServer` if the underlying client cannot
    /// be constructed.
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::TransportOrServer(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn url_for(&self, barcode: &str, locale: Locale) -> String {
        format!(
            "{}/off/v1/knowledge-panel/{}?lang={}",
            self.config.base_url,
            barcode,
            locale.as_str()
        )
    }
}

#[async_trait]
impl PanelFetcher for HttpPanelFetcher {
    async fn fetch(
        &self,
        barcode: &str,
        locale: Locale,
    ) -> Result<KnowledgePanelDocument, FetchError> {
        let url = self.url_for(barcode, locale);
        tracing::debug!(%url, "fetching knowledge panel document");

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(FetchError::NotFound {
                barcode: barcode.to_string(),
            }),
            status if !status.is_success() => Err(FetchError::TransportOrServer(format!(
                "HTTP {status} from {url}"
            ))),
            _ => {
                let body = response
                    .text()
                    .await
                    .map_err(|e| FetchError::TransportOrServer(e.to_string()))?;
                let document: KnowledgePanelDocument = serde_json::from_str(&body)?;
                tracing::debug!(
                    panels = document.panels.len(),
                    has_product = document.product.is_some(),
                    "parsed knowledge panel document"
                );
                Ok(document)
            }
        }
    }
}
