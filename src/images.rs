//! Card image fetching for the presentation layer.
//!
//! Each image on screen is an [`ImageSlot`]: it starts out
//! [`Pending`](ImageState::Pending) (the UI shows a loading indicator), and
//! is resolved exactly once into bytes or a failure. There is no cache and
//! no retry; a failed slot keeps showing its placeholder.

use crate::config;
use crate::error::{CatalogError, Result};
use crate::presentation::{DetailProjection, SummaryProjection};
use reqwest::blocking::Client;
use std::sync::OnceLock;
use std::time::Duration;

// ---------------------------------------------------------------------------
// ImageLoader
// ---------------------------------------------------------------------------

/// Downloads image bytes over HTTP.
pub struct ImageLoader {
    /// If true, never touch the network; every fetch fails with `NotFound`.
    pub offline: bool,
    timeout: Duration,
    client: OnceLock<Client>,
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new(false, config::DEFAULT_IMAGE_TIMEOUT)
    }
}

impl ImageLoader {
    pub fn new(offline: bool, timeout: Duration) -> Self {
        Self {
            offline,
            timeout,
            client: OnceLock::new(),
        }
    }

    /// Lazy HTTP client, created on first fetch.
    fn client(&self) -> Result<&Client> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(config::USER_AGENT)
            .build()?;
        Ok(self.client.get_or_init(|| client))
    }

    /// Download the image at `url`.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if self.offline {
            return Err(CatalogError::NotFound(format!(
                "Image {} not fetched: offline mode is enabled",
                url
            )));
        }

        log::info!("Downloading image: {}", url);
        let resp = self.client()?.get(url).send()?.error_for_status()?;
        Ok(resp.bytes()?.to_vec())
    }
}

// ---------------------------------------------------------------------------
// ImageState / ImageSlot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageState {
    Pending,
    Ready(Vec<u8>),
    Failed(String),
}

impl ImageState {
    pub fn is_pending(&self) -> bool {
        matches!(self, ImageState::Pending)
    }
}

/// A single-shot image request for one URL.
#[derive(Debug, Clone)]
pub struct ImageSlot {
    url: String,
    state: ImageState,
}

impl ImageSlot {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            state: ImageState::Pending,
        }
    }

    /// Slot for a grid item's image.
    pub fn for_summary(summary: &SummaryProjection) -> Self {
        Self::new(summary.image_url.clone())
    }

    /// Slot for the detail page's main image.
    pub fn for_detail(detail: &DetailProjection) -> Self {
        Self::new(detail.image_url.clone())
    }

    /// Slot for the full-view sheet, or `None` when the card has no large
    /// image and the sheet stays empty.
    pub fn enlarged(detail: &DetailProjection) -> Option<Self> {
        detail.enlarged_image_url.as_ref().map(Self::new)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn state(&self) -> &ImageState {
        &self.state
    }

    /// Fetch the image if this slot is still pending, then return its state.
    ///
    /// Once resolved, further calls return the stored state without
    /// fetching again.
    pub fn resolve(&mut self, loader: &ImageLoader) -> &ImageState {
        if self.state.is_pending() {
            self.state = match loader.fetch(&self.url) {
                Ok(bytes) => ImageState::Ready(bytes),
                Err(e) => {
                    log::warn!("Image {} failed to load: {}", self.url, e);
                    ImageState::Failed(e.to_string())
                }
            };
        }
        &self.state
    }
}
