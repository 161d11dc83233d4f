//! Async wrapper around [`CardBrowser`] for use in async runtimes (Tokio, etc.).
//!
//! Catalog loading and image downloads block, so every operation runs on the
//! blocking thread pool via [`tokio::task::spawn_blocking`], keeping the
//! async event loop free.
//!
//! # Example
//!
//! ```no_run
//! use manabox_cards::AsyncCardBrowser;
//!
//! # async fn example() -> manabox_cards::Result<()> {
//! let browser = AsyncCardBrowser::builder()
//!     .asset_path("WOT-Scryfall.json")
//!     .build()
//!     .await?;
//!
//! let cards = browser.query_view("bo", true).await?;
//! if let Some(url) = cards.first().and_then(|c| c.large_image()) {
//!     let bytes = browser.fetch_image(url).await?;
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::config;
use crate::error::{CatalogError, Result};
use crate::models::Card;
use crate::CardBrowser;

// ---------------------------------------------------------------------------
// AsyncCardBrowserBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCardBrowser`].
pub struct AsyncCardBrowserBuilder {
    asset_path: Option<PathBuf>,
    asset_bytes: Option<Vec<u8>>,
    offline: bool,
    image_timeout: Duration,
}

impl Default for AsyncCardBrowserBuilder {
    fn default() -> Self {
        Self {
            asset_path: None,
            asset_bytes: None,
            offline: false,
            image_timeout: config::DEFAULT_IMAGE_TIMEOUT,
        }
    }
}

impl AsyncCardBrowserBuilder {
    pub fn asset_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.asset_path = Some(path.as_ref().to_path_buf());
        self.asset_bytes = None;
        self
    }

    pub fn asset_bytes<B: Into<Vec<u8>>>(mut self, bytes: B) -> Self {
        self.asset_bytes = Some(bytes.into());
        self.asset_path = None;
        self
    }

    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn image_timeout(mut self, timeout: Duration) -> Self {
        self.image_timeout = timeout;
        self
    }

    /// Build the browser and load its catalog on the blocking pool.
    pub async fn build(self) -> Result<AsyncCardBrowser> {
        tokio::task::spawn_blocking(move || {
            let mut builder = CardBrowser::builder()
                .offline(self.offline)
                .image_timeout(self.image_timeout);
            if let Some(path) = self.asset_path {
                builder = builder.asset_path(path);
            }
            if let Some(bytes) = self.asset_bytes {
                builder = builder.asset_bytes(bytes);
            }
            let browser = builder.build()?;
            browser.get_all_cards();
            Ok(AsyncCardBrowser {
                inner: Arc::new(browser),
            })
        })
        .await
        .map_err(|e| CatalogError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncCardBrowser
// ---------------------------------------------------------------------------

/// Async wrapper around [`CardBrowser`].
///
/// The catalog is immutable once loaded, so the browser is shared through
/// an [`Arc`] without locking.
#[derive(Clone)]
pub struct AsyncCardBrowser {
    inner: Arc<CardBrowser>,
}

impl AsyncCardBrowser {
    pub fn builder() -> AsyncCardBrowserBuilder {
        AsyncCardBrowserBuilder::default()
    }

    /// Run a sync browser operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CardBrowser) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let browser = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&browser))
            .await
            .map_err(|e| CatalogError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// The visible subset as owned cards.
    pub async fn query_view(&self, filter_text: &str, ascending: bool) -> Result<Vec<Card>> {
        let filter_text = filter_text.to_string();
        self.run(move |b| {
            Ok(b.query_view(&filter_text, ascending)
                .into_iter()
                .cloned()
                .collect())
        })
        .await
    }

    /// Download image bytes for display.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        let url = url.to_string();
        self.run(move |b| b.images().fetch(&url)).await
    }

    /// Borrow the wrapped synchronous browser.
    pub fn browser(&self) -> &CardBrowser {
        &self.inner
    }

    /// Release this handle on the blocking pool.
    ///
    /// The image loader holds a blocking HTTP client, which must not be
    /// dropped from inside the async runtime. Call this on the last handle
    /// once images have been fetched.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self.inner))
            .await
            .map_err(|e| CatalogError::InvalidArgument(format!("Task join error: {e}")))
    }
}
