//! Card catalog core for the ManaBox card browser.
//!
//! Loads a bundled Scryfall card list once, derives the searchable, sortable
//! grid view from it, and projects individual cards into the shapes the grid
//! and detail screens render.
//!
//! # Quick start
//!
//! ```no_run
//! use manabox_cards::{CardBrowser, ViewState};
//!
//! let browser = CardBrowser::builder()
//!     .asset_path("WOT-Scryfall.json")
//!     .build()
//!     .unwrap();
//!
//! let mut state = ViewState::new();
//! state.set_filter("bo");
//! for card in browser.query_state(&state) {
//!     let summary = browser.summary_of(card);
//!     println!("{} -> {}", summary.name, summary.image_url);
//! }
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod images;
pub mod loader;
pub mod models;
pub mod navigation;
pub mod presentation;
pub mod queries;

#[cfg(feature = "async")]
pub use async_client::AsyncCardBrowser;
pub use error::{CatalogError, Result};
pub use images::{ImageLoader, ImageSlot, ImageState};
pub use models::{Card, CardCatalog};
pub use navigation::{DetailCursor, SwipeOutcome};
pub use presentation::{DetailProjection, SummaryProjection};
pub use queries::{CatalogQuery, ViewState};

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

// ---------------------------------------------------------------------------
// CatalogSource
// ---------------------------------------------------------------------------

/// Where the catalog is read from on first access.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl CatalogSource {
    fn load(&self) -> CardCatalog {
        match self {
            CatalogSource::Path(path) => loader::load_path(path),
            CatalogSource::Bytes(bytes) => loader::load_slice(bytes),
        }
    }
}

// ---------------------------------------------------------------------------
// CardBrowserBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CardBrowser`].
///
/// Use [`CardBrowser::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CardBrowserBuilder::build).
pub struct CardBrowserBuilder {
    source: Option<CatalogSource>,
    offline: bool,
    image_timeout: Duration,
}

impl Default for CardBrowserBuilder {
    fn default() -> Self {
        Self {
            source: None,
            offline: false,
            image_timeout: config::DEFAULT_IMAGE_TIMEOUT,
        }
    }
}

impl CardBrowserBuilder {
    /// Read the catalog from a file (`.json` or `.json.gz`).
    ///
    /// If neither this nor [`asset_bytes`](Self::asset_bytes) is set, the
    /// platform data directory is used (e.g.
    /// `~/.local/share/manabox-cards/WOT-Scryfall.json` on Linux).
    pub fn asset_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = Some(CatalogSource::Path(path.as_ref().to_path_buf()));
        self
    }

    /// Read the catalog from bytes embedded in the application binary.
    pub fn asset_bytes<B: Into<Vec<u8>>>(mut self, bytes: B) -> Self {
        self.source = Some(CatalogSource::Bytes(bytes.into()));
        self
    }

    /// Never fetch images over the network. Defaults to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// HTTP timeout for image downloads. Defaults to 30 seconds.
    pub fn image_timeout(mut self, timeout: Duration) -> Self {
        self.image_timeout = timeout;
        self
    }

    /// Build the browser.
    ///
    /// The catalog is **not** read here; it is loaded on first access.
    pub fn build(self) -> Result<CardBrowser> {
        if self.image_timeout.is_zero() {
            return Err(CatalogError::InvalidArgument(
                "image timeout must be greater than zero".into(),
            ));
        }
        let source = self
            .source
            .unwrap_or_else(|| CatalogSource::Path(config::default_asset_path()));
        Ok(CardBrowser {
            source,
            catalog: OnceLock::new(),
            images: ImageLoader::new(self.offline, self.image_timeout),
        })
    }
}

// ---------------------------------------------------------------------------
// CardBrowser
// ---------------------------------------------------------------------------

/// The rendering boundary between the card catalog and the UI.
///
/// Owns the catalog source and loads it at most once, on the first call
/// that needs it. After that the catalog never changes; every view is
/// derived from it afresh.
pub struct CardBrowser {
    source: CatalogSource,
    catalog: OnceLock<CardCatalog>,
    images: ImageLoader,
}

impl CardBrowser {
    /// Create a new builder for configuring the browser.
    pub fn builder() -> CardBrowserBuilder {
        CardBrowserBuilder::default()
    }

    /// The full catalog, loading it on first call.
    ///
    /// A bad asset yields an empty catalog (see [`loader`]).
    pub fn get_all_cards(&self) -> &CardCatalog {
        self.catalog.get_or_init(|| self.source.load())
    }

    /// Whether the catalog has been loaded yet.
    pub fn is_loaded(&self) -> bool {
        self.catalog.get().is_some()
    }

    /// Access the catalog query interface.
    pub fn cards(&self) -> CatalogQuery<'_> {
        CatalogQuery::new(self.get_all_cards())
    }

    /// The visible, ordered subset for a search text and direction.
    pub fn query_view(&self, filter_text: &str, ascending: bool) -> Vec<&Card> {
        self.cards().view(filter_text, ascending)
    }

    /// [`query_view`](Self::query_view) driven by a [`ViewState`].
    pub fn query_state(&self, state: &ViewState) -> Vec<&Card> {
        self.cards().view_state(state)
    }

    /// The grid-item projection of `card`.
    pub fn summary_of(&self, card: &Card) -> SummaryProjection {
        presentation::summary_of(card)
    }

    /// The detail-page projection of `card`.
    pub fn detail_of(&self, card: &Card) -> DetailProjection {
        presentation::detail_of(card)
    }

    /// A detail cursor over the current view, positioned at `position`.
    pub fn cursor(&self, state: &ViewState, position: usize) -> Option<DetailCursor<'_>> {
        DetailCursor::new(self.query_state(state), position)
    }

    /// The image loader shared by all slots of this browser.
    pub fn images(&self) -> &ImageLoader {
        &self.images
    }

    /// Where the catalog is (or will be) loaded from.
    pub fn source(&self) -> &CatalogSource {
        &self.source
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CardBrowser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match &self.source {
            CatalogSource::Path(path) => path.display().to_string(),
            CatalogSource::Bytes(bytes) => format!("<{} bytes>", bytes.len()),
        };
        let cards = match self.catalog.get() {
            Some(catalog) => catalog.cards.len().to_string(),
            None => "not loaded".to_string(),
        };
        write!(
            f,
            "CardBrowser(source={}, cards={}, offline={})",
            source, cards, self.images.offline
        )
    }
}
