//! Query modules for the card catalog.
//!
//! Queries borrow an already-loaded [`CardCatalog`](crate::models::CardCatalog)
//! and never fail: an empty catalog simply produces empty views.

pub mod view;

pub use view::{matches_filter, sort_by_name, CatalogQuery, ViewState};
