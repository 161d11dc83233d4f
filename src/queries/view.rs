//! Filtering and sorting of the loaded catalog into the visible grid.

use std::cmp::Ordering;

use crate::models::{Card, CardCatalog};

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// Session state of the catalog screen: the search text and sort direction.
///
/// Created with the view and dropped with it. It is passed into the query
/// engine explicitly; nothing here is global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub filter_text: String,
    pub ascending: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter_text: String::new(),
            ascending: true,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search text.
    pub fn set_filter<S: Into<String>>(&mut self, filter_text: S) {
        self.filter_text = filter_text.into();
    }

    /// Flip the sort direction and return the new value of `ascending`.
    pub fn toggle_sort(&mut self) -> bool {
        self.ascending = !self.ascending;
        self.ascending
    }
}

// ---------------------------------------------------------------------------
// CatalogQuery
// ---------------------------------------------------------------------------

/// Query interface over an immutable [`CardCatalog`].
///
/// Every method is pure: the catalog is only borrowed and results are fresh
/// vectors of references into it.
pub struct CatalogQuery<'a> {
    catalog: &'a CardCatalog,
}

impl<'a> CatalogQuery<'a> {
    /// Create a new `CatalogQuery` bound to the given catalog.
    pub fn new(catalog: &'a CardCatalog) -> Self {
        Self { catalog }
    }

    /// The visible subset: cards whose name contains `filter_text`
    /// (case-insensitively), sorted by name in the requested direction.
    ///
    /// Equal names keep their catalog order in both directions.
    pub fn view(&self, filter_text: &str, ascending: bool) -> Vec<&'a Card> {
        let mut cards = self.filter(filter_text);
        sort_by_name(&mut cards, ascending);
        cards
    }

    /// [`view`](Self::view) driven by a [`ViewState`].
    pub fn view_state(&self, state: &ViewState) -> Vec<&'a Card> {
        self.view(&state.filter_text, state.ascending)
    }

    /// Cards matching `filter_text`, in catalog order.
    pub fn filter(&self, filter_text: &str) -> Vec<&'a Card> {
        let needle = fold_case(filter_text);
        self.catalog
            .cards
            .iter()
            .filter(|card| name_contains(card, &needle))
            .collect()
    }

    /// The first card carrying the given printing id.
    pub fn get_by_id(&self, id: &str) -> Option<&'a Card> {
        self.catalog.cards.iter().find(|c| c.key() == Some(id))
    }

    pub fn count(&self) -> usize {
        self.catalog.cards.len()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Whether `card` belongs in a view filtered by `filter_text`.
///
/// An empty filter matches every card, including ones without a name.
pub fn matches_filter(card: &Card, filter_text: &str) -> bool {
    name_contains(card, &fold_case(filter_text))
}

/// Stable sort by name, treating an absent name as `""`.
///
/// Used on its own when only the direction changes, so the filtered view is
/// re-sorted rather than recomputed.
pub fn sort_by_name(cards: &mut [&Card], ascending: bool) {
    cards.sort_by(|a, b| compare_names(a, b, ascending));
}

fn compare_names(a: &Card, b: &Card, ascending: bool) -> Ordering {
    let ord = a.display_name().cmp(b.display_name());
    if ascending {
        ord
    } else {
        ord.reverse()
    }
}

/// Lowercase one character at a time, so a final `Σ` folds to `σ` the same
/// way in names and in search text.
fn fold_case(text: &str) -> Vec<char> {
    text.chars().flat_map(char::to_lowercase).collect()
}

// `needle` is already folded.
fn name_contains(card: &Card, needle: &[char]) -> bool {
    if needle.is_empty() {
        return true;
    }
    match card.name.as_deref() {
        Some(name) => fold_case(name)
            .windows(needle.len())
            .any(|window| window == needle),
        None => false,
    }
}
