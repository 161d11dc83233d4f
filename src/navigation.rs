//! Previous/next navigation between detail pages.
//!
//! A [`DetailCursor`] walks the same ordered view the grid shows, so
//! stepping from a detail page lands on the card that sits next to it in
//! the grid. Positions are indices into the view, which keeps duplicate or
//! missing ids navigable.

use crate::config::SWIPE_THRESHOLD;
use crate::models::Card;

/// Result of a horizontal drag on the detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Previous,
    Next,
    /// Below the threshold, or already at the edge of the view.
    Stayed,
}

#[derive(Debug, Clone)]
pub struct DetailCursor<'a> {
    view: Vec<&'a Card>,
    position: usize,
}

impl<'a> DetailCursor<'a> {
    /// Place a cursor at `position` in `view`.
    ///
    /// Returns `None` if the position is out of range (including an empty
    /// view).
    pub fn new(view: Vec<&'a Card>, position: usize) -> Option<Self> {
        if position < view.len() {
            Some(Self { view, position })
        } else {
            None
        }
    }

    /// Place a cursor on the first card in `view` with the given id.
    pub fn at_id(view: Vec<&'a Card>, id: &str) -> Option<Self> {
        let position = view.iter().position(|c| c.key() == Some(id))?;
        Some(Self { view, position })
    }

    pub fn current(&self) -> &'a Card {
        self.view[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.position + 1 < self.view.len()
    }

    pub fn has_previous(&self) -> bool {
        self.position > 0
    }

    /// Step forward. Returns the new card, or `None` at the last card.
    pub fn next(&mut self) -> Option<&'a Card> {
        if !self.has_next() {
            return None;
        }
        self.position += 1;
        Some(self.current())
    }

    /// Step back. Returns the new card, or `None` at the first card.
    pub fn previous(&mut self) -> Option<&'a Card> {
        if !self.has_previous() {
            return None;
        }
        self.position -= 1;
        Some(self.current())
    }

    /// Apply a finished drag of `translation_width` points.
    ///
    /// Dragging right past the threshold goes back, dragging left past it
    /// goes forward.
    pub fn swipe(&mut self, translation_width: f64) -> SwipeOutcome {
        if translation_width > SWIPE_THRESHOLD {
            match self.previous() {
                Some(_) => SwipeOutcome::Previous,
                None => SwipeOutcome::Stayed,
            }
        } else if translation_width < -SWIPE_THRESHOLD {
            match self.next() {
                Some(_) => SwipeOutcome::Next,
                None => SwipeOutcome::Stayed,
            }
        } else {
            SwipeOutcome::Stayed
        }
    }
}
