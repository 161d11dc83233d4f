//! Display projections of a [`Card`] for the grid and detail screens.
//!
//! Both projections are total: absent fields become `""` or the placeholder
//! image, never an error.

use serde::Serialize;

use crate::config::PLACEHOLDER_IMAGE_URL;
use crate::models::Card;

// ---------------------------------------------------------------------------
// SummaryProjection — Grid item
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryProjection {
    pub image_url: String,
    pub name: String,
}

pub fn summary_of(card: &Card) -> SummaryProjection {
    SummaryProjection {
        image_url: display_image_url(card),
        name: card.display_name().to_string(),
    }
}

// ---------------------------------------------------------------------------
// DetailProjection — Detail page
// ---------------------------------------------------------------------------

/// Everything the detail page shows for one card.
///
/// `colors` is `None` when the card has no colors, in which case the Colors
/// row is left out entirely. `enlarged_image_url` backs the full-view
/// sheet; when it is `None` the sheet shows nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailProjection {
    pub image_url: String,
    pub name: String,
    pub mana_cost: String,
    pub type_line: String,
    pub oracle_text: String,
    pub colors: Option<String>,
    pub rarity: String,
    pub set_name: String,
    pub enlarged_image_url: Option<String>,
}

pub fn detail_of(card: &Card) -> DetailProjection {
    DetailProjection {
        image_url: display_image_url(card),
        name: card.display_name().to_string(),
        mana_cost: or_empty(&card.mana_cost),
        type_line: or_empty(&card.type_line),
        oracle_text: or_empty(&card.oracle_text),
        colors: card
            .colors
            .as_ref()
            .filter(|colors| !colors.is_empty())
            .map(|colors| colors.join(", ")),
        rarity: or_empty(&card.rarity),
        set_name: or_empty(&card.set_name),
        enlarged_image_url: card.large_image().map(str::to_string),
    }
}

impl DetailProjection {
    /// Navigation bar title.
    pub fn title(&self) -> &str {
        &self.name
    }

    /// Labelled text rows below the name, in display order.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Mana Cost: {}", self.mana_cost),
            format!("Type: {}", self.type_line),
            format!("Oracle Text: {}", self.oracle_text),
        ];
        if let Some(colors) = &self.colors {
            lines.push(format!("Colors: {}", colors));
        }
        lines.push(format!("Rarity: {}", self.rarity));
        lines.push(format!("Set: {}", self.set_name));
        lines
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn display_image_url(card: &Card) -> String {
    card.normal_image()
        .unwrap_or(PLACEHOLDER_IMAGE_URL)
        .to_string()
}

fn or_empty(field: &Option<String>) -> String {
    field.clone().unwrap_or_default()
}
