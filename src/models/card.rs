use serde::{Deserialize, Serialize};

use super::sub::{ImageUris, Legalities, Prices, PurchaseUris, RelatedUris};

// ---------------------------------------------------------------------------
// CardCatalog — The decoded top-level list document
// ---------------------------------------------------------------------------

/// A Scryfall list object as shipped in the bundled asset.
///
/// `cards` is in load order, which is not the display order. `total_count`
/// is the server-declared total and may exceed `cards.len()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardCatalog {
    #[serde(rename = "object")]
    pub object_kind: String,
    #[serde(rename = "total_cards")]
    pub total_count: i64,
    pub has_more: bool,
    #[serde(rename = "data")]
    pub cards: Vec<Card>,
}

impl CardCatalog {
    /// Number of decoded cards (not the declared total).
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Card — One printing, every field optional
// ---------------------------------------------------------------------------

/// A single card printing.
///
/// The upstream schema is sparse and versioned independently, so every
/// field is optional and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    // -- Identity --
    #[serde(rename = "object")]
    pub object_kind: Option<String>,
    pub id: Option<String>,
    pub oracle_id: Option<String>,
    pub multiverse_ids: Option<Vec<i64>>,
    pub mtgo_id: Option<i64>,
    pub arena_id: Option<i64>,
    pub tcgplayer_id: Option<i64>,
    pub cardmarket_id: Option<i64>,

    // -- Descriptive --
    pub name: Option<String>,
    pub lang: Option<String>,
    pub released_at: Option<String>,
    pub layout: Option<String>,
    pub mana_cost: Option<String>,
    #[serde(rename = "cmc")]
    pub mana_value: Option<f64>,
    pub type_line: Option<String>,
    pub oracle_text: Option<String>,
    pub flavor_text: Option<String>,
    pub rarity: Option<String>,
    pub artist: Option<String>,
    pub artist_ids: Option<Vec<String>>,
    pub illustration_id: Option<String>,
    pub card_back_id: Option<String>,
    pub border_color: Option<String>,
    pub frame: Option<String>,
    pub frame_effects: Option<Vec<String>>,
    pub security_stamp: Option<String>,

    // -- Classification --
    pub colors: Option<Vec<String>>,
    pub color_identity: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    pub games: Option<Vec<String>>,
    pub finishes: Option<Vec<String>>,
    pub promo_types: Option<Vec<String>>,

    // -- Set metadata --
    pub set_id: Option<String>,
    #[serde(rename = "set")]
    pub set_code: Option<String>,
    pub set_name: Option<String>,
    pub set_type: Option<String>,
    pub collector_number: Option<String>,

    // -- Imagery --
    #[serde(rename = "highres_image")]
    pub high_res_image: Option<bool>,
    pub image_status: Option<String>,
    pub image_uris: Option<ImageUris>,

    // -- Legality, pricing, cross references --
    pub legalities: Option<Legalities>,
    pub prices: Option<Prices>,
    pub related_uris: Option<RelatedUris>,
    pub purchase_uris: Option<PurchaseUris>,
    pub uri: Option<String>,
    pub scryfall_uri: Option<String>,
    pub set_uri: Option<String>,
    pub set_search_uri: Option<String>,
    pub scryfall_set_uri: Option<String>,
    pub rulings_uri: Option<String>,
    pub prints_search_uri: Option<String>,

    // -- Ranks --
    pub edhrec_rank: Option<i64>,
    pub penny_rank: Option<i64>,

    // -- Flags --
    pub reserved: Option<bool>,
    pub foil: Option<bool>,
    pub nonfoil: Option<bool>,
    pub oversized: Option<bool>,
    pub promo: Option<bool>,
    pub reprint: Option<bool>,
    pub variation: Option<bool>,
    pub digital: Option<bool>,
    pub full_art: Option<bool>,
    pub textless: Option<bool>,
    pub booster: Option<bool>,
    pub story_spotlight: Option<bool>,
}

impl Card {
    /// The printing identifier used as the list and navigation key.
    ///
    /// `None` marks a degenerate entry that cannot be referenced by id.
    pub fn key(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The name, or `""` when absent. This is also the sort key.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// The `normal` image URL, if the card has one.
    pub fn normal_image(&self) -> Option<&str> {
        self.image_uris.as_ref().and_then(|u| u.normal.as_deref())
    }

    /// The `large` image URL, if the card has one.
    pub fn large_image(&self) -> Option<&str> {
        self.image_uris.as_ref().and_then(|u| u.large.as_deref())
    }
}
