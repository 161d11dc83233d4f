//! Shared test fixtures for the card catalog integration tests.
//!
//! Provides a small Wilds of Eldraine sample list in Scryfall wire format,
//! plus helpers to decode it or write it to a temporary asset file.

#![allow(dead_code)]

use manabox_cards::{loader, Card, CardCatalog};
use std::io::Write;
use tempfile::NamedTempFile;

/// A four-card list with one nameless entry and one card missing images.
///
/// Built from one `json!` per card so no single literal grows too deep.
pub fn sample_json() -> serde_json::Value {
    let mut list = serde_json::json!({
        "object": "list",
        "total_cards": 63,
        "has_more": false,
    });
    list["data"] = serde_json::Value::Array(vec![
        lightning_bolt(),
        ambush(),
        nameless(),
        rhystic_study(),
    ]);
    list
}

fn lightning_bolt() -> serde_json::Value {
    let mut card = serde_json::json!({
        "object": "card",
        "id": "wot-001",
        "oracle_id": "oracle-001",
        "name": "Lightning Bolt",
        "lang": "en",
        "released_at": "2023-09-08",
        "layout": "normal",
        "highres_image": true,
        "image_status": "highres_scan",
        "mana_cost": "{R}",
        "cmc": 1.0,
        "type_line": "Instant",
        "oracle_text": "Lightning Bolt deals 3 damage to any target.",
    });
    let extra = serde_json::json!({
        "colors": ["R"],
        "color_identity": ["R"],
        "keywords": [],
        "games": ["paper", "mtgo"],
        "reserved": false,
        "foil": true,
        "nonfoil": false,
        "finishes": ["foil"],
        "set": "wot",
        "set_name": "Wilds of Eldraine: Enchanting Tales",
        "set_type": "masterpiece",
        "collector_number": "42",
    });
    let more = serde_json::json!({
        "rarity": "mythic",
        "artist": "Christopher Moeller",
        "edhrec_rank": 14,
        "penny_rank": 3,
        "story_spotlight": false,
    });
    for part in [extra, more] {
        if let serde_json::Value::Object(fields) = part {
            for (key, value) in fields {
                card[key.as_str()] = value;
            }
        }
    }

    card["image_uris"] = serde_json::json!({
        "small": "https://cards.scryfall.io/small/front/wot-001.jpg",
        "normal": "https://cards.scryfall.io/normal/front/wot-001.jpg",
        "large": "https://cards.scryfall.io/large/front/wot-001.jpg",
        "png": "https://cards.scryfall.io/png/front/wot-001.png",
        "art_crop": "https://cards.scryfall.io/art_crop/front/wot-001.jpg",
        "border_crop": "https://cards.scryfall.io/border_crop/front/wot-001.jpg",
    });
    card["legalities"] = serde_json::json!({
        "standard": "not_legal",
        "modern": "legal",
        "legacy": "legal",
        "commander": "legal",
    });
    card["prices"] = serde_json::json!({
        "usd": "24.99",
        "usd_foil": null,
        "eur": "21.50",
        "tix": null,
    });
    card["related_uris"] = serde_json::json!({
        "gatherer": "https://gatherer.wizards.com/Pages/Card/Details.aspx?multiverseid=1",
    });
    card["purchase_uris"] = serde_json::json!({
        "tcgplayer": "https://tcgplayer.example/bolt",
    });
    card
}

fn ambush() -> serde_json::Value {
    let mut card = serde_json::json!({
        "object": "card",
        "id": "wot-002",
        "name": "Ambush",
        "mana_cost": "{2}{G}",
        "type_line": "Instant",
        "oracle_text": "Target creature you control fights target creature you don't control.",
        "colors": [],
        "rarity": "uncommon",
        "set": "wot",
        "set_name": "Wilds of Eldraine: Enchanting Tales",
    });
    card["image_uris"] = serde_json::json!({
        "normal": "https://cards.scryfall.io/normal/front/wot-002.jpg",
    });
    card["some_future_field"] = serde_json::json!({ "nested": true });
    card
}

fn nameless() -> serde_json::Value {
    serde_json::json!({
        "object": "card",
        "id": "wot-003",
        "name": null,
        "image_uris": null,
    })
}

fn rhystic_study() -> serde_json::Value {
    serde_json::json!({
        "id": "wot-004",
        "name": "Rhystic Study",
        "mana_cost": "{2}{U}",
        "type_line": "Enchantment",
        "colors": ["U"],
        "rarity": "mythic",
    })
}

pub fn sample_catalog() -> CardCatalog {
    loader::try_load_slice(sample_json().to_string().as_bytes()).unwrap()
}

/// Build a catalog from `(id, name)` pairs; `None` names are left absent.
pub fn catalog_of(entries: &[(&str, Option<&str>)]) -> CardCatalog {
    CardCatalog {
        object_kind: "list".to_string(),
        total_count: entries.len() as i64,
        has_more: false,
        cards: entries
            .iter()
            .map(|(id, name)| Card {
                id: Some(id.to_string()),
                name: name.map(str::to_string),
                ..Default::default()
            })
            .collect(),
    }
}

pub fn ids(cards: &[&Card]) -> Vec<String> {
    cards
        .iter()
        .map(|c| c.key().unwrap_or("").to_string())
        .collect()
}

/// Write `contents` to a temp file with the given suffix.
///
/// The caller must keep the returned file alive while it is used.
pub fn write_asset(contents: &[u8], suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}
