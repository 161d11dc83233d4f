//! Catalog loader tests: decoding, wire keys, and the fail-soft policy.

mod common;

use flate2::write::GzEncoder;
use flate2::Compression;
use manabox_cards::{loader, CatalogError};
use std::io::Write;

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

#[test]
fn load_decodes_top_level_fields() {
    let catalog = common::sample_catalog();
    assert_eq!(catalog.object_kind, "list");
    assert_eq!(catalog.total_count, 63);
    assert!(!catalog.has_more);
    assert_eq!(catalog.len(), 4);
}

#[test]
fn load_preserves_source_order() {
    let catalog = common::sample_catalog();
    let ids: Vec<&str> = catalog.cards.iter().filter_map(|c| c.key()).collect();
    assert_eq!(ids, vec!["wot-001", "wot-002", "wot-003", "wot-004"]);
}

#[test]
fn load_maps_renamed_wire_keys() {
    let catalog = common::sample_catalog();
    let bolt = &catalog.cards[0];

    assert_eq!(bolt.mana_value, Some(1.0));
    assert_eq!(bolt.set_code.as_deref(), Some("wot"));
    assert_eq!(bolt.high_res_image, Some(true));
    assert_eq!(bolt.object_kind.as_deref(), Some("card"));
    let images = bolt.image_uris.as_ref().unwrap();
    assert_eq!(
        images.png_full_res.as_deref(),
        Some("https://cards.scryfall.io/png/front/wot-001.png")
    );
    assert_eq!(bolt.edhrec_rank, Some(14));
    assert_eq!(bolt.penny_rank, Some(3));
    assert_eq!(bolt.games.as_ref().unwrap(), &vec!["paper", "mtgo"]);
}

#[test]
fn load_keeps_prices_as_strings() {
    let catalog = common::sample_catalog();
    let prices = catalog.cards[0].prices.as_ref().unwrap();
    assert_eq!(prices.usd.as_deref(), Some("24.99"));
    assert_eq!(prices.eur.as_deref(), Some("21.50"));
    assert!(prices.usd_foil.is_none());
    assert!(prices.usd_etched.is_none());
}

#[test]
fn legalities_entries_pass_statuses_through() {
    let catalog = common::sample_catalog();
    let legalities = catalog.cards[0].legalities.as_ref().unwrap();
    assert_eq!(
        legalities.entries(),
        vec![
            ("standard", "not_legal"),
            ("modern", "legal"),
            ("legacy", "legal"),
            ("commander", "legal"),
        ]
    );
}

#[test]
fn missing_and_null_fields_decode_as_absent() {
    let catalog = common::sample_catalog();
    let nameless = &catalog.cards[2];
    assert!(nameless.name.is_none());
    assert!(nameless.image_uris.is_none());
    assert!(nameless.legalities.is_none());
    assert!(nameless.colors.is_none());

    let study = &catalog.cards[3];
    assert!(study.object_kind.is_none());
    assert!(study.set_name.is_none());
}

#[test]
fn unknown_fields_are_ignored() {
    let catalog = common::sample_catalog();
    assert_eq!(catalog.cards[1].name.as_deref(), Some("Ambush"));
}

#[test]
fn duplicate_ids_are_kept() {
    let json = br#"{"object":"list","total_cards":2,"has_more":false,
        "data":[{"id":"dup","name":"A"},{"id":"dup","name":"B"}]}"#;
    let catalog = loader::load_slice(json);
    assert_eq!(catalog.len(), 2);
}

#[test]
fn serializing_a_card_emits_wire_keys() {
    let catalog = common::sample_catalog();
    let value = serde_json::to_value(&catalog.cards[0]).unwrap();
    assert_eq!(value["cmc"], 1.0);
    assert_eq!(value["set"], "wot");
    assert_eq!(value["highres_image"], true);
    assert_eq!(value["image_uris"]["png"], "https://cards.scryfall.io/png/front/wot-001.png");
    assert!(value.get("mana_value").is_none());

    let catalog_value = serde_json::to_value(&catalog).unwrap();
    assert_eq!(catalog_value["total_cards"], 63);
    assert_eq!(catalog_value["data"].as_array().unwrap().len(), 4);
}

// ---------------------------------------------------------------------------
// Fail-soft
// ---------------------------------------------------------------------------

#[test]
fn truncated_json_yields_empty_catalog() {
    let full = common::sample_json().to_string();
    let truncated = &full.as_bytes()[..full.len() / 2];

    let catalog = loader::load_slice(truncated);
    assert!(catalog.is_empty());
    assert_eq!(catalog.total_count, 0);
}

#[test]
fn schema_mismatch_yields_empty_catalog() {
    let catalog = loader::load_slice(br#"{"data": "not a list"}"#);
    assert!(catalog.is_empty());

    let catalog = loader::load_slice(br#"{"data": [{"name": 42}]}"#);
    assert!(catalog.is_empty());
}

#[test]
fn reader_errors_yield_empty_catalog() {
    let catalog = loader::load(&b"not json at all"[..]);
    assert!(catalog.is_empty());
}

#[test]
fn missing_file_yields_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = loader::load_path(dir.path().join("WOT-Scryfall.json"));
    assert!(catalog.is_empty());
}

#[test]
fn try_variants_surface_errors() {
    let err = loader::try_load_slice(b"{").unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));

    let dir = tempfile::tempdir().unwrap();
    let err = loader::try_load_path(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn empty_object_decodes_to_empty_catalog() {
    let catalog = loader::try_load_slice(b"{}").unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.object_kind, "");
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

#[test]
fn load_path_reads_plain_json() {
    let json = common::sample_json().to_string();
    let file = common::write_asset(json.as_bytes(), ".json");

    let catalog = loader::load_path(file.path());
    assert_eq!(catalog, common::sample_catalog());
}

#[test]
fn load_path_reads_gzipped_json() {
    let json = common::sample_json().to_string();
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(json.as_bytes()).unwrap();
    let compressed = encoder.finish().unwrap();
    let file = common::write_asset(&compressed, ".json.gz");

    let catalog = loader::load_path(file.path());
    assert_eq!(catalog, common::sample_catalog());
}

#[test]
fn corrupt_gzip_yields_empty_catalog() {
    let file = common::write_asset(b"definitely not gzip", ".json.gz");
    let catalog = loader::load_path(file.path());
    assert!(catalog.is_empty());
}
