//! Catalog loading from the bundled JSON asset.
//!
//! The public entry points are fail-soft: a missing, truncated, or
//! mis-shaped asset yields an empty [`CardCatalog`] and an error log entry
//! instead of an `Err`. The `try_*` variants surface the underlying
//! [`CatalogError`](crate::error::CatalogError) for callers that want it.

use crate::error::Result;
use crate::models::CardCatalog;
use flate2::read::GzDecoder;
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

/// Decode a catalog from any reader, falling back to an empty catalog.
pub fn load<R: Read>(reader: R) -> CardCatalog {
    fail_soft(try_load(reader), "reader")
}

/// Decode a catalog from an in-memory asset (e.g. `include_bytes!`).
pub fn load_slice(bytes: &[u8]) -> CardCatalog {
    fail_soft(try_load_slice(bytes), "embedded asset")
}

/// Load a catalog file (handles `.gz` transparently), falling back to an
/// empty catalog.
pub fn load_path<P: AsRef<Path>>(path: P) -> CardCatalog {
    let path = path.as_ref();
    fail_soft(try_load_path(path), &path.display().to_string())
}

/// Decode a catalog from a reader, surfacing I/O and JSON errors.
pub fn try_load<R: Read>(reader: R) -> Result<CardCatalog> {
    let catalog: CardCatalog = serde_json::from_reader(BufReader::new(reader))?;
    Ok(catalog)
}

pub fn try_load_slice(bytes: &[u8]) -> Result<CardCatalog> {
    let catalog: CardCatalog = serde_json::from_slice(bytes)?;
    Ok(catalog)
}

/// Load a catalog file, surfacing errors.
///
/// Files whose extension is `gz` are decompressed before decoding.
pub fn try_load_path<P: AsRef<Path>>(path: P) -> Result<CardCatalog> {
    let path = path.as_ref();
    let file = fs::File::open(path)?;

    if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        try_load(GzDecoder::new(BufReader::new(file)))
    } else {
        try_load(file)
    }
}

fn fail_soft(result: Result<CardCatalog>, source: &str) -> CardCatalog {
    match result {
        Ok(catalog) => {
            log::debug!(
                "Loaded {} cards from {} (declared total {})",
                catalog.cards.len(),
                source,
                catalog.total_count
            );
            if catalog.total_count > catalog.cards.len() as i64 {
                log::debug!(
                    "Catalog {} declares {} cards but only {} are bundled",
                    source,
                    catalog.total_count,
                    catalog.cards.len()
                );
            }
            catalog
        }
        Err(e) => {
            log::error!("Failed to load card catalog from {}: {}", source, e);
            CardCatalog::default()
        }
    }
}
