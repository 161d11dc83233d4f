use std::path::PathBuf;
use std::time::Duration;

/// Shown wherever a card has no usable image URL.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// File name of the bundled Wilds of Eldraine card list.
pub const DEFAULT_ASSET_NAME: &str = "WOT-Scryfall.json";

/// Horizontal drag distance (points) past which a swipe navigates.
pub const SWIPE_THRESHOLD: f64 = 100.0;

pub const USER_AGENT: &str = concat!("manabox-cards/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_IMAGE_TIMEOUT: Duration = Duration::from_secs(30);

pub fn default_asset_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("manabox-cards")
    } else {
        PathBuf::from(".manabox-cards")
    }
}

pub fn default_asset_path() -> PathBuf {
    default_asset_dir().join(DEFAULT_ASSET_NAME)
}
