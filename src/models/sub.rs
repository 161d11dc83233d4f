use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ImageUris
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
    pub large: Option<String>,
    #[serde(rename = "png")]
    pub png_full_res: Option<String>,
    pub art_crop: Option<String>,
    pub border_crop: Option<String>,
}

// ---------------------------------------------------------------------------
// Legalities
// ---------------------------------------------------------------------------

/// Per-format legality. Statuses (`"legal"`, `"not_legal"`, `"banned"`, ...)
/// are passed through as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Legalities {
    pub standard: Option<String>,
    pub future: Option<String>,
    pub historic: Option<String>,
    pub timeless: Option<String>,
    pub gladiator: Option<String>,
    pub pioneer: Option<String>,
    pub explorer: Option<String>,
    pub modern: Option<String>,
    pub legacy: Option<String>,
    pub pauper: Option<String>,
    pub vintage: Option<String>,
    pub penny: Option<String>,
    pub commander: Option<String>,
    pub oathbreaker: Option<String>,
    pub standardbrawl: Option<String>,
    pub brawl: Option<String>,
    pub historicbrawl: Option<String>,
    pub alchemy: Option<String>,
    pub paupercommander: Option<String>,
    pub duel: Option<String>,
    pub oldschool: Option<String>,
    pub premodern: Option<String>,
    pub predh: Option<String>,
}

impl Legalities {
    /// `(format, status)` pairs for every format present, in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let formats: [(&'static str, &Option<String>); 23] = [
            ("standard", &self.standard),
            ("future", &self.future),
            ("historic", &self.historic),
            ("timeless", &self.timeless),
            ("gladiator", &self.gladiator),
            ("pioneer", &self.pioneer),
            ("explorer", &self.explorer),
            ("modern", &self.modern),
            ("legacy", &self.legacy),
            ("pauper", &self.pauper),
            ("vintage", &self.vintage),
            ("penny", &self.penny),
            ("commander", &self.commander),
            ("oathbreaker", &self.oathbreaker),
            ("standardbrawl", &self.standardbrawl),
            ("brawl", &self.brawl),
            ("historicbrawl", &self.historicbrawl),
            ("alchemy", &self.alchemy),
            ("paupercommander", &self.paupercommander),
            ("duel", &self.duel),
            ("oldschool", &self.oldschool),
            ("premodern", &self.premodern),
            ("predh", &self.predh),
        ];

        formats
            .into_iter()
            .filter_map(|(format, status)| status.as_deref().map(|s| (format, s)))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Prices
// ---------------------------------------------------------------------------

/// Display prices. Never parsed as numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prices {
    pub usd: Option<String>,
    pub usd_foil: Option<String>,
    pub usd_etched: Option<String>,
    pub eur: Option<String>,
    pub eur_foil: Option<String>,
    pub tix: Option<String>,
}

// ---------------------------------------------------------------------------
// RelatedUris
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedUris {
    pub gatherer: Option<String>,
    pub tcgplayer_infinite_articles: Option<String>,
    pub tcgplayer_infinite_decks: Option<String>,
    pub edhrec: Option<String>,
}

// ---------------------------------------------------------------------------
// PurchaseUris
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseUris {
    pub tcgplayer: Option<String>,
    pub cardmarket: Option<String>,
    pub cardhoarder: Option<String>,
}
