//! Recommendation catalog: the two read-only lookup tables.
//!
//! Built once at startup, either from the compiled-in tables below or from a
//! JSON file named by `EVREC_CATALOG_PATH`, then shared as `Arc<Catalog>`.
//! Nothing mutates a catalog after construction.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Manufacturer value that selects the brand-agnostic table.
pub const WILDCARD_MANUFACTURER: &str = "all";

/// manufacturer → [(style, sentence)]
const MANUFACTURER_TABLE: &[(&str, &[(&str, &str)])] = &[
    (
        "chery",
        &[
            (
                "sporty",
                "Chery Omoda E5 - The perfect sporty EV that’s stylish and versatile for any urban adventure. It’s a bold choice for anyone with a vibrant personality!",
            ),
            (
                "luxury",
                "Chery iCar 03 - Elegant yet compact, perfect for those who value sophistication and a refined sense of style.",
            ),
        ],
    ),
    (
        "tesla",
        &[
            (
                "sporty",
                "Tesla Model 3 Performance - A high-tech and futuristic ride, ideal for someone in a fast-paced job who loves speed and innovation!",
            ),
            (
                "luxury",
                "Tesla Model S - A luxurious experience with cutting-edge technology, perfect for making a statement in any industry.",
            ),
        ],
    ),
    (
        "bmw",
        &[
            (
                "sporty",
                "BMW i4 M50 - Sporty and sleek, it’s the perfect choice for the professional who demands both style and performance.",
            ),
            (
                "luxury",
                "BMW iX - A luxurious EV SUV that’s as powerful as it is comfortable, perfect for those who want both prestige and practicality.",
            ),
        ],
    ),
    (
        "wuling",
        &[
            (
                "economic",
                "Wuling Air EV - An eco-friendly choice that’s practical, efficient, and designed for those who appreciate simplicity and value.",
            ),
            (
                "sporty",
                "Wuling Bingo - A compact and fun EV that’s easy to drive, ideal for the urban professional who loves a little flair on the go!",
            ),
        ],
    ),
];

/// style → sentence, used when the manufacturer is `"all"`.
const ALL_MANUFACTURERS_TABLE: &[(&str, &str)] = &[
    (
        "sporty",
        "Tesla Model 3 Performance - Known for its speed and futuristic design, perfect for a professional who enjoys a high-tech, thrilling ride!",
    ),
    (
        "luxury",
        "BMW iX - A luxurious EV SUV that brings both prestige and comfort, ideal for a stylish professional.",
    ),
    (
        "economic",
        "Wuling Air EV - Compact, affordable, and eco-friendly, it’s the perfect choice for those who value practicality and sustainability.",
    ),
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog entry {manufacturer}/{style} has an empty recommendation")]
    EmptySentence { manufacturer: String, style: String },

    #[error("'all' is reserved and cannot be used as a manufacturer key")]
    ReservedManufacturer,
}

/// Both recommendation tables, keyed by lowercase names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    manufacturers: HashMap<String, HashMap<String, String>>,
    #[serde(default)]
    all_manufacturers: HashMap<String, String>,
}

impl Catalog {
    /// The compiled-in tables.
    pub fn builtin() -> Self {
        let manufacturers = MANUFACTURER_TABLE
            .iter()
            .map(|(manufacturer, styles)| {
                let styles = styles
                    .iter()
                    .map(|(style, sentence)| (style.to_string(), sentence.to_string()))
                    .collect();
                (manufacturer.to_string(), styles)
            })
            .collect();

        let all_manufacturers = ALL_MANUFACTURERS_TABLE
            .iter()
            .map(|(style, sentence)| (style.to_string(), sentence.to_string()))
            .collect();

        Self {
            manufacturers,
            all_manufacturers,
        }
    }

    /// Parses a catalog from JSON, lowercasing keys and validating entries.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let parsed: Catalog = serde_json::from_str(raw)?;
        parsed.normalized()
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    fn normalized(self) -> Result<Self, CatalogError> {
        let mut manufacturers: HashMap<String, HashMap<String, String>> = HashMap::new();
        for (manufacturer, styles) in self.manufacturers {
            let manufacturer = manufacturer.to_lowercase();
            if manufacturer == WILDCARD_MANUFACTURER {
                return Err(CatalogError::ReservedManufacturer);
            }
            let slot = manufacturers.entry(manufacturer.clone()).or_default();
            for (style, sentence) in styles {
                let style = style.to_lowercase();
                if sentence.trim().is_empty() {
                    return Err(CatalogError::EmptySentence {
                        manufacturer,
                        style,
                    });
                }
                slot.insert(style, sentence);
            }
        }

        let mut all_manufacturers = HashMap::new();
        for (style, sentence) in self.all_manufacturers {
            let style = style.to_lowercase();
            if sentence.trim().is_empty() {
                return Err(CatalogError::EmptySentence {
                    manufacturer: WILDCARD_MANUFACTURER.to_string(),
                    style,
                });
            }
            all_manufacturers.insert(style, sentence);
        }

        Ok(Self {
            manufacturers,
            all_manufacturers,
        })
    }

    /// Sentence for a manufacturer/style pair. Both keys must already be lowercase.
    pub fn for_manufacturer(&self, manufacturer: &str, style: &str) -> Option<&str> {
        self.manufacturers
            .get(manufacturer)
            .and_then(|styles| styles.get(style))
            .map(String::as_str)
    }

    /// Sentence from the brand-agnostic table.
    pub fn for_any_manufacturer(&self, style: &str) -> Option<&str> {
        self.all_manufacturers.get(style).map(String::as_str)
    }

    pub fn manufacturer_count(&self) -> usize {
        self.manufacturers.len()
    }

    pub fn entry_count(&self) -> usize {
        self.manufacturers.values().map(HashMap::len).sum::<usize>() + self.all_manufacturers.len()
    }
}
