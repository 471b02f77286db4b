//! Card catalog loading and feature derivation.
//!
//! The dataset is read once, missing cells normalized to empty strings, and
//! the seven benefit flags computed per card. Nothing here mutates after
//! [`CardCatalog::from_path`] returns, so the catalog is safe to share across
//! concurrent requests without locking.

mod features;
mod parser;

pub use features::{FeatureFlags, FeatureKind, FEATURE_COUNT, FEATURE_ORDER};

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

/// One catalog row plus its derived benefit flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    pub issuer: String,
    /// Raw fee text; "Not specified" and other non-numeric values are legal.
    pub annual_fee: String,
    pub joining_fee: String,
    pub min_credit_score: u16,
    pub min_income: f64,
    pub reward_structure: String,
    pub premium_services: String,
    pub travel_benefits: String,
    pub lifestyle_benefits: String,
    pub ideal_for: String,
    pub features: FeatureFlags,
}

impl CardRecord {
    /// Numeric annual fee when the text parses, `None` when unspecified.
    pub fn annual_fee_amount(&self) -> Option<f64> {
        self.annual_fee.trim().parse::<f64>().ok()
    }
}

/// Immutable, feature-augmented card dataset.
#[derive(Debug, Clone)]
pub struct CardCatalog {
    cards: Vec<CardRecord>,
}

impl CardCatalog {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::DatasetNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(file)?;
        info!(cards = catalog.len(), path = %path.display(), "card catalog loaded");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let cards = parser::parse_records(reader)?;
        Ok(Self { cards })
    }

    /// Build a catalog from already-materialized records, e.g. in tests or
    /// when the dataset comes from somewhere other than a CSV file.
    pub fn from_cards(cards: Vec<CardRecord>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }
}

/// Failures while loading the dataset. `DatasetNotFound` is fatal for the
/// recommender; the API surfaces it as service-unavailable.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("card dataset '{path}' not found")]
    DatasetNotFound { path: PathBuf },
    #[error("failed to read card dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid card dataset: {0}")]
    Csv(#[from] csv::Error),
}
