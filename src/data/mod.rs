//! Startup data set: catalog, reviews, directory tables and the user's
//! bookings and order chats.
//!
//! The data set is read once before the shell starts. Parsing is pure; only
//! `load_dataset` touches the filesystem.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::error::DataError;
use crate::model::{
    Booking, CatalogItem, Directory, OrderChat, Party, Review, SellerProfile,
};

/// Bundled demo data used when no data file exists
const DEMO_JSON: &str = include_str!("../../data/demo.json");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub catalog_items: Vec<CatalogItem>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub sellers: Vec<SellerProfile>,
    #[serde(default)]
    pub parties: Vec<Party>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub order_chats: Vec<OrderChat>,
}

impl Dataset {
    /// Split into the state slice and the router's lookup directory.
    pub fn apply(self, state: &mut AppState) -> Directory {
        state.catalog_items = self.catalog_items;
        state.reviews = self.reviews;
        state.bookings = self.bookings;
        state.order_chats = self.order_chats;
        Directory {
            sellers: self.sellers,
            parties: self.parties,
        }
    }
}

pub fn parse_dataset(content: &str) -> Result<Dataset, DataError> {
    Ok(serde_json::from_str(content)?)
}

/// The bundled demo data set.
pub fn demo_dataset() -> Result<Dataset, DataError> {
    parse_dataset(DEMO_JSON)
}

pub fn load_dataset(path: &Path) -> Result<Dataset, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_dataset(&content)
}

/// Load `path` when it exists, otherwise the demo data set.
/// A file that exists but fails to parse is still an error.
pub fn load_or_demo(path: &Path) -> Result<Dataset, DataError> {
    if path.exists() {
        tracing::info!(path = %path.display(), "loading data set");
        load_dataset(path)
    } else {
        tracing::info!(path = %path.display(), "no data set found, using demo data");
        demo_dataset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PartyId, SellerId};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn demo_dataset_parses() {
        let dataset = demo_dataset().unwrap();
        assert!(!dataset.catalog_items.is_empty());
        assert!(!dataset.sellers.is_empty());
        assert_eq!(dataset.order_chats[0].messages.len(), 2);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let dataset = parse_dataset(r#"{"catalogItems": []}"#).unwrap();
        assert_eq!(dataset, Dataset::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(parse_dataset("{nope"), Err(DataError::Json(_))));
    }

    #[test]
    fn load_dataset_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"sellers": [{{"id": 3, "name": "Rita"}}], "parties": []}}"#
        )
        .unwrap();
        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.sellers[0].name, "Rita");
    }

    #[test]
    fn load_dataset_reports_path_on_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        match load_dataset(&path) {
            Err(DataError::Io { path: reported, .. }) => assert!(reported.ends_with("absent.json")),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn load_or_demo_falls_back_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = load_or_demo(&dir.path().join("absent.json")).unwrap();
        assert_eq!(dataset, demo_dataset().unwrap());
    }

    #[test]
    fn apply_splits_state_and_directory() {
        let mut state = AppState::new();
        let directory = demo_dataset().unwrap().apply(&mut state);
        assert!(!state.catalog_items.is_empty());
        assert!(!state.bookings.is_empty());
        assert!(directory.seller(SellerId::new(10)).is_some());
        assert!(directory.party(PartyId::new(42)).is_some());
    }
}
