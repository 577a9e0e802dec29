//! UN M.49 country-to-region table.
//!
//! Loaded from `standards/un_m49.csv` at the workspace root (overridable
//! via `MDQ_STANDARDS_DIR`). Each country maps to its direct M.49 region
//! ("Eastern Africa", not the parent "Sub-Saharan Africa" or "Africa").
//! Lookups accept a country name or ISO 3166 alpha-2/alpha-3 code,
//! case-insensitively.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use mdq_model::RegionResolver;

use crate::error::Result;

/// Get the standards root directory.
pub fn default_standards_root() -> PathBuf {
    if let Ok(root) = std::env::var("MDQ_STANDARDS_DIR") {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}

/// Load the bundled UN M.49 region table.
pub fn load_default_region_table() -> Result<UnM49Table> {
    UnM49Table::load(&default_standards_root().join("un_m49.csv"))
}

#[derive(Debug, Deserialize)]
struct RegionRow {
    name: String,
    #[serde(default)]
    alpha2: String,
    #[serde(default)]
    alpha3: String,
    region: String,
}

#[derive(Debug, Default, Clone)]
pub struct UnM49Table {
    by_key: BTreeMap<String, String>,
}

impl UnM49Table {
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut table = Self::default();
        for row in reader.deserialize() {
            let row: RegionRow = row?;
            table.add(&row.name, &row.region);
            table.add(&row.alpha2, &row.region);
            table.add(&row.alpha3, &row.region);
        }
        debug!(path = %path.display(), keys = table.by_key.len(), "region table loaded");
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    fn add(&mut self, key: &str, region: &str) {
        let key = key.trim().to_lowercase();
        if key.is_empty() {
            return;
        }
        self.by_key.insert(key, region.to_string());
    }
}

impl RegionResolver for UnM49Table {
    fn region_of(&self, country: &str) -> Option<String> {
        self.by_key.get(&country.trim().to_lowercase()).cloned()
    }
}
