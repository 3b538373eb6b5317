//! Organelle reference text: title, description, and function per
//! organelle, keyed by [`OrganelleId`]. Feeds the overlay UI's reference
//! panel and the floating selection labels.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::OrganelleId;
use crate::error::PlasmacyteError;

/// Embedded catalog source, shipped with the crate.
const CATALOG_JSON: &str = include_str!("../../assets/organelles.json");

/// Reference text for one organelle.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OrganelleInfo {
    /// Display title ("Golgi Apparatus").
    pub title: String,
    /// What the structure is.
    pub description: String,
    /// What the structure does in a plasma cell.
    pub function: String,
}

/// The full reference catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: FxHashMap<OrganelleId, OrganelleInfo>,
}

impl Catalog {
    /// Parse the embedded catalog and verify it covers every organelle.
    pub fn load_embedded() -> Result<Self, PlasmacyteError> {
        let entries: FxHashMap<OrganelleId, OrganelleInfo> =
            serde_json::from_str(CATALOG_JSON)
                .map_err(|e| PlasmacyteError::Catalog(e.to_string()))?;
        for id in OrganelleId::ALL {
            if !entries.contains_key(&id) {
                return Err(PlasmacyteError::Catalog(format!(
                    "missing catalog entry for '{}'",
                    id.name()
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Reference text for an organelle.
    #[must_use]
    pub fn get(&self, id: OrganelleId) -> &OrganelleInfo {
        // load_embedded verified coverage of every id
        &self.entries[&id]
    }

    /// Number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty (it never is after a successful load).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
