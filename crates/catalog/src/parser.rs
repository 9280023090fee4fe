//! Parser for catalog documents.
//!
//! A catalog is a single JSON document:
//!
//! ```text
//! {
//!   "categories": ["tea", "coffee", "water"],   // optional
//!   "focuses":    [ { "id", "label", "tagline", "benefits" }, ... ],
//!   "drinks":     [ { "id", "category", "name", "description",
//!                     "flavor_notes", "ingredients", "preparation",
//!                     "health_benefits", "image"? }, ... ]
//! }
//! ```
//!
//! Category and icon tags are closed sets; an unknown tag is a parse error.

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// The catalog shipped with this crate
pub(crate) const EMBEDDED_CATALOG: &str = include_str!("../data/drinks.json");

/// Raw catalog document, before indexing and validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Declared categories. When present, every drink must use one of them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<DrinkCategory>,
    #[serde(default)]
    pub focuses: Vec<HealthFocus>,
    pub drinks: Vec<Drink>,
}

/// Parse a catalog document from a JSON string
///
/// `source_name` only shows up in error messages
pub fn parse_catalog_str(json: &str, source_name: &str) -> Result<CatalogDocument> {
    serde_json::from_str(json).map_err(|e| CatalogError::ParseError {
        source_name: source_name.to_string(),
        line: e.line(),
        column: e.column(),
        reason: e.to_string(),
    })
}

/// Parse a catalog document from a file
pub fn parse_catalog_file(path: &Path) -> Result<CatalogDocument> {
    let json = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;
    parse_catalog_str(&json, &path.display().to_string())
}
