//! Error types for the catalog crate.
//!
//! Only loading and validating a catalog can fail. Once a `Catalog`
//! exists, every query over it is total.

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be found
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog document is not valid JSON or doesn't match the schema
    ///
    /// `source_name` is the catalog's origin (a file path or "embedded")
    #[error("Parse error in {source_name} at line {line}, column {column}: {reason}")]
    ParseError {
        source_name: String,
        line: usize,
        column: usize,
        reason: String,
    },

    /// Two entries share an id that must be unique
    #[error("Duplicate {entity} id: {id}")]
    DuplicateId { entity: String, id: String },

    /// A drink lists the same ingredient twice
    #[error("Drink {drink_id} lists ingredient {name} more than once")]
    DuplicateIngredient { drink_id: String, name: String },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
