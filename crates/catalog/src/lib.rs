//! # Catalog Crate
//!
//! This crate loads and indexes the beverage recipe catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Drink, Ingredient, HealthFocus, Catalog)
//! - **parser**: Parse the JSON catalog document
//! - **index**: Build, validate and query the in-memory `Catalog`
//! - **caffeine**: Caffeine estimate per drink
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, DrinkCategory};
//!
//! // The catalog that ships with the crate
//! let catalog = Catalog::embedded()?;
//!
//! for drink in catalog.drinks_in(DrinkCategory::Tea) {
//!     println!("{} ({})", drink.name, drink.caffeine_level());
//! }
//! ```
//!
//! A catalog is immutable once built. Share it with `Arc<Catalog>`.

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod caffeine;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use caffeine::CaffeineLevel;
pub use parser::CatalogDocument;
pub use types::{
    // Type aliases
    DrinkId,
    FocusId,
    // Core types
    Catalog,
    Drink,
    HealthFocus,
    Ingredient,
    // Enums
    DrinkCategory,
    IngredientIcon,
};
