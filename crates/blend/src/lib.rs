//! # Blend Crate
//!
//! Lets a user merge the ingredients of several drinks into one custom
//! blend, with per-ingredient counts, benefits and provenance, and ranks
//! the blend's combined health benefits.
//!
//! ## Example Usage
//!
//! ```ignore
//! use blend::{BlendAccumulator, DEFAULT_TOP_BENEFITS};
//!
//! let mut blend = BlendAccumulator::new();
//! blend.add_drink(catalog.get_drink("golden-root-chai").unwrap());
//! blend.add_drink(catalog.get_drink("jade-calm-matcha").unwrap());
//!
//! for total in blend.top_benefits(DEFAULT_TOP_BENEFITS) {
//!     println!("{}: {}", total.benefit, total.total);
//! }
//! ```
//!
//! The blend lives for one browsing session and is never persisted.

pub mod accumulator;

pub use accumulator::{BenefitTotal, BlendAccumulator, BlendEntry, DEFAULT_TOP_BENEFITS};
