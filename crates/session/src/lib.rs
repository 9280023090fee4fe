//! Session crate for the brew guide.
//!
//! This crate holds the per-user browsing state that coordinates the
//! catalog, the recommendation filter and the blend accumulator.

pub mod browse;

pub use browse::{BrowseSession, DEFAULT_CATEGORY};
