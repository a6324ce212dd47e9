//! Data fetching and storage
//!
//! Handles:
//! - Yahoo Finance chart API for daily price history (free)
//! - Local caching for offline reruns

pub mod cache;
pub mod yahoo;

pub use cache::*;
pub use yahoo::*;
