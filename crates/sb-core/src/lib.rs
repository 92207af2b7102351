//! Core data for Starboard: charms, houses, combinations, and the catalog.
//!
//! Everything here is static, immutable table data. The reading engine in
//! `sb-oracle` draws from a [`Catalog`] and never mutates it.

/// The validated bundle of charm, house, and combination tables.
pub mod catalog;
/// Charm identifiers, rarity tiers, and categories.
pub mod charm;
/// Multi-charm combinations and their priority tiers.
pub mod combination;
/// Error types used throughout the crate.
pub mod error;
/// The twelve-house wheel.
pub mod house;
/// Built-in table data.
pub mod tables;

/// Re-export the catalog.
pub use catalog::Catalog;
/// Re-export charm types.
pub use charm::{Charm, CharmCategory, CharmId, CharmRarity};
/// Re-export combination types.
pub use combination::{CharmCombination, CombinationCategory, CombinationRarity};
/// Re-export error types.
pub use error::{CatalogError, CatalogResult};
/// Re-export house types.
pub use house::{HOUSE_COUNT, House, house_for_position};
