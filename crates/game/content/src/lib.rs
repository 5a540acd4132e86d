//! Data-driven spell content and loaders.
//!
//! This crate provides loaders for the RON/TOML data files the targeting
//! engine runs against:
//! - Spell catalog (spells, units, tile types, damage types, city effects,
//!   buildings, vortex units, movement rules) via RON
//! - Targeting configuration via TOML
//!
//! It also checks a loaded catalog for dangling references, so a spell that
//! names a unit or tile type the catalog does not define is reported when the
//! content is built rather than as an oracle error mid-game.
//!
//! All loaders use spell-core types directly with serde for deserialization.

pub mod validate;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use validate::{CatalogIssue, validate_catalog};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, DatabaseLoader, SpellCatalog};
