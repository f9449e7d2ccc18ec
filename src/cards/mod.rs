//! Card system: definitions, registry, and the standard catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardDefinition`: Static card data (cost, damage, block, flags)
//! - `CardEffect`: Closed set of non-additive effects
//! - `CardRegistry`: Lookup and reward draws
//!
//! Piles store `CardId`s only. Two Strikes in a deck are the same id twice.

pub mod definition;
pub mod registry;
pub mod catalog;

pub use definition::{CardCost, CardDefinition, CardEffect, CardId, CardType, Rarity};
pub use registry::CardRegistry;
pub use catalog::{ids, standard_cards};
