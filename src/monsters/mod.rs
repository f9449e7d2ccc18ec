//! Monsters: intents, templates, the catalog, and encounter selection.
//!
//! ## Key Types
//!
//! - `Intent`: One weighted move; `IntentKind` is its primary effect
//! - `MonsterTemplate`: Immutable catalog data
//! - `Monster`: A fresh owned instance in combat
//! - `MonsterCatalog`: Templates plus per-tier encounter pools

pub mod intent;
pub mod template;
pub mod catalog;

pub use crate::core::Tier;
pub use catalog::{standard_monsters, MonsterCatalog};
pub use intent::{roll_intent, AddCard, Buff, Debuff, Intent, IntentIcon, IntentKind, SpecialMove};
pub use template::{Monster, MonsterId, MonsterTemplate};
