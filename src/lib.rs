//! # spire-engine
//!
//! Combat engine for a single-player, turn-based deckbuilding card battler.
//! The player climbs levels by defeating one monster per encounter with a
//! deck of cards, picks a card reward after each win, and wins the run on
//! reaching the win level.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven Content**: Cards and monsters are catalog data. Rules
//!    only see `CardDefinition` and `Intent`; special behavior goes through
//!    closed enums matched exhaustively.
//!
//! 2. **Caller-Owned State**: A `CombatSession` owns everything mutable.
//!    Catalogs are immutable and shared through `Arc`. There are no globals.
//!
//! 3. **Deterministic**: All randomness comes from seeded ChaCha8 streams.
//!    The same seed and command history reproduce the same run.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Piles and history use `im` vectors, so
//!   cloning a session is cheap.
//!
//! - **Rejections Are Values**: Disallowed actions return `ActionRejected`
//!   and change nothing. Invalid references (unknown ids, bad hand indices)
//!   panic.
//!
//! ## Modules
//!
//! - `core`: RNG, run configuration, errors
//! - `cards`: Card definitions, registry, the standard catalog
//! - `monsters`: Intents, templates, catalog, encounter selection
//! - `zones`: Draw, hand, discard and exhaust piles
//! - `combat`: Player, statuses, damage, the combat resolver
//! - `session`: Turn state machine, commands, snapshots

pub mod core;
pub mod cards;
pub mod monsters;
pub mod zones;
pub mod combat;
pub mod session;

// Re-export commonly used types
pub use crate::core::{ActionRejected, ConfigError, GameRng, RunConfig, Tier, TierTable};

pub use crate::cards::{CardCost, CardDefinition, CardEffect, CardId, CardRegistry, CardType, Rarity};

pub use crate::monsters::{Intent, IntentKind, Monster, MonsterCatalog, MonsterId, MonsterTemplate};

pub use crate::zones::{Pile, Piles};

pub use crate::combat::{CombatResolver, DamageEvent, Player, Side, Statuses};

pub use crate::session::{CombatSession, Command, CommandRecord, GamePhase, SessionSnapshot, Turn};
