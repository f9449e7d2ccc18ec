//! Combat rules: the player, statuses, damage, and the resolver.
//!
//! ## Key Types
//!
//! - `Player`: Health, energy, block, statuses
//! - `Statuses`: Buff and debuff counters with their damage/block modifiers
//! - `DamageEvent`: One resolved hit; `DamageFlashes` for one-shot UI feedback
//! - `CombatResolver`: Card plays, monster turns, end-of-turn processing

pub mod status;
pub mod player;
pub mod event;
pub mod resolver;

pub use status::{BuffKind, DebuffKind, Statuses};
pub use player::Player;
pub use event::{resolve_damage, DamageEvent, DamageEvents, DamageFlashes, Side};
pub use resolver::{CardPlay, CombatResolver, MonsterAction, ResolverContext};
