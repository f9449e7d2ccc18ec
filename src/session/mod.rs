//! Combat sessions: the turn state machine, commands, and snapshots.
//!
//! ## Key Types
//!
//! - `CombatSession`: Owns one run; validates and applies inbound operations
//! - `GamePhase` / `Turn`: Where the run is
//! - `Command` / `CommandRecord`: Accepted operations, replayable
//! - `SessionSnapshot`: Serializable view for rendering

pub mod phase;
pub mod command;
pub mod state;
pub mod snapshot;

pub use phase::{GamePhase, Turn};
pub use command::{Command, CommandRecord};
pub use state::{CombatSession, PlayOutcome, TurnOutcome};
pub use snapshot::{
    HandCardView, IntentView, MonsterView, PileCounts, PlayerView, RewardView, SessionSnapshot,
};
