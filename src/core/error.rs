//! Error types.
//!
//! Two kinds of failure are reported as values:
//! - `ActionRejected`: a well-formed request the rules do not allow right now
//!   (not enough energy, wrong phase). Nothing was mutated; retrying later is
//!   fine.
//! - `ConfigError`: a run configuration that cannot be used.
//!
//! Invalid references (unknown card ids, hand indices past the end of the
//! hand) mean the caller and the engine disagree about the state. Those panic.

use thiserror::Error;

use super::config::Tier;
use crate::cards::CardId;
use crate::session::{GamePhase, Turn};

/// A rejected inbound action. The session is unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRejected {
    #[error("not enough energy: card costs {cost}, {available} available")]
    InsufficientEnergy { cost: i64, available: i64 },

    #[error("{0} cannot be played")]
    Unplayable(CardId),

    #[error("action not allowed during the {0} phase")]
    WrongPhase(GamePhase),

    #[error("action not allowed during the {0} turn")]
    WrongTurn(Turn),

    #[error("{0} is not among the offered rewards")]
    NotOffered(CardId),
}

/// A run configuration that failed to load or validate.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown card '{0}' in starter deck")]
    UnknownCard(String),

    #[error("starter deck is empty")]
    EmptyStarterDeck,

    #[error("tier table is empty")]
    EmptyTierTable,

    #[error("no common cards to offer as rewards")]
    NoCommonRewards,

    #[error("no monsters registered for the {0} tier")]
    EmptyPool(Tier),

    #[error("invalid config value: {0}")]
    InvalidValue(&'static str),
}
