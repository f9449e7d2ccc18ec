//! Game phases and turns.

use serde::{Deserialize, Serialize};

/// Phase of a run.
///
/// `Defeat` and `GameWon` are terminal: only starting a new run leaves them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Fighting a monster.
    Combat,
    /// Monster defeated or fled; waiting for the reward choice.
    Victory,
    /// Player died.
    Defeat,
    /// Player reached the win level.
    GameWon,
}

impl GamePhase {
    /// Is this phase the end of the run?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Defeat | GamePhase::GameWon)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Combat => "combat",
            GamePhase::Victory => "victory",
            GamePhase::Defeat => "defeat",
            GamePhase::GameWon => "game won",
        };
        f.write_str(name)
    }
}

/// Whose turn it is during combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Turn {
    Player,
    Monster,
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::Player => f.write_str("player"),
            Turn::Monster => f.write_str("monster"),
        }
    }
}
