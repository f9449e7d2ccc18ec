//! Inbound commands and the command history.
//!
//! Every accepted command is recorded. Replaying the history on a new
//! session with the same seed and catalogs reproduces the same state.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// A player-issued command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Play the card at a hand index.
    PlayCard(usize),
    EndTurn,
    SelectReward(CardId),
    SkipReward,
    /// Move on from victory, defeat, or a won game.
    ContinueRun,
    AbandonRun,
}

/// An accepted command with its position in the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    pub command: Command,

    /// Encounter number (starts at 1, reset by a new run).
    pub encounter: u32,

    /// Player turn number within the encounter (starts at 1).
    pub turn: u32,

    /// Position in the whole history.
    pub sequence: u32,
}

impl CommandRecord {
    #[must_use]
    pub fn new(command: Command, encounter: u32, turn: u32, sequence: u32) -> Self {
        Self {
            command,
            encounter,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let record = CommandRecord::new(Command::PlayCard(2), 1, 3, 7);
        assert_eq!(record.command, Command::PlayCard(2));
        assert_eq!(record.encounter, 1);
        assert_eq!(record.turn, 3);
        assert_eq!(record.sequence, 7);
    }

    #[test]
    fn test_record_serialization() {
        let record = CommandRecord::new(Command::SelectReward(CardId::new(14)), 2, 1, 9);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: CommandRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
