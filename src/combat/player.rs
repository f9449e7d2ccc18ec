//! The player combatant.

use serde::{Deserialize, Serialize};

use super::status::Statuses;

/// Player stats. Health carries over between encounters; block and energy
/// are reset every turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub level: u32,
    /// May go below zero transiently; zero or less means defeat.
    pub health: i64,
    pub max_health: i64,
    pub energy: i64,
    pub max_energy: i64,
    pub block: i64,
    pub statuses: Statuses,
}

impl Player {
    /// Create a level 1 player at full health and energy.
    #[must_use]
    pub fn new(name: impl Into<String>, max_health: i64, max_energy: i64) -> Self {
        Self {
            name: name.into(),
            level: 1,
            health: max_health,
            max_health,
            energy: max_energy,
            max_energy,
            block: 0,
            statuses: Statuses::default(),
        }
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Reset block and energy for a new turn.
    pub fn start_turn(&mut self) {
        self.block = 0;
        self.energy = self.max_energy;
    }

    /// Change health directly, bypassing block. Gains are capped at max
    /// health. Returns the applied change.
    pub fn change_health(&mut self, delta: i64) -> i64 {
        let before = self.health;
        self.health = if delta > 0 {
            (self.health + delta).min(self.max_health.max(self.health))
        } else {
            self.health + delta
        };
        self.health - before
    }
}
