//! Monster templates and the monster instances spawned from them.
//!
//! Templates are immutable catalog data. `instantiate` makes a fresh owned
//! `Monster` with its own health, block and statuses, so fighting a monster
//! never touches the template it came from.

use serde::{Deserialize, Serialize};

use super::intent::{roll_intent, Intent};
use crate::combat::Statuses;
use crate::core::GameRng;

/// Unique identifier for a monster template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonsterId(pub u16);

impl MonsterId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for MonsterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Monster({})", self.0)
    }
}

/// Static monster data.
///
/// ## Example
///
/// ```
/// use spire_engine::core::GameRng;
/// use spire_engine::monsters::{Intent, MonsterId, MonsterTemplate};
///
/// let template = MonsterTemplate::new(MonsterId::new(1), "dummy", "Training Dummy", 20)
///     .with_intent(Intent::attack("Poke", 1.0, 3));
///
/// let mut rng = GameRng::new(7);
/// let monster = template.instantiate(&mut rng);
/// assert_eq!(monster.health, 20);
/// assert_eq!(monster.current_intent().name, "Poke");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub id: MonsterId,

    /// Stable text key (e.g. "jaw_worm").
    pub key: String,

    pub name: String,
    pub sprite: String,
    pub max_health: i64,

    /// Block at the start of the encounter.
    pub block: i64,

    pub elite: bool,
    pub boss: bool,

    /// Block is not cleared at the start of the monster's turn.
    pub retains_block: bool,

    pub moveset: Vec<Intent>,
}

impl MonsterTemplate {
    /// Create a template with no moves.
    #[must_use]
    pub fn new(id: MonsterId, key: impl Into<String>, name: impl Into<String>, max_health: i64) -> Self {
        Self {
            id,
            key: key.into(),
            name: name.into(),
            sprite: String::new(),
            max_health,
            block: 0,
            elite: false,
            boss: false,
            retains_block: false,
            moveset: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = sprite.into();
        self
    }

    #[must_use]
    pub fn with_block(mut self, block: i64) -> Self {
        self.block = block;
        self
    }

    #[must_use]
    pub fn elite(mut self) -> Self {
        self.elite = true;
        self
    }

    #[must_use]
    pub fn boss(mut self) -> Self {
        self.boss = true;
        self
    }

    #[must_use]
    pub fn retains_block(mut self) -> Self {
        self.retains_block = true;
        self
    }

    /// Append an intent to the moveset.
    #[must_use]
    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.moveset.push(intent);
        self
    }

    /// Spawn a fresh monster with its first intent rolled.
    ///
    /// Panics if the moveset is empty.
    #[must_use]
    pub fn instantiate(&self, rng: &mut GameRng) -> Monster {
        let intent = roll_intent(&self.moveset, rng);
        Monster {
            template: self.id,
            name: self.name.clone(),
            sprite: self.sprite.clone(),
            health: self.max_health,
            max_health: self.max_health,
            block: self.block,
            elite: self.elite,
            boss: self.boss,
            retains_block: self.retains_block,
            statuses: Statuses::default(),
            escaped: false,
            moveset: self.moveset.clone(),
            intent,
        }
    }
}

/// A monster in combat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    /// Template this monster was spawned from.
    pub template: MonsterId,
    pub name: String,
    pub sprite: String,
    /// May go below zero transiently; zero or less means dead.
    pub health: i64,
    pub max_health: i64,
    pub block: i64,
    pub elite: bool,
    pub boss: bool,
    pub retains_block: bool,
    pub statuses: Statuses,
    /// Set when the monster fled.
    pub escaped: bool,
    moveset: Vec<Intent>,
    intent: usize,
}

impl Monster {
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    #[must_use]
    pub fn moveset(&self) -> &[Intent] {
        &self.moveset
    }

    /// The intent the monster will execute on its next turn.
    #[must_use]
    pub fn current_intent(&self) -> &Intent {
        &self.moveset[self.intent]
    }

    #[must_use]
    pub fn intent_index(&self) -> usize {
        self.intent
    }

    /// Force the next intent.
    ///
    /// Panics if the index is outside the moveset.
    pub fn set_intent(&mut self, index: usize) {
        assert!(
            index < self.moveset.len(),
            "intent index {} out of range for {} ({} moves)",
            index,
            self.name,
            self.moveset.len()
        );
        self.intent = index;
    }

    pub fn roll_next_intent(&mut self, rng: &mut GameRng) {
        self.intent = roll_intent(&self.moveset, rng);
    }

    /// Start-of-turn upkeep: drop block unless retained, apply ritual.
    pub fn begin_turn(&mut self) {
        if !self.retains_block {
            self.block = 0;
        }
        self.statuses.gain_ritual_strength();
    }
}
