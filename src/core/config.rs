//! Run configuration.
//!
//! A run is configured at startup by providing a `RunConfig`:
//! - Player starting stats (health, energy, hand size)
//! - Progression (win level, level → monster tier table)
//! - Rewards (number of choices, rarity weights)
//! - The starter deck, named by card slug
//!
//! Defaults reproduce the standard game. Configs can also be loaded from
//! TOML; missing keys fall back to the defaults.
//!
//! ```
//! use spire_engine::core::{RunConfig, Tier};
//!
//! let config = RunConfig::from_toml_str(r#"
//!     starting_health = 50
//!     hand_size = 6
//! "#).unwrap();
//!
//! assert_eq!(config.starting_health, 50);
//! assert_eq!(config.hand_size, 6);
//! assert_eq!(config.max_energy, 3);
//! assert_eq!(config.tiers.tier_for(1), Tier::Easy);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::{CardId, CardRegistry, Rarity};
use crate::monsters::MonsterCatalog;

/// Level at which defeating a monster wins the run.
pub const WIN_LEVEL: u32 = 10;

/// Cards drawn at the start of every player turn.
pub const HAND_SIZE: usize = 5;

/// Starting (and maximum) player health.
pub const STARTING_HEALTH: i64 = 80;

/// Energy restored at the start of every player turn.
pub const STARTING_ENERGY: i64 = 3;

/// Monster difficulty tier. Each tier has its own encounter pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Easy,
    Normal,
    Elite,
    Boss,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tier::Easy => "easy",
            Tier::Normal => "normal",
            Tier::Elite => "elite",
            Tier::Boss => "boss",
        };
        f.write_str(name)
    }
}

/// One row of the tier table: levels up to and including `up_to_level`
/// (and above the previous row) fight monsters of `tier`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBand {
    pub up_to_level: u32,
    pub tier: Tier,
}

/// Level → tier lookup table.
///
/// Bands are checked in order; levels past the last band use the last band's
/// tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierTable {
    bands: Vec<TierBand>,
}

impl TierTable {
    /// Create a table from bands in ascending level order.
    #[must_use]
    pub fn new(bands: Vec<TierBand>) -> Self {
        Self { bands }
    }

    /// Tier for a player level.
    ///
    /// Panics if the table is empty; `RunConfig::validate` rejects that.
    #[must_use]
    pub fn tier_for(&self, level: u32) -> Tier {
        let band = self
            .bands
            .iter()
            .find(|band| level <= band.up_to_level)
            .or_else(|| self.bands.last());
        match band {
            Some(band) => band.tier,
            None => panic!("tier table has no bands"),
        }
    }

    /// Tiers reachable at levels `1..level`, in band order.
    ///
    /// Walks bands rather than levels, so a huge `level` costs nothing extra.
    #[must_use]
    pub fn tiers_before(&self, level: u32) -> Vec<Tier> {
        let mut tiers = Vec::new();
        // Lowest level not covered by an earlier band.
        let mut next = 1;
        for band in &self.bands {
            if next >= level {
                break;
            }
            if band.up_to_level >= next {
                tiers.push(band.tier);
                next = band.up_to_level.saturating_add(1);
            }
        }
        if next < level {
            if let Some(last) = self.bands.last() {
                tiers.push(last.tier);
            }
        }
        tiers
    }

    /// The configured bands.
    #[must_use]
    pub fn bands(&self) -> &[TierBand] {
        &self.bands
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::new(vec![
            TierBand { up_to_level: 3, tier: Tier::Easy },
            TierBand { up_to_level: 6, tier: Tier::Normal },
            TierBand { up_to_level: 9, tier: Tier::Elite },
            TierBand { up_to_level: u32::MAX, tier: Tier::Boss },
        ])
    }
}

/// Rarity weights for reward slots. Weights are relative; they do not need
/// to sum to 1.0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RarityWeights {
    pub common: f64,
    pub uncommon: f64,
    pub rare: f64,
}

impl Default for RarityWeights {
    fn default() -> Self {
        Self {
            common: 0.75,
            uncommon: 0.20,
            rare: 0.05,
        }
    }
}

impl RarityWeights {
    /// Map a uniform roll in `[0, 1)` to a rarity.
    #[must_use]
    pub fn pick(&self, roll: f64) -> Rarity {
        let total = self.common + self.uncommon + self.rare;
        let scaled = roll * total;
        if scaled < self.common {
            Rarity::Common
        } else if scaled < self.common + self.uncommon {
            Rarity::Uncommon
        } else {
            Rarity::Rare
        }
    }

    fn is_valid(&self) -> bool {
        let weights = [self.common, self.uncommon, self.rare];
        weights.iter().all(|w| w.is_finite() && *w >= 0.0) && weights.iter().sum::<f64>() > 0.0
    }
}

/// Complete run configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Display name of the player.
    pub player_name: String,

    /// Starting and maximum health.
    pub starting_health: i64,

    /// Energy restored each player turn.
    pub max_energy: i64,

    /// Cards drawn each player turn.
    pub hand_size: usize,

    /// Reaching this level by defeating a monster wins the run.
    pub win_level: u32,

    /// Number of cards offered after each victory.
    pub reward_choices: usize,

    /// Rarity weights for reward slots.
    pub rarity_weights: RarityWeights,

    /// Level → monster tier table.
    pub tiers: TierTable,

    /// Starter deck as card slugs.
    pub starter_deck: Vec<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        let mut starter_deck = Vec::new();
        starter_deck.extend(std::iter::repeat("strike".to_string()).take(5));
        starter_deck.extend(std::iter::repeat("defend".to_string()).take(4));
        starter_deck.push("bash".to_string());

        Self {
            player_name: "Player".to_string(),
            starting_health: STARTING_HEALTH,
            max_energy: STARTING_ENERGY,
            hand_size: HAND_SIZE,
            win_level: WIN_LEVEL,
            reward_choices: 3,
            rarity_weights: RarityWeights::default(),
            tiers: TierTable::default(),
            starter_deck,
        }
    }
}

impl RunConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML. Missing keys use defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Set the player name.
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Set starting health.
    #[must_use]
    pub fn with_starting_health(mut self, health: i64) -> Self {
        self.starting_health = health;
        self
    }

    /// Set per-turn energy.
    #[must_use]
    pub fn with_max_energy(mut self, energy: i64) -> Self {
        self.max_energy = energy;
        self
    }

    /// Set cards drawn per turn.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the win level.
    #[must_use]
    pub fn with_win_level(mut self, level: u32) -> Self {
        self.win_level = level;
        self
    }

    /// Set the number of reward choices.
    #[must_use]
    pub fn with_reward_choices(mut self, count: usize) -> Self {
        self.reward_choices = count;
        self
    }

    /// Set rarity weights.
    #[must_use]
    pub fn with_rarity_weights(mut self, weights: RarityWeights) -> Self {
        self.rarity_weights = weights;
        self
    }

    /// Set the tier table.
    #[must_use]
    pub fn with_tiers(mut self, tiers: TierTable) -> Self {
        self.tiers = tiers;
        self
    }

    /// Set the starter deck.
    #[must_use]
    pub fn with_starter_deck<S: Into<String>>(mut self, slugs: impl IntoIterator<Item = S>) -> Self {
        self.starter_deck = slugs.into_iter().map(Into::into).collect();
        self
    }

    /// Resolve the starter deck slugs against a registry.
    pub fn starter_cards(&self, cards: &CardRegistry) -> Result<Vec<CardId>, ConfigError> {
        self.starter_deck
            .iter()
            .map(|slug| {
                cards
                    .find_by_slug(slug)
                    .map(|def| def.id)
                    .ok_or_else(|| ConfigError::UnknownCard(slug.clone()))
            })
            .collect()
    }

    /// Check the configuration against the catalogs it will run with.
    pub fn validate(&self, cards: &CardRegistry, monsters: &MonsterCatalog) -> Result<(), ConfigError> {
        if self.starting_health <= 0 {
            return Err(ConfigError::InvalidValue("starting_health must be positive"));
        }
        if self.max_energy < 0 {
            return Err(ConfigError::InvalidValue("max_energy must not be negative"));
        }
        if self.hand_size == 0 {
            return Err(ConfigError::InvalidValue("hand_size must be at least 1"));
        }
        if self.win_level < 2 {
            return Err(ConfigError::InvalidValue("win_level must be at least 2"));
        }
        if !self.rarity_weights.is_valid() {
            return Err(ConfigError::InvalidValue("rarity weights must be non-negative with a positive sum"));
        }
        if self.tiers.bands().is_empty() {
            return Err(ConfigError::EmptyTierTable);
        }
        if self.starter_deck.is_empty() {
            return Err(ConfigError::EmptyStarterDeck);
        }
        self.starter_cards(cards)?;
        if self.reward_choices > 0 && cards.rarity_pool(Rarity::Common).is_empty() {
            return Err(ConfigError::NoCommonRewards);
        }

        // Every tier reachable before the win level needs monsters.
        for tier in self.tiers.tiers_before(self.win_level) {
            if monsters.pool(tier).is_empty() {
                return Err(ConfigError::EmptyPool(tier));
            }
        }

        Ok(())
    }
}
