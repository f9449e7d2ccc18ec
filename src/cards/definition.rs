//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: Strike costs 1
//! and deals 6 damage no matter which copy is played. Piles only hold
//! `CardId`s; everything else is looked up here.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// Identifies the kind of card (e.g. "Strike"), not a copy in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Attack,
    Skill,
    Power,
    /// Junk added to the deck by monsters.
    Status,
}

/// Reward rarity. `Status` cards are never offered as rewards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Status,
}

/// Energy cost of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardCost {
    Energy(i64),
    /// Can never be played; only leaves the hand at end of turn.
    Unplayable,
}

impl CardCost {
    /// Energy needed, or `None` if the card cannot be played.
    #[must_use]
    pub fn energy(self) -> Option<i64> {
        match self {
            CardCost::Energy(cost) => Some(cost),
            CardCost::Unplayable => None,
        }
    }
}

/// Non-additive card effects.
///
/// These change how the damage or healing steps of play resolution are
/// computed; they never reorder the steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardEffect {
    /// Damage equals the player's block when the card is played.
    DamageEqualsBlock,
    /// Damage equals `per_card` for every other card in hand.
    DamagePerCardInHand { per_card: i64 },
    /// Heal HP equal to the unblocked damage dealt.
    HealEqualsDamage,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use spire_engine::cards::{CardCost, CardDefinition, CardId, CardType, Rarity};
///
/// let iron_wave = CardDefinition::new(CardId::new(7), "iron_wave", "Iron Wave", CardType::Attack)
///     .with_cost(1)
///     .with_damage(5)
///     .with_block(5)
///     .with_rarity(Rarity::Common);
///
/// assert_eq!(iron_wave.cost, CardCost::Energy(1));
/// assert_eq!(iron_wave.damage, 5);
/// assert!(iron_wave.is_playable());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier.
    pub id: CardId,

    /// Stable text key used by configuration (e.g. "strike").
    pub slug: String,

    /// Display name.
    pub name: String,

    pub card_type: CardType,
    pub rarity: Rarity,
    pub cost: CardCost,

    /// Damage dealt to the monster.
    pub damage: i64,

    /// Block gained by the player.
    pub block: i64,

    /// Cards drawn.
    pub draw: usize,

    /// Direct HP change to the player; bypasses block.
    pub hp_change: i64,

    /// Goes to the exhaust pile instead of the discard pile when played.
    pub exhaust: bool,

    /// Exhausted if still in hand at end of turn.
    pub ethereal: bool,

    /// Damage to the player if still in hand at end of turn.
    pub end_turn_damage: i64,

    pub effect: Option<CardEffect>,

    pub description: String,
}

impl CardDefinition {
    /// Create a zero-cost card with no effects.
    #[must_use]
    pub fn new(id: CardId, slug: impl Into<String>, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: name.into(),
            card_type,
            rarity: Rarity::Common,
            cost: CardCost::Energy(0),
            damage: 0,
            block: 0,
            draw: 0,
            hp_change: 0,
            exhaust: false,
            ethereal: false,
            end_turn_damage: 0,
            effect: None,
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: i64) -> Self {
        self.cost = CardCost::Energy(cost);
        self
    }

    #[must_use]
    pub fn unplayable(mut self) -> Self {
        self.cost = CardCost::Unplayable;
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_damage(mut self, damage: i64) -> Self {
        self.damage = damage;
        self
    }

    #[must_use]
    pub fn with_block(mut self, block: i64) -> Self {
        self.block = block;
        self
    }

    #[must_use]
    pub fn with_draw(mut self, draw: usize) -> Self {
        self.draw = draw;
        self
    }

    #[must_use]
    pub fn with_hp_change(mut self, delta: i64) -> Self {
        self.hp_change = delta;
        self
    }

    #[must_use]
    pub fn exhaust(mut self) -> Self {
        self.exhaust = true;
        self
    }

    #[must_use]
    pub fn ethereal(mut self) -> Self {
        self.ethereal = true;
        self
    }

    #[must_use]
    pub fn with_end_turn_damage(mut self, damage: i64) -> Self {
        self.end_turn_damage = damage;
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: CardEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Can this card ever be played?
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.cost != CardCost::Unplayable
    }

    /// Can this card be offered as a reward?
    #[must_use]
    pub fn is_rewardable(&self) -> bool {
        self.rarity != Rarity::Status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_defaults() {
        let card = CardDefinition::new(CardId::new(1), "test", "Test", CardType::Skill);
        assert_eq!(card.cost, CardCost::Energy(0));
        assert_eq!(card.rarity, Rarity::Common);
        assert!(!card.exhaust);
        assert!(!card.ethereal);
        assert!(card.effect.is_none());
        assert!(card.is_playable());
        assert!(card.is_rewardable());
    }

    #[test]
    fn test_unplayable_status() {
        let burn = CardDefinition::new(CardId::new(2), "burn", "Burn", CardType::Status)
            .unplayable()
            .with_rarity(Rarity::Status)
            .with_end_turn_damage(2);

        assert!(!burn.is_playable());
        assert!(!burn.is_rewardable());
        assert_eq!(burn.cost.energy(), None);
        assert_eq!(burn.end_turn_damage, 2);
    }

    #[test]
    fn test_effect_builder() {
        let card = CardDefinition::new(CardId::new(3), "body_slam", "Body Slam", CardType::Attack)
            .with_cost(1)
            .with_effect(CardEffect::DamageEqualsBlock);

        assert_eq!(card.effect, Some(CardEffect::DamageEqualsBlock));
        assert_eq!(card.cost.energy(), Some(1));
    }

    #[test]
    fn test_card_definition_serialization() {
        let card = CardDefinition::new(CardId::new(1), "strike", "Strike", CardType::Attack)
            .with_cost(1)
            .with_damage(6)
            .with_effect(CardEffect::DamagePerCardInHand { per_card: 2 });

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
