//! Card registry for definition lookup and reward draws.
//!
//! The `CardRegistry` stores every card definition a run can see: the
//! starter deck, the reward pools, and the status cards monsters inject.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::definition::{CardDefinition, CardId, Rarity};
use crate::core::{GameRng, RarityWeights};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use spire_engine::cards::{CardRegistry, CardDefinition, CardId, CardType};
///
/// let mut registry = CardRegistry::new();
/// registry.register(
///     CardDefinition::new(CardId::new(1), "strike", "Strike", CardType::Attack)
///         .with_cost(1)
///         .with_damage(6),
/// );
///
/// assert_eq!(registry.lookup(CardId::new(1)).damage, 6);
/// assert_eq!(registry.find_by_slug("strike").unwrap().id, CardId::new(1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
    slugs: FxHashMap<String, CardId>,
    /// Rewardable card ids per rarity, in registration order.
    by_rarity: FxHashMap<Rarity, Vec<CardId>>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID or slug already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        if self.slugs.contains_key(&card.slug) {
            panic!("Card with slug '{}' already registered", card.slug);
        }

        self.slugs.insert(card.slug.clone(), card.id);
        if card.is_rewardable() {
            self.by_rarity.entry(card.rarity).or_default().push(card.id);
        }
        self.cards.insert(card.id, card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition by ID, panicking if not found.
    ///
    /// An unknown id means a pile holds a card the catalog never issued.
    #[must_use]
    pub fn lookup(&self, id: CardId) -> &CardDefinition {
        match self.cards.get(&id) {
            Some(card) => card,
            None => panic!("{} not found in card registry", id),
        }
    }

    /// Find a card by its slug.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&CardDefinition> {
        self.slugs.get(slug).and_then(|id| self.cards.get(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Rewardable cards of a rarity, in registration order.
    #[must_use]
    pub fn rarity_pool(&self, rarity: Rarity) -> &[CardId] {
        self.by_rarity.get(&rarity).map_or(&[], |v| v.as_slice())
    }

    /// Roll `count` reward cards.
    ///
    /// Each slot independently rolls a rarity from `weights`, then picks a
    /// card uniformly within that rarity. Slots may repeat a card. A rarity
    /// with no cards falls back to the common pool.
    pub fn reward_draw(&self, count: usize, weights: &RarityWeights, rng: &mut GameRng) -> Vec<CardId> {
        let mut rewards = Vec::with_capacity(count);

        for _ in 0..count {
            let rarity = weights.pick(rng.roll());
            let pool = match self.rarity_pool(rarity) {
                [] => self.rarity_pool(Rarity::Common),
                pool => pool,
            };
            if let Some(&card) = rng.choose(pool) {
                rewards.push(card);
            }
        }

        debug!(?rewards, "rolled card rewards");
        rewards
    }
}
