//! The four card piles of a combat: draw, hand, discard, exhaust.
//!
//! `Piles` only moves card ids around. It never looks at what a card does.
//! Every operation conserves the total number of cards across the four piles
//! except `add_to_discard`, which is how monsters inject status cards.
//!
//! Piles use `im::Vector` so that snapshots and cloned sessions share
//! structure instead of copying every pile.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::CardId;
use crate::core::GameRng;

/// Names the four piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pile {
    Draw,
    Hand,
    Discard,
    Exhaust,
}

/// Card piles for one combat.
///
/// The draw pile's top is its last element. The hand is ordered by draw
/// order; hand indices are positions in that order.
///
/// ## Usage
///
/// ```
/// use spire_engine::cards::CardId;
/// use spire_engine::core::GameRng;
/// use spire_engine::zones::{Pile, Piles};
///
/// let mut rng = GameRng::new(42);
/// let deck = vec![CardId::new(1); 10];
/// let mut piles = Piles::from_deck(&deck, &mut rng);
///
/// assert_eq!(piles.draw(5, &mut rng), 5);
/// assert_eq!(piles.len(Pile::Hand), 5);
///
/// piles.discard_hand();
/// assert_eq!(piles.len(Pile::Discard), 5);
/// assert_eq!(piles.total(), 10);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    draw: Vector<CardId>,
    hand: Vector<CardId>,
    discard: Vector<CardId>,
    exhaust: Vector<CardId>,
}

impl Piles {
    /// Create empty piles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create piles with explicit contents. The last draw card is the top.
    #[must_use]
    pub fn from_parts(
        draw: impl IntoIterator<Item = CardId>,
        hand: impl IntoIterator<Item = CardId>,
        discard: impl IntoIterator<Item = CardId>,
        exhaust: impl IntoIterator<Item = CardId>,
    ) -> Self {
        Self {
            draw: draw.into_iter().collect(),
            hand: hand.into_iter().collect(),
            discard: discard.into_iter().collect(),
            exhaust: exhaust.into_iter().collect(),
        }
    }

    /// Create piles with the whole deck shuffled into the draw pile.
    #[must_use]
    pub fn from_deck(deck: &[CardId], rng: &mut GameRng) -> Self {
        let mut piles = Self::new();
        piles.reset_from_deck(deck, rng);
        piles
    }

    /// Empty every pile and shuffle the deck into the draw pile.
    pub fn reset_from_deck(&mut self, deck: &[CardId], rng: &mut GameRng) {
        let mut cards = deck.to_vec();
        rng.shuffle(&mut cards);

        self.draw = cards.into_iter().collect();
        self.hand.clear();
        self.discard.clear();
        self.exhaust.clear();
    }

    /// Get a pile.
    #[must_use]
    pub fn pile(&self, pile: Pile) -> &Vector<CardId> {
        match pile {
            Pile::Draw => &self.draw,
            Pile::Hand => &self.hand,
            Pile::Discard => &self.discard,
            Pile::Exhaust => &self.exhaust,
        }
    }

    /// Number of cards in a pile.
    #[must_use]
    pub fn len(&self, pile: Pile) -> usize {
        self.pile(pile).len()
    }

    /// Cards in hand, in order.
    #[must_use]
    pub fn hand(&self) -> &Vector<CardId> {
        &self.hand
    }

    /// Number of cards across all four piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.draw.len() + self.hand.len() + self.discard.len() + self.exhaust.len()
    }

    /// Draw up to `count` cards into the hand, one at a time.
    ///
    /// When the draw pile runs out the discard pile is shuffled into it. If
    /// both are empty, drawing stops early. Returns the number drawn.
    pub fn draw(&mut self, count: usize, rng: &mut GameRng) -> usize {
        let mut drawn = 0;

        for _ in 0..count {
            if self.draw.is_empty() {
                if self.discard.is_empty() {
                    debug!(requested = count, drawn, "no cards left to draw");
                    break;
                }
                self.shuffle_discard_into_draw(rng);
            }

            if let Some(card) = self.draw.pop_back() {
                self.hand.push_back(card);
                drawn += 1;
            }
        }

        drawn
    }

    /// Shuffle the discard pile and place it under the draw pile.
    ///
    /// Called when the draw pile is empty, which makes the draw pile exactly
    /// the shuffled discard pile.
    pub fn shuffle_discard_into_draw(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<CardId> = self.discard.iter().copied().collect();
        rng.shuffle(&mut cards);
        debug!(count = cards.len(), "shuffled discard pile into draw pile");

        let mut draw: Vector<CardId> = cards.into_iter().collect();
        draw.append(std::mem::take(&mut self.draw));
        self.draw = draw;
        self.discard.clear();
    }

    /// Move the whole hand to the discard pile.
    pub fn discard_hand(&mut self) {
        let hand = std::mem::take(&mut self.hand);
        self.discard.append(hand);
    }

    /// Card at a hand index.
    ///
    /// Panics if the index is out of range.
    #[must_use]
    pub fn card_in_hand(&self, index: usize) -> CardId {
        match self.hand.get(index) {
            Some(&card) => card,
            None => panic!("hand index {} out of range (hand has {} cards)", index, self.hand.len()),
        }
    }

    /// Move a card from the hand to the discard pile.
    ///
    /// Panics if the index is out of range.
    pub fn discard_from_hand(&mut self, index: usize) -> CardId {
        let card = self.take_from_hand(index);
        self.discard.push_back(card);
        card
    }

    /// Move a card from the hand to the exhaust pile.
    ///
    /// Panics if the index is out of range.
    pub fn exhaust_from_hand(&mut self, index: usize) -> CardId {
        let card = self.take_from_hand(index);
        self.exhaust.push_back(card);
        card
    }

    /// Put `count` new copies of a card on the discard pile.
    pub fn add_to_discard(&mut self, card: CardId, count: usize) {
        for _ in 0..count {
            self.discard.push_back(card);
        }
    }

    fn take_from_hand(&mut self, index: usize) -> CardId {
        let card = self.card_in_hand(index);
        self.hand.remove(index);
        card
    }
}
