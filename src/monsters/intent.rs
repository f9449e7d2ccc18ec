//! Monster intents - the moves a monster telegraphs one turn ahead.
//!
//! An `Intent` has a primary `IntentKind` plus optional riders (block gain,
//! buff, debuff, added cards) that apply whatever the kind is. A monster's
//! moveset is an ordered list of weighted intents.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cards::CardId;
use crate::combat::{BuffKind, DebuffKind};
use crate::core::GameRng;

/// Copies of a card put into the player's discard pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCard {
    pub card: CardId,
    pub count: usize,
}

/// A buff the monster gives itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buff {
    pub kind: BuffKind,
    pub amount: i64,
}

/// A debuff the monster puts on the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debuff {
    pub kind: DebuffKind,
    pub amount: i64,
}

/// Moves that are neither attacks nor status changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecialMove {
    /// The monster flees; the encounter ends without a reward.
    Escape,
    /// Asleep; does nothing.
    Sleep,
    /// Winding up; does nothing this turn.
    Charge,
}

/// Primary effect of an intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentKind {
    /// `hits` separate hits of `damage` each.
    Attack { damage: i64, hits: u32 },
    Buff,
    Debuff,
    Special(SpecialMove),
}

/// Icon tag shown above the monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentIcon {
    Attack,
    AttackBuff,
    AttackDebuff,
    AttackDefend,
    Buff,
    Defend,
    Debuff,
    Escape,
    Sleep,
    Charge,
}

/// One weighted move in a moveset.
///
/// ## Example
///
/// ```
/// use spire_engine::combat::BuffKind;
/// use spire_engine::monsters::{Intent, IntentIcon};
///
/// let bellow = Intent::buff("Bellow", 0.3)
///     .with_buff(BuffKind::Strength, 3)
///     .with_block(6);
///
/// assert_eq!(bellow.block_gain, 6);
/// assert_eq!(bellow.icon(), IntentIcon::Buff);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,

    /// Selection weight. Weights of a registered moveset sum to 1.0.
    pub weight: f64,

    pub kind: IntentKind,

    /// Block the monster gains.
    pub block_gain: i64,

    pub buff: Option<Buff>,
    pub debuff: Option<Debuff>,
    pub add_card: Option<AddCard>,

    pub description: String,
}

impl Intent {
    fn with_kind(name: impl Into<String>, weight: f64, kind: IntentKind) -> Self {
        Self {
            name: name.into(),
            weight,
            kind,
            block_gain: 0,
            buff: None,
            debuff: None,
            add_card: None,
            description: String::new(),
        }
    }

    /// A single-hit attack.
    #[must_use]
    pub fn attack(name: impl Into<String>, weight: f64, damage: i64) -> Self {
        Self::multi_attack(name, weight, damage, 1)
    }

    /// An attack hitting `hits` times.
    #[must_use]
    pub fn multi_attack(name: impl Into<String>, weight: f64, damage: i64, hits: u32) -> Self {
        Self::with_kind(name, weight, IntentKind::Attack { damage, hits })
    }

    #[must_use]
    pub fn buff(name: impl Into<String>, weight: f64) -> Self {
        Self::with_kind(name, weight, IntentKind::Buff)
    }

    #[must_use]
    pub fn debuff(name: impl Into<String>, weight: f64) -> Self {
        Self::with_kind(name, weight, IntentKind::Debuff)
    }

    #[must_use]
    pub fn special(name: impl Into<String>, weight: f64, special: SpecialMove) -> Self {
        Self::with_kind(name, weight, IntentKind::Special(special))
    }

    #[must_use]
    pub fn with_block(mut self, block: i64) -> Self {
        self.block_gain = block;
        self
    }

    #[must_use]
    pub fn with_buff(mut self, kind: BuffKind, amount: i64) -> Self {
        self.buff = Some(Buff { kind, amount });
        self
    }

    #[must_use]
    pub fn with_debuff(mut self, kind: DebuffKind, amount: i64) -> Self {
        self.debuff = Some(Debuff { kind, amount });
        self
    }

    #[must_use]
    pub fn with_added_card(mut self, card: CardId, count: usize) -> Self {
        self.add_card = Some(AddCard { card, count });
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Damage per hit, if this is an attack.
    #[must_use]
    pub fn damage(&self) -> Option<i64> {
        match self.kind {
            IntentKind::Attack { damage, .. } => Some(damage),
            _ => None,
        }
    }

    /// Icon derived from the kind and riders.
    #[must_use]
    pub fn icon(&self) -> IntentIcon {
        match self.kind {
            IntentKind::Attack { .. } if self.debuff.is_some() || self.add_card.is_some() => IntentIcon::AttackDebuff,
            IntentKind::Attack { .. } if self.buff.is_some() => IntentIcon::AttackBuff,
            IntentKind::Attack { .. } if self.block_gain > 0 => IntentIcon::AttackDefend,
            IntentKind::Attack { .. } => IntentIcon::Attack,
            IntentKind::Buff if self.buff.is_none() && self.block_gain > 0 => IntentIcon::Defend,
            IntentKind::Buff => IntentIcon::Buff,
            IntentKind::Debuff => IntentIcon::Debuff,
            IntentKind::Special(SpecialMove::Escape) => IntentIcon::Escape,
            IntentKind::Special(SpecialMove::Sleep) => IntentIcon::Sleep,
            IntentKind::Special(SpecialMove::Charge) => IntentIcon::Charge,
        }
    }
}

/// Pick an intent index from a moveset.
///
/// Draws uniformly in `[0, 1)` and returns the first intent whose cumulative
/// weight exceeds the draw. If rounding leaves the weights short of the draw,
/// the last intent is returned.
///
/// Panics if the moveset is empty.
pub fn roll_intent(moveset: &[Intent], rng: &mut GameRng) -> usize {
    assert!(!moveset.is_empty(), "cannot roll an intent from an empty moveset");

    let roll = rng.roll();
    let mut cumulative = 0.0;
    for (index, intent) in moveset.iter().enumerate() {
        cumulative += intent.weight;
        if roll < cumulative {
            return index;
        }
    }

    warn!(roll, cumulative, "intent weights fell short of roll, using last intent");
    moveset.len() - 1
}

/// Scale weights so they sum to 1.0.
///
/// Panics if the weights do not have a positive, finite sum.
pub fn normalize_weights(moveset: &mut [Intent]) {
    let total: f64 = moveset.iter().map(|intent| intent.weight).sum();
    assert!(
        total.is_finite() && total > 0.0,
        "moveset weights must have a positive sum, got {}",
        total
    );

    for intent in moveset.iter_mut() {
        intent.weight /= total;
    }
}
