//! Render-ready views of a session.
//!
//! Snapshots resolve card ids to definitions, clamp health to zero for
//! display, and precompute playability and intent damage so a UI never
//! needs the rules.

use serde::{Deserialize, Serialize};

use super::phase::{GamePhase, Turn};
use super::state::CombatSession;
use crate::cards::{CardCost, CardId, CardType, Rarity};
use crate::combat::{Player, Statuses};
use crate::monsters::{IntentIcon, IntentKind, Monster};
use crate::zones::Pile;

/// Serializable view of a whole session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: GamePhase,
    pub turn: Turn,
    pub encounter: u32,
    pub turn_number: u32,
    pub player: PlayerView,
    pub monster: Option<MonsterView>,
    pub hand: Vec<HandCardView>,
    pub piles: PileCounts,
    pub deck_size: usize,
    pub rewards: Vec<RewardView>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub level: u32,
    /// Clamped to 0.
    pub health: i64,
    pub max_health: i64,
    pub energy: i64,
    pub max_energy: i64,
    pub block: i64,
    pub statuses: Statuses,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonsterView {
    pub name: String,
    pub sprite: String,
    /// Clamped to 0.
    pub health: i64,
    pub max_health: i64,
    pub block: i64,
    pub elite: bool,
    pub boss: bool,
    pub statuses: Statuses,
    pub intent: IntentView,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntentView {
    pub name: String,
    pub icon: IntentIcon,
    pub description: String,
    /// Damage per hit after both sides' statuses, for attacks.
    pub damage: Option<i64>,
    pub hits: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandCardView {
    pub index: usize,
    pub id: CardId,
    pub name: String,
    pub cost: CardCost,
    pub card_type: CardType,
    pub description: String,
    /// Playable right now: right phase and turn, affordable, not unplayable.
    pub playable: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileCounts {
    pub draw: usize,
    pub hand: usize,
    pub discard: usize,
    pub exhaust: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardView {
    pub id: CardId,
    pub name: String,
    pub rarity: Rarity,
    pub cost: CardCost,
    pub card_type: CardType,
    pub description: String,
}

impl SessionSnapshot {
    /// Capture the current state of a session.
    #[must_use]
    pub fn capture(session: &CombatSession) -> Self {
        let cards = session.cards();
        let piles = session.piles();

        let hand = piles
            .hand()
            .iter()
            .enumerate()
            .map(|(index, &id)| {
                let card = cards.lookup(id);
                HandCardView {
                    index,
                    id,
                    name: card.name.clone(),
                    cost: card.cost,
                    card_type: card.card_type,
                    description: card.description.clone(),
                    playable: session.is_playable(index),
                }
            })
            .collect();

        let rewards = session
            .rewards()
            .iter()
            .map(|&id| {
                let card = cards.lookup(id);
                RewardView {
                    id,
                    name: card.name.clone(),
                    rarity: card.rarity,
                    cost: card.cost,
                    card_type: card.card_type,
                    description: card.description.clone(),
                }
            })
            .collect();

        Self {
            phase: session.phase(),
            turn: session.turn(),
            encounter: session.encounter(),
            turn_number: session.turn_number(),
            player: PlayerView::from_player(session.player()),
            monster: session
                .monster()
                .map(|monster| MonsterView::from_monster(monster, session.player())),
            hand,
            piles: PileCounts {
                draw: piles.len(Pile::Draw),
                hand: piles.len(Pile::Hand),
                discard: piles.len(Pile::Discard),
                exhaust: piles.len(Pile::Exhaust),
            },
            deck_size: session.deck().len(),
            rewards,
        }
    }
}

impl PlayerView {
    fn from_player(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            level: player.level,
            health: player.health.max(0),
            max_health: player.max_health,
            energy: player.energy,
            max_energy: player.max_energy,
            block: player.block,
            statuses: player.statuses,
        }
    }
}

impl MonsterView {
    fn from_monster(monster: &Monster, player: &Player) -> Self {
        let intent = monster.current_intent();
        let (damage, hits) = match intent.kind {
            IntentKind::Attack { damage, hits } => {
                let per_hit = player.statuses.incoming_damage(monster.statuses.outgoing_damage(damage));
                (Some(per_hit), hits)
            }
            IntentKind::Buff | IntentKind::Debuff | IntentKind::Special(_) => (None, 0),
        };

        Self {
            name: monster.name.clone(),
            sprite: monster.sprite.clone(),
            health: monster.health.max(0),
            max_health: monster.max_health,
            block: monster.block,
            elite: monster.elite,
            boss: monster.boss,
            statuses: monster.statuses,
            intent: IntentView {
                name: intent.name.clone(),
                icon: intent.icon(),
                description: intent.description.clone(),
                damage,
                hits,
            },
        }
    }
}
