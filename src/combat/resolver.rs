//! Combat resolution - applying cards and intents to combat state.
//!
//! `CombatResolver` knows the rules; it does not know about phases, turns
//! or rewards. The session checks those first, then hands the resolver a
//! `ResolverContext` borrowing exactly the state a rule may touch.

use tracing::debug;

use super::event::{resolve_damage, DamageEvents, Side};
use super::player::Player;
use crate::cards::{CardDefinition, CardEffect, CardId, CardRegistry};
use crate::core::{ActionRejected, GameRng};
use crate::monsters::{AddCard, IntentKind, Monster, SpecialMove};
use crate::zones::Piles;

/// Mutable combat state borrowed for one resolution.
pub struct ResolverContext<'a> {
    pub cards: &'a CardRegistry,
    pub player: &'a mut Player,
    pub monster: &'a mut Monster,
    pub piles: &'a mut Piles,
    /// Stream for shuffles triggered by draws.
    pub rng: &'a mut GameRng,
}

/// What a card play did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardPlay {
    pub card: CardId,
    pub energy_spent: i64,
    pub events: DamageEvents,
    pub block_gained: i64,
    pub drawn: usize,
    /// Applied HP change, after the max-health cap.
    pub health_change: i64,
    pub exhausted: bool,
}

/// What a monster turn did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonsterAction {
    /// Name of the executed intent.
    pub intent: String,
    pub events: DamageEvents,
    pub block_gained: i64,
    pub cards_added: Option<AddCard>,
    pub escaped: bool,
}

/// Applies cards and intents.
pub struct CombatResolver;

impl CombatResolver {
    /// Check whether the card at `hand_index` can be played right now.
    ///
    /// Panics if the index is out of range.
    pub fn check_play<'c>(
        cards: &'c CardRegistry,
        player: &Player,
        piles: &Piles,
        hand_index: usize,
    ) -> Result<&'c CardDefinition, ActionRejected> {
        let card = piles.card_in_hand(hand_index);
        let definition = cards.lookup(card);

        let cost = definition.cost.energy().ok_or(ActionRejected::Unplayable(card))?;
        if cost > player.energy {
            return Err(ActionRejected::InsufficientEnergy {
                cost,
                available: player.energy,
            });
        }

        Ok(definition)
    }

    /// Play the card at `hand_index`.
    ///
    /// Effects apply in a fixed order: pay energy, deal damage, gain block,
    /// draw, change HP, then move the card to the exhaust or discard pile.
    /// A rejected play changes nothing.
    pub fn play_card(ctx: &mut ResolverContext<'_>, hand_index: usize) -> Result<CardPlay, ActionRejected> {
        let definition = Self::check_play(ctx.cards, ctx.player, ctx.piles, hand_index)?;
        let card = definition.id;
        let cost = definition.cost.energy().unwrap_or(0);

        // 1. Energy
        ctx.player.energy -= cost;

        // 2. Damage
        let mut events = DamageEvents::new();
        if let Some(base) = Self::base_damage(definition, ctx.player, ctx.piles) {
            let amount = ctx.monster.statuses.incoming_damage(ctx.player.statuses.outgoing_damage(base));
            events.push(resolve_damage(
                Side::Player,
                Side::Monster,
                amount,
                &mut ctx.monster.block,
                &mut ctx.monster.health,
            ));
        }

        // 3. Block
        let block_gained = if definition.block > 0 {
            ctx.player.statuses.block_gain(definition.block)
        } else {
            0
        };
        ctx.player.block += block_gained;

        // 4. Draw
        let drawn = if definition.draw > 0 {
            ctx.piles.draw(definition.draw, ctx.rng)
        } else {
            0
        };

        // 5. HP change
        let mut health_change = 0;
        if definition.hp_change != 0 {
            health_change += ctx.player.change_health(definition.hp_change);
        }
        if definition.effect == Some(CardEffect::HealEqualsDamage) {
            let dealt: i64 = events.iter().map(|event| event.dealt).sum();
            if dealt > 0 {
                health_change += ctx.player.change_health(dealt);
            }
        }

        // 6. Leave the hand
        let exhausted = definition.exhaust;
        if exhausted {
            ctx.piles.exhaust_from_hand(hand_index);
        } else {
            ctx.piles.discard_from_hand(hand_index);
        }

        debug!(
            card = %definition.name,
            cost,
            damage = events.iter().map(|e| e.dealt).sum::<i64>(),
            block_gained,
            drawn,
            health_change,
            exhausted,
            "played card"
        );

        Ok(CardPlay {
            card,
            energy_spent: cost,
            events,
            block_gained,
            drawn,
            health_change,
            exhausted,
        })
    }

    /// Damage before statuses, or `None` for cards that do not attack.
    fn base_damage(definition: &CardDefinition, player: &Player, piles: &Piles) -> Option<i64> {
        let base = match definition.effect {
            Some(CardEffect::DamageEqualsBlock) => player.block,
            Some(CardEffect::DamagePerCardInHand { per_card }) => {
                let others = piles.hand().len().saturating_sub(1) as i64;
                per_card * others
            }
            Some(CardEffect::HealEqualsDamage) | None => definition.damage,
        };
        (base > 0).then_some(base)
    }

    /// Run the monster's turn: upkeep, then its current intent.
    ///
    /// The primary effect follows the intent kind. The player's vulnerable
    /// then counts down, and riders (block, buff, debuff, added cards) apply
    /// for every kind.
    pub fn monster_act(ctx: &mut ResolverContext<'_>) -> MonsterAction {
        ctx.monster.begin_turn();

        let intent = ctx.monster.current_intent().clone();
        let mut events = DamageEvents::new();
        let mut escaped = false;

        match intent.kind {
            IntentKind::Attack { damage, hits } => {
                for _ in 0..hits {
                    let amount = ctx.player.statuses.incoming_damage(ctx.monster.statuses.outgoing_damage(damage));
                    events.push(resolve_damage(
                        Side::Monster,
                        Side::Player,
                        amount,
                        &mut ctx.player.block,
                        &mut ctx.player.health,
                    ));
                }
            }
            IntentKind::Buff | IntentKind::Debuff => {}
            IntentKind::Special(SpecialMove::Escape) => {
                ctx.monster.escaped = true;
                escaped = true;
            }
            IntentKind::Special(SpecialMove::Sleep | SpecialMove::Charge) => {}
        }

        // Before riders, so a fresh Vulnerable survives until the next attack.
        ctx.player.statuses.tick_vulnerable();

        ctx.monster.block += intent.block_gain;
        if let Some(buff) = intent.buff {
            ctx.monster.statuses.apply_buff(buff.kind, buff.amount);
        }
        if let Some(debuff) = intent.debuff {
            ctx.player.statuses.apply_debuff(debuff.kind, debuff.amount);
        }
        if let Some(add) = intent.add_card {
            ctx.piles.add_to_discard(add.card, add.count);
        }

        debug!(
            monster = %ctx.monster.name,
            intent = %intent.name,
            damage = events.iter().map(|e| e.dealt).sum::<i64>(),
            escaped,
            "monster acted"
        );

        MonsterAction {
            intent: intent.name,
            events,
            block_gained: intent.block_gain,
            cards_added: intent.add_card,
            escaped,
        }
    }

    /// End-of-turn processing of the hand, then weak and frail count down.
    ///
    /// Cards with end-of-turn damage hurt the player through block, ethereal
    /// cards are exhausted, and everything else is discarded.
    pub fn end_player_turn(ctx: &mut ResolverContext<'_>) -> DamageEvents {
        let mut events = DamageEvents::new();
        let mut ethereal = Vec::new();

        for (index, &card) in ctx.piles.hand().iter().enumerate() {
            let definition = ctx.cards.lookup(card);
            if definition.end_turn_damage > 0 {
                events.push(resolve_damage(
                    Side::Player,
                    Side::Player,
                    definition.end_turn_damage,
                    &mut ctx.player.block,
                    &mut ctx.player.health,
                ));
            }
            if definition.ethereal {
                ethereal.push(index);
            }
        }

        for &index in ethereal.iter().rev() {
            ctx.piles.exhaust_from_hand(index);
        }
        ctx.piles.discard_hand();
        ctx.player.statuses.tick();

        debug!(exhausted = ethereal.len(), end_turn_damage = events.len(), "ended player turn");
        events
    }
}
