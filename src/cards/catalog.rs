//! The standard card catalog.

use super::definition::{CardDefinition, CardEffect, CardId, CardType, Rarity};
use super::registry::CardRegistry;

/// Ids of the standard cards.
pub mod ids {
    use super::CardId;

    // Starter cards
    pub const STRIKE: CardId = CardId::new(1);
    pub const DEFEND: CardId = CardId::new(2);
    pub const BASH: CardId = CardId::new(3);

    // Common
    pub const ANGER: CardId = CardId::new(10);
    pub const ARMAMENTS: CardId = CardId::new(11);
    pub const CLOTHESLINE: CardId = CardId::new(12);
    pub const HEADBUTT: CardId = CardId::new(13);
    pub const HEAVY_BLADE: CardId = CardId::new(14);
    pub const IRON_WAVE: CardId = CardId::new(15);
    pub const POMMEL_STRIKE: CardId = CardId::new(16);
    pub const SHRUG_IT_OFF: CardId = CardId::new(17);
    pub const TRUE_GRIT: CardId = CardId::new(18);
    pub const BODY_SLAM: CardId = CardId::new(19);

    // Uncommon
    pub const BATTLE_TRANCE: CardId = CardId::new(30);
    pub const BLOOD_FOR_BLOOD: CardId = CardId::new(31);
    pub const BLOODLETTING: CardId = CardId::new(32);
    pub const BURNING_PACT: CardId = CardId::new(33);
    pub const CARNAGE: CardId = CardId::new(34);
    pub const DROPKICK: CardId = CardId::new(35);
    pub const FLAME_BARRIER: CardId = CardId::new(36);
    pub const GHOSTLY_ARMOR: CardId = CardId::new(37);
    pub const HEMOKINESIS: CardId = CardId::new(38);
    pub const POWER_THROUGH: CardId = CardId::new(39);
    pub const RAMPAGE: CardId = CardId::new(40);
    pub const RECKLESS_CHARGE: CardId = CardId::new(41);
    pub const SEVER_SOUL: CardId = CardId::new(42);
    pub const UPPERCUT: CardId = CardId::new(43);
    pub const SECOND_WIND: CardId = CardId::new(44);
    pub const WHIRLING_EDGE: CardId = CardId::new(45);

    // Rare
    pub const BLUDGEON: CardId = CardId::new(60);
    pub const IMMOLATE: CardId = CardId::new(61);
    pub const IMPERVIOUS: CardId = CardId::new(62);
    pub const OFFERING: CardId = CardId::new(63);
    pub const REAPER: CardId = CardId::new(64);

    // Status
    pub const DEBUFF: CardId = CardId::new(90);
    pub const SLIMED: CardId = CardId::new(91);
    pub const DAZED: CardId = CardId::new(92);
    pub const BURN: CardId = CardId::new(93);
}

fn attack(id: CardId, slug: &str, name: &str, rarity: Rarity, cost: i64, damage: i64) -> CardDefinition {
    CardDefinition::new(id, slug, name, CardType::Attack)
        .with_rarity(rarity)
        .with_cost(cost)
        .with_damage(damage)
        .with_description(format!("Deal {} damage.", damage))
}

fn skill(id: CardId, slug: &str, name: &str, rarity: Rarity, cost: i64) -> CardDefinition {
    CardDefinition::new(id, slug, name, CardType::Skill)
        .with_rarity(rarity)
        .with_cost(cost)
}

fn status(id: CardId, slug: &str, name: &str) -> CardDefinition {
    CardDefinition::new(id, slug, name, CardType::Status).with_rarity(Rarity::Status)
}

/// Every card in the standard game.
#[must_use]
pub fn standard_card_list() -> Vec<CardDefinition> {
    use ids::*;
    use Rarity::{Common, Rare, Uncommon};

    vec![
        attack(STRIKE, "strike", "Strike", Common, 1, 6),
        skill(DEFEND, "defend", "Defend", Common, 1)
            .with_block(5)
            .with_description("Gain 5 Block."),
        attack(BASH, "bash", "Bash", Common, 2, 8),

        attack(ANGER, "anger", "Anger", Common, 0, 6),
        skill(ARMAMENTS, "armaments", "Armaments", Common, 1)
            .with_block(5)
            .with_draw(1)
            .with_description("Gain 5 Block. Draw 1 card."),
        attack(CLOTHESLINE, "clothesline", "Clothesline", Common, 2, 12),
        attack(HEADBUTT, "headbutt", "Headbutt", Common, 1, 9),
        attack(HEAVY_BLADE, "heavy_blade", "Heavy Blade", Common, 2, 14),
        attack(IRON_WAVE, "iron_wave", "Iron Wave", Common, 1, 5)
            .with_block(5)
            .with_description("Gain 5 Block. Deal 5 damage."),
        attack(POMMEL_STRIKE, "pommel_strike", "Pommel Strike", Common, 1, 9)
            .with_draw(1)
            .with_description("Deal 9 damage. Draw 1 card."),
        skill(SHRUG_IT_OFF, "shrug_it_off", "Shrug It Off", Common, 1)
            .with_block(8)
            .with_draw(1)
            .with_description("Gain 8 Block. Draw 1 card."),
        skill(TRUE_GRIT, "true_grit", "True Grit", Common, 1)
            .with_block(7)
            .with_description("Gain 7 Block."),
        attack(BODY_SLAM, "body_slam", "Body Slam", Common, 1, 0)
            .with_effect(CardEffect::DamageEqualsBlock)
            .with_description("Deal damage equal to your Block."),

        skill(BATTLE_TRANCE, "battle_trance", "Battle Trance", Uncommon, 0)
            .with_draw(3)
            .with_description("Draw 3 cards."),
        attack(BLOOD_FOR_BLOOD, "blood_for_blood", "Blood for Blood", Uncommon, 4, 18),
        skill(BLOODLETTING, "bloodletting", "Bloodletting", Uncommon, 0)
            .with_hp_change(-3)
            .with_description("Lose 3 HP."),
        skill(BURNING_PACT, "burning_pact", "Burning Pact", Uncommon, 1)
            .with_draw(2)
            .with_description("Draw 2 cards."),
        attack(CARNAGE, "carnage", "Carnage", Uncommon, 2, 20),
        attack(DROPKICK, "dropkick", "Dropkick", Uncommon, 1, 5)
            .with_draw(1)
            .with_description("Deal 5 damage. Draw 1 card."),
        skill(FLAME_BARRIER, "flame_barrier", "Flame Barrier", Uncommon, 2)
            .with_block(12)
            .with_description("Gain 12 Block."),
        skill(GHOSTLY_ARMOR, "ghostly_armor", "Ghostly Armor", Uncommon, 1)
            .with_block(10)
            .with_description("Gain 10 Block."),
        attack(HEMOKINESIS, "hemokinesis", "Hemokinesis", Uncommon, 1, 15)
            .with_hp_change(-2)
            .with_description("Lose 2 HP. Deal 15 damage."),
        skill(POWER_THROUGH, "power_through", "Power Through", Uncommon, 1)
            .with_block(15)
            .with_description("Gain 15 Block."),
        attack(RAMPAGE, "rampage", "Rampage", Uncommon, 1, 8),
        attack(RECKLESS_CHARGE, "reckless_charge", "Reckless Charge", Uncommon, 0, 7),
        attack(SEVER_SOUL, "sever_soul", "Sever Soul", Uncommon, 2, 16),
        attack(UPPERCUT, "uppercut", "Uppercut", Uncommon, 2, 13),
        skill(SECOND_WIND, "second_wind", "Second Wind", Uncommon, 1)
            .with_block(5)
            .with_description("Gain 5 Block."),
        attack(WHIRLING_EDGE, "whirling_edge", "Whirling Edge", Uncommon, 1, 0)
            .with_effect(CardEffect::DamagePerCardInHand { per_card: 3 })
            .with_description("Deal 3 damage for each other card in your hand."),

        attack(BLUDGEON, "bludgeon", "Bludgeon", Rare, 3, 32),
        attack(IMMOLATE, "immolate", "Immolate", Rare, 2, 21),
        skill(IMPERVIOUS, "impervious", "Impervious", Rare, 2)
            .with_block(30)
            .with_description("Gain 30 Block."),
        skill(OFFERING, "offering", "Offering", Rare, 0)
            .with_hp_change(-6)
            .with_draw(3)
            .with_description("Lose 6 HP. Draw 3 cards."),
        attack(REAPER, "reaper", "Reaper", Rare, 2, 9)
            .with_effect(CardEffect::HealEqualsDamage)
            .with_description("Deal 9 damage. Heal HP equal to unblocked damage."),

        status(DEBUFF, "debuff", "Debuff")
            .with_cost(1)
            .exhaust()
            .with_description("Cost 1: Exhaust."),
        status(SLIMED, "slimed", "Slimed")
            .with_cost(1)
            .exhaust()
            .with_description("Exhaust."),
        status(DAZED, "dazed", "Dazed")
            .unplayable()
            .ethereal()
            .with_description("Unplayable. Ethereal."),
        status(BURN, "burn", "Burn")
            .unplayable()
            .with_end_turn_damage(2)
            .with_description("Unplayable. At the end of your turn, take 2 damage."),
    ]
}

/// Registry holding the standard cards.
#[must_use]
pub fn standard_cards() -> CardRegistry {
    let mut registry = CardRegistry::new();
    for card in standard_card_list() {
        registry.register(card);
    }
    registry
}
