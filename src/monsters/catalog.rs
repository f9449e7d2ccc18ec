//! Monster catalog, encounter pools, and the standard bestiary.

use rustc_hash::FxHashMap;
use tracing::info;

use super::intent::{normalize_weights, SpecialMove};
use super::template::{Monster, MonsterId, MonsterTemplate};
use super::Intent;
use crate::cards::ids as cards;
use crate::combat::{BuffKind, DebuffKind};
use crate::core::{GameRng, Tier, TierTable};

/// Registry of monster templates plus one encounter pool per tier.
///
/// ## Example
///
/// ```
/// use spire_engine::core::{GameRng, TierTable};
/// use spire_engine::monsters::catalog::standard_monsters;
///
/// let catalog = standard_monsters();
/// let mut rng = GameRng::new(11);
///
/// let monster = catalog.select_encounter(1, &TierTable::default(), &mut rng);
/// assert!(!monster.elite && !monster.boss);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonsterCatalog {
    templates: FxHashMap<MonsterId, MonsterTemplate>,
    keys: FxHashMap<String, MonsterId>,
    pools: FxHashMap<Tier, Vec<MonsterId>>,
}

impl MonsterCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template. Moveset weights are normalized to sum to 1.0.
    ///
    /// Panics on a duplicate id or key, or an empty moveset.
    pub fn register(&mut self, mut template: MonsterTemplate) {
        if self.templates.contains_key(&template.id) {
            panic!("{} already registered", template.id);
        }
        if self.keys.contains_key(&template.key) {
            panic!("monster key '{}' already registered", template.key);
        }
        if template.moveset.is_empty() {
            panic!("{} '{}' has an empty moveset", template.id, template.key);
        }

        normalize_weights(&mut template.moveset);
        self.keys.insert(template.key.clone(), template.id);
        self.templates.insert(template.id, template);
    }

    /// Add a registered template to a tier's encounter pool.
    ///
    /// Panics if the template is not registered.
    pub fn add_to_pool(&mut self, tier: Tier, id: MonsterId) {
        if !self.templates.contains_key(&id) {
            panic!("{} not found in monster catalog", id);
        }
        self.pools.entry(tier).or_default().push(id);
    }

    #[must_use]
    pub fn get(&self, id: MonsterId) -> Option<&MonsterTemplate> {
        self.templates.get(&id)
    }

    /// Get a template, panicking if it is not registered.
    #[must_use]
    pub fn template(&self, id: MonsterId) -> &MonsterTemplate {
        match self.templates.get(&id) {
            Some(template) => template,
            None => panic!("{} not found in monster catalog", id),
        }
    }

    #[must_use]
    pub fn find_by_key(&self, key: &str) -> Option<&MonsterTemplate> {
        self.keys.get(key).and_then(|id| self.templates.get(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonsterTemplate> {
        self.templates.values()
    }

    /// Templates in a tier's encounter pool.
    #[must_use]
    pub fn pool(&self, tier: Tier) -> &[MonsterId] {
        self.pools.get(&tier).map_or(&[], |pool| pool.as_slice())
    }

    /// Spawn the monster for a player level.
    ///
    /// The tier comes from `tiers`; the template is picked uniformly from
    /// that tier's pool. Panics if the pool is empty, which
    /// `RunConfig::validate` rules out.
    #[must_use]
    pub fn select_encounter(&self, level: u32, tiers: &TierTable, rng: &mut GameRng) -> Monster {
        let tier = tiers.tier_for(level);
        let id = match rng.choose(self.pool(tier)) {
            Some(&id) => id,
            None => panic!("no monsters in the {} encounter pool", tier),
        };

        let monster = self.template(id).instantiate(rng);
        info!(level, %tier, monster = %monster.name, intent = %monster.current_intent().name, "selected encounter");
        monster
    }
}

/// Template ids of the standard bestiary.
pub mod ids {
    use super::MonsterId;

    // Slimes
    pub const ACID_SLIME_LARGE: MonsterId = MonsterId::new(1);
    pub const ACID_SLIME_MEDIUM: MonsterId = MonsterId::new(2);
    pub const ACID_SLIME_SMALL: MonsterId = MonsterId::new(3);
    pub const SPIKE_SLIME_LARGE: MonsterId = MonsterId::new(4);
    pub const SPIKE_SLIME_MEDIUM: MonsterId = MonsterId::new(5);
    pub const SPIKE_SLIME_SMALL: MonsterId = MonsterId::new(6);

    // Louses
    pub const RED_LOUSE: MonsterId = MonsterId::new(10);
    pub const GREEN_LOUSE: MonsterId = MonsterId::new(11);

    pub const JAW_WORM: MonsterId = MonsterId::new(20);
    pub const CULTIST: MonsterId = MonsterId::new(21);

    // Gremlins
    pub const FAT_GREMLIN: MonsterId = MonsterId::new(30);
    pub const MAD_GREMLIN: MonsterId = MonsterId::new(31);
    pub const SHIELD_GREMLIN: MonsterId = MonsterId::new(32);
    pub const SNEAKY_GREMLIN: MonsterId = MonsterId::new(33);
    pub const GREMLIN_WIZARD: MonsterId = MonsterId::new(34);

    pub const BLUE_SLAVER: MonsterId = MonsterId::new(40);
    pub const RED_SLAVER: MonsterId = MonsterId::new(41);
    pub const FUNGI_BEAST: MonsterId = MonsterId::new(42);
    pub const LOOTER: MonsterId = MonsterId::new(43);

    // Elites
    pub const GREMLIN_NOB: MonsterId = MonsterId::new(50);
    pub const LAGAVULIN: MonsterId = MonsterId::new(51);
    pub const SENTRIES: MonsterId = MonsterId::new(52);

    // Bosses
    pub const SLIME_BOSS: MonsterId = MonsterId::new(60);
    pub const HEXAGHOST: MonsterId = MonsterId::new(61);
    pub const THE_GUARDIAN: MonsterId = MonsterId::new(62);
}

fn monster(id: MonsterId, key: &str, name: &str, health: i64) -> MonsterTemplate {
    MonsterTemplate::new(id, key, name, health).with_sprite(key)
}

/// Every template of the standard bestiary.
#[must_use]
pub fn standard_monster_list() -> Vec<MonsterTemplate> {
    vec![
        // ===== SLIMES =====
        monster(ids::ACID_SLIME_LARGE, "acid_slime_large", "Acid Slime (L)", 65)
            .with_intent(
                Intent::attack("Corrosive Spit", 0.3, 7)
                    .with_debuff(DebuffKind::Weak, 2)
                    .with_description("Deals 7 damage and applies 2 Weak"),
            )
            .with_intent(Intent::attack("Tackle", 0.4, 16).with_description("Deals 16 damage"))
            .with_intent(
                Intent::debuff("Lick", 0.3)
                    .with_debuff(DebuffKind::Frail, 2)
                    .with_description("Applies 2 Frail"),
            ),
        monster(ids::ACID_SLIME_MEDIUM, "acid_slime_medium", "Acid Slime (M)", 28)
            .with_intent(
                Intent::attack("Corrosive Spit", 0.4, 7)
                    .with_debuff(DebuffKind::Weak, 1)
                    .with_description("Deals 7 damage and applies 1 Weak"),
            )
            .with_intent(Intent::attack("Tackle", 0.4, 10).with_description("Deals 10 damage"))
            .with_intent(
                Intent::debuff("Lick", 0.2)
                    .with_debuff(DebuffKind::Frail, 1)
                    .with_description("Applies 1 Frail"),
            ),
        monster(ids::ACID_SLIME_SMALL, "acid_slime_small", "Acid Slime (S)", 8)
            .with_intent(Intent::attack("Tackle", 1.0, 3).with_description("Deals 3 damage")),
        monster(ids::SPIKE_SLIME_LARGE, "spike_slime_large", "Spike Slime (L)", 64)
            .with_intent(
                Intent::attack("Flame Tackle", 0.3, 16)
                    .with_added_card(cards::SLIMED, 2)
                    .with_description("Deals 16 damage and adds 2 Slimed"),
            )
            .with_intent(
                Intent::debuff("Lick", 0.4)
                    .with_debuff(DebuffKind::Frail, 2)
                    .with_description("Applies 2 Frail"),
            )
            .with_intent(Intent::attack("Tackle", 0.3, 16).with_description("Deals 16 damage")),
        monster(ids::SPIKE_SLIME_MEDIUM, "spike_slime_medium", "Spike Slime (M)", 28)
            .with_intent(
                Intent::attack("Flame Tackle", 0.3, 8)
                    .with_added_card(cards::SLIMED, 1)
                    .with_description("Deals 8 damage and adds 1 Slimed"),
            )
            .with_intent(
                Intent::debuff("Lick", 0.4)
                    .with_debuff(DebuffKind::Frail, 1)
                    .with_description("Applies 1 Frail"),
            )
            .with_intent(Intent::attack("Tackle", 0.3, 10).with_description("Deals 10 damage")),
        monster(ids::SPIKE_SLIME_SMALL, "spike_slime_small", "Spike Slime (S)", 10)
            .with_intent(Intent::attack("Tackle", 1.0, 5).with_description("Deals 5 damage")),
        // ===== LOUSES =====
        monster(ids::RED_LOUSE, "red_louse", "Red Louse", 10)
            .with_intent(Intent::attack("Bite", 0.75, 5).with_description("Deals 5 damage"))
            .with_intent(
                Intent::buff("Grow", 0.25)
                    .with_buff(BuffKind::Strength, 3)
                    .with_description("Gains 3 Strength"),
            ),
        monster(ids::GREEN_LOUSE, "green_louse", "Green Louse", 11)
            .with_intent(Intent::attack("Bite", 0.75, 5).with_description("Deals 5 damage"))
            .with_intent(
                Intent::debuff("Spit Web", 0.25)
                    .with_debuff(DebuffKind::Weak, 2)
                    .with_description("Applies 2 Weak"),
            ),
        // ===== JAW WORM / CULTIST =====
        monster(ids::JAW_WORM, "jaw_worm", "Jaw Worm", 44)
            .with_intent(Intent::attack("Chomp", 0.25, 11).with_description("Deals 11 damage"))
            .with_intent(
                Intent::buff("Bellow", 0.3)
                    .with_buff(BuffKind::Strength, 3)
                    .with_block(6)
                    .with_description("Gains 3 Strength and 6 Block"),
            )
            .with_intent(
                Intent::attack("Thrash", 0.45, 7)
                    .with_block(5)
                    .with_description("Deals 7 damage and gains 5 Block"),
            ),
        monster(ids::CULTIST, "cultist", "Cultist", 48)
            .with_intent(
                Intent::buff("Incantation", 0.25)
                    .with_buff(BuffKind::Ritual, 3)
                    .with_description("Gains 3 Ritual"),
            )
            .with_intent(Intent::attack("Dark Strike", 0.75, 6).with_description("Deals 6 damage")),
        // ===== GREMLINS =====
        monster(ids::FAT_GREMLIN, "fat_gremlin", "Fat Gremlin", 13).with_intent(
            Intent::attack("Smash", 1.0, 4)
                .with_debuff(DebuffKind::Weak, 1)
                .with_description("Deals 4 damage and applies 1 Weak"),
        ),
        monster(ids::MAD_GREMLIN, "mad_gremlin", "Mad Gremlin", 20)
            .with_intent(Intent::attack("Scratch", 1.0, 4).with_description("Deals 4 damage")),
        monster(ids::SHIELD_GREMLIN, "shield_gremlin", "Shield Gremlin", 12)
            .with_intent(Intent::buff("Protect", 0.6).with_block(7).with_description("Gains 7 Block"))
            .with_intent(Intent::attack("Shield Bash", 0.4, 6).with_description("Deals 6 damage")),
        monster(ids::SNEAKY_GREMLIN, "sneaky_gremlin", "Sneaky Gremlin", 10)
            .with_intent(Intent::attack("Puncture", 1.0, 9).with_description("Deals 9 damage")),
        monster(ids::GREMLIN_WIZARD, "gremlin_wizard", "Gremlin Wizard", 23)
            .with_intent(
                Intent::special("Charging", 0.6, SpecialMove::Charge).with_description("Charging up power"),
            )
            .with_intent(Intent::attack("Ultimate Blast", 0.4, 25).with_description("Deals 25 damage")),
        // ===== SLAVERS =====
        monster(ids::BLUE_SLAVER, "blue_slaver", "Blue Slaver", 46)
            .with_intent(Intent::attack("Stab", 0.4, 12).with_description("Deals 12 damage"))
            .with_intent(
                Intent::attack("Rake", 0.6, 7)
                    .with_debuff(DebuffKind::Weak, 1)
                    .with_description("Deals 7 damage and applies 1 Weak"),
            ),
        monster(ids::RED_SLAVER, "red_slaver", "Red Slaver", 46)
            .with_intent(Intent::attack("Stab", 0.4, 13).with_description("Deals 13 damage"))
            .with_intent(
                Intent::attack("Scrape", 0.6, 8)
                    .with_debuff(DebuffKind::Vulnerable, 1)
                    .with_description("Deals 8 damage and applies 1 Vulnerable"),
            ),
        // ===== FUNGI BEAST / LOOTER =====
        monster(ids::FUNGI_BEAST, "fungi_beast", "Fungi Beast", 22)
            .with_intent(Intent::attack("Bite", 0.6, 6).with_description("Deals 6 damage"))
            .with_intent(
                Intent::buff("Grow", 0.4)
                    .with_buff(BuffKind::Strength, 3)
                    .with_description("Gains 3 Strength"),
            ),
        monster(ids::LOOTER, "looter", "Looter", 44)
            .with_intent(Intent::attack("Mug", 0.55, 10).with_description("Deals 10 damage"))
            .with_intent(Intent::attack("Lunge", 0.25, 12).with_description("Deals 12 damage"))
            .with_intent(
                Intent::special("Smoke Bomb", 0.2, SpecialMove::Escape).with_description("Escapes from battle"),
            ),
        // ===== ELITES =====
        monster(ids::GREMLIN_NOB, "gremlin_nob", "Gremlin Nob", 82)
            .elite()
            .with_intent(
                Intent::buff("Bellow", 0.2)
                    .with_buff(BuffKind::Strength, 2)
                    .with_block(9)
                    .with_description("Gains 2 Strength and 9 Block"),
            )
            .with_intent(
                Intent::attack("Skull Bash", 0.4, 6)
                    .with_debuff(DebuffKind::Vulnerable, 2)
                    .with_description("Deals 6 damage and applies 2 Vulnerable"),
            )
            .with_intent(Intent::attack("Rush", 0.4, 14).with_description("Deals 14 damage")),
        monster(ids::LAGAVULIN, "lagavulin", "Lagavulin", 109)
            .elite()
            .with_intent(Intent::special("Stunned", 0.2, SpecialMove::Sleep).with_description("Zzz..."))
            .with_intent(
                Intent::debuff("Siphon Soul", 0.4)
                    .with_debuff(DebuffKind::DexterityDown, 1)
                    .with_description("Reduces Dexterity by 1"),
            )
            .with_intent(Intent::attack("Attack", 0.4, 18).with_description("Deals 18 damage")),
        monster(ids::SENTRIES, "sentries", "Sentry", 38)
            .elite()
            .with_intent(
                Intent::attack("Beam", 0.5, 9)
                    .with_added_card(cards::DAZED, 1)
                    .with_description("Deals 9 damage and adds 1 Dazed"),
            )
            .with_intent(Intent::attack("Bolt", 0.5, 9).with_description("Deals 9 damage")),
        // ===== BOSSES =====
        monster(ids::SLIME_BOSS, "slime_boss", "Slime Boss", 140)
            .boss()
            .with_intent(Intent::special("Preparing", 0.1, SpecialMove::Charge).with_description("Preparing..."))
            .with_intent(Intent::attack("Slam", 0.3, 35).with_description("Deals 35 damage"))
            .with_intent(
                Intent::attack("Corrosive Spit", 0.3, 11)
                    .with_added_card(cards::SLIMED, 3)
                    .with_description("Deals 11 damage and adds 3 Slimed"),
            )
            .with_intent(
                Intent::debuff("Lick", 0.3)
                    .with_debuff(DebuffKind::Weak, 2)
                    .with_description("Applies 2 Weak"),
            ),
        monster(ids::HEXAGHOST, "hexaghost", "Hexaghost", 250)
            .boss()
            .with_intent(
                Intent::buff("Activate", 0.1)
                    .with_buff(BuffKind::Strength, 2)
                    .with_description("Gains 2 Strength"),
            )
            .with_intent(Intent::attack("Divider", 0.15, 35).with_description("Deals 35 damage"))
            .with_intent(
                Intent::attack("Sear", 0.3, 6)
                    .with_added_card(cards::BURN, 1)
                    .with_description("Deals 6 damage and adds 1 Burn"),
            )
            .with_intent(Intent::multi_attack("Tackle", 0.25, 10, 2).with_description("Deals 10 damage twice"))
            .with_intent(
                Intent::buff("Inflame", 0.2)
                    .with_buff(BuffKind::Strength, 2)
                    .with_block(12)
                    .with_description("Gains 2 Strength and 12 Block"),
            ),
        monster(ids::THE_GUARDIAN, "the_guardian", "The Guardian", 240)
            .boss()
            .retains_block()
            .with_intent(Intent::buff("Charging Up", 0.1).with_block(9).with_description("Gains 9 Block"))
            .with_intent(Intent::attack("Fierce Bash", 0.2, 32).with_description("Deals 32 damage"))
            .with_intent(
                Intent::debuff("Vent Steam", 0.15)
                    .with_debuff(DebuffKind::Weak, 2)
                    .with_description("Applies 2 Weak"),
            )
            .with_intent(Intent::attack("Whirlwind", 0.2, 20).with_description("Deals 20 damage"))
            .with_intent(Intent::buff("Defensive Mode", 0.15).with_block(9).with_description("Gains 9 Block"))
            .with_intent(Intent::attack("Roll Attack", 0.1, 9).with_description("Deals 9 damage"))
            .with_intent(Intent::multi_attack("Twin Slam", 0.1, 16, 2).with_description("Deals 16 damage twice")),
    ]
}

/// Catalog holding the standard bestiary with its encounter pools.
#[must_use]
pub fn standard_monsters() -> MonsterCatalog {
    let mut catalog = MonsterCatalog::new();
    for template in standard_monster_list() {
        catalog.register(template);
    }

    let pools = [
        (
            Tier::Easy,
            &[
                ids::ACID_SLIME_SMALL,
                ids::ACID_SLIME_MEDIUM,
                ids::SPIKE_SLIME_SMALL,
                ids::SPIKE_SLIME_MEDIUM,
                ids::RED_LOUSE,
                ids::GREEN_LOUSE,
                ids::FAT_GREMLIN,
                ids::MAD_GREMLIN,
                ids::SHIELD_GREMLIN,
                ids::SNEAKY_GREMLIN,
            ][..],
        ),
        (
            Tier::Normal,
            &[
                ids::JAW_WORM,
                ids::CULTIST,
                ids::BLUE_SLAVER,
                ids::RED_SLAVER,
                ids::FUNGI_BEAST,
                ids::LOOTER,
                ids::ACID_SLIME_LARGE,
                ids::SPIKE_SLIME_LARGE,
                ids::GREMLIN_WIZARD,
            ][..],
        ),
        (Tier::Elite, &[ids::GREMLIN_NOB, ids::LAGAVULIN, ids::SENTRIES][..]),
        (Tier::Boss, &[ids::SLIME_BOSS, ids::HEXAGHOST, ids::THE_GUARDIAN][..]),
    ];

    for (tier, members) in pools {
        for &id in members {
            catalog.add_to_pool(tier, id);
        }
    }

    catalog
}
