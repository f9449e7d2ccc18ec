//! Buffs and debuffs carried by combatants.
//!
//! Weak and frail count down by one at the end of their owner's turn.
//! Vulnerable counts down once per incoming attack phase, after the hits
//! land, so a stack applied by a rider lasts through the next attack.
//! Strength, ritual and dexterity last for the whole encounter.

use serde::{Deserialize, Serialize};

/// Buffs a monster can give itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuffKind {
    /// Added to every attack hit.
    Strength,
    /// Strength gained at the start of each of the owner's turns.
    Ritual,
}

/// Debuffs a monster can put on the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebuffKind {
    /// Attacks deal 25% less damage.
    Weak,
    /// Block gained from cards is 25% lower.
    Frail,
    /// Attacks against the owner deal 50% more damage.
    Vulnerable,
    /// Block gained from cards is reduced by the amount.
    DexterityDown,
}

/// Status counters of one combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statuses {
    pub strength: i64,
    pub ritual: i64,
    pub dexterity: i64,
    /// Remaining turns.
    pub weak: i64,
    /// Remaining turns.
    pub frail: i64,
    /// Remaining turns.
    pub vulnerable: i64,
}

impl Statuses {
    pub fn apply_buff(&mut self, kind: BuffKind, amount: i64) {
        match kind {
            BuffKind::Strength => self.strength += amount,
            BuffKind::Ritual => self.ritual += amount,
        }
    }

    pub fn apply_debuff(&mut self, kind: DebuffKind, amount: i64) {
        match kind {
            DebuffKind::Weak => self.weak += amount,
            DebuffKind::Frail => self.frail += amount,
            DebuffKind::Vulnerable => self.vulnerable += amount,
            DebuffKind::DexterityDown => self.dexterity -= amount,
        }
    }

    /// Damage of one attack hit made by the owner.
    #[must_use]
    pub fn outgoing_damage(&self, base: i64) -> i64 {
        let damage = (base + self.strength).max(0);
        if self.weak > 0 {
            damage * 3 / 4
        } else {
            damage
        }
    }

    /// Damage of one attack hit taken by the owner, before block.
    #[must_use]
    pub fn incoming_damage(&self, damage: i64) -> i64 {
        if self.vulnerable > 0 {
            damage * 3 / 2
        } else {
            damage
        }
    }

    /// Block the owner gains from a card granting `base` block.
    #[must_use]
    pub fn block_gain(&self, base: i64) -> i64 {
        let block = (base + self.dexterity).max(0);
        if self.frail > 0 {
            block * 3 / 4
        } else {
            block
        }
    }

    /// Count down weak and frail at the end of the owner's turn.
    pub fn tick(&mut self) {
        self.weak = (self.weak - 1).max(0);
        self.frail = (self.frail - 1).max(0);
    }

    /// Count down vulnerable after the opponent's hits for the turn land.
    pub fn tick_vulnerable(&mut self) {
        self.vulnerable = (self.vulnerable - 1).max(0);
    }

    /// Convert ritual into strength at the start of the owner's turn.
    pub fn gain_ritual_strength(&mut self) {
        self.strength += self.ritual;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_statuses_is_identity() {
        let statuses = Statuses::default();
        assert_eq!(statuses.outgoing_damage(6), 6);
        assert_eq!(statuses.incoming_damage(6), 6);
        assert_eq!(statuses.block_gain(5), 5);
    }

    #[test]
    fn test_strength_and_weak() {
        let mut statuses = Statuses::default();
        statuses.apply_buff(BuffKind::Strength, 3);
        assert_eq!(statuses.outgoing_damage(5), 8);

        statuses.apply_debuff(DebuffKind::Weak, 1);
        assert_eq!(statuses.outgoing_damage(5), 6);
    }

    #[test]
    fn test_vulnerable() {
        let mut statuses = Statuses::default();
        statuses.apply_debuff(DebuffKind::Vulnerable, 2);
        assert_eq!(statuses.incoming_damage(7), 10);
    }

    #[test]
    fn test_frail_and_dexterity() {
        let mut statuses = Statuses::default();
        statuses.apply_debuff(DebuffKind::Frail, 1);
        assert_eq!(statuses.block_gain(8), 6);

        statuses.apply_debuff(DebuffKind::DexterityDown, 2);
        assert_eq!(statuses.dexterity, -2);
        assert_eq!(statuses.block_gain(8), 4);
        assert_eq!(statuses.block_gain(1), 0);
    }

    #[test]
    fn test_tick() {
        let mut statuses = Statuses::default();
        statuses.apply_debuff(DebuffKind::Weak, 2);
        statuses.apply_debuff(DebuffKind::Vulnerable, 1);
        statuses.apply_debuff(DebuffKind::DexterityDown, 1);

        statuses.tick();
        assert_eq!(statuses.weak, 1);
        assert_eq!(statuses.vulnerable, 1);
        assert_eq!(statuses.dexterity, -1);

        statuses.tick_vulnerable();
        assert_eq!(statuses.vulnerable, 0);
        assert_eq!(statuses.weak, 1);

        statuses.tick();
        statuses.tick();
        assert_eq!(statuses.weak, 0);
        assert_eq!(statuses.frail, 0);
    }

    #[test]
    fn test_ritual() {
        let mut statuses = Statuses::default();
        statuses.apply_buff(BuffKind::Ritual, 3);
        statuses.gain_ritual_strength();
        statuses.gain_ritual_strength();
        assert_eq!(statuses.strength, 6);
    }
}
