//! Damage events reported to the presentation layer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A side of the fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Monster,
}

/// One resolved hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageEvent {
    pub source: Side,
    pub target: Side,
    /// Incoming damage before block.
    pub amount: i64,
    /// Damage absorbed by block.
    pub blocked: i64,
    /// Health lost.
    pub dealt: i64,
}

/// Events of one action. Most actions produce at most two.
pub type DamageEvents = SmallVec<[DamageEvent; 2]>;

/// Apply `amount` damage against block first, then health.
///
/// Block never goes negative; health may.
pub fn resolve_damage(source: Side, target: Side, amount: i64, block: &mut i64, health: &mut i64) -> DamageEvent {
    let amount = amount.max(0);
    let blocked = (*block).min(amount).max(0);
    let dealt = amount - blocked;

    *block -= blocked;
    *health -= dealt;

    DamageEvent {
        source,
        target,
        amount,
        blocked,
        dealt,
    }
}

/// "Just took damage" notifications, one per side.
///
/// Each flash holds the health lost since it was last taken. Reading a flash
/// clears it, so every hit triggers at most one animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageFlashes {
    player: Option<i64>,
    monster: Option<i64>,
}

impl DamageFlashes {
    /// Record an event. Fully blocked hits do not flash.
    pub fn record(&mut self, event: &DamageEvent) {
        if event.dealt <= 0 {
            return;
        }
        let slot = self.slot(event.target);
        *slot = Some(slot.unwrap_or(0) + event.dealt);
    }

    /// Take and clear the flash for a side.
    pub fn take(&mut self, side: Side) -> Option<i64> {
        self.slot(side).take()
    }

    /// Peek at a flash without clearing it.
    #[must_use]
    pub fn peek(&self, side: Side) -> Option<i64> {
        match side {
            Side::Player => self.player,
            Side::Monster => self.monster,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn slot(&mut self, side: Side) -> &mut Option<i64> {
        match side {
            Side::Player => &mut self.player,
            Side::Monster => &mut self.monster,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_block() {
        let (mut block, mut health) = (5, 20);
        let event = resolve_damage(Side::Monster, Side::Player, 8, &mut block, &mut health);

        assert_eq!(block, 0);
        assert_eq!(health, 17);
        assert_eq!(event.blocked, 5);
        assert_eq!(event.dealt, 3);
    }

    #[test]
    fn test_full_block() {
        let (mut block, mut health) = (10, 20);
        let event = resolve_damage(Side::Player, Side::Monster, 6, &mut block, &mut health);

        assert_eq!(block, 4);
        assert_eq!(health, 20);
        assert_eq!(event.dealt, 0);
    }

    #[test]
    fn test_health_can_go_negative() {
        let (mut block, mut health) = (0, 3);
        resolve_damage(Side::Monster, Side::Player, 10, &mut block, &mut health);
        assert_eq!(health, -7);
    }

    #[test]
    fn test_flash_is_taken_once() {
        let mut flashes = DamageFlashes::default();
        let (mut block, mut health) = (0, 30);
        let event = resolve_damage(Side::Player, Side::Monster, 6, &mut block, &mut health);
        flashes.record(&event);
        flashes.record(&event);

        assert_eq!(flashes.peek(Side::Monster), Some(12));
        assert_eq!(flashes.take(Side::Monster), Some(12));
        assert_eq!(flashes.take(Side::Monster), None);
        assert_eq!(flashes.take(Side::Player), None);
    }

    #[test]
    fn test_blocked_hit_does_not_flash() {
        let mut flashes = DamageFlashes::default();
        let (mut block, mut health) = (10, 30);
        let event = resolve_damage(Side::Monster, Side::Player, 6, &mut block, &mut health);
        flashes.record(&event);

        assert_eq!(flashes.take(Side::Player), None);
    }
}
