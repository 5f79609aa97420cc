//! The knight: health, backpack, shield and position.

use super::entity::Vitals;
use super::inventory::Inventory;
use super::room::RoomId;

/// Health every knight starts with.
pub const PLAYER_START_HEALTH: u32 = 100;

/// Permanent maximum-health bonus from equipping the shield.
pub const SHIELD_HEALTH_BONUS: u32 = 20;

/// Flat reduction the shield applies to every mitigable hit.
pub const SHIELD_DAMAGE_REDUCTION: u32 = 10;

#[derive(Debug, Clone)]
pub struct Player {
    pub vitals: Vitals,
    pub backpack: Inventory,
    has_shield: bool,
    location: RoomId,
}

impl Player {
    pub fn new(start: RoomId, backpack: Inventory) -> Self {
        Player {
            vitals: Vitals::new(PLAYER_START_HEALTH),
            backpack,
            has_shield: false,
            location: start,
        }
    }

    pub fn health(&self) -> u32 {
        self.vitals.health()
    }

    pub fn max_health(&self) -> u32 {
        self.vitals.max_health()
    }

    pub fn is_alive(&self) -> bool {
        self.vitals.is_alive()
    }

    pub fn has_shield(&self) -> bool {
        self.has_shield
    }

    pub fn location(&self) -> RoomId {
        self.location
    }

    /// Apply a hit, reduced by the shield when equipped. Returns the damage
    /// actually taken.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let effective = if self.has_shield {
            amount.saturating_sub(SHIELD_DAMAGE_REDUCTION)
        } else {
            amount
        };
        let before = self.vitals.health();
        self.vitals.take_damage(effective);
        before - self.vitals.health()
    }

    /// Apply a hit that ignores the shield. Returns the damage actually taken.
    pub fn take_unmitigated_damage(&mut self, amount: u32) -> u32 {
        let before = self.vitals.health();
        self.vitals.take_damage(amount);
        before - self.vitals.health()
    }

    /// Returns the health actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.vitals.heal(amount)
    }

    /// Equip the shield once. Returns false when it was already equipped.
    pub fn equip_shield(&mut self) -> bool {
        if self.has_shield {
            return false;
        }
        self.has_shield = true;
        self.vitals.raise_max(SHIELD_HEALTH_BONUS);
        true
    }

    /// Swap in a larger backpack carrying the same items.
    pub fn upgrade_backpack(&mut self, increment: usize) {
        self.backpack = self.backpack.upgraded(increment);
    }

    /// Unconditional; callers check locks and exits beforehand.
    pub fn move_to(&mut self, room: RoomId) {
        self.location = room;
    }
}
