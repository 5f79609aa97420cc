//! Health bookkeeping shared by every combat participant.

/// Current and maximum health of a combatant.
///
/// Health never leaves `0..=max_health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vitals {
    health: u32,
    max_health: u32,
}

impl Vitals {
    /// Full health at `max_health`. A zero maximum is raised to 1.
    pub fn new(max_health: u32) -> Self {
        let max_health = max_health.max(1);
        Vitals {
            health: max_health,
            max_health,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Subtract `amount`, flooring at zero. Returns the health left.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    /// Add `amount`, capping at the maximum. Returns the health actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health - before
    }

    /// Raise the maximum by `bonus` and restore to full.
    pub fn raise_max(&mut self, bonus: u32) {
        self.max_health = self.max_health.saturating_add(bonus);
        self.health = self.max_health;
    }
}

/// Identity of a soldier, unique within a castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SoldierId(pub u32);

/// A room-resident opponent for mook fights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Soldier {
    pub id: SoldierId,
    pub name: String,
    pub vitals: Vitals,
    pub damage: u32,
}

impl Soldier {
    pub fn new(id: SoldierId, name: impl Into<String>, health: u32, damage: u32) -> Self {
        Soldier {
            id,
            name: name.into(),
            vitals: Vitals::new(health),
            damage,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.vitals.is_alive()
    }
}
