//! Turn-based combat resolution.
//!
//! Both encounters are explicit state machines: a fight is engaged, then
//! stepped with one [`CombatAction`] at a time until it reaches
//! [`FightStatus::Victory`] or [`FightStatus::Defeat`]. Each step mutates the
//! participants and returns the [`CombatEvent`]s it produced; reading input
//! and printing text are left to the caller.

use log::debug;

use super::entity::SoldierId;
use super::inventory::BACKPACK_UPGRADE_STEP;
use super::items::ItemKind;
use super::player::Player;
use super::rng::RandomSource;
use super::room::Room;

pub const DRAGON_MAX_HEALTH: u32 = 200;
/// Opening sword strike against the dragon.
pub const SWORD_DAMAGE: u32 = 40;
/// Opening strike when the magic scroll is carried.
pub const ENCHANTED_SWORD_DAMAGE: u32 = 60;
/// Damage of each `attack` during the dragon fight.
pub const DRAGON_FIGHT_ATTACK: u32 = 40;
pub const DRAGON_FIRE_MIN: u32 = 15;
pub const DRAGON_FIRE_MAX: u32 = 30;
/// Damage of each `attack` against a soldier.
pub const SOLDIER_FIGHT_ATTACK: u32 = 30;
/// Display scale of the knight's bar during the dragon fight.
pub const KNIGHT_DISPLAY_MAX: u32 = 100;
/// Display scale of a soldier's bar, whatever its real maximum.
pub const SOLDIER_DISPLAY_MAX: u32 = 60;

/// One player decision inside a fight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatAction {
    Attack,
    Heal,
    /// Anything else; forfeits the turn.
    Other(String),
}

impl CombatAction {
    /// Trimmed, case-insensitive.
    pub fn parse(input: &str) -> Self {
        let token = input.trim().to_lowercase();
        match token.as_str() {
            "attack" => CombatAction::Attack,
            "heal" => CombatAction::Heal,
            _ => CombatAction::Other(token),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FightStatus {
    AwaitingAction,
    Victory,
    Defeat,
}

impl FightStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, FightStatus::AwaitingAction)
    }
}

/// Spoils of defeating a soldier; one is drawn uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reward {
    BackpackUpgrade,
    FullHeal,
    EnhancedSword,
}

impl Reward {
    pub const ALL: [Reward; 3] = [Reward::BackpackUpgrade, Reward::FullHeal, Reward::EnhancedSword];

    pub fn draw(rng: &mut dyn RandomSource) -> Reward {
        let index = rng.roll(0, Reward::ALL.len() as u32 - 1) as usize;
        Reward::ALL[index.min(Reward::ALL.len() - 1)]
    }
}

/// What a drawn reward did to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardOutcome {
    /// The player must still accept; the bigger backpack would hold `capacity`.
    UpgradeOffered { capacity: usize },
    FullHeal { restored: u32 },
    /// `stored` is false when the backpack had no room.
    EnhancedSword { stored: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    Engaged { opponent: String },
    SwordReady { enchanted: bool },
    OpeningStrike { damage: u32, opponent_health: u32 },
    PlayerStrikes { damage: u32, opponent_health: u32 },
    Healed { item: ItemKind, restored: u32 },
    NoHealingItems,
    TurnLost { action: String },
    DragonFire { damage: u32, health: u32 },
    CounterAttack { attacker: String, damage: u32, health: u32 },
    OpponentDefeated { opponent: String },
    PlayerDefeated { by: String },
    Rewarded(RewardOutcome),
}

/// Why a dragon fight could not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossRefusal {
    NoSword,
    AlreadySlain,
}

/// The dragon's health; a scalar on the session rather than a room resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dragon {
    pub health: u32,
}

impl Dragon {
    pub fn new() -> Self {
        Dragon {
            health: DRAGON_MAX_HEALTH,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

impl Default for Dragon {
    fn default() -> Self {
        Self::new()
    }
}

/// Consume the best available healing item: a drink first, then a bag.
fn use_healing_item(player: &mut Player) -> CombatEvent {
    for item in [ItemKind::HealthDrink, ItemKind::HealthBag] {
        if player.backpack.remove(item) {
            let restored = player.heal(item.heal_amount().unwrap_or(0));
            return CombatEvent::Healed { item, restored };
        }
    }
    CombatEvent::NoHealingItems
}

#[derive(Debug, Clone)]
pub struct BossFight {
    status: FightStatus,
}

impl BossFight {
    /// Check the sword, land the opening strike, and start the fight.
    pub fn engage(player: &Player, dragon: &mut Dragon) -> Result<(BossFight, Vec<CombatEvent>), BossRefusal> {
        if !dragon.is_alive() {
            return Err(BossRefusal::AlreadySlain);
        }
        if !player.backpack.contains(ItemKind::Sword) {
            return Err(BossRefusal::NoSword);
        }
        let enchanted = player.backpack.contains(ItemKind::MagicScroll);
        let damage = if enchanted {
            ENCHANTED_SWORD_DAMAGE
        } else {
            SWORD_DAMAGE
        };
        dragon.health = dragon.health.saturating_sub(damage);
        let mut events = vec![
            CombatEvent::SwordReady { enchanted },
            CombatEvent::OpeningStrike {
                damage,
                opponent_health: dragon.health,
            },
        ];
        let status = if dragon.is_alive() {
            FightStatus::AwaitingAction
        } else {
            events.push(CombatEvent::OpponentDefeated {
                opponent: "the dragon".into(),
            });
            FightStatus::Victory
        };
        Ok((BossFight { status }, events))
    }

    pub fn status(&self) -> FightStatus {
        self.status
    }

    /// Resolve one round. Does nothing once the fight is over.
    pub fn step(
        &mut self,
        action: &CombatAction,
        player: &mut Player,
        dragon: &mut Dragon,
        rng: &mut dyn RandomSource,
    ) -> Vec<CombatEvent> {
        if self.status.is_over() {
            return Vec::new();
        }
        let mut events = Vec::new();
        match action {
            CombatAction::Attack => {
                dragon.health = dragon.health.saturating_sub(DRAGON_FIGHT_ATTACK);
                events.push(CombatEvent::PlayerStrikes {
                    damage: DRAGON_FIGHT_ATTACK,
                    opponent_health: dragon.health,
                });
                if !dragon.is_alive() {
                    events.push(CombatEvent::OpponentDefeated {
                        opponent: "the dragon".into(),
                    });
                    self.status = FightStatus::Victory;
                    return events;
                }
            }
            CombatAction::Heal => events.push(use_healing_item(player)),
            CombatAction::Other(token) => events.push(CombatEvent::TurnLost {
                action: token.clone(),
            }),
        }

        // Dragon fire ignores the shield.
        let fire = rng.roll(DRAGON_FIRE_MIN, DRAGON_FIRE_MAX);
        let taken = player.take_unmitigated_damage(fire);
        debug!("dragon fire rolled {} (took {})", fire, taken);
        events.push(CombatEvent::DragonFire {
            damage: fire,
            health: player.health(),
        });
        if !player.is_alive() {
            events.push(CombatEvent::PlayerDefeated {
                by: "the dragon".into(),
            });
            self.status = FightStatus::Defeat;
        }
        events
    }
}

#[derive(Debug, Clone)]
pub struct MookFight {
    soldier: SoldierId,
    status: FightStatus,
}

impl MookFight {
    /// Face the first soldier in `room`, if any.
    pub fn engage(room: &Room) -> Option<(MookFight, Vec<CombatEvent>)> {
        let soldier = room.soldiers().first()?;
        let fight = MookFight {
            soldier: soldier.id,
            status: FightStatus::AwaitingAction,
        };
        let events = vec![CombatEvent::Engaged {
            opponent: soldier.name.clone(),
        }];
        Some((fight, events))
    }

    pub fn soldier(&self) -> SoldierId {
        self.soldier
    }

    pub fn status(&self) -> FightStatus {
        self.status
    }

    /// Resolve one round against the engaged soldier in `room`.
    pub fn step(
        &mut self,
        action: &CombatAction,
        player: &mut Player,
        room: &mut Room,
        rng: &mut dyn RandomSource,
    ) -> Vec<CombatEvent> {
        if self.status.is_over() {
            return Vec::new();
        }
        let Some(soldier) = room.soldier_mut(self.soldier) else {
            // Soldier vanished from the room; nothing left to fight.
            self.status = FightStatus::Victory;
            return Vec::new();
        };
        let name = soldier.name.clone();
        let hit = soldier.damage;
        let mut events = Vec::new();
        match action {
            CombatAction::Attack => {
                let left = soldier.vitals.take_damage(SOLDIER_FIGHT_ATTACK);
                events.push(CombatEvent::PlayerStrikes {
                    damage: SOLDIER_FIGHT_ATTACK,
                    opponent_health: left,
                });
                if left == 0 {
                    room.remove_soldier(self.soldier);
                    events.push(CombatEvent::OpponentDefeated { opponent: name });
                    events.push(CombatEvent::Rewarded(grant_reward(player, rng)));
                    self.status = FightStatus::Victory;
                    return events;
                }
            }
            CombatAction::Heal => events.push(use_healing_item(player)),
            CombatAction::Other(token) => events.push(CombatEvent::TurnLost {
                action: token.clone(),
            }),
        }

        let taken = player.take_damage(hit);
        events.push(CombatEvent::CounterAttack {
            attacker: name.clone(),
            damage: taken,
            health: player.health(),
        });
        if !player.is_alive() {
            events.push(CombatEvent::PlayerDefeated { by: name });
            self.status = FightStatus::Defeat;
        }
        events
    }
}

fn grant_reward(player: &mut Player, rng: &mut dyn RandomSource) -> RewardOutcome {
    match Reward::draw(rng) {
        Reward::BackpackUpgrade => RewardOutcome::UpgradeOffered {
            capacity: player.backpack.capacity() + BACKPACK_UPGRADE_STEP,
        },
        Reward::FullHeal => RewardOutcome::FullHeal {
            restored: player.heal(player.max_health()),
        },
        Reward::EnhancedSword => RewardOutcome::EnhancedSword {
            stored: player.backpack.add(ItemKind::EnhancedSword),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventure::entity::Soldier;
    use crate::adventure::inventory::Inventory;
    use crate::adventure::rng::ScriptedRandom;
    use crate::adventure::room::RoomId;

    fn knight_with(items: &[ItemKind]) -> Player {
        let mut pack = Inventory::default();
        for item in items {
            pack.add(*item);
        }
        Player::new(RoomId(0), pack)
    }

    fn guarded_room() -> Room {
        let mut room = Room::new("yard");
        room.add_soldier(Soldier::new(SoldierId(9), "Guard", 50, 10));
        room
    }

    #[test]
    fn action_tokens_normalize() {
        assert_eq!(CombatAction::parse("  ATTACK "), CombatAction::Attack);
        assert_eq!(CombatAction::parse("Heal"), CombatAction::Heal);
        assert_eq!(
            CombatAction::parse(" Run "),
            CombatAction::Other("run".into())
        );
    }

    #[test]
    fn boss_refuses_without_sword_and_changes_nothing() {
        let player = knight_with(&[ItemKind::MagicScroll]);
        let mut dragon = Dragon::new();
        let refusal = BossFight::engage(&player, &mut dragon).unwrap_err();
        assert_eq!(refusal, BossRefusal::NoSword);
        assert_eq!(dragon.health, DRAGON_MAX_HEALTH);
        assert_eq!(player.health(), 100);
    }

    #[test]
    fn opening_strike_depends_on_scroll() {
        let mut dragon = Dragon::new();
        BossFight::engage(&knight_with(&[ItemKind::Sword]), &mut dragon).unwrap();
        assert_eq!(dragon.health, 160);

        let mut dragon = Dragon::new();
        BossFight::engage(
            &knight_with(&[ItemKind::Sword, ItemKind::MagicScroll]),
            &mut dragon,
        )
        .unwrap();
        assert_eq!(dragon.health, 140);
    }

    #[test]
    fn killing_blow_skips_counter_attack() {
        let mut player = knight_with(&[ItemKind::Sword, ItemKind::MagicScroll]);
        let mut dragon = Dragon::new();
        let (mut fight, _) = BossFight::engage(&player, &mut dragon).unwrap();
        let mut rng = ScriptedRandom::new([20, 20, 20]);
        for _ in 0..3 {
            fight.step(&CombatAction::Attack, &mut player, &mut dragon, &mut rng);
        }
        assert_eq!(dragon.health, 20);
        assert_eq!(player.health(), 40);
        let events = fight.step(&CombatAction::Attack, &mut player, &mut dragon, &mut rng);
        assert_eq!(fight.status(), FightStatus::Victory);
        assert_eq!(player.health(), 40);
        assert!(!events
            .iter()
            .any(|e| matches!(e, CombatEvent::DragonFire { .. })));
    }

    #[test]
    fn invalid_action_still_draws_fire() {
        let mut player = knight_with(&[ItemKind::Sword]);
        let mut dragon = Dragon::new();
        let (mut fight, _) = BossFight::engage(&player, &mut dragon).unwrap();
        let mut rng = ScriptedRandom::new([17]);
        let events = fight.step(
            &CombatAction::parse("dance"),
            &mut player,
            &mut dragon,
            &mut rng,
        );
        assert_eq!(
            events,
            vec![
                CombatEvent::TurnLost {
                    action: "dance".into()
                },
                CombatEvent::DragonFire {
                    damage: 17,
                    health: 83
                },
            ]
        );
        assert_eq!(dragon.health, 160);
    }

    #[test]
    fn heal_prefers_drink_over_bag() {
        let mut player = knight_with(&[ItemKind::Sword, ItemKind::HealthBag, ItemKind::HealthDrink]);
        player.take_damage(60);
        let mut dragon = Dragon::new();
        let (mut fight, _) = BossFight::engage(&player, &mut dragon).unwrap();
        let mut rng = ScriptedRandom::new([15]);
        let events = fight.step(&CombatAction::Heal, &mut player, &mut dragon, &mut rng);
        assert_eq!(
            events[0],
            CombatEvent::Healed {
                item: ItemKind::HealthDrink,
                restored: 30
            }
        );
        assert!(player.backpack.contains(ItemKind::HealthBag));
        assert_eq!(player.health(), 55);
    }

    #[test]
    fn dragon_can_defeat_the_knight() {
        let mut player = knight_with(&[ItemKind::Sword]);
        let mut dragon = Dragon::new();
        let (mut fight, _) = BossFight::engage(&player, &mut dragon).unwrap();
        let mut rng = ScriptedRandom::new(std::iter::repeat(30).take(10));
        let mut rounds = 0;
        while !fight.status().is_over() {
            fight.step(&CombatAction::Heal, &mut player, &mut dragon, &mut rng);
            rounds += 1;
        }
        assert_eq!(fight.status(), FightStatus::Defeat);
        assert_eq!(rounds, 4);
        assert_eq!(player.health(), 0);
        assert!(fight
            .step(&CombatAction::Attack, &mut player, &mut dragon, &mut rng)
            .is_empty());
    }

    #[test]
    fn mook_fight_needs_a_soldier() {
        assert!(MookFight::engage(&Room::new("empty")).is_none());
    }

    #[test]
    fn defeating_soldier_removes_it_and_grants_one_reward() {
        let mut player = knight_with(&[]);
        let mut room = guarded_room();
        let (mut fight, _) = MookFight::engage(&room).unwrap();
        let mut rng = ScriptedRandom::new([2]);
        fight.step(&CombatAction::Attack, &mut player, &mut room, &mut rng);
        assert_eq!(player.health(), 90);
        let events = fight.step(&CombatAction::Attack, &mut player, &mut room, &mut rng);
        assert_eq!(fight.status(), FightStatus::Victory);
        assert!(room.soldiers().is_empty());
        let rewards: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, CombatEvent::Rewarded(_)))
            .collect();
        assert_eq!(rewards.len(), 1);
        assert_eq!(
            rewards[0],
            &CombatEvent::Rewarded(RewardOutcome::EnhancedSword { stored: true })
        );
        assert!(player.backpack.contains(ItemKind::EnhancedSword));
        assert_eq!(player.health(), 90);
    }

    #[test]
    fn reward_draw_maps_each_index() {
        let mut rng = ScriptedRandom::new([0, 1, 2]);
        assert_eq!(Reward::draw(&mut rng), Reward::BackpackUpgrade);
        assert_eq!(Reward::draw(&mut rng), Reward::FullHeal);
        assert_eq!(Reward::draw(&mut rng), Reward::EnhancedSword);
    }

    #[test]
    fn full_heal_reward_restores_to_max() {
        let mut player = knight_with(&[]);
        player.take_damage(45);
        let outcome = grant_reward(&mut player, &mut ScriptedRandom::new([1]));
        assert_eq!(outcome, RewardOutcome::FullHeal { restored: 45 });
        assert_eq!(player.health(), player.max_health());
    }

    #[test]
    fn upgrade_reward_is_only_an_offer() {
        let mut player = knight_with(&[ItemKind::Key]);
        let outcome = grant_reward(&mut player, &mut ScriptedRandom::new([0]));
        assert_eq!(outcome, RewardOutcome::UpgradeOffered { capacity: 10 });
        assert_eq!(player.backpack.capacity(), 5);
    }

    #[test]
    fn healing_without_items_loses_soldier_damage_each_round() {
        let mut player = knight_with(&[]);
        let mut room = guarded_room();
        let (mut fight, _) = MookFight::engage(&room).unwrap();
        let mut rng = ScriptedRandom::default();
        let mut last = player.health();
        while !fight.status().is_over() {
            fight.step(&CombatAction::Heal, &mut player, &mut room, &mut rng);
            assert_eq!(last - player.health(), 10);
            last = player.health();
        }
        assert_eq!(fight.status(), FightStatus::Defeat);
        assert_eq!(room.soldiers().len(), 1);
    }

    #[test]
    fn shield_mitigates_soldier_blows() {
        let mut player = knight_with(&[]);
        player.equip_shield();
        let mut room = guarded_room();
        let (mut fight, _) = MookFight::engage(&room).unwrap();
        let mut rng = ScriptedRandom::default();
        let events = fight.step(&CombatAction::Other("wait".into()), &mut player, &mut room, &mut rng);
        assert_eq!(player.health(), 120);
        assert!(events.contains(&CombatEvent::CounterAttack {
            attacker: "Guard".into(),
            damage: 0,
            health: 120
        }));
    }
}
