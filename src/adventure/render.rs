//! Text rendering for health bars, combat narration and inventory listings.

use super::combat::{CombatEvent, RewardOutcome};
use super::inventory::Inventory;

/// Cells in every health bar.
pub const BAR_WIDTH: usize = 20;
const FILLED: char = '█';
const EMPTY: char = '-';

/// `Name Health: [████----] current/max`, filled in proportion to
/// `health / max_health` and clamped to the bar width.
pub fn health_bar(name: &str, health: u32, max_health: u32) -> String {
    let filled = if max_health == 0 {
        0
    } else {
        ((BAR_WIDTH as u64 * health as u64) / max_health as u64).min(BAR_WIDTH as u64) as usize
    };
    let bar: String = std::iter::repeat(FILLED)
        .take(filled)
        .chain(std::iter::repeat(EMPTY).take(BAR_WIDTH - filled))
        .collect();
    format!("{} Health: [{}] {}/{}", name, bar, health, max_health)
}

/// One line per held item, or a single empty-backpack line.
pub fn inventory_lines(inventory: &Inventory) -> Vec<String> {
    if inventory.is_empty() {
        return vec!["Your backpack is empty.".to_string()];
    }
    let mut lines = vec!["You are carrying:".to_string()];
    lines.extend(inventory.contents().iter().map(|item| format!("- {}", item)));
    lines.push(format!(
        "({} of {} slots used)",
        inventory.len(),
        inventory.capacity()
    ));
    lines
}

/// Player-facing sentence for a combat event.
pub fn narrate(event: &CombatEvent) -> String {
    match event {
        CombatEvent::Engaged { opponent } => format!("You are fighting {}!", opponent),
        CombatEvent::SwordReady { enchanted: true } => {
            "Your sword glows with magical energy!".to_string()
        }
        CombatEvent::SwordReady { enchanted: false } => {
            "Your sword is sharp but ordinary.".to_string()
        }
        CombatEvent::OpeningStrike { damage, .. } => {
            format!("The battle begins! Your first strike deals {} damage.", damage)
        }
        CombatEvent::PlayerStrikes { damage, .. } => {
            format!("You strike for {} damage!", damage)
        }
        CombatEvent::Healed { item, restored } => {
            format!("You used a {} and restored {} health.", item, restored)
        }
        CombatEvent::NoHealingItems => "You have no healing items left!".to_string(),
        CombatEvent::TurnLost { .. } => "Invalid action. You lose your turn!".to_string(),
        CombatEvent::DragonFire { damage, .. } => {
            format!("The dragon breathes fire and deals {} damage!", damage)
        }
        CombatEvent::CounterAttack {
            attacker, damage, ..
        } => format!("{} counter-attacks for {} damage!", attacker, damage),
        CombatEvent::OpponentDefeated { opponent } => {
            format!("You have defeated {}!", opponent)
        }
        CombatEvent::PlayerDefeated { by } => {
            format!("Game Over !! You have been defeated by {}...", by)
        }
        CombatEvent::Rewarded(RewardOutcome::UpgradeOffered { .. }) => {
            "You are rewarded with a bag upgrade!".to_string()
        }
        CombatEvent::Rewarded(RewardOutcome::FullHeal { .. }) => {
            "You are rewarded with a full heal!".to_string()
        }
        CombatEvent::Rewarded(RewardOutcome::EnhancedSword { stored: true }) => {
            "You are rewarded with a stronger sword!".to_string()
        }
        CombatEvent::Rewarded(RewardOutcome::EnhancedSword { stored: false }) => {
            "A stronger sword is your reward, but your backpack is full. You leave it behind."
                .to_string()
        }
    }
}
