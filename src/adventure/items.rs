//! The closed set of items that exist in the castle.
//!
//! Console arguments are resolved into an [`ItemKind`] once, at parse time, so
//! handlers compare enum values instead of loose strings.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Every item the player can find, carry, or be rewarded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Sword,
    Shield,
    HealthDrink,
    HealthBag,
    MagicScroll,
    Key,
    AncientArtifact,
    EnhancedSword,
}

impl ItemKind {
    pub const ALL: [ItemKind; 8] = [
        ItemKind::Sword,
        ItemKind::Shield,
        ItemKind::HealthDrink,
        ItemKind::HealthBag,
        ItemKind::MagicScroll,
        ItemKind::Key,
        ItemKind::AncientArtifact,
        ItemKind::EnhancedSword,
    ];

    /// Name as typed by the player and shown in listings.
    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Sword => "sword",
            ItemKind::Shield => "shield",
            ItemKind::HealthDrink => "health drink",
            ItemKind::HealthBag => "health bag",
            ItemKind::MagicScroll => "magic scroll",
            ItemKind::Key => "key",
            ItemKind::AncientArtifact => "ancient artifact",
            ItemKind::EnhancedSword => "enhanced sword",
        }
    }

    /// Health restored when the item is consumed, if it is a healing item.
    pub fn heal_amount(self) -> Option<u32> {
        match self {
            ItemKind::HealthDrink => Some(30),
            ItemKind::HealthBag => Some(50),
            _ => None,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a console token names no known item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized item: {0}")]
pub struct UnknownItem(pub String);

impl FromStr for ItemKind {
    type Err = UnknownItem;

    /// Case-insensitive; inner runs of whitespace collapse to a single space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        ItemKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| UnknownItem(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Health  Drink".parse::<ItemKind>(), Ok(ItemKind::HealthDrink));
        assert_eq!(" SWORD ".parse::<ItemKind>(), Ok(ItemKind::Sword));
        assert_eq!(
            "magic scroll".parse::<ItemKind>(),
            Ok(ItemKind::MagicScroll)
        );
    }

    #[test]
    fn unknown_names_are_reported_verbatim() {
        let err = "golden goose".parse::<ItemKind>().unwrap_err();
        assert_eq!(err, UnknownItem("golden goose".into()));
    }

    #[test]
    fn only_drinks_and_bags_heal() {
        let healers: Vec<_> = ItemKind::ALL
            .into_iter()
            .filter(|k| k.heal_amount().is_some())
            .collect();
        assert_eq!(healers, vec![ItemKind::HealthDrink, ItemKind::HealthBag]);
    }
}
