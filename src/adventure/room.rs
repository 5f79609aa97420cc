//! Rooms and the directed graph connecting them.
//!
//! Rooms live in a [`RoomGraph`] arena and refer to each other by [`RoomId`],
//! so the cyclic castle map needs no shared ownership. Exits are free-form
//! direction words; a lock belongs to the destination room and is checked
//! against the traveler's backpack at the moment of travel.

use std::collections::BTreeMap;

use super::entity::{Soldier, SoldierId};
use super::inventory::Inventory;
use super::items::ItemKind;

/// Index of a room inside its [`RoomGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

/// Result of trying to leave a room in some direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    Open(RoomId),
    Locked,
    NoExit,
}

#[derive(Debug, Clone)]
pub struct Room {
    pub description: String,
    exits: BTreeMap<String, RoomId>,
    items: Vec<ItemKind>,
    pub locked: bool,
    pub key_item: Option<ItemKind>,
    pub clue: Option<String>,
    soldiers: Vec<Soldier>,
    pub has_dragon: bool,
    pub has_queen: bool,
}

impl Room {
    pub fn new(description: impl Into<String>) -> Self {
        Room {
            description: description.into(),
            exits: BTreeMap::new(),
            items: Vec::new(),
            locked: false,
            key_item: None,
            clue: None,
            soldiers: Vec::new(),
            has_dragon: false,
            has_queen: false,
        }
    }

    /// Lock the room; entering requires `key` in the traveler's backpack.
    pub fn with_lock(mut self, key: ItemKind) -> Self {
        self.locked = true;
        self.key_item = Some(key);
        self
    }

    pub fn with_clue(mut self, clue: impl Into<String>) -> Self {
        self.clue = Some(clue.into());
        self
    }

    /// Register or overwrite the edge leaving in `direction`.
    pub fn set_exit(&mut self, direction: impl Into<String>, target: RoomId) {
        self.exits.insert(direction.into(), target);
    }

    pub fn exit(&self, direction: &str) -> Option<RoomId> {
        self.exits.get(direction).copied()
    }

    /// Exit directions in lexical order.
    pub fn exit_directions(&self) -> Vec<&str> {
        self.exits.keys().map(String::as_str).collect()
    }

    /// Whether a traveler carrying `inventory` may enter this room.
    pub fn admits(&self, inventory: &Inventory) -> bool {
        if !self.locked {
            return true;
        }
        match self.key_item {
            Some(key) => inventory.contains(key),
            None => false,
        }
    }

    pub fn add_item(&mut self, item: ItemKind) {
        self.items.push(item);
    }

    /// Remove the first `item`. Returns false when the room has none.
    pub fn remove_item(&mut self, item: ItemKind) -> bool {
        match self.items.iter().position(|i| *i == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn has_item(&self, item: ItemKind) -> bool {
        self.items.contains(&item)
    }

    pub fn items(&self) -> &[ItemKind] {
        &self.items
    }

    pub fn add_soldier(&mut self, soldier: Soldier) {
        self.soldiers.push(soldier);
    }

    /// Remove the soldier with identity `id`. Same-named soldiers are
    /// unaffected.
    pub fn remove_soldier(&mut self, id: SoldierId) -> Option<Soldier> {
        let index = self.soldiers.iter().position(|s| s.id == id)?;
        Some(self.soldiers.remove(index))
    }

    pub fn soldiers(&self) -> &[Soldier] {
        &self.soldiers
    }

    pub fn soldier_mut(&mut self, id: SoldierId) -> Option<&mut Soldier> {
        self.soldiers.iter_mut().find(|s| s.id == id)
    }

    /// `Location: <description>, Exits: <directions>.`
    pub fn long_description(&self) -> String {
        format!(
            "Location: {}, Exits: {}.",
            self.description,
            self.exit_directions().join(", ")
        )
    }

    /// Items, soldiers, dragon and queen, in that order, joined by ` | `.
    pub fn describe_contents(&self) -> String {
        let mut contents = Vec::new();
        if !self.items.is_empty() {
            let names: Vec<&str> = self.items.iter().map(|i| i.name()).collect();
            contents.push(format!("Items: {}", names.join(", ")));
        }
        if !self.soldiers.is_empty() {
            let names: Vec<&str> = self.soldiers.iter().map(|s| s.name.as_str()).collect();
            contents.push(format!("Soldiers: {}", names.join(", ")));
        }
        if self.has_dragon {
            contents.push("A fierce dragon is here!".to_string());
        }
        if self.has_queen {
            contents.push("The Queen is here, awaiting rescue!".to_string());
        }
        if contents.is_empty() {
            "The room is empty.".to_string()
        } else {
            contents.join(" | ")
        }
    }
}

/// Arena owning every room of a world.
#[derive(Debug, Clone, Default)]
pub struct RoomGraph {
    rooms: Vec<Room>,
}

impl RoomGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_room(&mut self, room: Room) -> RoomId {
        self.rooms.push(room);
        RoomId(self.rooms.len() - 1)
    }

    /// Panics if `id` was not issued by this graph.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    /// Panics if `id` was not issued by this graph.
    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    pub fn set_exit(&mut self, from: RoomId, direction: &str, to: RoomId) {
        self.room_mut(from).set_exit(direction, to);
    }

    /// Follow `direction` out of `from` for a traveler carrying `inventory`.
    pub fn resolve_exit(&self, from: RoomId, direction: &str, inventory: &Inventory) -> ExitOutcome {
        match self.room(from).exit(direction) {
            None => ExitOutcome::NoExit,
            Some(target) if !self.room(target).admits(inventory) => ExitOutcome::Locked,
            Some(target) => ExitOutcome::Open(target),
        }
    }
}
