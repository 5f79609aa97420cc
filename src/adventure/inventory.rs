//! Bounded backpack for the player's items.
use super::items::ItemKind;

/// Capacity every fresh backpack starts with.
pub const DEFAULT_BACKPACK_CAPACITY: usize = 5;

/// Extra slots granted by a backpack upgrade.
pub const BACKPACK_UPGRADE_STEP: usize = 5;

/// Ordered, capacity-limited collection of held items.
///
/// `contents().len() <= capacity()` always holds; a full backpack rejects
/// additions instead of growing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    capacity: usize,
    contents: Vec<ItemKind>,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Inventory {
            capacity,
            contents: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn contents(&self) -> &[ItemKind] {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.contents.len() >= self.capacity
    }

    /// Append `item` if there is a free slot. Returns false when full.
    pub fn add(&mut self, item: ItemKind) -> bool {
        if self.is_full() {
            return false;
        }
        self.contents.push(item);
        true
    }

    /// Remove the first occurrence of `item`. Returns whether one was present.
    pub fn remove(&mut self, item: ItemKind) -> bool {
        match self.contents.iter().position(|held| *held == item) {
            Some(index) => {
                self.contents.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, item: ItemKind) -> bool {
        self.contents.contains(&item)
    }

    /// A larger backpack holding the same items in the same order.
    pub fn upgraded(&self, increment: usize) -> Inventory {
        let mut bigger = Inventory::new(self.capacity + increment);
        for item in &self.contents {
            // Cannot fail: the new capacity exceeds the old item count.
            bigger.add(*item);
        }
        bigger
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory::new(DEFAULT_BACKPACK_CAPACITY)
    }
}
