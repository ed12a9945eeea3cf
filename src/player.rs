use crate::inventory::PlayerInventory;
use serde::{Deserialize, Serialize};

/// Unique identifier for a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

/// The entity acting on a grid
#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub inventory: PlayerInventory,
}

impl Player {
    /// Player with an empty standard inventory
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            inventory: PlayerInventory::new(),
        }
    }

    pub fn with_inventory(mut self, inventory: PlayerInventory) -> Self {
        self.inventory = inventory;
        self
    }
}
