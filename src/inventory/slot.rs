use super::ItemStack;
use serde::{Deserialize, Serialize};

/// Type of inventory slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotType {
    Normal,
    Hotbar,
    CraftingGrid,
    /// Result slots; items may be taken out but never transferred from
    Output,
}

/// A single slot in an inventory or container
#[derive(Debug, Clone, PartialEq)]
pub struct InventorySlot {
    pub slot_type: SlotType,
    pub item: ItemStack,
}

impl InventorySlot {
    /// Create an empty slot
    pub fn empty(slot_type: SlotType) -> Self {
        Self {
            slot_type,
            item: ItemStack::empty(),
        }
    }

    /// Create a slot with an item
    pub fn with_item(slot_type: SlotType, item: ItemStack) -> Self {
        Self { slot_type, item }
    }

    /// Check if slot is empty
    pub fn is_empty(&self) -> bool {
        self.item.is_empty()
    }

    pub fn item(&self) -> &ItemStack {
        &self.item
    }

    pub fn item_mut(&mut self) -> &mut ItemStack {
        &mut self.item
    }

    /// Take the item from this slot
    pub fn take_item(&mut self) -> ItemStack {
        self.item.take()
    }

    /// Put an item in this slot, returns the previous item
    pub fn put_item(&mut self, item: ItemStack) -> ItemStack {
        std::mem::replace(&mut self.item, item)
    }

    /// Whether items may be moved out of this slot by a bulk transfer
    pub fn allows_transfer(&self) -> bool {
        self.slot_type != SlotType::Output
    }
}
