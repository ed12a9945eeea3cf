use super::container::Container;
use super::item::{insert_first_fit, ItemStack};
use super::slot::{InventorySlot, SlotType};
use crate::item::{ItemId, ItemRegistry};

/// Size of the hotbar
pub const HOTBAR_SIZE: usize = 9;
/// Total inventory size (including hotbar)
pub const INVENTORY_SIZE: usize = 36; // 9 hotbar + 27 main inventory

/// Player's inventory
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerInventory {
    slots: Vec<InventorySlot>,
}

impl PlayerInventory {
    /// Create a new empty inventory
    pub fn new() -> Self {
        Self::with_size(INVENTORY_SIZE)
    }

    /// Create an inventory with a custom number of slots, hotbar first
    pub fn with_size(size: usize) -> Self {
        let slots = (0..size)
            .map(|index| {
                if index < HOTBAR_SIZE {
                    InventorySlot::empty(SlotType::Hotbar)
                } else {
                    InventorySlot::empty(SlotType::Normal)
                }
            })
            .collect();
        Self { slots }
    }

    /// Get a slot by index
    pub fn slot(&self, index: usize) -> Option<&InventorySlot> {
        self.slots.get(index)
    }

    /// Get a mutable slot by index
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut InventorySlot> {
        self.slots.get_mut(index)
    }

    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    /// Get hotbar slots
    pub fn hotbar_slots(&self) -> &[InventorySlot] {
        &self.slots[..HOTBAR_SIZE.min(self.slots.len())]
    }

    /// Add a stack, topping up partial stacks before using empty slots
    ///
    /// Returns the items that did not fit.
    pub fn add_item(&mut self, item: ItemStack, items: &ItemRegistry) -> ItemStack {
        let mut stacks = self.snapshot();
        let rest = insert_first_fit(&mut stacks, item, items, |_, _| true);
        self.restore(stacks);
        rest
    }

    /// Count total items of a specific type
    pub fn count_items(&self, item_id: ItemId) -> u64 {
        self.slots
            .iter()
            .filter(|slot| !slot.is_empty() && slot.item.item_id == item_id)
            .map(|slot| slot.item.count as u64)
            .sum()
    }

    /// Get the first empty slot index
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.is_empty())
    }

    /// Clear all items from inventory
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.take_item();
        }
    }
}

impl Default for PlayerInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Container for PlayerInventory {
    fn size(&self) -> usize {
        self.slots.len()
    }

    fn item(&self, slot: usize) -> Option<&ItemStack> {
        self.slots.get(slot).map(InventorySlot::item)
    }

    fn set_item(&mut self, slot: usize, item: ItemStack) {
        if let Some(slot) = self.slots.get_mut(slot) {
            slot.put_item(item);
        }
    }
}
