use super::HostContainer;
use crate::inventory::{InventorySlot, SlotType};

/// Container type of a 3x3 crafting table
pub const WORKBENCH: &str = "workbench";
/// Container type of the 2x2 grid in the player's own inventory screen
pub const PLAYER_CRAFTING: &str = "player_crafting";
/// Container type of a machine with two 3x3 grids
pub const ASSEMBLER: &str = "assembler";

/// A host container backed by a plain slot list
#[derive(Debug, Clone, PartialEq)]
pub struct MenuContainer {
    container_type: String,
    slots: Vec<InventorySlot>,
    dirty: bool,
}

impl MenuContainer {
    /// Build a container from a slot layout
    pub fn new(container_type: impl Into<String>, layout: &[SlotType]) -> Self {
        Self {
            container_type: container_type.into(),
            slots: layout.iter().map(|&slot_type| InventorySlot::empty(slot_type)).collect(),
            dirty: false,
        }
    }

    /// Output slot 0, 3x3 grid at slots 1..10
    pub fn workbench() -> Self {
        Self::new(WORKBENCH, &layout(1, 9))
    }

    /// Output slot 0, 2x2 grid at slots 1..5
    pub fn player_crafting() -> Self {
        Self::new(PLAYER_CRAFTING, &layout(1, 4))
    }

    /// Output slots 0 and 1, grids at slots 2..11 and 11..20
    pub fn assembler() -> Self {
        Self::new(ASSEMBLER, &layout(2, 18))
    }

    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Acknowledge a sync, clearing the dirty flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

fn layout(outputs: usize, grid_slots: usize) -> Vec<SlotType> {
    std::iter::repeat(SlotType::Output)
        .take(outputs)
        .chain(std::iter::repeat(SlotType::CraftingGrid).take(grid_slots))
        .collect()
}

impl HostContainer for MenuContainer {
    fn container_type(&self) -> &str {
        &self.container_type
    }

    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn slot(&self, index: usize) -> Option<&InventorySlot> {
        self.slots.get(index)
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut InventorySlot> {
        self.slots.get_mut(index)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
