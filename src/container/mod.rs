//! Host-side containers that providers adapt into crafting grids

pub mod menu;

pub use menu::{MenuContainer, ASSEMBLER, PLAYER_CRAFTING, WORKBENCH};

use crate::inventory::InventorySlot;

/// A container owned by the host, exposing its slots in a flat list.
///
/// Providers read a grid's slot range out of a host container, run a grid
/// operation on the copy and write the range back.
pub trait HostContainer {
    /// Identifier of the container family, used to pick a provider.
    fn container_type(&self) -> &str;

    /// Number of slots in the container.
    fn slot_count(&self) -> usize;

    fn slot(&self, index: usize) -> Option<&InventorySlot>;

    fn slot_mut(&mut self, index: usize) -> Option<&mut InventorySlot>;

    /// Tells the host the contents changed and need syncing.
    fn mark_dirty(&mut self);
}
