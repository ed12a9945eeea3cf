//! Moving stacks from an inventory slot into a grid

use super::CraftingGrid;
use crate::error::{TweakError, TweakResult};
use crate::inventory::{insert_first_fit, merge, InventorySlot, ItemStack};
use crate::item::ItemRegistry;

/// Where a transfer should place its items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferTarget {
    /// Shift-click style: same-kind slots first, then empty ones
    Auto,
    /// A single grid slot
    Index(usize),
}

/// One click's worth of transfer, consumed by [`TransferRequest::execute`]
#[derive(Debug)]
pub struct TransferRequest<'a> {
    pub source: &'a mut InventorySlot,
    pub grid: &'a mut CraftingGrid,
    pub target: TransferTarget,
}

impl<'a> TransferRequest<'a> {
    pub fn new(source: &'a mut InventorySlot, grid: &'a mut CraftingGrid, target: TransferTarget) -> Self {
        Self { source, grid, target }
    }

    /// Run the transfer, returning true when the source slot ended up empty
    pub fn execute(self, items: &ItemRegistry) -> TweakResult<bool> {
        if !can_transfer_from(self.source) {
            return Ok(false);
        }
        match self.target {
            TransferTarget::Auto => Ok(transfer_into_grid(self.source.item_mut(), self.grid, items)),
            TransferTarget::Index(index) => {
                put_into_grid(self.source.item_mut(), self.grid, index, items)?;
                Ok(self.source.is_empty())
            }
        }
    }
}

/// Whether bulk transfer may take items out of this slot
pub fn can_transfer_from(source: &InventorySlot) -> bool {
    source.allows_transfer()
}

/// Merge as much of `source` as fits into the grid
///
/// Slots already holding the same kind are filled first, then empty slots,
/// both in index order. Whatever does not fit stays in `source`. Returns true
/// when `source` is empty afterwards.
pub fn transfer_into_grid(source: &mut ItemStack, grid: &mut CraftingGrid, items: &ItemRegistry) -> bool {
    let before = source.count;
    let stack = source.take();
    *source = insert_first_fit(grid.slots_mut(), stack, items, |_, _| true);

    log::debug!(
        "[crafting::transfer] moved {} items into grid {}, {} left",
        before - source.count,
        grid.grid_id(),
        source.count
    );
    source.is_empty()
}

/// Merge a stack into one grid slot
///
/// The slot must be empty or hold the same kind of item. Whatever does not
/// fit stays in `stack`; on error neither the stack nor the grid changes.
pub fn put_into_grid(
    stack: &mut ItemStack,
    grid: &mut CraftingGrid,
    index: usize,
    items: &ItemRegistry,
) -> TweakResult<()> {
    let size = grid.size();
    let slot = grid
        .slot_mut(index)
        .ok_or(TweakError::IndexOutOfRange { index, size })?;
    merge(slot, stack, items)
}
