//! Container trait for player-side item storage.

use super::ItemStack;

/// A fixed number of item slots that stacks can be placed into.
///
/// Grid operations that return items to a player go through this trait, so
/// any storage with indexed slots can receive them.
pub trait Container {
    /// Returns the number of slots in this container.
    fn size(&self) -> usize;

    /// Gets the item in the given slot, or `None` past the end.
    fn item(&self, slot: usize) -> Option<&ItemStack>;

    /// Sets the item in the given slot. Out of range slots are ignored.
    fn set_item(&mut self, slot: usize, item: ItemStack);

    /// Returns whether a given item can be placed in the given slot.
    fn can_place_item(&self, _slot: usize, _item: &ItemStack) -> bool {
        true
    }

    /// Returns true if all slots are empty.
    fn is_empty(&self) -> bool {
        (0..self.size()).all(|slot| self.item(slot).map_or(true, ItemStack::is_empty))
    }

    /// Copies every slot, in index order.
    fn snapshot(&self) -> Vec<ItemStack> {
        (0..self.size())
            .map(|slot| self.item(slot).cloned().unwrap_or_default())
            .collect()
    }

    /// Writes a snapshot back, slot by slot.
    fn restore(&mut self, snapshot: Vec<ItemStack>) {
        for (slot, item) in snapshot.into_iter().enumerate() {
            self.set_item(slot, item);
        }
    }
}
