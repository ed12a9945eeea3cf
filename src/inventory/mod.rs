pub mod container;
pub mod item;
pub mod player_inventory;
pub mod slot;

pub use container::Container;
pub use item::{can_merge, insert_first_fit, kind_totals, merge, total_quantity, ItemStack};
pub use player_inventory::{PlayerInventory, HOTBAR_SIZE, INVENTORY_SIZE};
pub use slot::{InventorySlot, SlotType};
