pub mod item_type;
pub mod item_registry;

pub use item_type::{ItemCategory, ItemDefinition, ItemId};
pub use item_registry::{ItemRegistry, DEFAULT_MAX_STACK_SIZE};
