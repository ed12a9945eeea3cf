use serde::{Deserialize, Serialize};

/// Unique identifier for an item type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

/// Broad item categories, used to pick a default stack size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Block,
    Material,
    Tool,
    Food,
}

impl ItemCategory {
    /// Stack size for items of this category unless overridden
    pub fn default_stack_size(&self) -> u32 {
        match self {
            ItemCategory::Tool => 1, // Tools don't stack
            ItemCategory::Block | ItemCategory::Material | ItemCategory::Food => 64,
        }
    }
}

/// Static description of an item type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub name: String,
    pub category: ItemCategory,
    pub max_stack_size: u32,
}

impl ItemDefinition {
    /// Definition using the category's stack size
    pub fn new(name: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            name: name.into(),
            category,
            max_stack_size: category.default_stack_size(),
        }
    }

    /// Override the stack size
    pub fn with_max_stack_size(mut self, max_stack_size: u32) -> Self {
        self.max_stack_size = max_stack_size.max(1);
        self
    }
}

/// Common item IDs
impl ItemId {
    /// The empty identity
    pub const AIR: ItemId = ItemId(0);

    // Blocks (1-999)
    pub const COBBLESTONE: ItemId = ItemId(13);
    pub const PLANKS: ItemId = ItemId(14);

    // Materials (1000-1999)
    pub const STICK: ItemId = ItemId(1000);
    pub const COAL: ItemId = ItemId(1001);
    pub const IRON_INGOT: ItemId = ItemId(1002);
    pub const DIAMOND: ItemId = ItemId(1004);
    pub const ENDER_PEARL: ItemId = ItemId(1005);

    // Tools (2000-2999)
    pub const WOODEN_PICKAXE: ItemId = ItemId(2000);
    pub const IRON_PICKAXE: ItemId = ItemId(2002);

    // Food (3000-3999)
    pub const APPLE: ItemId = ItemId(3000);
}
