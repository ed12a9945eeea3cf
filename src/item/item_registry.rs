use crate::config::TweaksConfig;
use crate::item::{ItemCategory, ItemDefinition, ItemId};
use rustc_hash::FxHashMap;

/// Stack size used when nothing else is known about an item
pub const DEFAULT_MAX_STACK_SIZE: u32 = 64;

/// Registry for all item types
#[derive(Debug, Clone)]
pub struct ItemRegistry {
    items: FxHashMap<ItemId, ItemDefinition>,
    default_max_stack_size: u32,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self {
            items: FxHashMap::default(),
            default_max_stack_size: DEFAULT_MAX_STACK_SIZE,
        }
    }

    /// Empty registry whose unknown items stack to the configured size
    pub fn from_config(config: &TweaksConfig) -> Self {
        Self {
            items: FxHashMap::default(),
            default_max_stack_size: config.default_max_stack_size.max(1),
        }
    }

    /// Register a new item, replacing any previous definition
    pub fn register(&mut self, id: ItemId, definition: ItemDefinition) {
        if let Some(previous) = self.items.insert(id, definition) {
            log::debug!("[item_registry] replaced definition '{}' for {:?}", previous.name, id);
        }
    }

    /// Get an item by ID
    pub fn get(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.items.get(&id)
    }

    /// Maximum number of items of this type in one slot, never zero
    pub fn max_stack_size(&self, id: ItemId) -> u32 {
        self.items
            .get(&id)
            .map_or(self.default_max_stack_size, |def| def.max_stack_size)
            .max(1)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Registry seeded with the standard item set
    pub fn with_default_items() -> Self {
        let mut registry = Self::new();
        registry.init_default_items();
        registry
    }

    /// Register the standard item set
    pub fn init_default_items(&mut self) {
        self.register(ItemId::COBBLESTONE, ItemDefinition::new("Cobblestone", ItemCategory::Block));
        self.register(ItemId::PLANKS, ItemDefinition::new("Planks", ItemCategory::Block));

        self.register(ItemId::STICK, ItemDefinition::new("Stick", ItemCategory::Material));
        self.register(ItemId::COAL, ItemDefinition::new("Coal", ItemCategory::Material));
        self.register(ItemId::IRON_INGOT, ItemDefinition::new("Iron Ingot", ItemCategory::Material));
        self.register(ItemId::DIAMOND, ItemDefinition::new("Diamond", ItemCategory::Material));
        self.register(
            ItemId::ENDER_PEARL,
            ItemDefinition::new("Ender Pearl", ItemCategory::Material).with_max_stack_size(16),
        );

        self.register(ItemId::WOODEN_PICKAXE, ItemDefinition::new("Wooden Pickaxe", ItemCategory::Tool));
        self.register(ItemId::IRON_PICKAXE, ItemDefinition::new("Iron Pickaxe", ItemCategory::Tool));

        self.register(ItemId::APPLE, ItemDefinition::new("Apple", ItemCategory::Food));
    }
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::with_default_items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_items() {
        let registry = ItemRegistry::default();
        assert_eq!(registry.max_stack_size(ItemId::PLANKS), 64);
        assert_eq!(registry.max_stack_size(ItemId::IRON_PICKAXE), 1);
        assert_eq!(registry.max_stack_size(ItemId::ENDER_PEARL), 16);
        assert_eq!(registry.get(ItemId::STICK).map(|d| d.name.as_str()), Some("Stick"));
    }

    #[test]
    fn test_unknown_item_uses_configured_default() {
        let config = TweaksConfig {
            default_max_stack_size: 32,
            ..TweaksConfig::default()
        };
        let registry = ItemRegistry::from_config(&config);
        assert!(registry.is_empty());
        assert_eq!(registry.max_stack_size(ItemId(4242)), 32);
    }

    #[test]
    fn test_zero_stack_size_is_clamped() {
        let mut registry = ItemRegistry::new();
        registry.register(
            ItemId(7),
            ItemDefinition {
                name: "Broken".to_string(),
                category: ItemCategory::Material,
                max_stack_size: 0,
            },
        );
        assert_eq!(registry.max_stack_size(ItemId(7)), 1);
    }
}
