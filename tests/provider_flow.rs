// Provider integration tests
//
// Drives the built-in providers through a provider registry, the way a host
// would: look up the provider for a container, open a session, run an
// operation and inspect the container afterwards.

use crafting_tweaks::container::{MenuContainer, WORKBENCH};
use crafting_tweaks::crafting::{self, CraftingGrid, GridSession};
use crafting_tweaks::inventory::SlotType;
use crafting_tweaks::provider::{read_grid_view, write_grid_view, GridLayout};
use crafting_tweaks::{
    GridBounds, HostContainer, ItemId, ItemRegistry, ItemStack, Player, PlayerId, ProviderRegistry, SlotRef,
    TweakError, TweakProvider, TweakResult, TweaksConfig,
};
use std::sync::Arc;

fn builtin_registry() -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    registry.register_builtin(&TweaksConfig::default()).unwrap();
    registry.freeze();
    registry
}

fn grid_counts(container: &MenuContainer, start: usize, size: usize) -> Vec<u32> {
    (start..start + size)
        .map(|index| container.slot(index).unwrap().item().count)
        .collect()
}

#[test]
fn test_workbench_round_trip_through_registry() {
    let registry = builtin_registry();
    let items = ItemRegistry::default();
    let mut player = Player::new(PlayerId(1), "steve");
    let mut workbench = MenuContainer::workbench();
    workbench.slot_mut(1).unwrap().put_item(ItemStack::new(ItemId::PLANKS, 64));

    let provider = registry.require_provider_for(&workbench).unwrap();
    let mut session = GridSession::new(&mut player, &items, 0);

    provider.spread_grid(&mut session, &mut workbench).unwrap();
    assert_eq!(grid_counts(&workbench, 1, 9).iter().sum::<u32>(), 64);
    assert!(grid_counts(&workbench, 1, 9).iter().all(|&count| count >= 7));
    assert!(workbench.take_dirty());

    provider.clear_grid(&mut session, &mut workbench).unwrap();
    assert!(provider.craft_matrix(&player, &workbench, 0).unwrap().is_empty());
    assert_eq!(player.inventory.count_items(ItemId::PLANKS), 64);
}

#[test]
fn test_output_slot_survives_grid_operations() {
    let registry = builtin_registry();
    let items = ItemRegistry::default();
    let mut player = Player::new(PlayerId(1), "steve");
    let mut workbench = MenuContainer::workbench();
    workbench.slot_mut(0).unwrap().put_item(ItemStack::single(ItemId::WOODEN_PICKAXE));
    workbench.slot_mut(1).unwrap().put_item(ItemStack::new(ItemId::COBBLESTONE, 3));

    let provider = registry.provider_for(&workbench).unwrap();
    let mut session = GridSession::new(&mut player, &items, 0);
    provider.rotate_grid(&mut session, &mut workbench, false).unwrap();
    provider.spread_grid(&mut session, &mut workbench).unwrap();

    assert_eq!(workbench.slot(0).unwrap().item(), &ItemStack::single(ItemId::WOODEN_PICKAXE));
    // clockwise takes the top-left corner to the bottom-left
    assert_eq!(workbench.slot(7).unwrap().item().item_id, ItemId::COBBLESTONE);
}

#[test]
fn test_failed_clear_leaves_container_and_inventory() {
    let registry = builtin_registry();
    let items = ItemRegistry::default();
    let mut player = Player::new(PlayerId(2), "alex");
    for index in 0..player.inventory.slots().len() {
        player
            .inventory
            .slot_mut(index)
            .unwrap()
            .put_item(ItemStack::new(ItemId::APPLE, 64));
    }
    let inventory_before = player.inventory.clone();

    let mut workbench = MenuContainer::workbench();
    workbench.slot_mut(5).unwrap().put_item(ItemStack::new(ItemId::DIAMOND, 2));
    let provider = registry.provider_for(&workbench).unwrap();

    let mut session = GridSession::new(&mut player, &items, 0);
    let err = provider.clear_grid(&mut session, &mut workbench).unwrap_err();
    assert!(matches!(err, TweakError::InventoryFull { remaining: 2 }));
    assert_eq!(player.inventory, inventory_before);
    assert_eq!(workbench.slot(5).unwrap().item().count, 2);
    assert!(!workbench.is_dirty());

    let mut session = GridSession::new(&mut player, &items, 0).forced(true);
    let dropped = provider.clear_grid(&mut session, &mut workbench).unwrap();
    assert_eq!(dropped, vec![ItemStack::new(ItemId::DIAMOND, 2)]);
    assert!(workbench.slot(5).unwrap().is_empty());
}

#[test]
fn test_forced_clear_disabled_by_config() {
    let registry = builtin_registry();
    let items = ItemRegistry::default();
    let config = TweaksConfig {
        allow_forced_clear: false,
        ..TweaksConfig::default()
    };
    let mut player = Player::new(PlayerId(2), "alex");
    for index in 0..player.inventory.slots().len() {
        player
            .inventory
            .slot_mut(index)
            .unwrap()
            .put_item(ItemStack::new(ItemId::APPLE, 64));
    }
    let mut workbench = MenuContainer::workbench();
    workbench.slot_mut(1).unwrap().put_item(ItemStack::single(ItemId::COAL));
    let provider = registry.provider_for(&workbench).unwrap();

    let mut session = GridSession::new(&mut player, &items, 0)
        .forced(true)
        .restricted_by(&config);
    let err = provider.clear_grid(&mut session, &mut workbench).unwrap_err();
    assert!(matches!(err, TweakError::InventoryFull { .. }));
    assert_eq!(workbench.slot(1).unwrap().item().count, 1);
}

#[test]
fn test_assembler_transfer_targets_selected_grid() {
    let registry = builtin_registry();
    let items = ItemRegistry::default();
    let mut player = Player::new(PlayerId(3), "builder");
    player
        .inventory
        .slot_mut(0)
        .unwrap()
        .put_item(ItemStack::new(ItemId::IRON_INGOT, 100));
    let mut assembler = MenuContainer::assembler();
    let provider = registry.provider_for(&assembler).unwrap();
    assert_eq!(provider.mod_id(), "assembly");

    let mut session = GridSession::new(&mut player, &items, 1);
    assert!(provider.can_transfer_from(&session, &assembler, SlotRef::Player(0)));
    assert!(provider
        .transfer_into_grid(&mut session, &mut assembler, SlotRef::Player(0))
        .unwrap());

    assert!(provider.craft_matrix(&player, &assembler, 0).unwrap().is_empty());
    let grid = provider.craft_matrix(&player, &assembler, 1).unwrap();
    assert_eq!(grid.total_quantity(), 100);
    assert_eq!(grid.slot(0).map(|slot| slot.count), Some(64));
    assert_eq!(grid.slot(1).map(|slot| slot.count), Some(36));
    assert!(player.inventory.slot(0).unwrap().is_empty());
}

#[test]
fn test_partial_transfer_keeps_rest_in_source() {
    let registry = builtin_registry();
    let items = ItemRegistry::default();
    let mut player = Player::new(PlayerId(3), "builder");
    player
        .inventory
        .slot_mut(4)
        .unwrap()
        .put_item(ItemStack::new(ItemId::COAL, 20));
    let mut crafting = MenuContainer::player_crafting();
    for index in 1..5 {
        crafting.slot_mut(index).unwrap().put_item(ItemStack::new(ItemId::COAL, 60));
    }
    let provider = registry.provider_for(&crafting).unwrap();

    let mut session = GridSession::new(&mut player, &items, 0);
    let done = provider
        .transfer_into_grid(&mut session, &mut crafting, SlotRef::Player(4))
        .unwrap();
    assert!(!done);
    assert_eq!(player.inventory.slot(4).unwrap().item().count, 4);
    assert_eq!(grid_counts(&crafting, 1, 4), vec![64; 4]);
}

#[test]
fn test_put_rejects_other_kind_without_changes() {
    let registry = builtin_registry();
    let items = ItemRegistry::default();
    let mut player = Player::new(PlayerId(4), "alex");
    let mut workbench = MenuContainer::workbench();
    workbench.slot_mut(1).unwrap().put_item(ItemStack::new(ItemId::STICK, 2));
    let provider = registry.provider_for(&workbench).unwrap();

    let mut session = GridSession::new(&mut player, &items, 0);
    let mut stack = ItemStack::new(ItemId::COAL, 32);
    let err = provider
        .put_into_grid(&mut session, &mut workbench, &mut stack, 0)
        .unwrap_err();
    assert!(matches!(
        err,
        TweakError::IncompatibleStack {
            held: ItemId::STICK,
            incoming: ItemId::COAL
        }
    ));
    assert_eq!(workbench.slot(1).unwrap().item().count, 2);
    assert_eq!(stack, ItemStack::new(ItemId::COAL, 32));
    assert!(!workbench.is_dirty());
}

/// A mod container with its 2x2 grid at the default grid start
struct FurnaceGridProvider;

impl FurnaceGridProvider {
    fn layout(&self, container: &dyn HostContainer, grid_id: usize) -> TweakResult<GridLayout> {
        if !self.is_valid_container(container) || grid_id != 0 {
            return Err(TweakError::InvalidGrid { grid_id });
        }
        Ok(GridLayout {
            grid_id,
            bounds: GridBounds::new(1, 4),
            width: 2,
            height: 2,
        })
    }

    fn update(
        &self,
        session: &GridSession<'_>,
        container: &mut dyn HostContainer,
        op: impl FnOnce(&mut CraftingGrid) -> TweakResult<()>,
    ) -> TweakResult<()> {
        let layout = self.layout(container, session.grid_id)?;
        let mut grid = read_grid_view(container, &layout)?;
        op(&mut grid)?;
        write_grid_view(container, &layout, &grid)
    }
}

impl TweakProvider for FurnaceGridProvider {
    fn mod_id(&self) -> &str {
        "smeltery"
    }

    fn load(&self) -> bool {
        true
    }

    fn requires_server_side(&self) -> bool {
        false
    }

    fn is_valid_container(&self, container: &dyn HostContainer) -> bool {
        container.container_type() == "smeltery" && container.slot_count() >= 5
    }

    fn craft_matrix(&self, _player: &Player, container: &dyn HostContainer, grid_id: usize) -> Option<CraftingGrid> {
        let layout = self.layout(container, grid_id).ok()?;
        read_grid_view(container, &layout).ok()
    }

    fn clear_grid(
        &self,
        session: &mut GridSession<'_>,
        container: &mut dyn HostContainer,
    ) -> TweakResult<Vec<ItemStack>> {
        let layout = self.layout(container, session.grid_id)?;
        let mut grid = read_grid_view(container, &layout)?;
        let dropped = crafting::clear_grid(&mut grid, &mut session.player.inventory, session.forced, session.items)?;
        write_grid_view(container, &layout, &grid)?;
        Ok(dropped)
    }

    fn rotate_grid(
        &self,
        session: &mut GridSession<'_>,
        container: &mut dyn HostContainer,
        counter_clockwise: bool,
    ) -> TweakResult<()> {
        self.update(session, container, |grid| crafting::rotate_grid(grid, counter_clockwise))
    }

    fn balance_grid(&self, session: &mut GridSession<'_>, container: &mut dyn HostContainer) -> TweakResult<()> {
        self.update(session, container, |grid| {
            crafting::balance_grid(grid);
            Ok(())
        })
    }

    fn spread_grid(&self, session: &mut GridSession<'_>, container: &mut dyn HostContainer) -> TweakResult<()> {
        self.update(session, container, |grid| {
            crafting::spread_grid(grid);
            Ok(())
        })
    }

    fn can_transfer_from(&self, _session: &GridSession<'_>, _container: &dyn HostContainer, _source: SlotRef) -> bool {
        false
    }

    fn transfer_into_grid(
        &self,
        _session: &mut GridSession<'_>,
        _container: &mut dyn HostContainer,
        _source: SlotRef,
    ) -> TweakResult<bool> {
        Ok(false)
    }

    fn put_into_grid(
        &self,
        session: &mut GridSession<'_>,
        container: &mut dyn HostContainer,
        stack: &mut ItemStack,
        index: usize,
    ) -> TweakResult<()> {
        let layout = self.layout(container, session.grid_id)?;
        let mut grid = read_grid_view(container, &layout)?;
        let mut pending = stack.clone();
        crafting::put_into_grid(&mut pending, &mut grid, index, session.items)?;
        write_grid_view(container, &layout, &grid)?;
        *stack = pending;
        Ok(())
    }
}

#[test]
fn test_third_party_provider_uses_default_bounds() {
    let mut registry = ProviderRegistry::new();
    registry.register_builtin(&TweaksConfig::default()).unwrap();
    assert!(registry.register(Arc::new(FurnaceGridProvider)).unwrap());
    registry.freeze();

    let items = ItemRegistry::default();
    let mut player = Player::new(PlayerId(5), "smith");
    let mut container = MenuContainer::new(
        "smeltery",
        &[
            SlotType::Output,
            SlotType::CraftingGrid,
            SlotType::CraftingGrid,
            SlotType::CraftingGrid,
            SlotType::CraftingGrid,
        ],
    );
    container.slot_mut(1).unwrap().put_item(ItemStack::new(ItemId::COAL, 9));
    container.slot_mut(2).unwrap().put_item(ItemStack::new(ItemId::COAL, 1));

    let provider = registry.provider_for(&container).unwrap();
    assert_eq!(provider.mod_id(), "smeltery");
    assert_eq!(provider.grid_bounds(&player, &container, 0), GridBounds::default());

    let mut session = GridSession::new(&mut player, &items, 0);
    provider.balance_grid(&mut session, &mut container).unwrap();
    assert_eq!(grid_counts(&container, 1, 4), vec![5, 5, 0, 0]);

    // not a workbench, so the vanilla provider stays out of it
    assert!(registry.provider("minecraft").unwrap().craft_matrix(&player, &container, 0).is_none());
    let workbench = MenuContainer::new(WORKBENCH, &[SlotType::Output]);
    assert!(registry.provider_for(&workbench).is_none());
}
