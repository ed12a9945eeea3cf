use anyhow::{Context, Result};
use crafting_tweaks::{
    crafting::{CraftingGrid, GridSession},
    init_logging,
    provider::{self, SlotRef},
    HostContainer, ItemId, ItemRegistry, ItemStack, MenuContainer, Player, PlayerId, TweakProvider,
    TweaksConfig,
};
use std::sync::Arc;

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => TweaksConfig::load(&path).with_context(|| format!("loading config from {}", path))?,
        None => TweaksConfig::default(),
    };
    init_logging(&config);

    let items = ItemRegistry::with_default_items();

    let mut registry = crafting_tweaks::ProviderRegistry::new();
    registry.register_builtin(&config)?;
    for mod_id in registry.mod_ids() {
        provider::register_provider(registry.provider(mod_id).context("provider vanished")?)?;
    }
    provider::finish_registration();

    let mut player = Player::new(PlayerId(1), "demo");
    player
        .inventory
        .add_item(ItemStack::new(ItemId::COBBLESTONE, 40), &items);

    // Crafting table: spread, balance, rotate, then clear
    let mut workbench = MenuContainer::workbench();
    let workbench_provider = lookup(&workbench)?;
    put(&mut workbench, 1, ItemStack::new(ItemId::PLANKS, 64));
    put(&mut workbench, 2, ItemStack::new(ItemId::STICK, 3));
    show("initial", workbench_provider.as_ref(), &player, &workbench);

    let mut session = GridSession::new(&mut player, &items, 0);
    workbench_provider.spread_grid(&mut session, &mut workbench)?;
    show("spread", workbench_provider.as_ref(), session.player, &workbench);

    let mut planks = ItemStack::new(ItemId::PLANKS, 5);
    workbench_provider.put_into_grid(&mut session, &mut workbench, &mut planks, 0)?;
    log::info!("[tweak_demo] put planks, rest {}", planks.count);
    workbench_provider.balance_grid(&mut session, &mut workbench)?;
    show("balanced", workbench_provider.as_ref(), session.player, &workbench);

    workbench_provider.rotate_grid(&mut session, &mut workbench, false)?;
    show("rotated", workbench_provider.as_ref(), session.player, &workbench);

    let mut session = session.forced(true).restricted_by(&config);
    let dropped = workbench_provider.clear_grid(&mut session, &mut workbench)?;
    log::info!("[tweak_demo] cleared workbench, {} stacks to drop", dropped.len());

    // Shift-click and single-slot placement into the assembler's second grid
    let mut assembler = MenuContainer::assembler();
    let assembler_provider = lookup(&assembler)?;
    let mut session = GridSession::new(&mut player, &items, 1);
    let source = SlotRef::Player(0);
    if assembler_provider.can_transfer_from(&session, &assembler, source) {
        let done = assembler_provider.transfer_into_grid(&mut session, &mut assembler, source)?;
        log::info!("[tweak_demo] transfer complete: {}", done);
    }
    let mut pearls = ItemStack::new(ItemId::ENDER_PEARL, 20);
    assembler_provider.put_into_grid(&mut session, &mut assembler, &mut pearls, 4)?;
    log::info!("[tweak_demo] put into assembler, rest {}", pearls.count);
    show("assembler", assembler_provider.as_ref(), session.player, &assembler);

    Ok(())
}

fn lookup(container: &dyn HostContainer) -> Result<Arc<dyn TweakProvider>> {
    provider::provider_for(container)
        .with_context(|| format!("no provider for {}", container.container_type()))
}

fn put(container: &mut MenuContainer, index: usize, stack: ItemStack) {
    if let Some(slot) = container.slot_mut(index) {
        slot.put_item(stack);
    }
}

fn show(label: &str, provider: &dyn TweakProvider, player: &Player, container: &dyn HostContainer) {
    let grids: Vec<CraftingGrid> = (0..2)
        .filter_map(|grid_id| provider.craft_matrix(player, container, grid_id))
        .collect();
    for grid in grids {
        log::info!("[tweak_demo] {} (grid {}):\n{}", label, grid.grid_id(), grid);
    }
}
