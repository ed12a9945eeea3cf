//! Copying grids between host containers and the engine

use super::{GridLayout, SlotRef};
use crate::container::HostContainer;
use crate::crafting::{self, CraftingGrid, GridSession};
use crate::error::{TweakError, TweakResult};
use crate::inventory::ItemStack;
use crate::player::Player;

/// Copy a grid's slot range out of a container
pub fn read_grid_view(container: &dyn HostContainer, layout: &GridLayout) -> TweakResult<CraftingGrid> {
    check_layout(container, layout)?;
    let stacks = layout
        .bounds
        .range()
        .map(|index| container.slot(index).map(|slot| slot.item().clone()).unwrap_or_default())
        .collect();
    CraftingGrid::from_stacks(layout.grid_id, layout.width, layout.height, stacks)
}

/// Write a grid back into its slot range and notify the host
///
/// Slots outside the range are never touched.
pub fn write_grid_view(
    container: &mut dyn HostContainer,
    layout: &GridLayout,
    grid: &CraftingGrid,
) -> TweakResult<()> {
    check_layout(container, layout)?;
    if grid.size() != layout.bounds.size {
        return Err(TweakError::InvalidGrid { grid_id: layout.grid_id });
    }
    for (index, stack) in layout.bounds.range().zip(grid.slots()) {
        if let Some(slot) = container.slot_mut(index) {
            slot.put_item(stack.clone());
        }
    }
    container.mark_dirty();
    Ok(())
}

/// Run an operation on a grid view, writing it back only if it succeeded
/// and changed something
pub fn with_grid_view<R>(
    container: &mut dyn HostContainer,
    layout: &GridLayout,
    op: impl FnOnce(&mut CraftingGrid) -> TweakResult<R>,
) -> TweakResult<R> {
    let original = read_grid_view(container, layout)?;
    let mut grid = original.clone();
    let result = op(&mut grid)?;
    if grid != original {
        write_grid_view(container, layout, &grid)?;
    }
    Ok(result)
}

/// Clear through a view into the session player's inventory
pub fn clear_through_view(
    session: &mut GridSession<'_>,
    container: &mut dyn HostContainer,
    layout: &GridLayout,
) -> TweakResult<Vec<ItemStack>> {
    let items = session.items;
    let forced = session.forced;
    let inventory = &mut session.player.inventory;
    with_grid_view(container, layout, |grid| crafting::clear_grid(grid, inventory, forced, items))
}

/// Shift-click a source slot into a grid view
pub fn transfer_through_view(
    session: &mut GridSession<'_>,
    container: &mut dyn HostContainer,
    layout: &GridLayout,
    source: SlotRef,
) -> TweakResult<bool> {
    let original = read_grid_view(container, layout)?;
    let mut grid = original.clone();
    let mut stack = take_source(session.player, container, source)?;
    let done = crafting::transfer_into_grid(&mut stack, &mut grid, session.items);

    let written = if grid != original {
        write_grid_view(container, layout, &grid)
    } else {
        Ok(())
    };
    return_source(session.player, container, source, stack);
    written?;
    Ok(done)
}

/// Put a stack into one slot of a grid view
///
/// `stack` keeps the rest, and is only updated once the grid is written back.
pub fn put_through_view(
    session: &GridSession<'_>,
    container: &mut dyn HostContainer,
    layout: &GridLayout,
    stack: &mut ItemStack,
    index: usize,
) -> TweakResult<()> {
    let items = session.items;
    let mut pending = stack.clone();
    with_grid_view(container, layout, |grid| crafting::put_into_grid(&mut pending, grid, index, items))?;
    *stack = pending;
    Ok(())
}

fn take_source(player: &mut Player, container: &mut dyn HostContainer, source: SlotRef) -> TweakResult<ItemStack> {
    let (slot, index, size) = match source {
        SlotRef::Player(index) => {
            let size = player.inventory.slots().len();
            (player.inventory.slot_mut(index), index, size)
        }
        SlotRef::Container(index) => {
            let size = container.slot_count();
            (container.slot_mut(index), index, size)
        }
    };
    slot.map(|slot| slot.take_item())
        .ok_or(TweakError::IndexOutOfRange { index, size })
}

fn return_source(player: &mut Player, container: &mut dyn HostContainer, source: SlotRef, rest: ItemStack) {
    let slot = match source {
        SlotRef::Player(index) => player.inventory.slot_mut(index),
        SlotRef::Container(index) => container.slot_mut(index),
    };
    if let Some(slot) = slot {
        slot.put_item(rest);
    }
}

fn check_layout(container: &dyn HostContainer, layout: &GridLayout) -> TweakResult<()> {
    let fits = layout.bounds.range().end <= container.slot_count();
    let shaped = layout.width * layout.height == layout.bounds.size;
    if fits && shaped {
        Ok(())
    } else {
        Err(TweakError::InvalidGrid { grid_id: layout.grid_id })
    }
}
