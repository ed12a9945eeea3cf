//! Grid transforms: clear, rotate, balance and spread
//!
//! Each transform is a single pass over one grid. A transform either completes
//! or returns an error with the grid (and inventory) exactly as it was.

use super::CraftingGrid;
use crate::error::{TweakError, TweakResult};
use crate::inventory::{insert_first_fit, kind_totals, Container, ItemStack};
use crate::item::ItemRegistry;

/// Move every stack in the grid into the inventory
///
/// Stacks go first-fit into the inventory. Anything that does not fit is
/// returned when `forced` is set, for the host to drop. Without `forced` an
/// inventory that cannot take everything fails the whole clear and nothing
/// moves.
pub fn clear_grid<C: Container + ?Sized>(
    grid: &mut CraftingGrid,
    inventory: &mut C,
    forced: bool,
    items: &ItemRegistry,
) -> TweakResult<Vec<ItemStack>> {
    let mut stacks = inventory.snapshot();
    let mut overflow = Vec::new();

    for slot in grid.slots().iter().filter(|slot| !slot.is_empty()) {
        let rest = insert_first_fit(&mut stacks, slot.clone(), items, |index, stack| {
            inventory.can_place_item(index, stack)
        });
        if !rest.is_empty() {
            overflow.push(rest);
        }
    }

    if !forced && !overflow.is_empty() {
        let remaining: u32 = overflow.iter().map(|stack| stack.count).sum();
        log::warn!(
            "[crafting::clear] grid {} not cleared, {} items do not fit",
            grid.grid_id(),
            remaining
        );
        return Err(TweakError::InventoryFull { remaining });
    }

    inventory.restore(stacks);
    grid.clear();

    if !overflow.is_empty() {
        log::warn!(
            "[crafting::clear] grid {} cleared, {} stacks left over for dropping",
            grid.grid_id(),
            overflow.len()
        );
    }
    Ok(overflow)
}

/// Rotate a square grid by a quarter turn
///
/// Clockwise, slot (row, col) receives the stack from (col, n-1-row), which
/// moves the top-left stack to the bottom-left corner. Counter-clockwise is
/// the mirrored mapping.
pub fn rotate_grid(grid: &mut CraftingGrid, counter_clockwise: bool) -> TweakResult<()> {
    if !grid.is_square() {
        return Err(TweakError::UnsupportedGridShape {
            width: grid.width(),
            height: grid.height(),
        });
    }

    let n = grid.width();
    let previous = grid.slots().to_vec();
    for row in 0..n {
        for col in 0..n {
            let source = if counter_clockwise {
                (n - 1 - col) * n + row
            } else {
                col * n + (n - 1 - row)
            };
            grid.slots_mut()[row * n + col] = previous[source].clone();
        }
    }

    log::debug!(
        "[crafting::rotate] grid {} rotated {}",
        grid.grid_id(),
        if counter_clockwise { "counter-clockwise" } else { "clockwise" }
    );
    Ok(())
}

/// Level stacks of the same kind against each other
///
/// Every kind keeps exactly the slots it already occupies; the total is split
/// as evenly as possible with the remainder going to the earliest slots.
pub fn balance_grid(grid: &mut CraftingGrid) {
    for (kind, total) in kind_totals(grid.slots()) {
        let positions: Vec<usize> = grid
            .slots()
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_same_kind(&kind))
            .map(|(index, _)| index)
            .collect();
        level(grid, &kind, total, &positions);
    }

    log::debug!("[crafting::balance] grid {} balanced", grid.grid_id());
}

/// Spread stacks over as many slots as possible
///
/// Empty slots are handed out in index order, one per kind in turn (kinds in
/// order of first appearance), until each kind has one slot per item or no
/// empty slots remain. Each kind is then leveled over its old and new slots,
/// with the remainder going to the earliest of those slots in index order.
pub fn spread_grid(grid: &mut CraftingGrid) {
    let kinds = kind_totals(grid.slots());
    let occupied: Vec<Vec<usize>> = kinds
        .iter()
        .map(|(kind, _)| {
            grid.slots()
                .iter()
                .enumerate()
                .filter(|(_, slot)| slot.is_same_kind(kind))
                .map(|(index, _)| index)
                .collect()
        })
        .collect();
    let mut empties = grid
        .slots()
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.is_empty())
        .map(|(index, _)| index);

    let mut claimed: Vec<Vec<usize>> = vec![Vec::new(); kinds.len()];
    'allocate: loop {
        let mut progressed = false;
        for (k, (_, total)) in kinds.iter().enumerate() {
            let wanted = total.saturating_sub(occupied[k].len() as u64);
            if (claimed[k].len() as u64) < wanted {
                match empties.next() {
                    Some(index) => {
                        claimed[k].push(index);
                        progressed = true;
                    }
                    None => break 'allocate,
                }
            }
        }
        if !progressed {
            break;
        }
    }

    for (k, (kind, total)) in kinds.iter().enumerate() {
        let mut positions: Vec<usize> = claimed[k].iter().chain(&occupied[k]).copied().collect();
        positions.sort_unstable();
        level(grid, kind, *total, &positions);
    }

    log::debug!(
        "[crafting::spread] grid {} spread over {} slots",
        grid.grid_id(),
        grid.occupied_slots()
    );
}

/// Write `total` items of `kind` evenly over `positions`, remainder first
fn level(grid: &mut CraftingGrid, kind: &ItemStack, total: u64, positions: &[usize]) {
    if positions.is_empty() {
        return;
    }
    let n = positions.len() as u64;
    let base = total / n;
    let remainder = total % n;
    for (i, &index) in positions.iter().enumerate() {
        let count = base + u64::from((i as u64) < remainder);
        grid.slots_mut()[index] = kind.copy_with_count(count as u32);
    }
}
