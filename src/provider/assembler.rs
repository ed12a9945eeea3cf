use super::view::{clear_through_view, put_through_view, read_grid_view, transfer_through_view, with_grid_view};
use super::{source_slot, GridBounds, GridLayout, SlotRef, TweakProvider};
use crate::container::{HostContainer, ASSEMBLER};
use crate::crafting::{self, CraftingGrid, GridSession};
use crate::error::{TweakError, TweakResult};
use crate::inventory::ItemStack;
use crate::player::Player;

/// Number of output slots in front of the grids
const OUTPUT_SLOTS: usize = 2;
const GRID_WIDTH: usize = 3;
const GRID_COUNT: usize = 2;

/// Provider for the assembler: two 3x3 grids side by side, chosen by grid id
#[derive(Debug, Clone)]
pub struct AssemblerProvider {
    mod_id: String,
}

impl AssemblerProvider {
    pub fn new(mod_id: impl Into<String>) -> Self {
        Self { mod_id: mod_id.into() }
    }

    fn bounds_of(grid_id: usize) -> GridBounds {
        let size = GRID_WIDTH * GRID_WIDTH;
        GridBounds::new(OUTPUT_SLOTS + grid_id * size, size)
    }

    fn layout(&self, container: &dyn HostContainer, grid_id: usize) -> TweakResult<GridLayout> {
        if !self.is_valid_container(container) {
            return Err(TweakError::IncompatibleProvider {
                mod_id: self.mod_id.clone(),
                container_type: container.container_type().to_string(),
            });
        }
        if grid_id >= GRID_COUNT {
            return Err(TweakError::InvalidGrid { grid_id });
        }
        Ok(GridLayout {
            grid_id,
            bounds: Self::bounds_of(grid_id),
            width: GRID_WIDTH,
            height: GRID_WIDTH,
        })
    }
}

impl Default for AssemblerProvider {
    fn default() -> Self {
        Self::new("assembly")
    }
}

impl TweakProvider for AssemblerProvider {
    fn mod_id(&self) -> &str {
        &self.mod_id
    }

    fn load(&self) -> bool {
        true
    }

    fn requires_server_side(&self) -> bool {
        true
    }

    fn grid_bounds(&self, _player: &Player, _container: &dyn HostContainer, grid_id: usize) -> GridBounds {
        Self::bounds_of(grid_id.min(GRID_COUNT - 1))
    }

    fn is_valid_container(&self, container: &dyn HostContainer) -> bool {
        container.container_type() == ASSEMBLER
            && container.slot_count() >= Self::bounds_of(GRID_COUNT - 1).range().end
    }

    fn craft_matrix(&self, _player: &Player, container: &dyn HostContainer, grid_id: usize) -> Option<CraftingGrid> {
        let layout = self.layout(container, grid_id).ok()?;
        read_grid_view(container, &layout).ok()
    }

    fn clear_grid(&self, session: &mut GridSession<'_>, container: &mut dyn HostContainer) -> TweakResult<Vec<ItemStack>> {
        let layout = self.layout(container, session.grid_id)?;
        clear_through_view(session, container, &layout)
    }

    fn rotate_grid(
        &self,
        session: &mut GridSession<'_>,
        container: &mut dyn HostContainer,
        counter_clockwise: bool,
    ) -> TweakResult<()> {
        let layout = self.layout(container, session.grid_id)?;
        with_grid_view(container, &layout, |grid| crafting::rotate_grid(grid, counter_clockwise))
    }

    fn balance_grid(&self, session: &mut GridSession<'_>, container: &mut dyn HostContainer) -> TweakResult<()> {
        let layout = self.layout(container, session.grid_id)?;
        with_grid_view(container, &layout, |grid| {
            crafting::balance_grid(grid);
            Ok(())
        })
    }

    fn spread_grid(&self, session: &mut GridSession<'_>, container: &mut dyn HostContainer) -> TweakResult<()> {
        let layout = self.layout(container, session.grid_id)?;
        with_grid_view(container, &layout, |grid| {
            crafting::spread_grid(grid);
            Ok(())
        })
    }

    fn can_transfer_from(&self, session: &GridSession<'_>, container: &dyn HostContainer, source: SlotRef) -> bool {
        match source {
            // outputs and both grids
            SlotRef::Container(_) => false,
            SlotRef::Player(_) => source_slot(session.player, container, source)
                .map_or(false, |slot| crafting::can_transfer_from(slot) && !slot.is_empty()),
        }
    }

    fn transfer_into_grid(
        &self,
        session: &mut GridSession<'_>,
        container: &mut dyn HostContainer,
        source: SlotRef,
    ) -> TweakResult<bool> {
        let layout = self.layout(container, session.grid_id)?;
        if !self.can_transfer_from(session, container, source) {
            return Ok(false);
        }
        transfer_through_view(session, container, &layout, source)
    }

    fn put_into_grid(
        &self,
        session: &mut GridSession<'_>,
        container: &mut dyn HostContainer,
        stack: &mut ItemStack,
        index: usize,
    ) -> TweakResult<()> {
        let layout = self.layout(container, session.grid_id)?;
        put_through_view(session, container, &layout, stack, index)
    }
}
