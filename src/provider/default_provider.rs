use super::view::{clear_through_view, put_through_view, read_grid_view, transfer_through_view, with_grid_view};
use super::{source_slot, GridBounds, GridLayout, SlotRef, TweakProvider, DEFAULT_GRID_START};
use crate::container::{HostContainer, PLAYER_CRAFTING, WORKBENCH};
use crate::crafting::{self, CraftingGrid, GridSession};
use crate::error::{TweakError, TweakResult};
use crate::inventory::ItemStack;
use crate::player::Player;

/// Provider for containers holding a single grid in one contiguous slot range
#[derive(Debug, Clone)]
pub struct DefaultProvider {
    mod_id: String,
    container_type: String,
    bounds: GridBounds,
    width: usize,
    height: usize,
    server_side: bool,
}

impl DefaultProvider {
    /// Grid of `width` x `height` slots starting at the default grid start
    pub fn new(mod_id: impl Into<String>, container_type: impl Into<String>, width: usize, height: usize) -> Self {
        Self {
            mod_id: mod_id.into(),
            container_type: container_type.into(),
            bounds: GridBounds::new(DEFAULT_GRID_START, width * height),
            width,
            height,
            server_side: true,
        }
    }

    /// The 3x3 crafting table
    pub fn vanilla_workbench() -> Self {
        Self::new("minecraft", WORKBENCH, 3, 3)
    }

    /// The 2x2 grid of the player's inventory screen
    pub fn vanilla_player_grid() -> Self {
        Self::new("minecraft_inventory", PLAYER_CRAFTING, 2, 2).server_side(false)
    }

    /// Move the grid to a different slot range
    pub fn with_bounds(mut self, bounds: GridBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn server_side(mut self, server_side: bool) -> Self {
        self.server_side = server_side;
        self
    }

    pub fn container_type(&self) -> &str {
        &self.container_type
    }

    fn layout(&self, container: &dyn HostContainer, grid_id: usize) -> TweakResult<GridLayout> {
        if !self.is_valid_container(container) {
            return Err(TweakError::IncompatibleProvider {
                mod_id: self.mod_id.clone(),
                container_type: container.container_type().to_string(),
            });
        }
        if grid_id != 0 {
            return Err(TweakError::InvalidGrid { grid_id });
        }
        Ok(GridLayout {
            grid_id,
            bounds: self.bounds,
            width: self.width,
            height: self.height,
        })
    }
}

impl TweakProvider for DefaultProvider {
    fn mod_id(&self) -> &str {
        &self.mod_id
    }

    fn load(&self) -> bool {
        self.width * self.height == self.bounds.size
    }

    fn requires_server_side(&self) -> bool {
        self.server_side
    }

    fn grid_bounds(&self, _player: &Player, _container: &dyn HostContainer, _grid_id: usize) -> GridBounds {
        self.bounds
    }

    fn is_valid_container(&self, container: &dyn HostContainer) -> bool {
        container.container_type() == self.container_type && container.slot_count() >= self.bounds.range().end
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
        if let SlotRef::Container(index) = source {
            if self.bounds.contains(index) {
                return false;
            }
        }
        source_slot(session.player, container, source).map_or(false, crafting::can_transfer_from)
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
