//! Provider contract: adapters exposing host containers as crafting grids
//!
//! Each supported container family gets one [`TweakProvider`]. The provider
//! knows where the grid lives inside its container; the grid algorithms in
//! [`crate::crafting`] only ever see the [`CraftingGrid`] view it produces.

pub mod assembler;
pub mod default_provider;
pub mod registry;
pub mod view;

pub use assembler::AssemblerProvider;
pub use default_provider::DefaultProvider;
pub use registry::{
    finish_registration, provider_by_mod_id, provider_for, register_provider, ProviderRegistry,
};
pub use view::{read_grid_view, write_grid_view};

use crate::config::TweaksConfig;
use crate::container::HostContainer;
use crate::crafting::{CraftingGrid, GridSession};
use crate::error::TweakResult;
use crate::inventory::{InventorySlot, ItemStack};
use crate::player::Player;
use std::ops::Range;

/// First grid slot for providers that don't say otherwise
pub const DEFAULT_GRID_START: usize = 1;
/// Grid size for providers that don't say otherwise
pub const DEFAULT_GRID_SIZE: usize = 9;

/// Slot range of a grid inside its container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub start: usize,
    pub size: usize,
}

impl GridBounds {
    pub fn new(start: usize, size: usize) -> Self {
        Self { start, size }
    }

    /// Fallback bounds from the configuration
    pub fn from_config(config: &TweaksConfig) -> Self {
        Self::new(config.grid_start, config.grid_size)
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.size
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_START, DEFAULT_GRID_SIZE)
    }
}

/// Bounds plus shape of one grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub grid_id: usize,
    pub bounds: GridBounds,
    pub width: usize,
    pub height: usize,
}

/// A slot items can be transferred from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRef {
    /// Index into the acting player's inventory
    Player(usize),
    /// Index into the host container
    Container(usize),
}

/// Adapter between one family of host containers and the grid engine.
///
/// Operations read the grid out of the container, run the engine on it and
/// write it back; a failed operation leaves the container untouched.
pub trait TweakProvider: Send + Sync {
    /// Identifier of the mod this provider is for
    fn mod_id(&self) -> &str;

    /// Called once at registration; false keeps the provider out of the registry
    fn load(&self) -> bool;

    /// True if the provider cannot work on a client-only instance
    fn requires_server_side(&self) -> bool;

    /// Where the grid lives inside the container
    fn grid_bounds(&self, _player: &Player, _container: &dyn HostContainer, _grid_id: usize) -> GridBounds {
        GridBounds::default()
    }

    /// True if the container has a grid this provider can handle
    fn is_valid_container(&self, container: &dyn HostContainer) -> bool;

    /// A copy of the grid, or `None` if the container or grid id is not handled
    fn craft_matrix(&self, player: &Player, container: &dyn HostContainer, grid_id: usize) -> Option<CraftingGrid>;

    /// Move the grid into the player's inventory; returns what must be dropped
    fn clear_grid(
        &self,
        session: &mut GridSession<'_>,
        container: &mut dyn HostContainer,
    ) -> TweakResult<Vec<ItemStack>>;

    fn rotate_grid(
        &self,
        session: &mut GridSession<'_>,
        container: &mut dyn HostContainer,
        counter_clockwise: bool,
    ) -> TweakResult<()>;

    fn balance_grid(&self, session: &mut GridSession<'_>, container: &mut dyn HostContainer) -> TweakResult<()>;

    fn spread_grid(&self, session: &mut GridSession<'_>, container: &mut dyn HostContainer) -> TweakResult<()>;

    /// Whether the transfer-to-grid feature may take items from `source`
    fn can_transfer_from(&self, session: &GridSession<'_>, container: &dyn HostContainer, source: SlotRef) -> bool;

    /// Shift-click `source` into the grid; true if it was fully transferred
    fn transfer_into_grid(
        &self,
        session: &mut GridSession<'_>,
        container: &mut dyn HostContainer,
        source: SlotRef,
    ) -> TweakResult<bool>;

    /// Put a stack into one grid slot; the rest stays in `stack`, and a
    /// failed put leaves it untouched
    fn put_into_grid(
        &self,
        session: &mut GridSession<'_>,
        container: &mut dyn HostContainer,
        stack: &mut ItemStack,
        index: usize,
    ) -> TweakResult<()>;
}

/// Resolve a transfer source slot
pub fn source_slot<'a>(
    player: &'a Player,
    container: &'a dyn HostContainer,
    source: SlotRef,
) -> Option<&'a InventorySlot> {
    match source {
        SlotRef::Player(index) => player.inventory.slot(index),
        SlotRef::Container(index) => container.slot(index),
    }
}
