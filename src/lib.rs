pub mod config;
pub mod container;
pub mod crafting;
pub mod error;
pub mod inventory;
pub mod item;
pub mod player;
pub mod provider;

pub use config::TweaksConfig;
pub use container::{HostContainer, MenuContainer};
pub use crafting::{
    balance_grid, clear_grid, put_into_grid, rotate_grid, spread_grid, transfer_into_grid, CraftingGrid,
    GridSession, TransferRequest, TransferTarget,
};
pub use error::{TweakError, TweakResult};
pub use inventory::{Container, InventorySlot, ItemStack, PlayerInventory, SlotType};
pub use item::{ItemId, ItemRegistry};
pub use player::{Player, PlayerId};
pub use provider::{GridBounds, ProviderRegistry, SlotRef, TweakProvider};

/// Initialize `env_logger`, defaulting to the configured level
///
/// `RUST_LOG` still takes precedence. Calling this twice is harmless.
pub fn init_logging(config: &TweaksConfig) {
    let env = env_logger::Env::default().default_filter_or(config.log_level.as_str());
    if let Err(e) = env_logger::Builder::from_env(env).try_init() {
        log::debug!("[init_logging] env_logger already initialized: {}", e);
    }
}
