pub mod grid;
pub mod session;
pub mod transfer;
pub mod transforms;

pub use grid::CraftingGrid;
pub use session::GridSession;
pub use transfer::{can_transfer_from, put_into_grid, transfer_into_grid, TransferRequest, TransferTarget};
pub use transforms::{balance_grid, clear_grid, rotate_grid, spread_grid};
