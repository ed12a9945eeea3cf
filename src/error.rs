//! Error types shared by every grid tweak operation
//!
//! Failing operations leave the grid and inventory untouched; the only
//! partially applied operation is a forced clear, which cannot fail.

use crate::item::ItemId;

/// Errors produced by grid transforms, transfers and the provider registry
#[derive(Debug, thiserror::Error)]
pub enum TweakError {
    #[error("Incompatible stack: slot holds {held:?}, tried to merge {incoming:?}")]
    IncompatibleStack { held: ItemId, incoming: ItemId },

    #[error("Inventory full: {remaining} items could not be stored")]
    InventoryFull { remaining: u32 },

    #[error("Unsupported grid shape: {width}x{height} is not square")]
    UnsupportedGridShape { width: usize, height: usize },

    #[error("Index {index} out of range for grid of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("Provider '{mod_id}' cannot handle container type '{container_type}'")]
    IncompatibleProvider {
        mod_id: String,
        container_type: String,
    },

    #[error("Invalid grid id {grid_id}")]
    InvalidGrid { grid_id: usize },

    #[error("No provider registered for container type '{container_type}'")]
    ProviderNotFound { container_type: String },

    #[error("Provider '{mod_id}' is already registered")]
    DuplicateProvider { mod_id: String },

    #[error("Registration is closed, provider '{mod_id}' was rejected")]
    RegistryFrozen { mod_id: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate
pub type TweakResult<T> = Result<T, TweakError>;

/// Create a configuration error
pub fn config_error(message: impl Into<String>) -> TweakError {
    TweakError::Config {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TweakError::UnsupportedGridShape { width: 2, height: 3 };
        assert_eq!(err.to_string(), "Unsupported grid shape: 2x3 is not square");

        let err = TweakError::IndexOutOfRange { index: 9, size: 9 };
        assert!(err.to_string().contains("Index 9"));

        let err = config_error("grid_size must be positive");
        assert!(matches!(err, TweakError::Config { .. }));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TweakError = io.into();
        assert!(matches!(err, TweakError::Io(_)));
    }
}
