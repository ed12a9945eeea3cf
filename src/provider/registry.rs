//! Provider registry
//!
//! Providers are registered during startup. Once registration is finished the
//! registry is frozen and only answers lookups.

use super::{AssemblerProvider, DefaultProvider, GridBounds, TweakProvider};
use crate::config::TweaksConfig;
use crate::container::HostContainer;
use crate::error::{TweakError, TweakResult};
use lazy_static::lazy_static;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Maps mod ids to providers, in registration order
#[derive(Default)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn TweakProvider>>,
    by_mod_id: FxHashMap<String, usize>,
    frozen: bool,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider
    ///
    /// Returns `Ok(false)` when the provider declined to load.
    pub fn register(&mut self, provider: Arc<dyn TweakProvider>) -> TweakResult<bool> {
        let mod_id = provider.mod_id().to_string();
        if self.frozen {
            log::warn!("[provider::registry] rejected '{}', registration is closed", mod_id);
            return Err(TweakError::RegistryFrozen { mod_id });
        }
        if self.by_mod_id.contains_key(&mod_id) {
            log::warn!("[provider::registry] rejected duplicate provider '{}'", mod_id);
            return Err(TweakError::DuplicateProvider { mod_id });
        }
        if !provider.load() {
            log::info!("[provider::registry] provider '{}' did not load, skipping", mod_id);
            return Ok(false);
        }

        log::info!(
            "[provider::registry] registered '{}' (server side: {})",
            mod_id,
            provider.requires_server_side()
        );
        self.by_mod_id.insert(mod_id, self.providers.len());
        self.providers.push(provider);
        Ok(true)
    }

    /// Register the providers shipped with this crate
    pub fn register_builtin(&mut self, config: &TweaksConfig) -> TweakResult<()> {
        let workbench = DefaultProvider::vanilla_workbench().with_bounds(GridBounds::from_config(config));
        self.register(Arc::new(workbench))?;
        self.register(Arc::new(DefaultProvider::vanilla_player_grid()))?;
        self.register(Arc::new(AssemblerProvider::default()))?;
        Ok(())
    }

    /// Provider registered under a mod id
    pub fn provider(&self, mod_id: &str) -> Option<Arc<dyn TweakProvider>> {
        self.by_mod_id
            .get(mod_id)
            .and_then(|&index| self.providers.get(index))
            .cloned()
    }

    /// First provider, in registration order, that accepts the container
    pub fn provider_for(&self, container: &dyn HostContainer) -> Option<Arc<dyn TweakProvider>> {
        self.providers
            .iter()
            .find(|provider| provider.is_valid_container(container))
            .cloned()
    }

    /// Like [`provider_for`](Self::provider_for), as an error when nothing matches
    pub fn require_provider_for(&self, container: &dyn HostContainer) -> TweakResult<Arc<dyn TweakProvider>> {
        self.provider_for(container).ok_or_else(|| TweakError::ProviderNotFound {
            container_type: container.container_type().to_string(),
        })
    }

    /// Close registration
    pub fn freeze(&mut self) {
        if !self.frozen {
            log::info!("[provider::registry] registration finished with {} providers", self.providers.len());
        }
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn mod_ids(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().map(|provider| provider.mod_id())
    }
}

lazy_static! {
    /// Process-wide registry, written during startup only
    static ref PROVIDER_REGISTRY: RwLock<ProviderRegistry> = RwLock::new(ProviderRegistry::new());
}

/// Register a provider with the process-wide registry
pub fn register_provider(provider: Arc<dyn TweakProvider>) -> TweakResult<bool> {
    PROVIDER_REGISTRY.write().register(provider)
}

/// Freeze the process-wide registry
pub fn finish_registration() {
    PROVIDER_REGISTRY.write().freeze();
}

/// Look up a provider for a container in the process-wide registry
pub fn provider_for(container: &dyn HostContainer) -> Option<Arc<dyn TweakProvider>> {
    PROVIDER_REGISTRY.read().provider_for(container)
}

/// Look up a provider by mod id in the process-wide registry
pub fn provider_by_mod_id(mod_id: &str) -> Option<Arc<dyn TweakProvider>> {
    PROVIDER_REGISTRY.read().provider(mod_id)
}
