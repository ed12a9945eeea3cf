use crate::config::TweaksConfig;
use crate::item::ItemRegistry;
use crate::player::Player;

/// Everything one grid operation needs from the caller
///
/// Built by the host for a single invocation and dropped when it returns.
#[derive(Debug)]
pub struct GridSession<'a> {
    pub player: &'a mut Player,
    pub items: &'a ItemRegistry,
    pub grid_id: usize,
    /// Only read by clears
    pub forced: bool,
}

impl<'a> GridSession<'a> {
    pub fn new(player: &'a mut Player, items: &'a ItemRegistry, grid_id: usize) -> Self {
        Self {
            player,
            items,
            grid_id,
            forced: false,
        }
    }

    /// Request a forced clear
    pub fn forced(mut self, forced: bool) -> Self {
        self.forced = forced;
        self
    }

    /// Downgrade forced clears when the configuration forbids them
    pub fn restricted_by(mut self, config: &TweaksConfig) -> Self {
        if self.forced && !config.allow_forced_clear {
            log::debug!("[crafting::session] forced clear disabled by configuration");
            self.forced = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerId;

    #[test]
    fn test_forced_flag_respects_config() {
        let items = ItemRegistry::default();
        let mut player = Player::new(PlayerId(1), "steve");
        let config = TweaksConfig {
            allow_forced_clear: false,
            ..TweaksConfig::default()
        };

        let session = GridSession::new(&mut player, &items, 0).forced(true);
        assert!(session.forced);
        let session = session.restricted_by(&config);
        assert!(!session.forced);
    }
}
