use roster_business::BusinessConfig;

use crate::widgets::UsersPanelState;

/// The main application state.
#[derive(Debug)]
pub struct State {
    /// API location and read-only flag.
    pub config: BusinessConfig,
    /// The users table panel.
    pub users: UsersPanelState,
}

impl Default for State {
    fn default() -> Self {
        let config = BusinessConfig::from_env().unwrap_or_else(|e| {
            log::warn!("Invalid environment configuration, using defaults: {e:#}");
            BusinessConfig::default()
        });
        Self::with_config(config)
    }
}

impl State {
    pub fn with_config(config: BusinessConfig) -> Self {
        Self {
            config,
            users: UsersPanelState::new(),
        }
    }

    pub fn test(base_url: String) -> Self {
        Self::with_config(BusinessConfig::new(base_url))
    }
}
