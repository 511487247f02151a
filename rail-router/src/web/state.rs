//! Application state for the web layer.

use std::sync::Arc;

use crate::network::NetworkSnapshot;
use crate::router::RouterConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Current routing graph
    pub network: NetworkSnapshot,

    /// Default search configuration; requests may override the transfer preference
    pub config: Arc<RouterConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: NetworkSnapshot, config: RouterConfig) -> Self {
        Self {
            network,
            config: Arc::new(config),
        }
    }
}
