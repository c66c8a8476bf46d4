use crate::config::{Config, PlayerLookup, RowFormat};
use crate::db::Store;

/// Shared with every handler. Immutable after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
    pub player_lookup: PlayerLookup,
    pub row_format: RowFormat,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            store: Store::new(config.database.clone()),
            player_lookup: config.player_lookup,
            row_format: config.row_format,
        }
    }
}
