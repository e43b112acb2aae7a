use std::sync::Arc;

use hanzi_config::Config;
use hanzi_core::Resolver;
use tokio::sync::RwLock;

use crate::status::AppStatus;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub resolver: Arc<Resolver>,
    pub status: AppStatus,
}

impl AppState {
    pub fn new(config: Config, resolver: Resolver) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            resolver: Arc::new(resolver),
            status: AppStatus::new(),
        }
    }
}
