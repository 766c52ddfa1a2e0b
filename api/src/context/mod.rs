use std::sync::Arc;

use admin_db::storage::Storage;

use crate::service::UserService;

/// Shared state handed to every handler.
///
/// Composed once at startup from the parsed config and the connected store;
/// request handling never writes to it.
#[derive(Debug, Clone)]
pub struct ApiContext {
    pub _config: crate::config::AdminApiConfig,
    pub db: Arc<dyn Storage>,
    pub users: UserService,
}

impl ApiContext {
    pub fn new(config: crate::config::AdminApiConfig, db: Arc<dyn Storage>) -> Self {
        let users = UserService::new(db.clone());

        Self {
            _config: config,
            db,
            users,
        }
    }
}
