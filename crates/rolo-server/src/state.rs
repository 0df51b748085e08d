use std::sync::Arc;

use rolo_service::ContactService;
use rolo_store::ContactStore;

use crate::config::ServerConfig;

/// Shared state handed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub service: Arc<ContactService>,
    pub info: Arc<ServiceInfo>,
}

impl AppState {
    pub fn new(store: Arc<dyn ContactStore>, config: &ServerConfig) -> Self {
        Self {
            service: Arc::new(ContactService::new(store)),
            info: Arc::new(ServiceInfo {
                name: config.service_name.clone(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            }),
        }
    }
}

/// Identity reported by the root and health endpoints.
#[derive(Clone, Debug)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
}
