use std::path::PathBuf;
use std::time::Duration;

use crate::model::resource::CompositeId;

/// Configuração explícita de uma execução; construída no CLI e emprestada
/// a cada serviço.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub sitemanager_url: String,
    pub translation_endpoint: String,
    pub translation_root: PathBuf,
    pub timeout: Duration,
}

impl SyncConfig {
    pub fn apps_url(&self) -> String {
        format!("{}/api/v1/apps", self.sitemanager_url.trim_end_matches('/'))
    }

    pub fn brands_url(&self) -> String {
        format!("{}/api/v1/brands", self.sitemanager_url.trim_end_matches('/'))
    }

    pub fn resource_url(&self, id: &CompositeId) -> String {
        format!("{}/{}", self.translation_endpoint.trim_end_matches('/'), id)
    }
}
