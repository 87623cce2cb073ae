use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::model::catalog::{Application, Brand, BrandCatalog};

pub fn fetch_apps(client: &Client, cfg: &SyncConfig) -> Result<Vec<Application>, SyncError> {
    let apps: Vec<Application> = get_json(client, "apps", &cfg.apps_url())?;

    if apps.is_empty() {
        return Err(SyncError::EmptyCatalog { catalog: "apps" });
    }

    Ok(apps)
}

pub fn fetch_brands(client: &Client, cfg: &SyncConfig) -> Result<Vec<Brand>, SyncError> {
    // brands chega embrulhado em { "data": [...] }
    let catalog: BrandCatalog = get_json(client, "brands", &cfg.brands_url())?;

    if catalog.data.is_empty() {
        return Err(SyncError::EmptyCatalog { catalog: "brands" });
    }

    Ok(catalog.data)
}

fn get_json<T: DeserializeOwned>(
    client: &Client,
    catalog: &'static str,
    url: &str,
) -> Result<T, SyncError> {
    let resp = client
        .get(url)
        .send()
        .map_err(|e| SyncError::UpstreamUnavailable {
            catalog,
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(SyncError::UpstreamUnavailable {
            catalog,
            url: url.to_string(),
            reason: format!("HTTP {}", status.as_u16()),
        });
    }

    resp.json::<T>()
        .map_err(|e| SyncError::UpstreamUnavailable {
            catalog,
            url: url.to_string(),
            reason: format!("invalid response: {e}"),
        })
}
