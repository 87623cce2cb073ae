use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::SyncConfig;
use crate::model::resource::{CompositeId, RawPayload};

#[derive(Debug)]
pub enum FetchResult {
    Payload(RawPayload),
    /// 404 ou corpo sem dados utilizáveis: pulo silencioso.
    Missing,
    /// Qualquer outra falha: pulo reportado, nunca fatal.
    Failed(String),
}

pub fn fetch_resource(client: &Client, cfg: &SyncConfig, id: &CompositeId) -> FetchResult {
    let url = cfg.resource_url(id);

    let resp = match client.get(&url).send() {
        Ok(r) => r,
        Err(e) => {
            return FetchResult::Failed(format!(
                "could not receive translations from {url}: {e}"
            ));
        }
    };

    let status = resp.status();

    // 404 é a resposta normal de "sem dados" para este recurso
    if status == StatusCode::NOT_FOUND {
        return FetchResult::Missing;
    }

    if !status.is_success() {
        return FetchResult::Failed(format!(
            "could not receive translations from {}: {}",
            url,
            status.as_u16()
        ));
    }

    // corpo que não decodifica conta como ausente, igual a null/vazio
    let value: Value = match resp.json() {
        Ok(v) => v,
        Err(_) => return FetchResult::Missing,
    };

    match RawPayload::from_value(&value) {
        Some(payload) => FetchResult::Payload(payload),
        None => FetchResult::Missing,
    }
}
