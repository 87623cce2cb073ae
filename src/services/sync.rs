use reqwest::blocking::Client;

use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::model::resource::{CompositeId, RawPayload};
use crate::services::fetch::{self, FetchResult};
use crate::services::{catalog, keys, reshape, store};

/// Decisão do operador, resolvida entre `plan` e `execute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Forced,
    Confirmed,
    Declined,
}

/// Resultado da fase de catálogo: o que seria buscado.
#[derive(Debug)]
pub struct Plan {
    pub apps: usize,
    pub brands: usize,
    pub ids: Vec<CompositeId>,
}

#[derive(Debug)]
pub struct SyncReport {
    pub ids_total: usize,
    pub fetched: usize,
    pub missing: usize,
    pub fetch_failures: Vec<String>,
    pub files_written: usize,
    pub write_failures: Vec<String>,
}

/// Busca os dois catálogos (falhas aqui são fatais) e deriva os ids
/// compostos. Nenhum recurso de tradução é tocado ainda.
pub fn plan(client: &Client, cfg: &SyncConfig) -> Result<Plan, SyncError> {
    let apps = catalog::fetch_apps(client, cfg)?;
    let brands = catalog::fetch_brands(client, cfg)?;
    let ids = keys::composite_ids(&apps, &brands);

    Ok(Plan {
        apps: apps.len(),
        brands: brands.len(),
        ids,
    })
}

/// Executa o plano: busca todos os recursos em ordem, depois grava um
/// arquivo por (idioma, id). Falhas por item entram no relatório e não
/// interrompem a execução.
pub fn execute(
    client: &Client,
    cfg: &SyncConfig,
    plan: Plan,
    gate: Gate,
) -> Result<SyncReport, SyncError> {
    if gate == Gate::Declined {
        return Err(SyncError::Cancelled);
    }

    let mut report = SyncReport {
        ids_total: plan.ids.len(),
        fetched: 0,
        missing: 0,
        fetch_failures: Vec::new(),
        files_written: 0,
        write_failures: Vec::new(),
    };

    // fase 1: buscar tudo antes de gravar qualquer coisa
    let mut payloads: Vec<(CompositeId, RawPayload)> = Vec::new();

    for id in plan.ids {
        match fetch::fetch_resource(client, cfg, &id) {
            FetchResult::Payload(payload) => {
                report.fetched += 1;
                payloads.push((id, payload));
            }
            FetchResult::Missing => report.missing += 1,
            FetchResult::Failed(msg) => {
                eprintln!("[sync] {msg}");
                report.fetch_failures.push(msg);
            }
        }
    }

    // fase 2: um arquivo por (idioma, id)
    for (id, payload) in &payloads {
        for table in reshape::reshape(payload) {
            match store::write(&cfg.translation_root, &table.language, id, &table.strings) {
                Ok(_) => report.files_written += 1,
                Err(e) => {
                    let msg =
                        format!("error writing translation for {} in {}: {e}", table.language, id);
                    eprintln!("[sync] {msg}");
                    report.write_failures.push(msg);
                }
            }
        }
    }

    Ok(report)
}
