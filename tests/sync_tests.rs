use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::json;
use tiny_http::{Response, Server};

use systemtext_sync::config::SyncConfig;
use systemtext_sync::error::SyncError;
use systemtext_sync::model::resource::{CompositeId, LanguageCode, TranslationKey};
use systemtext_sync::services::store;
use systemtext_sync::services::sync::{self, Gate};

struct MockUpstream {
    base: String,
    hits: Arc<AtomicUsize>,
}

// Servidor local respondendo rotas fixas; tudo fora delas devolve 404.
fn spawn_upstream(routes: Vec<(String, u16, String)>) -> MockUpstream {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    thread::spawn(move || {
        for request in server.incoming_requests() {
            counter.fetch_add(1, Ordering::SeqCst);

            let url = request.url().to_string();
            let found = routes.iter().find(|(path, _, _)| *path == url);
            let (status, body) = match found {
                Some((_, status, body)) => (*status, body.clone()),
                None => (404, String::new()),
            };

            let _ = request.respond(Response::from_string(body).with_status_code(status));
        }
    });

    MockUpstream {
        base: format!("http://{addr}"),
        hits,
    }
}

fn catalog_routes() -> Vec<(String, u16, String)> {
    vec![
        (
            "/api/v1/apps".to_string(),
            200,
            json!([{ "app_code": "APP1" }]).to_string(),
        ),
        (
            "/api/v1/brands".to_string(),
            200,
            json!({ "data": [{ "brand_code": "BR1" }] }).to_string(),
        ),
    ]
}

fn config(base: &str, root: &Path) -> SyncConfig {
    SyncConfig {
        sitemanager_url: base.to_string(),
        translation_endpoint: base.to_string(),
        translation_root: root.to_path_buf(),
        timeout: Duration::from_secs(5),
    }
}

fn client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[test]
fn end_to_end_sync_writes_one_file_per_language() {
    let mut routes = catalog_routes();
    routes.push((
        "/app1/br1".to_string(),
        200,
        json!({ "greeting": { "en": "Hello", "da": "Hej" } }).to_string(),
    ));
    let upstream = spawn_upstream(routes);

    let root = tempfile::TempDir::new().unwrap();
    let cfg = config(&upstream.base, root.path());
    let client = client();

    let plan = sync::plan(&client, &cfg).unwrap();
    assert_eq!(plan.apps, 1);
    assert_eq!(plan.brands, 1);
    assert_eq!(plan.ids, vec![CompositeId::new("APP1", "BR1")]);

    let report = sync::execute(&client, &cfg, plan, Gate::Forced).unwrap();
    assert_eq!(report.fetched, 1);
    assert_eq!(report.missing, 0);
    assert_eq!(report.files_written, 2);
    assert!(report.fetch_failures.is_empty());
    assert!(report.write_failures.is_empty());

    let id = CompositeId::new("app1", "br1");

    assert!(root.path().join("en/app1/br1/messages").is_file());
    assert!(root.path().join("da/app1/br1/messages").is_file());

    let en = store::load(root.path(), &LanguageCode::from("en"), &id)
        .unwrap()
        .unwrap();
    assert_eq!(
        en,
        vec![(TranslationKey::from("greeting"), "Hello".to_string())]
    );

    let da = store::load(root.path(), &LanguageCode::from("da"), &id)
        .unwrap()
        .unwrap();
    assert_eq!(
        da,
        vec![(TranslationKey::from("greeting"), "Hej".to_string())]
    );
}

#[test]
fn missing_resource_is_skipped_without_errors() {
    // nenhuma rota de tradução: o recurso responde 404
    let upstream = spawn_upstream(catalog_routes());

    let root = tempfile::TempDir::new().unwrap();
    let cfg = config(&upstream.base, root.path());
    let client = client();

    let plan = sync::plan(&client, &cfg).unwrap();
    let report = sync::execute(&client, &cfg, plan, Gate::Forced).unwrap();

    assert_eq!(report.missing, 1);
    assert_eq!(report.fetched, 0);
    assert_eq!(report.files_written, 0);
    assert!(report.fetch_failures.is_empty());

    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
}

#[test]
fn upstream_error_is_reported_once_and_skipped() {
    let mut routes = catalog_routes();
    routes.push(("/app1/br1".to_string(), 500, String::new()));
    let upstream = spawn_upstream(routes);

    let root = tempfile::TempDir::new().unwrap();
    let cfg = config(&upstream.base, root.path());
    let client = client();

    let plan = sync::plan(&client, &cfg).unwrap();
    let report = sync::execute(&client, &cfg, plan, Gate::Forced).unwrap();

    assert_eq!(report.fetch_failures.len(), 1);
    assert!(report.fetch_failures[0].contains("app1/br1"));
    assert_eq!(report.missing, 0);
    assert_eq!(report.fetched, 0);
    assert_eq!(report.files_written, 0);
}

#[test]
fn empty_brand_catalog_is_fatal_before_any_fetch() {
    let routes = vec![
        (
            "/api/v1/apps".to_string(),
            200,
            json!([{ "app_code": "APP1" }]).to_string(),
        ),
        (
            "/api/v1/brands".to_string(),
            200,
            json!({ "data": [] }).to_string(),
        ),
    ];
    let upstream = spawn_upstream(routes);

    let root = tempfile::TempDir::new().unwrap();
    let cfg = config(&upstream.base, root.path());

    match sync::plan(&client(), &cfg) {
        Err(SyncError::EmptyCatalog { catalog }) => assert_eq!(catalog, "brands"),
        other => panic!("expected EmptyCatalog, got {other:?}"),
    }

    // só os dois catálogos foram consultados
    assert_eq!(upstream.hits.load(Ordering::SeqCst), 2);
}

#[test]
fn unreachable_app_catalog_is_fatal() {
    let routes = vec![("/api/v1/apps".to_string(), 500, String::new())];
    let upstream = spawn_upstream(routes);

    let root = tempfile::TempDir::new().unwrap();
    let cfg = config(&upstream.base, root.path());

    match sync::plan(&client(), &cfg) {
        Err(SyncError::UpstreamUnavailable { catalog, .. }) => assert_eq!(catalog, "apps"),
        other => panic!("expected UpstreamUnavailable, got {other:?}"),
    }
}

#[test]
fn brand_list_without_envelope_is_rejected() {
    let routes = vec![
        (
            "/api/v1/apps".to_string(),
            200,
            json!([{ "app_code": "APP1" }]).to_string(),
        ),
        (
            "/api/v1/brands".to_string(),
            200,
            json!([{ "brand_code": "BR1" }]).to_string(),
        ),
    ];
    let upstream = spawn_upstream(routes);

    let root = tempfile::TempDir::new().unwrap();
    let cfg = config(&upstream.base, root.path());

    match sync::plan(&client(), &cfg) {
        Err(SyncError::UpstreamUnavailable { catalog, .. }) => assert_eq!(catalog, "brands"),
        other => panic!("expected UpstreamUnavailable, got {other:?}"),
    }
}

#[test]
fn declined_gate_cancels_before_any_resource_fetch() {
    let upstream = spawn_upstream(catalog_routes());

    let root = tempfile::TempDir::new().unwrap();
    let cfg = config(&upstream.base, root.path());
    let client = client();

    let plan = sync::plan(&client, &cfg).unwrap();
    let hits_after_plan = upstream.hits.load(Ordering::SeqCst);

    match sync::execute(&client, &cfg, plan, Gate::Declined) {
        Err(SyncError::Cancelled) => {}
        other => panic!("expected Cancelled, got {other:?}"),
    }

    assert_eq!(upstream.hits.load(Ordering::SeqCst), hits_after_plan);
    assert_eq!(fs::read_dir(root.path()).unwrap().count(), 0);
}

#[test]
fn overwrite_replaces_previous_content() {
    let root = tempfile::TempDir::new().unwrap();
    let id = CompositeId::new("app1", "br1");
    let lang = LanguageCode::from("en");

    // conteúdo pré-existente de uma execução anterior
    store::write(
        root.path(),
        &lang,
        &id,
        &[(TranslationKey::from("stale"), "old".to_string())],
    )
    .unwrap();

    let mut routes = catalog_routes();
    routes.push((
        "/app1/br1".to_string(),
        200,
        json!({ "greeting": { "en": "Hello" } }).to_string(),
    ));
    let upstream = spawn_upstream(routes);

    let cfg = config(&upstream.base, root.path());
    let client = client();

    let plan = sync::plan(&client, &cfg).unwrap();
    sync::execute(&client, &cfg, plan, Gate::Forced).unwrap();

    let loaded = store::load(root.path(), &lang, &id).unwrap().unwrap();
    assert_eq!(
        loaded,
        vec![(TranslationKey::from("greeting"), "Hello".to_string())]
    );
}
