use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::SyncError;
use crate::model::resource::{CompositeId, LanguageCode, TranslationKey};

const MESSAGES_FILE: &str = "messages";

/// Grava o recurso de um (idioma, id) em `<root>/<idioma>/<id>/messages`,
/// substituindo integralmente qualquer conteúdo anterior. A ordem das
/// chaves no arquivo é a ordem do slice recebido.
pub fn write(
    root: &Path,
    lang: &LanguageCode,
    id: &CompositeId,
    strings: &[(TranslationKey, String)],
) -> Result<PathBuf, SyncError> {
    let dir = resource_dir(root, lang, id);
    make_dirs(&dir)?;

    let path = dir.join(MESSAGES_FILE);

    let mut map = Map::with_capacity(strings.len());
    for (key, text) in strings {
        map.insert(key.as_str().to_string(), Value::String(text.clone()));
    }

    let json = serde_json::to_string_pretty(&Value::Object(map)).map_err(|e| {
        SyncError::ResourceFormat {
            path: path.clone(),
            source: e,
        }
    })?;

    write_atomic(&path, json.as_bytes())?;

    Ok(path)
}

/// Lê de volta um recurso persistido; `None` quando o arquivo não existe.
/// É o mesmo formato que o host carrega na inicialização.
pub fn load(
    root: &Path,
    lang: &LanguageCode,
    id: &CompositeId,
) -> Result<Option<Vec<(TranslationKey, String)>>, SyncError> {
    let path = resource_dir(root, lang, id).join(MESSAGES_FILE);

    if !path.exists() {
        return Ok(None);
    }

    let data = fs::read_to_string(&path).map_err(|e| SyncError::ReadFile {
        path: path.clone(),
        source: e,
    })?;

    let map: Map<String, Value> =
        serde_json::from_str(&data).map_err(|e| SyncError::ResourceFormat {
            path: path.clone(),
            source: e,
        })?;

    let mut strings: Vec<(TranslationKey, String)> = Vec::with_capacity(map.len());
    for (key, text) in &map {
        if let Some(text) = text.as_str() {
            strings.push((TranslationKey::from(key.as_str()), text.to_string()));
        }
    }

    Ok(Some(strings))
}

fn resource_dir(root: &Path, lang: &LanguageCode, id: &CompositeId) -> PathBuf {
    root.join(lang.as_str()).join(id.as_str())
}

// rwx para dono e grupo, nada para o resto; em outras plataformas o modo
// fica por conta do sistema
fn make_dirs(dir: &Path) -> Result<(), SyncError> {
    if dir.is_dir() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o770);
    }

    builder.create(dir).map_err(|e| SyncError::DirectoryCreate {
        path: dir.to_path_buf(),
        source: e,
    })
}

// Escreve num arquivo temporário no mesmo diretório e renomeia por cima do
// destino: o arquivo anterior fica intacto até a troca, nunca meio escrito.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), SyncError> {
    let tmp = tmp_path(path);

    fs::write(&tmp, bytes).map_err(|e| SyncError::WriteFile {
        path: tmp.clone(),
        source: e,
    })?;

    if path.exists() {
        fs::remove_file(path).map_err(|e| SyncError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    fs::rename(&tmp, path).map_err(|e| SyncError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let file_name = match path.file_name().and_then(|s| s.to_str()) {
        Some(n) => n.to_string(),
        None => MESSAGES_FILE.to_string(),
    };
    p.set_file_name(format!("{file_name}.tmp"));
    p
}
