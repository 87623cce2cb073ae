use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identificador de um recurso remoto: `app_code/brand_code`, sempre em
/// minúsculas. Também vira o subdiretório de saída.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CompositeId(String);

impl CompositeId {
    pub fn new(app_code: &str, brand_code: &str) -> Self {
        CompositeId(format!(
            "{}/{}",
            app_code.to_lowercase(),
            brand_code.to_lowercase()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompositeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LanguageCode {
    fn from(s: &str) -> Self {
        LanguageCode(s.to_string())
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TranslationKey(String);

impl TranslationKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TranslationKey {
    fn from(s: &str) -> Self {
        TranslationKey(s.to_string())
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Um recurso buscado, na orientação do serviço remoto:
/// chave de tradução -> (idioma -> texto), na ordem do documento.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPayload {
    pub entries: Vec<RawEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub key: TranslationKey,
    pub strings: Vec<(LanguageCode, String)>,
}

impl RawPayload {
    /// Monta o payload a partir do JSON decodificado. `None` quando não há
    /// nada utilizável (null, não-objeto, objeto vazio). Valores que não são
    /// string e entradas que não são objeto são ignorados.
    pub fn from_value(value: &Value) -> Option<RawPayload> {
        let obj = match value.as_object() {
            Some(o) => o,
            None => return None,
        };

        let mut entries: Vec<RawEntry> = Vec::with_capacity(obj.len());

        for (key, strings_val) in obj {
            let strings_obj = match strings_val.as_object() {
                Some(o) => o,
                None => continue,
            };

            let mut strings: Vec<(LanguageCode, String)> = Vec::with_capacity(strings_obj.len());
            for (lang, text) in strings_obj {
                if let Some(text) = text.as_str() {
                    strings.push((LanguageCode::from(lang.as_str()), text.to_string()));
                }
            }

            if !strings.is_empty() {
                entries.push(RawEntry {
                    key: TranslationKey::from(key.as_str()),
                    strings,
                });
            }
        }

        if entries.is_empty() {
            return None;
        }

        Some(RawPayload { entries })
    }
}

/// Um balde de idioma depois da reorientação: idioma -> (chave -> texto),
/// mantendo a ordem de chegada das chaves.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageTable {
    pub language: LanguageCode,
    pub strings: Vec<(TranslationKey, String)>,
}

impl LanguageTable {
    pub fn new(language: LanguageCode) -> Self {
        LanguageTable {
            language,
            strings: Vec::new(),
        }
    }

    /// Insere mantendo a posição da primeira ocorrência; valor posterior
    /// sobrescreve o anterior.
    pub fn insert(&mut self, key: TranslationKey, value: String) {
        for (existing, text) in self.strings.iter_mut() {
            if *existing == key {
                *text = value;
                return;
            }
        }
        self.strings.push((key, value));
    }
}
