use crate::model::resource::{LanguageTable, RawPayload};

/// Reorienta um payload de chave-major para idioma-major. Os baldes de
/// idioma aparecem na ordem em que cada idioma é visto pela primeira vez;
/// dentro de cada balde as chaves mantêm a ordem do payload.
pub fn reshape(payload: &RawPayload) -> Vec<LanguageTable> {
    let mut tables: Vec<LanguageTable> = Vec::new();

    for entry in &payload.entries {
        for (lang, text) in &entry.strings {
            let idx = match tables.iter().position(|t| t.language == *lang) {
                Some(i) => i,
                None => {
                    tables.push(LanguageTable::new(lang.clone()));
                    tables.len() - 1
                }
            };

            tables[idx].insert(entry.key.clone(), text.clone());
        }
    }

    tables
}
