use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// Catálogo inalcançável ou resposta fora do contrato. Fatal para a
    /// execução inteira.
    #[error("could not retrieve {catalog} from {url}: {reason}")]
    UpstreamUnavailable {
        catalog: &'static str,
        url: String,
        reason: String,
    },

    /// Catálogo respondeu, mas sem nenhum elemento. Também fatal.
    #[error("no {catalog} found")]
    EmptyCatalog { catalog: &'static str },

    /// Operador recusou a confirmação antes da fase de busca.
    #[error("operation cancelled")]
    Cancelled,

    #[error("could not make directory '{}': {source}", path.display())]
    DirectoryCreate { path: PathBuf, source: io::Error },

    #[error("could not write '{}': {source}", path.display())]
    WriteFile { path: PathBuf, source: io::Error },

    #[error("could not read '{}': {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("invalid resource data in '{}': {source}", path.display())]
    ResourceFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
}
