use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum TexsheetError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
}
impl TexsheetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TexsheetError::Io {
            path: path.into(),
            source,
        }
    }
}
