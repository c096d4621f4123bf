use std::path::PathBuf;

use formcheck::FormError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no <form> element found in {0}")]
    NoForm(PathBuf),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("failed to initialize logger: {0}")]
    Logger(String),
}
