use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepGraphError {
    #[error("parse error ({context}) at {path}: {message}")]
    Parse {
        context: &'static str,
        path: String,
        message: String,
    },

    #[error("could not access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RepGraphError>;
