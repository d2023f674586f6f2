//! Error types for agora-tui
//!
//! Routing itself never fails: unknown pages, missing selections and missing
//! directory entries all resolve to the home view. The enums here cover the
//! edges that can: reading the data set and loading view modules.

use crate::model::ViewKind;

/// Strict page parse failure. Callers that need totality use `PageId::resolve`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page identifier: {0:?}")]
pub struct UnknownPage(pub String);

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("view module {view:?} failed to load: {reason}")]
    Failed { view: ViewKind, reason: String },
    #[error("view module {0:?} load task aborted")]
    Aborted(ViewKind),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AgoraError {
    #[error("data: {0}")]
    Data(String),
    #[error(transparent)]
    Load(#[from] LoadError),
}

impl From<DataError> for AgoraError {
    fn from(e: DataError) -> Self {
        AgoraError::Data(e.to_string())
    }
}
