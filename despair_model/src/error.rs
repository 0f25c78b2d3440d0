//! Error type shared by the fallible parts of the model.

use std::path::PathBuf;

use thiserror::Error;

use crate::entities::{CharacterId, PointId};

/// Errors produced by workspace, persistence and configuration operations.
///
/// Graph queries never fail: missing data degrades to empty results.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("character not found: {0}")]
    CharacterNotFound(CharacterId),

    #[error("point {point} does not belong to character {character}")]
    PointNotFound {
        character: CharacterId,
        point: PointId,
    },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid character record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to write configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl ModelError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ModelError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
