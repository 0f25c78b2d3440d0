//! JSON persistence for a workspace.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::Workspace;
use crate::entities::Character;
use crate::error::{ModelError, ModelResult};

/// Current on-disk format version.
pub const STORE_VERSION: u32 = 2;

#[derive(Debug, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    version: u32,
    characters: Vec<Character>,
}

/// Saves and loads a [`Workspace`] as a single JSON document.
///
/// Documents of older versions are accepted; retired taxonomy keys are
/// migrated while the characters deserialize.
#[derive(Debug, Clone)]
pub struct WorkspaceStore {
    path: PathBuf,
}

impl WorkspaceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the workspace. Fails if the file is missing or malformed.
    pub fn load(&self) -> ModelResult<Workspace> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| ModelError::io(&self.path, e))?;
        let document: StoreDocument = serde_json::from_str(&text)?;

        if document.version < STORE_VERSION {
            tracing::info!(
                path = %self.path.display(),
                version = document.version,
                "loaded workspace written by an older version"
            );
        }
        tracing::info!(
            path = %self.path.display(),
            characters = document.characters.len(),
            "loaded workspace"
        );
        Ok(Workspace::from_characters(document.characters))
    }

    /// Load the workspace, or an empty one if the file does not exist yet.
    pub fn load_or_default(&self) -> ModelResult<Workspace> {
        if self.exists() {
            self.load()
        } else {
            Ok(Workspace::new())
        }
    }

    /// Write the workspace, replacing the file.
    pub fn save(&self, workspace: &Workspace) -> ModelResult<()> {
        #[derive(Serialize)]
        struct Borrowed<'a> {
            version: u32,
            characters: &'a [Character],
        }

        let text = serde_json::to_string_pretty(&Borrowed {
            version: STORE_VERSION,
            characters: workspace.characters(),
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ModelError::io(parent, e))?;
        }
        std::fs::write(&self.path, text).map_err(|e| ModelError::io(&self.path, e))?;

        tracing::info!(
            path = %self.path.display(),
            characters = workspace.len(),
            "saved workspace"
        );
        Ok(())
    }
}
