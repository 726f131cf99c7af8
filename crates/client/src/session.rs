//! Persisted session state.
//!
//! The auth token and user profile live in a single JSON file under fixed
//! keys, loaded on startup and rewritten on login/logout.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use lunas_shared::{AppError, AppResult};

use crate::resources::auth::UserProfile;

/// Session payload persisted between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token issued by the backend at login.
    pub auth_token: String,
    /// Profile of the signed-in user.
    pub user_profile: UserProfile,
}

/// Reads and writes the session file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store for the given session file path.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads the persisted session, if any.
    ///
    /// A missing file means no session; an unreadable or undecodable file is
    /// an error.
    pub fn load(&self) -> AppResult<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| AppError::Io(e.to_string()))?;
        let session = serde_json::from_str(&raw).map_err(|e| AppError::Decode(e.to_string()))?;
        Ok(Some(session))
    }

    /// Persists the session, creating parent directories as needed.
    pub fn save(&self, session: &Session) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let raw = serde_json::to_string_pretty(session)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| AppError::Io(e.to_string()))
    }

    /// Removes the session file. Missing file is not an error.
    pub fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Io(e.to_string())),
        }
    }
}
