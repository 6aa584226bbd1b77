#![allow(dead_code)]

//! File-backed session storage.
//!
//! Mirrors the browser local-storage contract: one token string and one
//! serialized user record, keyed `hirehelp_token` / `hirehelp_user`, read
//! back on startup to restore a session.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::auth::models::User;
use crate::errors::AppError;

const TOKEN_KEY: &str = "hirehelp_token";
const USER_KEY: &str = "hirehelp_user";

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    #[serde(rename = "hirehelp_token")]
    token: String,
    #[serde(rename = "hirehelp_user")]
    user: User,
}

/// JSON file store for the current session.
#[derive(Debug, Clone)]
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the stored session, if any.
    ///
    /// A missing file is an empty session. An unreadable or unparseable file
    /// is treated the same way after clearing it, matching the original
    /// behavior of discarding corrupt local-storage entries.
    pub fn load(&self) -> Option<(String, User)> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<StoredSession>(&raw) {
            Ok(session) => Some((session.token, session.user)),
            Err(e) => {
                tracing::warn!("Discarding corrupt session file: {e}");
                let _ = fs::remove_file(&self.path);
                None
            }
        }
    }

    pub fn save(&self, token: &str, user: &User) -> Result<(), AppError> {
        let session = StoredSession {
            token: token.to_string(),
            user: user.clone(),
        };
        let raw = serde_json::to_string_pretty(&session)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("serialize session: {e}")))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Storage keys, exposed for diagnostics.
    pub fn keys() -> (&'static str, &'static str) {
        (TOKEN_KEY, USER_KEY)
    }
}
