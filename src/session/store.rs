use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::consts::APP_NAME;
use crate::core::History;
use crate::error::AppError;

use super::{Session, SessionName};

#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    history: History,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

/// Directory of `<session>.json` files, one per session.
#[derive(Debug, Clone)]
pub(crate) struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        SessionStore { root: root.into() }
    }

    /// `~/.cache/creaturegen/sessions`
    pub(crate) fn open_default() -> Result<Self, AppError> {
        let home = dirs::home_dir().ok_or(AppError::NoHomeDir)?;
        Ok(Self::new(home.join(".cache").join(APP_NAME).join("sessions")))
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &SessionName) -> PathBuf {
        self.root.join(format!("{}.json", name.as_str()))
    }

    /// Load a session; a missing file is a fresh, empty session.
    pub(crate) fn load(&self, name: &SessionName) -> Result<Session, AppError> {
        let path = self.path_for(name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Session::new(name.clone())),
            Err(source) => return Err(AppError::SessionRead { path, source }),
        };

        match serde_json::from_str::<SessionFile>(&content) {
            Ok(file) => Ok(Session {
                name: name.clone(),
                history: file.history,
                updated_at: file.updated_at,
            }),
            Err(e) => {
                tracing::warn!(
                    "Ignoring unreadable session file {}: {e}",
                    path.display()
                );
                Ok(Session::new(name.clone()))
            }
        }
    }

    /// Write the session, replacing any previous file.
    pub(crate) fn save(&self, session: &Session) -> Result<(), AppError> {
        let path = self.path_for(&session.name);
        let write_err = |source: std::io::Error| AppError::SessionWrite {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.root).map_err(write_err)?;
        let file = SessionFile {
            history: session.history.clone(),
            updated_at: session.updated_at,
        };
        let json = serde_json::to_string_pretty(&file)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(write_err)?;
        fs::rename(&tmp, &path).map_err(write_err)?;
        tracing::debug!(
            "Saved session {} ({} entries) to {}",
            session.name,
            session.history.len(),
            path.display()
        );
        Ok(())
    }

    /// Delete the session file. Returns whether a file existed.
    pub(crate) fn remove(&self, name: &SessionName) -> Result<bool, AppError> {
        let path = self.path_for(name);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(AppError::SessionWrite { path, source }),
        }
    }
}
