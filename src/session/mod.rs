//! Per-session history ownership and persistence

mod store;

use std::fmt;

use chrono::{DateTime, Utc};

use crate::consts::DEFAULT_SESSION;
use crate::core::{History, HistoryCap};
use crate::error::AppError;

pub(crate) use store::SessionStore;

/// Validated session identifier, safe to use as a file stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SessionName(String);

impl SessionName {
    pub(crate) fn parse(input: &str) -> Result<Self, AppError> {
        let valid = !input.is_empty()
            && input.len() <= 64
            && input
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(AppError::InvalidSession {
                input: input.to_string(),
            });
        }
        Ok(SessionName(input.to_string()))
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionName {
    fn default() -> Self {
        SessionName(DEFAULT_SESSION.to_string())
    }
}

impl fmt::Display for SessionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Session {
    pub(crate) name: SessionName,
    pub(crate) history: History,
    pub(crate) updated_at: Option<DateTime<Utc>>,
}

impl Session {
    pub(crate) fn new(name: SessionName) -> Self {
        Session {
            name,
            history: History::default(),
            updated_at: None,
        }
    }

    /// Record a generated item at the front of the history
    pub(crate) fn record(&mut self, item: &str, cap: HistoryCap) {
        self.history.push(item, cap);
        self.updated_at = Some(Utc::now());
    }

    pub(crate) fn reset(&mut self) {
        self.history.clear();
        self.updated_at = Some(Utc::now());
    }
}
