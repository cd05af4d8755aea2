//! Bounded, most-recent-first history of generated creature types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_HISTORY_CAP;
use crate::error::AppError;

/// Maximum number of entries a history retains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HistoryCap {
    /// Keep at most this many entries (always >= 1)
    Bounded(usize),
    Unbounded,
}

impl HistoryCap {
    /// Build a bounded cap, rejecting zero so the newest entry is always kept.
    pub(crate) fn bounded(limit: usize) -> Result<Self, AppError> {
        if limit == 0 {
            return Err(AppError::InvalidCap {
                input: limit.to_string(),
            });
        }
        Ok(HistoryCap::Bounded(limit))
    }

    pub(crate) fn limit(self) -> Option<usize> {
        match self {
            HistoryCap::Bounded(n) => Some(n),
            HistoryCap::Unbounded => None,
        }
    }
}

impl Default for HistoryCap {
    fn default() -> Self {
        HistoryCap::Bounded(DEFAULT_HISTORY_CAP)
    }
}

impl FromStr for HistoryCap {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("unbounded") || trimmed.eq_ignore_ascii_case("none") {
            return Ok(HistoryCap::Unbounded);
        }
        let limit = trimmed.parse::<usize>().map_err(|_| AppError::InvalidCap {
            input: s.to_string(),
        })?;
        HistoryCap::bounded(limit)
    }
}

impl fmt::Display for HistoryCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryCap::Bounded(n) => write!(f, "{n}"),
            HistoryCap::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// Return a new history with `item` first, followed by `history`, cut to `cap`.
///
/// The input slice is left untouched. Entries beyond the cap are dropped from
/// the tail, so the oldest items go first.
pub(crate) fn append(history: &[String], item: &str, cap: HistoryCap) -> Vec<String> {
    let keep = match cap.limit() {
        Some(limit) => history.len().min(limit.saturating_sub(1)),
        None => history.len(),
    };
    let mut next = Vec::with_capacity(keep + 1);
    next.push(item.to_string());
    next.extend_from_slice(&history[..keep]);
    next
}

/// An empty history.
pub(crate) fn clear() -> Vec<String> {
    Vec::new()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct History {
    entries: Vec<String>,
}

impl History {
    #[cfg(test)]
    pub(crate) fn from_entries(entries: Vec<String>) -> Self {
        History { entries }
    }

    /// Record a newly generated item.
    pub(crate) fn push(&mut self, item: &str, cap: HistoryCap) {
        self.entries = append(&self.entries, item, cap);
    }

    pub(crate) fn clear(&mut self) {
        self.entries = clear();
    }

    /// Entries, most recent first
    pub(crate) fn entries(&self) -> &[String] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
