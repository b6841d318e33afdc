//! Host history for ad-hoc connections.
//!
//! Hosts entered in the connect dialog are kept in a bounded
//! most-recently-used list so the dialog can offer them as suggestions.
//! Adding a host moves it to the front, deduplicates, and truncates the
//! list to its configured maximum.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default number of history entries kept
pub const DEFAULT_HISTORY_ENTRIES: usize = 5;

/// One remembered host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Host string as entered
    pub host: String,
    /// When the host was last connected to
    pub last_used: DateTime<Utc>,
}

/// Bounded most-recently-used list of ad-hoc hosts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostHistory {
    entries: Vec<HistoryEntry>,
    max_entries: usize,
}

impl Default for HostHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_ENTRIES)
    }
}

impl HostHistory {
    /// Creates an empty history keeping at most `max_entries` hosts
    ///
    /// A maximum of zero keeps the history permanently empty.
    #[must_use]
    pub const fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Records a connection to `host`
    ///
    /// The host moves to (or enters at) the front of the list. Matching is
    /// case-insensitive; the stored spelling is updated to the latest one.
    /// Empty or whitespace-only hosts are ignored.
    pub fn add(&mut self, host: &str) {
        let host = host.trim();
        if host.is_empty() || self.max_entries == 0 {
            return;
        }

        self.entries
            .retain(|entry| !entry.host.eq_ignore_ascii_case(host));
        self.entries.insert(
            0,
            HistoryEntry {
                host: host.to_string(),
                last_used: Utc::now(),
            },
        );
        self.entries.truncate(self.max_entries);
    }

    /// Returns the remembered hosts, most recent first
    #[must_use]
    pub fn hosts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.host.as_str()).collect()
    }

    /// Returns the full entries, most recent first
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns the configured maximum
    #[must_use]
    pub const fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Changes the maximum, truncating the list if needed
    pub fn set_max_entries(&mut self, max_entries: usize) {
        self.max_entries = max_entries;
        self.entries.truncate(max_entries);
    }

    /// Returns the number of remembered hosts
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no hosts are remembered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forgets all hosts
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
