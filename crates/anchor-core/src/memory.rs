//! Per-session conversation memory with JSON snapshot persistence.
//!
//! Every session keeps a capped, append-only log of classified interactions.
//! A single lock guards the whole session map; snapshot I/O only happens in
//! the explicit load/save calls.


use crate::error::MemoryError;
use crate::Category;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Per-session cap of the shared store
pub const DEFAULT_SESSION_CAP: usize = 200;

/// Cap used by the single-session companion
pub const LEGACY_HISTORY_CAP: usize = 50;

/// One classified message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEntry {
    /// ISO-8601 timestamp
    pub timestamp: String,
    pub user_message: String,
    pub emotional_state: Category,
}

impl InteractionEntry {
    /// Create an entry stamped with the current UTC time
    #[must_use]
    pub fn new(user_message: impl Into<String>, emotional_state: Category) -> Self {
        Self::with_timestamp(now_timestamp(), user_message, emotional_state)
    }

    #[must_use]
    pub fn with_timestamp(
        timestamp: impl Into<String>,
        user_message: impl Into<String>,
        emotional_state: Category,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            user_message: user_message.into(),
            emotional_state,
        }
    }
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionRecord {
    session_id: String,
    entries: Vec<InteractionEntry>,
}

/// On-disk layout. Written as `{"patterns": [...]}`; a bare array of
/// session records is accepted on load.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Wrapped { patterns: Vec<SessionRecord> },
    Bare(Vec<SessionRecord>),
}

impl Snapshot {
    fn into_records(self) -> Vec<SessionRecord> {
        match self {
            Self::Wrapped { patterns } | Self::Bare(patterns) => patterns,
        }
    }
}

type SessionMap = BTreeMap<String, VecDeque<InteractionEntry>>;

/// Thread-safe store of capped per-session interaction logs
#[derive(Debug)]
pub struct SessionStore {
    cap: usize,
    sessions: Mutex<SessionMap>,
}

impl SessionStore {
    /// Create an empty store with the default per-session cap
    #[must_use]
    pub fn new() -> Self {
        Self::with_cap(DEFAULT_SESSION_CAP)
    }

    /// Create an empty store keeping at most `cap` entries per session
    /// (a cap of 0 is raised to 1)
    #[must_use]
    pub fn with_cap(cap: usize) -> Self {
        Self {
            cap: cap.max(1),
            sessions: Mutex::new(BTreeMap::new()),
        }
    }

    /// Create a store and populate it from a snapshot, best-effort
    #[must_use]
    pub fn open(path: &Path, cap: usize) -> Self {
        let store = Self::with_cap(cap);
        store.load_from_file(path);
        store
    }

    #[must_use]
    pub fn cap(&self) -> usize {
        self.cap
    }

    // Every operation leaves the map consistent, so a poisoned lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, SessionMap> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append an interaction to a session, creating the session if needed.
    /// The timestamp defaults to the current UTC time.
    pub fn add_entry(
        &self,
        session_id: &str,
        user_message: &str,
        emotional_state: Category,
        timestamp: Option<&str>,
    ) {
        let entry = match timestamp {
            Some(ts) => InteractionEntry::with_timestamp(ts, user_message, emotional_state),
            None => InteractionEntry::new(user_message, emotional_state),
        };
        self.push(session_id, entry);
    }

    /// Append a prepared entry, dropping the oldest entries beyond the cap
    pub fn push(&self, session_id: &str, entry: InteractionEntry) {
        let mut sessions = self.lock();
        let log = sessions.entry(session_id.to_string()).or_default();
        log.push_back(entry);
        while log.len() > self.cap {
            log.pop_front();
        }
    }

    /// Up to the last `n` entries of a session, oldest first
    #[must_use]
    pub fn get_recent(&self, session_id: &str, n: usize) -> Vec<InteractionEntry> {
        let sessions = self.lock();
        sessions.get(session_id).map_or_else(Vec::new, |log| {
            log.iter().skip(log.len().saturating_sub(n)).cloned().collect()
        })
    }

    /// Full log of a session, oldest first
    #[must_use]
    pub fn get_session(&self, session_id: &str) -> Vec<InteractionEntry> {
        self.get_recent(session_id, usize::MAX)
    }

    /// Copy of every session log
    #[must_use]
    pub fn get_all_sessions(&self) -> BTreeMap<String, Vec<InteractionEntry>> {
        self.lock()
            .iter()
            .map(|(id, log)| (id.clone(), log.iter().cloned().collect()))
            .collect()
    }

    #[must_use]
    pub fn session_ids(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Load sessions from a snapshot file.
    ///
    /// Loaded sessions replace sessions with the same id and are trimmed to
    /// the cap; other sessions are kept. Nothing changes when the file
    /// cannot be read or parsed. Returns the number of sessions loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid snapshot
    pub fn try_load_from_file(&self, path: &Path) -> Result<usize, MemoryError> {
        let content = std::fs::read_to_string(path).map_err(|source| MemoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records = serde_json::from_str::<Snapshot>(&content)?.into_records();
        let loaded = records.len();

        let mut sessions = self.lock();
        for record in records {
            let mut log: VecDeque<InteractionEntry> = record.entries.into();
            while log.len() > self.cap {
                log.pop_front();
            }
            sessions.insert(record.session_id, log);
        }

        log::info!("Loaded {loaded} sessions from {}", path.display());
        Ok(loaded)
    }

    /// Best-effort load: failures are logged and leave the store unchanged
    pub fn load_from_file(&self, path: &Path) {
        match self.try_load_from_file(path) {
            Ok(_) => {}
            Err(MemoryError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                log::debug!("No snapshot at {}, starting empty", path.display());
            }
            Err(e) => log::warn!("Ignoring snapshot {}: {e}", path.display()),
        }
    }

    /// Write every session to a snapshot file, overwriting it and creating
    /// parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any file operation fails
    pub fn try_save_to_file(&self, path: &Path) -> Result<(), MemoryError> {
        let io_error = |source| MemoryError::Io {
            path: path.to_path_buf(),
            source,
        };

        let sessions = self.lock();
        let snapshot = Snapshot::Wrapped {
            patterns: sessions
                .iter()
                .map(|(id, log)| SessionRecord {
                    session_id: id.clone(),
                    entries: log.iter().cloned().collect(),
                })
                .collect(),
        };
        let json = serde_json::to_string_pretty(&snapshot)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        std::fs::write(path, json).map_err(io_error)?;

        log::info!("Saved {} sessions to {}", sessions.len(), path.display());
        Ok(())
    }

    /// Best-effort save: failures are logged, not returned
    pub fn save_to_file(&self, path: &Path) {
        if let Err(e) = self.try_save_to_file(path) {
            log::warn!("Failed to save snapshot {}: {e}", path.display());
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
