//! File-backed cache for external lookups.
//!
//! Vocabulary lookups hit a remote service, so verdicts are cached on disk
//! with a time-to-live. The cache is an explicit object with injected
//! location and TTL, owned by whoever constructs the validator; there is no
//! process-wide state. Entries past their TTL are pruned on open, so a
//! verdict can be stale by at most the TTL window.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;

/// Default entry lifetime: thirty days.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct CacheEntry {
    valid: bool,
    /// Unix timestamp (seconds) of the lookup.
    fetched_at: u64,
}

#[derive(Debug)]
pub struct LookupCache {
    path: PathBuf,
    ttl: Duration,
    entries: BTreeMap<String, CacheEntry>,
}

impl LookupCache {
    /// Open a cache file, creating an empty cache when the file does not
    /// exist. A corrupt file is discarded with a warning rather than
    /// failing the run. Expired entries are pruned immediately.
    pub fn open(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        let path = path.into();
        let entries = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<BTreeMap<String, CacheEntry>>(&bytes) {
                Ok(entries) => entries,
                Err(error) => {
                    warn!(path = %path.display(), %error, "discarding corrupt lookup cache");
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        let mut cache = Self { path, ttl, entries };
        cache.prune();
        cache
    }

    /// Cached validity verdict for a term, if present and fresh.
    pub fn get(&self, term: &str) -> Option<bool> {
        let entry = self.entries.get(term)?;
        if self.is_expired(entry) {
            return None;
        }
        Some(entry.valid)
    }

    pub fn insert(&mut self, term: &str, valid: bool) {
        self.entries.insert(
            term.to_string(),
            CacheEntry {
                valid,
                fetched_at: unix_now(),
            },
        );
    }

    /// Write the cache back to disk.
    pub fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(&self.entries)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn prune(&mut self) {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries
            .retain(|_, entry| !is_expired_at(entry, ttl, unix_now()));
        let pruned = before - self.entries.len();
        if pruned > 0 {
            debug!(pruned, "removed expired lookup cache entries");
        }
    }

    fn is_expired(&self, entry: &CacheEntry) -> bool {
        is_expired_at(entry, self.ttl, unix_now())
    }
}

fn is_expired_at(entry: &CacheEntry, ttl: Duration, now: u64) -> bool {
    entry.fetched_at.saturating_add(ttl.as_secs()) < now
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
