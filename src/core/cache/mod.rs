//! Two-tier index cache (memory, then disk) with single-flight refresh.
//!
//! The manager never fetches on its own: callers hand it a refresh
//! closure, and it decides whether that closure needs to run.

mod store;

pub use store::{sanitize_version, DiskStore, RECORD_VERSION};

use crate::core::error::Result;
use crate::core::index::DocIndex;
use crate::core::types::{CacheEntryInfo, CacheSource, CacheStatus};
use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::sync::Arc;

/// An index handed out by the cache
#[derive(Debug, Clone)]
pub struct CachedIndex {
    pub index: Arc<DocIndex>,
    pub source: CacheSource,

    /// Served past expiration because a refresh failed
    pub stale: bool,
}

enum Lookup {
    Hit(CachedIndex),
    Stale(Arc<DocIndex>, CacheSource),
    Miss,
}

/// Memory + disk cache of parsed indexes, keyed by version
pub struct CacheManager {
    memory: RwLock<HashMap<String, Arc<DocIndex>>>,
    disk: DiskStore,
    expiration: chrono::Duration,
    serve_stale_on_error: bool,
    refresh_locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl CacheManager {
    pub fn new(disk: DiskStore, expiration: chrono::Duration, serve_stale_on_error: bool) -> Self {
        Self {
            memory: RwLock::new(HashMap::new()),
            disk,
            expiration,
            serve_stale_on_error,
            refresh_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn disk(&self) -> &DiskStore {
        &self.disk
    }

    pub fn expiration(&self) -> chrono::Duration {
        self.expiration
    }

    /// Return a usable index for `version`, running `refresh` only if needed
    ///
    /// Lookup order: memory, disk (promoted into memory), then `refresh`.
    /// `force_refresh` skips both tiers. Concurrent callers for the same
    /// version share one refresh.
    pub async fn get_or_refresh<F, Fut>(
        &self,
        version: &str,
        force_refresh: bool,
        refresh: F,
    ) -> Result<CachedIndex>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<DocIndex>>,
    {
        if !force_refresh {
            if let Lookup::Hit(hit) = self.lookup(version) {
                return Ok(hit);
            }
        }

        let waiting_since = Utc::now();
        let lock = self.refresh_lock(version);
        let _guard = lock.lock().await;

        // Another caller may have refreshed while we waited
        let fallback = if force_refresh {
            let current = self.memory.read().get(version).cloned();
            if let Some(index) = current {
                if index.fetched_at() >= waiting_since {
                    return Ok(CachedIndex {
                        index,
                        source: CacheSource::Memory,
                        stale: false,
                    });
                }
            }
            None
        } else {
            match self.lookup(version) {
                Lookup::Hit(hit) => return Ok(hit),
                Lookup::Stale(index, source) => Some((index, source)),
                Lookup::Miss => None,
            }
        };

        tracing::info!(
            "Refreshing index for version {} (forced: {})",
            version,
            force_refresh
        );

        match refresh().await {
            Ok(index) => {
                let index = self.store(index);
                Ok(CachedIndex {
                    index,
                    source: CacheSource::Fresh,
                    stale: false,
                })
            }
            Err(e) => match fallback {
                Some((index, source)) if self.serve_stale_on_error => {
                    tracing::warn!(
                        "Refresh for version {} failed, serving stale index from {}: {}",
                        version,
                        source,
                        e
                    );
                    Ok(CachedIndex {
                        index,
                        source,
                        stale: true,
                    })
                }
                _ => Err(e),
            },
        }
    }

    /// Insert an index into both tiers
    ///
    /// A disk failure is logged and the index stays memory-only.
    pub fn store(&self, index: DocIndex) -> Arc<DocIndex> {
        if let Err(e) = self.disk.save(&index) {
            tracing::warn!(
                "Failed to persist index for version {}: {}",
                index.version(),
                e
            );
        }

        let version = index.version().to_string();
        let index = Arc::new(index);
        self.memory.write().insert(version, Arc::clone(&index));
        index
    }

    /// Drop one version (or every version) from both tiers
    ///
    /// Returns the number of versions that had an entry.
    pub fn invalidate(&self, version: Option<&str>) -> Result<usize> {
        match version {
            Some(version) => {
                let in_memory = self.memory.write().remove(version).is_some();
                let on_disk = self.disk.remove(version)?;
                tracing::info!("Invalidated cache for version {}", version);
                Ok(usize::from(in_memory || on_disk))
            }
            None => {
                let mut versions: Vec<String> =
                    self.memory.write().drain().map(|(v, _)| v).collect();
                for index in self.disk.list()? {
                    versions.push(index.version().to_string());
                }
                self.disk.remove_all()?;
                versions.sort();
                versions.dedup();
                tracing::info!("Invalidated cache for {} version(s)", versions.len());
                Ok(versions.len())
            }
        }
    }

    /// Describe every cached version across both tiers
    pub fn status(&self) -> Result<CacheStatus> {
        let now = Utc::now();
        let mut entries: BTreeMap<String, CacheEntryInfo> = BTreeMap::new();

        for index in self.disk.list()? {
            entries.insert(
                index.version().to_string(),
                self.entry_info(&index, false, true, now),
            );
        }

        for (version, index) in self.memory.read().iter() {
            entries
                .entry(version.clone())
                .and_modify(|e| e.in_memory = true)
                .or_insert_with(|| self.entry_info(index, true, false, now));
        }

        Ok(CacheStatus {
            cache_dir: self.disk.dir().display().to_string(),
            expiration_hours: whole_hours(self.expiration),
            entries: entries.into_values().collect(),
        })
    }

    fn entry_info(
        &self,
        index: &DocIndex,
        in_memory: bool,
        on_disk: bool,
        now: chrono::DateTime<Utc>,
    ) -> CacheEntryInfo {
        CacheEntryInfo {
            version: index.version().to_string(),
            fetched_at: index.fetched_at(),
            pages: index.page_count(),
            terms: index.term_count(),
            in_memory,
            on_disk,
            stale: index.is_stale(now, self.expiration),
        }
    }

    fn lookup(&self, version: &str) -> Lookup {
        let now = Utc::now();

        let memory_entry = self.memory.read().get(version).cloned();
        if let Some(index) = &memory_entry {
            if !index.is_stale(now, self.expiration) {
                tracing::debug!("Cache hit (memory) for version {}", version);
                return Lookup::Hit(CachedIndex {
                    index: Arc::clone(index),
                    source: CacheSource::Memory,
                    stale: false,
                });
            }
        }

        match self.disk.load(version) {
            Ok(Some(index)) if !index.is_stale(now, self.expiration) => {
                tracing::debug!("Cache hit (disk) for version {}", version);
                let index = Arc::new(index);
                self.memory
                    .write()
                    .insert(version.to_string(), Arc::clone(&index));
                return Lookup::Hit(CachedIndex {
                    index,
                    source: CacheSource::Disk,
                    stale: false,
                });
            }
            Ok(Some(index)) => {
                if memory_entry.is_none() {
                    return Lookup::Stale(Arc::new(index), CacheSource::Disk);
                }
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Discarding cache record for version {}: {}", version, e);
                if let Err(e) = self.disk.remove(version) {
                    tracing::warn!("Failed to remove cache record: {}", e);
                }
            }
        }

        match memory_entry {
            Some(index) => Lookup::Stale(index, CacheSource::Memory),
            None => Lookup::Miss,
        }
    }

    fn refresh_lock(&self, version: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.refresh_locks.lock();
        Arc::clone(locks.entry(version.to_string()).or_default())
    }
}

/// Expiration window in hours, rounded up so sub-hour windows never read as 0
fn whole_hours(window: chrono::Duration) -> u64 {
    let minutes = window.num_minutes().max(0) as u64;
    minutes.div_ceil(60)
}
