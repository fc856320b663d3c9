//! Persistent tier: one JSON record per documentation version.

use crate::core::error::{DocsError, Result};
use crate::core::index::DocIndex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Current on-disk record format
pub const RECORD_VERSION: u32 = 1;

const FILE_PREFIX: &str = "search_index_";
const FILE_SUFFIX: &str = ".json";

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Serialize, Deserialize)]
struct CacheRecord {
    record_version: u32,
    index: DocIndex,
}

/// Directory-backed store of parsed indexes
#[derive(Debug, Clone)]
pub struct DiskStore {
    dir: PathBuf,
}

/// Replace characters that are unsafe in file names
pub fn sanitize_version(version: &str) -> String {
    version
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

impl DiskStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Record path for a version
    pub fn path_for(&self, version: &str) -> PathBuf {
        self.dir.join(format!(
            "{FILE_PREFIX}{}{FILE_SUFFIX}",
            sanitize_version(version)
        ))
    }

    /// Load a version's record
    ///
    /// Returns `Ok(None)` when no record exists. Unreadable, corrupted or
    /// mismatched records are reported as `CacheIo`.
    pub fn load(&self, version: &str) -> Result<Option<DocIndex>> {
        let path = self.path_for(version);
        if !path.exists() {
            return Ok(None);
        }
        read_record(&path, Some(version)).map(Some)
    }

    /// Write a record atomically (temp file, then rename)
    pub fn save(&self, index: &DocIndex) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            DocsError::CacheIo(format!("cannot create {}: {e}", self.dir.display()))
        })?;

        let record = CacheRecord {
            record_version: RECORD_VERSION,
            index: index.clone(),
        };
        let json = serde_json::to_vec(&record)?;

        let target = self.path_for(index.version());
        let temp = self.dir.join(format!(
            ".{}.{}.{}.tmp",
            sanitize_version(index.version()),
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));

        if let Err(e) = fs::write(&temp, &json) {
            let _ = fs::remove_file(&temp);
            return Err(DocsError::CacheIo(format!(
                "cannot write {}: {e}",
                temp.display()
            )));
        }

        if let Err(e) = fs::rename(&temp, &target) {
            let _ = fs::remove_file(&temp);
            return Err(DocsError::CacheIo(format!(
                "cannot replace {}: {e}",
                target.display()
            )));
        }

        Ok(())
    }

    /// Delete a version's record; returns whether one existed
    pub fn remove(&self, version: &str) -> Result<bool> {
        let path = self.path_for(version);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DocsError::CacheIo(format!(
                "cannot remove {}: {e}",
                path.display()
            ))),
        }
    }

    /// Delete every record in the store; returns how many were removed
    pub fn remove_all(&self) -> Result<usize> {
        let mut removed = 0;
        for path in self.record_paths()? {
            fs::remove_file(&path).map_err(|e| {
                DocsError::CacheIo(format!("cannot remove {}: {e}", path.display()))
            })?;
            removed += 1;
        }
        Ok(removed)
    }

    /// Load every readable record, skipping corrupted ones
    pub fn list(&self) -> Result<Vec<DocIndex>> {
        let mut indexes = Vec::new();
        for path in self.record_paths()? {
            match read_record(&path, None) {
                Ok(index) => indexes.push(index),
                Err(e) => tracing::warn!("Skipping unreadable cache record: {}", e),
            }
        }
        indexes.sort_by(|a, b| a.version().cmp(b.version()));
        Ok(indexes)
    }

    fn record_paths(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir).map_err(|e| {
            DocsError::CacheIo(format!("cannot read {}: {e}", self.dir.display()))
        })?;

        let mut paths = Vec::new();
        for entry in entries.filter_map(|e| e.ok()) {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name.starts_with(FILE_PREFIX) && name.ends_with(FILE_SUFFIX) {
                paths.push(entry.path());
            }
        }
        paths.sort();
        Ok(paths)
    }
}

fn read_record(path: &Path, expected_version: Option<&str>) -> Result<DocIndex> {
    let bytes = fs::read(path)
        .map_err(|e| DocsError::CacheIo(format!("cannot read {}: {e}", path.display())))?;

    let record: CacheRecord = serde_json::from_slice(&bytes)
        .map_err(|e| DocsError::CacheIo(format!("corrupted record {}: {e}", path.display())))?;

    if record.record_version != RECORD_VERSION {
        return Err(DocsError::CacheIo(format!(
            "record {} has format v{} (expected v{RECORD_VERSION})",
            path.display(),
            record.record_version
        )));
    }

    if let Some(expected) = expected_version {
        if record.index.version() != expected {
            return Err(DocsError::CacheIo(format!(
                "record {} holds version '{}', expected '{expected}'",
                path.display(),
                record.index.version()
            )));
        }
    }

    record.index.validate().map_err(|e| {
        DocsError::CacheIo(format!("invalid record {}: {e}", path.display()))
    })?;

    Ok(record.index)
}
