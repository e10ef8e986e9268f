// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only record of jobs already alerted on.

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::job::JobId;

/// Errors reading or appending the dedup file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read state {}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to append to state {}", path.display())]
    Append { path: PathBuf, source: std::io::Error },
}

/// Set of job identifiers that have already produced an alert.
///
/// Backed by a flat file with one identifier per line. The file is read
/// once at load and only ever appended to; it is never rewritten or
/// compacted, so an identifier once recorded never alerts again.
///
/// There is no locking: two invocations sharing a file can both miss an
/// identifier and alert twice.
#[derive(Debug)]
pub struct DedupStore {
    path: PathBuf,
    seen: HashSet<String>,
}

impl DedupStore {
    /// Load the store. A missing file is an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let seen = match std::fs::read_to_string(&path) {
            Ok(text) => text
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from)
                .collect(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashSet::new(),
            Err(source) => return Err(StoreError::Read { path, source }),
        };
        tracing::debug!(path = %path.display(), entries = seen.len(), "loaded dedup store");
        Ok(Self { path, seen })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn already_seen(&self, id: &JobId) -> bool {
        self.seen.contains(id.as_str())
    }

    /// Append `id` to the backing file and remember it for this process.
    ///
    /// Recording an identifier already present is a no-op, so a job listed
    /// twice in one scan is written once.
    pub fn record(&mut self, id: &JobId) -> Result<(), StoreError> {
        if self.already_seen(id) {
            return Ok(());
        }
        self.append_line(id.as_str())
            .map_err(|source| StoreError::Append { path: self.path.clone(), source })?;
        self.seen.insert(id.as_str().to_string());
        Ok(())
    }

    fn append_line(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
