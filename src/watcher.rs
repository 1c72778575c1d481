//! Folder snapshot diffing and the rescan scheduler.
//!
//! Each poll recomputes a [`FolderSnapshot`] from scratch and compares it with
//! the previous one. Any difference (file added, removed, or mtime changed)
//! triggers exactly one full resolve+render+write pass; an unchanged snapshot
//! performs no extraction and no output write. The previous snapshot is the
//! only state carried between iterations and it is never persisted.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{info, instrument, warn};

use crate::config::{ScanConfig, WatchSettings};
use crate::error::WatchError;
use crate::render::{render_html, write_output};
use crate::resolver::{collect_records, eligible_files};

/// Mapping from eligible file path to last-modified time.
pub type FolderSnapshot = BTreeMap<PathBuf, SystemTime>;

/// Outcome of one poll iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The snapshot differed (or the pass was forced); the artifact was
    /// rewritten with this many records.
    Published {
        /// Number of resolved records in the published table.
        records: usize,
    },
    /// Nothing changed; no extraction ran and the artifact was not touched.
    Unchanged,
}

/// Lists every eligible file under `root` with its modification time.
///
/// Files whose metadata cannot be read (e.g. deleted mid-walk) are skipped;
/// they will simply be absent from the snapshot, which registers as a change.
#[must_use]
pub fn take_snapshot(root: &Path, config: &ScanConfig) -> FolderSnapshot {
    let mut snapshot = FolderSnapshot::new();
    for path in eligible_files(root, config) {
        match std::fs::metadata(&path).and_then(|m| m.modified()) {
            Ok(mtime) => {
                snapshot.insert(path, mtime);
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "could not stat file for snapshot");
            }
        }
    }
    snapshot
}

/// Drives the scan/publish cycle: idle between polls, one publishing pass per
/// detected change.
#[derive(Debug)]
pub struct WatchScheduler {
    settings: WatchSettings,
    config: ScanConfig,
    previous: FolderSnapshot,
}

impl WatchScheduler {
    /// Creates a scheduler with an empty previous snapshot.
    #[must_use]
    pub fn new(settings: WatchSettings, config: ScanConfig) -> Self {
        Self {
            settings,
            config,
            previous: FolderSnapshot::new(),
        }
    }

    /// Runs one poll iteration: snapshot, diff, and (when needed) a full
    /// resolve+render+write pass.
    ///
    /// With `force` set, a pass runs even without a diff as long as no
    /// snapshot has been recorded yet (the one-shot guarantee). A pass always
    /// re-resolves every file, not just changed ones, and only overwrites the
    /// artifact after the whole record set resolved successfully.
    ///
    /// # Errors
    ///
    /// Propagates resolution and output-write failures; the previous artifact
    /// is left intact and the previous snapshot unchanged, so the next poll
    /// retries the pass.
    #[instrument(skip(self), fields(source = %self.settings.source_dir.display()))]
    pub fn poll_once(&mut self, force: bool) -> Result<PollOutcome, WatchError> {
        let current = take_snapshot(&self.settings.source_dir, &self.config);
        let changed = current != self.previous;
        let forced_first = force && self.previous.is_empty();

        if !(changed || forced_first) {
            return Ok(PollOutcome::Unchanged);
        }

        let records = collect_records(&self.settings.source_dir, &self.config)?;
        let html = render_html(&records, &self.settings.source_dir)?;
        write_output(&self.settings.output_file, &html)?;

        let count = records.len();
        self.previous = current;
        Ok(PollOutcome::Published { records: count })
    }

    /// Runs the watch loop until stopped (continuous mode) or after exactly
    /// one forced pass (one-shot mode).
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::WatchRootInvalid`] immediately when the watched
    /// root is missing or not a directory, and propagates pass failures.
    pub async fn run(mut self) -> Result<(), WatchError> {
        let root = self.settings.source_dir.clone();
        if !root.is_dir() {
            return Err(WatchError::invalid_root(&root));
        }

        info!(
            source = %root.display(),
            output = %self.settings.output_file.display(),
            once = self.settings.once,
            "watching literature folder"
        );

        loop {
            match self.poll_once(self.settings.once)? {
                PollOutcome::Published { records } => info!(records, "table updated"),
                PollOutcome::Unchanged => info!("no change"),
            }

            if self.settings.once {
                return Ok(());
            }
            tokio::time::sleep(self.settings.interval).await;
        }
    }
}
