//! Submission log - the append-only persisted history of stock readings.
//!
//! The whole history lives in one JSON file holding an array of submissions.
//! Every write is a read-modify-write of that array followed by an atomic
//! rename, so readers never observe a half-written file. Missing or corrupt
//! data reads as an empty history and is never surfaced as an error; a single
//! malformed record inside an otherwise valid array is skipped on its own.

use crate::{entities::Submission, errors::Result};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// File-backed, append-only log of submissions.
#[derive(Debug, Clone)]
pub struct SubmissionLog {
    path: PathBuf,
}

impl SubmissionLog {
    /// Creates a log stored at `path`. Nothing is touched on disk until the first write.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns every stored submission in stored order.
    ///
    /// An absent, empty, unreadable or unparsable file yields an empty history.
    /// Array elements that are not valid submissions are skipped individually.
    #[must_use]
    pub fn read_all(&self) -> Vec<Submission> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No submission log at {}", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!(
                    "Could not read submission log {}: {e}; treating history as empty",
                    self.path.display()
                );
                return Vec::new();
            }
        };

        if raw.trim().is_empty() {
            return Vec::new();
        }

        let records: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    "Submission log {} is corrupt: {e}; treating history as empty",
                    self.path.display()
                );
                return Vec::new();
            }
        };

        records
            .into_iter()
            .enumerate()
            .filter_map(|(position, record)| {
                serde_json::from_value(record)
                    .inspect_err(|e| {
                        warn!(
                            position,
                            "Skipping malformed record in {}: {e}",
                            self.path.display()
                        );
                    })
                    .ok()
            })
            .collect()
    }

    /// Adds one submission to the end of the log.
    ///
    /// Existing records are written back untouched and in the same order.
    ///
    /// # Errors
    /// Returns an error if the log cannot be serialized or written to disk.
    pub fn append(&self, submission: Submission) -> Result<()> {
        let mut submissions = self.read_all();
        submissions.push(submission);
        self.write_all(&submissions)?;

        info!(
            total = submissions.len(),
            "Submission appended to {}",
            self.path.display()
        );
        Ok(())
    }

    /// Destructively removes the whole history.
    ///
    /// Callers are responsible for obtaining operator confirmation first.
    ///
    /// # Errors
    /// Returns an error if the backing file exists but cannot be removed.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Submission history cleared at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, submissions: &[Submission]) -> Result<()> {
        let json = serde_json::to_string(submissions)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
