// ABOUTME: Whole-file persistence for the student collection as a pretty-printed JSON array.
// ABOUTME: Saves go through a temp file, fsync, and atomic rename so readers never see a partial write.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use gradebook_core::StudentRecord;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while loading or saving the backing file.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("data file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("data file {path} lists enrollment id {enrollment_id} more than once")]
    DuplicateEnrollment {
        path: PathBuf,
        enrollment_id: String,
    },

    #[error("failed to serialize records: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Loads and saves the entire record collection in one call. Implementors
/// must not keep a copy of the records between calls.
pub trait RecordGateway {
    fn load(&self) -> Result<Vec<StudentRecord>, GatewayError>;
    fn save(&self, records: &[StudentRecord]) -> Result<(), GatewayError>;
}

/// A [`RecordGateway`] backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileGateway {
    path: PathBuf,
}

impl JsonFileGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RecordGateway for JsonFileGateway {
    /// A missing file is an empty collection, not an error. A file that
    /// repeats an enrollment id is rejected like a malformed one.
    fn load(&self) -> Result<Vec<StudentRecord>, GatewayError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("data file {} not found, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let records: Vec<StudentRecord> =
            serde_json::from_str(&contents).map_err(|source| GatewayError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        if let Some(enrollment_id) = first_repeated_id(&records) {
            return Err(GatewayError::DuplicateEnrollment {
                path: self.path.clone(),
                enrollment_id,
            });
        }

        tracing::debug!(
            "loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    /// Overwrite the backing file with `records` (write .tmp, fsync, rename).
    /// Creates the parent directory if it does not exist.
    fn save(&self, records: &[StudentRecord]) -> Result<(), GatewayError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = to_pretty_json(records)?;

        let tmp_path = self.tmp_path();
        let mut file = File::create(&tmp_path)?;
        file.write_all(&json)?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp_path, &self.path)?;

        // Best-effort: the rename already succeeded, so a failed directory
        // fsync does not leave the file inconsistent.
        if let Some(parent) = self.path.parent()
            && let Ok(dir) = File::open(parent)
        {
            let _ = dir.sync_all();
        }

        tracing::debug!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

fn first_repeated_id(records: &[StudentRecord]) -> Option<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .find(|r| !seen.insert(r.enrollment_id.as_str()))
        .map(|r| r.enrollment_id.clone())
}

/// Four-space indented JSON, matching files written by earlier versions.
fn to_pretty_json(records: &[StudentRecord]) -> Result<Vec<u8>, GatewayError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser).map_err(GatewayError::Serialize)?;
    Ok(buf)
}
