use crate::models::student::Student;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Whole-file JSON store for the student roster.
///
/// Every call reads or rewrites the complete file. There is no locking:
/// two concurrent writers race and the last `save` wins.
pub struct StudentStore {
    path: PathBuf,
}

impl StudentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full roster. A missing file, invalid JSON or a top-level value
    /// that is not an array reads as empty. Inside the array every entry is
    /// kept as written, including ones that are not student objects.
    pub async fn load(&self) -> Vec<Student> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Roster file not found, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read roster file, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(students) => students,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Roster file is not a valid record array, treating as empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the roster file with `students`, 4-space indented, non-ASCII
    /// left unescaped.
    pub async fn save(&self, students: &[Student]) -> Result<()> {
        let mut buf = Vec::with_capacity(128 * (students.len() + 1));
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        students
            .serialize(&mut serializer)
            .context("Failed to serialize student records")?;

        fs::write(&self.path, &buf)
            .await
            .context(format!("Failed to write roster file: {}", self.path.display()))?;

        debug!(path = %self.path.display(), count = students.len(), "Roster saved");

        Ok(())
    }

    /// Create the parent directory of the roster file if needed
    pub async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .context(format!("Failed to create data directory: {}", parent.display()))?;
            }
        }
        Ok(())
    }
}
