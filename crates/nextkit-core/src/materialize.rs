//! Idempotent creation of planned artifacts on disk.

// Internal imports (std, crate)
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::plan::PlannedArtifact;

// External imports (alphabetized)
use serde::Serialize;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Terminal state of one artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum MaterializationOutcome {
    Created,
    SkippedExisting,
    Errored(String),
}

impl MaterializationOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::SkippedExisting)
    }

    pub fn is_errored(&self) -> bool {
        matches!(self, Self::Errored(_))
    }
}

impl fmt::Display for MaterializationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::SkippedExisting => write!(f, "already exists"),
            Self::Errored(reason) => write!(f, "error: {}", reason),
        }
    }
}

/// Writes planned artifacts below a root directory.
///
/// Existing files are never touched. Every I/O failure is turned into
/// [`MaterializationOutcome::Errored`] so callers can keep going.
#[derive(Debug, Clone)]
pub struct Materializer {
    root: PathBuf,
}

impl Materializer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn materialize(&self, artifact: &PlannedArtifact) -> MaterializationOutcome {
        let file_path = self.root.join(&artifact.target_path);

        let dirs = file_path
            .parent()
            .map(Path::to_path_buf)
            .into_iter()
            .chain(artifact.extra_dirs.iter().map(|dir| self.root.join(dir)));
        for dir in dirs {
            if let Err(e) = ensure_dir(&dir).await {
                let reason = format!("failed to create directory {}: {}", dir.display(), e);
                log::error!("{}", reason);
                return MaterializationOutcome::Errored(reason);
            }
        }

        let outcome = match write_new_file(&file_path, &artifact.content).await {
            Ok(true) => MaterializationOutcome::Created,
            Ok(false) => MaterializationOutcome::SkippedExisting,
            Err(e) => MaterializationOutcome::Errored(format!(
                "failed to write {}: {}",
                file_path.display(),
                e
            )),
        };

        match &outcome {
            MaterializationOutcome::Created => {
                log::info!("Created file: {}", file_path.display())
            }
            MaterializationOutcome::SkippedExisting => {
                log::warn!("File already exists: {}", file_path.display())
            }
            MaterializationOutcome::Errored(reason) => log::error!("{}", reason),
        }
        outcome
    }
}

/// Create `dir` and its parents. An existing directory is not an error.
async fn ensure_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir).await?;
    log::debug!("Ensured directory: {}", dir.display());
    Ok(())
}

/// Write `content` unless the file exists. Returns whether it was written.
async fn write_new_file(path: &Path, content: &str) -> io::Result<bool> {
    if fs::try_exists(path).await? {
        return Ok(false);
    }

    let mut file = match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
    {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(e),
    };
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;
    Ok(true)
}
