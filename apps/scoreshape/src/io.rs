//! # File-Backed Source and Sink
//!
//! Implementations of the core's [`Source`]/[`Sink`] capability traits
//! over the local filesystem, plus the path validation used by the CLI.

use scoreshape_core::{ScoreError, Sink, Source};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMIT
// =============================================================================

/// Maximum input file size (50 MB).
///
/// Score documents are small; anything larger is a mistake or abuse and
/// is rejected before reading.
pub const MAX_INPUT_FILE_SIZE: u64 = 50 * 1024 * 1024;

// =============================================================================
// SOURCE / SINK
// =============================================================================

/// A [`Source`] reading a document from a file path.
pub struct FileSource {
    path: PathBuf,
    id: String,
}

impl FileSource {
    /// Create a source for the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path.display().to_string();
        Self { path, id }
    }
}

impl Source for FileSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn read(&self) -> Result<String, ScoreError> {
        let metadata = std::fs::metadata(&self.path).map_err(|e| ScoreError::ReadFailure {
            source_id: self.id.clone(),
            detail: e.to_string(),
        })?;

        if metadata.len() > MAX_INPUT_FILE_SIZE {
            return Err(ScoreError::ReadFailure {
                source_id: self.id.clone(),
                detail: format!(
                    "file size {} bytes exceeds maximum allowed {} bytes",
                    metadata.len(),
                    MAX_INPUT_FILE_SIZE
                ),
            });
        }

        std::fs::read_to_string(&self.path).map_err(|e| ScoreError::ReadFailure {
            source_id: self.id.clone(),
            detail: e.to_string(),
        })
    }
}

/// A [`Sink`] writing a document to a file path.
pub struct FileSink {
    path: PathBuf,
    id: String,
}

impl FileSink {
    /// Create a sink for the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path.display().to_string();
        Self { path, id }
    }
}

impl Sink for FileSink {
    fn id(&self) -> &str {
        &self.id
    }

    fn write(&mut self, text: &str) -> Result<(), ScoreError> {
        std::fs::write(&self.path, text).map_err(|e| ScoreError::WriteFailure {
            sink_id: self.id.clone(),
            detail: e.to_string(),
        })
    }
}

// =============================================================================
// PATH HELPERS
// =============================================================================

/// Validate an input path: it must exist and be a regular file.
///
/// Canonicalization resolves ".." and symlinks so error messages and
/// derived output locations refer to the real file.
pub fn validate_input_path(path: &Path) -> Result<PathBuf, ScoreError> {
    let canonical = path.canonicalize().map_err(|e| ScoreError::ReadFailure {
        source_id: path.display().to_string(),
        detail: e.to_string(),
    })?;

    if !canonical.is_file() {
        return Err(ScoreError::ReadFailure {
            source_id: path.display().to_string(),
            detail: "not a regular file".to_string(),
        });
    }

    Ok(canonical)
}

/// Derive the output location for a reshaped document.
///
/// `<stem>-reshaped.xml`, placed under `out_dir` when given, otherwise
/// next to the input.
#[must_use]
pub fn derive_output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    let file_name = format!("{stem}-reshaped.xml");

    match out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

// =============================================================================
// TESTS
// =============================================================================
