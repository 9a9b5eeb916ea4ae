//! Generation input.

use bytes::Bytes;
use std::path::Path;

use crate::error::ValidationError;

/// File extensions accepted for upload, lowercase with leading dot.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = [".md", ".markdown", ".txt", ".mdx"];

/// Upload size cap in bytes (10 MiB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// What a draft is generated from. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftSource {
    /// Raw notes
    Text { body: String },
    /// A page for the service to fetch
    Url { body: String },
    /// An uploaded markdown or text file
    File { payload: Bytes, filename: String },
}

impl DraftSource {
    /// Text input.
    pub fn text(body: impl Into<String>) -> Self {
        DraftSource::Text { body: body.into() }
    }

    /// URL input.
    pub fn url(body: impl Into<String>) -> Self {
        DraftSource::Url { body: body.into() }
    }

    /// File input from memory.
    pub fn file(filename: impl Into<String>, payload: impl Into<Bytes>) -> Self {
        DraftSource::File {
            payload: payload.into(),
            filename: filename.into(),
        }
    }

    /// Read a file from disk.
    ///
    /// The extension and size are checked before the file is read.
    pub fn from_path(path: &Path) -> Result<Self, ValidationError> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or(ValidationError::MissingFilename)?;
        check_extension(&filename)?;

        let unreadable = |e: std::io::Error| ValidationError::UnreadableFile {
            path: path.display().to_string(),
            message: e.to_string(),
        };
        let size = std::fs::metadata(path).map_err(unreadable)?.len();
        check_size(size)?;

        let payload = std::fs::read(path).map_err(unreadable)?;
        let source = DraftSource::file(filename, payload);
        source.validate()?;
        Ok(source)
    }

    /// Short name of the input kind.
    pub fn kind(&self) -> &'static str {
        match self {
            DraftSource::Text { .. } => "text",
            DraftSource::Url { .. } => "url",
            DraftSource::File { .. } => "file",
        }
    }

    /// Check the input rules. Called before any request is made.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            DraftSource::Text { body } | DraftSource::Url { body } => {
                if body.trim().is_empty() {
                    return Err(ValidationError::EmptyInput { kind: self.kind() });
                }
                Ok(())
            }
            DraftSource::File { payload, filename } => {
                check_extension(filename)?;
                check_size(payload.len() as u64)
            }
        }
    }
}

/// Lowercased extension with leading dot, e.g. `.md`.
///
/// Returns `None` when the name has no `.` or ends with one.
pub fn file_extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(format!(".{}", ext.to_lowercase()))
}

fn check_extension(filename: &str) -> Result<(), ValidationError> {
    if filename.trim().is_empty() {
        return Err(ValidationError::MissingFilename);
    }
    match file_extension(filename) {
        Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        other => Err(ValidationError::UnsupportedFileType {
            extension: other.unwrap_or_default(),
            supported: SUPPORTED_EXTENSIONS.join(", "),
        }),
    }
}

fn check_size(size: u64) -> Result<(), ValidationError> {
    if size > MAX_FILE_SIZE {
        return Err(ValidationError::FileTooLarge {
            size,
            max: MAX_FILE_SIZE,
        });
    }
    Ok(())
}
