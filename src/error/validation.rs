//! Validation errors.
//!
//! These are reported synchronously by [`DraftGenerator::start`](crate::orchestrator::DraftGenerator::start)
//! before any request is sent. No draft state exists when one of these is returned.

use thiserror::Error;

/// Reasons a generation request is rejected before it reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Text or URL input was empty or whitespace-only.
    #[error("{kind} input is empty")]
    EmptyInput { kind: &'static str },

    /// File source has no usable filename.
    #[error("file has no name")]
    MissingFilename,

    /// File extension is not in the allow-list.
    #[error("unsupported file type '{extension}' (supported: {supported})")]
    UnsupportedFileType {
        extension: String,
        supported: String,
    },

    /// File exceeds the upload cap.
    #[error("file is {size} bytes, limit is {max} bytes")]
    FileTooLarge { size: u64, max: u64 },

    /// File could not be read from disk.
    #[error("cannot read file {path}: {message}")]
    UnreadableFile { path: String, message: String },

    /// No API credential was supplied.
    #[error("no API key available")]
    MissingCredential,
}

impl ValidationError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::EmptyInput { .. } => "Please enter some content first.".to_string(),
            ValidationError::MissingFilename => "Please choose a file.".to_string(),
            ValidationError::UnsupportedFileType { supported, .. } => {
                format!("Unsupported file type. Supported types: {}", supported)
            }
            ValidationError::FileTooLarge { max, .. } => {
                format!("Files cannot be larger than {}MB.", max / 1024 / 1024)
            }
            ValidationError::UnreadableFile { path, .. } => {
                format!("Could not read '{}'.", path)
            }
            ValidationError::MissingCredential => {
                "Authentication required. Run `til-draft login` first.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput { .. } => "E_VALID_EMPTY",
            ValidationError::MissingFilename => "E_VALID_FILENAME",
            ValidationError::UnsupportedFileType { .. } => "E_VALID_FILETYPE",
            ValidationError::FileTooLarge { .. } => "E_VALID_SIZE",
            ValidationError::UnreadableFile { .. } => "E_VALID_READ",
            ValidationError::MissingCredential => "E_VALID_AUTH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_too_large_message_in_megabytes() {
        let err = ValidationError::FileTooLarge {
            size: 11 * 1024 * 1024,
            max: 10 * 1024 * 1024,
        };
        assert!(err.user_message().contains("10MB"));
        assert_eq!(err.error_code(), "E_VALID_SIZE");
    }

    #[test]
    fn test_unsupported_file_type_lists_supported() {
        let err = ValidationError::UnsupportedFileType {
            extension: ".png".to_string(),
            supported: ".md, .txt".to_string(),
        };
        assert!(err.to_string().contains(".png"));
        assert!(err.user_message().contains(".md, .txt"));
    }

    #[test]
    fn test_empty_input_display() {
        let err = ValidationError::EmptyInput { kind: "text" };
        assert_eq!(err.to_string(), "text input is empty");
    }

    #[test]
    fn test_missing_credential_points_to_login() {
        let err = ValidationError::MissingCredential;
        assert!(err.user_message().contains("login"));
        assert_eq!(err.error_code(), "E_VALID_AUTH");
    }
}
