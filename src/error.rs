//! Application error type.

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// The pasted string did not contain a recognizable video URL.
    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    /// An imported file carried a `videoUrl` that did not match.
    #[error("Invalid video URL in the file: {0}")]
    InvalidUrlInFile(String),

    /// The imported payload could not be parsed or failed validation.
    #[error("Invalid JSON file: {0}")]
    MalformedImport(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Short title used for the alert dialog.
    pub fn title(&self) -> &'static str {
        match self {
            AppError::InvalidUrl(_) => "Invalid YouTube URL",
            AppError::InvalidUrlInFile(_) => "Invalid video URL in the file",
            AppError::MalformedImport(_) => "Invalid JSON file",
            AppError::Io(_) => "File error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.title(), "File error");
    }

    #[test]
    fn test_display_includes_detail() {
        let err = AppError::InvalidUrl("not a url".to_string());
        assert_eq!(err.to_string(), "Invalid YouTube URL: not a url");
    }
}
