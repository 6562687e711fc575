//! I/O related error types

use std::path::PathBuf;
use thiserror::Error;

/// I/O error with the input path attached when one is known
#[derive(Error, Debug)]
#[error("{}", format_io_error(self))]
pub struct IoError {
    /// The kind of I/O error
    pub kind: IoErrorKind,
    /// Input path associated with the error (if any)
    pub path: Option<PathBuf>,
    /// Underlying I/O error (if any)
    #[source]
    pub source: Option<std::io::Error>,
}

/// Kind of I/O error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoErrorKind {
    /// Input file does not exist
    FileNotFound,
    /// Input file is not readable
    PermissionDenied,
    /// Any other read failure
    Other,
}

impl IoError {
    /// Create a file not found error
    pub fn file_not_found(path: &std::path::Path) -> Self {
        Self {
            kind: IoErrorKind::FileNotFound,
            path: Some(path.to_path_buf()),
            source: None,
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: &std::path::Path, source: std::io::Error) -> Self {
        Self {
            kind: IoErrorKind::PermissionDenied,
            path: Some(path.to_path_buf()),
            source: Some(source),
        }
    }

    /// Classify a standard I/O error
    pub fn from_std(source: std::io::Error) -> Self {
        let kind = match source.kind() {
            std::io::ErrorKind::NotFound => IoErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => IoErrorKind::PermissionDenied,
            _ => IoErrorKind::Other,
        };

        Self {
            kind,
            path: None,
            source: Some(source),
        }
    }

    /// Attach the input path
    pub fn with_path(mut self, path: &std::path::Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }
}

fn format_io_error(error: &IoError) -> String {
    match (&error.kind, &error.path) {
        (IoErrorKind::FileNotFound, Some(path)) => {
            format!("Input file not found: {}", path.display())
        }
        (IoErrorKind::FileNotFound, None) => "Input file not found".to_string(),
        (IoErrorKind::PermissionDenied, Some(path)) => {
            format!("Permission denied reading input: {}", path.display())
        }
        (IoErrorKind::PermissionDenied, None) => "Permission denied reading input".to_string(),
        (IoErrorKind::Other, path) => {
            let location = path
                .as_ref()
                .map(|p| format!(" ({})", p.display()))
                .unwrap_or_default();
            match &error.source {
                Some(source) => format!("Failed to read input{location}: {source}"),
                None => format!("Failed to read input{location}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    #[test]
    fn test_file_not_found_error() {
        let path = Path::new("/data/archive.bin");
        let error = IoError::file_not_found(path);

        assert_eq!(error.kind, IoErrorKind::FileNotFound);
        assert_eq!(error.path, Some(path.to_path_buf()));
        assert!(error.source.is_none());
        assert!(error.to_string().contains("not found"));
        assert!(error.to_string().contains("/data/archive.bin"));
    }

    #[test]
    fn test_from_std_keeps_source() {
        let error = IoError::from_std(io::Error::new(io::ErrorKind::NotFound, "gone"));

        assert_eq!(error.kind, IoErrorKind::FileNotFound);
        assert!(error.path.is_none());
        assert!(error.source.is_some());
    }

    #[test]
    fn test_other_error_mentions_path_and_cause() {
        let error = IoError::from_std(io::Error::other("disk on fire")).with_path(Path::new("x.iso"));

        assert_eq!(error.kind, IoErrorKind::Other);
        let message = error.to_string();
        assert!(message.contains("x.iso"));
        assert!(message.contains("disk on fire"));
    }
}
