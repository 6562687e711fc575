use colored::*;
use hashkit_core::error::{IoErrorKind, ValidationError};
use std::error::Error as StdError;
use std::fmt;

/// CLI-specific error type with semantic exit codes
#[derive(Debug)]
pub struct CliError {
    /// The main error message
    message: String,

    /// Error category for exit code determination
    category: ErrorCategory,

    /// Suggestions for recovery
    pub suggestions: Vec<String>,

    /// Source error if any
    source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Error categories that map to exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorCategory {
    General,
    Misuse,
    Filesystem,
    Internal,
}

/// Semantic exit codes for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    Misuse = 2,
    FilesystemError = 4,
    /// Broken runtime, e.g. a digest primitive is missing
    InternalError = 70,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

impl CliError {
    fn new(message: &str, category: ErrorCategory) -> Self {
        Self {
            message: message.to_string(),
            category,
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Create a general error
    pub fn general(message: &str) -> Self {
        Self::new(message, ErrorCategory::General)
    }

    /// Create a command misuse error
    pub fn misuse(message: &str) -> Self {
        let mut error = Self::new(message, ErrorCategory::Misuse);
        error
            .suggestions
            .push("Run 'hashkit --help' for usage information".to_string());
        error
    }

    /// Create a filesystem error
    pub fn filesystem(message: &str) -> Self {
        Self::new(message, ErrorCategory::Filesystem)
    }

    /// Create an internal error for a broken runtime
    pub fn internal(message: &str) -> Self {
        Self::new(message, ErrorCategory::Internal)
    }

    /// Classify a core library error
    pub fn from_core(error: &hashkit_core::Error) -> Self {
        use hashkit_core::Error;

        let message = error.to_string();
        match error {
            Error::Validation(ValidationError::UnknownAlgorithm { .. }) => Self::misuse(&message)
                .with_suggestion("Run 'hashkit algorithms' to list supported algorithms"),
            Error::Validation(ValidationError::UnknownEncoding { .. }) => Self::misuse(&message)
                .with_suggestion(
                    "Supported encodings: UTF-8, UTF-16, UTF-16BE, UTF-16LE, ISO-8859-1, US-ASCII",
                ),
            Error::Validation(ValidationError::UnencodableText { .. }) => Self::misuse(&message)
                .with_suggestion("Choose an encoding that can represent the input, such as UTF-8"),
            Error::Validation(_) => Self::misuse(&message),
            Error::Io(io) => {
                let mut cli_error = Self::filesystem(&message);
                match io.kind {
                    IoErrorKind::FileNotFound => cli_error
                        .suggestions
                        .push("Check if the file exists".to_string()),
                    IoErrorKind::PermissionDenied => {
                        cli_error.suggestions.push("Check file permissions".to_string())
                    }
                    IoErrorKind::Other => {}
                }
                cli_error
            }
            Error::Internal(_) => Self::internal(&message),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self.category {
            ErrorCategory::General => ExitCode::GeneralError,
            ErrorCategory::Misuse => ExitCode::Misuse,
            ErrorCategory::Filesystem => ExitCode::FilesystemError,
            ErrorCategory::Internal => ExitCode::InternalError,
        }
    }

    /// Add a recovery suggestion
    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestions.push(suggestion.to_string());
        self
    }

    /// Attach the underlying error
    pub fn with_source(mut self, source: Box<dyn StdError + Send + Sync>) -> Self {
        self.source = Some(source);
        self
    }

    fn label(&self) -> &'static str {
        match self.category {
            ErrorCategory::General => "Error",
            ErrorCategory::Misuse => "Usage Error",
            ErrorCategory::Filesystem => "File Error",
            ErrorCategory::Internal => "Internal Error",
        }
    }

    /// Format the error for user display
    pub fn format_for_user(&self, debug: bool) -> String {
        let mut output = String::new();

        let prefix = match self.category {
            ErrorCategory::Misuse => self.label().yellow(),
            _ => self.label().red(),
        };
        output.push_str(&format!("{}: {}\n", prefix, self.message));

        if debug && let Some(source) = &self.source {
            output.push_str("\nCaused by:\n");
            let mut current: Option<&dyn StdError> = Some(source.as_ref());
            let mut level = 1;

            while let Some(err) = current {
                output.push_str(&format!("  {level}: {err}\n"));
                current = err.source();
                level += 1;
            }
        }

        if !self.suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in &self.suggestions {
                output.push_str(&format!("  • {suggestion}\n"));
            }
        }

        output
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.message)
    }
}

impl StdError for CliError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

/// Convert anyhow errors to CLI errors, classifying any core error in the chain
impl From<anyhow::Error> for CliError {
    fn from(error: anyhow::Error) -> Self {
        let core = error
            .chain()
            .find_map(|cause| cause.downcast_ref::<hashkit_core::Error>());

        let cli_error = match core {
            Some(core) => {
                let mut cli_error = Self::from_core(core);
                // Keep the outer context, e.g. which file failed
                cli_error.message = format!("{error:#}");
                cli_error
            }
            None => Self::general(&format!("{error:#}")),
        };

        cli_error.with_source(error.into())
    }
}
