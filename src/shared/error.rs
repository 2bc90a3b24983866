use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success, including lookups that degraded to an empty result
    Success = 0,
    /// Parameter validation failed or an unexpected error aborted the run
    Failure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Failure => write!(f, "Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for dependency lookup.
///
/// Backends never let these escape as a failed run: they are reported as
/// diagnostics and the lookup degrades to an empty dependency list.
#[derive(Debug, Error)]
pub enum DepvizError {
    #[error("Failed to read fixture file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FixtureReadError { path: PathBuf, details: String },

    #[error("Failed to fetch index page: {url}\nDetails: {details}\n\n💡 Hint: Please verify the repository URL and your network connection")]
    NetworkError { url: String, details: String },

    #[error("Security: {component} '{value}' {reason}")]
    UnsafeUrlComponent {
        component: String,
        value: String,
        reason: String,
    },

    #[error("Failed to load config file: {path}\nDetails: {details}\n\n💡 Hint: {hint}")]
    ConfigError {
        path: PathBuf,
        details: String,
        hint: String,
    },
}
