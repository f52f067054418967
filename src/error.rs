//! Error types for android-run
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for android-run operations
#[derive(Error, Debug)]
pub enum RunnerError {
    /// An external tool returned a non-zero status. Carries the rendered
    /// command line and the status code for the terminal error log.
    #[error("command failed: {command} (exit status {code})")]
    CommandFailed { command: String, code: i32 },

    #[error("Android SDK not found: set ANDROID_HOME or ANDROID_SDK_ROOT")]
    SdkNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for android-run operations
pub type Result<T> = std::result::Result<T, RunnerError>;
