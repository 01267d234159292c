//! Exit codes for the `heredity` CLI.
//!
//! Exit codes communicate the outcome without requiring output parsing.

/// Exit codes for heredity operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Posteriors computed and printed
    Clean = 0,

    /// Bad command line (emitted by clap before `run` is reached)
    UsageError = 2,

    /// Model file missing, unreadable, or invalid
    ConfigError = 10,

    /// Pedigree file malformed or structurally invalid
    PedigreeError = 11,

    /// Enumeration or normalization failed
    InferenceError = 12,

    /// I/O error
    IoError = 13,

    /// Internal/unknown error
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success.
    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Clean)
    }

    /// Check if this exit code indicates an error requiring attention.
    pub fn is_error(self) -> bool {
        (self as i32) >= 10
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl From<&hd_common::Error> for ExitCode {
    fn from(err: &hd_common::Error) -> Self {
        use hd_common::Error;
        match err {
            e if e.is_config() => ExitCode::ConfigError,
            e if e.is_pedigree() => ExitCode::PedigreeError,
            e if e.is_inference() => ExitCode::InferenceError,
            Error::Io(_) => ExitCode::IoError,
            _ => ExitCode::InternalError,
        }
    }
}
