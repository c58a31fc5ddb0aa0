//! CLI Exit Codes
//!
//! Exit codes for scripted runs, and the mapping from library errors onto
//! them.

use std::process::ExitCode;

use crate::config::ConfigError;
use crate::core::color::ValidationError;
use crate::core::generators::GenerationError;
use crate::core::gnome::ProfileStoreError;
use crate::core::pipeline::OutputError;

use super::UsageError;

/// Exit code constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCodes;

impl ExitCodes {
    /// Success
    pub const SUCCESS: u8 = 0;

    /// General error
    pub const ERROR: u8 = 1;

    /// Invalid arguments
    pub const INVALID_ARGS: u8 = 2;

    /// File not found
    pub const FILE_NOT_FOUND: u8 = 6;

    /// Permission denied
    pub const PERMISSION_DENIED: u8 = 7;

    /// Configuration error
    pub const CONFIG_ERROR: u8 = 8;

    /// Data validation failed
    pub const VALIDATION_FAILED: u8 = 17;

    /// A generator failed
    pub const GENERATION_FAILED: u8 = 18;

    /// The GNOME profile store failed
    pub const PROFILE_STORE_ERROR: u8 = 19;

    /// Every defined code, ascending
    pub const ALL: [u8; 9] = [0, 1, 2, 6, 7, 8, 17, 18, 19];
}

/// CLI operation result
#[derive(Debug)]
pub enum CliResult {
    /// Success
    Success,

    /// Error with code and message
    Error(u8, String),
}

impl CliResult {
    /// Success
    pub fn success() -> Self {
        Self::Success
    }

    /// Map an error chain onto the most specific exit code
    pub fn from_error(err: &anyhow::Error) -> Self {
        Self::Error(error_code(err), format!("{:#}", err))
    }

    /// Get exit code
    pub fn code(&self) -> u8 {
        match self {
            Self::Success => ExitCodes::SUCCESS,
            Self::Error(code, _) => *code,
        }
    }

    /// Convert to ExitCode
    pub fn to_exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

fn io_code(err: &std::io::Error) -> u8 {
    use std::io::ErrorKind;

    match err.kind() {
        ErrorKind::NotFound => ExitCodes::FILE_NOT_FOUND,
        ErrorKind::PermissionDenied => ExitCodes::PERMISSION_DENIED,
        _ => ExitCodes::ERROR,
    }
}

fn error_code(err: &anyhow::Error) -> u8 {
    err.chain().find_map(cause_code).unwrap_or(ExitCodes::ERROR)
}

fn cause_code(cause: &(dyn std::error::Error + 'static)) -> Option<u8> {
    if let Some(err) = cause.downcast_ref::<UsageError>() {
        return Some(match err {
            UsageError::UnknownOutput { .. } => ExitCodes::INVALID_ARGS,
        });
    }
    if let Some(err) = cause.downcast_ref::<ConfigError>() {
        return Some(match err {
            ConfigError::NotFound(_) => ExitCodes::FILE_NOT_FOUND,
            ConfigError::Read { source, .. } => io_code(source),
            ConfigError::InvalidColor { .. } => ExitCodes::VALIDATION_FAILED,
            _ => ExitCodes::CONFIG_ERROR,
        });
    }
    if let Some(err) = cause.downcast_ref::<OutputError>() {
        return Some(match err {
            OutputError::CreateDir { source, .. } | OutputError::Write { source, .. } => {
                io_code(source)
            }
            OutputError::Generator { .. } => ExitCodes::GENERATION_FAILED,
        });
    }
    if cause.is::<GenerationError>() {
        return Some(ExitCodes::GENERATION_FAILED);
    }
    if cause.is::<ValidationError>() {
        return Some(ExitCodes::VALIDATION_FAILED);
    }
    if cause.is::<ProfileStoreError>() {
        return Some(ExitCodes::PROFILE_STORE_ERROR);
    }
    cause.downcast_ref::<std::io::Error>().map(io_code)
}

/// Exit code description
pub fn exit_code_description(code: u8) -> &'static str {
    match code {
        0 => "Success",
        1 => "General error",
        2 => "Invalid arguments",
        6 => "File not found",
        7 => "Permission denied",
        8 => "Configuration error",
        17 => "Validation failed",
        18 => "Generation failed",
        19 => "Profile store error",
        _ => "Unknown error",
    }
}

/// Print exit code table
pub fn print_exit_codes() {
    println!("Exit Codes:");
    for code in ExitCodes::ALL {
        println!("  {:>3}  {}", code, exit_code_description(code));
    }
}
