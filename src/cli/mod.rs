//! CLI Module
//!
//! Provides command-line interface functionality including:
//! - Exit codes for automation
//! - Text and JSON rendering of command results

pub mod exit_codes;
pub mod output;

pub use exit_codes::{exit_code_description, print_exit_codes, CliResult, ExitCodes};
pub use output::{print_json, render_palette, OutputFormat, PaletteView};

use thiserror::Error;

use crate::core::generators::{find_generator, generator_names};

/// Command-line usage errors
#[derive(Error, Debug)]
pub enum UsageError {
    /// `--only` named a file no generator produces
    #[error("unknown output {name:?}, expected one of: {valid}")]
    UnknownOutput {
        /// Requested name
        name: String,
        /// Comma separated list of valid names
        valid: String,
    },
}

/// Check that every requested output name has a generator
pub fn validate_outputs(names: &[String]) -> Result<(), UsageError> {
    match names.iter().find(|name| find_generator(name).is_none()) {
        Some(name) => Err(UsageError::UnknownOutput {
            name: name.clone(),
            valid: generator_names().join(", "),
        }),
        None => Ok(()),
    }
}
