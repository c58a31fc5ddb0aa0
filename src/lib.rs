//! # Colorschemes Core Library
//!
//! Generates terminal, editor and web colorscheme files from a single
//! base16 palette:
//! - kitty, Termux, xfce4-terminal, mintty, iTerm2 and Terminal.app
//! - zsh, Vim and Neovim (Lua)
//! - VS Code terminal colors
//! - CSS, SCSS and a Prism syntax theme
//! - Linux console (`setvtrgb`)
//!
//! and imports the palette as a GNOME Terminal profile.
//!
//! ## Example
//!
//! ```rust,no_run
//! use colorschemes_core::{generate_all, GenerateContext, Palette, Selection};
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let palette = Palette::eighties();
//!     let ctx = GenerateContext::new("templates");
//!     let report = generate_all(&palette, &ctx, Path::new("out"), Selection::All)?;
//!     println!("wrote {} files", report.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod core;

// Re-exports for convenience
pub use crate::cli::{CliResult, ExitCodes, OutputFormat};
pub use crate::config::{load_palette, parse_palette, resolve_palette, ConfigError, PaletteSource};
pub use crate::core::color::{Color, ValidationError};
pub use crate::core::generators::{
    find_generator, GenerateContext, GenerationError, Generator, GeneratorKind, Output, GENERATORS,
};
pub use crate::core::gnome::{import_profile, DconfStore, ProfileStore, ProfileStoreError};
pub use crate::core::palette::Palette;
pub use crate::core::pipeline::{generate_all, OutputError, Report, Selection};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
