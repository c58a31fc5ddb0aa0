//! Configuration module
//!
//! Handles the palette source file and default locations

mod palette;

pub use palette::{load_palette, parse_palette, resolve_palette, ConfigError, PaletteSource};

use directories::ProjectDirs;
use std::path::PathBuf;

/// File name of the user palette inside the config directory
pub const PALETTE_FILE_NAME: &str = "palette.toml";

/// Default output directory
pub const DEFAULT_OUT_DIR: &str = "out";

/// Default template directory
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";

/// Get the application configuration directory
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "dotfiles", "colorschemes")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the default palette path
pub fn default_palette_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(PALETTE_FILE_NAME))
}
