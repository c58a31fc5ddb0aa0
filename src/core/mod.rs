//! Core colorscheme functionality
//!
//! This module provides:
//! - Color value type and base16 palette model
//! - Output generators for terminals, editors and the web
//! - Generation driver writing outputs to disk
//! - Property list encoding for macOS profiles
//! - GNOME Terminal profile import

pub mod color;
pub mod generators;
pub mod gnome;
pub mod palette;
pub mod pipeline;
pub mod plist;
