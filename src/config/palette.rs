//! Palette source files
//!
//! A palette file is TOML with a single `[Theme]` table:
//!
//! ```toml
//! [Theme]
//! base16_name = "eighties"
//! is_dark = true
//! base16_color_00 = "2d2d2d"
//! # ... through base16_color_0f
//! ```

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::color::{Color, ValidationError};
use crate::core::palette::{Palette, BASE16_COUNT};

/// Name of the palette table
const THEME_SECTION: &str = "Theme";

/// Palette loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The palette file does not exist
    #[error("palette file not found: {0}")]
    NotFound(PathBuf),

    /// The palette file exists but cannot be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Invalid TOML
    #[error("failed to parse {origin}: {source}")]
    Parse {
        /// Where the text came from
        origin: String,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// No `[Theme]` table
    #[error("{origin} has no [Theme] section")]
    MissingSection {
        /// Where the text came from
        origin: String,
    },

    /// A required key is absent
    #[error("missing key: {0}")]
    MissingKey(String),

    /// A key holds the wrong kind of value
    #[error("{key} must be a {expected}")]
    InvalidType {
        /// Key name
        key: String,
        /// Expected value kind
        expected: &'static str,
    },

    /// A boolean string is not recognized
    #[error("{key} is not a boolean: {value:?}")]
    InvalidBool {
        /// Key name
        key: String,
        /// Offending value
        value: String,
    },

    /// A color string is malformed
    #[error("{key} is not a valid color: {source}")]
    InvalidColor {
        /// Key name
        key: String,
        /// Validation failure
        #[source]
        source: ValidationError,
    },
}

/// Where a resolved palette came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteSource {
    /// Loaded from a file
    File(PathBuf),
    /// The built-in eighties palette
    BuiltIn,
}

impl fmt::Display for PaletteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::BuiltIn => write!(f, "built-in base16-eighties"),
        }
    }
}

/// Load a palette from a TOML file
pub fn load_palette(path: &Path) -> Result<Palette, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound(path.to_path_buf())
        } else {
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    parse_palette(&text, &path.display().to_string())
}

/// Parse palette TOML; `origin` names the source in errors
pub fn parse_palette(text: &str, origin: &str) -> Result<Palette, ConfigError> {
    let document: toml::Table = toml::from_str(text).map_err(|source| ConfigError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    let theme = document
        .get(THEME_SECTION)
        .and_then(toml::Value::as_table)
        .ok_or_else(|| ConfigError::MissingSection {
            origin: origin.to_string(),
        })?;

    let base16_name = string_value(theme, "base16_name")?.to_string();
    let is_dark = bool_value(theme, "is_dark")?;

    let mut base16_colors = [Color::new(0, 0, 0); BASE16_COUNT];
    for (index, slot) in base16_colors.iter_mut().enumerate() {
        let key = format!("base16_color_{:02x}", index);
        let hex = string_value(theme, &key)?;
        *slot = Color::from_hex(hex).map_err(|source| ConfigError::InvalidColor { key, source })?;
    }

    Ok(Palette::new(base16_name, is_dark, base16_colors))
}

/// Palette from an explicit path, the user config file, or the built-in
/// literal, in that order
pub fn resolve_palette(path: Option<&Path>) -> Result<(Palette, PaletteSource), ConfigError> {
    if let Some(path) = path {
        return Ok((load_palette(path)?, PaletteSource::File(path.to_path_buf())));
    }
    match super::default_palette_path() {
        Some(default) if default.is_file() => {
            let palette = load_palette(&default)?;
            Ok((palette, PaletteSource::File(default)))
        }
        _ => Ok((Palette::eighties(), PaletteSource::BuiltIn)),
    }
}

fn lookup<'a>(table: &'a toml::Table, key: &str) -> Result<&'a toml::Value, ConfigError> {
    table
        .get(key)
        .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
}

fn string_value<'a>(table: &'a toml::Table, key: &str) -> Result<&'a str, ConfigError> {
    lookup(table, key)?
        .as_str()
        .ok_or_else(|| ConfigError::InvalidType {
            key: key.to_string(),
            expected: "string",
        })
}

fn bool_value(table: &toml::Table, key: &str) -> Result<bool, ConfigError> {
    match lookup(table, key)? {
        toml::Value::Boolean(value) => Ok(*value),
        toml::Value::String(text) => match text.to_ascii_lowercase().as_str() {
            "1" | "yes" | "true" | "on" => Ok(true),
            "0" | "no" | "false" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidBool {
                key: key.to_string(),
                value: text.clone(),
            }),
        },
        _ => Err(ConfigError::InvalidType {
            key: key.to_string(),
            expected: "boolean",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EIGHTIES: &str = include_str!("../../palettes/eighties.toml");

    fn with_line(key: &str, line: &str) -> String {
        EIGHTIES
            .lines()
            .map(|l| if l.starts_with(key) { line } else { l })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn without_line(key: &str) -> String {
        EIGHTIES
            .lines()
            .filter(|l| !l.starts_with(key))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_sample_file_matches_builtin() {
        let palette = parse_palette(EIGHTIES, "eighties.toml").unwrap();
        assert_eq!(palette, Palette::eighties());
    }

    #[test]
    fn test_boolean_strings() {
        for (text, expected) in [
            ("\"yes\"", true),
            ("\"On\"", true),
            ("\"0\"", false),
            ("false", false),
        ] {
            let source = with_line("is_dark", &format!("is_dark = {}", text));
            let palette = parse_palette(&source, "test").unwrap();
            assert_eq!(palette.is_dark, expected, "is_dark = {}", text);
        }

        let source = with_line("is_dark", "is_dark = \"maybe\"");
        assert!(matches!(
            parse_palette(&source, "test"),
            Err(ConfigError::InvalidBool { key, .. }) if key == "is_dark"
        ));

        let source = with_line("is_dark", "is_dark = 1");
        assert!(matches!(
            parse_palette(&source, "test"),
            Err(ConfigError::InvalidType { expected: "boolean", .. })
        ));
    }

    #[test]
    fn test_missing_key_is_named() {
        let source = without_line("base16_color_0c");
        match parse_palette(&source, "test") {
            Err(ConfigError::MissingKey(key)) => assert_eq!(key, "base16_color_0c"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_color_is_named() {
        let source = with_line("base16_color_07", "base16_color_07 = \"f2f0e\"");
        match parse_palette(&source, "test") {
            Err(ConfigError::InvalidColor { key, source }) => {
                assert_eq!(key, "base16_color_07");
                assert_eq!(source, ValidationError::HexLength(5));
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let source = with_line("base16_color_01", "base16_color_01 = 0x393939");
        assert!(matches!(
            parse_palette(&source, "test"),
            Err(ConfigError::InvalidType { key, expected: "string" }) if key == "base16_color_01"
        ));
    }

    #[test]
    fn test_structural_errors() {
        assert!(matches!(
            parse_palette("[Theme\nbase16_name = 1", "broken"),
            Err(ConfigError::Parse { origin, .. }) if origin == "broken"
        ));
        assert!(matches!(
            parse_palette("[Colors]\nbase16_name = \"x\"\n", "other"),
            Err(ConfigError::MissingSection { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(load_palette(&path), Err(ConfigError::NotFound(p)) if p == path));
        assert!(matches!(
            resolve_palette(Some(&path)),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.toml");
        std::fs::write(&path, EIGHTIES.replace("\"eighties\"", "\"custom\"")).unwrap();
        let (palette, source) = resolve_palette(Some(&path)).unwrap();
        assert_eq!(palette.base16_name, "custom");
        assert_eq!(source, PaletteSource::File(path));
    }
}
