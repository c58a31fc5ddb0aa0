//! GNOME Terminal profile import
//!
//! Creates a new GNOME Terminal profile colored from a palette:
//! - every key the user set on the default profile is cloned
//! - the color keys are overwritten from the palette
//! - the new profile is appended to the profile list and made default
//!
//! Each import creates a fresh profile; running it twice leaves two.

mod dconf;
pub mod gvariant;

pub use dconf::{DconfStore, PROFILES_DCONF_PATH, PROFILES_LIST_SCHEMA};

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use self::gvariant::{format_bool, format_string_array, quote_string, GVariantError};
use super::color::Color;
use super::palette::Palette;

/// Name shown in the GNOME Terminal profile menu
pub const PROFILE_NAME: &str = "dotfiles colorscheme";

/// Profile keys mapped to GVariant text values
pub type ProfileValues = BTreeMap<String, String>;

/// Profile store errors
#[derive(Error, Debug)]
pub enum ProfileStoreError {
    /// A settings tool could not be started
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Executable name
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A settings tool exited unsuccessfully
    #[error("{program} failed ({status}): {stderr}")]
    Failed {
        /// Executable name
        program: String,
        /// Exit status
        status: String,
        /// Captured standard error
        stderr: String,
    },

    /// Tool output could not be parsed
    #[error("unexpected settings value: {0}")]
    Parse(#[from] GVariantError),

    /// No default profile is configured
    #[error("no default GNOME Terminal profile is set")]
    NoDefaultProfile,
}

/// Access to the GNOME Terminal profile settings
#[cfg_attr(test, mockall::automock)]
pub trait ProfileStore {
    /// Id of the default profile
    fn default_profile(&self) -> Result<String, ProfileStoreError>;

    /// Ids of all listed profiles
    fn profile_list(&self) -> Result<Vec<String>, ProfileStoreError>;

    /// Keys explicitly set on a profile
    fn user_values(&self, profile: &str) -> Result<ProfileValues, ProfileStoreError>;

    /// Write keys to a profile, creating it if needed
    fn write_profile(
        &mut self,
        profile: &str,
        values: &ProfileValues,
    ) -> Result<(), ProfileStoreError>;

    /// Replace the profile list and the default profile
    fn set_profile_list(&mut self, list: &[String], default: &str) -> Result<(), ProfileStoreError>;
}

/// Result of an import
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportedProfile {
    /// Id of the new profile
    pub id: String,
    /// Values written to it
    pub values: ProfileValues,
}

/// Keys set from the palette, as GVariant text
pub fn profile_overrides(palette: &Palette) -> ProfileValues {
    let color = |c: Color| quote_string(&c.css_hex());
    let palette_colors: Vec<String> = palette.ansi_colors().iter().map(|c| c.css_hex()).collect();

    [
        ("visible-name", quote_string(PROFILE_NAME)),
        ("use-theme-colors", format_bool(false)),
        ("foreground-color", color(palette.fg())),
        ("background-color", color(palette.bg())),
        ("bold-color-same-as-fg", format_bool(true)),
        ("bold-color", color(palette.fg())),
        ("cursor-colors-set", format_bool(true)),
        ("cursor-background-color", color(palette.cursor_bg())),
        ("cursor-foreground-color", color(palette.cursor_fg())),
        ("highlight-colors-set", format_bool(true)),
        ("highlight-background-color", color(palette.selection_bg())),
        ("highlight-foreground-color", color(palette.selection_fg())),
        ("palette", format_string_array(palette_colors.as_slice())),
        ("bold-is-bright", format_bool(true)),
        ("scrollbar-policy", quote_string("never")),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value))
    .collect()
}

/// Values a new profile would receive, without writing anything
pub fn plan_profile<S: ProfileStore + ?Sized>(
    store: &S,
    palette: &Palette,
) -> Result<ProfileValues, ProfileStoreError> {
    let default = store.default_profile()?;
    let mut values = store.user_values(&default)?;
    tracing::debug!("Cloning {} keys from default profile {}", values.len(), default);
    values.extend(profile_overrides(palette));
    Ok(values)
}

/// Import the palette as a new profile with a random id
pub fn import_profile<S: ProfileStore + ?Sized>(
    store: &mut S,
    palette: &Palette,
) -> Result<ImportedProfile, ProfileStoreError> {
    import_profile_with_id(store, palette, &Uuid::new_v4().to_string())
}

/// Import the palette as a new profile with the given id
pub fn import_profile_with_id<S: ProfileStore + ?Sized>(
    store: &mut S,
    palette: &Palette,
    id: &str,
) -> Result<ImportedProfile, ProfileStoreError> {
    let values = plan_profile(&*store, palette)?;
    let mut list = store.profile_list()?;

    store.write_profile(id, &values)?;
    list.push(id.to_string());
    store.set_profile_list(&list, id)?;

    tracing::info!("Imported {} as GNOME Terminal profile {}", palette.name(), id);
    Ok(ImportedProfile {
        id: id.to_string(),
        values,
    })
}
