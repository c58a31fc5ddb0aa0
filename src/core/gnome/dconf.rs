//! Profile store backed by `gsettings` and `dconf`

use std::io::Write;
use std::process::{Command, Stdio};

use super::gvariant;
use super::{ProfileStore, ProfileStoreError, ProfileValues};

/// Schema holding the profile list and the default profile
pub const PROFILES_LIST_SCHEMA: &str = "org.gnome.Terminal.ProfilesList";

/// dconf directory holding one sub-directory per profile
pub const PROFILES_DCONF_PATH: &str = "/org/gnome/terminal/legacy/profiles:/";

/// Store that shells out to the GNOME settings tools
#[derive(Debug, Clone)]
pub struct DconfStore {
    gsettings: String,
    dconf: String,
}

impl Default for DconfStore {
    fn default() -> Self {
        Self::new("gsettings", "dconf")
    }
}

impl DconfStore {
    /// Create a store using the given tool executables
    pub fn new(gsettings: impl Into<String>, dconf: impl Into<String>) -> Self {
        Self {
            gsettings: gsettings.into(),
            dconf: dconf.into(),
        }
    }

    /// dconf directory of one profile
    pub fn profile_path(profile: &str) -> String {
        format!("{}:{}/", PROFILES_DCONF_PATH, profile)
    }

    fn gsettings_get(&self, key: &str) -> Result<String, ProfileStoreError> {
        run(&self.gsettings, &["get", PROFILES_LIST_SCHEMA, key], None)
    }

    fn gsettings_set(&self, key: &str, value: &str) -> Result<(), ProfileStoreError> {
        run(&self.gsettings, &["set", PROFILES_LIST_SCHEMA, key, value], None).map(|_| ())
    }
}

impl ProfileStore for DconfStore {
    fn default_profile(&self) -> Result<String, ProfileStoreError> {
        let profile = gvariant::parse_string(&self.gsettings_get("default")?)?;
        if profile.is_empty() {
            return Err(ProfileStoreError::NoDefaultProfile);
        }
        Ok(profile)
    }

    fn profile_list(&self) -> Result<Vec<String>, ProfileStoreError> {
        Ok(gvariant::parse_string_array(&self.gsettings_get("list")?)?)
    }

    fn user_values(&self, profile: &str) -> Result<ProfileValues, ProfileStoreError> {
        let path = Self::profile_path(profile);
        let dump = run(&self.dconf, &["dump", path.as_str()], None)?;
        Ok(parse_dump(&dump))
    }

    fn write_profile(
        &mut self,
        profile: &str,
        values: &ProfileValues,
    ) -> Result<(), ProfileStoreError> {
        let path = Self::profile_path(profile);
        tracing::info!("Writing {} keys to {}", values.len(), path);
        run(&self.dconf, &["load", path.as_str()], Some(&format_load(values)))?;
        Ok(())
    }

    fn set_profile_list(
        &mut self,
        list: &[String],
        default: &str,
    ) -> Result<(), ProfileStoreError> {
        tracing::info!("Setting profile list ({} entries), default {}", list.len(), default);
        self.gsettings_set("list", &gvariant::format_string_array(list))?;
        self.gsettings_set("default", &gvariant::quote_string(default))
    }
}

/// Run a tool and return its stdout
fn run(program: &str, args: &[&str], stdin: Option<&str>) -> Result<String, ProfileStoreError> {
    tracing::debug!("Running {} {}", program, args.join(" "));
    let spawn_error = |source: std::io::Error| ProfileStoreError::Spawn {
        program: program.to_string(),
        source,
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(if stdin.is_some() { Stdio::piped() } else { Stdio::null() })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(spawn_error)?;

    if let (Some(input), Some(mut pipe)) = (stdin, child.stdin.take()) {
        pipe.write_all(input.as_bytes()).map_err(spawn_error)?;
    }

    let output = child.wait_with_output().map_err(spawn_error)?;
    if !output.status.success() {
        return Err(ProfileStoreError::Failed {
            program: program.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Keys of the `[/]` group of a `dconf dump`
pub fn parse_dump(text: &str) -> ProfileValues {
    let mut values = ProfileValues::new();
    let mut in_root = false;
    for line in text.lines() {
        let line = line.trim_end();
        if line.starts_with('[') && line.ends_with(']') {
            in_root = line == "[/]";
            continue;
        }
        if !in_root || line.is_empty() {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            values.insert(key.to_string(), value.to_string());
        }
    }
    values
}

/// Keyfile accepted by `dconf load`
pub fn format_load(values: &ProfileValues) -> String {
    let mut out = String::from("[/]\n");
    for (key, value) in values {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}
