//! Configuration constants and profile loading for calcline
//!
//! Settings live in an INI file with one section per profile:
//!
//! ```ini
//! [default]
//! precision = 10
//! bell = false
//! ```

use crate::calculator::{DEFAULT_PRECISION, MAX_PRECISION};
use anyhow::{bail, Context, Result};
use ini::{Ini, Properties};
use std::path::Path;

/// Default profile file path for calcline
pub const DEFAULT_PROFILE_PATH: &str = "~/.calcline/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "CALCLINE_PROFILE_PATH";

/// Profile used when none is given on the command line
pub const DEFAULT_PROFILE_NAME: &str = "default";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Calculator settings read from a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalcSettings {
    /// Maximum fractional digits shown for non-integral results
    pub precision: usize,
    /// Ring the terminal bell when an alert is raised
    pub bell: bool,
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            bell: false,
        }
    }
}

impl CalcSettings {
    /// Load settings for `profile_name` from the INI file at `profile_path`.
    ///
    /// A missing file or section yields defaults. Unparseable values are errors.
    pub fn load(profile_name: &str, profile_path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(profile_path);
        let path = Path::new(expanded.as_ref());

        if !path.exists() {
            tracing::debug!("Profile file '{}' not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)
            .with_context(|| format!("Failed to read profile file '{}'", path.display()))?;

        match ini.section(Some(profile_name)) {
            Some(section) => {
                tracing::debug!("Loading profile '{}' from '{}'", profile_name, path.display());
                Self::from_section(profile_name, section)
            }
            None => {
                tracing::warn!("Profile '{}' not found, using defaults", profile_name);
                Ok(Self::default())
            }
        }
    }

    fn from_section(profile_name: &str, section: &Properties) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(raw) = section.get("precision") {
            let precision: usize = raw.trim().parse().with_context(|| {
                format!("Invalid precision '{raw}' in profile '{profile_name}'")
            })?;
            if precision > MAX_PRECISION {
                bail!(
                    "Precision {precision} in profile '{profile_name}' exceeds maximum of {MAX_PRECISION}"
                );
            }
            settings.precision = precision;
        }

        if let Some(raw) = section.get("bell") {
            settings.bell = parse_bool(raw).with_context(|| {
                format!("Invalid bell value '{raw}' in profile '{profile_name}'")
            })?;
        }

        Ok(settings)
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => bail!("expected true or false, got '{other}'"),
    }
}
