//! CLI runtime configuration.
//!
//! Resolved once at startup from the environment (after loading `.env`) and then passed into
//! command handlers, so handlers never read process-wide environment variables themselves.

use anyhow::bail;
use std::str::FromStr;

/// Environment variable selecting the default generator for `vuuid new`.
pub const DEFAULT_VERSION_ENV: &str = "VUUID_DEFAULT_VERSION";

/// Which generator to use for new identifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum UuidVersion {
    /// Random (version 4).
    #[default]
    V4,
    /// Time-ordered (version 7).
    V7,
}

impl FromStr for UuidVersion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v4" | "4" => Ok(Self::V4),
            "v7" | "7" => Ok(Self::V7),
            other => bail!("{DEFAULT_VERSION_ENV} must be 'v4' or 'v7', got: '{other}'"),
        }
    }
}

/// CLI configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    default_version: UuidVersion,
}

impl CliConfig {
    pub fn new(default_version: UuidVersion) -> Self {
        Self { default_version }
    }

    /// Build from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let version = default_version_from_env_value(std::env::var(DEFAULT_VERSION_ENV).ok())?;
        Ok(Self::new(version))
    }

    pub fn default_version(&self) -> UuidVersion {
        self.default_version
    }
}

/// Parse the default generator from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`UuidVersion::V4`].
pub fn default_version_from_env_value(value: Option<String>) -> anyhow::Result<UuidVersion> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value.map(|v| v.parse::<UuidVersion>()).transpose()?;

    Ok(parsed.unwrap_or_default())
}
