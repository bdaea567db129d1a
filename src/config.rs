//! Fixed repository coordinates and startup inputs.
//!
//! All configuration comes from the environment and two fixed local paths;
//! there is no config file and no CLI override.

use log::*;
use secrecy::SecretString;
use std::{env, fs, path::Path};

use crate::error::{LcgError, Result};

/// Owner of the repository artifacts are published to.
pub const REPO_OWNER: &str = "direct-dev-ru";
/// Repository artifacts are published to.
pub const REPO_NAME: &str = "go-lcg";
/// Base URL of the hosting REST API.
pub const API_BASE: &str = "https://api.github.com";
/// Environment variable holding the access token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
/// Local file containing the version to publish.
pub const VERSION_FILE: &str = "VERSION.txt";
/// Local directory scanned for artifacts to upload.
pub const ARTIFACTS_DIR: &str = "binaries-for-upload";
/// Prefix combined with the version to form the release tag.
pub const TAG_PREFIX: &str = "lcg.";

/// Connection configuration for the hosting API.
#[derive(Debug, Clone)]
pub struct HostConfig {
    pub owner: String,
    pub repo: String,
    pub api_base: String,
    /// Access token for authentication.
    pub token: SecretString,
}

impl HostConfig {
    /// Build the configuration from the standard token environment variable.
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(TOKEN_ENV)
    }

    /// Build the configuration reading the token from `var`. An unset or
    /// empty variable is fatal before any network call is made.
    pub fn from_env_var(var: &str) -> Result<Self> {
        let token = env::var(var)
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| LcgError::MissingToken(var.to_string()))?;

        info!("{var} is set ({} chars)", token.len());

        Ok(Self {
            owner: REPO_OWNER.to_string(),
            repo: REPO_NAME.to_string(),
            api_base: API_BASE.to_string(),
            token: SecretString::from(token),
        })
    }
}

/// Read the version string from `path`, trimming surrounding whitespace.
pub fn read_version(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|_| {
        LcgError::version(format!("{} not found", path.display()))
    })?;

    let version = content.trim();

    if version.is_empty() {
        return Err(LcgError::version(format!("{} is empty", path.display())));
    }

    Ok(version.to_string())
}

/// Derive the release tag for a version string.
pub fn tag_for_version(version: &str) -> String {
    format!("{TAG_PREFIX}{version}")
}
