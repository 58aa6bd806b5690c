//! Adapter configuration loaded from CLI, environment, and files.
//!
//! The adapters need a little context that the payloads themselves do not
//! carry: who the authenticated viewer is, and whether the payloads come from
//! an enterprise host. [`AdapterConfig`] holds that context and can be merged
//! from layered sources with ortho-config.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – no viewer, public host
//! 2. **Configuration file** – `.prshape.toml` in the current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `PRSHAPE_VIEWER_LOGIN`
//! 4. **Command-line arguments** – `--viewer-login` and `--enterprise`
//!
//! # Configuration File
//!
//! ```toml
//! viewer_login = "octocat"
//! enterprise = true
//! ```

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::AdaptError;

/// Context shared by every adapter call.
///
/// # Example
///
/// ```
/// use prshape::AdapterConfig;
///
/// let config = AdapterConfig {
///     viewer_login: Some("Octocat".to_owned()),
///     ..AdapterConfig::default()
/// };
/// assert!(config.is_viewer("octocat"));
/// assert!(!config.is_viewer("hubot"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PRSHAPE",
    discovery(
        dotfile_name = ".prshape.toml",
        config_file_name = "prshape.toml",
        app_name = "prshape"
    )
)]
pub struct AdapterConfig {
    /// Login of the authenticated user the payloads were fetched as.
    ///
    /// REST payloads carry no viewer permissions, so comments written by
    /// this login are treated as editable and deletable.
    ///
    /// Can be provided via:
    /// - CLI: `--viewer-login <LOGIN>`
    /// - Environment: `PRSHAPE_VIEWER_LOGIN`
    /// - Config file: `viewer_login = "..."`
    #[ortho_config()]
    pub viewer_login: Option<String>,

    /// Marks payloads as coming from an enterprise host.
    ///
    /// Avatar URLs on enterprise hosts require authentication, so they are
    /// dropped and presentation code falls back to a placeholder.
    ///
    /// Can be provided via:
    /// - CLI: `--enterprise`
    /// - Config file: `enterprise = true`
    #[ortho_config()]
    pub enterprise: bool,
}

impl AdapterConfig {
    /// Loads configuration from `args`, the environment, and discovered
    /// configuration files, then validates it.
    ///
    /// The first item of `args` is the program name, as with
    /// [`std::env::args_os`].
    ///
    /// # Errors
    ///
    /// Returns [`AdaptError::Configuration`] when a layer cannot be read or
    /// merged, or when the merged values are invalid.
    pub fn load_layered<I, T>(args: I) -> Result<Self, AdaptError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let config = Self::load_from_iter(args).map_err(|error| AdaptError::Configuration {
            message: error.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the merged values.
    ///
    /// # Errors
    ///
    /// Returns [`AdaptError::Configuration`] when the viewer login is blank.
    pub fn validate(&self) -> Result<(), AdaptError> {
        match self.viewer_login.as_deref() {
            Some(login) if login.trim().is_empty() => Err(AdaptError::Configuration {
                message: "viewer login must not be blank (use --viewer-login)".to_owned(),
            }),
            _ => Ok(()),
        }
    }

    /// Returns true when `login` is the configured viewer.
    ///
    /// Logins are compared case-insensitively, as GitHub treats them.
    #[must_use]
    pub fn is_viewer(&self, login: &str) -> bool {
        self.viewer_login
            .as_deref()
            .is_some_and(|viewer| !login.is_empty() && viewer.eq_ignore_ascii_case(login))
    }
}

#[cfg(test)]
mod tests;
