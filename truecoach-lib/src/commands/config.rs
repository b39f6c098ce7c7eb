use crate::Result;
use crate::api::{DEFAULT_ORIGIN, DEFAULT_REQUEST_TIMEOUT, DEFAULT_ROLE};
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use directories::BaseDirs;
use ohno::{EnrichableExt, IntoAppError, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file searched for when no path is given
pub const CONFIG_FILE_NAME: &str = "truecoach.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the API
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Time allowed for a single request
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// Value of the `Role` header
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

const fn default_request_timeout() -> Duration {
    DEFAULT_REQUEST_TIMEOUT
}

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

impl Config {
    /// Load configuration from an explicit path, or from the first default location that has a file
    ///
    /// Falls back to the defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read, parsed, or validated
    pub fn load(config_path: Option<&Utf8Path>) -> Result<Self> {
        if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
            return Self::parse(path, &text);
        }

        Self::load_first(&default_locations())
    }

    /// Load the first of `candidates` that exists
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read, parsed, or validated
    pub fn load_first(candidates: &[Utf8PathBuf]) -> Result<Self> {
        for path in candidates {
            match fs::read_to_string(path) {
                Ok(text) => return Self::parse(path, &text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e).into_app_err_with(|| format!("reading configuration file '{path}'")),
            }
        }

        Ok(Self::default())
    }

    fn parse(path: &Utf8Path, text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).into_app_err_with(|| format!("parsing configuration file '{path}'"))?;
        config
            .validate()
            .map_err(|e| e.enrich_with(|| format!("validating configuration file '{path}'")))?;
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the origin is not an http(s) URL, the timeout is zero, or the role is empty
    pub fn validate(&self) -> Result<()> {
        validate_origin(&self.origin)?;

        if self.request_timeout.is_zero() {
            bail!("request_timeout must be greater than zero");
        }

        if self.role.trim().is_empty() {
            bail!("role must not be empty");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}

/// Check that `origin` is an absolute http or https URL
pub fn validate_origin(origin: &str) -> Result<()> {
    let url = Url::parse(origin).into_app_err_with(|| format!("invalid origin '{origin}'"))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!("origin '{origin}' must use http or https");
    }

    Ok(())
}

fn default_locations() -> Vec<Utf8PathBuf> {
    let mut locations = vec![Utf8PathBuf::from(CONFIG_FILE_NAME)];

    if let Some(dirs) = BaseDirs::new()
        && let Ok(dir) = Utf8PathBuf::from_path_buf(dirs.config_dir().join("truecoach"))
    {
        locations.push(dir.join(CONFIG_FILE_NAME));
    }

    locations
}
