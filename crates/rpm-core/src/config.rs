//! Provider configuration.
//!
//! Values are layered: built-in defaults, then a JSON config file, then
//! environment variables, then explicit overrides from the caller (CLI
//! flags). The config file is either given explicitly or looked up as
//! `$XDG_CONFIG_HOME/rpm/config.json`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{FsResultExt, Result, RpmError};

/// Model used when nothing else is configured.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Base URL of the Generative Language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Upper bound on a single provider round trip.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// How the two document stages are sent to the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// Stage B is issued only after stage A succeeded
    #[default]
    Sequential,
    /// Both stages are issued at once; results are ordered by stage
    Parallel,
}

impl FromStr for DispatchMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Ok(DispatchMode::Sequential),
            "parallel" => Ok(DispatchMode::Parallel),
            _ => Err(format!("Invalid dispatch mode: {s}")),
        }
    }
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchMode::Sequential => write!(f, "sequential"),
            DispatchMode::Parallel => write!(f, "parallel"),
        }
    }
}

/// Fully resolved provider settings.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub dispatch: DispatchMode,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            dispatch: DispatchMode::Sequential,
        }
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("dispatch", &self.dispatch)
            .finish()
    }
}

/// On-disk shape of the config file; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    dispatch: Option<DispatchMode>,
}

/// Builder resolving a [`ProviderConfig`] from its layers.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    model: Option<String>,
    dispatch: Option<DispatchMode>,
}

impl ConfigBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit config file, which must exist.
    ///
    /// If not specified, `$XDG_CONFIG_HOME/rpm/config.json` is used when
    /// present.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the model identifier.
    pub fn with_model(mut self, model: Option<String>) -> Self {
        if model.is_some() {
            self.model = model;
        }
        self
    }

    /// Overrides the dispatch mode.
    pub fn with_dispatch(mut self, dispatch: Option<DispatchMode>) -> Self {
        if dispatch.is_some() {
            self.dispatch = dispatch;
        }
        self
    }

    /// Resolves configuration against the process environment.
    pub fn build(self) -> Result<ProviderConfig> {
        self.build_with_env(|key| std::env::var(key).ok())
    }

    /// Resolves configuration with a custom environment lookup.
    ///
    /// # Errors
    ///
    /// Returns `RpmError::FileSystem` if an explicit config file cannot be
    /// read and `RpmError::Configuration` for malformed values.
    pub fn build_with_env<F>(self, env: F) -> Result<ProviderConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ProviderConfig::default();

        let file_path = match self.config_file {
            Some(path) => Some(path),
            None => Self::default_config_path(),
        };
        if let Some(path) = file_path {
            debug!("Loading config file {}", path.display());
            let file = Self::read_config_file(&path)?;
            apply_file(&mut config, file);
        }

        apply_env(&mut config, env)?;

        if let Some(model) = self.model {
            config.model = model;
        }
        if let Some(dispatch) = self.dispatch {
            config.dispatch = dispatch;
        }

        if config.timeout_secs == 0 {
            return Err(RpmError::configuration("timeout_secs must be positive"));
        }
        debug!("Resolved {config:?}");
        Ok(config)
    }

    fn read_config_file(path: &Path) -> Result<ConfigFile> {
        let raw = std::fs::read_to_string(path).fs_context(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            RpmError::configuration(format!("invalid config file {}: {e}", path.display()))
        })
    }

    /// Returns the config file location following the XDG Base Directory
    /// specification, if such a file exists.
    fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("rpm").find_config_file("config.json")
    }
}

fn apply_file(config: &mut ProviderConfig, file: ConfigFile) {
    if file.api_key.is_some() {
        config.api_key = file.api_key;
    }
    if let Some(model) = file.model {
        config.model = model;
    }
    if let Some(base_url) = file.base_url {
        config.base_url = base_url;
    }
    if let Some(timeout_secs) = file.timeout_secs {
        config.timeout_secs = timeout_secs;
    }
    if let Some(dispatch) = file.dispatch {
        config.dispatch = dispatch;
    }
}

fn apply_env<F>(config: &mut ProviderConfig, env: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| env(key).filter(|value| !value.trim().is_empty());

    if let Some(key) = var("GEMINI_API_KEY").or_else(|| var("API_KEY")) {
        config.api_key = Some(key);
    }
    if let Some(model) = var("RPM_MODEL") {
        config.model = model;
    }
    if let Some(base_url) = var("RPM_API_BASE_URL") {
        config.base_url = base_url;
    }
    if let Some(timeout) = var("RPM_TIMEOUT_SECS") {
        config.timeout_secs = timeout.trim().parse().map_err(|_| {
            RpmError::configuration(format!("RPM_TIMEOUT_SECS is not a number: {timeout}"))
        })?;
    }
    if let Some(dispatch) = var("RPM_DISPATCH") {
        config.dispatch = dispatch.parse().map_err(RpmError::configuration)?;
    }
    Ok(())
}
