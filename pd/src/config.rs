//! PromptDemo configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::langfuse::LangfuseError;

/// Main PromptDemo configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// Langfuse connection settings
    pub langfuse: LangfuseConfig,

    /// Setup command settings
    pub setup: SetupConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .promptdemo.yml
        let local_config = PathBuf::from(".promptdemo.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/promptdemo/promptdemo.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("promptdemo").join("promptdemo.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read only the log level, before logging is initialized
    ///
    /// Errors are swallowed; the full load reports them later.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let candidates: Vec<PathBuf> = match config_path {
            Some(path) => vec![path.clone()],
            None => [
                Some(PathBuf::from(".promptdemo.yml")),
                dirs::config_dir().map(|d| d.join("promptdemo").join("promptdemo.yml")),
            ]
            .into_iter()
            .flatten()
            .collect(),
        };

        candidates
            .iter()
            .find(|p| p.exists())
            .and_then(|p| fs::read_to_string(p).ok())
            .and_then(|content| serde_yaml::from_str::<Config>(&content).ok())
            .and_then(|config| config.log_level)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Langfuse connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LangfuseConfig {
    /// Base URL used when the host environment variable is unset
    pub host: String,

    /// Environment variable that overrides `host`
    #[serde(rename = "host-env")]
    pub host_env: String,

    /// Environment variable containing the public key
    #[serde(rename = "public-key-env")]
    pub public_key_env: String,

    /// Environment variable containing the secret key
    #[serde(rename = "secret-key-env")]
    pub secret_key_env: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for LangfuseConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost:3000".to_string(),
            host_env: "LANGFUSE_HOST".to_string(),
            public_key_env: "LANGFUSE_PUBLIC_KEY".to_string(),
            secret_key_env: "LANGFUSE_SECRET_KEY".to_string(),
            timeout_ms: 30_000,
        }
    }
}

impl LangfuseConfig {
    /// Resolve host and credentials from the process environment
    pub fn resolve(&self) -> Result<ResolvedLangfuseConfig, LangfuseError> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve using an arbitrary variable lookup
    ///
    /// Empty values count as unset.
    pub fn resolve_with<F>(&self, lookup: F) -> Result<ResolvedLangfuseConfig, LangfuseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!(public_key_env = %self.public_key_env, secret_key_env = %self.secret_key_env, "resolve_with: called");
        let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let (Some(public_key), Some(secret_key)) = (non_empty(&self.public_key_env), non_empty(&self.secret_key_env))
        else {
            debug!("resolve_with: credentials missing");
            return Err(LangfuseError::MissingCredentials {
                public_key_env: self.public_key_env.clone(),
                secret_key_env: self.secret_key_env.clone(),
            });
        };

        Ok(ResolvedLangfuseConfig {
            host: self.host_with(&lookup),
            public_key,
            secret_key,
            timeout_ms: self.timeout_ms,
        })
    }

    /// Effective base URL, without a trailing slash
    pub fn host_with<F>(&self, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(&self.host_env)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| self.host.clone())
            .trim_end_matches('/')
            .to_string()
    }
}

/// Langfuse settings with credentials filled in
#[derive(Clone)]
pub struct ResolvedLangfuseConfig {
    pub host: String,
    pub public_key: String,
    pub secret_key: String,
    pub timeout_ms: u64,
}

impl std::fmt::Debug for ResolvedLangfuseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedLangfuseConfig")
            .field("host", &self.host)
            .field("public_key", &mask_key(&self.public_key))
            .field("secret_key", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// Show the first 12 characters of a key followed by "..."
pub fn mask_key(key: &str) -> String {
    let prefix: String = key.chars().take(12).collect();
    format!("{}...", prefix)
}

/// Setup command settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Pause between consecutive create requests
    #[serde(rename = "delay-ms")]
    pub delay_ms: u64,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self { delay_ms: 500 }
    }
}
