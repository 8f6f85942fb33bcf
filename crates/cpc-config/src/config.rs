//! Configuration types and loading.
//!
//! The main entry point is [`CpcConfig`], which represents the contents of
//! `.cpc/config.yaml`. Configuration is loaded with [`load_config`] and
//! saved with [`save_config`].

use std::collections::BTreeMap;
use std::path::Path;

use cpc_core::variable::Variable;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name of the configuration inside `.cpc/`.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Prefix of the environment variables that override file settings.
const ENV_PREFIX: &str = "CPC_";

/// Settings that may be overridden from the environment.
const ENV_KEYS: &[&str] = &["json", "color"];

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration could not be serialized to YAML.
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Merging the file with defaults and environment failed.
    #[error("failed to load config: {0}")]
    LoadError(#[from] Box<figment::Error>),

    /// A configuration value was invalid.
    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue {
        /// The configuration key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Color mode
// ---------------------------------------------------------------------------

/// When to style terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Always emit ANSI colors.
    Always,
    /// Never emit ANSI colors.
    Never,
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Extensions to the verb heuristic used when rendering negated clauses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct NegationConfig {
    /// Word endings treated as verbs, in addition to the built-in ones.
    #[serde(default)]
    pub extra_suffixes: Vec<String>,

    /// Verb forms matched inside a word, in addition to the built-in ones.
    #[serde(default)]
    pub extra_forms: Vec<String>,
}

// ---------------------------------------------------------------------------
// Main config
// ---------------------------------------------------------------------------

/// The contents of `.cpc/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CpcConfig {
    /// Emit JSON instead of text by default.
    #[serde(default)]
    pub json: bool,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default)]
    pub negation: NegationConfig,

    /// Default clause texts keyed by variable name (`P`, `Q1`, ...).
    #[serde(default)]
    pub meanings: BTreeMap<String, String>,
}

impl CpcConfig {
    /// The `meanings` table with validated variable names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a key that is not a
    /// variable name or a blank clause.
    pub fn meaning_table(&self) -> Result<BTreeMap<Variable, String>> {
        let mut table = BTreeMap::new();
        for (key, clause) in &self.meanings {
            let variable = Variable::parse(key.trim()).map_err(|e| ConfigError::InvalidValue {
                key: format!("meanings.{key}"),
                reason: e.to_string(),
            })?;
            let clause = clause.trim();
            if clause.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: format!("meanings.{key}"),
                    reason: "clause text is empty".to_string(),
                });
            }
            table.insert(variable, clause.to_string());
        }
        Ok(table)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load configuration from `config.yaml` inside the given `.cpc/` directory.
///
/// Defaults are layered under the file, and `CPC_JSON` / `CPC_COLOR` from
/// the environment are layered over it. A missing or empty file yields the
/// defaults plus any environment overrides.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
/// or [`ConfigError::LoadError`] if it contains invalid YAML or values of
/// the wrong type.
pub fn load_config(cpc_dir: &Path) -> Result<CpcConfig> {
    let config_path = cpc_dir.join(CONFIG_FILE_NAME);

    let mut figment = Figment::from(Serialized::defaults(CpcConfig::default()));

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        // An empty file is valid and contributes nothing.
        if !content.trim().is_empty() {
            figment = figment.merge(Yaml::string(&content));
        }
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).only(ENV_KEYS));

    figment.extract().map_err(|e| ConfigError::LoadError(Box::new(e)))
}

/// Load configuration, or the defaults when there is no `.cpc/` directory.
pub fn load_config_or_default(cpc_dir: Option<&Path>) -> Result<CpcConfig> {
    match cpc_dir {
        Some(dir) => load_config(dir),
        None => Ok(CpcConfig::default()),
    }
}

/// Save configuration to `config.yaml` inside the given `.cpc/` directory.
///
/// The directory is created if it does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] on I/O failure or
/// [`ConfigError::ParseError`] if serialization fails.
pub fn save_config(cpc_dir: &Path, config: &CpcConfig) -> Result<()> {
    std::fs::create_dir_all(cpc_dir)?;

    let config_path = cpc_dir.join(CONFIG_FILE_NAME);
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(config_path, yaml)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
