//! Sampling configuration.
//!
//! Loads [`FacadeConfig`] from TOML files with environment variable
//! override support. The configuration decides two policies:
//!
//! - how [`percentage`](crate::facade::percentage) treats out-of-range input
//! - how many rejected draws a rejection-sampling loop may make before
//!   surfacing [`RandomError::SamplingTimeout`](crate::RandomError::SamplingTimeout)
//!
//! # Example
//!
//! ```rust
//! use random_core::config::{FacadeConfig, PercentageMode, RejectionLimit};
//!
//! let config = FacadeConfig::from_toml_str(
//!     r#"
//!     percentage_mode = "literal"
//!     max_rejections = 500
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.percentage_mode, PercentageMode::Literal);
//! assert_eq!(config.rejection_limit(), RejectionLimit::Bounded(500));
//! ```

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

/// Default number of rejected draws before a rejection loop gives up.
pub const DEFAULT_MAX_REJECTIONS: u32 = 100_000;

/// Environment variable overriding [`FacadeConfig::percentage_mode`].
pub const ENV_PERCENTAGE_MODE: &str = "RANDOM_PERCENTAGE_MODE";

/// Environment variable overriding [`FacadeConfig::max_rejections`].
pub const ENV_MAX_REJECTIONS: &str = "RANDOM_MAX_REJECTIONS";

/// Environment variable overriding [`FacadeConfig::allow_unbounded_rejection`].
pub const ENV_ALLOW_UNBOUNDED_REJECTION: &str = "RANDOM_ALLOW_UNBOUNDED_REJECTION";

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    Io(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Validation(String),

    #[error("Invalid percentage mode: {0}. Must be one of: clamped, literal")]
    InvalidPercentageMode(String),

    #[error("Process-wide configuration has already been installed")]
    AlreadyConfigured,
}

/// How a percentage roll treats its threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PercentageMode {
    /// Threshold clamped to `[0, 100]`, compared against a uniform real in
    /// `[0, 100)`. The roll succeeds with exactly the given probability.
    #[default]
    Clamped,

    /// Threshold used as given, compared against a uniform integer in
    /// `[0, 100]` inclusive. `100` succeeds with probability 100/101.
    Literal,
}

impl FromStr for PercentageMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clamped" | "clamp" => Ok(PercentageMode::Clamped),
            "literal" => Ok(PercentageMode::Literal),
            _ => Err(ConfigError::InvalidPercentageMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for PercentageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PercentageMode::Clamped => write!(f, "clamped"),
            PercentageMode::Literal => write!(f, "literal"),
        }
    }
}

/// Budget for rejection-sampling loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionLimit {
    /// Give up after this many rejected draws.
    Bounded(u32),

    /// Retry until a draw is accepted.
    ///
    /// The loop stalls forever when the target interval carries no
    /// probability mass. Callers opting in choose `mean`, `std_dev` and bounds
    /// so that the interval is reachable.
    Unbounded,
}

/// Sampling configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FacadeConfig {
    /// Percentage roll policy.
    pub percentage_mode: PercentageMode,

    /// Rejected draws allowed per rejection loop.
    pub max_rejections: u32,

    /// Opt-in to unbounded rejection loops; overrides `max_rejections`.
    pub allow_unbounded_rejection: bool,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            percentage_mode: PercentageMode::default(),
            max_rejections: DEFAULT_MAX_REJECTIONS,
            allow_unbounded_rejection: false,
        }
    }
}

impl FacadeConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?config, "loaded sampling configuration");
        Ok(config)
    }

    /// Parse and validate configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides, then re-validate
    ///
    /// Unparseable values are logged and ignored. Parseable values that leave
    /// the configuration invalid, such as `RANDOM_MAX_REJECTIONS=0` without
    /// the unbounded opt-in, are an error.
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup(ENV_PERCENTAGE_MODE) {
            match mode.parse() {
                Ok(mode) => self.percentage_mode = mode,
                Err(err) => warn!(%err, "ignoring {}", ENV_PERCENTAGE_MODE),
            }
        }

        if let Some(max_rejections) = lookup(ENV_MAX_REJECTIONS) {
            match max_rejections.trim().parse() {
                Ok(max_rejections) => self.max_rejections = max_rejections,
                Err(err) => warn!(%err, value = %max_rejections, "ignoring {}", ENV_MAX_REJECTIONS),
            }
        }

        if let Some(unbounded) = lookup(ENV_ALLOW_UNBOUNDED_REJECTION) {
            match unbounded.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => self.allow_unbounded_rejection = true,
                "0" | "false" | "no" => self.allow_unbounded_rejection = false,
                other => warn!(value = %other, "ignoring {}", ENV_ALLOW_UNBOUNDED_REJECTION),
            }
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.allow_unbounded_rejection && self.max_rejections == 0 {
            return Err(ConfigError::Validation(
                "max_rejections must be greater than 0 unless allow_unbounded_rejection is set"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the effective rejection budget.
    #[inline]
    pub fn rejection_limit(&self) -> RejectionLimit {
        if self.allow_unbounded_rejection {
            RejectionLimit::Unbounded
        } else {
            RejectionLimit::Bounded(self.max_rejections)
        }
    }
}
