//! Configuration file schema for wordycheck.
//!
//! A configuration tunes the `WordyMethod` rule for a codebase. Every field
//! is optional; an absent file behaves like the defaults.

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::detect::{Severity, MAX_WORDS};

/// Configuration file names searched for, in order.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["wordycheck.yaml", ".wordycheck.yaml"];

/// Configuration written by `wordycheck init`.
pub const DEFAULT_TEMPLATE: &str = include_str!("templates/default.yaml");

/// Errors raised while loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid excluded path pattern {pattern:?}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: String,
    /// Maximum number of words allowed in a method body (default: 10)
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    /// Severity reported for wordy methods (default: warning)
    #[serde(default)]
    pub severity: Severity,
    /// Glob patterns for paths to exclude (e.g., "**/obj/**", "**/Migrations/**")
    #[serde(default)]
    pub excluded_paths: Vec<String>,
    /// Whether generated files are checked too (default: false)
    #[serde(default)]
    pub analyze_generated_code: bool,
}

fn default_version() -> String {
    "1".to_string()
}

fn default_max_words() -> usize {
    MAX_WORDS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            max_words: default_max_words(),
            severity: Severity::default(),
            excluded_paths: Vec::new(),
            analyze_generated_code: false,
        }
    }
}

impl Config {
    /// Parse a configuration from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().display().to_string();
        let content = fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Io {
            path: path_str.clone(),
            source,
        })?;
        Self::parse_str(&content).map_err(|source| ConfigError::Yaml {
            path: path_str,
            source,
        })
    }

    /// Parse a configuration from YAML text. An empty document yields the defaults.
    pub fn parse_str(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Validate field values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_words == 0 {
            return Err(ConfigError::Invalid(
                "max_words must be at least 1".to_string(),
            ));
        }
        self.exclusion_matcher()?;
        Ok(())
    }

    /// Compile excluded_paths into a matcher.
    pub fn exclusion_matcher(&self) -> Result<Exclusions, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.excluded_paths {
            let glob = Glob::new(pattern).map_err(|source| ConfigError::Glob {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|source| ConfigError::Glob {
            pattern: self.excluded_paths.join(", "),
            source,
        })?;
        Ok(Exclusions { set })
    }
}

/// Compiled `excluded_paths` patterns.
#[derive(Debug, Clone)]
pub struct Exclusions {
    set: GlobSet,
}

impl Exclusions {
    /// Check `path` against the patterns, both as given and relative to
    /// the scan `root`, so `src/Legacy/**` and `**/Legacy/**` both apply.
    pub fn is_excluded(&self, root: &Path, path: &Path) -> bool {
        if self.set.is_empty() {
            return false;
        }
        self.set.is_match(path)
            || path
                .strip_prefix(root)
                .map(|rel| self.set.is_match(rel))
                .unwrap_or(false)
    }
}

/// Find a configuration file in `dir`.
pub fn discover(dir: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}
