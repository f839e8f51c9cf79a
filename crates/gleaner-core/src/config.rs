//! Configuration for ranking and query expansion

use crate::io::atomic_write;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable consulted when no credential is configured
pub const CREDENTIAL_ENV_VAR: &str = "ANTHROPIC_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Relevance scoring algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bm25,
    TfIdf,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bm25 => write!(f, "bm25"),
            Algorithm::TfIdf => write!(f, "tfidf"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bm25" => Ok(Algorithm::Bm25),
            "tfidf" | "tf-idf" => Ok(Algorithm::TfIdf),
            other => Err(format!("unknown algorithm '{}' (expected bm25 or tfidf)", other)),
        }
    }
}

/// BM25 tuning parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bm25Params {
    /// Term-frequency saturation
    pub k1: f64,
    /// Length normalization strength (0 = none, 1 = full)
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: 1.2, b: 0.75 }
    }
}

/// Query expansion settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExpansionConfig {
    pub max_synonyms_per_term: usize,
    pub max_related_concepts: usize,
    /// API key for the language model; remote expansion is skipped without one
    pub language_model_credential: Option<String>,
    pub temperature: f64,
    pub model: String,
    /// Client-side timeout for the single remote attempt
    pub timeout_secs: u64,
}

impl ExpansionConfig {
    /// Configured credential, else the environment, ignoring blank values
    pub fn credential(&self) -> Option<String> {
        let non_blank = |k: &str| {
            let k = k.trim();
            (!k.is_empty()).then(|| k.to_string())
        };
        self.language_model_credential
            .as_deref()
            .and_then(non_blank)
            .or_else(|| std::env::var(CREDENTIAL_ENV_VAR).ok().as_deref().and_then(non_blank))
    }
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            max_synonyms_per_term: 3,
            max_related_concepts: 5,
            language_model_credential: None,
            temperature: 0.3,
            model: "claude-3-haiku-20240307".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub algorithm: Algorithm,
    pub bm25_params: Bm25Params,
    /// Results returned after sorting
    pub max_results: usize,
    pub query_expansion: ExpansionConfig,
}

impl Config {
    pub fn new() -> Self {
        Self {
            algorithm: Algorithm::Bm25,
            bm25_params: Bm25Params::default(),
            max_results: 10,
            query_expansion: ExpansionConfig::default(),
        }
    }

    /// Load a JSON config file; absent fields take their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`Config::load`], but a missing file yields the defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }
        Self::load(path)
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        atomic_write(path, json.as_bytes())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
