//! Process configuration, read once at startup.
//!
//! Values come from the environment (after `dotenv` has loaded any `.env` file).
//! [`Config::from_lookup`] takes the lookup as a function so configuration can be
//! assembled without touching the real process environment.

use std::env;
use std::fmt;

use thiserror::Error;
#[cfg(feature = "ollama")]
use tracing::warn;
#[cfg(feature = "ollama")]
use url::Url;

use crate::quiz::Weights;
use crate::utils::mistral_client;
#[cfg(feature = "ollama")]
use crate::utils::ollama_client;

#[cfg(feature = "ollama")]
const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing {0}")]
    Missing(&'static str),

    #[error("Unknown model provider '{0}' (expected one of: {providers})", providers = SUPPORTED_PROVIDERS)]
    UnknownProvider(String),

    #[error("Invalid OLLAMA_URL '{url}': {reason}")]
    InvalidOllamaUrl { url: String, reason: String },

    #[error("Invalid QUIZ_DEFAULT_WEIGHTS '{0}': expected four comma-separated integers")]
    InvalidWeights(String),
}

#[cfg(feature = "ollama")]
const SUPPORTED_PROVIDERS: &str = "mistral, ollama";
#[cfg(not(feature = "ollama"))]
const SUPPORTED_PROVIDERS: &str = "mistral";

/// Connection details for the model provider answering `/generate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelConfig {
    Mistral {
        base_url: String,
        api_key: String,
        model: String,
    },
    #[cfg(feature = "ollama")]
    Ollama {
        /// Scheme and host, e.g. `http://localhost`.
        host: String,
        port: u16,
        model: String,
    },
}

impl fmt::Display for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mistral {
                base_url, model, ..
            } => write!(f, "mistral '{model}' at {base_url}"),
            #[cfg(feature = "ollama")]
            Self::Ollama { host, port, model } => write!(f, "ollama '{model}' at {host}:{port}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub model: ModelConfig,
    pub default_weights: Weights,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let discord_token = get("DISCORD_TOKEN").ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;

        let provider = get("QUIZ_MODEL_PROVIDER").unwrap_or_else(|| "mistral".to_string());
        let model = match provider.trim().to_ascii_lowercase().as_str() {
            "mistral" => ModelConfig::Mistral {
                base_url: get("MISTRAL_BASE_URL")
                    .unwrap_or_else(|| mistral_client::DEFAULT_BASE_URL.to_string()),
                api_key: get("MISTRAL_API_KEY").ok_or(ConfigError::Missing("MISTRAL_API_KEY"))?,
                model: get("MISTRAL_MODEL")
                    .unwrap_or_else(|| mistral_client::DEFAULT_MODEL.to_string()),
            },
            #[cfg(feature = "ollama")]
            "ollama" => {
                let raw_url = get("OLLAMA_URL").unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string());
                let (host, port) = parse_ollama_url(&raw_url)?;
                let model = get("DEFAULT_OLLAMA_MODEL").unwrap_or_else(|| {
                    warn!(
                        "DEFAULT_OLLAMA_MODEL environment variable not set. Using '{}'.",
                        ollama_client::DEFAULT_MODEL
                    );
                    ollama_client::DEFAULT_MODEL.to_string()
                });
                ModelConfig::Ollama { host, port, model }
            }
            _ => return Err(ConfigError::UnknownProvider(provider)),
        };

        let default_weights = match get("QUIZ_DEFAULT_WEIGHTS") {
            Some(raw) => raw
                .parse::<Weights>()
                .map_err(|_| ConfigError::InvalidWeights(raw))?,
            None => Weights::default(),
        };

        Ok(Self {
            discord_token,
            model,
            default_weights,
        })
    }
}

/// Splits an Ollama server URL into the scheme-qualified host and the port.
#[cfg(feature = "ollama")]
fn parse_ollama_url(raw: &str) -> Result<(String, u16), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidOllamaUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    let host = url
        .host_str()
        .ok_or_else(|| invalid("no host".to_string()))?;
    let port = url
        .port_or_known_default()
        .ok_or_else(|| invalid("no port".to_string()))?;

    Ok((format!("{}://{}", url.scheme(), host), port))
}
