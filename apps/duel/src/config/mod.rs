//! Configuration loaded from environment variables.

pub mod models;

use std::env;
use std::time::Duration;

pub use models::{ModelCatalog, ModelChoice, LLM_MODELS, VLM_MODELS};

use crate::error::AppError;

const DEFAULT_ENDPOINT: &str = "http://localhost:8000/v1/chat/completions";
const DEFAULT_AGENT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_RECOGNIZER_TIMEOUT_SECS: u64 = 60;

/// A chat-completions endpoint and the model deployed behind it.
#[derive(Debug, Clone)]
pub struct ModelEndpoint {
    pub url: String,
    pub api_key: Option<String>,
    pub model: ModelChoice,
}

/// Centralized configuration for one process.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: ModelEndpoint,
    pub vlm: ModelEndpoint,
    pub agent_timeout: Duration,
    pub recognizer_timeout: Duration,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: ModelEndpoint {
                url: DEFAULT_ENDPOINT.to_string(),
                api_key: None,
                model: LLM_MODELS.default_choice(),
            },
            vlm: ModelEndpoint {
                url: DEFAULT_ENDPOINT.to_string(),
                api_key: None,
                model: VLM_MODELS.default_choice(),
            },
            agent_timeout: Duration::from_secs(DEFAULT_AGENT_TIMEOUT_SECS),
            recognizer_timeout: Duration::from_secs(DEFAULT_RECOGNIZER_TIMEOUT_SECS),
            seed: None,
        }
    }
}

impl Config {
    /// Load configuration from `DUEL_*` environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        let llm_url = env::var("DUEL_LLM_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let vlm_url = env::var("DUEL_VLM_ENDPOINT").unwrap_or_else(|_| llm_url.clone());
        let api_key = env::var("DUEL_API_KEY").ok().filter(|k| !k.is_empty());

        let llm_model = match env::var("DUEL_LLM_MODEL") {
            Ok(id) => LLM_MODELS.select(&id),
            Err(_) => LLM_MODELS.default_choice(),
        };
        let vlm_model = match env::var("DUEL_VLM_MODEL") {
            Ok(id) => VLM_MODELS.select(&id),
            Err(_) => VLM_MODELS.default_choice(),
        };

        let agent_timeout = Duration::from_secs(parse_u64_var(
            "DUEL_AGENT_TIMEOUT_SECS",
            DEFAULT_AGENT_TIMEOUT_SECS,
        )?);
        let recognizer_timeout = Duration::from_secs(parse_u64_var(
            "DUEL_RECOGNIZER_TIMEOUT_SECS",
            DEFAULT_RECOGNIZER_TIMEOUT_SECS,
        )?);
        let seed = match env::var("DUEL_SEED") {
            Ok(raw) => Some(parse_u64("DUEL_SEED", &raw)?),
            Err(_) => None,
        };

        Ok(Config {
            llm: ModelEndpoint {
                url: llm_url,
                api_key: api_key.clone(),
                model: llm_model,
            },
            vlm: ModelEndpoint {
                url: vlm_url,
                api_key,
                model: vlm_model,
            },
            agent_timeout,
            recognizer_timeout,
            seed,
        })
    }
}

fn parse_u64_var(name: &str, default: u64) -> Result<u64, AppError> {
    match env::var(name) {
        Ok(raw) => parse_u64(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_u64(name: &str, raw: &str) -> Result<u64, AppError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| AppError::config(format!("{name} must be a non-negative integer, got '{raw}'")))
}
