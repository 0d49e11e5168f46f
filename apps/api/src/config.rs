use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::layout::PaperSize;

pub const DEFAULT_MAX_RESUMES: usize = 50;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound for `num_resumes` on a single request.
    pub max_resumes: usize,
    /// Default RNG seed when a request carries none.
    pub resume_seed: Option<u64>,
    pub paper_size: PaperSize,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub gemini_timeout_secs: u64,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_resumes: DEFAULT_MAX_RESUMES,
            resume_seed: None,
            paper_size: PaperSize::Letter,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_timeout_secs: 30,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let max_resumes = parse_env("MAX_RESUMES", defaults.max_resumes)?;
        if max_resumes == 0 {
            bail!("MAX_RESUMES must be at least 1");
        }

        let resume_seed = match std::env::var("RESUME_SEED") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .context("RESUME_SEED must be an unsigned integer")?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_resumes,
            resume_seed,
            paper_size: parse_env("PAGE_SIZE", defaults.paper_size)?,
            gemini_model: std::env::var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or(defaults.gemini_base_url)
                .trim_end_matches('/')
                .to_string(),
            gemini_timeout_secs: parse_env("GEMINI_TIMEOUT_SECS", defaults.gemini_timeout_secs)?,
            max_body_bytes: parse_env("MAX_BODY_BYTES", defaults.max_body_bytes)?,
        })
    }
}

/// Reads `key` and parses it, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}
