use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cost::Pricing;
use crate::engine::normalize::RatingRange;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub agent_api_key: String,
    pub cv_dir: PathBuf,
    pub rating: RatingRange,
    pub pricing: Pricing,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = RatingRange::default();
        let rating = RatingRange {
            min: parse_env("RATING_MIN", defaults.min)?,
            max: parse_env("RATING_MAX", defaults.max)?,
        };

        let pricing = Pricing {
            input_per_million: parse_env("INPUT_PRICE_PER_MILLION", 2.50)?,
            output_per_million: parse_env("OUTPUT_PRICE_PER_MILLION", 10.00)?,
            currency: std::env::var("PRICE_CURRENCY").unwrap_or_else(|_| "USD".to_string()),
        };

        Ok(Config {
            agent_api_key: require_env("AGENT_API_KEY")?,
            cv_dir: std::env::var("CV_DIR")
                .unwrap_or_else(|_| "./cvs".to_string())
                .into(),
            rating,
            pricing,
            port: parse_env("PORT", 8080u16)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value")),
        Err(_) => Ok(default),
    }
}
