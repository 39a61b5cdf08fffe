use anyhow::{bail, Context, Result};

use crate::opportunities::models::RiskTolerance;

/// Application configuration loaded from environment variables.
/// Every field has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// How many ranked opportunities the shortlist endpoint returns.
    pub shortlist_size: usize,
    pub default_risk_tolerance: RiskTolerance,
    pub default_timeframe: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            shortlist_size: 3,
            default_risk_tolerance: RiskTolerance::Medium,
            default_timeframe: "3-6 months".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let shortlist_size = match optional_env("SHORTLIST_SIZE") {
            Some(raw) => raw
                .parse::<usize>()
                .context("SHORTLIST_SIZE must be a positive integer")?,
            None => defaults.shortlist_size,
        };
        if shortlist_size == 0 {
            bail!("SHORTLIST_SIZE must be at least 1");
        }

        let default_risk_tolerance = match optional_env("DEFAULT_RISK_TOLERANCE") {
            Some(raw) => raw
                .parse::<RiskTolerance>()
                .with_context(|| format!("DEFAULT_RISK_TOLERANCE '{raw}' is not valid"))?,
            None => defaults.default_risk_tolerance,
        };

        Ok(Config {
            port: optional_env("PORT")
                .unwrap_or_else(|| defaults.port.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            shortlist_size,
            default_risk_tolerance,
            default_timeframe: optional_env("DEFAULT_TIMEFRAME")
                .unwrap_or(defaults.default_timeframe),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
