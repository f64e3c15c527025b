//! Application configuration loaded from environment variables.
//!
//! Read once at startup. A `.env` file is honoured for local development.

use axum::http::HeaderValue;
use chrono::FixedOffset;
use std::env;

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Largest accepted offset magnitude, just under a day.
const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60 - 1;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Browser origins allowed to call the API with credentials
    pub cors_origins: Vec<HeaderValue>,
    /// Server port
    pub port: u16,
    /// JWT signing key for caller tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
    /// UTC offset of the club's local time, used when turning activity
    /// dates into instants for the lead-time rule
    pub utc_offset_minutes: i32,
}

impl Config {
    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            cors_origins: vec![HeaderValue::from_static(DEFAULT_CORS_ORIGIN)],
            port: 8080,
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
            utc_offset_minutes: 0,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let utc_offset_minutes = match env::var("ACTIVITY_UTC_OFFSET_MINUTES") {
            Ok(raw) => parse_utc_offset(&raw)?,
            Err(_) => 0,
        };

        let cors_origins = parse_cors_origins(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),
        )?;

        Ok(Self {
            cors_origins,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            jwt_signing_key: env::var("JWT_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?
                .into_bytes(),
            utc_offset_minutes,
        })
    }

    /// The configured local timezone as a fixed offset.
    pub fn utc_offset(&self) -> Result<FixedOffset, ConfigError> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or_else(|| {
            ConfigError::Invalid(
                "ACTIVITY_UTC_OFFSET_MINUTES",
                self.utc_offset_minutes.to_string(),
            )
        })
    }
}

/// Comma-separated origins, e.g. `https://club.example,http://localhost:5173`.
/// A trailing slash is dropped since browsers never send one.
fn parse_cors_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| ConfigError::Invalid("CORS_ALLOWED_ORIGINS", origin.to_string()))
        })
        .collect()
}

fn parse_utc_offset(raw: &str) -> Result<i32, ConfigError> {
    let invalid = || ConfigError::Invalid("ACTIVITY_UTC_OFFSET_MINUTES", raw.to_string());
    let minutes: i32 = raw.trim().parse().map_err(|_| invalid())?;
    if minutes.abs() > MAX_UTC_OFFSET_MINUTES {
        return Err(invalid());
    }
    Ok(minutes)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
