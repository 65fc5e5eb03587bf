use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every external credential is optional; a missing key disables the
/// corresponding feature instead of failing startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the external-model analysis path.
    pub google_api_key: Option<String>,
    /// Credential for the JSearch job-listing proxy.
    pub rapidapi_key: Option<String>,
    /// Credential for a hosted resume-parser backend. Accepted for parity
    /// with deployments that set it; extraction currently runs locally.
    #[allow(dead_code)]
    pub parser_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: optional_env("GOOGLE_API_KEY"),
            rapidapi_key: optional_env("RAPIDAPI_KEY"),
            parser_api_key: optional_env("PARSER_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Missing and empty values both count as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
