use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The Cohere credential is never embedded in source — it must be supplied
/// via `COHERE_API_KEY` (or a `.env` file during development).
#[derive(Debug, Clone)]
pub struct Config {
    pub cohere_api_key: String,
    pub port: u16,
    /// Directory the pipeline writes its three output artifacts into.
    pub output_dir: PathBuf,
    /// Optional directory holding `times.ttf` / `timesbd.ttf`. When unset or
    /// the files are missing, the renderer falls back to the builtin faces.
    pub font_dir: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            cohere_api_key: require_env("COHERE_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            output_dir: std::env::var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("output")),
            font_dir: std::env::var("FONT_DIR").ok().map(PathBuf::from),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
