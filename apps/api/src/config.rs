use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::theme::ThemeName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Redis,
    Memory,
}

impl StorageBackend {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "redis" => Ok(StorageBackend::Redis),
            "memory" => Ok(StorageBackend::Memory),
            other => bail!("STORAGE_BACKEND must be one of file, redis, memory (got '{other}')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if a value is present but invalid.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub storage_backend: StorageBackend,
    pub data_dir: PathBuf,
    /// Only read when `storage_backend` is `Redis`.
    pub redis_url: Option<String>,
    pub pdf_renderer_bin: String,
    /// Passes `--no-sandbox` to the renderer. Only for containers that run
    /// the browser as root; leave off everywhere else.
    pub pdf_renderer_no_sandbox: bool,
    pub export_timeout: Duration,
    pub default_theme: ThemeName,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let storage_backend = StorageBackend::parse(&env_or("STORAGE_BACKEND", "file"))?;
        let redis_url = redis_url_for(storage_backend, std::env::var("REDIS_URL").ok())?;

        let export_timeout_secs = env_or("EXPORT_TIMEOUT_SECS", "30")
            .parse::<u64>()
            .context("EXPORT_TIMEOUT_SECS must be a whole number of seconds")?;
        let pdf_renderer_no_sandbox = parse_flag(&env_or("PDF_RENDERER_NO_SANDBOX", "false"))
            .context("PDF_RENDERER_NO_SANDBOX must be true or false")?;

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            storage_backend,
            data_dir: PathBuf::from(env_or("DATA_DIR", "./data")),
            redis_url,
            pdf_renderer_bin: env_or("PDF_RENDERER_BIN", "chromium"),
            pdf_renderer_no_sandbox,
            export_timeout: Duration::from_secs(export_timeout_secs),
            default_theme: parse_theme(&env_or("DEFAULT_THEME", "modern"))?,
        })
    }
}

fn redis_url_for(backend: StorageBackend, value: Option<String>) -> Result<Option<String>> {
    if backend == StorageBackend::Redis {
        let url = value.context("Required environment variable 'REDIS_URL' is not set")?;
        Ok(Some(url))
    } else {
        Ok(value)
    }
}

/// Unlike the theme endpoint, a misspelled default is a startup error rather
/// than a silent fallback.
fn parse_theme(value: &str) -> Result<ThemeName> {
    let wanted = value.trim();
    match ThemeName::ALL
        .into_iter()
        .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
    {
        Some(theme) => Ok(theme),
        None => bail!(
            "DEFAULT_THEME must be one of {} (got '{wanted}')",
            ThemeName::all_names().join(", ")
        ),
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("not a boolean: '{other}'"),
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
