// src/core/config_manager.rs
//! Runtime configuration: optional config.yaml, overridden by environment

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.yaml";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_LOG_FILE: &str = "/tmp/astrovaani.log";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    pub service: ServiceConfig,
    pub server: ServerConfig,
    pub log_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Base URL of the reports API, without trailing slash
    pub api_base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
}

/// One environment section of config.yaml. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
struct FileSettings {
    api_base_url: Option<String>,
    port: Option<u16>,
    request_timeout_secs: Option<u64>,
    log_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: FileSettings,
    #[serde(default)]
    production: FileSettings,
}

impl ConfigManager {
    /// Load configuration from `config.yaml` (if present) and the process environment.
    ///
    /// `api_url` (from the command line) takes precedence over both.
    pub fn load(api_url: Option<&str>) -> Result<Self> {
        let env = |key: &str| match (key, api_url) {
            ("ASTRO_API_URL", Some(url)) => Some(url.to_string()),
            _ => std::env::var(key).ok(),
        };
        Self::load_with(env, Path::new(CONFIG_FILE))
    }

    fn load_with<F>(env: F, config_path: &Path) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = env("ENVIRONMENT").unwrap_or_else(|| "local".to_string());

        let file = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            Self::parse_file(&content)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?
        } else {
            ConfigFile::default()
        };

        let settings = match environment.as_str() {
            "production" => file.production,
            _ => file.local,
        };

        Self::from_sources(environment, &env, settings)
    }

    fn parse_file(content: &str) -> Result<ConfigFile> {
        if content.trim().is_empty() {
            return Ok(ConfigFile::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    fn from_sources<F>(environment: String, env: &F, settings: FileSettings) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = env("ASTRO_API_URL")
            .or(settings.api_base_url)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("ASTRO_API_URL environment variable not set"))?;

        let port = match env("ROCKET_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?,
            None => settings.port.unwrap_or(DEFAULT_PORT),
        };

        let timeout_seconds = match env("ASTRO_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| anyhow::anyhow!("ASTRO_TIMEOUT_SECS must be a number of seconds"))?,
            None => settings.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        let log_file = env("ASTRO_LOG_FILE")
            .map(PathBuf::from)
            .or(settings.log_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        Ok(Self {
            environment,
            service: ServiceConfig {
                api_base_url: normalize_base_url(&api_base_url),
                timeout_seconds,
            },
            server: ServerConfig { port },
            log_file,
        })
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
