use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::log;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default="default_port")]
    pub port: u16,

    #[serde(default="default_base_url")]
    pub base_url: String,

    #[serde(default="default_db_path")]
    pub db_path: String,

    #[serde(default="default_cache_ttl_s")]
    pub cache_ttl_s: u64,

    #[serde(default="default_true")]
    pub cache_enabled: bool,
}

fn default_port() -> u16 {
    8080
}

fn default_base_url() -> String {
    "https://playoverwatch.com/en-us/career".to_string()
}

fn default_db_path() -> String {
    "./db".to_string()
}

fn default_cache_ttl_s() -> u64 {
    600
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: default_port(),
            base_url: default_base_url(),
            db_path: default_db_path(),
            cache_ttl_s: default_cache_ttl_s(),
            cache_enabled: default_true(),
        }
    }
}

impl Config {
    pub fn cache_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.cache_ttl_s)
    }
}

/// Reads the config file at `path`, falling back to defaults when it doesn't exist.
pub fn read_config(path: &str) -> anyhow::Result<Config> {
    match fs::read_to_string(path) {
        Ok(data) => serde_json::from_str(&data)
            .with_context(|| format!("Could not parse JSON at {path}!")),
        Err(_) => {
            log::info!("[CONFIG] No config at {path}, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn get_config() -> anyhow::Result<Config> {
    let path = std::env::var("CONFIG_PATH").ok()
        .unwrap_or_else(|| "./deployment/config.json".to_string());
    let mut result = read_config(&path)?;
    if let Ok(port) = std::env::var("PORT") {
        result.port = port.parse().with_context(|| format!("Invalid PORT {port}"))?;
        log::info!("[CONFIG] PORT {}", result.port);
    }
    if let Ok(db_path) = std::env::var("DB_PATH") {
        result.db_path = db_path;
        log::info!("[CONFIG] DB_PATH {}", result.db_path);
    }
    log::info!("[CONFIG] {:?}", result);
    Ok(result)
}
