use crate::error::{Error, Result};
use crate::models::language::Language;
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub public_rps: u32,
    pub chat_rps: u32,
    pub default_language: Language,
    pub chat_min_delay_ms: u64,
    pub chat_max_delay_ms: u64,
    pub page_idle_minutes: u64,
    pub assets_dir: Option<String>,
    pub log_json: bool,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let config = Self {
            server_address: get_env("SERVER_ADDRESS")?,
            public_rps: get_env_parse("PUBLIC_RPS")?,
            chat_rps: get_env_parse("CHAT_RPS")?,
            default_language: get_env_parse_or("DEFAULT_LANGUAGE", Language::En)?,
            chat_min_delay_ms: get_env_parse_or("CHAT_MIN_DELAY_MS", 1000)?,
            chat_max_delay_ms: get_env_parse_or("CHAT_MAX_DELAY_MS", 3000)?,
            page_idle_minutes: get_env_parse_or("PAGE_IDLE_MINUTES", 30)?,
            assets_dir: env::var("ASSETS_DIR").ok().filter(|v| !v.trim().is_empty()),
            log_json: env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        };
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        if self.chat_min_delay_ms > self.chat_max_delay_ms {
            return Err(Error::Config(format!(
                "CHAT_MIN_DELAY_MS ({}) must not exceed CHAT_MAX_DELAY_MS ({})",
                self.chat_min_delay_ms, self.chat_max_delay_ms
            )));
        }
        Ok(())
    }

    pub fn chat_delay_bounds(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.chat_min_delay_ms),
            Duration::from_millis(self.chat_max_delay_ms),
        )
    }

    pub fn page_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.page_idle_minutes * 60)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: "127.0.0.1:8080".to_string(),
            public_rps: 50,
            chat_rps: 10,
            default_language: Language::En,
            chat_min_delay_ms: 1000,
            chat_max_delay_ms: 3000,
            page_idle_minutes: 30,
            assets_dir: None,
            log_json: false,
        }
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse<T>(name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = get_env(name)?;
    parse_value(name, &raw)
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => parse_value(name, &raw),
        _ => Ok(default),
    }
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
