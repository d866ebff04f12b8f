//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {value}")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    /// Directory holding `cases.yaml` and `pages.yaml`.
    pub content_dir: PathBuf,
    /// Directory served at `/static`.
    pub static_dir: PathBuf,
}

impl SiteConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CONTENT_DIR`: default `<manifest>/content`
    /// - `STATIC_DIR`: default `<manifest>/public/static`
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            content_dir: dir_or_default(std::env::var("CONTENT_DIR").ok(), "content"),
            static_dir: dir_or_default(std::env::var("STATIC_DIR").ok(), "public/static"),
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: value.to_owned() }),
    }
}

fn dir_or_default(raw: Option<String>, default_relative: &str) -> PathBuf {
    raw.filter(|v| !v.trim().is_empty())
        .map_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(default_relative), PathBuf::from)
}
