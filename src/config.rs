use std::env;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_WORKERS: usize = 5;
pub const DEFAULT_THREADS: usize = 5;
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ENVIRONMENT: &str = "development";

// Each setting is read from the first variable that is set. The second names
// are the ones older Puma/Rails deployments of this app export.
const WORKERS_KEYS: &[&str] = &["WEB_WORKERS", "PUMA_WORKERS"];
const THREADS_KEYS: &[&str] = &["WEB_THREADS", "PUMA_THREADS"];
const PORT_KEYS: &[&str] = &["PORT"];
const ENVIRONMENT_KEYS: &[&str] = &["APP_ENV", "RAILS_ENV"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub primary_url: String,
    /// Read replica. Reads are routed here whenever it is set.
    pub follower_url: Option<String>,
    /// Connections per worker pool.
    pub pool_size: u32,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub workers: usize,
    pub threads: usize,
    pub port: u16,
    pub environment: String,
}

impl EnvConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests can feed a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let primary_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let server = ServerConfig {
            workers: parse_or(&lookup, WORKERS_KEYS, DEFAULT_WORKERS)?,
            threads: parse_or(&lookup, THREADS_KEYS, DEFAULT_THREADS)?,
            port: parse_or(&lookup, PORT_KEYS, DEFAULT_PORT)?,
            environment: first_set(&lookup, ENVIRONMENT_KEYS)
                .map(|(_, value)| value)
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        };

        Ok(EnvConfig {
            database: DatabaseConfig {
                primary_url,
                follower_url: follower_url(&lookup),
                pool_size: server.threads as u32,
            },
            server,
        })
    }
}

/// The follower is named by a colour; its URL lives in
/// `HEROKU_POSTGRESQL_<COLOR>_URL`. A blank URL counts as no follower.
fn follower_url<F>(lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let color = lookup("DATABASE_FOLLOWER_COLOR")?.trim().to_uppercase();
    if color.is_empty() {
        return None;
    }

    lookup(&format!("HEROKU_POSTGRESQL_{}_URL", color)).filter(|url| !url.trim().is_empty())
}

fn first_set<F>(lookup: &F, keys: &[&'static str]) -> Option<(&'static str, String)>
where
    F: Fn(&str) -> Option<String>,
{
    keys.iter().find_map(|&key| lookup(key).map(|value| (key, value)))
}

fn parse_or<F, T>(lookup: &F, keys: &[&'static str], default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match first_set(lookup, keys) {
        None => Ok(default),
        Some((key, value)) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
