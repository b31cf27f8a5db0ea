//! Server configuration from the environment.

use crate::domain::symbol::ExchangeDescriptor;
use crate::graphql::RetryPolicy;
use crate::network::{
    DEFAULT_CACHE_TTL_SECS, DEFAULT_COUNTBACK, DEFAULT_EXCHANGE_VALUE, DEFAULT_PAIRS_LIMIT,
};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Env(#[from] envy::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

fn default_port() -> u16 {
    3000
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_pairs_limit() -> u32 {
    DEFAULT_PAIRS_LIMIT
}

fn default_countback() -> u32 {
    DEFAULT_COUNTBACK
}

fn default_cache_ttl_secs() -> u64 {
    DEFAULT_CACHE_TTL_SECS
}

fn default_subgraph_retries() -> u32 {
    0
}

fn default_exchange_name() -> String {
    DEFAULT_EXCHANGE_VALUE.to_string()
}

#[derive(Deserialize)]
struct ConfigFlat {
    graph_client: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_bind")]
    bind: String,
    #[serde(default = "default_pairs_limit")]
    pairs_limit: u32,
    #[serde(default = "default_countback")]
    default_countback: u32,
    #[serde(default = "default_cache_ttl_secs")]
    cache_ttl_secs: u64,
    #[serde(default = "default_subgraph_retries")]
    subgraph_retries: u32,
    #[serde(default = "default_exchange_name")]
    exchange_name: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub graph_client: String,
    pub addr: SocketAddr,
    pub pairs_limit: u32,
    pub default_countback: u32,
    pub cache_ttl: Duration,
    pub retry: RetryPolicy,
    pub exchange: ExchangeDescriptor,
}

/// Load `.env` if present, then read the process environment.
pub fn load() -> Result<Config, ConfigError> {
    dotenvy::dotenv().ok();
    from_flat(envy::from_env::<ConfigFlat>()?)
}

/// Read config from explicit key/value pairs.
pub fn from_iter<I>(vars: I) -> Result<Config, ConfigError>
where
    I: IntoIterator<Item = (String, String)>,
{
    from_flat(envy::from_iter::<_, ConfigFlat>(vars)?)
}

fn from_flat(flat: ConfigFlat) -> Result<Config, ConfigError> {
    if flat.graph_client.trim().is_empty() {
        return Err(ConfigError::Invalid("GRAPH_CLIENT is empty".to_string()));
    }
    if flat.pairs_limit == 0 {
        return Err(ConfigError::Invalid("PAIRS_LIMIT must be positive".to_string()));
    }
    if flat.default_countback == 0 {
        return Err(ConfigError::Invalid(
            "DEFAULT_COUNTBACK must be positive".to_string(),
        ));
    }
    let ip: IpAddr = flat
        .bind
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("BIND is not an IP address: {}", flat.bind)))?;

    Ok(Config {
        graph_client: flat.graph_client,
        addr: SocketAddr::new(ip, flat.port),
        pairs_limit: flat.pairs_limit,
        default_countback: flat.default_countback,
        cache_ttl: Duration::from_secs(flat.cache_ttl_secs),
        retry: RetryPolicy::with_max_retries(flat.subgraph_retries),
        exchange: ExchangeDescriptor {
            value: flat.exchange_name,
            ..ExchangeDescriptor::default()
        },
    })
}
