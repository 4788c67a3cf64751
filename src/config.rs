// ⚙️ Configuration - TURNBERRY_* environment variables with defaults

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub web_dir: PathBuf,
    pub sales_phone: String,
    pub reduced_motion: bool,
    pub carousel_interval: Duration,
    pub listing_fallback: usize,
    pub listing_max_age: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: "0.0.0.0:3000".to_string(),
            web_dir: PathBuf::from("web"),
            sales_phone: "(702) 555-0140".to_string(),
            reduced_motion: false,
            carousel_interval: crate::carousel::DEFAULT_INTERVAL,
            listing_fallback: 12,
            listing_max_age: Duration::from_secs(300),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            bind_addr: lookup("TURNBERRY_BIND").unwrap_or(defaults.bind_addr),
            web_dir: lookup("TURNBERRY_WEB_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.web_dir),
            sales_phone: lookup("TURNBERRY_SALES_PHONE").unwrap_or(defaults.sales_phone),
            reduced_motion: parse_var(&lookup, "TURNBERRY_REDUCED_MOTION")?
                .unwrap_or(defaults.reduced_motion),
            carousel_interval: parse_var(&lookup, "TURNBERRY_CAROUSEL_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.carousel_interval),
            listing_fallback: parse_var(&lookup, "TURNBERRY_LISTING_FALLBACK")?
                .unwrap_or(defaults.listing_fallback),
            listing_max_age: parse_var(&lookup, "TURNBERRY_LISTING_MAX_AGE_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.listing_max_age),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("Invalid value for {}: {:?}", key, raw))
        })
        .transpose()
}
