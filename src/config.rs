//! Process configuration read from environment variables.
//!
//! Lookups go through [`Env`] so tests can supply values without touching
//! the real process environment.

use std::collections::HashMap;

/// Port used when `PORT` is unset or not a usable number.
pub const DEFAULT_PORT: u16 = 5000;

/// Interface bound when `HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// How many times the bind sequence moves on to the next port.
pub const MAX_BIND_RETRIES: u32 = 5;

/// Source of `PORT` / `HOST` values: the process environment, or a fixed
/// map for tests.
#[derive(Clone, Debug, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Only the given pairs are visible; the process environment is ignored.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        let map = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self {
            overrides: Some(map),
        }
    }

    /// `None` when unset or not valid unicode.
    pub fn var(&self, name: &str) -> Option<String> {
        match &self.overrides {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub max_retries: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_retries: MAX_BIND_RETRIES,
        }
    }
}

impl Config {
    pub fn from_env(env: &Env) -> Self {
        let host = env
            .var("HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        Self {
            host,
            port: parse_port(env.var("PORT").as_deref()),
            max_retries: MAX_BIND_RETRIES,
        }
    }
}

/// Zero counts as unset.
fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|port| *port != 0)
        .unwrap_or(DEFAULT_PORT)
}
