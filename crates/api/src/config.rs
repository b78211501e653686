use std::fmt::Display;
use std::str::FromStr;

/// Server settings read from the environment at startup.
///
/// | Env Var                 | Default   |
/// |-------------------------|-----------|
/// | `HOST`                  | `0.0.0.0` |
/// | `PORT`                  | `8000`    |
/// | `REQUEST_TIMEOUT_SECS`  | `30`      |
/// | `SHUTDOWN_TIMEOUT_SECS` | `30`      |
///
/// `DATABASE_URL` has no default and is read by the binary directly.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests running longer than this get a 408.
    pub request_timeout_secs: u64,
    /// Upper bound on closing the database pool after the server stops.
    pub shutdown_timeout_secs: u64,
}

impl ServerConfig {
    /// Panics on a value that is present but does not parse, so a typo in
    /// deployment stops the server before it binds.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0".to_string()),
            port: env_or("PORT", 8000),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            shutdown_timeout_secs: env_or("SHUTDOWN_TIMEOUT_SECS", 30),
        }
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => parse_setting(key, &raw),
        Err(_) => default,
    }
}

fn parse_setting<T>(key: &str, raw: &str) -> T
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .unwrap_or_else(|e| panic!("{key} has invalid value '{raw}': {e}"))
}
