use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const BIND_ADDR: &str = "BIND_ADDR";
    /// Upper bound on JSON request bodies, in bytes.
    pub const MAX_BODY_BYTES: &str = "MAX_BODY_BYTES";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8000;
    pub const BIND_ADDR: &str = "0.0.0.0";
    pub const MAX_BODY_BYTES: usize = 1 << 20;
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub bind_addr: String,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: defaults::PORT,
            bind_addr: defaults::BIND_ADDR.to_string(),
            max_body_bytes: defaults::MAX_BODY_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self, String> {
        let port = match lookup(env_vars::PORT) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| format!("{} must be a valid port number ({}): {}", env_vars::PORT, raw, e))?,
            None => defaults::PORT,
        };

        let max_body_bytes = match lookup(env_vars::MAX_BODY_BYTES) {
            Some(raw) => raw.trim().parse().map_err(|e| {
                format!("{} must be a byte count ({}): {}", env_vars::MAX_BODY_BYTES, raw, e)
            })?,
            None => defaults::MAX_BODY_BYTES,
        };

        Ok(Self {
            port,
            bind_addr: lookup(env_vars::BIND_ADDR)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| defaults::BIND_ADDR.to_string()),
            max_body_bytes,
        })
    }
}
