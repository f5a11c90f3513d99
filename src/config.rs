//! Environment-variable overrides for runtime defaults.
//!
//! Hosts embedding the engine can tune grid and gateway defaults without
//! recompiling. Values that are absent or fail to parse fall back to the
//! compiled-in default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

/// Read `key` from the environment and parse it, falling back to `default`.
pub(crate) fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or(default),
        Err(_) => default,
    }
}

/// Read `key` from the environment as a string, falling back to `default`.
pub(crate) fn env_string(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(raw) => raw,
        Err(_) => default.to_owned(),
    }
}
