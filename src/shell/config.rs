use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use thiserror::Error;

pub const HOST_VAR: &str = "APP_HOST";
pub const PORT_VAR: &str = "APP_PORT";
pub const SEED_FAKE_DATA_VAR: &str = "APP_SEED_FAKE_DATA";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Start the repositories with the fixed roles and employees instead of empty.
    pub seed_fake_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            seed_fake_data: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Unset variables fall back to the defaults; set but unparsable ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup(HOST_VAR) {
            Some(value) => value.parse::<IpAddr>().map_err(|_| ConfigError::Invalid {
                var: HOST_VAR,
                expected: "IP address",
                value,
            })?,
            None => defaults.host,
        };

        let port = match lookup(PORT_VAR) {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: PORT_VAR,
                expected: "port number",
                value,
            })?,
            None => defaults.port,
        };

        let seed_fake_data = match lookup(SEED_FAKE_DATA_VAR) {
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                var: SEED_FAKE_DATA_VAR,
                expected: "boolean",
                value,
            })?,
            None => defaults.seed_fake_data,
        };

        Ok(Self {
            host,
            port,
            seed_fake_data,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Loads the nearest `.env` into the process environment. Returns whether a file was found.
/// Only a missing file is tolerated; an unreadable or malformed one is an error, since
/// dotenvy stops at the first bad line and would leave the rest unset.
pub fn load_dotenv() -> Result<bool, dotenvy::Error> {
    skip_not_found(dotenvy::dotenv().map(|_| ()))
}

pub fn load_env_file(path: impl AsRef<Path>) -> Result<bool, dotenvy::Error> {
    skip_not_found(dotenvy::from_path(path))
}

fn skip_not_found(result: Result<(), dotenvy::Error>) -> Result<bool, dotenvy::Error> {
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
