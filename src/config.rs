//! Server configuration read from the environment.
//!
//! | Variable           | Default   |
//! |--------------------|-----------|
//! | `HOST`             | `0.0.0.0` |
//! | `PORT`             | `8080`    |
//! | `PAGE_SIZE`        | `20`      |
//! | `MAX_PAGE_SIZE`    | `100`     |
//! | `SEED_TEAMS`       | `true`    |
//! | `PARTICIPANTS_CSV` | unset     |

use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has an invalid value {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("PAGE_SIZE ({default}) must be between 1 and MAX_PAGE_SIZE ({max})")]
    PageSizes { default: usize, max: usize },
}

/// Page size limits applied to every listing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PagingConfig {
    pub default_size: usize,
    pub max_size: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_size: 20,
            max_size: 100,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub paging: PagingConfig,
    /// Create the five competing teams on startup.
    pub seed_teams: bool,
    /// Roster to import on startup.
    pub participants_csv: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = PagingConfig::default();
        let paging = PagingConfig {
            default_size: parse_or(&lookup, "PAGE_SIZE", defaults.default_size)?,
            max_size: parse_or(&lookup, "MAX_PAGE_SIZE", defaults.max_size)?,
        };
        if paging.default_size == 0 || paging.default_size > paging.max_size {
            return Err(ConfigError::PageSizes {
                default: paging.default_size,
                max: paging.max_size,
            });
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 8080)?,
            paging,
            seed_teams: parse_or(&lookup, "SEED_TEAMS", true)?,
            participants_csv: lookup("PARTICIPANTS_CSV")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
