//! Bot configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Raised when an environment variable is present but unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}={value:?} is not a valid {expected}")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

/// Configuration required to bootstrap the bot runtime and transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotConfig {
    pub data_file: PathBuf,
    pub command_prefix: String,
    pub rng_seed: Option<u64>,
    pub command_buffer: usize,
    pub log_dir: Option<PathBuf>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(Self::DEFAULT_DATA_FILE),
            command_prefix: Self::DEFAULT_PREFIX.to_owned(),
            rng_seed: None,
            command_buffer: Self::DEFAULT_COMMAND_BUFFER,
            log_dir: None,
        }
    }
}

impl BotConfig {
    pub const DEFAULT_DATA_FILE: &'static str = "players.json";
    pub const DEFAULT_PREFIX: &'static str = "!";
    pub const DEFAULT_COMMAND_BUFFER: usize = 32;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_DATA_FILE` - Player store path (default: players.json)
    /// - `ARENA_COMMAND_PREFIX` - Command prefix (default: !)
    /// - `ARENA_RNG_SEED` - Fixed duel seed (default: entropy)
    /// - `ARENA_COMMAND_BUFFER` - Command queue size (default: 32)
    /// - `ARENA_LOG_DIR` - Log directory (default: `logs` next to the data file)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`BotConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("ARENA_DATA_FILE") {
            if path.trim().is_empty() {
                return Err(ConfigError::Empty {
                    key: "ARENA_DATA_FILE",
                });
            }
            config.data_file = PathBuf::from(path);
        }

        if let Some(prefix) = lookup("ARENA_COMMAND_PREFIX") {
            if prefix.trim().is_empty() {
                return Err(ConfigError::Empty {
                    key: "ARENA_COMMAND_PREFIX",
                });
            }
            config.command_prefix = prefix.trim().to_owned();
        }

        config.rng_seed = parse_var(&lookup, "ARENA_RNG_SEED", "unsigned integer")?;

        if let Some(capacity) =
            parse_var::<usize, _>(&lookup, "ARENA_COMMAND_BUFFER", "queue size")?
        {
            config.command_buffer = capacity.max(1);
        }

        config.log_dir = lookup("ARENA_LOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    /// Directory that receives the log file.
    pub fn log_directory(&self) -> PathBuf {
        match &self.log_dir {
            Some(dir) => dir.clone(),
            None => self
                .data_file
                .parent()
                .map(|parent| parent.join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs")),
        }
    }
}

fn parse_var<T, F>(
    lookup: &F,
    key: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::Invalid {
            key,
            value,
            expected,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<BotConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BotConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = load(&[]).unwrap();
        assert_eq!(config, BotConfig::default());
        assert_eq!(config.command_prefix, "!");
        assert_eq!(config.command_buffer, 32);
        assert_eq!(config.log_directory(), PathBuf::from("logs"));
    }

    #[test]
    fn reads_every_variable() {
        let config = load(&[
            ("ARENA_DATA_FILE", "/srv/arena/players.json"),
            ("ARENA_COMMAND_PREFIX", "?"),
            ("ARENA_RNG_SEED", "42"),
            ("ARENA_COMMAND_BUFFER", "0"),
            ("ARENA_LOG_DIR", "/var/log/arena"),
        ])
        .unwrap();

        assert_eq!(config.data_file, PathBuf::from("/srv/arena/players.json"));
        assert_eq!(config.command_prefix, "?");
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.command_buffer, 1);
        assert_eq!(config.log_directory(), PathBuf::from("/var/log/arena"));
    }

    #[test]
    fn log_directory_follows_data_file() {
        let config = load(&[("ARENA_DATA_FILE", "/srv/arena/players.json")]).unwrap();
        assert_eq!(config.log_directory(), PathBuf::from("/srv/arena/logs"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = load(&[("ARENA_RNG_SEED", "soon")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "ARENA_RNG_SEED",
                value: "soon".into(),
                expected: "unsigned integer",
            }
        );

        assert!(load(&[("ARENA_COMMAND_BUFFER", "-3")]).is_err());
        assert_eq!(
            load(&[("ARENA_COMMAND_PREFIX", "  ")]).unwrap_err(),
            ConfigError::Empty {
                key: "ARENA_COMMAND_PREFIX"
            }
        );
    }
}
