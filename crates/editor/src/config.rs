use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

const DEFAULT_MAX_CAPACITY: usize = 16;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upper bound on stored snapshots. A change takes effect on the next
    /// save, existing entries are only trimmed, never padded.
    pub max_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}

/// Read configuration from the default user config location.
pub fn load_config() -> Result<Config> {
    let path =
        jotter_core::dirs::config_file().context("Cannot determine user config directory")?;
    read_config(&path)
}

/// Read configuration from `config_path`. A missing file yields the
/// defaults, an unparseable one or a non positive capacity is an error.
pub fn read_config(config_path: &Path) -> Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .build()?;

    let config: Config = config.try_deserialize()?;
    ensure!(config.max_capacity > 0, "max_capacity must be positive");

    Ok(config)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = read_config(Path::new("/nonexistent/jotter/config.toml")).unwrap();
        assert_eq!(config.max_capacity, DEFAULT_MAX_CAPACITY);
    }
}
