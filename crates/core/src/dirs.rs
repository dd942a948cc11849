use std::path::PathBuf;

pub const JOTTER_DIR: &str = "jotter";
pub const CONFIG: &str = "config.toml";

/// Key of the persisted snapshot history blob.
pub const HISTORY_KEY: &str = "history.json";

pub fn data_dir() -> Option<PathBuf> {
    let data = dirs::data_dir()?;
    Some(data.join(JOTTER_DIR))
}

pub fn config_dir() -> Option<PathBuf> {
    let config = dirs::config_dir()?;
    Some(config.join(JOTTER_DIR))
}

pub fn config_file() -> Option<PathBuf> {
    let mut dir = config_dir()?;
    dir.push(CONFIG);
    Some(dir)
}
