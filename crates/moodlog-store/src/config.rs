use std::io;

use moodlog_core::MoodlogConfig;

use crate::error::StoreError;
use crate::paths::StorePaths;
use crate::write_atomic;

const CONFIG_KEY: &str = "config.json";

/// Read `config.json`. A missing file yields the defaults.
pub fn load_config(paths: &StorePaths) -> Result<MoodlogConfig, StoreError> {
    let content = match std::fs::read_to_string(&paths.config_json) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(MoodlogConfig::default()),
        Err(e) => return Err(StoreError::read(CONFIG_KEY, e)),
    };
    if content.trim().is_empty() {
        return Ok(MoodlogConfig::default());
    }
    serde_json::from_str(&content).map_err(|e| StoreError::serialization(CONFIG_KEY, e))
}

/// Write `config.json` atomically.
pub fn save_config(paths: &StorePaths, config: &MoodlogConfig) -> Result<(), StoreError> {
    let json =
        serde_json::to_string_pretty(config).map_err(|e| StoreError::serialization(CONFIG_KEY, e))?;
    write_atomic(&paths.config_json, json.as_bytes()).map_err(|e| StoreError::write(CONFIG_KEY, e))
}
