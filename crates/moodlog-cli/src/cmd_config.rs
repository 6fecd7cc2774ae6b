use clap::Subcommand;
use moodlog_core::MoodlogConfig;
use moodlog_store::{load_config, save_config, StorePaths};
use std::path::Path;

// ── CLI Schema ──

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Set a config value
    Set {
        /// Config key (e.g. journal_fallback)
        key: String,
        /// Config value (label name or number)
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
}

// ── Dispatch ──

pub fn run(cmd: ConfigCmd, root: &Path) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Set { key, value } => set(root, &key, &value),
        ConfigCmd::Get { key } => get(root, &key),
        ConfigCmd::List => list(root),
    }
}

// ── Command Implementations ──

/// `moodlog config set <key> <value>`
pub fn set(root: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    let paths = StorePaths::discover(root);
    let mut config = load_config(&paths)?;
    config.set(key, value)?;
    save_config(&paths, &config)?;
    println!("{key} = {}", config.get(key)?);
    Ok(())
}

/// `moodlog config get <key>`
pub fn get(root: &Path, key: &str) -> anyhow::Result<()> {
    let config = load_config(&StorePaths::discover(root))?;
    println!("{}", config.get(key)?);
    Ok(())
}

/// `moodlog config list`
pub fn list(root: &Path) -> anyhow::Result<()> {
    let config = load_config(&StorePaths::discover(root))?;
    for key in MoodlogConfig::KEYS {
        println!("{key} = {}", config.get(key)?);
    }
    Ok(())
}
