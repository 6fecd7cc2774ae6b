use std::path::PathBuf;

/// All well-known paths under a store root.
#[derive(Debug, Clone)]
pub struct StorePaths {
    pub root: PathBuf,
    pub kv_dir: PathBuf,
    pub locks_dir: PathBuf,
    pub config_json: PathBuf,
}

impl StorePaths {
    /// Derive all paths from a store root. Pure computation, no I/O.
    pub fn discover(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            kv_dir: root.join("kv"),
            locks_dir: root.join("locks"),
            config_json: root.join("config.json"),
            root,
        }
    }

    /// Create all required directories. Idempotent.
    pub fn ensure_layout(&self) -> std::io::Result<()> {
        for dir in [&self.kv_dir, &self.locks_dir] {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    /// Check whether the key-value directory exists.
    pub fn is_initialized(&self) -> bool {
        self.kv_dir.is_dir()
    }

    /// `kv/<key>.json`
    pub fn key_file(&self, key: &str) -> PathBuf {
        self.kv_dir.join(format!("{key}.json"))
    }

    /// `locks/<key>.lock`
    pub fn lock_file(&self, key: &str) -> PathBuf {
        self.locks_dir.join(format!("{key}.lock"))
    }
}
