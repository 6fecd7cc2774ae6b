use fs2::FileExt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub mod backend;
pub mod config;
pub mod error;
pub mod history;
pub mod namespace;
pub mod paths;

pub use backend::{FileKv, KeyGuard, KvBackend, MemoryKv};
pub use config::{load_config, save_config};
pub use error::StoreError;
pub use history::{Collection, HistoryStore};
pub use namespace::{Namespace, SESSION_KEYS};
pub use paths::StorePaths;

/// Environment variable that overrides the store root.
pub const HOME_ENV: &str = "MOODLOG_HOME";

/// Return the per-user store root.
/// `$MOODLOG_HOME` if set, else `<data_dir>/moodlog/`, else `~/.moodlog/`.
pub fn store_root() -> PathBuf {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        PathBuf::from(dir)
    } else if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("moodlog")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".moodlog")
    } else {
        PathBuf::from(".moodlog-store")
    }
}

/// Replace a key file or `config.json` in one step. Readers see either the
/// old document or the new one, never a torn write.
pub fn write_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let parent = path.parent().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("no parent dir for {}", path.display()),
        )
    })?;
    fs::create_dir_all(parent)?;
    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Holds a namespace's `locks/<key>.lock` until dropped.
pub struct LockGuard {
    _file: fs::File,
}

/// Take the cross-process writer lock for one key. Blocks while another
/// moodlog process is mid-write, logging once that it is waiting.
pub fn lock_file(path: &Path) -> io::Result<LockGuard> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(path)?;
    if file.try_lock_exclusive().is_err() {
        tracing::warn!(lock = %path.display(), "waiting for lock held by another writer");
        file.lock_exclusive()?;
    }
    Ok(LockGuard { _file: file })
}
