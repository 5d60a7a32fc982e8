//! One server per data file.
//!
//! The lock lives beside the data file as `<data_file>.lock`, so servers
//! pointed at different files run side by side while a second server on the
//! same file refuses to start.

use anyhow::{Context, Result, bail};
use fs2::FileExt;
use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Held for the life of the server; the lock is released on drop.
pub struct DataFileLock {
    _file: File,
    path: PathBuf,
}

impl DataFileLock {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub fn lock_path(data_file: &Path) -> PathBuf {
    let mut name = OsString::from(data_file.as_os_str());
    name.push(".lock");
    PathBuf::from(name)
}

/// Take the exclusive lock for `data_file`, failing if another server holds it.
pub fn lock_data_file(data_file: &Path) -> Result<DataFileLock> {
    let path = lock_path(data_file);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Could not create {}", parent.display()))?;
    }

    let file = File::create(&path)
        .with_context(|| format!("Could not create lock file {}", path.display()))?;

    if file.try_lock_exclusive().is_err() {
        bail!(
            "Another calremind-server is already serving {}.\n\
            If you believe this is an error, remove: {}",
            data_file.display(),
            path.display()
        );
    }

    Ok(DataFileLock { _file: file, path })
}
