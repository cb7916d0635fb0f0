//! Device registry state
//!
//! The registry itself lives in the test process. The CLI only owns the
//! "clear on start" step: before a run, the lock file is reset to an empty
//! list so that no device stays marked busy by a previous, crashed run.

use std::path::{Path, PathBuf};

use crate::common::{paths, Result};

/// Handle on the device registry's lock file
#[derive(Debug, Clone)]
pub struct DeviceRegistry {
    lock_file: PathBuf,
}

impl DeviceRegistry {
    /// Registry for the project rooted at `root`
    pub fn new(root: &Path) -> Self {
        Self {
            lock_file: paths::lock_file_path(root),
        }
    }

    pub fn lock_file(&self) -> &Path {
        &self.lock_file
    }

    /// Clear all device locks, whatever the file held before
    pub fn reset(&self) -> Result<()> {
        std::fs::write(&self.lock_file, "[]")?;
        tracing::debug!("Reset device registry at {}", self.lock_file.display());
        Ok(())
    }
}
