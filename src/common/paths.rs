//! Well-known project-relative paths
//!
//! Everything is resolved against the project root, which for the CLI is the
//! current working directory.

use std::path::{Path, PathBuf};

/// Project manifest holding the `detox` settings object
pub const MANIFEST_FILE: &str = "package.json";

/// Device registry state shared with the test process
pub const LOCK_FILE: &str = "device.registry.state.lock";

/// Directory npm links package executables into
pub const NODE_BIN_DIR: &str = "node_modules/.bin";

/// Get the path to the project manifest
pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST_FILE)
}

/// Get the path to the device registry lock file
pub fn lock_file_path(root: &Path) -> PathBuf {
    root.join(LOCK_FILE)
}

/// Get the path of a locally installed node executable
pub fn local_bin_path(root: &Path, name: &str) -> PathBuf {
    root.join(NODE_BIN_DIR).join(name)
}
