//! File access and default locations for the shared profile files.
//!
//! Reads go through [`FileSource`] so the resolver can be driven by an
//! in-memory implementation in tests. [`OsFiles`] is the real filesystem.
//!
//! Missing files are never an error: [`load_text`] turns them into empty
//! content, which parses to a document with only an empty `default`
//! profile. Only actual I/O failures on a file that exists (permissions,
//! etc.) are propagated.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::AwsConfigError;

/// Directory under the home directory holding both files.
pub const AWS_DIR: &str = ".aws";
pub const CREDENTIALS_FILE_NAME: &str = "credentials";
pub const CONFIG_FILE_NAME: &str = "config";

/// Synchronous, read-only file access.
pub trait FileSource {
    fn exists(&self, path: &Path) -> bool;
    fn read_text(&self, path: &Path) -> io::Result<String>;
}

/// [`FileSource`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFiles;

impl FileSource for OsFiles {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// The current user's home directory, if the platform reports one.
pub fn home_dir() -> Option<PathBuf> {
    let user = directories::UserDirs::new()?;
    Some(user.home_dir().to_path_buf())
}

/// `{home}/.aws/credentials`
pub fn default_credentials_path(home: &Path) -> PathBuf {
    home.join(AWS_DIR).join(CREDENTIALS_FILE_NAME)
}

/// `{home}/.aws/config`
pub fn default_config_path(home: &Path) -> PathBuf {
    home.join(AWS_DIR).join(CONFIG_FILE_NAME)
}

/// Read `path` through `files`, treating a missing file as empty content.
pub fn load_text(files: &impl FileSource, path: &Path) -> Result<String, AwsConfigError> {
    if !files.exists(path) {
        tracing::debug!(path = %path.display(), "profile file not found, using empty content");
        return Ok(String::new());
    }

    match files.read_text(path) {
        Ok(content) => Ok(content),
        // Removed between the existence check and the read.
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(AwsConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
