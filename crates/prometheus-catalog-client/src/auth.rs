//! Bearer-token loading from a configured file.

use crate::error::{ClientError, Result};
use std::fs;
use std::path::PathBuf;

/// Optional bearer-token source, re-read on every request so a token
/// rotated on disk is picked up without a restart.
///
/// The file's full contents are used as the token, no trimming.
#[derive(Debug, Clone)]
pub(crate) struct BearerTokenFile {
    path: Option<PathBuf>,
}

impl BearerTokenFile {
    pub(crate) fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Load the token, if a file is configured.
    ///
    /// A configured but missing or unreadable file is an error naming the
    /// path; it is raised before any network I/O and never cached.
    pub(crate) fn load(&self) -> Result<Option<String>> {
        match &self.path {
            None => Ok(None),
            Some(path) => fs::read_to_string(path).map(Some).map_err(|e| {
                ClientError::NotFound(format!(
                    "failed to find or read bearer token file {}: {}",
                    path.display(),
                    e
                ))
            }),
        }
    }
}
