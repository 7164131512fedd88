//! The bridge (preload) script injected ahead of page content.
//!
//! It runs in the page's own JS world; host mediation happens in the
//! isolation frame, so the script only publishes a frozen descriptor.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ShellError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeScript {
    path: PathBuf,
    source: String,
}

impl BridgeScript {
    /// Reads the script at `path`. A missing, unreadable or blank file is an
    /// error; the window is never opened without its bridge.
    pub fn load(path: &Path) -> Result<Self, ShellError> {
        let source = fs::read_to_string(path).map_err(|source| ShellError::Bridge {
            path: path.to_path_buf(),
            source,
        })?;

        if source.trim().is_empty() {
            return Err(ShellError::EmptyBridge {
                path: path.to_path_buf(),
            });
        }

        Ok(BridgeScript {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}
