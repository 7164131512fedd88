//! Window geometry and web preferences for the shell's top-level window.
//!
//! Nothing here is read from outside input: size, file names and the
//! isolation flags are fixed at compile time.

use std::path::{Path, PathBuf};

use serde::Serialize;

pub const WINDOW_WIDTH: f64 = 600.0;
pub const WINDOW_HEIGHT: f64 = 600.0;
pub const WINDOW_TITLE: &str = "System Optimizer";

/// Label of the first window; later windows get a numeric suffix.
pub const MAIN_LABEL: &str = "main";

/// Bridge script file name, looked up next to the shell.
pub const BRIDGE_FILE: &str = "preload.js";

/// Local content loaded into every window.
pub const CONTENT_ENTRY: &str = "index.html";

/// Whether page content may call host capabilities directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostIntegration {
    Disabled,
}

/// Per-window webview settings.
///
/// The only constructor is [`WebPreferences::isolated`], so every instance
/// has host integration disabled and context isolation enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPreferences {
    preload: PathBuf,
    host_integration: HostIntegration,
    context_isolation: bool,
}

impl WebPreferences {
    pub fn isolated(preload: PathBuf) -> Self {
        WebPreferences {
            preload,
            host_integration: HostIntegration::Disabled,
            context_isolation: true,
        }
    }

    pub fn preload(&self) -> &Path {
        &self.preload
    }

    pub fn host_integration(&self) -> HostIntegration {
        self.host_integration
    }

    pub fn context_isolation(&self) -> bool {
        self.context_isolation
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowSpec {
    pub label: String,
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub content: PathBuf,
    pub preferences: WebPreferences,
}

impl WindowSpec {
    /// Spec for the shell window, with the bridge script resolved against
    /// `shell_dir`.
    pub fn main(shell_dir: &Path, label: impl Into<String>) -> Self {
        WindowSpec {
            label: label.into(),
            title: WINDOW_TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            content: PathBuf::from(CONTENT_ENTRY),
            preferences: WebPreferences::isolated(shell_dir.join(BRIDGE_FILE)),
        }
    }
}

/// Label for the `n`th window opened by the shell, counting from 1.
pub fn window_label(n: usize) -> String {
    if n <= 1 {
        MAIN_LABEL.to_string()
    } else {
        format!("{}-{}", MAIN_LABEL, n)
    }
}
