use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop the shell from putting its window on screen.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("host runtime error: {0}")]
    Host(#[from] tauri::Error),

    #[error("failed to read bridge script {path:?}: {source}")]
    Bridge {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bridge script {path:?} is empty")]
    EmptyBridge { path: PathBuf },

    #[error("content entry '{entry}' is not an embedded frontend asset")]
    MissingContent { entry: String },

    /// The compiled config injects the host API global into page content.
    #[error("host integration is exposed to content (app.withGlobalTauri must be false)")]
    HostIntegrationExposed,

    /// The compiled config does not use the isolation pattern.
    #[error("context isolation is disabled (app.security.pattern must be \"isolation\")")]
    IsolationDisabled,

    #[error("shell state lock poisoned")]
    StatePoisoned,
}
