//! Checks that the compiled host config actually enforces what the window's
//! web preferences promise.
//!
//! In Tauri the isolation boundary lives in `tauri.conf.json`, not in the
//! per-window builder, so a config edit could silently weaken it. Startup
//! refuses to open a window when the two disagree.

use tauri::utils::config::PatternKind;
use tauri::Config;

use crate::error::ShellError;
use crate::window::{HostIntegration, WebPreferences};

pub fn verify(config: &Config, prefs: &WebPreferences) -> Result<(), ShellError> {
    match prefs.host_integration() {
        HostIntegration::Disabled if config.app.with_global_tauri => {
            return Err(ShellError::HostIntegrationExposed);
        }
        HostIntegration::Disabled => {}
    }

    let isolated = matches!(config.app.security.pattern, PatternKind::Isolation { .. });
    if prefs.context_isolation() && !isolated {
        return Err(ShellError::IsolationDisabled);
    }

    Ok(())
}
