//! Carries startup failures out of the host's event loop.
//!
//! The setup hook runs inside the event loop, where a returned error becomes
//! a panic. Failures are recorded here instead and handed back to the caller
//! of `run` once the loop has stopped.

use std::sync::Mutex;

use crate::error::ShellError;
use crate::host::WindowHost;
use crate::shell::Shell;

#[derive(Debug, Default)]
pub struct StartupFailure {
    error: Mutex<Option<ShellError>>,
}

impl StartupFailure {
    /// Keeps the first failure; later ones are only logged.
    pub fn record(&self, error: ShellError) {
        match self.error.lock() {
            Ok(mut slot) if slot.is_none() => *slot = Some(error),
            Ok(_) => log::warn!("additional startup failure: {}", error),
            Err(_) => log::error!("startup failure lost ({}): {}", ShellError::StatePoisoned, error),
        }
    }

    pub fn take(&self) -> Option<ShellError> {
        self.error.lock().ok().and_then(|mut slot| slot.take())
    }
}

/// Runs the readiness transition on a shell held behind a lock.
pub fn open_window<H: WindowHost>(shell: &Mutex<Shell<H>>) -> Result<(), ShellError> {
    let mut shell = shell.lock().map_err(|_| ShellError::StatePoisoned)?;
    shell.on_ready()?;
    Ok(())
}

/// First readiness signal. Returns `false` when the window could not be
/// opened; the cause is left in `failure` and the caller should stop the app.
pub fn start<H: WindowHost>(shell: &Mutex<Shell<H>>, failure: &StartupFailure) -> bool {
    match open_window(shell) {
        Ok(()) => true,
        Err(e) => {
            failure.record(e);
            false
        }
    }
}
