//! The seam between the shell and the windowing runtime.

use std::path::PathBuf;

use tauri::{
    AppHandle, Config, Manager, Runtime, WebviewUrl, WebviewWindow, WebviewWindowBuilder,
};

use crate::bridge::BridgeScript;
use crate::error::ShellError;
use crate::window::WindowSpec;

/// Something that can put a window on screen.
pub trait WindowHost {
    type Window;

    /// Compiled host config; checked against every window's preferences.
    fn config(&self) -> &Config;

    /// Directory the shell runs from; the bridge script is resolved against it.
    fn shell_dir(&self) -> Result<PathBuf, ShellError>;

    /// Builds a window from `spec`, injects `bridge` ahead of page scripts and
    /// points the window at `spec.content`.
    fn open(&self, spec: &WindowSpec, bridge: &BridgeScript) -> Result<Self::Window, ShellError>;
}

/// [`WindowHost`] backed by a running Tauri app.
pub struct TauriHost<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> TauriHost<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        TauriHost { app }
    }
}

impl<R: Runtime> WindowHost for TauriHost<R> {
    type Window = WebviewWindow<R>;

    fn config(&self) -> &Config {
        self.app.config()
    }

    fn shell_dir(&self) -> Result<PathBuf, ShellError> {
        Ok(self.app.path().resource_dir()?)
    }

    fn open(&self, spec: &WindowSpec, bridge: &BridgeScript) -> Result<Self::Window, ShellError> {
        let entry = spec.content.to_string_lossy().into_owned();
        if self.app.asset_resolver().get(entry.clone()).is_none() {
            return Err(ShellError::MissingContent { entry });
        }

        let window = WebviewWindowBuilder::new(
            &self.app,
            spec.label.as_str(),
            WebviewUrl::App(spec.content.clone()),
        )
        .title(&spec.title)
        .inner_size(spec.width, spec.height)
        .initialization_script(bridge.source())
        .build()?;

        Ok(window)
    }
}
