//! The application shell: owns the windows it opens and the
//! Uninitialized -> Ready transition.

use crate::bridge::BridgeScript;
use crate::error::ShellError;
use crate::host::WindowHost;
use crate::security;
use crate::window::{window_label, WindowSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Uninitialized,
    Ready,
}

pub struct Shell<H: WindowHost> {
    host: H,
    state: ShellState,
    /// Windows opened so far, including released ones. Drives label numbering.
    opened: usize,
    windows: Vec<(String, H::Window)>,
}

impl<H: WindowHost> Shell<H> {
    /// Creates the shell without touching the host. Nothing is opened until
    /// [`Shell::on_ready`] runs.
    pub fn new(host: H) -> Self {
        Shell {
            host,
            state: ShellState::Uninitialized,
            opened: 0,
            windows: Vec::new(),
        }
    }

    /// Handles the host's readiness signal: opens one window with the fixed
    /// spec and moves the shell to [`ShellState::Ready`].
    ///
    /// Each call opens a new window with its own label and the same
    /// configuration; earlier windows are left alone. On error nothing is
    /// opened and the state is unchanged.
    ///
    /// The host config must enforce the window's preferences before anything
    /// else is touched.
    pub fn on_ready(&mut self) -> Result<&H::Window, ShellError> {
        let shell_dir = self.host.shell_dir()?;
        let spec = WindowSpec::main(&shell_dir, window_label(self.opened + 1));
        security::verify(self.host.config(), &spec.preferences)?;
        let bridge = BridgeScript::load(spec.preferences.preload())?;

        let window = self.host.open(&spec, &bridge)?;
        self.opened += 1;
        self.state = ShellState::Ready;

        log::info!(
            "opened window '{}' ({}x{}) with content {}",
            spec.label,
            spec.width,
            spec.height,
            spec.content.display()
        );
        match serde_json::to_string(&spec) {
            Ok(json) => log::debug!("window spec: {}", json),
            Err(e) => log::warn!("could not serialize window spec {:?}: {}", spec, e),
        }

        let index = self.windows.len();
        self.windows.push((spec.label, window));
        Ok(&self.windows[index].1)
    }

    /// Drops the shell's handle to a window that has been closed.
    pub fn release(&mut self, label: &str) -> Option<H::Window> {
        let index = self.windows.iter().position(|(l, _)| l == label)?;
        let (_, window) = self.windows.remove(index);
        log::info!("released window '{}'", label);
        Some(window)
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn windows(&self) -> impl Iterator<Item = &H::Window> {
        self.windows.iter().map(|(_, w)| w)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.windows.iter().map(|(l, _)| l.as_str())
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}
