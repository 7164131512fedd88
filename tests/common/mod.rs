//! Test harness: a window host that records what the shell asks it to do.

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use optimizer_shell_lib::{BridgeScript, Shell, ShellError, WindowHost, WindowSpec};
use tauri::Config;
use tempfile::TempDir;

pub const BRIDGE_SOURCE: &str = "window.optimizerShell = Object.freeze({});";

/// A window the fake host "opened".
#[derive(Debug, Clone, PartialEq)]
pub struct FakeWindow {
    pub id: usize,
    pub label: String,
}

/// One call to `WindowHost::open`.
#[derive(Debug, Clone)]
pub struct OpenCall {
    pub spec: WindowSpec,
    pub bridge_path: PathBuf,
    pub bridge_source: String,
}

pub struct RecordingHost {
    dir: TempDir,
    config: Config,
    calls: RefCell<Vec<OpenCall>>,
    content_available: bool,
}

/// The config compiled into the app.
pub fn shipped_config() -> Config {
    serde_json::from_str(include_str!("../../tauri.conf.json")).unwrap()
}

/// The shipped config with `overrides` merged into its `app` section.
pub fn config_with_app(overrides: serde_json::Value) -> Config {
    let mut value: serde_json::Value =
        serde_json::from_str(include_str!("../../tauri.conf.json")).unwrap();
    if let (Some(app), Some(overrides)) = (value["app"].as_object_mut(), overrides.as_object()) {
        for (key, v) in overrides {
            app.insert(key.clone(), v.clone());
        }
    }
    serde_json::from_value(value).unwrap()
}

impl RecordingHost {
    /// Host whose shell directory holds a valid bridge script.
    pub fn new() -> Self {
        let host = Self::without_bridge();
        fs::write(host.dir.path().join("preload.js"), BRIDGE_SOURCE).unwrap();
        host
    }

    pub fn without_bridge() -> Self {
        RecordingHost {
            dir: tempfile::tempdir().unwrap(),
            config: shipped_config(),
            calls: RefCell::new(Vec::new()),
            content_available: true,
        }
    }

    /// Host that has a bridge but no embedded content.
    pub fn without_content() -> Self {
        RecordingHost {
            content_available: false,
            ..Self::new()
        }
    }

    /// Host with a valid bridge running under `config`.
    pub fn with_config(config: Config) -> Self {
        RecordingHost {
            config,
            ..Self::new()
        }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn calls(&self) -> Vec<OpenCall> {
        self.calls.borrow().clone()
    }

    pub fn open_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl WindowHost for RecordingHost {
    type Window = FakeWindow;

    fn config(&self) -> &Config {
        &self.config
    }

    fn shell_dir(&self) -> Result<PathBuf, ShellError> {
        Ok(self.dir.path().to_path_buf())
    }

    fn open(&self, spec: &WindowSpec, bridge: &BridgeScript) -> Result<FakeWindow, ShellError> {
        if !self.content_available {
            return Err(ShellError::MissingContent {
                entry: spec.content.to_string_lossy().into_owned(),
            });
        }

        let mut calls = self.calls.borrow_mut();
        calls.push(OpenCall {
            spec: spec.clone(),
            bridge_path: bridge.path().to_path_buf(),
            bridge_source: bridge.source().to_string(),
        });

        Ok(FakeWindow {
            id: calls.len(),
            label: spec.label.clone(),
        })
    }
}

pub fn shell() -> Shell<RecordingHost> {
    Shell::new(RecordingHost::new())
}
