// System Optimizer — desktop shell library.
// Opens the isolated main window on startup; page content talks to the host
// only through the bridge script and the isolation frame.

use std::sync::{Arc, Mutex};

use tauri::{AppHandle, Manager, RunEvent, Runtime, WindowEvent};
use tauri_plugin_log::{Target, TargetKind};

pub mod bridge;
pub mod error;
pub mod host;
pub mod security;
pub mod shell;
pub mod startup;
pub mod window;

pub use bridge::BridgeScript;
pub use error::ShellError;
pub use host::{TauriHost, WindowHost};
pub use shell::{Shell, ShellState};
pub use startup::StartupFailure;
pub use window::{HostIntegration, WebPreferences, WindowSpec};

/// Shell held in Tauri managed state.
pub type AppShell<R> = Mutex<Shell<TauriHost<R>>>;

fn log_plugin<R: Runtime>() -> tauri::plugin::TauriPlugin<R> {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    tauri_plugin_log::Builder::new()
        .level(level)
        .targets([
            Target::new(TargetKind::Stdout),
            Target::new(TargetKind::LogDir { file_name: None }),
        ])
        .build()
}

fn release_window<R: Runtime>(app: &AppHandle<R>, label: &str) {
    let shell = app.state::<AppShell<R>>();
    match shell.lock() {
        Ok(mut shell) => {
            shell.release(label);
        }
        Err(_) => log::error!("{}", ShellError::StatePoisoned),
    };
}

/// Last window closed: Tauri's default exit applies. macOS reopen with no
/// visible window goes through the readiness path again.
#[cfg_attr(not(target_os = "macos"), allow(unused_variables))]
fn on_run_event<R: Runtime>(app: &AppHandle<R>, event: RunEvent) {
    match event {
        #[cfg(target_os = "macos")]
        RunEvent::Reopen {
            has_visible_windows: false,
            ..
        } => {
            if let Err(e) = startup::open_window(app.state::<AppShell<R>>().inner()) {
                log::error!("failed to reopen window: {}", e);
            }
        }
        RunEvent::Exit => log::info!("shell exiting"),
        _ => {}
    }
}

/// Builds and runs the app. The window is opened from the setup hook; a
/// failure there stops the event loop and is returned from here.
pub fn run() -> Result<(), ShellError> {
    let failure = Arc::new(StartupFailure::default());
    let setup_failure = Arc::clone(&failure);

    let app = tauri::Builder::default()
        .plugin(log_plugin())
        .setup(move |app| {
            let handle = app.handle().clone();
            app.manage(Mutex::new(Shell::new(TauriHost::new(handle.clone()))));
            if !startup::start(app.state::<AppShell<tauri::Wry>>().inner(), &setup_failure) {
                handle.exit(1);
            }
            Ok(())
        })
        .on_window_event(|window, event| {
            if let WindowEvent::Destroyed = event {
                release_window(window.app_handle(), window.label());
            }
        })
        .build(tauri::generate_context!())?;

    let code = app.run_return(on_run_event);
    if let Some(e) = failure.take() {
        return Err(e);
    }
    if code != 0 {
        log::warn!("event loop exited with code {}", code);
    }
    Ok(())
}
