// System Optimizer — Tauri shell
// Opens one isolated 600x600 window on startup and loads the local UI.
// Startup failures are logged and turned into a non-zero exit code.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::process::ExitCode;

fn main() -> ExitCode {
    match optimizer_shell_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("shell failed to start: {}", e);
            eprintln!("shell failed to start: {}", e);
            ExitCode::FAILURE
        }
    }
}
