use std::path::PathBuf;
use std::sync::Mutex;

use tauri::Manager;

mod catalog;
mod commands;
mod highlight;
mod session;

use catalog::{load_catalog, Catalog};
use session::Session;

pub struct AppState {
    /// Written once by the startup load, read-only afterwards.
    pub catalog: Mutex<Catalog>,
    pub session: Mutex<Session>,
}

/// Resolve the bundled phrase CSV, falling back to the working directory
/// during development.
fn phrases_path(handle: &tauri::AppHandle) -> PathBuf {
    handle
        .path()
        .resolve("phrases.csv", tauri::path::BaseDirectory::Resource)
        .unwrap_or_else(|_| PathBuf::from("phrases.csv"))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let state = AppState {
        catalog: Mutex::new(Catalog::default()),
        session: Mutex::new(Session::default()),
    };

    tauri::Builder::default()
        .manage(state)
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            // One-shot catalog load; a failure leaves the catalog empty
            // and the UI in its loading state. No retries.
            let handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                let path = phrases_path(&handle);
                match load_catalog(&path) {
                    Ok(catalog) => {
                        log::info!("Loaded phrase catalog: {} entries", catalog.len());
                        let state: tauri::State<AppState> = handle.state();
                        *state.catalog.lock().unwrap() = catalog;
                    }
                    Err(err) => {
                        log::error!("Error loading phrase catalog: {}", err);
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Catalog commands
            commands::catalog_status,
            commands::list_phrases,
            // Card navigation commands
            commands::current_card,
            commands::next_card,
            commands::prev_card,
            // Text checker commands
            commands::set_text,
            commands::get_text,
            commands::apply_replacement,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
