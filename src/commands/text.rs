//! Tauri commands for the text checker
//!
//! The front end re-renders the returned HTML wholesale on every change,
//! which also discards the click handlers attached to the previous
//! markers; the Rust side only guarantees the annotated output is a pure
//! function of (buffer, catalog).

use tauri::State;

use crate::highlight::AnnotatedText;
use crate::AppState;

use super::catalog::CommandError;

type CommandResult<T> = Result<T, CommandError>;

/// Buffer plus annotation after a marker substitution.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceOutcome {
    pub text: String,
    pub annotated: AnnotatedText,
}

/// Replace the session text buffer and return the annotated output.
#[tauri::command]
pub fn set_text(state: State<AppState>, text: String) -> CommandResult<AnnotatedText> {
    let catalog = state.catalog.lock().unwrap();
    let mut session = state.session.lock().unwrap();
    Ok(session.set_text(text, &catalog))
}

/// The current raw text buffer, for front-end resync after a substitution.
#[tauri::command]
pub fn get_text(state: State<AppState>) -> CommandResult<String> {
    let session = state.session.lock().unwrap();
    Ok(session.text().to_string())
}

/// Substitute a clicked marker's surface text with its replacement and
/// return the new buffer plus its annotation.
#[tauri::command]
pub fn apply_replacement(
    state: State<AppState>,
    surface: String,
    replacement: String,
) -> CommandResult<ReplaceOutcome> {
    if surface.is_empty() {
        return Err(CommandError {
            message: "Marker surface text must not be empty".to_string(),
        });
    }

    let catalog = state.catalog.lock().unwrap();
    let mut session = state.session.lock().unwrap();
    let annotated = session.apply_replacement(&surface, &replacement, &catalog);
    Ok(ReplaceOutcome {
        text: session.text().to_string(),
        annotated,
    })
}
