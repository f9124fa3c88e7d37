//! Tauri commands for flashcard navigation

use tauri::State;

use crate::session::CardView;
use crate::AppState;

use super::catalog::CommandError;

type CommandResult<T> = Result<T, CommandError>;

/// The card at the session's current index, or `None` while the catalog
/// is still loading.
#[tauri::command]
pub fn current_card(state: State<AppState>) -> CommandResult<Option<CardView>> {
    let catalog = state.catalog.lock().unwrap();
    let session = state.session.lock().unwrap();
    Ok(session.current_card(&catalog))
}

/// Advance to the next card, wrapping modulo the catalog length.
#[tauri::command]
pub fn next_card(state: State<AppState>) -> CommandResult<Option<CardView>> {
    let catalog = state.catalog.lock().unwrap();
    let mut session = state.session.lock().unwrap();
    Ok(session.next_card(&catalog))
}

/// Step back to the previous card, wrapping from 0 to the last entry.
#[tauri::command]
pub fn prev_card(state: State<AppState>) -> CommandResult<Option<CardView>> {
    let catalog = state.catalog.lock().unwrap();
    let mut session = state.session.lock().unwrap();
    Ok(session.prev_card(&catalog))
}
