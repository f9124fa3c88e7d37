use tauri::State;

use crate::catalog::PhraseEntry;
use crate::AppState;

#[derive(Debug, serde::Serialize)]
pub struct CommandError {
    pub message: String,
}

type CommandResult<T> = Result<T, CommandError>;

/// Loading state for the catalog, polled by the front end to decide
/// between the placeholder and the card/list views.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatus {
    pub loaded: bool,
    pub count: usize,
}

#[tauri::command]
pub fn catalog_status(state: State<AppState>) -> CommandResult<CatalogStatus> {
    let catalog = state.catalog.lock().unwrap();
    Ok(CatalogStatus {
        loaded: !catalog.is_empty(),
        count: catalog.len(),
    })
}

/// Full catalog for the two-column list view.
#[tauri::command]
pub fn list_phrases(state: State<AppState>) -> CommandResult<Vec<PhraseEntry>> {
    let catalog = state.catalog.lock().unwrap();
    Ok(catalog.entries().to_vec())
}
