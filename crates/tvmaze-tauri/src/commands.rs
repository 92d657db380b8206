//! Tauri commands for the show browser
//!
//! The first two commands are the page's event bindings and return the
//! updated page; the last two expose the raw services.

use tauri::State;
use tvmaze_core::{
    EntryKey, EpisodeListService, EpisodeSummary, PageSnapshot, ShowSearchService, ShowSummary,
};

use crate::BrowserState;

/// Search form submitted
///
/// Runs the search flow and returns the page. When a newer search overtook
/// this one, the returned page shows the newer results.
///
/// # Errors
/// Returns the error message if the search fails; the page is unchanged
#[tauri::command]
pub async fn search_shows(
    state: State<'_, BrowserState>,
    term: String,
) -> Result<PageSnapshot, String> {
    let controller = &state.controller;
    controller.search_for(&term).await.map_err(|e| e.to_string())?;
    Ok(controller.snapshot().await)
}

/// "Episodes" button clicked on a rendered entry
///
/// # Arguments
/// * `entry` - value of the button's `data-entry` attribute
///
/// # Errors
/// Returns the error message if the entry is stale or the listing fails
#[tauri::command]
pub async fn show_episodes(
    state: State<'_, BrowserState>,
    entry: u64,
) -> Result<PageSnapshot, String> {
    let controller = &state.controller;
    controller
        .on_episodes_click(EntryKey(entry))
        .await
        .map_err(|e| e.to_string())?;
    Ok(controller.snapshot().await)
}

/// Search shows without touching the page
#[tauri::command]
pub async fn get_shows_by_term(
    state: State<'_, BrowserState>,
    term: String,
) -> Result<Vec<ShowSummary>, String> {
    state
        .controller
        .service()
        .search(&term)
        .await
        .map_err(|e| e.to_string())
}

/// List a show's episodes without touching the page
#[tauri::command]
pub async fn get_episodes_of_show(
    state: State<'_, BrowserState>,
    show_id: u64,
) -> Result<Vec<EpisodeSummary>, String> {
    state
        .controller
        .service()
        .list_episodes(show_id)
        .await
        .map_err(|e| e.to_string())
}
