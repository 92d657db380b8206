//! TVmaze Show Browser Tauri Integration
//!
//! Provides a Tauri plugin that hosts the show browser page in a webview.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(tvmaze_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then forward the page's two events from the frontend:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! // Search form submitted
//! const page = await invoke('plugin:tvmaze|search_shows', { term: 'girls' });
//! showsList.innerHTML = page.shows_html;
//! episodesArea.hidden = !page.episodes_visible;
//!
//! // "Episodes" button clicked
//! const entry = Number(button.dataset.entry);
//! const next = await invoke('plugin:tvmaze|show_episodes', { entry });
//! episodesList.innerHTML = next.episodes_html;
//! ```

use std::sync::Arc;
use tokio::sync::Mutex;

use tauri::{
    Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};
use tvmaze_core::{Page, TvMazeService, UiController};

mod commands;

/// Shared controller for all plugin commands
///
/// The controller synchronizes page access itself, so commands for
/// different events run concurrently and the newest response wins.
pub struct BrowserState {
    pub(crate) controller: Arc<UiController<TvMazeService>>,
}

impl BrowserState {
    /// Create a new BrowserState with default configuration and an empty page
    ///
    /// # Errors
    /// Returns error string if service initialization fails
    pub fn new() -> Result<Self, String> {
        let service = TvMazeService::new().map_err(|e| e.to_string())?;
        let page = Arc::new(Mutex::new(Page::new()));
        Ok(Self {
            controller: Arc::new(UiController::new(service, page)),
        })
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new().expect("Failed to create default BrowserState")
    }
}

/// Initialize the tvmaze plugin
///
/// # Example
/// ```ignore
/// tauri::Builder::default()
///     .plugin(tvmaze_tauri::init())
///     .run(tauri::generate_context!())
///     .expect("error while running tauri application");
/// ```
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("tvmaze")
        .invoke_handler(tauri::generate_handler![
            commands::search_shows,
            commands::show_episodes,
            commands::get_shows_by_term,
            commands::get_episodes_of_show
        ])
        .setup(|app, _api| {
            let state = BrowserState::new().map_err(Box::<dyn std::error::Error>::from)?;
            app.manage(state);
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use tvmaze_core::{EpisodeSummary as Episode, PageSnapshot, ShowSummary as Show};
