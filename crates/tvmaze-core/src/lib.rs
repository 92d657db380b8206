//! TVmaze Show Browser Core Library
//!
//! Searches TV shows on the public TVmaze API, lists a show's episodes on
//! demand, and renders both into a page model for a webview front end.
//!
//! # Overview
//!
//! - HTTP client and URL builders for the two read-only endpoints
//! - JSON parsers that normalize upstream records into [`ShowSummary`] and
//!   [`EpisodeSummary`]
//! - Renderers writing into a [`Page`] and a [`UiController`] binding the
//!   search form and "Episodes" buttons to them
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tokio::sync::Mutex;
//! use tvmaze_core::{Page, Result, TvMazeService, UiController};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let page = Arc::new(Mutex::new(Page::new()));
//!     let ui = UiController::new(TvMazeService::new()?, Arc::clone(&page));
//!
//!     // Search form submitted with "girls"
//!     ui.search_for("girls").await?;
//!
//!     // "Episodes" clicked on the first result
//!     let first = page.lock().await.shows.entries().first().map(|e| e.key);
//!     if let Some(key) = first {
//!         ui.on_episodes_click(key).await?;
//!     }
//!
//!     println!("{}", ui.snapshot().await.episodes_html);
//!     Ok(())
//! }
//! ```

mod client;
mod controller;
mod error;
pub mod parser;
pub mod render;
mod service;
mod types;
pub mod url;
pub mod view;

// Re-export client types
pub use client::{ClientConfig, TvMazeClient};

// Re-export error types
pub use error::{Result, TvMazeError};

// Re-export parser functions
pub use parser::{parse_episodes, parse_search_results};

// Re-export services
pub use service::{EpisodeListService, ShowSearchService, TvMazeService};

// Re-export view model and renderers
pub use controller::{RenderOutcome, UiController};
pub use render::{format_episode_line, render_episodes, render_shows};
pub use view::{EntryKey, EpisodesArea, Page, PageSnapshot, ShowEntry, ShowsList};

// Re-export data types
pub use types::{EpisodeSummary, PLACEHOLDER_IMAGE_URL, ShowSummary};

// Re-export URL helper functions for convenience
pub use url::{DEFAULT_BASE_URL, build_episodes_url, build_search_url};
