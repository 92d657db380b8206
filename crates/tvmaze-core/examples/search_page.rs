//! Runs the search and episodes flows against the live API and prints the page
//!
//! Run with: RUST_LOG=tvmaze_core=debug cargo run --example search_page -p tvmaze-core -- girls

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tvmaze_core::{Page, ShowSearchService, TvMazeService, UiController};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let term = std::env::args().nth(1).unwrap_or_else(|| "girls".to_string());
    let page = Arc::new(Mutex::new(Page::new()));
    let ui = UiController::new(TvMazeService::new()?, Arc::clone(&page));

    println!("Searching for '{}'...\n", term);
    for show in ui.service().search(&term).await? {
        println!("{}. {}: {}", show.id, show.name, show.summary_text());
    }

    println!("\nRendering results...\n");
    ui.search_for(&term).await?;

    let first = {
        let page = page.lock().await;
        for entry in page.shows.entries() {
            println!("[{}] {} ({})", entry.show_id, entry.heading, entry.image_src);
        }
        page.shows.entries().first().map(|e| e.key)
    };

    let Some(key) = first else {
        println!("No results found!");
        return Ok(());
    };

    ui.on_episodes_click(key).await?;

    let page = page.lock().await;
    println!("\nEpisodes:");
    for line in page.episodes.items() {
        println!("  {}", line);
    }
    Ok(())
}
