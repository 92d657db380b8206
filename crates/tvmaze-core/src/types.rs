//! Core data types for the TVmaze client
//!
//! Contains the normalized records handed to renderers and to the Tauri
//! front end.

use scraper::Html;
use serde::{Deserialize, Serialize};

/// Image used when TVmaze has no artwork for a show
pub const PLACEHOLDER_IMAGE_URL: &str = "https://tinyurl.com/tv-missing";

/// Normalized display record for one television show
///
/// Holds exactly the four fields the results view needs; any other upstream
/// field is dropped during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowSummary {
    /// TVmaze show ID (e.g., 139)
    pub id: u64,

    /// Show title
    pub name: String,

    /// Show description, usually HTML (e.g., "<p>desc</p>")
    pub summary: String,

    /// Medium-size image URL, or [`PLACEHOLDER_IMAGE_URL`]
    pub image: String,
}

impl ShowSummary {
    /// Summary with markup stripped, for hosts that only display text
    pub fn summary_text(&self) -> String {
        let fragment = Html::parse_fragment(&self.summary);
        let text: String = fragment.root_element().text().collect();
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Normalized display record for one episode of a show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    /// TVmaze episode ID
    pub id: u64,

    /// Episode title
    pub name: String,

    /// Season number
    pub season: u32,

    /// Episode number within the season
    pub number: u32,
}
