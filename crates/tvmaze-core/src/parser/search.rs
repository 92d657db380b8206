//! Show search parser
//!
//! Parses the `/search/shows` response: an array of `{show, score}` hits.

use serde::Deserialize;

use crate::error::Result;
use crate::types::{PLACEHOLDER_IMAGE_URL, ShowSummary};

/// One relevance-ranked hit; only the wrapped show is kept
#[derive(Debug, Deserialize)]
struct SearchHit {
    show: ApiShow,
}

#[derive(Debug, Deserialize)]
struct ApiShow {
    id: u64,
    name: String,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    image: Option<ApiImage>,
}

#[derive(Debug, Deserialize)]
struct ApiImage {
    #[serde(default)]
    medium: Option<String>,
}

/// Parses a search response body and returns normalized show summaries
///
/// Upstream order is preserved. Shows without artwork get
/// [`PLACEHOLDER_IMAGE_URL`].
///
/// # Arguments
/// * `body` - Raw JSON body from `/search/shows`
///
/// # Errors
/// Returns `MalformedResponse` if the body is not an array of search hits
pub fn parse_search_results(body: &str) -> Result<Vec<ShowSummary>> {
    let hits: Vec<SearchHit> = serde_json::from_str(body)?;
    Ok(hits.into_iter().map(|hit| normalize_show(hit.show)).collect())
}

fn normalize_show(show: ApiShow) -> ShowSummary {
    let image = show
        .image
        .and_then(|image| image.medium)
        .filter(|medium| !medium.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());

    ShowSummary {
        id: show.id,
        name: show.name,
        summary: show.summary.unwrap_or_default(),
        image,
    }
}
