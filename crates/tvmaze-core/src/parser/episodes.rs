//! Episode listing parser
//!
//! Parses the `/shows/{id}/episodes` response: a flat array of episodes.

use serde::Deserialize;

use crate::error::Result;
use crate::types::EpisodeSummary;

#[derive(Debug, Deserialize)]
struct ApiEpisode {
    id: u64,
    name: String,
    season: u32,
    number: u32,
}

/// Parses an episode listing body and returns normalized episode summaries
///
/// No defaulting is applied: an episode missing `id`, `name`, `season` or
/// `number` makes the whole body malformed.
///
/// # Errors
/// Returns `MalformedResponse` if the body does not match the expected shape
pub fn parse_episodes(body: &str) -> Result<Vec<EpisodeSummary>> {
    let episodes: Vec<ApiEpisode> = serde_json::from_str(body)?;
    Ok(episodes
        .into_iter()
        .map(|ep| EpisodeSummary {
            id: ep.id,
            name: ep.name,
            season: ep.season,
            number: ep.number,
        })
        .collect())
}
