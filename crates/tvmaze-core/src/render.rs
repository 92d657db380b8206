//! Renderers for show results and episode listings
//!
//! Both renderers replace the previous contents of their container; there
//! is no incremental diffing.

use crate::types::{EpisodeSummary, ShowSummary};
use crate::view::{EpisodesArea, ShowEntry, ShowsList};

/// Renders show summaries into the results container
///
/// Clears previous entries first, then appends one entry per show in order.
/// Each entry gets a fresh [`EntryKey`](crate::EntryKey) mapped to its show id.
pub fn render_shows(list: &mut ShowsList, shows: &[ShowSummary]) {
    list.clear();

    for show in shows {
        let key = list.next_key();
        list.push(ShowEntry {
            key,
            show_id: show.id,
            image_src: show.image.clone(),
            image_alt: show.name.clone(),
            heading: show.name.clone(),
            summary_html: show.summary.clone(),
        });
    }
}

/// Renders episode summaries into the episode area and reveals it
pub fn render_episodes(area: &mut EpisodesArea, episodes: &[EpisodeSummary]) {
    area.clear();

    for episode in episodes {
        area.push(format_episode_line(episode));
    }

    area.show();
}

/// Formats one episode as `"<name> (season <season>, number <number>)"`
pub fn format_episode_line(episode: &EpisodeSummary) -> String {
    format!(
        "{} (season {}, number {})",
        episode.name, episode.season, episode.number
    )
}
