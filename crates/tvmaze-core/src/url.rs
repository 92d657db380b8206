//! URL helper functions for the TVmaze API
//!
//! Provides functions for building the search and episode-listing URLs.

/// Public TVmaze API root
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Builds the show search URL for a given term
///
/// The term is percent-encoded and passed through unvalidated; an empty
/// term yields an empty `q` parameter.
///
/// # Arguments
/// * `base_url` - API root (e.g., "https://api.tvmaze.com")
/// * `term` - Free-text search term
///
/// # Example
/// ```
/// use tvmaze_core::url::build_search_url;
/// let url = build_search_url("https://api.tvmaze.com", "the office");
/// assert_eq!(url, "https://api.tvmaze.com/search/shows?q=the%20office");
/// ```
pub fn build_search_url(base_url: &str, term: &str) -> String {
    let encoded = urlencoding::encode(term);
    format!("{}/search/shows?q={}", trim_base(base_url), encoded)
}

/// Builds the episode listing URL for a show
///
/// # Example
/// ```
/// use tvmaze_core::url::build_episodes_url;
/// let url = build_episodes_url("https://api.tvmaze.com", 139);
/// assert_eq!(url, "https://api.tvmaze.com/shows/139/episodes");
/// ```
pub fn build_episodes_url(base_url: &str, show_id: u64) -> String {
    format!("{}/shows/{}/episodes", trim_base(base_url), show_id)
}

fn trim_base(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}
