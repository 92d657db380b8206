//! Show search and episode listing services
//!
//! Combines the HTTP client with the JSON parsers. The two service traits
//! are the seam the [`UiController`](crate::UiController) is generic over.

use async_trait::async_trait;
use tracing::debug;

use crate::client::{ClientConfig, TvMazeClient};
use crate::error::Result;
use crate::parser::{parse_episodes, parse_search_results};
use crate::types::{EpisodeSummary, ShowSummary};
use crate::url::{build_episodes_url, build_search_url};

/// Searches shows by free-text term
#[async_trait]
pub trait ShowSearchService: Send + Sync {
    /// Returns normalized shows in upstream relevance order
    async fn search(&self, term: &str) -> Result<Vec<ShowSummary>>;
}

/// Lists the episodes of one show
#[async_trait]
pub trait EpisodeListService: Send + Sync {
    /// Returns normalized episodes in upstream order
    async fn list_episodes(&self, show_id: u64) -> Result<Vec<EpisodeSummary>>;
}

/// TVmaze-backed implementation of both services
pub struct TvMazeService {
    client: TvMazeClient,
}

impl TvMazeService {
    /// Create a new service with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: TvMazeClient::new()?,
        })
    }

    /// Create a new service with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: TvMazeClient::with_config(config)?,
        })
    }
}

#[async_trait]
impl ShowSearchService for TvMazeService {
    /// Search for shows by term
    ///
    /// The term is forwarded as-is, including an empty string.
    ///
    /// # Errors
    /// - `HttpError` if the network request fails
    /// - `ApiStatus` if the API answers with a non-2xx status
    /// - `MalformedResponse` if the body is not a list of search hits
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> tvmaze_core::Result<()> {
    /// use tvmaze_core::{ShowSearchService, TvMazeService};
    /// let service = TvMazeService::new()?;
    /// for show in service.search("girls").await? {
    ///     println!("{}: {}", show.id, show.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn search(&self, term: &str) -> Result<Vec<ShowSummary>> {
        let url = build_search_url(self.client.base_url(), term);
        let body = self.client.fetch(&url).await?;
        let shows = parse_search_results(&body)?;
        debug!(term, count = shows.len(), "search results parsed");
        Ok(shows)
    }
}

#[async_trait]
impl EpisodeListService for TvMazeService {
    /// Get the episode list of a show
    ///
    /// # Errors
    /// Same classes as [`ShowSearchService::search`]
    async fn list_episodes(&self, show_id: u64) -> Result<Vec<EpisodeSummary>> {
        let url = build_episodes_url(self.client.base_url(), show_id);
        let body = self.client.fetch(&url).await?;
        let episodes = parse_episodes(&body)?;
        debug!(show_id, count = episodes.len(), "episodes parsed");
        Ok(episodes)
    }
}
