//! UI controller wiring page events to services and renderers
//!
//! Two flows, both one-shot request → render:
//! - search submit: search, hide the episode area, render shows
//! - episodes click: resolve the entry's show id, list episodes, render them
//!
//! Each flow has a generation counter. A response that is no longer the
//! latest for its flow is dropped without touching the page.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::{Result, TvMazeError};
use crate::render::{render_episodes, render_shows};
use crate::service::{EpisodeListService, ShowSearchService};
use crate::view::{EntryKey, Page, PageSnapshot};

/// What happened to the page after a flow completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The response was rendered
    Rendered,
    /// A newer request for the same target was issued; the response was dropped
    Superseded,
}

/// Binds the search form and the per-show "Episodes" buttons
///
/// Holds the page handle it renders into; the page lock is never held
/// across a network call.
pub struct UiController<S> {
    service: S,
    page: Arc<Mutex<Page>>,
    search_generation: AtomicU64,
    episodes_generation: AtomicU64,
}

impl<S> UiController<S>
where
    S: ShowSearchService + EpisodeListService,
{
    /// Create a controller rendering into `page`
    ///
    /// # Arguments
    /// * `service` - Backend for both the search and the episodes flow
    /// * `page` - Shared page handle, also readable by the host
    pub fn new(service: S, page: Arc<Mutex<Page>>) -> Self {
        Self {
            service,
            page,
            search_generation: AtomicU64::new(0),
            episodes_generation: AtomicU64::new(0),
        }
    }

    /// Shared handle to the page this controller renders into
    pub fn page(&self) -> Arc<Mutex<Page>> {
        Arc::clone(&self.page)
    }

    /// Backend the controller calls, for requests that bypass the page
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Current markup and visibility state
    pub async fn snapshot(&self) -> PageSnapshot {
        self.page.lock().await.snapshot()
    }

    /// Types into the search box
    pub async fn set_search_term(&self, term: &str) {
        self.page.lock().await.search_term = term.to_string();
    }

    /// Sets the search box and submits the form
    ///
    /// The term searched is always `term`, even when other submissions
    /// overlap with this one.
    ///
    /// # Errors
    /// Propagates any service error
    pub async fn search_for(&self, term: &str) -> Result<RenderOutcome> {
        let generation = {
            let mut page = self.page.lock().await;
            page.search_term = term.to_string();
            self.search_generation.fetch_add(1, Ordering::SeqCst) + 1
        };
        self.submit(term.to_string(), generation).await
    }

    /// Handles a search form submission
    ///
    /// Reads the search box, runs the search, then hides the episode area
    /// and renders the results. On error the page is left untouched.
    ///
    /// # Errors
    /// Propagates any service error
    pub async fn on_search_submit(&self) -> Result<RenderOutcome> {
        let (term, generation) = {
            let page = self.page.lock().await;
            let generation = self.search_generation.fetch_add(1, Ordering::SeqCst) + 1;
            (page.search_term.clone(), generation)
        };
        self.submit(term, generation).await
    }

    async fn submit(&self, term: String, generation: u64) -> Result<RenderOutcome> {
        let shows = self.service.search(&term).await.inspect_err(|e| {
            warn!(term = %term, error = %e, "show search failed");
        })?;

        let mut page = self.page.lock().await;
        if self.search_generation.load(Ordering::SeqCst) != generation {
            debug!(term = %term, generation, "dropping superseded search response");
            return Ok(RenderOutcome::Superseded);
        }

        // Episode requests issued against the old result list are now stale
        self.episodes_generation.fetch_add(1, Ordering::SeqCst);

        page.episodes.hide();
        render_shows(&mut page.shows, &shows);
        debug!(term = %term, count = shows.len(), "rendered search results");

        Ok(RenderOutcome::Rendered)
    }

    /// Handles a click on an entry's "Episodes" button
    ///
    /// # Errors
    /// - `EntryNotFound` if the entry is not part of the current results
    /// - any service error
    pub async fn on_episodes_click(&self, entry: EntryKey) -> Result<RenderOutcome> {
        let (show_id, generation) = {
            let page = self.page.lock().await;
            let show_id = page
                .shows
                .show_id_for(entry)
                .ok_or(TvMazeError::EntryNotFound(entry.0))?;
            let generation = self.episodes_generation.fetch_add(1, Ordering::SeqCst) + 1;
            (show_id, generation)
        };
        debug!(entry = entry.0, show_id, "episodes requested");

        let episodes = self.service.list_episodes(show_id).await.inspect_err(|e| {
            warn!(show_id, error = %e, "episode listing failed");
        })?;

        let mut page = self.page.lock().await;
        if self.episodes_generation.load(Ordering::SeqCst) != generation {
            debug!(show_id, generation, "dropping superseded episodes response");
            return Ok(RenderOutcome::Superseded);
        }

        render_episodes(&mut page.episodes, &episodes);
        debug!(show_id, count = episodes.len(), "rendered episodes");

        Ok(RenderOutcome::Rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EpisodeSummary, PLACEHOLDER_IMAGE_URL, ShowSummary};
    use async_trait::async_trait;
    use std::time::Duration;

    /// Canned service; the term "slow" and show ids above 1000 respond after a delay
    #[derive(Default)]
    struct FakeService {
        searched: std::sync::Mutex<Vec<String>>,
    }

    fn show(id: u64, name: &str) -> ShowSummary {
        ShowSummary {
            id,
            name: name.to_string(),
            summary: String::new(),
            image: PLACEHOLDER_IMAGE_URL.to_string(),
        }
    }

    #[async_trait]
    impl ShowSearchService for FakeService {
        async fn search(&self, term: &str) -> Result<Vec<ShowSummary>> {
            self.searched.lock().unwrap().push(term.to_string());
            match term {
                "fail" => Err(TvMazeError::MalformedResponse("boom".to_string())),
                "slow" => {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    Ok(vec![show(1, "Slow")])
                }
                "two" => Ok(vec![show(10, "Ten"), show(1001, "Slow Show")]),
                _ => Ok(vec![show(2, term)]),
            }
        }
    }

    #[async_trait]
    impl EpisodeListService for FakeService {
        async fn list_episodes(&self, show_id: u64) -> Result<Vec<EpisodeSummary>> {
            if show_id == 404 {
                return Err(TvMazeError::ApiStatus {
                    status: 404,
                    url: "test".to_string(),
                });
            }
            if show_id > 1000 {
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
            Ok(vec![EpisodeSummary {
                id: show_id * 10,
                name: format!("Episode of {}", show_id),
                season: 1,
                number: 1,
            }])
        }
    }

    fn controller() -> UiController<FakeService> {
        UiController::new(FakeService::default(), Arc::new(Mutex::new(Page::new())))
    }

    #[tokio::test]
    async fn test_search_renders_and_hides_episodes() {
        let ui = controller();
        ui.page().lock().await.episodes.show();

        let outcome = ui.search_for("girls").await.unwrap();

        assert_eq!(outcome, RenderOutcome::Rendered);
        let page = ui.page();
        let page = page.lock().await;
        assert!(!page.episodes.is_visible());
        assert_eq!(page.shows.len(), 1);
        assert_eq!(page.shows.entries()[0].heading, "girls");
    }

    #[tokio::test]
    async fn test_submit_reads_search_box() {
        let ui = controller();
        ui.set_search_term("typed").await;
        ui.on_search_submit().await.unwrap();

        let snapshot = ui.snapshot().await;
        assert!(snapshot.shows_html.contains("typed"));
    }

    #[tokio::test]
    async fn test_failed_search_leaves_page_untouched() {
        let ui = controller();
        ui.search_for("first").await.unwrap();
        let before = ui.snapshot().await;

        let result = ui.search_for("fail").await;

        assert!(matches!(result, Err(TvMazeError::MalformedResponse(_))));
        assert_eq!(ui.snapshot().await, before);
    }

    #[tokio::test]
    async fn test_episodes_click_renders_episodes() {
        let ui = controller();
        ui.search_for("girls").await.unwrap();
        let key = ui.page().lock().await.shows.entries()[0].key;

        let outcome = ui.on_episodes_click(key).await.unwrap();

        assert_eq!(outcome, RenderOutcome::Rendered);
        let snapshot = ui.snapshot().await;
        assert!(snapshot.episodes_visible);
        assert_eq!(
            snapshot.episodes_html,
            "<li>Episode of 2 (season 1, number 1)</li>"
        );
    }

    #[tokio::test]
    async fn test_episodes_click_unknown_entry() {
        let ui = controller();
        let result = ui.on_episodes_click(EntryKey(42)).await;
        assert!(matches!(result, Err(TvMazeError::EntryNotFound(42))));
    }

    #[tokio::test]
    async fn test_episodes_click_after_new_search_is_stale() {
        let ui = controller();
        ui.search_for("first").await.unwrap();
        let old_key = ui.page().lock().await.shows.entries()[0].key;
        ui.search_for("second").await.unwrap();

        let result = ui.on_episodes_click(old_key).await;
        assert!(matches!(result, Err(TvMazeError::EntryNotFound(_))));
    }

    #[tokio::test]
    async fn test_failed_episode_listing_leaves_page_untouched() {
        let ui = controller();
        {
            let page = ui.page();
            let mut page = page.lock().await;
            crate::render::render_shows(&mut page.shows, &[show(404, "Missing")]);
        }
        let key = ui.page().lock().await.shows.entries()[0].key;
        let before = ui.snapshot().await;

        let result = ui.on_episodes_click(key).await;

        assert!(matches!(result, Err(TvMazeError::ApiStatus { status: 404, .. })));
        assert_eq!(ui.snapshot().await, before);
    }

    #[tokio::test]
    async fn test_superseded_search_response_is_dropped() {
        let ui = controller();

        let (slow, fast) = tokio::join!(ui.search_for("slow"), ui.search_for("fast"));

        assert_eq!(slow.unwrap(), RenderOutcome::Superseded);
        assert_eq!(fast.unwrap(), RenderOutcome::Rendered);
        let page = ui.page();
        let page = page.lock().await;
        assert_eq!(page.shows.len(), 1);
        assert_eq!(page.shows.entries()[0].heading, "fast");
    }

    #[tokio::test]
    async fn test_superseded_episode_response_is_dropped() {
        let ui = controller();
        ui.search_for("two").await.unwrap();
        let (fast_key, slow_key) = {
            let page = ui.page();
            let page = page.lock().await;
            (page.shows.entries()[0].key, page.shows.entries()[1].key)
        };

        let (slow, fast) = tokio::join!(
            ui.on_episodes_click(slow_key),
            ui.on_episodes_click(fast_key)
        );

        assert_eq!(slow.unwrap(), RenderOutcome::Superseded);
        assert_eq!(fast.unwrap(), RenderOutcome::Rendered);
        let snapshot = ui.snapshot().await;
        assert_eq!(
            snapshot.episodes_html,
            "<li>Episode of 10 (season 1, number 1)</li>"
        );
    }

    #[tokio::test]
    async fn test_search_invalidates_pending_episode_request() {
        let ui = controller();
        ui.search_for("two").await.unwrap();
        let slow_key = ui.page().lock().await.shows.entries()[1].key;

        let (episodes, search) = tokio::join!(ui.on_episodes_click(slow_key), ui.search_for("new"));

        assert_eq!(search.unwrap(), RenderOutcome::Rendered);
        assert_eq!(episodes.unwrap(), RenderOutcome::Superseded);
        assert!(!ui.snapshot().await.episodes_visible);
    }

    #[tokio::test]
    async fn test_overlapping_searches_send_their_own_terms() {
        let ui = controller();
        let page = ui.page();
        let guard = page.lock().await;

        let searches = async { tokio::join!(ui.search_for("a"), ui.search_for("b")) };
        let release = async move {
            tokio::task::yield_now().await;
            drop(guard);
        };
        let ((a, b), ()) = tokio::join!(searches, release);

        let mut searched = ui.service().searched.lock().unwrap().clone();
        searched.sort();
        assert_eq!(searched, vec!["a".to_string(), "b".to_string()]);

        let winner = match (a.unwrap(), b.unwrap()) {
            (RenderOutcome::Rendered, RenderOutcome::Superseded) => "a",
            (RenderOutcome::Superseded, RenderOutcome::Rendered) => "b",
            other => panic!("Expected exactly one rendered search, got {:?}", other),
        };
        assert_eq!(page.lock().await.shows.entries()[0].heading, winner);
    }

    #[tokio::test]
    async fn test_submit_generation_follows_search_box_order() {
        let ui = controller();
        ui.set_search_term("slow").await;
        let (first, second) = tokio::join!(ui.on_search_submit(), ui.search_for("second"));

        assert_eq!(first.unwrap(), RenderOutcome::Superseded);
        assert_eq!(second.unwrap(), RenderOutcome::Rendered);
        assert_eq!(
            *ui.service().searched.lock().unwrap(),
            vec!["slow".to_string(), "second".to_string()]
        );
    }
}
