//! Document view model
//!
//! In-memory stand-in for the host page: a search box, the show results
//! container and the episode area. Renderers mutate it; the Tauri front end
//! receives it as markup through [`Page::snapshot`].

use std::collections::HashMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// Opaque identity of one rendered show entry
///
/// Keys increase monotonically and are never reused, so a key from a
/// superseded render does not resolve against the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryKey(pub u64);

/// One rendered show in the results container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowEntry {
    pub key: EntryKey,
    pub show_id: u64,
    pub image_src: String,
    pub image_alt: String,
    pub heading: String,
    /// Summary markup, inserted as-is
    pub summary_html: String,
}

/// Results container for show entries
#[derive(Debug, Default)]
pub struct ShowsList {
    entries: Vec<ShowEntry>,
    show_ids: HashMap<EntryKey, u64>,
    next_key: u64,
}

impl ShowsList {
    /// Rendered entries in display order
    pub fn entries(&self) -> &[ShowEntry] {
        &self.entries
    }

    /// Number of rendered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no show is rendered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Show id behind a rendered entry, if the entry is still on the page
    pub fn show_id_for(&self, key: EntryKey) -> Option<u64> {
        self.show_ids.get(&key).copied()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.show_ids.clear();
    }

    pub(crate) fn next_key(&mut self) -> EntryKey {
        self.next_key += 1;
        EntryKey(self.next_key)
    }

    pub(crate) fn push(&mut self, entry: ShowEntry) {
        self.show_ids.insert(entry.key, entry.show_id);
        self.entries.push(entry);
    }

    /// Serialize the entries as the host page's show markup
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for entry in &self.entries {
            let _ = write!(
                html,
                concat!(
                    r#"<div data-show-id="{id}" data-entry="{key}" class="Show col-md-12 col-lg-6 mb-4">"#,
                    r#"<div class="media">"#,
                    r#"<img src="{src}" alt="{alt}" class="w-25 me-3">"#,
                    r#"<div class="media-body">"#,
                    r#"<h5 class="text-primary">{heading}</h5>"#,
                    r#"<div><small>{summary}</small></div>"#,
                    r#"<button class="btn btn-outline-light btn-sm Show-getEpisodes" data-entry="{key}">Episodes</button>"#,
                    r#"</div></div></div>"#,
                ),
                id = entry.show_id,
                key = entry.key.0,
                src = escape_html(&entry.image_src),
                alt = escape_html(&entry.image_alt),
                heading = escape_html(&entry.heading),
                summary = entry.summary_html,
            );
        }
        html
    }
}

/// Secondary region listing episodes of the last selected show
#[derive(Debug, Default)]
pub struct EpisodesArea {
    items: Vec<String>,
    visible: bool,
}

impl EpisodesArea {
    /// Rendered episode lines in display order
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Whether the area is currently shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Reveal the area
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the area; its items are kept
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    pub(crate) fn push(&mut self, item: String) {
        self.items.push(item);
    }

    /// Serialize the items as `<li>` elements
    pub fn to_html(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("<li>{}</li>", escape_html(item)))
            .collect()
    }
}

/// The whole document: search box, results and episode area
#[derive(Debug, Default)]
pub struct Page {
    pub search_term: String,
    pub shows: ShowsList,
    pub episodes: EpisodesArea,
}

impl Page {
    /// Create an empty page with the episode area hidden
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup and visibility state for the front end
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            shows_html: self.shows.to_html(),
            episodes_html: self.episodes.to_html(),
            episodes_visible: self.episodes.is_visible(),
        }
    }
}

/// Serialized page state sent across the Tauri boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub shows_html: String,
    pub episodes_html: String,
    pub episodes_visible: bool,
}

/// Escapes text for HTML text and attribute positions
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
