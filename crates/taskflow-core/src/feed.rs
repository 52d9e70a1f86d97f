//! Paged Feeds
//!
//! Pages fetched from the backend are concatenated into one flat sequence in
//! server order. Loading is forward-only: a feed asks for the next page, never
//! an earlier one, and nothing is reordered or deduplicated client-side.
//! Reloading after a mutation re-requests every page already loaded and swaps
//! the whole sequence at once.

use serde::{Deserialize, Serialize};

use crate::task::Entity;

/// One page as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    /// Next page number, `None` on the last page
    #[serde(rename = "nextPage", default)]
    pub next_page: Option<u32>,
}

/// Ticket for one in-flight page fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FeedStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    /// First page in flight with nothing to show
    Loading,
    /// First page in flight, previous items still shown
    Refreshing,
    FetchingNext,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feed<T> {
    items: Vec<T>,
    next_page: Option<u32>,
    status: FeedStatus,
    generation: u64,
    pages_loaded: u32,
}

impl<T> Default for Feed<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_page: None,
            status: FeedStatus::Idle,
            generation: 0,
            pages_loaded: 0,
        }
    }
}

impl<T: Entity> Feed<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn status(&self) -> &FeedStatus {
        &self.status
    }

    pub fn is_loaded(&self) -> bool {
        !matches!(self.status, FeedStatus::Idle)
    }

    /// Nothing to show yet and the first page is on its way
    pub fn is_loading(&self) -> bool {
        matches!(self.status, FeedStatus::Idle | FeedStatus::Loading)
    }

    pub fn is_fetching_next(&self) -> bool {
        matches!(self.status, FeedStatus::FetchingNext)
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }

    pub fn pages_loaded(&self) -> u32 {
        self.pages_loaded
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FeedStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Start over from page 1. Any request still in flight becomes stale.
    pub fn begin_refresh(&mut self) -> PageRequest {
        self.generation += 1;
        self.status = if self.items.is_empty() {
            FeedStatus::Loading
        } else {
            FeedStatus::Refreshing
        };
        PageRequest {
            page: 1,
            generation: self.generation,
        }
    }

    /// Re-request pages `1..=n` where `n` is the number of pages loaded so
    /// far (at least one). Any request still in flight becomes stale.
    pub fn begin_refresh_all(&mut self) -> Vec<PageRequest> {
        let first = self.begin_refresh();
        (1..=self.pages_loaded.max(1))
            .map(|page| PageRequest { page, ..first })
            .collect()
    }

    /// Swap in the pages fetched for a [`Feed::begin_refresh_all`] batch.
    /// `pages` may stop short when the backend runs out of pages; the last
    /// one received decides whether more can be loaded.
    pub fn complete_refresh(&mut self, requests: &[PageRequest], pages: Vec<Page<T>>) -> bool {
        match requests.first() {
            Some(first) if first.generation == self.generation => {}
            _ => {
                tracing::debug!(pages = requests.len(), "dropping stale refresh");
                return false;
            }
        }
        self.next_page = pages.last().and_then(|page| page.next_page);
        self.pages_loaded = pages.len() as u32;
        self.items = pages.into_iter().flat_map(|page| page.data).collect();
        self.status = FeedStatus::Ready;
        true
    }

    /// Ask for the page after the last one loaded.
    /// `None` on the last page or while another fetch is running.
    pub fn next_request(&mut self) -> Option<PageRequest> {
        let page = self.next_page?;
        if matches!(
            self.status,
            FeedStatus::Loading | FeedStatus::Refreshing | FeedStatus::FetchingNext
        ) {
            return None;
        }
        self.status = FeedStatus::FetchingNext;
        Some(PageRequest {
            page,
            generation: self.generation,
        })
    }

    /// Merge a fetched page. Page 1 replaces the sequence, later pages are
    /// appended as-is. Returns `false` for stale responses, which are dropped.
    pub fn complete(&mut self, request: PageRequest, page: Page<T>) -> bool {
        if request.generation != self.generation {
            tracing::debug!(page = request.page, "dropping stale page response");
            return false;
        }
        if request.page <= 1 {
            self.items = page.data;
            self.pages_loaded = 1;
        } else {
            self.items.extend(page.data);
            self.pages_loaded += 1;
        }
        self.next_page = page.next_page;
        self.status = FeedStatus::Ready;
        true
    }

    /// Record a failed fetch; the loaded items are kept
    pub fn fail(&mut self, request: PageRequest, message: impl Into<String>) -> bool {
        if request.generation != self.generation {
            return false;
        }
        self.status = FeedStatus::Failed(message.into());
        true
    }

    /// Replace an item in place; `false` if absent
    pub fn replace(&mut self, item: T) -> bool {
        let id = item.id();
        match self.items.iter_mut().find(|existing| existing.id() == id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Remove every item with `id`, returning the first one removed
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let position = self.items.iter().position(|item| item.id() == id)?;
        let removed = self.items.remove(position);
        self.items.retain(|item| item.id() != id);
        Some(removed)
    }

    pub fn find(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Show a freshly created or moved item at the top
    pub fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
    }
}
