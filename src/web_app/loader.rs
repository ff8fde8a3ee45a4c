// web_app/loader.rs - Paginated item list loader
//
// Pages are fetched with (skip, take), merged into an owned ListState that
// keeps first-seen order and drops repeated identifiers, and filtered on
// demand. Nothing here does I/O; pages come from a PageSource.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::web_app::error::FinderError;
use crate::web_app::model::{Item, ItemId, ItemPage, TypeFilter};

/// A validated `(skip, take)` pair
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub skip: u32,
    pub take: u32,
}

impl PageRequest {
    pub fn new(skip: u32, take: u32) -> Result<Self, FinderError> {
        if take == 0 {
            return Err(FinderError::InvalidRequest(
                "take must be greater than zero".to_string(),
            ));
        }
        Ok(PageRequest { skip, take })
    }
}

/// Anything that can serve a page of items.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<ItemPage, FinderError>;
}

/// Validate `(skip, take)` and fetch one page from `source`
pub async fn fetch_page<S: PageSource>(
    source: &S,
    skip: u32,
    take: u32,
) -> Result<ItemPage, FinderError> {
    let request = PageRequest::new(skip, take)?;
    source.fetch_page(request).await
}

/// Client-held aggregate of one list view
#[derive(Clone, Debug, PartialEq)]
pub struct ListState {
    items: Vec<Item>,
    seen: HashSet<ItemId>,
    cursor: u32,
    has_more: bool,
    total: u32,
    in_flight: bool,
}

impl Default for ListState {
    fn default() -> Self {
        ListState {
            items: Vec::new(),
            seen: HashSet::new(),
            cursor: 0,
            has_more: true,
            total: 0,
            in_flight: false,
        }
    }
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items fetched so far (before de-duplication)
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Merge a page fetched at offset `skip`.
    ///
    /// Items whose identifier is already present are dropped. `has_more`
    /// turns false once `skip + page.items.len()` reaches the reported total
    /// and stays false afterwards.
    pub fn append_page(mut self, skip: u32, page: ItemPage) -> Self {
        let fetched = u32::try_from(page.items.len()).unwrap_or(u32::MAX);
        let reached_end = skip.saturating_add(fetched) >= page.total_items_count;

        for item in page.items {
            if self.seen.insert(item.id.clone()) {
                self.items.push(item);
            }
        }

        self.cursor = self.cursor.max(skip.saturating_add(fetched));
        // The service may have grown between pages; never report fewer than we hold.
        self.total = page
            .total_items_count
            .max(u32::try_from(self.items.len()).unwrap_or(u32::MAX));
        if reached_end {
            self.has_more = false;
        }
        self
    }

    /// Start a fetch of the next page.
    ///
    /// Returns `None` while another fetch is in flight or when the list is
    /// exhausted; otherwise marks the state as loading.
    pub fn begin_fetch(&mut self, take: u32) -> Option<PageRequest> {
        if self.in_flight || !self.has_more {
            return None;
        }
        let request = PageRequest::new(self.cursor, take).ok()?;
        self.in_flight = true;
        Some(request)
    }

    pub fn complete_fetch(&mut self, request: PageRequest, page: ItemPage) {
        let state = std::mem::take(self);
        *self = state.append_page(request.skip, page);
        self.in_flight = false;
    }

    /// A failed fetch only releases the in-flight flag
    pub fn abort_fetch(&mut self) {
        self.in_flight = false;
    }

    /// Items whose name or description contains `search` (case-insensitive)
    /// and whose type passes `filter`
    pub fn filter_view(&self, search: &str, filter: TypeFilter) -> Vec<&Item> {
        let needle = search.to_lowercase();
        self.items
            .iter()
            .filter(|item| filter.matches(item.item_type) && item.matches_search(&needle))
            .collect()
    }
}

/// Result of one `load_more` call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page arrived; the number of new (non-duplicate) items
    Appended(usize),
    /// Nothing was requested: a fetch is pending or the list is exhausted
    Skipped,
}

/// Fetch the next page from `source` and merge it into `state`
pub async fn load_more<S: PageSource>(
    source: &S,
    state: &mut ListState,
    take: u32,
) -> Result<LoadOutcome, FinderError> {
    // A zero take is an error, not a skipped load.
    PageRequest::new(state.cursor(), take)?;
    let Some(request) = state.begin_fetch(take) else {
        return Ok(LoadOutcome::Skipped);
    };

    let before = state.len();
    match source.fetch_page(request).await {
        Ok(page) => {
            tracing::debug!(
                "Page at skip={} returned {} of {} items",
                request.skip,
                page.items.len(),
                page.total_items_count
            );
            state.complete_fetch(request, page);
            Ok(LoadOutcome::Appended(state.len() - before))
        }
        Err(e) => {
            tracing::warn!("Page fetch at skip={} failed: {}", request.skip, e);
            state.abort_fetch();
            Err(e)
        }
    }
}
