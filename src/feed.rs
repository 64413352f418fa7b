//! Feed Paging State
//!
//! Owns the load guard the grid leaves to its caller: one request in flight
//! at a time, nothing after exhaustion, stale responses dropped.

use std::collections::HashSet;

use crate::models::{Pin, PinId};

/// Category that maps to the unfiltered feed
pub const ALL_CATEGORY: &str = "All";

/// Pins from the end of the feed whose visibility triggers a prefetch
pub const PREFETCH_WINDOW: usize = 5;

/// One page fetch issued by `FeedState::begin_load`
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub category: String,
    /// Zero-based
    pub page: u32,
    pub limit: u32,
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct FeedState {
    pins: Vec<Pin>,
    category: String,
    next_page: u32,
    loading: bool,
    has_more: bool,
    error: Option<String>,
    limit: u32,
    max_pages: Option<u32>,
    generation: u64,
}

impl FeedState {
    pub fn new(category: &str, limit: u32, max_pages: Option<u32>) -> Self {
        Self {
            pins: Vec::new(),
            category: category.to_string(),
            next_page: 0,
            loading: false,
            has_more: true,
            error: None,
            limit: limit.max(1),
            max_pages,
            generation: 0,
        }
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Claim the next page. `None` while a load is in flight, after
    /// exhaustion, or while an error is pending.
    pub fn begin_load(&mut self) -> Option<PageRequest> {
        if self.loading || !self.has_more || self.error.is_some() {
            return None;
        }
        self.loading = true;
        Some(PageRequest {
            category: self.category.clone(),
            page: self.next_page,
            limit: self.limit,
            generation: self.generation,
        })
    }

    /// Apply a fetched page. Returns false if the request is stale.
    pub fn complete(&mut self, request: &PageRequest, pins: Vec<Pin>) -> bool {
        if !self.is_current(request) {
            return false;
        }
        let returned = pins.len();

        let before = self.pins.len();
        let mut known: HashSet<PinId> = self.pins.iter().map(|p| p.id.clone()).collect();
        self.pins
            .extend(pins.into_iter().filter(|p| known.insert(p.id.clone())));
        let added = self.pins.len() - before;

        // A full page of nothing new means the server is not paging
        self.next_page = request.page + 1;
        let under_cap = self.max_pages.map_or(true, |max| self.next_page < max);
        self.has_more = returned >= request.limit as usize && added > 0 && under_cap;
        self.loading = false;
        true
    }

    /// Record a failed fetch. Returns false if the request is stale.
    pub fn fail(&mut self, request: &PageRequest, message: String) -> bool {
        if !self.is_current(request) {
            return false;
        }
        self.loading = false;
        self.error = Some(message);
        true
    }

    /// Allow the failed page to be requested again
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Start over, e.g. for a new category. In-flight responses become stale.
    pub fn reset(&mut self, category: &str) {
        self.pins.clear();
        self.category = category.to_string();
        self.next_page = 0;
        self.loading = false;
        self.has_more = true;
        self.error = None;
        self.generation += 1;
    }

    /// Whether `id` is among the last `window` pins
    pub fn is_near_end(&self, id: &PinId, window: usize) -> bool {
        let start = self.pins.len().saturating_sub(window);
        self.pins[start..].iter().any(|p| &p.id == id)
    }

    fn is_current(&self, request: &PageRequest) -> bool {
        request.generation == self.generation && request.page == self.next_page && self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_pins(start: u32, count: u32) -> Vec<Pin> {
        (start..start + count)
            .map(|i| Pin {
                id: PinId(i.to_string()),
                title: None,
                user: None,
                image: None,
                likes: 0,
                saves: 0,
                aspect_ratio: Some(1.0),
            })
            .collect()
    }

    #[test]
    fn test_single_request_in_flight() {
        let mut feed = FeedState::new(ALL_CATEGORY, 3, None);
        let req = feed.begin_load().expect("first load");
        assert_eq!(req.page, 0);
        assert!(feed.is_loading());
        assert!(feed.begin_load().is_none());

        assert!(feed.complete(&req, make_pins(0, 3)));
        assert!(!feed.is_loading());
        assert_eq!(feed.begin_load().map(|r| r.page), Some(1));
    }

    #[test]
    fn test_short_page_exhausts_feed() {
        let mut feed = FeedState::new(ALL_CATEGORY, 3, None);
        let req = feed.begin_load().unwrap();
        feed.complete(&req, make_pins(0, 2));
        assert!(!feed.has_more());
        assert!(feed.begin_load().is_none());
    }

    #[test]
    fn test_max_pages_cap() {
        let mut feed = FeedState::new(ALL_CATEGORY, 2, Some(2));
        let first = feed.begin_load().unwrap();
        feed.complete(&first, make_pins(0, 2));
        assert!(feed.has_more());

        let second = feed.begin_load().unwrap();
        feed.complete(&second, make_pins(2, 2));
        assert!(!feed.has_more());
        assert_eq!(feed.pins().len(), 4);
    }

    #[test]
    fn test_stale_response_dropped_after_reset() {
        let mut feed = FeedState::new(ALL_CATEGORY, 2, None);
        let old = feed.begin_load().unwrap();
        feed.reset("Photography");

        assert!(!feed.complete(&old, make_pins(0, 2)));
        assert!(feed.pins().is_empty());

        let fresh = feed.begin_load().unwrap();
        assert_eq!(fresh.category, "Photography");
        assert_eq!(fresh.page, 0);
        assert!(feed.complete(&fresh, make_pins(10, 2)));
        assert_eq!(feed.pins().len(), 2);
    }

    #[test]
    fn test_reset_same_category_still_invalidates() {
        let mut feed = FeedState::new(ALL_CATEGORY, 2, None);
        let old = feed.begin_load().unwrap();
        feed.reset(ALL_CATEGORY);
        let fresh = feed.begin_load().unwrap();
        assert_ne!(old, fresh);
        assert!(!feed.complete(&old, make_pins(0, 2)));
        assert!(feed.complete(&fresh, make_pins(0, 2)));
    }

    #[test]
    fn test_duplicate_ids_not_appended() {
        let mut feed = FeedState::new(ALL_CATEGORY, 3, None);
        let req = feed.begin_load().unwrap();
        feed.complete(&req, make_pins(0, 3));
        let req = feed.begin_load().unwrap();
        feed.complete(&req, make_pins(2, 3));

        let ids: Vec<&str> = feed.pins().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);
        assert!(feed.has_more());
    }

    #[test]
    fn test_repeated_page_stops_feed() {
        let mut feed = FeedState::new(ALL_CATEGORY, 3, None);
        let req = feed.begin_load().unwrap();
        feed.complete(&req, make_pins(0, 3));
        let req = feed.begin_load().unwrap();
        feed.complete(&req, make_pins(0, 3));
        assert_eq!(feed.pins().len(), 3);
        assert!(!feed.has_more());
    }

    #[test]
    fn test_failure_blocks_until_cleared() {
        let mut feed = FeedState::new(ALL_CATEGORY, 3, None);
        let req = feed.begin_load().unwrap();
        assert!(feed.fail(&req, "Server returned status 502".to_string()));
        assert_eq!(feed.error(), Some("Server returned status 502"));
        assert!(feed.begin_load().is_none());

        feed.clear_error();
        let retry = feed.begin_load().unwrap();
        assert_eq!(retry.page, 0);
    }

    #[test]
    fn test_near_end_window() {
        let mut feed = FeedState::new(ALL_CATEGORY, 10, None);
        let req = feed.begin_load().unwrap();
        feed.complete(&req, make_pins(0, 10));

        assert!(feed.is_near_end(&PinId::from("9"), PREFETCH_WINDOW));
        assert!(feed.is_near_end(&PinId::from("5"), PREFETCH_WINDOW));
        assert!(!feed.is_near_end(&PinId::from("4"), PREFETCH_WINDOW));
        assert!(!feed.is_near_end(&PinId::from("missing"), PREFETCH_WINDOW));
    }
}
