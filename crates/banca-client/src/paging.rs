//! # Paginated View State
//!
//! Caller-side state machine for a paginated listing: the current page
//! request, the last envelope, a loading flag, and search mode.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      PagedView State Machine                            │
//! │                                                                         │
//! │  begin_load() ──► loading = true                                        │
//! │       │                                                                 │
//! │       ├── complete(page) ──► envelope replaced, loading = false         │
//! │       └── fail()         ──► envelope UNCHANGED, loading = false        │
//! │                                                                         │
//! │  go_to_page(n)      → updates the request index (no-op in search mode)  │
//! │  set_page_size(n)   → request index reset to 0                          │
//! │  apply_filter()     → request index reset to 0                          │
//! │                                                                         │
//! │  enter_search(hit)  → synthesized 1- or 0-element envelope,             │
//! │                       first = last = true, navigation disabled          │
//! │  clear_search()     → back to the page-0 listing request                │
//! │                                                                         │
//! │  The view never fetches by itself: the caller runs the service call     │
//! │  and feeds the outcome back in, so the async edge stays in one place.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! let mut view = PagedView::new(PageRequest::new("createdAt", SortDirection::Desc));
//!
//! view.begin_load();
//! match accounts.paginated(view.request()).await {
//!     Ok(page) => view.complete(page),
//!     Err(e) => {
//!         view.fail();
//!         message.set(session.dispatch_error(&e));
//!     }
//! }
//! ```

use banca_core::page::{Page, PageRequest};

// =============================================================================
// Paged View
// =============================================================================

/// View state for one paginated listing.
#[derive(Debug, Clone)]
pub struct PagedView<T> {
    request: PageRequest,
    page: Option<Page<T>>,
    loading: bool,
    searching: bool,
}

impl<T> PagedView<T> {
    /// Fresh view; nothing loaded yet.
    pub fn new(request: PageRequest) -> Self {
        PagedView {
            request,
            page: None,
            loading: false,
            searching: false,
        }
    }

    /// The request the next fetch should use.
    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    /// The last successfully loaded (or synthesized) envelope.
    pub fn page(&self) -> Option<&Page<T>> {
        self.page.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether a single-entity lookup currently substitutes for the listing.
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    // =========================================================================
    // Fetch Lifecycle
    // =========================================================================

    /// Marks a fetch in flight.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// A fetch resolved: the envelope is replaced and loading cleared.
    pub fn complete(&mut self, page: Page<T>) {
        self.page = Some(page);
        self.loading = false;
    }

    /// A fetch failed: loading cleared, previous envelope (or the initial
    /// empty state) stays on display.
    pub fn fail(&mut self) {
        self.loading = false;
    }

    // =========================================================================
    // Navigation & Filters
    // =========================================================================

    /// Moves the request to another page index. Refused (no-op, not an
    /// error) while search mode is active. Returns whether it applied.
    pub fn go_to_page(&mut self, number: u32) -> bool {
        if self.searching {
            return false;
        }
        self.request.page = number;
        true
    }

    /// Changes the page size; the index resets to 0 per the pagination
    /// policy.
    pub fn set_page_size(&mut self, size: u32) {
        self.request.size = size;
        self.request.page = 0;
    }

    /// Signals that a filter changed; the index resets to 0 before the
    /// caller refetches.
    pub fn apply_filter(&mut self) {
        self.request.page = 0;
    }

    // =========================================================================
    // Search Mode
    // =========================================================================

    /// Replaces the listing with an exact-lookup result: a one-element
    /// envelope for a hit, a zero-element envelope for a miss. Navigation
    /// stays disabled until [`clear_search`](PagedView::clear_search).
    pub fn enter_search(&mut self, result: Option<T>) {
        self.page = Some(match result {
            Some(item) => Page::singleton(item),
            None => Page::empty(),
        });
        self.searching = true;
        self.loading = false;
    }

    /// Leaves search mode and rewinds the request to page 0; the caller
    /// refetches the regular listing.
    pub fn clear_search(&mut self) {
        self.searching = false;
        self.request.page = 0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use banca_core::page::SortDirection;

    fn listing_page(number: u32, total_pages: u32, content: Vec<&str>) -> Page<String> {
        let len = content.len();
        Page {
            content: content.into_iter().map(String::from).collect(),
            number,
            size: 10,
            total_elements: (total_pages as u64) * 10,
            total_pages,
            number_of_elements: len as u32,
            first: number == 0,
            last: number + 1 == total_pages,
            empty: len == 0,
        }
    }

    fn view() -> PagedView<String> {
        PagedView::new(PageRequest::new("createdAt", SortDirection::Desc))
    }

    #[test]
    fn test_fetch_lifecycle_clears_loading_both_ways() {
        let mut view = view();

        view.begin_load();
        assert!(view.is_loading());
        view.complete(listing_page(0, 3, vec!["a", "b"]));
        assert!(!view.is_loading());

        view.begin_load();
        view.fail();
        assert!(!view.is_loading());
        // Previous envelope stays on display after the failure
        assert_eq!(view.page().unwrap().number, 0);
    }

    #[test]
    fn test_same_page_twice_is_deterministic() {
        let mut view = view();
        view.go_to_page(1);
        view.complete(listing_page(1, 3, vec!["c", "d"]));
        let first = view.page().unwrap().clone();

        view.go_to_page(1);
        view.complete(listing_page(1, 3, vec!["c", "d"]));
        let second = view.page().unwrap();

        assert_eq!(second.number, first.number);
        assert_eq!(second.total_elements, first.total_elements);
        assert_eq!(second.content, first.content);
    }

    #[test]
    fn test_search_mode_round_trip() {
        let mut view = view();
        view.go_to_page(2);
        view.complete(listing_page(2, 5, vec!["x"]));

        // Exact lookup hit: synthesized singleton, navigation refused
        view.enter_search(Some("found".to_string()));
        let page = view.page().unwrap();
        assert!(page.first && page.last);
        assert_eq!(page.total_pages, 1);
        assert!(view.is_searching());
        assert!(!view.go_to_page(3));
        assert_eq!(view.request().page, 2); // untouched by the refused call

        // Clearing returns to the page-0 listing request
        view.clear_search();
        assert!(!view.is_searching());
        assert_eq!(view.request().page, 0);
        assert!(view.go_to_page(1));
    }

    #[test]
    fn test_search_miss_synthesizes_empty_envelope() {
        let mut view = view();
        view.enter_search(None);

        let page = view.page().unwrap();
        assert!(page.empty);
        assert_eq!(page.total_pages, 0);
        assert!(page.first && page.last);
        assert!(page.is_consistent());
    }

    #[test]
    fn test_size_and_filter_changes_reset_the_index() {
        let mut view = view();
        view.go_to_page(4);

        view.set_page_size(50);
        assert_eq!(view.request().page, 0);
        assert_eq!(view.request().size, 50);

        view.go_to_page(2);
        view.apply_filter();
        assert_eq!(view.request().page, 0);
    }
}
