//! # Page Envelope
//!
//! Deterministic translation between a page request and the server's page
//! envelope.
//!
//! ## Pagination Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Pagination Round Trip                               │
//! │                                                                         │
//! │  PageRequest { page: 2, size: 10, sortBy: "createdAt", sortDir: DESC }  │
//! │       │                                                                 │
//! │       ▼  query_params()                                                 │
//! │  ?page=2&size=10&sortBy=createdAt&sortDir=DESC[&startDate=&endDate=]    │
//! │       │                                                                 │
//! │       ▼  server                                                         │
//! │  Page { content: [..], number: 2, totalPages: 7, first: false,          │
//! │         last: false, totalElements: 64, numberOfElements: 10 }          │
//! │                                                                         │
//! │  INVARIANTS                                                             │
//! │    content.len() == numberOfElements                                    │
//! │    first  ⇔  number == 0                                                │
//! │    last   ⇔  number == totalPages - 1  (or totalPages == 0)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Search mode (single-entity lookup replacing a listing) synthesizes a
//! one- or zero-element envelope via [`Page::singleton`] / [`Page::empty`];
//! the view layer refuses page navigation while that envelope is shown.

use serde::{Deserialize, Serialize};

use crate::DEFAULT_PAGE_SIZE;

// =============================================================================
// Sort Direction
// =============================================================================

/// Sort direction for paginated listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortDirection {
    #[serde(rename = "ASC")]
    Asc,
    #[default]
    #[serde(rename = "DESC")]
    Desc,
}

impl SortDirection {
    /// Wire value for the `sortDir` query parameter.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

// =============================================================================
// Page Request
// =============================================================================

/// A page request: index, size and sort order.
///
/// The page index is zero-based. Changing the size or any filter must be
/// accompanied by a reset to page 0; that reset is the *caller's* job (the
/// paged view does it) - the translation below never overrides a non-zero
/// index on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort_by: String,
    pub sort_dir: SortDirection,
}

impl PageRequest {
    /// First page with the default size, sorted by `sort_by`.
    pub fn new(sort_by: impl Into<String>, sort_dir: SortDirection) -> Self {
        PageRequest {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort_by: sort_by.into(),
            sort_dir,
        }
    }

    /// Same request with a different page size, reset to page 0.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self.page = 0;
        self
    }

    /// Translates to the standard query parameters.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sortBy", self.sort_by.clone()),
            ("sortDir", self.sort_dir.as_str().to_string()),
        ]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest::new("createdAt", SortDirection::Desc)
    }
}

// =============================================================================
// Date Range Filter
// =============================================================================

/// Inclusive date-range filter for listings that support it.
///
/// Serialized as `startDate` / `endDate` ISO date query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
}

impl DateRange {
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("startDate", self.start_date.format("%Y-%m-%d").to_string()),
            ("endDate", self.end_date.format("%Y-%m-%d").to_string()),
        ]
    }
}

// =============================================================================
// Page Envelope
// =============================================================================

/// One page of a paginated listing plus positional metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based page index.
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub number_of_elements: u32,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    /// Synthesizes a one-element envelope for search mode, where an exact
    /// lookup substitutes for the paginated listing.
    pub fn singleton(item: T) -> Self {
        Page {
            content: vec![item],
            number: 0,
            size: 1,
            total_elements: 1,
            total_pages: 1,
            number_of_elements: 1,
            first: true,
            last: true,
            empty: false,
        }
    }

    /// Synthesizes a zero-element envelope for a search that found nothing.
    pub fn empty() -> Self {
        Page {
            content: Vec::new(),
            number: 0,
            size: 0,
            total_elements: 0,
            total_pages: 0,
            number_of_elements: 0,
            first: true,
            last: true,
            empty: true,
        }
    }

    /// Checks the envelope's positional invariants. Exposed for tests and
    /// debug assertions; the client never "repairs" a server envelope.
    pub fn is_consistent(&self) -> bool {
        let first_ok = self.first == (self.number == 0);
        let last_ok = if self.total_pages == 0 {
            self.last
        } else {
            self.last == (self.number == self.total_pages - 1)
        };
        let count_ok = self.content.len() == self.number_of_elements as usize;
        let empty_ok = self.empty == self.content.is_empty();
        first_ok && last_ok && count_ok && empty_ok
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
