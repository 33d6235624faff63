//! Pagination types for list endpoints.
//!
//! Some backend endpoints return a bare array, others a counted envelope.
//! Both are normalized into [`Page`] at the repository facade; nothing past
//! that boundary ever branches on the backend shape.

use serde::{Deserialize, Serialize};

/// Request parameters for paginated queries (0-indexed pages).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (0-indexed).
    #[serde(default)]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_size() -> u32 {
    10
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: default_size(),
        }
    }
}

impl PageRequest {
    /// Creates a request for the given page and size.
    #[must_use]
    pub const fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Index of the first item of this page.
    #[must_use]
    pub fn start(&self) -> usize {
        (self.page as usize).saturating_mul(self.size as usize)
    }
}

/// One page of a normalized list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items in the current page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total_count: u64,
    /// Current page number (0-indexed).
    pub page_number: u32,
    /// Items per page.
    pub page_size: u32,
}

impl<T> Page<T> {
    /// Builds a page by slicing a full list client-side.
    ///
    /// Used when the backend returns the whole collection as a bare array.
    #[must_use]
    pub fn from_full_list(all: Vec<T>, request: PageRequest) -> Self {
        let total = all.len() as u64;
        let items: Vec<T> = all
            .into_iter()
            .skip(request.start())
            .take(request.size as usize)
            .collect();
        Self {
            items,
            total_count: total,
            page_number: request.page,
            page_size: request.size,
        }
    }

    /// Builds a page from an already-paged envelope response.
    #[must_use]
    pub fn from_envelope(items: Vec<T>, total_count: u64, request: PageRequest) -> Self {
        Self {
            items,
            total_count,
            page_number: request.page,
            page_size: request.size,
        }
    }

    /// Returns true if there are no items on this page.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
