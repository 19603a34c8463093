//! Page-query parsing and the pagination control.
//!
//! Selecting a page never mutates list state in place; it yields a
//! re-navigation route, so the URL stays the single source of truth for
//! which page is shown.

pub const DEFAULT_PAGE: u32 = 1;

/// Page parameters read from a query string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageQuery {
    pub page: u32,
    pub limit: Option<u32>,
}

impl PageQuery {
    pub fn first() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: None,
        }
    }

    pub fn page(page: u32) -> Self {
        Self {
            page: page.max(1),
            limit: None,
        }
    }

    /// Parse `page` and `limit` from a query string such as
    /// `page=3&limit=9` (a leading `?` is tolerated). Missing or
    /// non-numeric values fall back to page 1 / no limit.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut page = None;
        let mut limit = None;
        for pair in query.split('&') {
            match pair.split_once('=') {
                Some(("page", v)) => page = v.parse::<u32>().ok().filter(|p| *p >= 1),
                Some(("limit", v)) => limit = v.parse::<u32>().ok().filter(|l| *l >= 1),
                _ => {}
            }
        }
        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            limit,
        }
    }
}

/// State of the page-selector control under a list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    /// The control is only rendered when there is more than one page.
    pub fn is_multi_page(&self) -> bool {
        self.total_pages > 1
    }

    /// Route for re-navigating to the given page of `base_path`. The
    /// loader re-runs on navigation and re-fetches; nothing is updated
    /// in place. Out-of-range pages are forwarded untouched, rejecting
    /// or clamping them is the backend's contract.
    pub fn select(&self, base_path: &str, page: u32) -> String {
        format!("{base_path}?page={page}")
    }
}
