//! Result pages

use serde::Serialize;

/// Value Object: one page of an ordered result set
///
/// Metadata is derived from the content and totals in [`Page::of`] and cannot
/// be changed independently afterwards.
///
/// # Example
///
/// ```
/// use capacity_domain::value_objects::Page;
///
/// let page = Page::of(vec!["a", "b"], 1, 2, 5);
/// assert_eq!(page.total_pages(), 3);
/// assert!(!page.first());
/// assert!(!page.last());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    content: Vec<T>,
    page: u32,
    size: u32,
    total_elements: u64,
    total_pages: u64,
    first: bool,
    last: bool,
}

impl<T> Page<T> {
    /// Build a page and derive its metadata.
    ///
    /// `total_pages` is `ceil(total_elements / size)`, `first` is `page == 0`
    /// and `last` is `page >= total_pages - 1` (so an empty result set is
    /// both first and last).
    pub fn of(content: Vec<T>, page: u32, size: u32, total_elements: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(u64::from(size))
        };

        Self {
            content,
            page,
            size,
            total_elements,
            total_pages,
            first: page == 0,
            last: u64::from(page) + 1 >= total_pages,
        }
    }

    /// Page without rows, still carrying the position metadata
    pub fn empty(page: u32, size: u32, total_elements: u64) -> Self {
        Self::of(Vec::new(), page, size, total_elements)
    }

    /// Rows of this page, in result-set order
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Consume the page and return its rows
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Zero-based page index
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of rows in the whole result set
    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Number of pages in the whole result set
    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Whether this is the first page
    pub fn first(&self) -> bool {
        self.first
    }

    /// Whether this is the last page
    pub fn last(&self) -> bool {
        self.last
    }
}
