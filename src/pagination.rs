//! Offset pagination shared by every search.
//!
//! A page is produced from two independent store queries, one for the rows
//! and one for the total count. They are not executed atomically, so a
//! concurrent write may leave `total_elements` out of step with `content`;
//! only `content.len() <= size` is guaranteed.

use serde::Serialize;
use thiserror::Error;

use crate::repository::errors::RepositoryResult;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest page size accepted unless configured otherwise.
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("page size must be between 1 and {max}, got {size}")]
    InvalidSize { size: usize, max: usize },
    #[error("page {page} of size {size} is out of range")]
    PageOutOfRange { page: usize, size: usize },
}

/// Largest row offset the store accepts.
const MAX_OFFSET: usize = i64::MAX as usize;

/// Default and maximum page sizes applied to incoming requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLimits {
    pub default_size: usize,
    pub max_size: usize,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_PAGE_SIZE,
            max_size: MAX_PAGE_SIZE,
        }
    }
}

impl PageLimits {
    /// Resolves optional zero-based page number and size into a request.
    pub fn request(&self, page: Option<usize>, size: Option<usize>) -> Result<PageRequest, PageError> {
        let size = size.unwrap_or(self.default_size);
        if size == 0 || size > self.max_size {
            return Err(PageError::InvalidSize {
                size,
                max: self.max_size,
            });
        }
        let page = page.unwrap_or(0);
        match page.checked_mul(size) {
            Some(offset) if offset <= MAX_OFFSET => Ok(PageRequest::with_offset(offset, size)),
            _ => Err(PageError::PageOutOfRange { page, size }),
        }
    }
}

/// Slice of a result set requested by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub size: usize,
    pub offset: usize,
}

impl PageRequest {
    /// Request for the zero-based `page` of `size` rows.
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            size,
            offset: page.saturating_mul(size),
        }
    }

    pub fn with_offset(offset: usize, size: usize) -> Self {
        Self { size, offset }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// Pagination metadata returned to clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_elements: usize,
    pub has_next: bool,
}

/// Rows of one page plus the total number of matching rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: usize,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_elements: usize, request: PageRequest) -> Self {
        Self {
            content,
            total_elements,
            request,
        }
    }

    /// Whether rows exist beyond this page.
    pub fn has_next(&self) -> bool {
        self.request.offset.saturating_add(self.request.size) < self.total_elements
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo {
            total_elements: self.total_elements,
            has_next: self.has_next(),
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            request: self.request,
        }
    }
}

/// Runs the content query and then the count query for `request`.
///
/// Errors from either query propagate unchanged; there is no retry.
pub fn fetch_page<T, L, C>(request: PageRequest, load: L, count: C) -> RepositoryResult<Page<T>>
where
    L: FnOnce(&PageRequest) -> RepositoryResult<Vec<T>>,
    C: FnOnce() -> RepositoryResult<usize>,
{
    let mut content = load(&request)?;
    content.truncate(request.size);
    let total_elements = count()?;
    Ok(Page::new(content, total_elements, request))
}
