use serde::{Deserialize, Serialize};

use super::error::ArticleError;

pub const DEFAULT_PAGE_SIZE: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    pub fn validate(self) -> Result<Self, ArticleError> {
        if self.page == 0 {
            return Err(ArticleError::InvalidPagination {
                field: "page",
                message: "must be >= 1",
            });
        }
        if self.page_size == 0 {
            return Err(ArticleError::InvalidPagination {
                field: "page_size",
                message: "must be >= 1",
            });
        }
        Ok(self)
    }

    fn start_index(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.page_size as usize)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: usize,
}

/// Cuts one page out of `items`, keeping their order. A page past the end is
/// empty, not an error.
pub fn paginate<T>(
    items: Vec<T>,
    params: PaginationParams,
) -> Result<PaginatedResult<T>, ArticleError> {
    Ok(slice_page(items, params.validate()?))
}

/// `params` must already have passed [`PaginationParams::validate`].
pub(crate) fn slice_page<T>(items: Vec<T>, params: PaginationParams) -> PaginatedResult<T> {
    let total = items.len();
    let page_size = params.page_size as usize;
    let start = params.start_index().min(total);
    let end = start.saturating_add(page_size).min(total);

    let items = items.into_iter().skip(start).take(end - start).collect();

    PaginatedResult {
        items,
        total,
        page: params.page,
        page_size: params.page_size,
        total_pages: total.div_ceil(page_size),
    }
}
