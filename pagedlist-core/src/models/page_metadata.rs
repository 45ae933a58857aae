use pagedlist_api::{PageRequest, PagedListResult};
use serde::Serialize;

use super::paged_list_info::PagedListInfo;

/// Pagination facts derived from a total item count and a page request
///
/// Every field is fully determined by `(total_item_count, page_number,
/// page_size)`. Values are only produced by the calculator, so the fields stay
/// mutually consistent.
///
/// # Example
/// ```
/// use pagedlist_core::{PageMetadata, PagedListInfo};
///
/// let metadata = PageMetadata::calculate(5, 2, 2).unwrap();
/// assert_eq!(metadata.page_count(), 3);
/// assert_eq!(metadata.first_item_on_page(), 3);
/// assert_eq!(metadata.last_item_on_page(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageMetadata {
    pub(crate) total_item_count: usize,
    pub(crate) page_size: usize,
    pub(crate) page_number: usize,
    pub(crate) page_count: usize,
    pub(crate) has_previous_page: bool,
    pub(crate) has_next_page: bool,
    pub(crate) is_first_page: bool,
    pub(crate) is_last_page: bool,
    pub(crate) first_item_on_page: usize,
    pub(crate) last_item_on_page: usize,
}

impl PageMetadata {
    /// Compute the metadata for one page of a superset
    ///
    /// # Arguments
    /// * `total_item_count` - Number of items in the superset
    /// * `page_number` - One-based page index, must be at least 1
    /// * `page_size` - Maximum items per page, must be at least 1
    ///
    /// # Returns
    /// * `Err(PagedListError::InvalidArgument)` - When `page_number` or `page_size` is zero
    pub fn calculate(total_item_count: usize, page_number: usize, page_size: usize) -> PagedListResult<Self> {
        let request = PageRequest::new(page_number, page_size).validated()?;
        Ok(Self::for_request(total_item_count, &request))
    }

    /// Compute the metadata for a request that already passed validation
    pub(crate) fn for_request(total_item_count: usize, request: &PageRequest) -> Self {
        let page_number = request.page_number;
        let page_size = request.page_size;

        let page_count = if total_item_count > 0 {
            total_item_count.div_ceil(page_size)
        } else {
            0
        };

        let first_item_on_page = (page_number - 1).saturating_mul(page_size).saturating_add(1);
        let last_item_on_page = first_item_on_page
            .saturating_add(page_size - 1)
            .min(total_item_count);

        Self {
            total_item_count,
            page_size,
            page_number,
            page_count,
            has_previous_page: page_number > 1,
            has_next_page: page_number < page_count,
            is_first_page: page_number == 1,
            is_last_page: page_number >= page_count,
            first_item_on_page,
            last_item_on_page,
        }
    }
}

impl PagedListInfo for PageMetadata {
    fn page_metadata(&self) -> &PageMetadata {
        self
    }
}
