use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::PagedListResult;

/// One-based page request as supplied by a host application
///
/// Both fields must be at least 1. Hosts usually deserialize this straight
/// from query parameters and hand it to the paged list constructors, which
/// validate it before touching any data source.
///
/// # Example
/// ```
/// use pagedlist_api::PageRequest;
///
/// let request = PageRequest::new(2, 20).validated().unwrap();
/// assert_eq!(request.offset(), 20);
///
/// assert!(PageRequest::new(0, 20).validated().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct PageRequest {
    /// One-based index of the requested page
    #[validate(range(min = 1, message = "page_number cannot be below 1"))]
    pub page_number: usize,
    /// Maximum number of items on any page
    #[validate(range(min = 1, message = "page_size cannot be less than 1"))]
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// Validate the request, failing with `InvalidArgument` when either field is zero
    pub fn validated(self) -> PagedListResult<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Number of items to skip before the requested page
    ///
    /// The first page always starts at offset 0.
    pub fn offset(&self) -> usize {
        if self.page_number <= 1 {
            0
        } else {
            (self.page_number - 1).saturating_mul(self.page_size)
        }
    }
}
