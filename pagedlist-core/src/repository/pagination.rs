use pagedlist_api::PageRequest;

/// Limit/offset window handed to a data source's windowed fetch
///
/// # Example
/// ```
/// use pagedlist_core::repository::pagination::PageWindow;
///
/// let window = PageWindow::new(20, 40);
/// assert_eq!(window.end(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindow {
    /// Maximum number of items to return
    pub limit: usize,
    /// Number of items to skip
    pub offset: usize,
}

impl PageWindow {
    /// Create a new page window
    ///
    /// # Arguments
    /// * `limit` - Maximum number of items to return
    /// * `offset` - Number of items to skip
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Create the window covering a (validated) page request
    ///
    /// # Example
    /// ```
    /// use pagedlist_api::PageRequest;
    /// use pagedlist_core::repository::pagination::PageWindow;
    ///
    /// let page_1 = PageWindow::for_request(&PageRequest::new(1, 20)); // offset: 0
    /// let page_2 = PageWindow::for_request(&PageRequest::new(2, 20)); // offset: 20
    /// assert_eq!(page_1.offset, 0);
    /// assert_eq!(page_2.offset, 20);
    /// ```
    pub fn for_request(request: &PageRequest) -> Self {
        Self {
            limit: request.page_size,
            offset: request.offset(),
        }
    }

    /// Exclusive end position of the window, saturating at `usize::MAX`
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.limit)
    }

    /// Clamp the window to a sequence of `len` items and return it as a range
    pub fn clamp_to(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(len);
        let end = self.end().min(len);
        start..end
    }
}
