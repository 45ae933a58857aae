use super::page_metadata::PageMetadata;

/// Read-only pagination facts shared by every paged result
///
/// Implementors only expose the backing `PageMetadata`; all ten accessors are
/// answered from it, so a paged list and its snapshot can never disagree.
pub trait PagedListInfo {
    /// Returns the metadata backing this paged result
    fn page_metadata(&self) -> &PageMetadata;

    /// Total number of subsets within the superset
    fn page_count(&self) -> usize {
        self.page_metadata().page_count
    }

    /// Total number of items contained within the superset
    fn total_item_count(&self) -> usize {
        self.page_metadata().total_item_count
    }

    /// One-based index of this subset within the superset
    fn page_number(&self) -> usize {
        self.page_metadata().page_number
    }

    /// Maximum size of any individual subset
    fn page_size(&self) -> usize {
        self.page_metadata().page_size
    }

    /// True if this is NOT the first subset within the superset
    fn has_previous_page(&self) -> bool {
        self.page_metadata().has_previous_page
    }

    /// True if this is NOT the last subset within the superset
    fn has_next_page(&self) -> bool {
        self.page_metadata().has_next_page
    }

    /// True if this is the first subset within the superset
    fn is_first_page(&self) -> bool {
        self.page_metadata().is_first_page
    }

    /// True if this is the last subset within the superset
    fn is_last_page(&self) -> bool {
        self.page_metadata().is_last_page
    }

    /// One-based index of the first item in the paged subset
    fn first_item_on_page(&self) -> usize {
        self.page_metadata().first_item_on_page
    }

    /// One-based index of the last item in the paged subset
    fn last_item_on_page(&self) -> usize {
        self.page_metadata().last_item_on_page
    }
}
