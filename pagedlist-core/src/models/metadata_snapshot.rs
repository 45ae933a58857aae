use serde::Serialize;

use super::page_metadata::PageMetadata;
use super::paged_list::PagedList;
use super::paged_list_info::PagedListInfo;

/// Detached copy of a paged list's metadata
///
/// Holds neither the items nor the data source, so it can be handed to
/// renderers or serialized into a response after the list is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PagedListMetadata {
    metadata: PageMetadata,
}

impl<T> From<&PagedList<T>> for PagedListMetadata {
    fn from(paged_list: &PagedList<T>) -> Self {
        Self {
            metadata: *paged_list.page_metadata(),
        }
    }
}

impl PagedListInfo for PagedListMetadata {
    fn page_metadata(&self) -> &PageMetadata {
        &self.metadata
    }
}
