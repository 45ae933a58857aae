use pagedlist_api::{PageRequest, PagedListResult};
use tracing::{debug, trace};

use super::metadata_snapshot::PagedListMetadata;
use super::page_metadata::PageMetadata;
use super::paged_list_info::PagedListInfo;
use crate::repository::{PageSource, PageWindow};

/// One page of an ordered superset, together with its pagination metadata
///
/// The subset is fetched once at construction and never changes afterwards;
/// the data source is not retained.
///
/// # Example
/// ```
/// use pagedlist_core::{PagedList, PagedListInfo};
///
/// let data = vec![1, 2, 3, 4, 5];
/// let page: PagedList<i32> = PagedList::new(Some(&data), 2, 2).unwrap();
///
/// assert_eq!(page.as_slice(), &[3, 4]);
/// assert_eq!(page.page_count(), 3);
/// assert!(page.has_next_page());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedList<T> {
    subset: Vec<T>,
    metadata: PageMetadata,
}

impl<T> PagedList<T> {
    /// Page through `source`, keeping only the items of `page_number`
    ///
    /// # Arguments
    /// * `source` - The superset; `None` behaves like an empty superset
    /// * `page_number` - One-based index of the page to keep
    /// * `page_size` - Maximum number of items per page
    ///
    /// # Returns
    /// * `Err(PagedListError::InvalidArgument)` - Before the source is touched, when
    ///   `page_number` or `page_size` is zero
    /// * `Err(PagedListError::Source)` - When the count or the fetch fails
    pub fn new<S>(source: Option<&S>, page_number: usize, page_size: usize) -> PagedListResult<Self>
    where
        S: PageSource<T> + ?Sized,
    {
        Self::from_request(source, PageRequest::new(page_number, page_size))
    }

    /// Same as [`PagedList::new`], taking a host-supplied `PageRequest`
    pub fn from_request<S>(source: Option<&S>, request: PageRequest) -> PagedListResult<Self>
    where
        S: PageSource<T> + ?Sized,
    {
        let request = request.validated()?;

        let total_item_count = match source {
            Some(source) => source.count_items()?,
            None => 0,
        };
        let metadata = PageMetadata::for_request(total_item_count, &request);

        let subset = match source {
            Some(source) if total_item_count > 0 => source.fetch_window(PageWindow::for_request(&request))?,
            _ => {
                trace!(page_number = request.page_number, "superset is empty, skipping windowed fetch");
                Vec::new()
            }
        };

        debug!(
            total_item_count,
            page_number = request.page_number,
            page_size = request.page_size,
            fetched = subset.len(),
            "paged list constructed"
        );

        Ok(Self { subset, metadata })
    }

    /// Paged list over an absent superset
    pub fn empty(page_number: usize, page_size: usize) -> PagedListResult<Self> {
        let request = PageRequest::new(page_number, page_size).validated()?;
        Ok(Self {
            subset: Vec::new(),
            metadata: PageMetadata::for_request(0, &request),
        })
    }

    /// Immutable copy of the metadata, detached from the items
    pub fn metadata(&self) -> PagedListMetadata {
        PagedListMetadata::from(self)
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.subset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subset.is_empty()
    }

    /// Item at the zero-based position within this page
    pub fn get(&self, index: usize) -> Option<&T> {
        self.subset.get(index)
    }

    /// Iterate over the page in order; `.rev()` iterates backwards
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.subset.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.subset
    }

    pub fn into_items(self) -> Vec<T> {
        self.subset
    }
}

impl<T: PartialEq> PagedList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.subset.contains(value)
    }

    /// Zero-based position of the first item equal to `value`
    pub fn position(&self, value: &T) -> Option<usize> {
        self.subset.iter().position(|item| item == value)
    }

    /// Number of items on this page equal to `value`
    pub fn occurrences(&self, value: &T) -> usize {
        self.subset.iter().filter(|item| *item == value).count()
    }
}

impl<T> PagedListInfo for PagedList<T> {
    fn page_metadata(&self) -> &PageMetadata {
        &self.metadata
    }
}

impl<T> std::ops::Index<usize> for PagedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.subset[index]
    }
}

impl<'a, T> IntoIterator for &'a PagedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.subset.iter()
    }
}

impl<T> IntoIterator for PagedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.subset.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{CountItems, FetchWindow, QuerySource};
    use pagedlist_api::PagedListError;
    use std::cell::{Cell, RefCell};

    /// Lazy source that records every operation issued against it
    struct RecordingQuery {
        rows: Vec<u32>,
        counts: Cell<usize>,
        windows: RefCell<Vec<PageWindow>>,
    }

    impl RecordingQuery {
        fn new(rows: Vec<u32>) -> Self {
            Self {
                rows,
                counts: Cell::new(0),
                windows: RefCell::new(Vec::new()),
            }
        }
    }

    impl CountItems for RecordingQuery {
        fn count_items(&self) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
            self.counts.set(self.counts.get() + 1);
            Ok(self.rows.len())
        }
    }

    impl FetchWindow<u32> for RecordingQuery {
        fn fetch_window(&self, window: PageWindow) -> Result<Vec<u32>, Box<dyn std::error::Error + Send + Sync>> {
            self.windows.borrow_mut().push(window);
            Ok(self.rows.iter().skip(window.offset).take(window.limit).copied().collect())
        }
    }

    #[test]
    fn test_none_source_does_not_fail() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let paged: PagedList<i32> = PagedList::new(None::<&Vec<i32>>, 1, 10)?;
        assert!(paged.is_empty());
        assert_eq!(paged.page_count(), 0);
        Ok(())
    }

    #[test]
    fn test_empty_constructor_matches_none_source() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let paged: PagedList<String> = PagedList::empty(3, 10)?;
        assert_eq!(paged.len(), 0);
        assert_eq!(paged.page_count(), 0);
        assert_eq!(paged.total_item_count(), 0);
        Ok(())
    }

    #[test]
    fn test_zero_item_source_has_no_pages() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let data: Vec<i32> = Vec::new();
        let paged: PagedList<i32> = PagedList::new(Some(&data), 1, 10)?;
        assert_eq!(paged.page_count(), 0);
        assert_eq!(paged.len(), 0);
        Ok(())
    }

    #[test]
    fn test_page_number_below_one_is_invalid() {
        let data = vec![1, 2, 3];
        let result: PagedListResult<PagedList<i32>> = PagedList::new(Some(&data), 0, 1);
        assert!(matches!(result, Err(PagedListError::InvalidArgument(_))));
    }

    #[test]
    fn test_page_size_below_one_is_invalid() {
        let data = vec![1, 2, 3];
        let result: PagedListResult<PagedList<i32>> = PagedList::new(Some(&data), 1, 0);
        assert!(matches!(result, Err(PagedListError::InvalidArgument(_))));
    }

    #[test]
    fn test_invalid_arguments_fail_for_none_source() {
        let result: PagedListResult<PagedList<i32>> = PagedList::new(None::<&[i32]>, 0, 10);
        assert!(matches!(result, Err(PagedListError::InvalidArgument(_))));
    }

    #[test]
    fn test_invalid_arguments_never_touch_the_source() {
        let query = RecordingQuery::new(vec![1, 2, 3]);
        let result: PagedListResult<PagedList<u32>> = PagedList::new(Some(&query), 0, 1);
        assert!(result.is_err());
        assert_eq!(query.counts.get(), 0);
        assert!(query.windows.borrow().is_empty());
    }

    #[test]
    fn test_second_page_of_five_items() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let data = vec![1, 2, 3, 4, 5];
        let paged: PagedList<i32> = PagedList::new(Some(&data), 2, 2)?;
        assert_eq!(paged.as_slice(), &[3, 4]);
        assert_eq!(paged[0], 3);
        assert_eq!(paged.first_item_on_page(), 3);
        assert_eq!(paged.last_item_on_page(), 4);
        assert_eq!(paged.page_count(), 3);
        assert_eq!(paged.total_item_count(), data.len());
        Ok(())
    }

    #[test]
    fn test_page_size_bounds_the_subset() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let data = vec![1, 2, 3, 4, 5];
        let second: PagedList<i32> = PagedList::new(Some(&data), 2, 2)?;
        let third: PagedList<i32> = PagedList::new(Some(&data), 3, 2)?;
        assert_eq!(second.len(), 2);
        assert_eq!(third.len(), 1);
        Ok(())
    }

    #[test]
    fn test_page_beyond_end_is_empty() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let data = vec![1, 2, 3];
        for page_number in 2..6 {
            let paged: PagedList<i32> = PagedList::new(Some(&data), page_number, 3)?;
            assert!(paged.is_empty());
            assert!(!paged.has_next_page());
            assert!(paged.is_last_page());
        }
        Ok(())
    }

    #[test]
    fn test_last_page_flags() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let data = vec![1, 2, 3];
        let paged: PagedList<i32> = PagedList::new(Some(&data), 3, 1)?;
        assert!(!paged.has_next_page());
        assert!(paged.is_last_page());
        Ok(())
    }

    #[test]
    fn test_windows_match_positions_in_superset() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let data: Vec<usize> = (1..=23).collect();
        for page_size in 1..=7 {
            for page_number in 1..=6 {
                let paged: PagedList<usize> = PagedList::new(Some(&data), page_number, page_size)?;
                let start = ((page_number - 1) * page_size).min(data.len());
                let end = (page_number * page_size).min(data.len());
                assert_eq!(paged.as_slice(), &data[start..end]);
            }
        }
        Ok(())
    }

    #[test]
    fn test_source_is_counted_once_and_fetched_once() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let query = RecordingQuery::new((1..=10).collect());
        let paged: PagedList<u32> = PagedList::new(Some(&query), 3, 4)?;

        assert_eq!(paged.as_slice(), &[9, 10]);
        assert_eq!(query.counts.get(), 1);
        assert_eq!(*query.windows.borrow(), vec![PageWindow::new(4, 8)]);
        Ok(())
    }

    #[test]
    fn test_first_page_fetches_from_offset_zero() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let query = RecordingQuery::new((1..=10).collect());
        let _paged: PagedList<u32> = PagedList::new(Some(&query), 1, 4)?;
        assert_eq!(*query.windows.borrow(), vec![PageWindow::new(4, 0)]);
        Ok(())
    }

    #[test]
    fn test_zero_count_skips_the_fetch() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let query = RecordingQuery::new(Vec::new());
        let paged: PagedList<u32> = PagedList::new(Some(&query), 2, 5)?;
        assert!(paged.is_empty());
        assert_eq!(query.counts.get(), 1);
        assert!(query.windows.borrow().is_empty());
        Ok(())
    }

    #[test]
    fn test_count_failure_is_propagated() {
        let query = QuerySource::new(
            || Err(anyhow::anyhow!("connection reset by peer").into()),
            |_window| Ok(vec![1u8]),
        );
        let result: PagedListResult<PagedList<u8>> = PagedList::new(Some(&query), 1, 10);

        match result {
            Err(PagedListError::Source(error)) => assert_eq!(error.to_string(), "connection reset by peer"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_fetch_failure_is_propagated() {
        let query = QuerySource::new(
            || Ok(3),
            |_window| -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
                Err(Box::new(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "fetch aborted")))
            },
        );
        let result: PagedListResult<PagedList<u8>> = PagedList::new(Some(&query), 1, 10);

        match result {
            Err(PagedListError::Source(error)) => {
                let io = error.downcast_ref::<std::io::Error>().unwrap();
                assert_eq!(io.kind(), std::io::ErrorKind::BrokenPipe);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_sequence_operations() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let data = vec!["a", "b", "c", "b", "d", "e"];
        let paged: PagedList<&str> = PagedList::new(Some(&data), 1, 5)?;

        assert!(paged.contains(&"c"));
        assert!(!paged.contains(&"e"));
        assert_eq!(paged.position(&"b"), Some(1));
        assert_eq!(paged.position(&"e"), None);
        assert_eq!(paged.occurrences(&"b"), 2);
        assert_eq!(paged.occurrences(&"z"), 0);
        assert_eq!(paged.get(4), Some(&"d"));
        assert_eq!(paged.get(5), None);
        Ok(())
    }

    #[test]
    fn test_iteration_is_restartable_and_reversible() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let data: Vec<i32> = (1..=9).collect();
        let paged: PagedList<i32> = PagedList::new(Some(&data), 2, 4)?;

        let forward: Vec<i32> = paged.iter().copied().collect();
        let again: Vec<i32> = (&paged).into_iter().copied().collect();
        let backward: Vec<i32> = paged.iter().rev().copied().collect();

        assert_eq!(forward, vec![5, 6, 7, 8]);
        assert_eq!(again, forward);
        assert_eq!(backward, vec![8, 7, 6, 5]);
        assert_eq!(paged.into_items(), vec![5, 6, 7, 8]);
        Ok(())
    }

    #[test]
    fn test_slice_source_without_vec() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let data = [10, 20, 30, 40];
        let paged: PagedList<i32> = PagedList::new(Some(&data[..]), 2, 3)?;
        assert_eq!(paged.as_slice(), &[40]);
        Ok(())
    }
}
