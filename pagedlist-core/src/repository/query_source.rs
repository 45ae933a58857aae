use super::count_items::CountItems;
use super::fetch_window::FetchWindow;
use super::pagination::PageWindow;

/// Deferred data source built from two caller-supplied operations
///
/// Nothing runs until a paged list is constructed from it: the count
/// operation is issued first, then the windowed fetch, and the fetch is
/// skipped entirely when the count is zero. This is how a host plugs in its
/// own data layer (a count query followed by a limit/offset query) without
/// implementing the source traits itself.
///
/// # Example
/// ```
/// use pagedlist_core::{PagedList, PagedListInfo, QuerySource};
///
/// let rows: Vec<String> = (1..=7).map(|i| format!("row {i}")).collect();
/// let query = QuerySource::new(
///     || Ok(rows.len()),
///     |window| Ok(rows.iter().skip(window.offset).take(window.limit).cloned().collect()),
/// );
///
/// let page: PagedList<String> = PagedList::new(Some(&query), 3, 3).unwrap();
/// assert_eq!(page.len(), 1);
/// assert_eq!(page[0], "row 7");
/// assert!(page.is_last_page());
/// ```
#[derive(Debug, Clone)]
pub struct QuerySource<C, F> {
    count: C,
    fetch: F,
}

impl<C, F> QuerySource<C, F> {
    /// Create a new deferred source
    ///
    /// # Arguments
    /// * `count` - Returns the total number of items in the superset
    /// * `fetch` - Returns the items covered by a limit/offset window
    pub fn new<T>(count: C, fetch: F) -> Self
    where
        C: Fn() -> Result<usize, Box<dyn std::error::Error + Send + Sync>>,
        F: Fn(PageWindow) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>,
    {
        Self { count, fetch }
    }
}

impl<C, F> CountItems for QuerySource<C, F>
where
    C: Fn() -> Result<usize, Box<dyn std::error::Error + Send + Sync>>,
{
    fn count_items(&self) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
        (self.count)()
    }
}

impl<C, F, T> FetchWindow<T> for QuerySource<C, F>
where
    F: Fn(PageWindow) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>,
{
    fn fetch_window(&self, window: PageWindow) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>> {
        (self.fetch)(window)
    }
}
