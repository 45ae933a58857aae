use super::pagination::PageWindow;

/// Windowed-fetch half of the data source contract
///
/// # Type Parameters
/// * `T` - The item type produced by the source
///
/// # Example
/// ```ignore
/// impl FetchWindow<Track> for TrackQuery {
///     fn fetch_window(&self, window: PageWindow) -> Result<Vec<Track>, Box<dyn Error + Send + Sync>> {
///         // SELECT ... LIMIT window.limit OFFSET window.offset
///     }
/// }
/// ```
pub trait FetchWindow<T> {
    /// Fetch up to `window.limit` items starting at the zero-based `window.offset`
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - The items in source order, empty past the end of the superset
    /// * `Err` - The source's own error, passed through to the caller untouched
    fn fetch_window(&self, window: PageWindow) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
