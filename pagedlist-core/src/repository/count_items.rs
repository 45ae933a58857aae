/// Counting half of the data source contract
///
/// Implemented by anything that can report how many items its superset holds,
/// e.g. an in-memory slice or a deferred query that issues a `COUNT(*)`.
///
/// # Example
/// ```ignore
/// impl CountItems for TrackQuery {
///     fn count_items(&self) -> Result<usize, Box<dyn Error + Send + Sync>> {
///         // SELECT COUNT(*) FROM track WHERE ...
///     }
/// }
/// ```
pub trait CountItems {
    /// Total number of items in the superset
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of items, zero for an empty superset
    /// * `Err` - The source's own error, passed through to the caller untouched
    fn count_items(&self) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
