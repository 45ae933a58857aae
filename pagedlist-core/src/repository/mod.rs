pub mod count_items;
pub mod fetch_window;
pub mod pagination;
pub mod query_source;
pub mod slice_source;

// Re-exports
pub use count_items::*;
pub use fetch_window::*;
pub use pagination::*;
pub use query_source::*;

/// Full data source contract consumed by `PagedList`
///
/// Blanket-implemented for every type providing both operations, so a source
/// is selected by composition: an in-memory slice, a `QuerySource` built from
/// two closures, or a host query type implementing both traits.
pub trait PageSource<T>: CountItems + FetchWindow<T> {}

impl<T, S> PageSource<T> for S where S: CountItems + FetchWindow<T> + ?Sized {}
