pub mod metadata_snapshot;
pub mod page_metadata;
pub mod paged_list;
pub mod paged_list_info;

// Re-exports
pub use metadata_snapshot::*;
pub use page_metadata::*;
pub use paged_list::*;
pub use paged_list_info::*;
