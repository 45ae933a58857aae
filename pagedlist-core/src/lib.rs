pub mod models;
pub mod repository;

pub use models::*;
pub use repository::*;

pub use pagedlist_api::{PageRequest, PagedListError, PagedListResult};
