use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagedListError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Data source error: {0}")]
    Source(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl From<validator::ValidationErrors> for PagedListError {
    fn from(errors: validator::ValidationErrors) -> Self {
        PagedListError::InvalidArgument(errors.to_string())
    }
}

pub type PagedListResult<T> = Result<T, PagedListError>;
