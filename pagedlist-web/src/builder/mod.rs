pub mod goto_form;
pub mod pager;
pub mod window;

// Re-exports
pub use goto_form::*;
pub use pager::*;
pub use window::*;
