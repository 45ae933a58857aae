pub mod ajax_options;
pub mod link_transform;

// Re-exports
pub use ajax_options::*;
pub use link_transform::*;
