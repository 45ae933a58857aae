pub mod display_mode;
pub mod goto_form_options;
pub mod render_options;

// Re-exports
pub use display_mode::*;
pub use goto_form_options::*;
pub use render_options::*;
