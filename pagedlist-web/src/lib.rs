pub mod ajax;
pub mod builder;
pub mod html;
pub mod options;
pub mod utils;

pub use ajax::{AjaxOptions, InsertionMode};
pub use builder::{build_goto_form, build_pager, render_goto_form, render_pager, PageNumberWindow};
pub use html::{HtmlElement, Node};
pub use options::{DisplayMode, GoToFormOptions, LinkTransform, PageLabel, RenderOptions};
