use serde::{Deserialize, Serialize};

/// When a pager, or one of its links, is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    #[default]
    Always,
    Never,
    /// Only when the element would do something useful
    IfNeeded,
}

impl DisplayMode {
    /// Whether the element is shown, given whether it is currently needed
    pub fn shows(self, needed: bool) -> bool {
        match self {
            DisplayMode::Always => true,
            DisplayMode::Never => false,
            DisplayMode::IfNeeded => needed,
        }
    }
}
