use serde::Serialize;

/// One navigation menu item.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NavEntry {
    pub path: &'static str,
    pub label: &'static str,
}

impl NavEntry {
    pub const fn new(path: &'static str, label: &'static str) -> Self {
        Self { path, label }
    }
}
