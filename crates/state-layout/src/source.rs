//! View source descriptors, resolved lazily into views by the host

use std::fmt;

/// Name of a layout/content descriptor the host knows how to build
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayoutId(String);

impl LayoutId {
    /// Create a new layout identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LayoutId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LayoutId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deferred description of the view bound to a state
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ViewSource {
    /// Bind the shared zero-size placeholder instead of building anything
    #[default]
    Absent,
    /// Build a view from the named layout
    Layout(LayoutId),
}

impl ViewSource {
    /// Source that builds a view from the named layout
    pub fn layout(id: impl Into<LayoutId>) -> Self {
        Self::Layout(id.into())
    }

    /// Whether this is the placeholder sentinel
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<LayoutId> for ViewSource {
    fn from(id: LayoutId) -> Self {
        Self::Layout(id)
    }
}

impl From<Option<LayoutId>> for ViewSource {
    fn from(id: Option<LayoutId>) -> Self {
        id.map_or(Self::Absent, Self::Layout)
    }
}
