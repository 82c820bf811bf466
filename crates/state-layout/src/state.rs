//! State identifiers

use std::borrow::Cow;
use std::fmt;

/// Identifier of a visual state
///
/// State identifiers form one open namespace: the five reserved values below
/// are conventions, and any other string is a valid custom state. Two
/// identifiers are equal when their strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(Cow<'static, str>);

impl StateId {
    /// Something is being fetched or computed
    pub const LOADING: StateId = StateId(Cow::Borrowed("LOADING"));
    /// The real content of the screen
    pub const CONTENT: StateId = StateId(Cow::Borrowed("CONTENT"));
    /// There is nothing to show
    pub const EMPTY: StateId = StateId(Cow::Borrowed("EMPTY"));
    /// Something went wrong
    pub const ERROR: StateId = StateId(Cow::Borrowed("ERROR"));
    /// No network connection
    pub const OFFLINE: StateId = StateId(Cow::Borrowed("OFFLINE"));

    /// The reserved identifiers, in declaration order
    pub const RESERVED: [StateId; 5] = [
        Self::LOADING,
        Self::CONTENT,
        Self::EMPTY,
        Self::ERROR,
        Self::OFFLINE,
    ];

    /// Create a state identifier from any string
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is one of the five reserved identifiers
    pub fn is_reserved(&self) -> bool {
        Self::RESERVED.contains(self)
    }
}

impl From<&'static str> for StateId {
    fn from(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }
}

impl From<String> for StateId {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

impl AsRef<str> for StateId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
