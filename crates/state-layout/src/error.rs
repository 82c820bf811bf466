use thiserror::Error;

use crate::source::LayoutId;

/// Caller programming errors surfaced by the container and its hosts
///
/// Missing states, views and listeners are never errors; they are silent
/// no-ops.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateLayoutError {
    /// View construction could not resolve the descriptor
    #[error("no layout named `{0}` is known to the host")]
    UnresolvedLayout(LayoutId),
    /// A host catalog was asked to register the same descriptor twice
    #[error("layout `{0}` is already registered")]
    DuplicateLayout(LayoutId),
}

pub type Result<T> = std::result::Result<T, StateLayoutError>;
