use thiserror::Error;

/// Result type for tree lookups and removals.
pub type Result<T, E = KeyError> = std::result::Result<T, E>;

/// Returned by [`OrderedTree::find`][crate::OrderedTree::find] and
/// [`OrderedTree::remove`][crate::OrderedTree::remove] when no node holds the requested key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("key not present in tree")]
pub struct KeyError;
