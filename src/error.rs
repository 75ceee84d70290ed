//! Errors raised by tree operations with a hard failure contract.

use thiserror::Error;

/// The ways a mutating tree operation can fail. Lookups report absence with
/// `Option` instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The requested item is not stored in the tree. Nothing was changed.
    #[error("item not in tree")]
    NotFound,
}

/// Shorthand for results of fallible tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
