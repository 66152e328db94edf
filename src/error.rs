//! Error type for the fallible `AdaptiveList` accessors.
//!
//! The core operations report failure through `Option` and `bool`. [`ListError`]
//! exists for callers that prefer `Result` and `?`, e.g. [`AdaptiveList::replace`].
//!
//! [`AdaptiveList::replace`]: crate::AdaptiveList::replace

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The index does not address a stored element.
    #[error("index {index} is out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
