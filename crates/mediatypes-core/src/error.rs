//! Error type for the fallible edges of the crate.
//!
//! Resolution itself never fails: an unknown string becomes a custom type.
//! Errors only come from strict parsing helpers.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaTypeError {
    /// Input was empty or whitespace only.
    #[error("media type name is empty")]
    Empty,

    /// Not one of the IANA top-level types.
    #[error("unknown media type category: {0:?}")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, MediaTypeError>;
