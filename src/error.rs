//! Error types for bit-string handling and weight calculations.

use thiserror::Error;

/// Error variants for bit-string and lookup-table operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A bit width or chunk size of zero was given.
    #[error("width must not be zero")]
    ZeroWidth,

    /// A bit width beyond what the operation supports.
    #[error("width {width} exceeds the supported maximum of {max} bits")]
    WidthTooLarge { width: usize, max: usize },

    /// The chunk size does not evenly divide the bit width.
    #[error("chunk width {chunk} does not evenly divide bit width {width}")]
    Misaligned { width: usize, chunk: usize },

    /// A bit-string whose length differs from the configured width.
    #[error("expected a {expected}-bit string, found {found} bits")]
    WidthMismatch { expected: usize, found: usize },

    /// Padding was asked to shorten its input.
    #[error("cannot pad a {len}-digit string down to {width} bits")]
    Overlong { len: usize, width: usize },

    /// A character other than '0' or '1'.
    #[error("invalid binary digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },

    /// A chunk with no entry in the lookup table.
    #[error("no lookup table entry for chunk {0:?}")]
    LookupMiss(String),
}

/// A specialized Result type for bitsy operations.
pub type Result<T> = std::result::Result<T, Error>;
