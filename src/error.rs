//! Error types for the gridcrypt library.

use thiserror::Error;

/// Errors produced by the gridcrypt library.
///
/// Every variant is a caller error: nothing here is transient, so none of
/// them should be retried with the same input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridCipherError {
    /// Grid dimensions are zero, or the grid is too large to allocate.
    #[error("Invalid key {rows}x{cols}: dimensions must be positive and the block must fit in memory")]
    InvalidKey { rows: usize, cols: usize },

    /// Ciphertext length is not a multiple of the key's block size.
    #[error("Ciphertext length {len} is not a multiple of the block size {block_size}")]
    MalformedCiphertext { len: usize, block_size: usize },

    /// Shift value is negative.
    #[error("Shift must be non-negative, got {0}")]
    InvalidShift(i32),

    /// Key string is not of the form `<rows>x<cols>`.
    #[error("Cannot parse key from {0:?}: expected <rows>x<cols>")]
    KeyFormat(String),
}

/// Result type alias for gridcrypt operations.
pub type Result<T> = std::result::Result<T, GridCipherError>;
