//! GridKey: the `(rows, cols)` pair that shapes the cipher grid.
//!
//! The key is the only configuration the cipher has. It is validated once
//! at construction (or deserialization), after which the block size is
//! guaranteed to be non-zero and small enough for a grid of `char` cells to
//! be allocated without overflowing `isize::MAX` bytes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GridCipherError, Result};

/// Validated grid dimensions.
///
/// Encryption and decryption must use equal keys; the engine has no way of
/// detecting a mismatch, it simply produces the wrong plaintext.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "KeyParts")]
pub struct GridKey {
    rows: usize,
    cols: usize,
}

/// Unvalidated wire form of a [`GridKey`].
#[derive(Deserialize)]
struct KeyParts {
    rows: usize,
    cols: usize,
}

impl TryFrom<KeyParts> for GridKey {
    type Error = GridCipherError;

    fn try_from(parts: KeyParts) -> Result<Self> {
        GridKey::new(parts.rows, parts.cols)
    }
}

impl GridKey {
    /// Creates a key for a `rows × cols` grid.
    ///
    /// # Errors
    /// Returns [`GridCipherError::InvalidKey`] if either dimension is zero or
    /// the grid would need more than `isize::MAX` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrypt::GridKey;
    ///
    /// let key = GridKey::new(3, 4).unwrap();
    /// assert_eq!(key.block_size(), 12);
    /// assert!(GridKey::new(0, 4).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let grid_bytes = rows
            .checked_mul(cols)
            .and_then(|cells| cells.checked_mul(size_of::<char>()));
        match grid_bytes {
            Some(bytes) if rows > 0 && cols > 0 && bytes <= isize::MAX as usize => {
                Ok(GridKey { rows, cols })
            }
            _ => Err(GridCipherError::InvalidKey { rows, cols }),
        }
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Characters per block (`rows * cols`).
    pub fn block_size(&self) -> usize {
        self.rows * self.cols
    }
}

impl fmt::Display for GridKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl FromStr for GridKey {
    type Err = GridCipherError;

    /// Parses `"<rows>x<cols>"`, e.g. `"3x4"`.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || GridCipherError::KeyFormat(s.to_string());
        let (rows, cols) = s.trim().split_once(['x', 'X']).ok_or_else(malformed)?;
        let rows = rows.trim().parse().map_err(|_| malformed())?;
        let cols = cols.trim().parse().map_err(|_| malformed())?;
        GridKey::new(rows, cols)
    }
}
