//! LetterGrid: the fixed-size character buffer behind the cipher.
//!
//! The grid is a flat, row-major `Vec<char>` of exactly `rows * cols` cells.
//! Every fill overwrites all cells, so the grid is never partially
//! populated. Before the first fill every cell holds [`FILLER`].

use crate::error::{GridCipherError, Result};
use crate::key::GridKey;

/// Padding character for short blocks, stripped again on decryption.
pub const FILLER: char = 'A';

/// Fixed `rows × cols` grid of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LetterGrid {
    key: GridKey,
    cells: Vec<char>,
}

impl LetterGrid {
    /// Allocates a grid for `key`, every cell set to [`FILLER`].
    pub(crate) fn new(key: GridKey) -> Self {
        LetterGrid {
            key,
            cells: vec![FILLER; key.block_size()],
        }
    }

    pub(crate) fn key(&self) -> GridKey {
        self.key
    }

    /// Returns the character at `(row, col)`, or `None` when out of bounds.
    pub(crate) fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.key.rows() && col < self.key.cols() {
            Some(self.cells[row * self.key.cols() + col])
        } else {
            None
        }
    }

    /// Iterates over the rows, top to bottom.
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.key.cols())
    }

    /// Writes `text` row by row, left to right.
    ///
    /// Cells past the end of `text` become [`FILLER`]; characters past the
    /// end of the grid are ignored.
    pub(crate) fn fill_row_major<I>(&mut self, text: I)
    where
        I: IntoIterator<Item = char>,
    {
        let mut text = text.into_iter();
        for cell in self.cells.iter_mut() {
            *cell = text.next().unwrap_or(FILLER);
        }
    }

    /// Writes `text` column by column, top to bottom.
    ///
    /// # Errors
    /// Returns [`GridCipherError::MalformedCiphertext`] unless `text` holds
    /// exactly `rows * cols` characters. The grid is untouched on error.
    pub(crate) fn fill_column_major(&mut self, text: &[char]) -> Result<()> {
        let block_size = self.key.block_size();
        if text.len() != block_size {
            return Err(GridCipherError::MalformedCiphertext {
                len: text.len(),
                block_size,
            });
        }
        let rows = self.key.rows();
        let cols = self.key.cols();
        for (k, &c) in text.iter().enumerate() {
            let (col, row) = (k / rows, k % rows);
            self.cells[row * cols + col] = c;
        }
        Ok(())
    }

    /// Appends the grid to `out` column by column, top to bottom.
    pub(crate) fn read_column_major(&self, out: &mut String) {
        let cols = self.key.cols();
        for col in 0..cols {
            out.extend(self.cells.iter().skip(col).step_by(cols));
        }
    }

    /// Appends the grid to `out` row by row, left to right.
    pub(crate) fn read_row_major(&self, out: &mut String) {
        out.extend(self.cells.iter());
    }

    /// Rotates rows upward by `shift`; the top row wraps to the bottom.
    pub(crate) fn rotate_rows_up(&mut self, shift: usize) {
        let n = shift % self.key.rows();
        self.cells.rotate_left(n * self.key.cols());
    }

    /// Inverse of [`rotate_rows_up`](Self::rotate_rows_up).
    pub(crate) fn rotate_rows_down(&mut self, shift: usize) {
        let n = shift % self.key.rows();
        self.cells.rotate_right(n * self.key.cols());
    }

    /// Rotates every row left by `shift`; column 0 wraps to the right edge.
    pub(crate) fn rotate_cols_left(&mut self, shift: usize) {
        let cols = self.key.cols();
        let n = shift % cols;
        for row in self.cells.chunks_mut(cols) {
            row.rotate_left(n);
        }
    }

    /// Inverse of [`rotate_cols_left`](Self::rotate_cols_left).
    pub(crate) fn rotate_cols_right(&mut self, shift: usize) {
        let cols = self.key.cols();
        let n = shift % cols;
        for row in self.cells.chunks_mut(cols) {
            row.rotate_right(n);
        }
    }
}
