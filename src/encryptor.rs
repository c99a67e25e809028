//! Encryptor: columnar transposition engine over a fixed character grid.
//!
//! A message is cut into blocks of `rows * cols` characters. Each block is
//! written into the grid row by row and read back column by column.
//! Decryption writes column by column and reads row by row. The last block
//! is padded with [`FILLER`] and the padding is stripped on decryption.
//!
//! Super encryption substitutes every block through the alphabet ring and
//! rotates the filled grid before the column-major read.

use tracing::{debug, trace, warn};

use crate::alphabet;
use crate::error::{GridCipherError, Result};
use crate::grid::{LetterGrid, FILLER};
use crate::key::GridKey;

/// Block transposition cipher engine.
///
/// # Architecture
///
/// The engine owns one character grid sized by its [`GridKey`]. Every
/// operation overwrites the whole grid, so the only state carried between
/// calls is the contents of the most recently processed block.
///
/// Encryption and decryption must use engines built from equal keys. A
/// mismatched key is not detectable and yields garbage, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encryptor {
    grid: LetterGrid,
}

impl Encryptor {
    /// Creates an engine with a `rows × cols` grid.
    ///
    /// # Errors
    /// Returns [`GridCipherError::InvalidKey`] if either dimension is zero or
    /// the grid is too large to allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrypt::Encryptor;
    ///
    /// let enc = Encryptor::new(3, 4).unwrap();
    /// assert_eq!(enc.block_size(), 12);
    /// ```
    ///
    /// ```
    /// use gridcrypt::Encryptor;
    ///
    /// assert!(Encryptor::new(0, 4).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let key = GridKey::new(rows, cols).inspect_err(|e| warn!(rows, cols, "{}", e))?;
        Ok(Self::from_key(key))
    }

    /// Creates an engine from an already validated key.
    pub fn from_key(key: GridKey) -> Self {
        Encryptor {
            grid: LetterGrid::new(key),
        }
    }

    /// Returns the key this engine was built with.
    pub fn key(&self) -> GridKey {
        self.grid.key()
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.key().rows()
    }

    /// Number of grid columns.
    pub fn cols(&self) -> usize {
        self.key().cols()
    }

    /// Characters per block (`rows * cols`).
    pub fn block_size(&self) -> usize {
        self.key().block_size()
    }

    /// Returns the current grid contents, one slice per row.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrypt::Encryptor;
    ///
    /// let mut enc = Encryptor::new(2, 2).unwrap();
    /// enc.fill_block("AB");
    /// let rows: Vec<&[char]> = enc.letter_block().collect();
    /// assert_eq!(rows, [&['A', 'B'][..], &['A', 'A'][..]]);
    /// ```
    pub fn letter_block(&self) -> impl Iterator<Item = &[char]> {
        self.grid.rows()
    }

    /// Returns the character at `(row, col)`, or `None` when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.grid.get(row, col)
    }

    // ──────── Block operations ────────

    /// Writes `text` into the grid in row-major order.
    ///
    /// Cells past the end of `text` are set to [`FILLER`]; characters past
    /// `block_size()` are ignored.
    pub fn fill_block(&mut self, text: &str) {
        self.grid.fill_row_major(text.chars());
    }

    /// Reads the grid in column-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrypt::Encryptor;
    ///
    /// let mut enc = Encryptor::new(2, 3).unwrap();
    /// enc.fill_block("ABCDEF");
    /// assert_eq!(enc.encrypt_block(), "ADBECF");
    /// ```
    pub fn encrypt_block(&self) -> String {
        let mut out = String::with_capacity(self.block_size());
        self.grid.read_column_major(&mut out);
        out
    }

    /// Writes exactly one block of `text` into the grid in column-major order.
    ///
    /// Unlike [`fill_block`](Self::fill_block) no padding or truncation is
    /// applied.
    ///
    /// # Errors
    /// Returns [`GridCipherError::MalformedCiphertext`] if `text` is not
    /// exactly `block_size()` characters long.
    pub fn reverse_fill_block(&mut self, text: &str) -> Result<()> {
        let chars: Vec<char> = text.chars().collect();
        self.grid.fill_column_major(&chars)
    }

    /// Reads the grid in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrypt::Encryptor;
    ///
    /// let mut enc = Encryptor::new(2, 3).unwrap();
    /// enc.reverse_fill_block("ADBECF").unwrap();
    /// assert_eq!(enc.decrypt_block(), "ABCDEF");
    /// ```
    pub fn decrypt_block(&self) -> String {
        let mut out = String::with_capacity(self.block_size());
        self.grid.read_row_major(&mut out);
        out
    }

    /// Rotates the grid rows upward by `shift`; the top row wraps to the bottom.
    pub fn row_shift(&mut self, shift: usize) {
        self.grid.rotate_rows_up(shift);
    }

    /// Rotates every row left by `shift`; the first column wraps to the last.
    pub fn col_shift(&mut self, shift: usize) {
        self.grid.rotate_cols_left(shift);
    }

    // ──────── Message operations ────────

    /// Encrypts a message.
    ///
    /// The output is always a non-zero multiple of `block_size()` long. A
    /// message whose length is an exact multiple of the block size gets no
    /// extra padding block. The empty message encrypts to one block of
    /// [`FILLER`].
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrypt::Encryptor;
    ///
    /// let mut enc = Encryptor::new(2, 3).unwrap();
    /// assert_eq!(enc.encrypt_message("ABCDEFGH"), "ADBECFGAHAAA");
    /// assert_eq!(enc.encrypt_message(""), "AAAAAA");
    /// ```
    pub fn encrypt_message(&mut self, message: &str) -> String {
        let chars: Vec<char> = message.chars().collect();
        let block_size = self.block_size();
        debug!(
            key = %self.key(),
            len = chars.len(),
            "encrypting message"
        );

        let mut out = String::with_capacity(padded_len(chars.len(), block_size));
        for (i, block) in message_blocks(&chars, block_size).enumerate() {
            trace!(block = i, len = block.len(), "encrypting block");
            self.grid.fill_row_major(block.iter().copied());
            self.grid.read_column_major(&mut out);
        }
        out
    }

    /// Decrypts a message produced by [`encrypt_message`](Self::encrypt_message).
    ///
    /// All trailing [`FILLER`] characters are removed from the result, so a
    /// plaintext that itself ended in `'A'` loses those characters.
    ///
    /// # Errors
    /// Returns [`GridCipherError::MalformedCiphertext`] if the length of
    /// `ciphertext` is not a multiple of `block_size()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrypt::Encryptor;
    ///
    /// let mut enc = Encryptor::new(3, 3).unwrap();
    /// let cipher = enc.encrypt_message("Meet me at noon");
    ///
    /// let mut dec = Encryptor::new(3, 3).unwrap();
    /// assert_eq!(dec.decrypt_message(&cipher).unwrap(), "Meet me at noon");
    /// ```
    pub fn decrypt_message(&mut self, ciphertext: &str) -> Result<String> {
        let chars = self.ciphertext_chars(ciphertext)?;
        debug!(
            key = %self.key(),
            len = chars.len(),
            "decrypting message"
        );

        let mut out = String::with_capacity(chars.len());
        self.untranspose_blocks(&chars, |_| {}, &mut out)?;
        strip_filler(&mut out);
        Ok(out)
    }

    /// Encrypts a message with substitution and rotation layered on top.
    ///
    /// Every block goes through these steps:
    /// 1. each alphabet character moves `shift` positions backward
    ///    (see [`alphabet::char_shift`]),
    /// 2. the substituted block is filled row-major, padded with [`FILLER`],
    /// 3. the rows rotate up by `shift`,
    /// 4. every row rotates left by `shift`,
    /// 5. the grid is read column-major.
    ///
    /// A `shift` of zero is identical to [`encrypt_message`](Self::encrypt_message).
    ///
    /// # Errors
    /// Returns [`GridCipherError::InvalidShift`] if `shift` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrypt::Encryptor;
    ///
    /// let mut enc = Encryptor::new(2, 2).unwrap();
    /// assert_eq!(enc.super_encrypt("bcde", 1).unwrap(), "dbca");
    /// assert!(enc.super_encrypt("bcde", -1).is_err());
    /// ```
    pub fn super_encrypt(&mut self, message: &str, shift: i32) -> Result<String> {
        let shift = validate_shift(shift)?;
        let chars: Vec<char> = message.chars().collect();
        let block_size = self.block_size();
        debug!(
            key = %self.key(),
            len = chars.len(),
            shift,
            "super-encrypting message"
        );

        let mut out = String::with_capacity(padded_len(chars.len(), block_size));
        for (i, block) in message_blocks(&chars, block_size).enumerate() {
            trace!(block = i, len = block.len(), "super-encrypting block");
            self.grid
                .fill_row_major(block.iter().map(|&c| alphabet::shift_back(c, shift)));
            self.grid.rotate_rows_up(shift);
            self.grid.rotate_cols_left(shift);
            self.grid.read_column_major(&mut out);
        }
        Ok(out)
    }

    /// Decrypts a message produced by [`super_encrypt`](Self::super_encrypt)
    /// with the same key and `shift`.
    ///
    /// Trailing [`FILLER`] is stripped before the substitution is undone, so
    /// a plaintext whose *substituted* form ends in `'A'` loses those
    /// characters. With shift 1 a trailing `B` is lost, because `B`
    /// substitutes to `A`.
    ///
    /// # Errors
    /// Returns [`GridCipherError::InvalidShift`] if `shift` is negative, or
    /// [`GridCipherError::MalformedCiphertext`] if the length of
    /// `ciphertext` is not a multiple of `block_size()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrypt::Encryptor;
    ///
    /// let mut enc = Encryptor::new(4, 3).unwrap();
    /// let cipher = enc.super_encrypt("Attack at dawn", 5).unwrap();
    /// assert_eq!(enc.super_decrypt(&cipher, 5).unwrap(), "Attack at dawn");
    /// ```
    ///
    /// A trailing character that substitutes to the filler is dropped:
    ///
    /// ```
    /// use gridcrypt::Encryptor;
    ///
    /// let mut enc = Encryptor::new(2, 2).unwrap();
    /// let cipher = enc.super_encrypt("AB", 1).unwrap();
    /// assert_eq!(cipher, "AAA9");
    /// assert_eq!(enc.super_decrypt(&cipher, 1).unwrap(), "A");
    /// ```
    pub fn super_decrypt(&mut self, ciphertext: &str, shift: i32) -> Result<String> {
        let shift = validate_shift(shift)?;
        let chars = self.ciphertext_chars(ciphertext)?;
        debug!(
            key = %self.key(),
            len = chars.len(),
            shift,
            "super-decrypting message"
        );

        let mut substituted = String::with_capacity(chars.len());
        self.untranspose_blocks(
            &chars,
            |grid| {
                grid.rotate_cols_right(shift);
                grid.rotate_rows_down(shift);
            },
            &mut substituted,
        )?;
        strip_filler(&mut substituted);
        Ok(alphabet::char_unshift(&substituted, shift))
    }

    // ──────── Helpers ────────

    /// Collects `ciphertext` and checks that it splits into whole blocks.
    fn ciphertext_chars(&self, ciphertext: &str) -> Result<Vec<char>> {
        let chars: Vec<char> = ciphertext.chars().collect();
        let block_size = self.block_size();
        if !chars.len().is_multiple_of(block_size) {
            let err = GridCipherError::MalformedCiphertext {
                len: chars.len(),
                block_size,
            };
            warn!(key = %self.key(), "{}", err);
            return Err(err);
        }
        Ok(chars)
    }

    /// Column-major fills each block, applies `undo` to the grid, and
    /// appends the row-major read to `out`.
    fn untranspose_blocks<F>(&mut self, chars: &[char], mut undo: F, out: &mut String) -> Result<()>
    where
        F: FnMut(&mut LetterGrid),
    {
        for (i, block) in chars.chunks(self.block_size()).enumerate() {
            trace!(block = i, "decrypting block");
            self.grid.fill_column_major(block)?;
            undo(&mut self.grid);
            self.grid.read_row_major(out);
        }
        Ok(())
    }
}

/// Splits `chars` into blocks of `block_size`; the empty message is one
/// empty block so that it still produces a filler block.
fn message_blocks(chars: &[char], block_size: usize) -> impl Iterator<Item = &[char]> {
    let empty: &[char] = &[];
    chars
        .chunks(block_size)
        .chain(chars.is_empty().then_some(empty))
}

/// Length of the ciphertext for a plaintext of `len` characters.
fn padded_len(len: usize, block_size: usize) -> usize {
    len.div_ceil(block_size).max(1) * block_size
}

/// Removes every trailing [`FILLER`].
fn strip_filler(text: &mut String) {
    let kept = text.trim_end_matches(FILLER).len();
    text.truncate(kept);
}

fn validate_shift(shift: i32) -> Result<usize> {
    usize::try_from(shift).map_err(|_| {
        warn!(shift, "rejecting negative shift");
        GridCipherError::InvalidShift(shift)
    })
}
