//! Substitution alphabet for the super-encryption mode.
//!
//! The alphabet is the ring `0-9`, `A-Z`, `a-z`. Shifting a character moves
//! it along that ring; characters outside the ring are left untouched.
//! Lookup goes through a table built at compile time, so each substitution
//! is a single array index.

/// The substitution ring, in order.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Number of symbols in [`ALPHABET`].
pub const ALPHABET_LEN: usize = 62;

/// Sentinel for ASCII bytes that are not part of the ring.
const NOT_IN_ALPHABET: u8 = u8::MAX;

/// ASCII byte -> position in [`ALPHABET`].
const INDEX_TABLE: [u8; 128] = build_index_table();

const fn build_index_table() -> [u8; 128] {
    let mut table = [NOT_IN_ALPHABET; 128];
    let mut i = 0;
    while i < ALPHABET_LEN {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns the ring position of `c`, or `None` if `c` is not in the ring.
pub(crate) fn index_of(c: char) -> Option<usize> {
    if !c.is_ascii() {
        return None;
    }
    match INDEX_TABLE[c as usize] {
        NOT_IN_ALPHABET => None,
        idx => Some(idx as usize),
    }
}

/// Moves `c` backward by `shift` positions, wrapping from `0` to `z`.
pub(crate) fn shift_back(c: char, shift: usize) -> char {
    match index_of(c) {
        Some(idx) => {
            let net = shift % ALPHABET_LEN;
            ALPHABET[(idx + ALPHABET_LEN - net) % ALPHABET_LEN] as char
        }
        None => c,
    }
}

/// Moves `c` forward by `shift` positions, wrapping from `z` to `0`.
pub(crate) fn shift_forward(c: char, shift: usize) -> char {
    match index_of(c) {
        Some(idx) => ALPHABET[(idx + shift % ALPHABET_LEN) % ALPHABET_LEN] as char,
        None => c,
    }
}

/// Shifts every ring character of `text` backward by `shift` positions.
///
/// This is the substitution step of super encryption. A shift of one maps
/// `B` to `A` and `0` to `z`; a shift equal to the ring length is the
/// identity.
///
/// # Examples
///
/// ```
/// use gridcrypt::alphabet::char_shift;
///
/// assert_eq!(char_shift("B", 1), "A");
/// assert_eq!(char_shift("0", 1), "z");
/// assert_eq!(char_shift("a-b", 1), "Z-a");
/// ```
pub fn char_shift(text: &str, shift: usize) -> String {
    text.chars().map(|c| shift_back(c, shift)).collect()
}

/// Inverse of [`char_shift`]: shifts every ring character forward.
///
/// # Examples
///
/// ```
/// use gridcrypt::alphabet::{char_shift, char_unshift};
///
/// let shifted = char_shift("Hello, World 42", 17);
/// assert_eq!(char_unshift(&shifted, 17), "Hello, World 42");
/// ```
pub fn char_unshift(text: &str, shift: usize) -> String {
    text.chars().map(|c| shift_forward(c, shift)).collect()
}
