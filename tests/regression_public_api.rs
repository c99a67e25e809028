//! Regression tests for the public gridcrypt API.
//!
//! All expected ciphertexts are frozen vectors worked out by hand from the
//! grid layout: any change in output indicates a regression.
//!
//! Coverage:
//! - `Encryptor` block and message operations
//! - `Encryptor` super mode
//! - `alphabet::{char_shift, char_unshift}`
//! - `GridKey` parsing and serde
//! - `GridCipherError`

use gridcrypt::alphabet::{char_shift, char_unshift, ALPHABET, ALPHABET_LEN};
use gridcrypt::{Encryptor, GridCipherError, GridKey, FILLER};

// ═══════════════════════════════════════════════════════════════════════
// Transposition — frozen vectors
// ═══════════════════════════════════════════════════════════════════════

/// Three blocks on a 3×4 grid, the last one padded.
#[test]
fn encrypt_3x4_frozen_vector() {
    let mut enc = Encryptor::new(3, 4).unwrap();
    let cipher = enc.encrypt_message("WEAREDISCOVEREDFLEEATONCE");
    assert_eq!(cipher, "WECEDOAIVRSERLTEEODENFACEAAAAAAAAAAA");
}

#[test]
fn decrypt_3x4_frozen_vector() {
    let mut dec = Encryptor::new(3, 4).unwrap();
    let plain = dec
        .decrypt_message("WECEDOAIVRSERLTEEODENFACEAAAAAAAAAAA")
        .unwrap();
    assert_eq!(plain, "WEAREDISCOVEREDFLEEATONCE");
}

#[test]
fn encrypt_2x3_transposition_example() {
    let mut enc = Encryptor::new(2, 3).unwrap();
    enc.fill_block("ABCDEF");
    let rows: Vec<String> = enc.letter_block().map(|r| r.iter().collect()).collect();
    assert_eq!(rows, ["ABC", "DEF"]);
    assert_eq!(enc.encrypt_block(), "ADBECF");
}

#[test]
fn fill_block_padding_example() {
    let mut enc = Encryptor::new(2, 2).unwrap();
    enc.fill_block("AB");
    assert_eq!(enc.cell(0, 0), Some('A'));
    assert_eq!(enc.cell(0, 1), Some('B'));
    assert_eq!(enc.cell(1, 0), Some(FILLER));
    assert_eq!(enc.cell(1, 1), Some(FILLER));
}

/// Single-row and single-column keys leave the text in place.
#[test]
fn degenerate_keys_are_identity() {
    for (rows, cols) in [(1, 5), (5, 1), (1, 1)] {
        let mut enc = Encryptor::new(rows, cols).unwrap();
        assert_eq!(
            enc.encrypt_message("hello"),
            "hello",
            "key {}x{} should not permute",
            rows,
            cols
        );
    }
}

#[test]
fn empty_message_is_one_filler_block() {
    let mut enc = Encryptor::new(4, 3).unwrap();
    let cipher = enc.encrypt_message("");
    assert_eq!(cipher, "A".repeat(12));
    assert_eq!(enc.decrypt_message(&cipher).unwrap(), "");
}

#[test]
fn decrypt_strips_hello_padding() {
    let mut enc = Encryptor::new(1, 7).unwrap();
    assert_eq!(enc.decrypt_message("HELLOAA").unwrap(), "HELLO");
}

#[test]
fn decrypt_with_wrong_key_is_not_detected() {
    let mut enc = Encryptor::new(3, 4).unwrap();
    let cipher = enc.encrypt_message("WEAREDISCOVEREDFLEEATONCE");
    let mut wrong = Encryptor::new(4, 3).unwrap();
    let plain = wrong.decrypt_message(&cipher).unwrap();
    assert_ne!(plain, "WEAREDISCOVEREDFLEEATONCE");
}

#[test]
fn decrypt_rejects_partial_block() {
    let mut dec = Encryptor::new(3, 4).unwrap();
    assert_eq!(
        dec.decrypt_message("WECEDOAIVRS"),
        Err(GridCipherError::MalformedCiphertext {
            len: 11,
            block_size: 12
        })
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Super mode — frozen vectors
// ═══════════════════════════════════════════════════════════════════════

/// Two blocks on 2×3 with shift 2: the row rotation is a full turn, the
/// column rotation moves two places.
#[test]
fn super_encrypt_2x3_shift_2_frozen_vector() {
    let mut enc = Encryptor::new(2, 3).unwrap();
    assert_eq!(enc.super_encrypt("abcdefgh", 2).unwrap(), "adYbZcAAeAfA");
}

#[test]
fn super_decrypt_2x3_shift_2_frozen_vector() {
    let mut dec = Encryptor::new(2, 3).unwrap();
    assert_eq!(dec.super_decrypt("adYbZcAAeAfA", 2).unwrap(), "abcdefgh");
}

#[test]
fn super_encrypt_3x3_shift_1_frozen_vector() {
    let mut enc = Encryptor::new(3, 3).unwrap();
    assert_eq!(enc.super_encrypt("123456789", 1).unwrap(), "471582360");
}

#[test]
fn super_encrypt_zero_shift_matches_encrypt() {
    let mut enc = Encryptor::new(3, 4).unwrap();
    let base = enc.encrypt_message("WEAREDISCOVEREDFLEEATONCE");
    let sup = enc.super_encrypt("WEAREDISCOVEREDFLEEATONCE", 0).unwrap();
    assert_eq!(base, sup);
}

#[test]
fn super_encrypt_rejects_negative_shift() {
    let mut enc = Encryptor::new(3, 4).unwrap();
    assert_eq!(
        enc.super_encrypt("abc", i32::MIN),
        Err(GridCipherError::InvalidShift(i32::MIN))
    );
}

/// Shifting by a multiple of the ring length and of both grid dimensions
/// is a full turn of every step, so only the transposition remains.
#[test]
fn super_encrypt_full_turn_matches_encrypt() {
    let mut enc = Encryptor::new(2, 31).unwrap();
    let msg = "Full turn of the ring and the grid";
    let full_turn = ALPHABET_LEN as i32;
    assert_eq!(
        enc.super_encrypt(msg, full_turn).unwrap(),
        enc.encrypt_message(msg)
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Alphabet
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn alphabet_table_order() {
    assert_eq!(
        std::str::from_utf8(ALPHABET).unwrap(),
        "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz"
    );
}

#[test]
fn char_shift_examples() {
    assert_eq!(char_shift("B", 1), "A");
    assert_eq!(char_shift("0", 1), "z");
    assert_eq!(char_shift("Hello, World!", 1), "Gdkkn, Vnqkc!");
}

#[test]
fn char_unshift_inverts_char_shift() {
    let text = "Pack my box with five dozen liquor jugs 1234567890";
    assert_eq!(char_unshift(&char_shift(text, 29), 29), text);
}

// ═══════════════════════════════════════════════════════════════════════
// GridKey — parsing and serde
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn key_serde_roundtrip() {
    let key = GridKey::new(3, 4).unwrap();
    let json = serde_json::to_string(&key).unwrap();
    assert_eq!(json, r#"{"rows":3,"cols":4}"#);
    let back: GridKey = serde_json::from_str(&json).unwrap();
    assert_eq!(back, key);
}

#[test]
fn key_deserialize_rejects_zero_dimension() {
    let result: Result<GridKey, _> = serde_json::from_str(r#"{"rows":0,"cols":4}"#);
    let err = result.unwrap_err();
    assert!(
        err.to_string().contains("Invalid key 0x4"),
        "unexpected error: {}",
        err
    );
}

#[test]
fn key_from_str_and_display() {
    let key: GridKey = "6x2".parse().unwrap();
    assert_eq!(key.to_string(), "6x2");
    let enc = Encryptor::from_key(key);
    assert_eq!(enc.rows(), 6);
    assert_eq!(enc.cols(), 2);
}

#[test]
fn encryptor_new_rejects_zero_dimensions() {
    assert_eq!(
        Encryptor::new(0, 0),
        Err(GridCipherError::InvalidKey { rows: 0, cols: 0 })
    );
}

/// A grid too large to allocate is rejected up front instead of panicking
/// when the engine allocates its cells.
#[test]
#[cfg(target_pointer_width = "64")]
fn encryptor_new_rejects_unallocatable_grid() {
    assert_eq!(
        Encryptor::new(1 << 61, 1),
        Err(GridCipherError::InvalidKey {
            rows: 1 << 61,
            cols: 1
        })
    );
    assert!(GridKey::new(1 << 61, 1).is_err());
    let json = format!(r#"{{"rows":{},"cols":1}}"#, 1usize << 61);
    assert!(serde_json::from_str::<GridKey>(&json).is_err());
}
