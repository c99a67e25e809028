//! gridcrypt: columnar transposition cipher over fixed-size character grids.
//!
//! A message is cut into blocks of `rows * cols` characters. Each block is
//! written into a grid row by row and read back column by column. The last
//! block is padded with the filler `'A'`, which decryption strips again.
//!
//! This is a classical cipher. It offers no security against cryptanalysis
//! and must not be used to protect real data.
//!
//! # Architecture
//!
//! ```text
//! GridKey     (validated rows × cols, block size)
//!     ↓
//! LetterGrid  (flat row-major buffer — fill/read in either order, rotate)
//!     ↓
//! Encryptor   (block chunking, padding, encrypt/decrypt, super mode)
//!     ↑
//! alphabet    (0-9A-Za-z substitution ring for super mode)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use gridcrypt::Encryptor;
//!
//! let mut encoder = Encryptor::new(3, 4).unwrap();
//! let cipher = encoder.encrypt_message("Meet me by the old oak tree");
//! assert_eq!(cipher.chars().count() % encoder.block_size(), 0);
//!
//! let mut decoder = Encryptor::new(3, 4).unwrap();
//! assert_eq!(
//!     decoder.decrypt_message(&cipher).unwrap(),
//!     "Meet me by the old oak tree"
//! );
//! ```
//!
//! Layer substitution and grid rotation on top:
//!
//! ```
//! use gridcrypt::Encryptor;
//!
//! let mut enc = Encryptor::new(4, 4).unwrap();
//! let cipher = enc.super_encrypt("Rendezvous at 0600", 3).unwrap();
//! assert_eq!(enc.super_decrypt(&cipher, 3).unwrap(), "Rendezvous at 0600");
//! ```
//!
//! Keys can be loaded from configuration:
//!
//! ```
//! use gridcrypt::{Encryptor, GridKey};
//!
//! let key: GridKey = "5x3".parse().unwrap();
//! let enc = Encryptor::from_key(key);
//! assert_eq!(enc.block_size(), 15);
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;

mod encryptor;
pub(crate) mod grid;
mod key;

pub use alphabet::{char_shift, char_unshift};
pub use encryptor::Encryptor;
pub use error::{GridCipherError, Result};
pub use grid::FILLER;
pub use key::GridKey;
