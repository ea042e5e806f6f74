//! A software AES-128 implementation whose forward (encryption) path runs
//! every S-box lookup through a first-order Boolean-masked evaluator,
//! alongside standard ECB and CBC buffer drivers.
//!
//! Masking splits every sensitive byte `v` into a pair `(t, m)` with
//! `v = t ^ m`, and pushes that pair through a ~130-gate Boolean circuit for
//! the S-box (see [`aes::masked_sbox`]) so that no single wire in the
//! circuit ever carries an unmasked intermediate value. This defends
//! against first-order differential power analysis; it is not a substitute
//! for algorithmic-level countermeasures against higher-order attacks.
//!
//! Decryption is not masked: the inverse S-box is a plain table lookup, as
//! is standard in software AES implementations that only need to protect
//! the encryption side.
//!
//! This crate is fixed to AES-128 (16-byte keys, 10 rounds). AES-192/256,
//! authenticated modes (GCM, CMAC), and padding-policy enforcement beyond
//! the two optional schemes in [`padding`] are all out of scope.
//!
//! # Example
//!
//! ```
//! use masked_aes::{Padding, Session};
//!
//! let key = [0u8; 16];
//! let session = Session::new(&key).expect("16-byte key");
//! let ciphertext = session
//!     .ecb_encrypt(b"0123456789abcdef", None)
//!     .expect("block-aligned plaintext");
//! let plaintext = session.ecb_decrypt(&ciphertext, None).unwrap();
//! assert_eq!(plaintext, b"0123456789abcdef");
//! ```

pub mod aes;
mod error;
mod mask;
pub mod padding;
mod session;

pub use aes::{AES_128_KEY_SIZE, AES_BLOCK_SIZE};
pub use error::AesError;
pub use mask::{MaskSource, REFERENCE_FIXED_MASK};
pub use padding::Padding;
pub use session::Session;
