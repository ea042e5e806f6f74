//! Error types for the masked AES core.
//!
//! Every public fallible entry point returns `Result<T, AesError>` rather
//! than a boxed trait object. The core has no recoverable error states
//! beyond malformed caller input (see spec §7): invalid key or buffer
//! lengths, malformed padding, and the "no session configured yet" case
//! that arises from the CBC continuation calls.

use thiserror::Error;

/// Errors produced by the masked AES core, ECB/CBC drivers, and padding
/// helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AesError {
    /// The supplied key was not 16 bytes. This implementation is fixed to
    /// AES-128 (16-byte key, 10 rounds); AES-192/256 are out of scope.
    #[error("invalid AES key length: expected 16 bytes, got {got}")]
    InvalidKeyLength { got: usize },

    /// A buffer's length was not a multiple of `AES_BLOCK_SIZE` when no
    /// padding scheme was requested.
    #[error("buffer length {got} is not a multiple of {expected_multiple_of}")]
    InvalidBufferLength {
        got: usize,
        expected_multiple_of: usize,
    },

    /// A padding or unpadding operation failed (bad block size, inconsistent
    /// padding bytes, missing padding marker, empty input).
    #[error("invalid padding: {0}")]
    InvalidPadding(&'static str),

    /// A CBC continuation call (`cbc_encrypt_continue` / `cbc_decrypt_continue`)
    /// was made before any IV had been established on the session.
    #[error("no active CBC chaining state: call the non-continuing variant first")]
    NoActiveSession,
}
