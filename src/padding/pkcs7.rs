//! PKCS#7 Padding and Unpadding Module
//!
//! PKCS#7 padding appends a set of bytes to the end of a data block, each
//! equal to the number of padding bytes added, so the result is a multiple
//! of the block size. If the input is already a multiple of the block
//! size, a full extra block of padding is added, keeping unpadding
//! unambiguous.
//!
//! # Official Standard Reference
//!
//! - PKCS #7: Cryptographic Message Syntax Version 1.5, paragraph 10.3.
//!   "Content-encryption process": <https://www.rfc-editor.org/rfc/rfc2315>.

use crate::error::AesError;

/// Apply PKCS#7 padding to a given byte array, in-place.
///
/// # Arguments
///
/// * `data` : the byte array to pad, in place.
/// * `block_size` : the block size for padding. Must be greater than 0 and
///   less than 256.
///
/// # Errors
///
/// Returns [`AesError::InvalidPadding`] if `block_size` is 0 or >= 256.
pub fn pkcs7_pad(data: &mut Vec<u8>, block_size: usize) -> Result<(), AesError> {
    if block_size == 0 || block_size >= 256 {
        return Err(AesError::InvalidPadding(
            "block size must be greater than 0 and less than 256",
        ));
    }

    let padding_size = block_size - (data.len() % block_size);
    let padding_byte = padding_size as u8;
    data.resize(data.len() + padding_size, padding_byte);

    Ok(())
}

/// Remove PKCS#7 padding from a given byte array, in-place.
///
/// # Errors
///
/// Returns [`AesError::InvalidPadding`] if the input is empty, the padding
/// count is out of range, or the padding bytes are not all equal to the
/// count.
pub fn pkcs7_unpad(data: &mut Vec<u8>) -> Result<(), AesError> {
    let padding_byte = *data
        .last()
        .ok_or(AesError::InvalidPadding("input data is empty"))? as usize;

    if padding_byte == 0 || padding_byte > data.len() {
        return Err(AesError::InvalidPadding("invalid padding"));
    }

    if data
        .iter()
        .rev()
        .take(padding_byte)
        .any(|&x| x as usize != padding_byte)
    {
        return Err(AesError::InvalidPadding(
            "padding bytes are not consistent",
        ));
    }

    data.truncate(data.len() - padding_byte);

    Ok(())
}
