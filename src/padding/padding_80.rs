//! 0x80 Padding Module (ISO/IEC 9797-1 padding method 2)
//!
//! Appends a single 0x80 byte followed by 0x00 bytes until the data length
//! aligns with a specified block size.

use crate::error::AesError;

/// Apply 0x80 padding to a given byte array, in-place.
///
/// # Errors
///
/// Returns [`AesError::InvalidPadding`] if `block_size` is 0.
pub fn pad_80(data: &mut Vec<u8>, block_size: usize) -> Result<(), AesError> {
    if block_size == 0 {
        return Err(AesError::InvalidPadding("block size must be greater than 0"));
    }

    data.push(0x80);
    while data.len() % block_size != 0 {
        data.push(0x00);
    }

    Ok(())
}

/// Remove 0x80 padding from a given byte array, in-place.
///
/// # Errors
///
/// Returns [`AesError::InvalidPadding`] if the 0x80 marker is missing or is
/// followed by anything other than 0x00 bytes.
pub fn unpad_80(data: &mut Vec<u8>) -> Result<(), AesError> {
    if let Some(position) = data.iter().rposition(|&x| x == 0x80) {
        if data[position + 1..].iter().all(|&x| x == 0x00) {
            data.truncate(position);
            Ok(())
        } else {
            Err(AesError::InvalidPadding("invalid padding"))
        }
    } else {
        Err(AesError::InvalidPadding("padding byte not found"))
    }
}
