//! AES-128 Electronic Codebook (ECB) mode.
//!
//! ECB operates independently on each 16-byte block and applies no
//! chaining. It does not provide serious confidentiality for data with
//! repeated block-sized patterns; it remains useful as the simplest mode
//! and as the basis the key schedule and masked core are exercised through.

use super::core::{cipher, inv_cipher, AES_BLOCK_SIZE};
use crate::error::AesError;
use crate::mask::MaskSource;
use crate::padding::{pad_80, pkcs7_pad, pkcs7_unpad, unpad_80, Padding};
use crate::session::Session;

/// Encrypt a single block with the masked forward cipher, drawing a fresh
/// mask seed from [`MaskSource::Random`].
pub fn aes128_ecb_encrypt_block(input: &[u8; AES_BLOCK_SIZE], session: &Session) -> [u8; AES_BLOCK_SIZE] {
    aes128_ecb_encrypt_block_with_mask(input, session, MaskSource::Random)
}

/// Encrypt a single block with the masked forward cipher using an
/// explicitly chosen mask source. Exposed for tests that need determinism
/// or that verify the mask-invariance property (spec §8.4); production
/// callers should use [`aes128_ecb_encrypt_block`].
pub fn aes128_ecb_encrypt_block_with_mask(
    input: &[u8; AES_BLOCK_SIZE],
    session: &Session,
    mask: MaskSource,
) -> [u8; AES_BLOCK_SIZE] {
    let seed = mask.seed();
    cipher(input, &session.round_keys, &seed)
}

/// Decrypt a single block with the unmasked inverse cipher.
pub fn aes128_ecb_decrypt_block(input: &[u8; AES_BLOCK_SIZE], session: &Session) -> [u8; AES_BLOCK_SIZE] {
    inv_cipher(input, &session.round_keys)
}

impl Session {
    /// Encrypt `plaintext` in ECB mode with optional padding.
    ///
    /// With `padding: None`, `plaintext.len()` must already be a multiple
    /// of [`AES_BLOCK_SIZE`] (ECB has no implicit tail handling of its own;
    /// that behavior is specific to the CBC driver).
    pub fn ecb_encrypt(&self, plaintext: &[u8], padding: Option<Padding>) -> Result<Vec<u8>, AesError> {
        let mut data = plaintext.to_vec();
        match padding {
            Some(Padding::Pkcs7) => pkcs7_pad(&mut data, AES_BLOCK_SIZE)?,
            Some(Padding::Zero80) => pad_80(&mut data, AES_BLOCK_SIZE)?,
            None if data.len() % AES_BLOCK_SIZE != 0 => {
                return Err(AesError::InvalidBufferLength {
                    got: data.len(),
                    expected_multiple_of: AES_BLOCK_SIZE,
                });
            }
            _ => {}
        }

        log::debug!("ECB encrypt: {} block(s)", data.len() / AES_BLOCK_SIZE);
        let mut ciphertext = Vec::with_capacity(data.len());
        for block in data.chunks(AES_BLOCK_SIZE) {
            let mut block_array = [0u8; AES_BLOCK_SIZE];
            block_array.copy_from_slice(block);
            ciphertext.extend_from_slice(&aes128_ecb_encrypt_block(&block_array, self));
        }
        Ok(ciphertext)
    }

    /// Decrypt `ciphertext` in ECB mode, optionally removing padding applied
    /// at encryption time.
    pub fn ecb_decrypt(&self, ciphertext: &[u8], padding: Option<Padding>) -> Result<Vec<u8>, AesError> {
        if ciphertext.len() % AES_BLOCK_SIZE != 0 {
            return Err(AesError::InvalidBufferLength {
                got: ciphertext.len(),
                expected_multiple_of: AES_BLOCK_SIZE,
            });
        }

        log::debug!(
            "ECB decrypt: {} block(s)",
            ciphertext.len() / AES_BLOCK_SIZE
        );
        let mut plaintext = Vec::with_capacity(ciphertext.len());
        for block in ciphertext.chunks(AES_BLOCK_SIZE) {
            let mut block_array = [0u8; AES_BLOCK_SIZE];
            block_array.copy_from_slice(block);
            plaintext.extend_from_slice(&aes128_ecb_decrypt_block(&block_array, self));
        }

        match padding {
            Some(Padding::Pkcs7) => pkcs7_unpad(&mut plaintext)?,
            Some(Padding::Zero80) => unpad_80(&mut plaintext)?,
            _ => {}
        }

        Ok(plaintext)
    }
}
