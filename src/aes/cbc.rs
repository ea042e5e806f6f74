//! AES-128 Cipher Block Chaining (CBC) mode.
//!
//! Each block is XORed with the previous ciphertext block (or the IV, for
//! the first block) before encryption, chaining blocks together so that
//! identical plaintext blocks no longer produce identical ciphertext.
//!
//! Unlike the ECB driver, the CBC driver has an opinion about the final,
//! less-than-a-block tail: it zero-fills it and encrypts it directly,
//! without XORing it against the chaining value first, and it leaves the
//! chaining value itself untouched afterward. Both of these mirror the
//! reference driver's buffer handling exactly: neither `if(remainders)`
//! block in the reference updates `Iv` after handling the tail. This is a
//! deliberate, documented choice rather than a bug (see the note on the
//! tail block below and DESIGN.md). It only matters for callers who pass an
//! explicit `padding: None` and a buffer whose length isn't a multiple of
//! the block size; the round-trip guarantee (spec §8.3) is scoped to
//! block-aligned buffers, where this path is never exercised.

use super::core::{cipher, inv_cipher, AES_BLOCK_SIZE};
use crate::error::AesError;
use crate::mask::MaskSource;
use crate::padding::{pad_80, pkcs7_pad, pkcs7_unpad, unpad_80, Padding};
use crate::session::Session;

fn xor_block(a: &[u8], b: &[u8; AES_BLOCK_SIZE], out: &mut [u8; AES_BLOCK_SIZE]) {
    for i in 0..AES_BLOCK_SIZE {
        out[i] = a[i] ^ b[i];
    }
}

impl Session {
    /// Encrypt `plaintext` in CBC mode, starting a new chain from `iv`.
    ///
    /// The session remembers the resulting chaining value so that
    /// [`Session::cbc_encrypt_continue`] can extend the same stream across
    /// calls, without the caller ever touching a global or static IV slot.
    pub fn cbc_encrypt(
        &mut self,
        plaintext: &[u8],
        iv: &[u8; AES_BLOCK_SIZE],
        padding: Option<Padding>,
    ) -> Result<Vec<u8>, AesError> {
        self.iv = Some(*iv);
        self.cbc_encrypt_continue(plaintext, padding)
    }

    /// Encrypt `plaintext` in CBC mode, continuing the chain left by the
    /// previous `cbc_encrypt`/`cbc_encrypt_continue` call on this session.
    ///
    /// Returns [`AesError::NoActiveSession`] if no IV has been established
    /// yet.
    pub fn cbc_encrypt_continue(
        &mut self,
        plaintext: &[u8],
        padding: Option<Padding>,
    ) -> Result<Vec<u8>, AesError> {
        let mut data = plaintext.to_vec();
        match padding {
            Some(Padding::Pkcs7) => pkcs7_pad(&mut data, AES_BLOCK_SIZE)?,
            Some(Padding::Zero80) => pad_80(&mut data, AES_BLOCK_SIZE)?,
            None => {}
        }

        let mut chain = self.iv.ok_or(AesError::NoActiveSession)?;
        log::debug!("CBC encrypt: {} input byte(s)", data.len());

        let full_len = (data.len() / AES_BLOCK_SIZE) * AES_BLOCK_SIZE;
        let mut ciphertext = Vec::with_capacity(full_len + AES_BLOCK_SIZE);

        for block in data[..full_len].chunks(AES_BLOCK_SIZE) {
            let mut scratch = [0u8; AES_BLOCK_SIZE];
            xor_block(block, &chain, &mut scratch);
            let seed = MaskSource::Random.seed();
            let encrypted = cipher(&scratch, &self.round_keys, &seed);
            ciphertext.extend_from_slice(&encrypted);
            chain = encrypted;
        }

        let remainder = &data[full_len..];
        if !remainder.is_empty() {
            let mut tail = [0u8; AES_BLOCK_SIZE];
            tail[..remainder.len()].copy_from_slice(remainder);
            let seed = MaskSource::Random.seed();
            let encrypted = cipher(&tail, &self.round_keys, &seed);
            ciphertext.extend_from_slice(&encrypted);
        }

        self.iv = Some(chain);
        Ok(ciphertext)
    }

    /// Decrypt `ciphertext` in CBC mode, starting a new chain from `iv`.
    pub fn cbc_decrypt(
        &mut self,
        ciphertext: &[u8],
        iv: &[u8; AES_BLOCK_SIZE],
        padding: Option<Padding>,
    ) -> Result<Vec<u8>, AesError> {
        self.iv = Some(*iv);
        self.cbc_decrypt_continue(ciphertext, padding)
    }

    /// Decrypt `ciphertext` in CBC mode, continuing the chain left by the
    /// previous `cbc_decrypt`/`cbc_decrypt_continue` call on this session.
    ///
    /// Returns [`AesError::NoActiveSession`] if no IV has been established
    /// yet.
    pub fn cbc_decrypt_continue(
        &mut self,
        ciphertext: &[u8],
        padding: Option<Padding>,
    ) -> Result<Vec<u8>, AesError> {
        let mut chain = self.iv.ok_or(AesError::NoActiveSession)?;
        log::debug!("CBC decrypt: {} input byte(s)", ciphertext.len());

        let full_len = (ciphertext.len() / AES_BLOCK_SIZE) * AES_BLOCK_SIZE;
        let mut plaintext = Vec::with_capacity(ciphertext.len());

        for block in ciphertext[..full_len].chunks(AES_BLOCK_SIZE) {
            let mut block_array = [0u8; AES_BLOCK_SIZE];
            block_array.copy_from_slice(block);
            let decrypted = inv_cipher(&block_array, &self.round_keys);
            let mut recovered = [0u8; AES_BLOCK_SIZE];
            xor_block(&decrypted, &chain, &mut recovered);
            plaintext.extend_from_slice(&recovered);
            chain = block_array;
        }

        let remainder = &ciphertext[full_len..];
        if !remainder.is_empty() {
            let mut tail = [0u8; AES_BLOCK_SIZE];
            tail[..remainder.len()].copy_from_slice(remainder);
            let decrypted = inv_cipher(&tail, &self.round_keys);
            plaintext.extend_from_slice(&decrypted[..remainder.len()]);
        }

        self.iv = Some(chain);

        match padding {
            Some(Padding::Pkcs7) => pkcs7_unpad(&mut plaintext)?,
            Some(Padding::Zero80) => unpad_80(&mut plaintext)?,
            None => {}
        }

        Ok(plaintext)
    }
}
