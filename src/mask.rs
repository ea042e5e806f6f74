//! Mask seed sourcing for the masked forward cipher.
//!
//! The masked S-box circuit (see [`crate::aes::masked_sbox`]) needs a fresh
//! 16-byte mask for every block it processes. The reference C source this
//! crate is derived from hard-codes that mask to a single constant, which
//! provides no DPA resistance against an attacker who can collect traces
//! across many encryptions of the same mask (spec §9). [`MaskSource::Random`]
//! is the production default; [`MaskSource::Fixed`] exists so the reference
//! constant (and its test vectors) remain reproducible.

use rand::rngs::OsRng;
use rand::RngCore;

/// The fixed mask constant used by the original reference implementation.
/// Provided for reproducibility in tests only — it MUST NOT be used in any
/// context where DPA resistance is actually required.
pub const REFERENCE_FIXED_MASK: [u8; 16] = [
    0x13, 0x05, 0x59, 0x81, 0x49, 0xaf, 0xb3, 0x30, 0x29, 0x11, 0xc4, 0xbb, 0x91, 0xe4, 0x98, 0x44,
];

/// Strategy for producing the per-block mask seed consumed by the forward
/// (masked) cipher driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskSource {
    /// Draw 16 fresh bytes from the OS CSPRNG for every block. This is the
    /// only variant that provides the DPA resistance the masked S-box is
    /// designed for.
    Random,
    /// Use a caller-supplied fixed 16-byte mask. Intended for test vectors
    /// and reproducibility only.
    Fixed([u8; 16]),
}

impl Default for MaskSource {
    fn default() -> Self {
        MaskSource::Random
    }
}

impl MaskSource {
    /// Produce the 16-byte mask seed for one block encryption.
    pub(crate) fn seed(&self) -> [u8; 16] {
        match self {
            MaskSource::Random => {
                let mut seed = [0u8; 16];
                OsRng.fill_bytes(&mut seed);
                seed
            }
            MaskSource::Fixed(bytes) => *bytes,
        }
    }
}
