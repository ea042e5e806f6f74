//! Padding schemes for the ECB/CBC buffer drivers.
//!
//! spec §1 scopes "padding policy selection" out of the masked core itself
//! — the CBC driver's own tail-block handling is a fixed zero-fill, not a
//! PKCS scheme (spec §4.K, §9). These helpers are an opt-in convenience
//! layered on top for callers who want PKCS#7 or 0x80 padding instead of
//! relying on the zero-fill tail; passing `None` gets exactly the zero-fill
//! behavior the spec's core describes.

mod padding_80;
mod pkcs7;

pub use padding_80::{pad_80, unpad_80};
pub use pkcs7::{pkcs7_pad, pkcs7_unpad};

/// Selects an optional padding scheme for the ECB/CBC drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// PKCS#7 padding (RFC 2315 §10.3).
    Pkcs7,
    /// 0x80 padding (ISO/IEC 9797-1 padding method 2): a single 0x80 byte
    /// followed by 0x00 bytes.
    Zero80,
}

#[cfg(test)]
mod tests;
