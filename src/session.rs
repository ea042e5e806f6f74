//! Per-caller session state.
//!
//! The reference C source this crate is derived from keeps the expanded
//! round-key buffer, the key pointer, and the IV pointer as file-scope
//! (process-wide) storage, so that `AES128_CBC_*_buffer(..., key, iv)`
//! calls can pass `NULL` to mean "reuse whatever was installed last". That
//! is a re-entrancy hazard, not a design choice (spec §5, §9): two callers
//! using different keys concurrently would corrupt each other's round keys.
//!
//! `Session` lifts that storage into an explicit, caller-owned value. The
//! "pass NULL to reuse" affordance becomes the explicit `_continue` method
//! variants on the CBC driver (see [`crate::aes::cbc`]).

use crate::aes::core::{expand_key, AES_128_KEY_SIZE, ROUND_KEYS_LEN};
use crate::error::AesError;

/// Holds the expanded round-key schedule for one AES-128 key, and (for CBC)
/// the current chaining block.
///
/// Round keys may be reused across any number of blocks and calls that
/// share the same key (spec §3, "Lifecycle").
pub struct Session {
    pub(crate) round_keys: [u8; ROUND_KEYS_LEN],
    pub(crate) iv: Option<[u8; AES_128_KEY_SIZE]>,
}

impl Session {
    /// Expand a 16-byte AES-128 key into a new session.
    ///
    /// Returns [`AesError::InvalidKeyLength`] if `key` is not exactly 16
    /// bytes; AES-192/256 are out of scope for this crate.
    pub fn new(key: &[u8]) -> Result<Session, AesError> {
        if key.len() != AES_128_KEY_SIZE {
            return Err(AesError::InvalidKeyLength { got: key.len() });
        }
        let mut key_arr = [0u8; AES_128_KEY_SIZE];
        key_arr.copy_from_slice(key);

        log::debug!("expanding AES-128 key schedule");
        let round_keys = expand_key(&key_arr);
        Ok(Session {
            round_keys,
            iv: None,
        })
    }

    /// The current CBC chaining block, if one has been established.
    pub fn current_iv(&self) -> Option<&[u8; AES_128_KEY_SIZE]> {
        self.iv.as_ref()
    }
}
