#[cfg(feature = "cbc")]
mod test_cbc;
mod test_masked_sbox;
