//! CBC driver tests, including the NIST SP 800-38A F.2.1/F.2.2 AES-128 CBC
//! scenario vector (spec §8.7).

use crate::{AesError, Padding, Session};

const NIST_KEY: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];

const NIST_IV: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
];

const NIST_PLAINTEXT: [u8; 64] = [
    0x6b, 0xc1, 0xbe, 0xe2, 0x2e, 0x40, 0x9f, 0x96, 0xe9, 0x3d, 0x7e, 0x11, 0x73, 0x93, 0x17, 0x2a,
    0xae, 0x2d, 0x8a, 0x57, 0x1e, 0x03, 0xac, 0x9c, 0x9e, 0xb7, 0x6f, 0xac, 0x45, 0xaf, 0x8e, 0x51,
    0x30, 0xc8, 0x1c, 0x46, 0xa3, 0x5c, 0xe4, 0x11, 0xe5, 0xfb, 0xc1, 0x19, 0x1a, 0x0a, 0x52, 0xef,
    0xf6, 0x9f, 0x24, 0x45, 0xdf, 0x4f, 0x9b, 0x17, 0xad, 0x2b, 0x41, 0x7b, 0xe6, 0x6c, 0x37, 0x10,
];

const NIST_CIPHERTEXT: [u8; 64] = [
    0x76, 0x49, 0xab, 0xac, 0x81, 0x19, 0xb2, 0x46, 0xce, 0xe9, 0x8e, 0x9b, 0x12, 0xe9, 0x19, 0x7d,
    0x50, 0x86, 0xcb, 0x9b, 0x50, 0x72, 0x19, 0xee, 0x95, 0xdb, 0x11, 0x3a, 0x91, 0x76, 0x78, 0xb2,
    0x73, 0xbe, 0xd6, 0xb8, 0xe3, 0xc1, 0x74, 0x3b, 0x71, 0x16, 0xe6, 0x9e, 0x22, 0x22, 0x95, 0x16,
    0x3f, 0xf1, 0xca, 0xa1, 0x68, 0x1f, 0xac, 0x09, 0x12, 0x0e, 0xca, 0x30, 0x75, 0x86, 0xe1, 0xa7,
];

#[test]
fn cbc_encrypt_matches_nist_sp800_38a_vector() {
    let mut session = Session::new(&NIST_KEY).unwrap();
    let ciphertext = session
        .cbc_encrypt(&NIST_PLAINTEXT, &NIST_IV, None)
        .unwrap();
    assert_eq!(ciphertext, NIST_CIPHERTEXT);
}

#[test]
fn cbc_decrypt_matches_nist_sp800_38a_vector() {
    let mut session = Session::new(&NIST_KEY).unwrap();
    let plaintext = session
        .cbc_decrypt(&NIST_CIPHERTEXT, &NIST_IV, None)
        .unwrap();
    assert_eq!(plaintext, NIST_PLAINTEXT);
}

#[test]
fn cbc_encrypt_continue_matches_single_call_over_same_blocks() {
    let mut one_shot = Session::new(&NIST_KEY).unwrap();
    let whole = one_shot.cbc_encrypt(&NIST_PLAINTEXT, &NIST_IV, None).unwrap();

    let mut split = Session::new(&NIST_KEY).unwrap();
    let mut chained = split.cbc_encrypt(&NIST_PLAINTEXT[..32], &NIST_IV, None).unwrap();
    chained.extend(split.cbc_encrypt_continue(&NIST_PLAINTEXT[32..], None).unwrap());

    assert_eq!(chained, whole);
}

#[test]
fn cbc_round_trips_on_block_aligned_buffers_with_pkcs7() {
    let key = [0x11u8; 16];
    let iv = [0x22u8; 16];
    let mut enc = Session::new(&key).unwrap();
    let mut dec = Session::new(&key).unwrap();
    let message = b"exactly32bytes-of-plaintext!!!!";
    assert_eq!(message.len() % 16, 0);

    let ciphertext = enc.cbc_encrypt(message, &iv, Some(Padding::Pkcs7)).unwrap();
    let plaintext = dec.cbc_decrypt(&ciphertext, &iv, Some(Padding::Pkcs7)).unwrap();
    assert_eq!(plaintext, message);
}

#[test]
fn cbc_continue_without_prior_iv_is_an_error() {
    let mut session = Session::new(&[0u8; 16]).unwrap();
    let err = session.cbc_encrypt_continue(b"0123456789abcdef", None).unwrap_err();
    assert_eq!(err, AesError::NoActiveSession);
}
