//! Exhaustive equivalence checks for the masked S-box evaluator (spec §8.5)
//! and the masked AND gadget it's built from.

use super::super::masked_sbox::{masked_and, masked_sbox, table_sbox};

#[test]
fn masked_sbox_matches_table_exhaustive() {
    for num in 0u16..256 {
        for num_m in 0u16..256 {
            let num = num as u8;
            let num_m = num_m as u8;
            let (t, tm) = masked_sbox(num, num_m);
            let unmasked_in = num ^ num_m;
            let unmasked_out = t ^ tm;
            assert_eq!(
                unmasked_out,
                table_sbox(unmasked_in),
                "mismatch for num={num:#04x} num_m={num_m:#04x}"
            );
        }
    }
}

#[test]
fn masked_and_gadget_preserves_unmasked_and() {
    for p in 0u16..256 {
        for q in 0u16..256 {
            let p = p as u8;
            let q = q as u8;
            // Split p and q into arbitrary masked representations.
            let p1 = p;
            let p2 = 0u8;
            let q1 = q;
            let q2 = 0u8;
            let (z, m) = masked_and(p1, p2, q1, q2);
            assert_eq!(z ^ m, p & q);
        }
    }
}
