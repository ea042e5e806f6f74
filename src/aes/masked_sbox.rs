//! The masked, gate-level AES S-box evaluator.
//!
//! This is the part of the crate that actually earns the "DPA-resistant"
//! label: a ~130-gate Boolean circuit (of the Boyar-Peralta compact-form
//! family) that evaluates the AES S-box on a masked input `(num, num_m)`
//! such that `num ^ num_m` is the unmasked byte, and returns a masked output
//! `(t, tm)` such that `t ^ tm` equals `sbox[num ^ num_m]`, without ever
//! materializing the unmasked byte on an internal wire that isn't protected
//! by the masked AND gadget.
//!
//! The gate list below is reproduced gate-for-gate from the reference
//! implementation this crate is derived from (`getSBoxValuem` in the
//! original C source). Every `Tn`/`Mn`/`Ln` signal and its mask counterpart
//! (`Tnm`/`Mnm`/`Lnm`) is computed in the same order and from the same
//! inputs as the source. Reordering or renaming these gates is not a
//! cosmetic change — the masked-AND bias cancellation in the output stage
//! depends on this exact structure. Any modification here must be checked
//! against the exhaustive equivalence test in
//! `src/aes/tests/test_masked_sbox.rs`.

use super::core::S_BOX;

/// The masked AND gadget (spec §4.E).
///
/// Given two masked bits `(p1, p2)` and `(q1, q2)` (bitsliced across all 8
/// lanes of a byte), returns `(z, m)` such that the unmasked AND of the two
/// unmasked operands equals `z ^ m`. The four partial ANDs are computed
/// before any cross-combination, so no single wire in this function ever
/// carries the AND of the two unmasked operands.
pub(crate) fn masked_and(p1: u8, p2: u8, q1: u8, q2: u8) -> (u8, u8) {
    let r: u8 = 0xff;
    let n1 = p1 & q1;
    let n11 = p2 & q2;
    let n2 = p2 & q1;
    let n3 = p1 & q2;
    let n4 = r ^ n1;

    let z = n3 ^ n4;
    let m = n2 ^ n11 ^ r;
    (z, m)
}

/// Evaluate the masked AES S-box on one masked byte.
///
/// `num ^ num_m` is the unmasked input byte. Returns `(t, tm)` such that
/// `t ^ tm == S_BOX[num ^ num_m]`.
pub fn masked_sbox(num: u8, num_m: u8) -> (u8, u8) {
    // Stage 1: unpack into eight bit-lanes per side. Each lane carries the
    // target bit in position 0 plus irrelevant higher-order noise; the
    // circuit is insensitive to that noise because the final repack masks
    // each lane with 0x01 before assembly.
    let u0 = num;
    let u1 = num >> 1;
    let u2 = num >> 2;
    let u3 = num >> 3;
    let u4 = num >> 4;
    let u5 = num >> 5;
    let u6 = num >> 6;
    let u7 = num >> 7;

    let u0m = num_m;
    let u1m = num_m >> 1;
    let u2m = num_m >> 2;
    let u3m = num_m >> 3;
    let u4m = num_m >> 4;
    let u5m = num_m >> 5;
    let u6m = num_m >> 6;
    let u7m = num_m >> 7;

    // Stage 2: top linear layer.
    let t1 = u7 ^ u4;
    let t1m = u7m ^ u4m;
    let t2 = u7 ^ u2;
    let t2m = u7m ^ u2m;
    let t3 = u7 ^ u1;
    let t3m = u7m ^ u1m;
    let t4 = u4 ^ u2;
    let t4m = u4m ^ u2m;
    let t5 = u3 ^ u1;
    let t5m = u3m ^ u1m;
    let t6 = t1 ^ t5;
    let t6m = t1m ^ t5m;
    let t7 = u6 ^ u5;
    let t7m = u6m ^ u5m;
    let t8 = u0 ^ t6;
    let t8m = u0m ^ t6m;
    let t9 = u0 ^ t7;
    let t9m = u0m ^ t7m;
    let t10 = t6 ^ t7;
    let t10m = t6m ^ t7m;
    let t11 = u6 ^ u2;
    let t11m = u6m ^ u2m;
    let t12 = u5 ^ u2;
    let t12m = u5m ^ u2m;
    let t13 = t3 ^ t4;
    let t13m = t3m ^ t4m;
    let t14 = t6 ^ t11;
    let t14m = t6m ^ t11m;
    let t15 = t5 ^ t11;
    let t15m = t5m ^ t11m;
    let t16 = t5 ^ t12;
    let t16m = t5m ^ t12m;
    let t17 = t9 ^ t16;
    let t17m = t9m ^ t16m;
    let t18 = u4 ^ u0;
    let t18m = u4m ^ u0m;
    let t19 = t7 ^ t18;
    let t19m = t7m ^ t18m;
    let t20 = t1 ^ t19;
    let t20m = t1m ^ t19m;
    let t21 = u1 ^ u0;
    let t21m = u1m ^ u0m;
    let t22 = t7 ^ t21;
    let t22m = t7m ^ t21m;
    let t23 = t2 ^ t22;
    let t23m = t2m ^ t22m;
    let t24 = t2 ^ t10;
    let t24m = t2m ^ t10m;
    let t25 = t20 ^ t17;
    let t25m = t20m ^ t17m;
    let t26 = t3 ^ t16;
    let t26m = t3m ^ t16m;
    let t27 = t1 ^ t12;
    let t27m = t1m ^ t12m;

    // Stage 3: non-linear middle layer. Every AND is a masked_and gadget
    // call; every XOR combines corresponding value/mask pairs independently.
    let (m1, m1m) = masked_and(t13, t13m, t6, t6m);
    let (m2, m2m) = masked_and(t23, t23m, t8, t8m);
    let m3 = t14 ^ m1;
    let m3m = t14m ^ m1m;

    let (m4, m4m) = masked_and(t19, t19m, u0, u0m);
    let m5 = m4 ^ m1;
    let m5m = m4m ^ m1m;

    let (m6, m6m) = masked_and(t3, t3m, t16, t16m);
    let (m7, m7m) = masked_and(t22, t22m, t9, t9m);
    let m8 = t26 ^ m6;
    let m8m = t26m ^ m6m;

    let (m9, m9m) = masked_and(t20, t20m, t17, t17m);
    let m10 = m9 ^ m6;
    let m10m = m9m ^ m6m;

    let (m11, m11m) = masked_and(t1, t1m, t15, t15m);
    let (m12, m12m) = masked_and(t4, t4m, t27, t27m);
    let m13 = m12 ^ m11;
    let m13m = m12m ^ m11m;

    let (m14, m14m) = masked_and(t2, t2m, t10, t10m);
    let m15 = m14 ^ m11;
    let m15m = m14m ^ m11m;
    let m16 = m3 ^ m2;
    let m16m = m3m ^ m2m;
    let m17 = m5 ^ t24;
    let m17m = m5m ^ t24m;
    let m18 = m8 ^ m7;
    let m18m = m8m ^ m7m;
    let m19 = m10 ^ m15;
    let m19m = m10m ^ m15m;
    let m20 = m16 ^ m13;
    let m20m = m16m ^ m13m;
    let m21 = m17 ^ m15;
    let m21m = m17m ^ m15m;
    let m22 = m18 ^ m13;
    let m22m = m18m ^ m13m;
    let m23 = m19 ^ t25;
    let m23m = m19m ^ t25m;
    let m24 = m22 ^ m23;
    let m24m = m22m ^ m23m;

    let (m25, m25m) = masked_and(m22, m22m, m20, m20m);
    let m26 = m21 ^ m25;
    let m26m = m21m ^ m25m;
    let m27 = m20 ^ m21;
    let m27m = m20m ^ m21m;
    let m28 = m23 ^ m25;
    let m28m = m23m ^ m25m;

    let (m29, m29m) = masked_and(m28, m28m, m27, m27m);
    let (m30, m30m) = masked_and(m26, m26m, m24, m24m);
    let (m31, m31m) = masked_and(m20, m20m, m23, m23m);
    let (m32, m32m) = masked_and(m27, m27m, m31, m31m);

    let m33 = m27 ^ m25;
    let m33m = m27m ^ m25m;

    let (m34, m34m) = masked_and(m21, m21m, m22, m22m);
    let (m35, m35m) = masked_and(m24, m24m, m34, m34m);

    let m36 = m24 ^ m25;
    let m36m = m24m ^ m25m;
    let m37 = m21 ^ m29;
    let m37m = m21m ^ m29m;
    let m38 = m32 ^ m33;
    let m38m = m32m ^ m33m;
    let m39 = m23 ^ m30;
    let m39m = m23m ^ m30m;
    let m40 = m35 ^ m36;
    let m40m = m35m ^ m36m;
    let m41 = m38 ^ m40;
    let m41m = m38m ^ m40m;
    let m42 = m37 ^ m39;
    let m42m = m37m ^ m39m;
    let m43 = m37 ^ m38;
    let m43m = m37m ^ m38m;
    let m44 = m39 ^ m40;
    let m44m = m39m ^ m40m;
    let m45 = m42 ^ m41;
    let m45m = m42m ^ m41m;

    let (m46, m46m) = masked_and(m44, m44m, t6, t6m);
    let (m47, m47m) = masked_and(m40, m40m, t8, t8m);
    let (m48, m48m) = masked_and(m39, m39m, u0, u0m);
    let (m49, m49m) = masked_and(m43, m43m, t16, t16m);
    let (m50, m50m) = masked_and(m38, m38m, t9, t9m);
    let (m51, m51m) = masked_and(m37, m37m, t17, t17m);
    let (m52, m52m) = masked_and(m42, m42m, t15, t15m);
    let (m53, m53m) = masked_and(m45, m45m, t27, t27m);
    let (m54, m54m) = masked_and(m41, m41m, t10, t10m);
    let (m55, m55m) = masked_and(m44, m44m, t13, t13m);
    let (m56, m56m) = masked_and(m40, m40m, t23, t23m);
    let (m57, m57m) = masked_and(m39, m39m, t19, t19m);
    let (m58, m58m) = masked_and(m43, m43m, t3, t3m);
    let (m59, m59m) = masked_and(m38, m38m, t22, t22m);
    let (m60, m60m) = masked_and(m37, m37m, t20, t20m);
    let (m61, m61m) = masked_and(m42, m42m, t1, t1m);
    let (m62, m62m) = masked_and(m45, m45m, t4, t4m);
    let (m63, m63m) = masked_and(m41, m41m, t2, t2m);

    // Stage 4: bottom linear layer.
    let l0 = m61 ^ m62;
    let l0m = m61m ^ m62m;
    let l1 = m50 ^ m56;
    let l1m = m50m ^ m56m;
    let l2 = m46 ^ m48;
    let l2m = m46m ^ m48m;
    let l3 = m47 ^ m55;
    let l3m = m47m ^ m55m;
    let l4 = m54 ^ m58;
    let l4m = m54m ^ m58m;
    let l5 = m49 ^ m61;
    let l5m = m49m ^ m61m;
    let l6 = m62 ^ l5;
    let l6m = m62m ^ l5m;
    let l7 = m46 ^ l3;
    let l7m = m46m ^ l3m;
    let l8 = m51 ^ m59;
    let l8m = m51m ^ m59m;
    let l9 = m52 ^ m53;
    let l9m = m52m ^ m53m;
    let l10 = m53 ^ l4;
    let l10m = m53m ^ l4m;
    let l11 = m60 ^ l2;
    let l11m = m60m ^ l2m;
    let l12 = m48 ^ m51;
    let l12m = m48m ^ m51m;
    let l13 = m50 ^ l0;
    let l13m = m50m ^ l0m;
    let l14 = m52 ^ m61;
    let l14m = m52m ^ m61m;
    let l15 = m55 ^ l1;
    let l15m = m55m ^ l1m;
    let l16 = m56 ^ l0;
    let l16m = m56m ^ l0m;
    let l17 = m57 ^ l1;
    let l17m = m57m ^ l1m;
    let l18 = m58 ^ l8;
    let l18m = m58m ^ l8m;
    let l19 = m63 ^ l4;
    let l19m = m63m ^ l4m;
    let l20 = l0 ^ l1;
    let l20m = l0m ^ l1m;
    let l21 = l1 ^ l7;
    let l21m = l1m ^ l7m;
    let l22 = l3 ^ l12;
    let l22m = l3m ^ l12m;
    let l23 = l18 ^ l2;
    let l23m = l18m ^ l2m;
    let l24 = l15 ^ l9;
    let l24m = l15m ^ l9m;
    let l25 = l6 ^ l10;
    let l25m = l6m ^ l10m;
    let l26 = l7 ^ l9;
    let l26m = l7m ^ l9m;
    let l27 = l8 ^ l10;
    let l27m = l8m ^ l10m;
    let l28 = l11 ^ l14;
    let l28m = l11m ^ l14m;
    let l29 = l11 ^ l17;
    let l29m = l11m ^ l17m;

    // Stage 5: output mapping. Five of the eight output lanes are
    // complemented on the value side only — this is how the 0xFF bias the
    // masked-AND gadget accumulates is discharged, while the mask side is
    // left untouched.
    let out_u7 = l6 ^ l24;
    let out_u7m = l6m ^ l24m;
    let out_u6 = !(l16 ^ l26);
    let out_u6m = l16m ^ l26m;
    let out_u5 = !(l19 ^ l28);
    let out_u5m = l19m ^ l28m;
    let out_u4 = l6 ^ l21;
    let out_u4m = l6m ^ l21m;
    let out_u3 = l20 ^ l22;
    let out_u3m = l20m ^ l22m;
    let out_u2 = l25 ^ l29;
    let out_u2m = l25m ^ l29m;
    let out_u1 = !(l13 ^ l27);
    let out_u1m = l13m ^ l27m;
    let out_u0 = !(l6 ^ l23);
    let out_u0m = l6m ^ l23m;

    // Stage 6: repack. Bit 0 of lanes U0..U6, full U7 in position 7.
    let t = (out_u0 & 0x01)
        | ((out_u1 & 0x01) << 1)
        | ((out_u2 & 0x01) << 2)
        | ((out_u3 & 0x01) << 3)
        | ((out_u4 & 0x01) << 4)
        | ((out_u5 & 0x01) << 5)
        | ((out_u6 & 0x01) << 6)
        | (out_u7 << 7);

    let tm = (out_u0m & 0x01)
        | ((out_u1m & 0x01) << 1)
        | ((out_u2m & 0x01) << 2)
        | ((out_u3m & 0x01) << 3)
        | ((out_u4m & 0x01) << 4)
        | ((out_u5m & 0x01) << 5)
        | ((out_u6m & 0x01) << 6)
        | (out_u7m << 7);

    (t, tm)
}

/// Reference (non-masked, table-based) S-box lookup, used by the key
/// schedule and available for verifying [`masked_sbox`] against the plain
/// S-box table.
pub fn table_sbox(num: u8) -> u8 {
    S_BOX[num as usize]
}
