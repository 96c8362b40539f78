//! Arithmetic on scalars mod the Ed25519 group order
//!
//! ```text
//! ℓ = 2^252 + 27742317777372353535851937790883648493
//! ```
//!
//! used for clamped private keys, deterministic nonces, challenges, and
//! scalar multiplication of curve points.
//!
//! A scalar is stored as a plain little-endian `[u8; 32]`; this type does not
//! itself enforce clamping or reduction modulo ℓ — [`Scalar::reduce`] and
//! [`Scalar::from_mul_sum`] perform those normalizations explicitly where
//! the protocol requires them.
//!
//! [`Scalar::reduce`] folds a 512-bit integer down to a canonical scalar, and
//! [`Scalar::from_mul_sum`] computes `a * b + c mod ℓ` in one pass — the
//! building block for the signature's `S = r + k*a mod ℓ` term. Both work on
//! a radix-2²¹ signed-limb decomposition and fold high limbs back in using
//! the identity `2^252 ≡ 27742317777372353535851937790883648493 (mod ℓ)`.
//! Neither branches on scalar contents, so both are safe on secret input.

use crate::signatures::ed25519::field::{load_3, load_4};

/// A 256-bit scalar used in Ed25519 operations.
///
/// This type represents integers modulo the Ed25519 group order `ℓ`,
/// encoded as 32 little-endian bytes. Scalars are used for:
///
/// - private keys
/// - nonces
/// - challenges derived from hashes
/// - scalar multiplication on curve points
///
/// The internal representation is intentionally minimal: a fixed-size
/// `[u8; 32]` buffer. Higher-level invariants (clamping, reduction modulo
/// `ℓ`) are enforced explicitly by the functions that construct or
/// transform scalars.
#[derive(Clone, Copy)]
pub struct Scalar(pub [u8; 32]);

impl Scalar {
    /// Constructs a scalar from a 32-byte little-endian slice.
    ///
    /// This function performs no validation, clamping, or modular
    /// reduction. The caller is responsible for ensuring the input
    /// represents a valid scalar for the intended use.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is not exactly 32 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let arr = bytes.try_into().expect("slice must be 32 bytes");
        Scalar(arr)
    }

    /// Returns the canonical 32-byte little-endian encoding of the scalar.
    ///
    /// This method simply exposes the internal representation without
    /// performing any normalization or reduction.
    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Reduces a 512-bit integer modulo ℓ.
    ///
    /// Decomposes `wide` into 24 signed 21-bit limbs, folds limbs `18..24`
    /// back in via the reduction coefficients for `2^252 mod ℓ`, propagates
    /// carries, folds the remaining excess out of limb 12, and re-encodes
    /// the result as 32 canonical bytes. Data-independent throughout, so
    /// it's safe to call on secret-derived input (e.g. a signature nonce).
    pub(crate) fn reduce(wide: [u8; 64]) -> Self {
        let mask = 0x1f_ffffi64;

        let mut s = [
            (load_3(&wide[0..]) as i64) & mask,
            ((load_4(&wide[2..]) >> 5) as i64) & mask,
            ((load_3(&wide[5..]) >> 2) as i64) & mask,
            ((load_4(&wide[7..]) >> 7) as i64) & mask,
            ((load_4(&wide[10..]) >> 4) as i64) & mask,
            ((load_3(&wide[13..]) >> 1) as i64) & mask,
            ((load_4(&wide[15..]) >> 6) as i64) & mask,
            ((load_3(&wide[18..]) >> 3) as i64) & mask,
            (load_3(&wide[21..]) as i64) & mask,
            ((load_4(&wide[23..]) >> 5) as i64) & mask,
            ((load_3(&wide[26..]) >> 2) as i64) & mask,
            ((load_4(&wide[28..]) >> 7) as i64) & mask,
            ((load_4(&wide[31..]) >> 4) as i64) & mask,
            ((load_3(&wide[34..]) >> 1) as i64) & mask,
            ((load_4(&wide[36..]) >> 6) as i64) & mask,
            ((load_3(&wide[39..]) >> 3) as i64) & mask,
            (load_3(&wide[42..]) as i64) & mask,
            ((load_4(&wide[44..]) >> 5) as i64) & mask,
            ((load_3(&wide[47..]) >> 2) as i64) & mask,
            ((load_4(&wide[49..]) >> 7) as i64) & mask,
            ((load_4(&wide[52..]) >> 4) as i64) & mask,
            ((load_3(&wide[55..]) >> 1) as i64) & mask,
            ((load_4(&wide[57..]) >> 6) as i64) & mask,
            (load_4(&wide[60..]) >> 3) as i64,
        ];

        let coeffs = [666643, 470296, 654183, -997805, 136657, -683901];

        for index in (18..=23).rev() {
            for j in 0..6 {
                s[index - 12 + j] += s[index] * coeffs[j];
            }
        }

        for &index in &[6, 8, 10, 12, 14, 16] {
            let carry = (s[index] + (1 << 20)) >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for &index in &[7, 9, 11, 13, 15] {
            let carry = (s[index] + (1 << 20)) >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for index in (12..=17).rev() {
            for j in 0..6 {
                s[index - 12 + j] += s[index] * coeffs[j];
            }
        }
        s[12] = 0;

        for &index in &[0, 2, 4, 6, 8, 10] {
            let carry = (s[index] + (1 << 20)) >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for &index in &[1, 3, 5, 7, 9, 11] {
            let carry = (s[index] + (1 << 20)) >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        let s12 = s[12];
        for (sx, coeff) in s.iter_mut().take(6).zip(coeffs.iter()) {
            *sx = s12 * coeff;
        }
        s[12] = 0;

        for index in 0..11 {
            let carry = s[index] >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        let carry = s[11] >> 21;
        s[12] += carry;
        s[11] -= carry << 21;

        let s12 = s[12];
        for (sx, coeff) in s.iter_mut().take(6).zip(coeffs.iter()) {
            *sx = s12 * coeff;
        }

        for index in 0..11 {
            let carry = s[index] >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        let result = [
            s[0] as u8,
            (s[0] >> 8) as u8,
            ((s[0] >> 16) | (s[1] << 5)) as u8,
            (s[1] >> 3) as u8,
            (s[1] >> 11) as u8,
            ((s[1] >> 19) | (s[2] << 2)) as u8,
            (s[2] >> 6) as u8,
            ((s[2] >> 14) | (s[3] << 7)) as u8,
            (s[3] >> 1) as u8,
            (s[3] >> 9) as u8,
            ((s[3] >> 17) | (s[4] << 4)) as u8,
            (s[4] >> 4) as u8,
            (s[4] >> 12) as u8,
            ((s[4] >> 20) | (s[5] << 1)) as u8,
            (s[5] >> 7) as u8,
            ((s[5] >> 15) | (s[6] << 6)) as u8,
            (s[6] >> 2) as u8,
            (s[6] >> 10) as u8,
            ((s[6] >> 18) | (s[7] << 3)) as u8,
            (s[7] >> 5) as u8,
            (s[7] >> 13) as u8,
            s[8] as u8,
            (s[8] >> 8) as u8,
            ((s[8] >> 16) | (s[9] << 5)) as u8,
            (s[9] >> 3) as u8,
            (s[9] >> 11) as u8,
            ((s[9] >> 19) | (s[10] << 2)) as u8,
            (s[10] >> 6) as u8,
            ((s[10] >> 14) | (s[11] << 7)) as u8,
            (s[11] >> 1) as u8,
            (s[11] >> 9) as u8,
            (s[11] >> 17) as u8,
        ];

        Scalar(result)
    }

    /// Computes `a * b + c mod ℓ` — the signature's `S = r + k*a mod ℓ` term.
    ///
    /// Decomposes each input into 12 signed 21-bit limbs, convolves `a` and
    /// `b` while folding `c` into the low limbs as it accumulates, then
    /// reduces the same way as [`Scalar::reduce`]. Constant-time, so it's
    /// safe to call with a secret scalar on either side.
    pub(crate) fn from_mul_sum(a: Scalar, b: Scalar, c: Scalar) -> Self {
        let mask = 0x1f_ffffi64;

        let load_a = |data: &[u8; 32]| -> [i64; 12] {
            [
                (load_3(&data[0..]) as i64) & mask,
                ((load_4(&data[2..]) >> 5) as i64) & mask,
                ((load_3(&data[5..]) >> 2) as i64) & mask,
                ((load_4(&data[7..]) >> 7) as i64) & mask,
                ((load_4(&data[10..]) >> 4) as i64) & mask,
                ((load_3(&data[13..]) >> 1) as i64) & mask,
                ((load_4(&data[15..]) >> 6) as i64) & mask,
                ((load_3(&data[18..]) >> 3) as i64) & mask,
                (load_3(&data[21..]) as i64) & mask,
                ((load_4(&data[23..]) >> 5) as i64) & mask,
                ((load_3(&data[26..]) >> 2) as i64) & mask,
                (load_4(&data[28..]) >> 7) as i64,
            ]
        };

        let a_limbs = load_a(&a.0);
        let b_limbs = load_a(&b.0);
        let c_limbs = load_a(&c.0);

        let mut s = [0i64; 24];

        for index in 0..12 {
            s[index] = c_limbs[index];
            for j in 0..=index.min(11) {
                if index - j < 12 {
                    s[index] += a_limbs[j] * b_limbs[index - j];
                }
            }
        }

        for index in 12..23 {
            for j in (index - 11)..12 {
                if index - j < 12 {
                    s[index] += a_limbs[j] * b_limbs[index - j];
                }
            }
        }

        s[23] = 0;

        for &index in &[0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22] {
            let carry = (s[index] + (1 << 20)) >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for &index in &[1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21] {
            let carry = (s[index] + (1 << 20)) >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        let coeffs = [666643i64, 470296, 654183, -997805, 136657, -683901];

        for index in (18..=23).rev() {
            for j in 0..6 {
                s[index - 12 + j] += s[index] * coeffs[j];
            }
        }

        for &index in &[6, 8, 10, 12, 14, 16] {
            let carry = (s[index] + (1 << 20)) >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for &index in &[7, 9, 11, 13, 15] {
            let carry = (s[index] + (1 << 20)) >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for index in (12..=17).rev() {
            for j in 0..6 {
                s[index - 12 + j] += s[index] * coeffs[j];
            }
        }
        s[12] = 0;

        for &index in &[0, 2, 4, 6, 8, 10] {
            let carry = (s[index] + (1 << 20)) >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        for &index in &[1, 3, 5, 7, 9, 11] {
            let carry = (s[index] + (1 << 20)) >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        let s12 = s[12];
        for (sx, coeff) in s.iter_mut().take(6).zip(coeffs.iter()) {
            *sx += s12 * coeff;
        }
        s[12] = 0;

        for index in 0..11 {
            let carry = s[index] >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        let carry = s[11] >> 21;
        s[12] += carry;
        s[11] -= carry << 21;

        let s12 = s[12];
        for (sx, coeff) in s.iter_mut().take(6).zip(coeffs.iter()) {
            *sx += s12 * coeff;
        }

        for index in 0..11 {
            let carry = s[index] >> 21;

            s[index + 1] += carry;
            s[index] -= carry << 21;
        }

        let result = [
            s[0] as u8,
            (s[0] >> 8) as u8,
            ((s[0] >> 16) | (s[1] << 5)) as u8,
            (s[1] >> 3) as u8,
            (s[1] >> 11) as u8,
            ((s[1] >> 19) | (s[2] << 2)) as u8,
            (s[2] >> 6) as u8,
            ((s[2] >> 14) | (s[3] << 7)) as u8,
            (s[3] >> 1) as u8,
            (s[3] >> 9) as u8,
            ((s[3] >> 17) | (s[4] << 4)) as u8,
            (s[4] >> 4) as u8,
            (s[4] >> 12) as u8,
            ((s[4] >> 20) | (s[5] << 1)) as u8,
            (s[5] >> 7) as u8,
            ((s[5] >> 15) | (s[6] << 6)) as u8,
            (s[6] >> 2) as u8,
            (s[6] >> 10) as u8,
            ((s[6] >> 18) | (s[7] << 3)) as u8,
            (s[7] >> 5) as u8,
            (s[7] >> 13) as u8,
            s[8] as u8,
            (s[8] >> 8) as u8,
            ((s[8] >> 16) | (s[9] << 5)) as u8,
            (s[9] >> 3) as u8,
            (s[9] >> 11) as u8,
            ((s[9] >> 19) | (s[10] << 2)) as u8,
            (s[10] >> 6) as u8,
            ((s[10] >> 14) | (s[11] << 7)) as u8,
            (s[11] >> 1) as u8,
            (s[11] >> 9) as u8,
            (s[11] >> 17) as u8,
        ];

        Scalar(result)
    }

}
