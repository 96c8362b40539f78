//! Edwards25519 group operations.
//!
//! This module implements group arithmetic for the Edwards25519 elliptic curve
//! used by Ed25519 signatures and related constructions.
//!
//! The curve is defined over the prime field 𝔽ₚ with:
//!
//! ```text
//! p = 2²⁵⁵ − 19
//! ```
//!
//! and uses the twisted Edwards form:
//!
//! ```text
//! −x² + y² = 1 + d·x²·y²
//! ```
//!
//! where `d` is the standard Edwards25519 curve constant.
//!
//! ## Coordinate systems
//!
//! - **GeP3** — Extended coordinates `(X : Y : Z : T)`, the primary working
//!   representation; supports complete addition formulas without inversions.
//! - **GeP1** — Extended intermediate coordinates, a transient result during
//!   additions and doublings; never stored long-term.
//! - **GeP2** — Projective coordinates `(X : Y : Z)`, used mainly for point
//!   doubling.
//! - **GeCached** — Cached extended form storing precomputed `(Y±X, Z, 2·d·T)`,
//!   optimized for repeated additions against a fixed point.
//!
//! ## Curve constants
//!
//! `d`, `2d`, `sqrt(-1)`, and the base point `B` are *derived* from field
//! arithmetic rather than hard-coded as limb tables: `d = -121665/121666`,
//! `sqrt(-1) = 2^((p-1)/4)`, and `B` comes from decompressing `y = 4/5`
//! through the same routine used for public keys. Computing each once and
//! caching the result keeps the curve definition auditable against the
//! arithmetic instead of against a block of magic numbers.
//!
//! ## Scalar multiplication
//!
//! Scalar multiplication of a secret scalar (key generation, signing) is a
//! fixed-shape double-and-add: every bit triggers the same doubling and the
//! same addition, with the choice of whether to keep the sum made through a
//! branch-free conditional move rather than a data-dependent branch.
//! Verification only ever combines public values and may use ordinary
//! control flow, so the double-scalar check used there is variable-time.

use super::field::FieldElement;
use super::scalar::Scalar;
use std::sync::OnceLock;

fn d() -> FieldElement {
    static D: OnceLock<FieldElement> = OnceLock::new();
    *D.get_or_init(|| {
        let a = FieldElement([-121665, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let b = FieldElement([121666, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        a * b.invert()
    })
}

fn d2() -> FieldElement {
    static D2: OnceLock<FieldElement> = OnceLock::new();
    *D2.get_or_init(|| d() + d())
}

fn sqrtm1() -> FieldElement {
    static SQRTM1: OnceLock<FieldElement> = OnceLock::new();
    *SQRTM1.get_or_init(|| {
        let two = FieldElement([2, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        two.pow22523().square() * two
    })
}

/// The standard Ed25519 base point, derived by decompressing `y = 4/5`.
pub(crate) fn base_point() -> &'static GeP3 {
    static BASE: OnceLock<GeP3> = OnceLock::new();
    BASE.get_or_init(|| {
        let four = FieldElement([4, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let five = FieldElement([5, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let y = four * five.invert();
        let mut bytes = y.to_bytes();
        bytes[31] &= 0x7f;

        let (point, status) = GeP3::decompress(&bytes);
        assert_eq!(status, 0, "base point encoding must decompress");
        point
    })
}

/// Group element in extended projective intermediate coordinates (P1).
///
/// Used as a transient result during additions and doublings; converted
/// into `GeP2`/`GeP3` immediately after.
pub(crate) struct GeP1 {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl GeP1 {
    /// Computes `a + b` where `a` is in extended coordinates and `b` is the
    /// cached form of another point.
    pub(crate) fn from_sum(a: &GeP3, b: &GeCached) -> Self {
        let mut x = a.y + a.x;
        let mut y = a.y - a.x;
        let mut z = x * b.yplusx;
        let mut t = b.t2d * a.t;

        y = y * b.yminusx;
        x = a.z * b.z;

        let sumx = x + x;

        x = z - y;
        y = z + y;
        z = sumx + t;
        t = sumx - t;

        Self { x, y, z, t }
    }

}

/// A point on the Edwards curve in projective coordinates `(X : Y : Z)`.
///
/// Used as an intermediate form during point doubling, avoiding field
/// inversions.
pub(crate) struct GeP2 {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl GeP2 {
    /// The neutral element `(0, 1)`.
    pub(crate) const ONE: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
    };

    pub(crate) fn from_gep3(g: &GeP3) -> Self {
        GeP2 {
            x: g.x,
            y: g.y,
            z: g.z,
        }
    }

    /// Doubles the point, returning the result in `GeP1` form.
    pub(crate) fn double(self) -> GeP1 {
        let mut x = self.x.square();
        let mut z = self.y.square();
        let mut t = self.z.double_square();
        let mut y = self.x + self.y;
        let ysquare = y.square();

        y = z + x;
        z = z - x;
        x = ysquare - y;
        t = t - z;

        GeP1 { x, y, z, t }
    }

    /// Encodes the point into its 32-byte compressed Edwards form.
    pub(crate) fn to_bytes(&self) -> [u8; 32] {
        let recip = self.z.invert();
        let x = self.x * recip;
        let y = self.y * recip;

        let mut output = y.to_bytes();

        let sign_bit = x.is_negative() as u8;
        output[31] ^= sign_bit << 7;

        output
    }
}

/// A point on the Edwards25519 curve in extended coordinates `(X : Y : Z : T)`.
///
/// Extended coordinates allow fast and complete addition formulas without
/// inversions, which is critical for constant-time scalar multiplication.
/// This is the primary working representation for group operations.
#[derive(Clone, Copy)]
pub(crate) struct GeP3 {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl GeP3 {
    /// The identity element `(0, 1)`.
    pub(crate) const ONE: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    #[inline(always)]
    pub(crate) fn double(&self) -> GeP1 {
        GeP2::from_gep3(self).double()
    }

    pub(crate) fn from_gep1(g: &GeP1) -> Self {
        let x = g.x * g.t;
        let y = g.y * g.z;
        let z = g.z * g.t;
        let t = g.x * g.y;

        Self { x, y, z, t }
    }

    /// Encodes the point into its compressed 32-byte representation.
    pub(crate) fn to_bytes(&self) -> [u8; 32] {
        let recip = self.z.invert();
        let x = self.x * recip;
        let y = self.y * recip;

        let mut output = y.to_bytes();
        output[31] ^= (x.is_negative() as u8) << 7;

        output
    }

    /// Decompresses a point from its 32-byte encoding.
    ///
    /// Reconstructs `x` by solving `x^2 ≡ (y^2 − 1) · (d·y^2 + 1)⁻¹ (mod p)`,
    /// trying both candidate square roots (`sqrt(-1)` flips between them),
    /// then enforcing the sign bit carried in `s[31]`. Returns `(point, 0)`
    /// on success or `(_, -1)` if `s` is not a valid point encoding — the
    /// returned point must not be used in that case.
    pub(crate) fn decompress(s: &[u8; 32]) -> (Self, i32) {
        let mut h = Self {
            x: FieldElement::ZERO,
            y: FieldElement::from_bytes(s),
            z: FieldElement::ONE,
            t: FieldElement::ZERO,
        };

        let mut u = h.y.square();
        let mut v = u * d();
        u = u - h.z;
        v = v + h.z;

        let v3 = v.square() * v;

        h.x = v3.square();
        h.x = h.x * v;
        h.x = h.x * u;
        h.x = h.x.pow22523();
        h.x = h.x * v3;
        h.x = h.x * u;

        let vxx = h.x.square() * v;
        let mut check = vxx - u;

        if check.is_non_zero() == 1 {
            check = vxx + u;

            if check.is_non_zero() == 1 {
                return (h, -1);
            }

            h.x = h.x * sqrtm1();
        }

        let sign = (s[31] >> 7) as i32;
        if h.x.is_negative() == sign {
            h.x = -h.x;
        }

        h.t = h.x * h.y;

        (h, 0)
    }

    /// Conditionally selects `a` or `b` in constant time (`choose_b == 0`
    /// keeps `a`; `choose_b == 1` selects `b`), used to keep scalar
    /// multiplication's execution shape independent of secret bits.
    fn conditional_select(a: &Self, b: &Self, choose_b: u32) -> Self {
        let mut x = a.x;
        let mut y = a.y;
        let mut z = a.z;
        let mut t = a.t;

        x.conditional_move(&b.x, choose_b);
        y.conditional_move(&b.y, choose_b);
        z.conditional_move(&b.z, choose_b);
        t.conditional_move(&b.t, choose_b);

        Self { x, y, z, t }
    }

    /// Adds two points in extended coordinates.
    pub(crate) fn add(&self, other: &Self) -> Self {
        GeP3::from_gep1(&GeP1::from_sum(self, &GeCached::from_p3(other)))
    }

    /// Computes `scalar * point` using a fixed-shape double-and-add: every
    /// one of the 256 bits performs the same doubling and the same point
    /// addition, selecting whether to keep the sum via a branch-free
    /// conditional move. Safe for secret scalars.
    pub(crate) fn scalar_mul(point: &Self, scalar: &Scalar) -> Self {
        let cached = GeCached::from_p3(point);
        let mut acc = Self::ONE;

        let bytes = scalar.to_bytes();
        for i in (0..256).rev() {
            acc = GeP3::from_gep1(&acc.double());

            let bit = ((bytes[i >> 3] >> (i & 7)) & 1) as u32;
            let added = GeP3::from_gep1(&GeP1::from_sum(&acc, &cached));
            acc = GeP3::conditional_select(&acc, &added, bit);
        }

        acc
    }

    /// Computes `scalar * B`, the Ed25519 base point.
    pub(crate) fn scalar_mul_base(scalar: &Scalar) -> Self {
        Self::scalar_mul(base_point(), scalar)
    }

    /// Computes `a * point_a + b * point_b` using ordinary, variable-time
    /// control flow. Only ever used on public data (signature verification).
    pub(crate) fn double_scalar_mul_vartime(
        point_a: &Self,
        a: &Scalar,
        point_b: &Self,
        b: &Scalar,
    ) -> Self {
        let mut acc = Self::ONE;

        let a_bytes = a.to_bytes();
        let b_bytes = b.to_bytes();

        for i in (0..256).rev() {
            acc = GeP3::from_gep1(&acc.double());

            if (a_bytes[i >> 3] >> (i & 7)) & 1 == 1 {
                acc = acc.add(point_a);
            }
            if (b_bytes[i >> 3] >> (i & 7)) & 1 == 1 {
                acc = acc.add(point_b);
            }
        }

        acc
    }
}

/// Cached representation of an Edwards curve point, optimized for repeated
/// addition against a fixed point: precomputes `y+x`, `y-x`,
/// `z`, and `2·d·t`.
pub(crate) struct GeCached {
    pub(crate) yplusx: FieldElement,
    pub(crate) yminusx: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t2d: FieldElement,
}

impl GeCached {
    pub(crate) fn from_p3(g: &GeP3) -> GeCached {
        GeCached {
            yplusx: g.y + g.x,
            yminusx: g.y - g.x,
            z: g.z,
            t2d: g.t * d2(),
        }
    }
}
