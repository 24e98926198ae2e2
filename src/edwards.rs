// -*- mode: rust; -*-
//
// This file is part of ristretto255.
// See LICENSE for licensing information.

//! Group operations for the twisted Edwards curve
//! \\(-x\^2 + y\^2 = 1 + d x\^2 y\^2\\) over
//! \\(\mathbb Z / (2\^{255} - 19)\\), in the extended twisted Edwards
//! coordinates of Hisil, Wong, Carter, and Dawson.
//!
//! This module is crate-internal: the curve has cofactor \\(8\\), and
//! the prime-order group this crate exposes is the Ristretto quotient
//! in the `ristretto` module.  All operations here treat the curve as
//! a whole.

#![allow(non_snake_case)]

use core::borrow::Borrow;
use core::fmt::Debug;
use core::iter::Sum;
use core::ops::{Add, AddAssign};
use core::ops::{Mul, MulAssign};
use core::ops::{Neg, Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants;
use crate::curve_models::AffineNielsPoint;
use crate::curve_models::CompletedPoint;
use crate::curve_models::ProjectiveNielsPoint;
use crate::curve_models::ProjectivePoint;
use crate::field::FieldElement;
use crate::scalar::Scalar;
use crate::scalar_mul;
use crate::traits::Identity;
use crate::traits::ValidityCheck;
use crate::traits::{BasepointTable, MultiscalarMul, VartimeMultiscalarMul};
use crate::window::LookupTable;

// ------------------------------------------------------------------------
// Internal point representation
// ------------------------------------------------------------------------

/// An `EdwardsPoint` represents a point on the Edwards form of Curve25519,
/// stored in extended coordinates \\((X:Y:Z:T)\\) with \\(XY = ZT\\),
/// representing the affine point \\((X/Z, Y/Z)\\).
#[derive(Copy, Clone)]
pub(crate) struct EdwardsPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

// ------------------------------------------------------------------------
// Constructors
// ------------------------------------------------------------------------

impl Identity for EdwardsPoint {
    fn identity() -> EdwardsPoint {
        EdwardsPoint {
            X: FieldElement::ZERO,
            Y: FieldElement::ONE,
            Z: FieldElement::ONE,
            T: FieldElement::ZERO,
        }
    }
}

impl Default for EdwardsPoint {
    fn default() -> EdwardsPoint {
        EdwardsPoint::identity()
    }
}

// ------------------------------------------------------------------------
// Zeroize implementations for wiping points from memory
// ------------------------------------------------------------------------

#[cfg(feature = "zeroize")]
impl Zeroize for EdwardsPoint {
    /// Reset this `EdwardsPoint` to the identity element.
    fn zeroize(&mut self) {
        self.X.zeroize();
        self.Y = FieldElement::ONE;
        self.Z = FieldElement::ONE;
        self.T.zeroize();
    }
}

// ------------------------------------------------------------------------
// Validity checks (for debugging, not CT)
// ------------------------------------------------------------------------

impl ValidityCheck for EdwardsPoint {
    fn is_valid(&self) -> bool {
        let point_on_curve = self.as_projective().is_valid();
        let on_segre_image = (&self.X * &self.Y) == (&self.Z * &self.T);

        point_on_curve && on_segre_image
    }
}

// ------------------------------------------------------------------------
// Constant-time assignment
// ------------------------------------------------------------------------

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &EdwardsPoint, b: &EdwardsPoint, choice: Choice) -> EdwardsPoint {
        EdwardsPoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
            T: FieldElement::conditional_select(&a.T, &b.T, choice),
        }
    }
}

// ------------------------------------------------------------------------
// Equality
// ------------------------------------------------------------------------

impl ConstantTimeEq for EdwardsPoint {
    fn ct_eq(&self, other: &EdwardsPoint) -> Choice {
        // We would like to check that the point (X/Z, Y/Z) is equal to
        // the point (X'/Z', Y'/Z') without converting into affine
        // coordinates (x, y) and (x', y'), which requires two inversions.
        // We have that X = xZ and X' = x'Z'. Thus, x = x' is equivalent to
        // (xZ)Z' = (x'Z')Z, and similarly for the y-coordinate.
        (&self.X * &other.Z).ct_eq(&(&other.X * &self.Z))
            & (&self.Y * &other.Z).ct_eq(&(&other.Y * &self.Z))
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &EdwardsPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for EdwardsPoint {}

// ------------------------------------------------------------------------
// Point conversions
// ------------------------------------------------------------------------

impl EdwardsPoint {
    /// Convert to a ProjectiveNielsPoint
    pub(crate) fn as_projective_niels(&self) -> ProjectiveNielsPoint {
        ProjectiveNielsPoint {
            Y_plus_X: &self.Y + &self.X,
            Y_minus_X: &self.Y - &self.X,
            Z: self.Z,
            T2d: &self.T * &constants::EDWARDS_D2,
        }
    }

    /// Convert the representation of this point from extended
    /// coordinates to projective coordinates.
    ///
    /// Free.
    pub(crate) const fn as_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: self.X,
            Y: self.Y,
            Z: self.Z,
        }
    }

    /// Dehomogenize to an AffineNielsPoint.
    /// Mainly for testing.
    pub(crate) fn as_affine_niels(&self) -> AffineNielsPoint {
        let recip = self.Z.invert();
        let x = &self.X * &recip;
        let y = &self.Y * &recip;
        let xy2d = &(&x * &y) * &constants::EDWARDS_D2;
        AffineNielsPoint {
            y_plus_x: &y + &x,
            y_minus_x: &y - &x,
            xy2d,
        }
    }
}

// ------------------------------------------------------------------------
// Doubling
// ------------------------------------------------------------------------

impl EdwardsPoint {
    /// Add this point to itself.
    pub(crate) fn double(&self) -> EdwardsPoint {
        self.as_projective().double().as_extended()
    }

    /// Compute \\([2\^k] P \\) by successive doublings. Requires \\( k > 0 \\).
    pub(crate) fn mul_by_pow_2(&self, k: u32) -> EdwardsPoint {
        debug_assert!(k > 0);
        let mut r: CompletedPoint;
        let mut s = self.as_projective();
        for _ in 0..(k - 1) {
            r = s.double();
            s = r.as_projective();
        }
        // Unroll last iteration so we can go directly as_extended()
        s.double().as_extended()
    }
}

// ------------------------------------------------------------------------
// Addition and Subtraction
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    fn add(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        (self + &other.as_projective_niels()).as_extended()
    }
}

define_add_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint, Output = EdwardsPoint);

impl<'b> AddAssign<&'b EdwardsPoint> for EdwardsPoint {
    fn add_assign(&mut self, _rhs: &'b EdwardsPoint) {
        *self = (self as &EdwardsPoint) + _rhs;
    }
}

define_add_assign_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint);

impl<'a, 'b> Sub<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;
    fn sub(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        (self - &other.as_projective_niels()).as_extended()
    }
}

define_sub_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint, Output = EdwardsPoint);

impl<'b> SubAssign<&'b EdwardsPoint> for EdwardsPoint {
    fn sub_assign(&mut self, _rhs: &'b EdwardsPoint) {
        *self = (self as &EdwardsPoint) - _rhs;
    }
}

define_sub_assign_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint);

impl<T> Sum<T> for EdwardsPoint
where
    T: Borrow<EdwardsPoint>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(EdwardsPoint::identity(), |acc, item| acc + item.borrow())
    }
}

// ------------------------------------------------------------------------
// Negation
// ------------------------------------------------------------------------

impl<'a> Neg for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        EdwardsPoint {
            X: -(&self.X),
            Y: self.Y,
            Z: self.Z,
            T: -(&self.T),
        }
    }
}

impl Neg for EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        -&self
    }
}

// ------------------------------------------------------------------------
// Scalar multiplication
// ------------------------------------------------------------------------

impl<'b> MulAssign<&'b Scalar> for EdwardsPoint {
    fn mul_assign(&mut self, scalar: &'b Scalar) {
        let result = (self as &EdwardsPoint) * scalar;
        *self = result;
    }
}

define_mul_assign_variants!(LHS = EdwardsPoint, RHS = Scalar);

define_mul_variants!(LHS = EdwardsPoint, RHS = Scalar, Output = EdwardsPoint);
define_mul_variants!(LHS = Scalar, RHS = EdwardsPoint, Output = EdwardsPoint);

impl<'a, 'b> Mul<&'b Scalar> for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    /// Scalar multiplication: compute `scalar * self`.
    ///
    /// For scalar multiplication of a basepoint,
    /// `EdwardsBasepointTable` is approximately 4x faster.
    fn mul(self, scalar: &'b Scalar) -> EdwardsPoint {
        scalar_mul::variable_base_mul(self, scalar)
    }
}

impl<'a, 'b> Mul<&'b EdwardsPoint> for &'a Scalar {
    type Output = EdwardsPoint;

    /// Scalar multiplication: compute `scalar * self`.
    ///
    /// For scalar multiplication of a basepoint,
    /// `EdwardsBasepointTable` is approximately 4x faster.
    fn mul(self, point: &'b EdwardsPoint) -> EdwardsPoint {
        point * self
    }
}

impl EdwardsPoint {
    /// Fixed-base scalar multiplication by the Ed25519 base point.
    pub(crate) fn mul_base(scalar: &Scalar) -> Self {
        constants::ED25519_BASEPOINT_TABLE.mul_base(scalar)
    }

    /// Compute \\(aA + bB\\) in variable time, where \\(B\\) is the Ed25519 basepoint.
    pub(crate) fn vartime_double_scalar_mul_basepoint(
        a: &Scalar,
        A: &EdwardsPoint,
        b: &Scalar,
    ) -> EdwardsPoint {
        scalar_mul::vartime_double_base_mul(a, A, b)
    }
}

// ------------------------------------------------------------------------
// Multiscalar Multiplication impls
// ------------------------------------------------------------------------

impl MultiscalarMul for EdwardsPoint {
    type Point = EdwardsPoint;

    fn multiscalar_mul<I, J>(scalars: I, points: J) -> EdwardsPoint
    where
        I: IntoIterator,
        I::Item: Borrow<Scalar>,
        J: IntoIterator,
        J::Item: Borrow<EdwardsPoint>,
    {
        // Sanity-check lengths of input iterators
        let mut scalars = scalars.into_iter();
        let mut points = points.into_iter();

        // Lower and upper bounds on iterators
        let (s_lo, s_hi) = scalars.by_ref().size_hint();
        let (p_lo, p_hi) = points.by_ref().size_hint();

        // They should all be equal
        assert_eq!(s_lo, p_lo);
        assert_eq!(s_hi, Some(s_lo));
        assert_eq!(p_hi, Some(p_lo));

        scalar_mul::straus_multiscalar_mul(scalars, points)
    }
}

impl VartimeMultiscalarMul for EdwardsPoint {
    type Point = EdwardsPoint;

    fn optional_multiscalar_mul<I, J>(scalars: I, points: J) -> Option<EdwardsPoint>
    where
        I: IntoIterator,
        I::Item: Borrow<Scalar>,
        J: IntoIterator<Item = Option<EdwardsPoint>>,
    {
        // Sanity-check lengths of input iterators
        let mut scalars = scalars.into_iter();
        let mut points = points.into_iter();

        // Lower and upper bounds on iterators
        let (s_lo, s_hi) = scalars.by_ref().size_hint();
        let (p_lo, p_hi) = points.by_ref().size_hint();

        // They should all be equal
        assert_eq!(s_lo, p_lo);
        assert_eq!(s_hi, Some(s_lo));
        assert_eq!(p_hi, Some(p_lo));

        scalar_mul::straus_optional_multiscalar_mul(scalars, points)
    }
}

// ------------------------------------------------------------------------
// Fixed-base tables
// ------------------------------------------------------------------------

/// A precomputed table of multiples of a basepoint, for accelerating
/// fixed-base scalar multiplication.
///
/// The table stores, for each \\(i = 0 \ldots 31\\), the lookup table
/// \\( [B_i, 2 B_i, \ldots, 8 B_i] \\) of multiples of
/// \\( B_i = 16^{2i} B \\) in affine Niels form.
#[derive(Clone)]
#[repr(transparent)]
pub(crate) struct EdwardsBasepointTable(pub(crate) [LookupTable<AffineNielsPoint>; 32]);

impl BasepointTable for EdwardsBasepointTable {
    type Point = EdwardsPoint;

    /// Create a table of precomputed multiples of `basepoint`.
    fn create(basepoint: &EdwardsPoint) -> EdwardsBasepointTable {
        let mut table = EdwardsBasepointTable([LookupTable::default(); 32]);
        let mut P = *basepoint;
        for i in 0..32 {
            // P = (16^2)^i * B
            table.0[i] = LookupTable::from(&P);
            P = P.mul_by_pow_2(8);
        }
        table
    }

    /// Get the basepoint for this table as an `EdwardsPoint`.
    fn basepoint(&self) -> EdwardsPoint {
        // self.0[0].select(1) = 1*(16^2)^0*B
        // but as an `AffineNielsPoint`, so add identity to convert to extended.
        (&EdwardsPoint::identity() + &self.0[0].select(1)).as_extended()
    }

    /// The computation uses Pippenger's algorithm, as described for the
    /// specific case of radix-16 on page 13 of the Ed25519 paper.
    ///
    /// Write the scalar \\(a\\) in radix \\(16\\) with coefficients in
    /// \\([-8,8)\\), i.e.,
    /// $$
    ///     a = a\_0 + a\_1 16\^1 + \cdots + a\_{63} 16\^{63},
    /// $$
    /// then
    /// $$
    ///     a B = a\_0 B + a\_1 16\^1 B + \cdots + a\_{63} 16\^{63} B.
    /// $$
    /// Grouping even and odd coefficients gives
    /// $$
    /// \begin{aligned}
    ///     a B = \quad a\_0 16\^0 B +& a\_2 16\^2 B + \cdots + a\_{62} 16\^{62} B    \\\\
    ///               + a\_1 16\^1 B +& a\_3 16\^3 B + \cdots + a\_{63} 16\^{63} B    \\\\
    ///         = \quad(a\_0 16\^0 B +& a\_2 16\^2 B + \cdots + a\_{62} 16\^{62} B)   \\\\
    ///            + 16(a\_1 16\^0 B +& a\_3 16\^2 B + \cdots + a\_{63} 16\^{62} B).  \\\\
    /// \end{aligned}
    /// $$
    /// For each \\(i = 0 \ldots 31\\), we create a lookup table of
    /// $$
    /// [16\^{2i} B, \ldots, 8\cdot 16\^{2i} B],
    /// $$
    /// and use it to select \\( x \cdot 16\^{2i} \cdot B \\) in constant time.
    ///
    /// The radix-\\(16\\) representation requires that the scalar is bounded
    /// by \\(2\^{255}\\), which is always the case.
    fn mul_base(&self, scalar: &Scalar) -> EdwardsPoint {
        let a = scalar.as_radix_16();

        let tables = &self.0;
        let mut P = EdwardsPoint::identity();

        for i in (0..64).filter(|x| x % 2 == 1) {
            P = (&P + &tables[i / 2].select(a[i])).as_extended();
        }

        P = P.mul_by_pow_2(4);

        for i in (0..64).filter(|x| x % 2 == 0) {
            P = (&P + &tables[i / 2].select(a[i])).as_extended();
        }

        P
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a EdwardsBasepointTable {
    type Output = EdwardsPoint;

    /// Construct an `EdwardsPoint` from a `Scalar` \\(a\\) by
    /// computing the multiple \\(aB\\) of this basepoint \\(B\\).
    fn mul(self, scalar: &'b Scalar) -> EdwardsPoint {
        self.mul_base(scalar)
    }
}

impl<'a, 'b> Mul<&'a EdwardsBasepointTable> for &'b Scalar {
    type Output = EdwardsPoint;

    /// Construct an `EdwardsPoint` from a `Scalar` \\(a\\) by
    /// computing the multiple \\(aB\\) of this basepoint \\(B\\).
    fn mul(self, basepoint_table: &'a EdwardsBasepointTable) -> EdwardsPoint {
        basepoint_table * self
    }
}

impl Debug for EdwardsBasepointTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "EdwardsBasepointTable([\n")?;
        for i in 0..32 {
            write!(f, "\t{:?},\n", &self.0[i])?;
        }
        write!(f, "])")
    }
}

// ------------------------------------------------------------------------
// Debug traits
// ------------------------------------------------------------------------

impl Debug for EdwardsPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "EdwardsPoint{{\n\tX: {:?},\n\tY: {:?},\n\tZ: {:?},\n\tT: {:?}\n}}",
            &self.X, &self.Y, &self.Z, &self.T
        )
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::IsIdentity;

    /// Test that the identity is valid and behaves as the group identity
    #[test]
    fn identity_laws() {
        let id = EdwardsPoint::identity();
        let B = constants::ED25519_BASEPOINT_POINT;

        assert!(id.is_valid());
        assert_eq!(&B + &id, B);
        assert_eq!(&id + &B, B);
        assert_eq!(&B + &(-&B), id);
        assert_eq!(&B - &B, id);
    }

    /// Test that the basepoint is on the curve and well-formed
    #[test]
    fn basepoint_is_valid() {
        assert!(constants::ED25519_BASEPOINT_POINT.is_valid());
    }

    /// Test that doubling agrees with addition
    #[test]
    fn basepoint_plus_basepoint_vs_basepoint2() {
        let B = constants::ED25519_BASEPOINT_POINT;
        let B_added = &B + &B;
        assert_eq!(B_added, B.double());
        assert!(B_added.is_valid());
    }

    /// Test that mixed readdition agrees with addition
    #[test]
    fn basepoint_plus_basepoint_projective_niels_vs_basepoint2() {
        let B = constants::ED25519_BASEPOINT_POINT;
        let B_added = (&B + &B.as_projective_niels()).as_extended();
        assert_eq!(B_added, B.double());
    }

    /// Test that affine readdition agrees with addition
    #[test]
    fn basepoint_plus_basepoint_affine_niels_vs_basepoint2() {
        let B = constants::ED25519_BASEPOINT_POINT;
        let B_added = (&B + &B.as_affine_niels()).as_extended();
        assert_eq!(B_added, B.double());
    }

    /// Check that `mul_by_pow_2` agrees with repeated doubling
    #[test]
    fn mul_by_pow_2_vs_doubling() {
        let B = constants::ED25519_BASEPOINT_POINT;
        assert_eq!(B.mul_by_pow_2(1), B.double());
        assert_eq!(B.mul_by_pow_2(3), B.double().double().double());
    }

    /// Multiplying the basepoint by the group order gives the identity
    #[test]
    fn basepoint_mul_by_basepoint_order() {
        let should_be_id = &constants::BASEPOINT_ORDER * &constants::ED25519_BASEPOINT_POINT;
        assert!(should_be_id.is_identity());
        let should_be_id = EdwardsPoint::mul_base(&constants::BASEPOINT_ORDER);
        assert!(should_be_id.is_identity());
    }

    /// Scalar multiplication by small integers agrees with repeated addition
    #[test]
    fn scalar_mul_vs_repeated_addition() {
        let B = constants::ED25519_BASEPOINT_POINT;
        let mut acc = EdwardsPoint::identity();
        for n in 0u64..16 {
            assert_eq!(&Scalar::from(n) * &B, acc);
            acc += B;
        }
    }

    /// Fixed-base and variable-base scalar multiplication agree
    #[test]
    fn basepoint_table_vs_variable_base() {
        let s = crate::scalar::test::X;
        let P1 = EdwardsPoint::mul_base(&s);
        let P2 = &s * &constants::ED25519_BASEPOINT_POINT;
        assert_eq!(P1, P2);
        assert!(P1.is_valid());
    }

    /// A table created from an arbitrary point works as well
    #[test]
    fn basepoint_table_create_vs_mul() {
        let A = &Scalar::from(8475983829u64) * &constants::ED25519_BASEPOINT_POINT;
        let table = EdwardsBasepointTable::create(&A);
        assert_eq!(table.basepoint(), A);
        let s = crate::scalar::test::Y;
        assert_eq!(table.mul_base(&s), &s * &A);
    }

    /// Scalar multiplication distributes over point addition
    #[test]
    fn scalar_mul_distributes_over_add() {
        let s = crate::scalar::test::X;
        let B = constants::ED25519_BASEPOINT_POINT;
        let A = &Scalar::from(2837u64) * &B;
        let left = &s * &(&A + &B);
        let right = &(&s * &A) + &(&s * &B);
        assert_eq!(left, right);
    }

    /// Test the multiscalar strategies against a manual sum
    #[test]
    fn multiscalar_consistency() {
        let B = constants::ED25519_BASEPOINT_POINT;
        let scalars = [
            crate::scalar::test::X,
            crate::scalar::test::Y,
            Scalar::from(1337u64),
        ];
        let points: Vec<EdwardsPoint> = (2u64..5).map(|i| &Scalar::from(i) * &B).collect();

        let expected: EdwardsPoint = scalars
            .iter()
            .zip(points.iter())
            .map(|(s, P)| s * P)
            .sum();

        let ct = EdwardsPoint::multiscalar_mul(&scalars, &points);
        let vt = EdwardsPoint::vartime_multiscalar_mul(&scalars, &points);

        assert_eq!(ct, expected);
        assert_eq!(vt, expected);
    }

    /// Test vartime double-base multiplication against naive computation
    #[test]
    fn vartime_double_scalar_mul_basepoint_vs_naive() {
        let a = crate::scalar::test::X;
        let b = crate::scalar::test::Y;
        let A = &Scalar::from(87329482u64) * &constants::ED25519_BASEPOINT_POINT;

        let naive = &(&a * &A) + &(&b * &constants::ED25519_BASEPOINT_POINT);
        let interleaved = EdwardsPoint::vartime_double_scalar_mul_basepoint(&a, &A, &b);

        assert_eq!(naive, interleaved);
    }

    #[test]
    fn conditional_select_chooses_correctly() {
        let id = EdwardsPoint::identity();
        let B = constants::ED25519_BASEPOINT_POINT;
        assert_eq!(EdwardsPoint::conditional_select(&id, &B, Choice::from(0)), id);
        assert_eq!(EdwardsPoint::conditional_select(&id, &B, Choice::from(1)), B);
    }

    #[test]
    fn impl_sum() {
        let B = constants::ED25519_BASEPOINT_POINT;
        let B2 = B.double();
        let points = [B, B2];
        let sum: EdwardsPoint = points.iter().sum();
        assert_eq!(sum, &B + &B2);

        let empty: [EdwardsPoint; 0] = [];
        let sum: EdwardsPoint = empty.iter().sum();
        assert!(sum.is_identity());
    }
}
