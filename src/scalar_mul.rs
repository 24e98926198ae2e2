// -*- mode: rust; -*-
//
// This file is part of ristretto255.
// See LICENSE for licensing information.

//! Scalar multiplication strategies for the Edwards curve.
//!
//! The constant-time routines use a fixed pattern of doublings and
//! constant-time table lookups, independent of the scalar value; the
//! `vartime_` routines use sliding-window non-adjacent forms and leak
//! the positions of the nonzero digits.

#![allow(non_snake_case)]

use core::borrow::Borrow;
use core::cmp::Ordering;

use crate::constants;
use crate::curve_models::{CompletedPoint, ProjectiveNielsPoint, ProjectivePoint};
use crate::edwards::EdwardsPoint;
use crate::scalar::Scalar;
use crate::traits::Identity;
use crate::window::{LookupTable, NafLookupTable5};

/// Perform constant-time, variable-base scalar multiplication.
#[rustfmt::skip] // keep alignment of explanatory comments
pub(crate) fn variable_base_mul(point: &EdwardsPoint, scalar: &Scalar) -> EdwardsPoint {
    // Construct a lookup table of [P,2P,3P,4P,5P,6P,7P,8P]
    let lookup_table = LookupTable::<ProjectiveNielsPoint>::from(point);
    // Setting s = scalar, compute
    //
    //    s = s_0 + s_1*16^1 + ... + s_63*16^63,
    //
    // with `-8 ≤ s_i < 8` for `0 ≤ i < 63` and `-8 ≤ s_63 ≤ 8`.
    // This decomposition requires s < 2^255, which is guaranteed by
    // Scalar invariant #1.
    let scalar_digits = scalar.as_radix_16();
    // Compute s*P as
    //
    //    s*P = P*(s_0 +   s_1*16^1 +   s_2*16^2 + ... +   s_63*16^63)
    //    s*P =  P*s_0 + P*s_1*16^1 + P*s_2*16^2 + ... + P*s_63*16^63
    //    s*P = P*s_0 + 16*(P*s_1 + 16*(P*s_2 + 16*( ... + P*s_63)...))
    //
    // We sum right-to-left.

    // Unwrap first loop iteration to save computing 16*identity
    let mut tmp2;
    let mut tmp3 = EdwardsPoint::identity();
    let mut tmp1 = &tmp3 + &lookup_table.select(scalar_digits[63]);
    // Now tmp1 = s_63*P in P1xP1 coords
    for i in (0..63).rev() {
        tmp2 = tmp1.as_projective(); // tmp2 =    (prev) in P2 coords
        tmp1 = tmp2.double();        // tmp1 =  2*(prev) in P1xP1 coords
        tmp2 = tmp1.as_projective(); // tmp2 =  2*(prev) in P2 coords
        tmp1 = tmp2.double();        // tmp1 =  4*(prev) in P1xP1 coords
        tmp2 = tmp1.as_projective(); // tmp2 =  4*(prev) in P2 coords
        tmp1 = tmp2.double();        // tmp1 =  8*(prev) in P1xP1 coords
        tmp2 = tmp1.as_projective(); // tmp2 =  8*(prev) in P2 coords
        tmp1 = tmp2.double();        // tmp1 = 16*(prev) in P1xP1 coords
        tmp3 = tmp1.as_extended();   // tmp3 = 16*(prev) in P3 coords
        tmp1 = &tmp3 + &lookup_table.select(scalar_digits[i]);
        // Now tmp1 = s_i*P + 16*(prev) in P1xP1 coords
    }
    tmp1.as_extended()
}

/// Perform constant-time multiscalar multiplication by the interleaved
/// window method, also known as Straus' method, using a fixed window
/// of size \\(4\\).
///
/// The doublings are shared across all the input points: writing each
/// scalar in signed radix 16 as
/// \\( s_i = s_{i,0} + s_{i,1} 16\^1 + \cdots + s_{i,63} 16^{63} \\),
/// the two-dimensional sum
/// \\( Q = \sum_i \sum_j s_{i,j} 16\^j P_i \\)
/// is computed column-wise, top-to-bottom, right-to-left, multiplying
/// by \\(16\\) only once per column.
pub(crate) fn straus_multiscalar_mul<I, J>(scalars: I, points: J) -> EdwardsPoint
where
    I: IntoIterator,
    I::Item: Borrow<Scalar>,
    J: IntoIterator,
    J::Item: Borrow<EdwardsPoint>,
{
    let lookup_tables: Vec<_> = points
        .into_iter()
        .map(|point| LookupTable::<ProjectiveNielsPoint>::from(point.borrow()))
        .collect();

    // This puts the scalar digits into a heap-allocated Vec.
    // To ensure that these are erased, the digits are zeroized
    // before returning.
    #[cfg_attr(not(feature = "zeroize"), allow(unused_mut))]
    let mut scalar_digits: Vec<_> = scalars
        .into_iter()
        .map(|s| s.borrow().as_radix_16())
        .collect();

    let mut Q = EdwardsPoint::identity();
    for j in (0..64).rev() {
        Q = Q.mul_by_pow_2(4);
        let it = scalar_digits.iter().zip(lookup_tables.iter());
        for (s_i, lookup_table_i) in it {
            // R_i = s_{i,j} * P_i
            let R_i = lookup_table_i.select(s_i[j]);
            // Q = Q + R_i
            Q = (&Q + &R_i).as_extended();
        }
    }

    #[cfg(feature = "zeroize")]
    for digits in scalar_digits.iter_mut() {
        zeroize::Zeroize::zeroize(&mut digits[..]);
    }

    Q
}

/// Perform variable-time multiscalar multiplication using a
/// non-adjacent form of width \\(5\\).
///
/// This is completely similar to the constant-time code, but we use a
/// non-adjacent form for the scalar, and do not do table lookups in
/// constant time.  The non-adjacent form has signed, odd digits, which
/// halves the table size.
pub(crate) fn straus_optional_multiscalar_mul<I, J>(scalars: I, points: J) -> Option<EdwardsPoint>
where
    I: IntoIterator,
    I::Item: Borrow<Scalar>,
    J: IntoIterator<Item = Option<EdwardsPoint>>,
{
    let nafs: Vec<_> = scalars
        .into_iter()
        .map(|c| c.borrow().non_adjacent_form(5))
        .collect();

    let lookup_tables = points
        .into_iter()
        .map(|P_opt| P_opt.map(|P| NafLookupTable5::<ProjectiveNielsPoint>::from(&P)))
        .collect::<Option<Vec<_>>>()?;

    let mut r = ProjectivePoint::identity();

    for i in (0..256).rev() {
        let mut t: CompletedPoint = r.double();

        for (naf, lookup_table) in nafs.iter().zip(lookup_tables.iter()) {
            match naf[i].cmp(&0) {
                Ordering::Greater => t = &t.as_extended() + &lookup_table.select(naf[i] as usize),
                Ordering::Less => t = &t.as_extended() - &lookup_table.select(-naf[i] as usize),
                Ordering::Equal => {}
            }
        }

        r = t.as_projective();
    }

    Some(r.as_extended())
}

/// Compute \\(aA + bB\\) in variable time, where \\(B\\) is the
/// Ed25519 basepoint, by interleaving a width-5 NAF for \\(a\\) with a
/// width-8 NAF for \\(b\\) over the precomputed table of odd basepoint
/// multiples.
pub(crate) fn vartime_double_base_mul(a: &Scalar, A: &EdwardsPoint, b: &Scalar) -> EdwardsPoint {
    let a_naf = a.non_adjacent_form(5);
    let b_naf = b.non_adjacent_form(8);

    // Find starting index
    let mut i: usize = 255;
    for j in (0..256).rev() {
        i = j;
        if a_naf[i] != 0 || b_naf[i] != 0 {
            break;
        }
    }

    let table_A = NafLookupTable5::<ProjectiveNielsPoint>::from(A);
    let table_B = &*constants::AFFINE_ODD_MULTIPLES_OF_BASEPOINT;

    let mut r = ProjectivePoint::identity();
    loop {
        let mut t = r.double();

        match a_naf[i].cmp(&0) {
            Ordering::Greater => t = &t.as_extended() + &table_A.select(a_naf[i] as usize),
            Ordering::Less => t = &t.as_extended() - &table_A.select(-a_naf[i] as usize),
            Ordering::Equal => {}
        }

        match b_naf[i].cmp(&0) {
            Ordering::Greater => t = &t.as_extended() + &table_B.select(b_naf[i] as usize),
            Ordering::Less => t = &t.as_extended() - &table_B.select(-b_naf[i] as usize),
            Ordering::Equal => {}
        }

        r = t.as_projective();

        if i == 0 {
            break;
        }
        i -= 1;
    }

    r.as_extended()
}
