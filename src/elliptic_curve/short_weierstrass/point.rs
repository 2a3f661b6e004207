use core::fmt::Debug;

use crate::cyclic_group::IsGroup;
use crate::elliptic_curve::short_weierstrass::traits::IsShortWeierstrass;
use crate::elliptic_curve::traits::FromAffine;
use crate::errors::{ByteConversionError, CurveError};
use crate::field::element::{FieldElement, LexicographicallyLargest};
use crate::field::traits::HasByteLen;
use crate::traits::ByteConversion;
use crate::unsigned_integer::element::UnsignedInteger;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// A point of `E` in affine coordinates: either the identity, or a pair
/// `(x, y)` satisfying `E`'s defining equation (spec.md 4.E). This is the
/// primary point representation: the group law, scalar multiplication and
/// the line-evaluation primitive the Miller loop needs are all defined
/// here first; `ShortWeierstrassProjectivePoint` bridges to it.
#[derive(Debug, Clone)]
pub enum AffinePoint<E: IsShortWeierstrass> {
    Infinity,
    Finite(FieldElement<E::BaseField>, FieldElement<E::BaseField>),
}

impl<E: IsShortWeierstrass> AffinePoint<E> {
    pub fn is_infinity(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    pub fn x(&self) -> &FieldElement<E::BaseField> {
        match self {
            Self::Finite(x, _) => x,
            Self::Infinity => panic!("point at infinity has no x coordinate"),
        }
    }

    pub fn y(&self) -> &FieldElement<E::BaseField> {
        match self {
            Self::Finite(_, y) => y,
            Self::Infinity => panic!("point at infinity has no y coordinate"),
        }
    }

    pub fn neg(&self) -> Self {
        match self {
            Self::Infinity => Self::Infinity,
            Self::Finite(x, y) => Self::Finite(x.clone(), -y),
        }
    }

    /// `(numerator, denominator)` of the slope of the line through `self`
    /// and `other` -- the tangent at `self` if `self == other`, the secant
    /// otherwise. Kept undivided so a caller doing denominator elimination
    /// (spec.md 4.F/4.G) can fold the denominator into a batch inversion
    /// instead of inverting here. Crate-private: [`Self::get_lambda`] is
    /// the public single-pair operation spec.md 4.E/6 names.
    pub(crate) fn lambda_fraction(
        &self,
        other: &Self,
    ) -> Option<(FieldElement<E::BaseField>, FieldElement<E::BaseField>)> {
        match (self, other) {
            (Self::Finite(x1, y1), Self::Finite(x2, y2)) => {
                if x1 == x2 {
                    if y1.is_zero() || y1 == &(-y2.clone()) {
                        return None;
                    }
                    let three = FieldElement::<E::BaseField>::from(3);
                    Some((&three * x1.square() + E::a(), y1.double()))
                } else {
                    Some((y2 - y1, x2 - x1))
                }
            }
            _ => None,
        }
    }

    /// The slope of the line through `self` and `other` -- the tangent
    /// slope at `self` when `self == other`, the chord slope otherwise
    /// (spec.md 4.E). `None` exactly when the two points are inverses of
    /// one another (the sum is the point at infinity).
    pub fn get_lambda(&self, other: &Self) -> Option<FieldElement<E::BaseField>> {
        let (num, den) = self.lambda_fraction(other)?;
        Some(num / den)
    }

    /// The slopes encountered while computing `n * self` by a left-to-right
    /// double-and-add walk of `exp`'s signed-binary digits (spec.md 4.E
    /// `get_lambdas`, used by the Groth16 witness-preparation collaborator):
    /// `exp = [e_0, .., e_{m-1}]`, `e_i` in `{-1, 0, 1}`, representing
    /// `n = sum(e_i * 2^i)`. `e_{m-1}` (the most significant digit) must be
    /// `+-1`.
    ///
    /// Returns one entry per loop iteration (`i` from `m-2` downto `0`):
    /// the doubling step's tangent slope alone when `e_i == 0`, or the
    /// tangent slope followed by the addition step's chord slope when
    /// `e_i == +-1`.
    #[cfg(feature = "alloc")]
    pub fn get_lambdas(
        &self,
        exp: &[i8],
    ) -> Result<Vec<Vec<FieldElement<E::BaseField>>>, CurveError> {
        let m = exp.len();
        if m == 0 || exp[m - 1] == 0 {
            return Err(CurveError::MostSignificantDigitIsZero);
        }
        let neg_self = self.neg();
        let mut t = if exp[m - 1] == 1 {
            self.clone()
        } else {
            neg_self.clone()
        };
        let mut lambdas = Vec::with_capacity(m - 1);
        for i in (0..m - 1).rev() {
            let mut step = Vec::with_capacity(2);
            // Doubling step: the tangent slope at T.
            step.push(t.get_lambda(&t).expect("T has non-zero y in the r-torsion subgroup"));
            t = t.operate_with(&t);
            match exp[i] {
                1 => {
                    step.push(
                        t.get_lambda(self)
                            .expect("T and self are not mutual inverses mid-loop"),
                    );
                    t = t.operate_with(self);
                }
                -1 => {
                    step.push(
                        t.get_lambda(&neg_self)
                            .expect("T and -self are not mutual inverses mid-loop"),
                    );
                    t = t.operate_with(&neg_self);
                }
                _ => {}
            }
            lambdas.push(step);
        }
        Ok(lambdas)
    }
}

impl<E: IsShortWeierstrass> PartialEq for AffinePoint<E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Infinity, Self::Infinity) => true,
            (Self::Finite(x1, y1), Self::Finite(x2, y2)) => x1 == x2 && y1 == y2,
            _ => false,
        }
    }
}
impl<E: IsShortWeierstrass> Eq for AffinePoint<E> {}

impl<E: IsShortWeierstrass> FromAffine<E::BaseField> for AffinePoint<E> {
    fn from_affine(
        x: FieldElement<E::BaseField>,
        y: FieldElement<E::BaseField>,
    ) -> Result<Self, CurveError> {
        if E::defining_equation(&x, &y) != FieldElement::zero() {
            return Err(CurveError::InvalidPoint);
        }
        Ok(Self::Finite(x, y))
    }
}

impl<E: IsShortWeierstrass> IsGroup for AffinePoint<E> {
    fn neutral_element() -> Self {
        Self::Infinity
    }

    fn operate_with(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Infinity, _) => other.clone(),
            (_, Self::Infinity) => self.clone(),
            (Self::Finite(x1, y1), Self::Finite(x2, _)) => match self.get_lambda(other) {
                None => Self::Infinity,
                Some(lambda) => {
                    let x3 = lambda.square() - x1 - x2;
                    let y3 = &lambda * (x1 - &x3) - y1;
                    Self::Finite(x3, y3)
                }
            },
        }
    }
}

impl<E: IsShortWeierstrass> AffinePoint<E> {
    /// Double-and-add scalar multiplication by an arbitrary-precision
    /// exponent (spec.md's scalar multiplication is not restricted to
    /// `u128`, unlike [`IsGroup::operate_with_self`]).
    pub fn operate_with_self_bigint<const N: usize>(&self, exponent: &UnsignedInteger<N>) -> Self {
        let mut result = Self::neutral_element();
        let mut base = self.clone();
        for i in 0..exponent.bit_length() {
            if exponent.bit(i) {
                result = result.operate_with(&base);
            }
            base = base.operate_with(&base);
        }
        result
    }

    /// arkworks-style uncompressed serialization: `LE(x) || LE(y)`, with
    /// bit 6 of the final byte set for the point at infinity and bit 7
    /// set when `y` is the lexicographically-largest root (spec.md 4.E).
    #[cfg(feature = "alloc")]
    pub fn serialize_uncompressed(&self) -> alloc::vec::Vec<u8>
    where
        E::BaseField: HasByteLen + LexicographicallyLargest,
        FieldElement<E::BaseField>: ByteConversion,
    {
        let width = E::BaseField::byte_len();
        match self {
            Self::Infinity => {
                let mut bytes = alloc::vec![0_u8; width * 2];
                bytes[width * 2 - 1] |= 1 << 6;
                bytes
            }
            Self::Finite(x, y) => {
                let mut bytes = x.to_bytes_le();
                let mut y_bytes = y.to_bytes_le();
                if y.lexicographically_largest() {
                    *y_bytes.last_mut().unwrap() |= 1 << 7;
                }
                bytes.extend(y_bytes);
                bytes
            }
        }
    }

    #[cfg(feature = "alloc")]
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self, ByteConversionError>
    where
        E::BaseField: HasByteLen,
        FieldElement<E::BaseField>: ByteConversion,
    {
        let width = E::BaseField::byte_len();
        if bytes.len() != width * 2 {
            return Err(ByteConversionError::FromLEBytesError);
        }
        let is_infinity = bytes[width * 2 - 1] & (1 << 6) != 0;
        if is_infinity {
            return Ok(Self::Infinity);
        }
        let mut x_bytes = bytes[..width].to_vec();
        let mut y_bytes = bytes[width..].to_vec();
        x_bytes.last_mut().map(|b| *b &= !(0b11 << 6));
        y_bytes.last_mut().map(|b| *b &= !(0b11 << 6));
        let x = FieldElement::<E::BaseField>::from_bytes_le(&x_bytes)?;
        let y = FieldElement::<E::BaseField>::from_bytes_le(&y_bytes)?;
        Self::from_affine(x, y).map_err(|_| ByteConversionError::InvalidValue)
    }
}

/// A point of `E` in homogeneous projective coordinates `[X: Y: Z]`,
/// standing for the affine point `(X/Z, Y/Z)`; `Z == 0` represents the
/// point at infinity. This is the alternate representation: its group law
/// is implemented by bridging through [`AffinePoint`] rather than
/// duplicating the case analysis, since spec.md's non-goals exclude
/// optimizing this path for performance.
#[derive(Debug, Clone)]
pub struct ShortWeierstrassProjectivePoint<E: IsShortWeierstrass> {
    pub value: [FieldElement<E::BaseField>; 3],
}

impl<E: IsShortWeierstrass> ShortWeierstrassProjectivePoint<E> {
    /// Builds a point from raw projective coordinates without checking
    /// membership; callers pass already-verified coordinates (e.g. the
    /// output of the group law, or `Z = 0` for infinity).
    pub fn new(value: [FieldElement<E::BaseField>; 3]) -> Self {
        Self { value }
    }

    pub fn x(&self) -> &FieldElement<E::BaseField> {
        &self.value[0]
    }

    pub fn y(&self) -> &FieldElement<E::BaseField> {
        &self.value[1]
    }

    pub fn z(&self) -> &FieldElement<E::BaseField> {
        &self.value[2]
    }

    pub fn coordinates(&self) -> &[FieldElement<E::BaseField>; 3] {
        &self.value
    }

    /// `Z == 0`, not the historical (and buggy, per the original this
    /// crate's algorithms were distilled from) check against the affine
    /// neutral-element encoding `[0: 1: 0]` alone.
    pub fn is_neutral_element(&self) -> bool {
        self.z().is_zero()
    }

    pub fn to_affine(&self) -> AffinePoint<E> {
        if self.is_neutral_element() {
            AffinePoint::Infinity
        } else {
            let z_inv = self.z().inv().unwrap();
            AffinePoint::Finite(self.x() * &z_inv, self.y() * &z_inv)
        }
    }

    pub fn from_affine_point(p: &AffinePoint<E>) -> Self {
        match p {
            AffinePoint::Infinity => Self::new([
                FieldElement::zero(),
                FieldElement::one(),
                FieldElement::zero(),
            ]),
            AffinePoint::Finite(x, y) => {
                Self::new([x.clone(), y.clone(), FieldElement::one()])
            }
        }
    }

    pub fn neg(&self) -> Self {
        Self::from_affine_point(&self.to_affine().neg())
    }

    pub fn operate_with_self_bigint<const N: usize>(&self, exponent: &UnsignedInteger<N>) -> Self {
        Self::from_affine_point(&self.to_affine().operate_with_self_bigint(exponent))
    }
}

impl<E: IsShortWeierstrass> PartialEq for ShortWeierstrassProjectivePoint<E> {
    fn eq(&self, other: &Self) -> bool {
        self.to_affine() == other.to_affine()
    }
}
impl<E: IsShortWeierstrass> Eq for ShortWeierstrassProjectivePoint<E> {}

impl<E: IsShortWeierstrass> FromAffine<E::BaseField> for ShortWeierstrassProjectivePoint<E> {
    fn from_affine(
        x: FieldElement<E::BaseField>,
        y: FieldElement<E::BaseField>,
    ) -> Result<Self, CurveError> {
        let p = AffinePoint::<E>::from_affine(x, y)?;
        Ok(Self::from_affine_point(&p))
    }
}

impl<E: IsShortWeierstrass> IsGroup for ShortWeierstrassProjectivePoint<E> {
    fn neutral_element() -> Self {
        Self::new([FieldElement::zero(), FieldElement::one(), FieldElement::zero()])
    }

    fn operate_with(&self, other: &Self) -> Self {
        Self::from_affine_point(&self.to_affine().operate_with(&other.to_affine()))
    }
}

#[cfg(test)]
#[cfg(feature = "alloc")]
mod serialization_properties {
    use crate::elliptic_curve::short_weierstrass::curves::bls12_381::curve::BLS12381Curve;
    use crate::elliptic_curve::short_weierstrass::point::AffinePoint;
    use crate::elliptic_curve::traits::IsEllipticCurve;
    use crate::cyclic_group::IsGroup;
    use proptest::prelude::*;

    #[test]
    fn infinity_round_trips_through_uncompressed_serialization() {
        let infinity = AffinePoint::<BLS12381Curve>::Infinity;
        let bytes = infinity.serialize_uncompressed();
        let decoded = AffinePoint::<BLS12381Curve>::deserialize_uncompressed(&bytes).unwrap();
        assert_eq!(decoded, infinity);
    }

    proptest! {
        // spec.md 8.6: serialize then deserialize is the identity, for
        // every multiple of the generator (a cheap stand-in for "every
        // point", since this crate has no proptest strategy generating
        // arbitrary field elements directly).
        #[test]
        fn uncompressed_round_trip_is_identity(k in 1u128..2000) {
            let point = BLS12381Curve::generator().operate_with_self(k).to_affine();
            let bytes = point.serialize_uncompressed();
            let decoded = AffinePoint::<BLS12381Curve>::deserialize_uncompressed(&bytes).unwrap();
            prop_assert_eq!(decoded, point);
        }
    }
}

#[cfg(test)]
#[cfg(feature = "alloc")]
mod get_lambdas_tests {
    use crate::elliptic_curve::short_weierstrass::curves::bls12_381::curve::BLS12381Curve;
    use crate::elliptic_curve::traits::IsEllipticCurve;
    use crate::errors::CurveError;

    // spec.md 4.E: `get_lambdas` rejects an exponent whose most
    // significant digit is 0.
    #[test]
    fn rejects_a_most_significant_digit_of_zero() {
        let g = BLS12381Curve::generator().to_affine();
        let result = g.get_lambdas(&[1, 0, 0]);
        assert_eq!(result.unwrap_err(), CurveError::MostSignificantDigitIsZero);
    }

    #[test]
    fn rejects_an_empty_exponent() {
        let g = BLS12381Curve::generator().to_affine();
        assert_eq!(
            g.get_lambdas(&[]).unwrap_err(),
            CurveError::MostSignificantDigitIsZero
        );
    }

    // spec.md 8.10: one entry per loop iteration (`m - 1` of them for an
    // `m`-digit exponent), each a doubling-only slope when the digit is 0,
    // or a doubling slope followed by an addition slope otherwise.
    #[test]
    fn emits_one_step_per_digit_below_the_most_significant() {
        let g = BLS12381Curve::generator().to_affine();
        // n = 0b1011 = 11, digits least-significant-digit first.
        let exp = [1_i8, 1, 0, 1];
        let steps = g.get_lambdas(&exp).unwrap();
        assert_eq!(steps.len(), exp.len() - 1);
        // i = 2 (digit 0): doubling only.
        assert_eq!(steps[0].len(), 1);
        // i = 1 (digit 1): doubling then addition.
        assert_eq!(steps[1].len(), 2);
        // i = 0 (digit 1): doubling then addition.
        assert_eq!(steps[2].len(), 2);
    }

    #[test]
    fn single_signed_digit_of_minus_one_negates_the_start_point() {
        let g = BLS12381Curve::generator().to_affine();
        let steps = g.get_lambdas(&[-1]).unwrap();
        // No iterations run: m - 1 == 0 for a single-digit exponent.
        assert!(steps.is_empty());
    }
}
