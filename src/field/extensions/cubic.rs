use core::fmt::Debug;
use core::marker::PhantomData;

use crate::errors::ByteConversionError;
use crate::field::element::{FieldElement, LexicographicallyLargest};
use crate::field::traits::{HasByteLen, IsField};
use crate::traits::ByteConversion;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Fixes the cubic non-residue `beta` used to build `F[v]/(v^3 - beta)`.
/// `beta` must not be a cube in `F` (spec.md 4.D).
pub trait HasCubicNonResidue<F: IsField> {
    fn residue() -> FieldElement<F>;
}

/// The cubic extension field `F[v]/(v^3 - beta)`, represented as the
/// triple `(c0, c1, c2)` standing for `c0 + c1 * v + c2 * v^2`.
#[derive(Debug, Clone)]
pub struct CubicExtensionField<F, C> {
    base_field: PhantomData<F>,
    non_residue: PhantomData<C>,
}

pub type CubicExtensionFieldElement<F, C> = FieldElement<CubicExtensionField<F, C>>;

impl<F, C> IsField for CubicExtensionField<F, C>
where
    F: IsField + Clone,
    C: Clone + Debug + HasCubicNonResidue<F>,
{
    type BaseType = [FieldElement<F>; 3];

    fn add(a: &[FieldElement<F>; 3], b: &[FieldElement<F>; 3]) -> [FieldElement<F>; 3] {
        [&a[0] + &b[0], &a[1] + &b[1], &a[2] + &b[2]]
    }

    /// spec.md 4.C:
    /// `a*b = (a0 b0 + beta(a1 b2 + a2 b1), a0 b1 + a1 b0 + beta a2 b2, a0 b2 + a1 b1 + a2 b0)`.
    fn mul(a: &[FieldElement<F>; 3], b: &[FieldElement<F>; 3]) -> [FieldElement<F>; 3] {
        let beta = C::residue();
        let [a0, a1, a2] = a;
        let [b0, b1, b2] = b;
        [
            a0 * b0 + &beta * (a1 * b2 + a2 * b1),
            a0 * b1 + a1 * b0 + &beta * (a2 * b2),
            a0 * b2 + a1 * b1 + a2 * b0,
        ]
    }

    fn sub(a: &[FieldElement<F>; 3], b: &[FieldElement<F>; 3]) -> [FieldElement<F>; 3] {
        [&a[0] - &b[0], &a[1] - &b[1], &a[2] - &b[2]]
    }

    fn neg(a: &[FieldElement<F>; 3]) -> [FieldElement<F>; 3] {
        [-&a[0], -&a[1], -&a[2]]
    }

    /// Kotov-Kaliski inversion (spec.md 4.C):
    /// `A = c0^2 - beta c1 c2`, `B = beta c2^2 - c0 c1`, `C = c1^2 - c0 c2`,
    /// `D = c0 A + beta c1 C + beta c2 B`, result `(A/D, B/D, C/D)`.
    fn inv(a: &[FieldElement<F>; 3]) -> [FieldElement<F>; 3] {
        let beta = C::residue();
        let [c0, c1, c2] = a;
        let aa = c0.square() - &beta * (c1 * c2);
        let bb = &beta * c2.square() - c0 * c1;
        let cc = c1.square() - c0 * c2;
        let d = c0 * &aa + &beta * (c1 * &cc) + &beta * (c2 * &bb);
        let d_inv = d.inv().expect("inverse of zero cubic-extension element requested");
        [&aa * &d_inv, &bb * &d_inv, &cc * &d_inv]
    }

    fn eq(a: &[FieldElement<F>; 3], b: &[FieldElement<F>; 3]) -> bool {
        a[0] == b[0] && a[1] == b[1] && a[2] == b[2]
    }

    fn zero() -> [FieldElement<F>; 3] {
        [FieldElement::zero(), FieldElement::zero(), FieldElement::zero()]
    }

    fn one() -> [FieldElement<F>; 3] {
        [FieldElement::one(), FieldElement::zero(), FieldElement::zero()]
    }

    fn from_u64(x: u64) -> Self::BaseType {
        [FieldElement::from(x), FieldElement::zero(), FieldElement::zero()]
    }

    fn from_base_type(x: [FieldElement<F>; 3]) -> [FieldElement<F>; 3] {
        x
    }
}

/// Reads `(c0, c1, c2)` from the top coefficient down, falling through
/// zero coefficients (spec.md 4.E).
impl<F, C> LexicographicallyLargest for CubicExtensionField<F, C>
where
    F: IsField + Clone + LexicographicallyLargest,
    C: Clone + Debug + HasCubicNonResidue<F>,
{
    fn is_largest(x: &[FieldElement<F>; 3]) -> bool {
        if !x[2].is_zero() {
            F::is_largest(x[2].value())
        } else if !x[1].is_zero() {
            F::is_largest(x[1].value())
        } else {
            F::is_largest(x[0].value())
        }
    }
}

impl<F, C> HasByteLen for CubicExtensionField<F, C>
where
    F: IsField + Clone + HasByteLen,
    C: Clone + Debug + HasCubicNonResidue<F>,
{
    fn byte_len() -> usize {
        F::byte_len() * 3
    }
}

/// `c0 ‖ c1 ‖ c2`, each coordinate encoded at the base field's fixed width.
impl<F> ByteConversion for [FieldElement<F>; 3]
where
    F: IsField + HasByteLen,
    FieldElement<F>: ByteConversion,
{
    #[cfg(feature = "alloc")]
    fn to_bytes_be(&self) -> Vec<u8> {
        let mut bytes = self[0].to_bytes_be();
        bytes.extend(self[1].to_bytes_be());
        bytes.extend(self[2].to_bytes_be());
        bytes
    }

    #[cfg(feature = "alloc")]
    fn to_bytes_le(&self) -> Vec<u8> {
        let mut bytes = self[0].to_bytes_le();
        bytes.extend(self[1].to_bytes_le());
        bytes.extend(self[2].to_bytes_le());
        bytes
    }

    fn from_bytes_be(bytes: &[u8]) -> Result<Self, ByteConversionError> {
        let width = F::byte_len();
        if bytes.len() != width * 3 {
            return Err(ByteConversionError::FromBEBytesError);
        }
        let c0 = FieldElement::<F>::from_bytes_be(&bytes[..width])?;
        let c1 = FieldElement::<F>::from_bytes_be(&bytes[width..width * 2])?;
        let c2 = FieldElement::<F>::from_bytes_be(&bytes[width * 2..])?;
        Ok([c0, c1, c2])
    }

    fn from_bytes_le(bytes: &[u8]) -> Result<Self, ByteConversionError> {
        let width = F::byte_len();
        if bytes.len() != width * 3 {
            return Err(ByteConversionError::FromLEBytesError);
        }
        let c0 = FieldElement::<F>::from_bytes_le(&bytes[..width])?;
        let c1 = FieldElement::<F>::from_bytes_le(&bytes[width..width * 2])?;
        let c2 = FieldElement::<F>::from_bytes_le(&bytes[width * 2..])?;
        Ok([c0, c1, c2])
    }
}
