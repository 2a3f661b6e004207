use core::fmt::Debug;
use core::marker::PhantomData;

use crate::errors::ByteConversionError;
use crate::field::element::{FieldElement, LexicographicallyLargest};
use crate::field::traits::{HasByteLen, IsField};
use crate::traits::ByteConversion;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Fixes the quadratic non-residue `beta` used to build `F[u]/(u^2 - beta)`.
/// `beta` must not be a square in `F`; this is a construction-time
/// contract the caller must uphold (spec.md 4.D).
pub trait HasQuadraticNonResidue<F: IsField> {
    fn residue() -> FieldElement<F>;
}

/// The quadratic extension field `F[u]/(u^2 - beta)`, represented as the
/// pair `(c0, c1)` standing for `c0 + c1 * u`. `F` and `Q` are marker
/// types: `F` names the base field, `Q` supplies the non-residue `beta`.
#[derive(Debug, Clone)]
pub struct QuadraticExtensionField<F, Q> {
    base_field: PhantomData<F>,
    non_residue: PhantomData<Q>,
}

pub type QuadraticExtensionFieldElement<F, Q> = FieldElement<QuadraticExtensionField<F, Q>>;

impl<F, Q> IsField for QuadraticExtensionField<F, Q>
where
    F: IsField + Clone,
    Q: Clone + Debug + HasQuadraticNonResidue<F>,
{
    type BaseType = [FieldElement<F>; 2];

    fn add(a: &[FieldElement<F>; 2], b: &[FieldElement<F>; 2]) -> [FieldElement<F>; 2] {
        [&a[0] + &b[0], &a[1] + &b[1]]
    }

    /// `(a0 + a1 u)(b0 + b1 u) = (a0 b0 + beta a1 b1) + (a0 b1 + a1 b0) u`.
    fn mul(a: &[FieldElement<F>; 2], b: &[FieldElement<F>; 2]) -> [FieldElement<F>; 2] {
        let beta = Q::residue();
        [
            &a[0] * &b[0] + &a[1] * &b[1] * &beta,
            &a[0] * &b[1] + &a[1] * &b[0],
        ]
    }

    fn sub(a: &[FieldElement<F>; 2], b: &[FieldElement<F>; 2]) -> [FieldElement<F>; 2] {
        [&a[0] - &b[0], &a[1] - &b[1]]
    }

    fn neg(a: &[FieldElement<F>; 2]) -> [FieldElement<F>; 2] {
        [-&a[0], -&a[1]]
    }

    /// `N = c0^2 - beta c1^2`; the inverse is `(c0/N, -c1/N)`.
    fn inv(a: &[FieldElement<F>; 2]) -> [FieldElement<F>; 2] {
        let norm = (a[0].square() - Q::residue() * a[1].square())
            .inv()
            .expect("inverse of zero quadratic-extension element requested");
        [&a[0] * &norm, -(&a[1] * &norm)]
    }

    fn eq(a: &[FieldElement<F>; 2], b: &[FieldElement<F>; 2]) -> bool {
        a[0] == b[0] && a[1] == b[1]
    }

    fn zero() -> [FieldElement<F>; 2] {
        [FieldElement::zero(), FieldElement::zero()]
    }

    fn one() -> [FieldElement<F>; 2] {
        [FieldElement::one(), FieldElement::zero()]
    }

    fn from_u64(x: u64) -> Self::BaseType {
        [FieldElement::from(x), FieldElement::zero()]
    }

    fn from_base_type(x: [FieldElement<F>; 2]) -> [FieldElement<F>; 2] {
        x
    }
}

impl<F, Q> QuadraticExtensionFieldElement<F, Q>
where
    F: IsField + Clone,
    Q: Clone + Debug + HasQuadraticNonResidue<F>,
{
    /// Conjugation `(c0, c1) -> (c0, -c1)`, the non-trivial element of
    /// `Gal(F[u]/F)`.
    pub fn conjugate(&self) -> Self {
        let [c0, c1] = self.value();
        Self::new([c0.clone(), -c1.clone()])
    }
}

/// Reads `(c0, c1)` from the top coefficient down: `c1` decides unless it
/// is zero, in which case `c0` decides (spec.md 4.E).
impl<F, Q> LexicographicallyLargest for QuadraticExtensionField<F, Q>
where
    F: IsField + Clone + LexicographicallyLargest,
    Q: Clone + Debug + HasQuadraticNonResidue<F>,
{
    fn is_largest(x: &[FieldElement<F>; 2]) -> bool {
        if x[1].is_zero() {
            F::is_largest(x[0].value())
        } else {
            F::is_largest(x[1].value())
        }
    }
}

impl<F, Q> HasByteLen for QuadraticExtensionField<F, Q>
where
    F: IsField + Clone + HasByteLen,
    Q: Clone + Debug + HasQuadraticNonResidue<F>,
{
    fn byte_len() -> usize {
        F::byte_len() * 2
    }
}

/// `c0 ‖ c1`, each coordinate encoded at the base field's fixed width.
impl<F> ByteConversion for [FieldElement<F>; 2]
where
    F: IsField + HasByteLen,
    FieldElement<F>: ByteConversion,
{
    #[cfg(feature = "alloc")]
    fn to_bytes_be(&self) -> Vec<u8> {
        let mut bytes = self[0].to_bytes_be();
        bytes.extend(self[1].to_bytes_be());
        bytes
    }

    #[cfg(feature = "alloc")]
    fn to_bytes_le(&self) -> Vec<u8> {
        let mut bytes = self[0].to_bytes_le();
        bytes.extend(self[1].to_bytes_le());
        bytes
    }

    fn from_bytes_be(bytes: &[u8]) -> Result<Self, ByteConversionError> {
        let width = F::byte_len();
        if bytes.len() != width * 2 {
            return Err(ByteConversionError::FromBEBytesError);
        }
        let c0 = FieldElement::<F>::from_bytes_be(&bytes[..width])?;
        let c1 = FieldElement::<F>::from_bytes_be(&bytes[width..])?;
        Ok([c0, c1])
    }

    fn from_bytes_le(bytes: &[u8]) -> Result<Self, ByteConversionError> {
        let width = F::byte_len();
        if bytes.len() != width * 2 {
            return Err(ByteConversionError::FromLEBytesError);
        }
        let c0 = FieldElement::<F>::from_bytes_le(&bytes[..width])?;
        let c1 = FieldElement::<F>::from_bytes_le(&bytes[width..])?;
        Ok([c0, c1])
    }
}
