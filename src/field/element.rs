use core::fmt::Debug;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::errors::FieldError;
use crate::field::traits::{IsField, IsPrimeField};
use crate::traits::ByteConversion;
use crate::unsigned_integer::element::UnsignedInteger;

/// An element of the field described by `F`. This is a thin, `Copy`-free
/// wrapper around `F::BaseType` -- all arithmetic is delegated to `F`'s
/// associated functions, so a new field is added to the crate by writing an
/// `IsField` impl, never by touching this type.
#[derive(Debug, Clone)]
pub struct FieldElement<F: IsField> {
    value: F::BaseType,
}

impl<F: IsField> FieldElement<F> {
    pub fn new(value: F::BaseType) -> Self {
        Self {
            value: F::from_base_type(value),
        }
    }

    /// Builds a `FieldElement` directly from an already-reduced
    /// representation, skipping the `from_base_type` normalization step.
    /// Used when the value is already known to be canonical (e.g.
    /// hardcoded Frobenius constants built from hex literals).
    pub fn from_raw(value: F::BaseType) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &F::BaseType {
        &self.value
    }

    pub fn zero() -> Self {
        Self::new(F::zero())
    }

    pub fn one() -> Self {
        Self::new(F::one())
    }

    pub fn is_zero(&self) -> bool {
        F::eq(&self.value, &F::zero())
    }

    pub fn double(&self) -> Self {
        self + self
    }

    pub fn square(&self) -> Self {
        self * self
    }

    /// Multiplicative inverse. Fails for the zero element, per spec.md
    /// 4.A's "inversion of zero is undefined behaviour for the caller".
    pub fn inv(&self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::InvZeroError);
        }
        Ok(Self::new(F::inv(&self.value)))
    }

    /// Power by an unsigned exponent, square-and-multiply.
    pub fn pow<T: AsBits>(&self, exponent: T) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        for i in (0..exponent.num_bits()).rev() {
            result = result.square();
            if exponent.bit(i) {
                result = &result * &base;
            }
        }
        let _ = &mut base;
        result
    }

    /// Power by a signed exponent: `0^0` is an input error (spec.md 4.A),
    /// every other negative exponent inverts once after powering by its
    /// absolute value.
    pub fn pow_signed(&self, exponent: i128) -> Result<Self, FieldError> {
        if exponent == 0 {
            if self.is_zero() {
                return Err(FieldError::InvalidValue);
            }
            return Ok(Self::one());
        }
        let magnitude = exponent.unsigned_abs();
        let result = self.pow(magnitude as u128);
        if exponent < 0 {
            result.inv()
        } else {
            Ok(result)
        }
    }
}

impl<F: IsPrimeField> FieldElement<F> {
    pub fn representative(&self) -> F::RepresentativeType {
        F::representative(&self.value)
    }

    pub fn from_u64(x: u64) -> Self {
        Self::new(F::from_u64(x))
    }
}

impl<F: crate::field::traits::HasFrobenius> FieldElement<F> {
    /// `self^(q^n)`, reduced `n` modulo this field's order over `Fq`.
    pub fn frob(&self, n: usize) -> Self {
        let n = n % F::extension_degree_over_fq().max(1);
        Self::new(F::frobenius(&self.value, n))
    }
}

impl<F: IsField> PartialEq for FieldElement<F> {
    fn eq(&self, other: &Self) -> bool {
        F::eq(&self.value, &other.value)
    }
}
impl<F: IsField> Eq for FieldElement<F> {}

impl<F: IsField> Copy for FieldElement<F> where F::BaseType: Copy {}

impl<F: IsField> From<u64> for FieldElement<F> {
    fn from(x: u64) -> Self {
        Self::new(F::from_u64(x))
    }
}

/// Bit access used by the generic `pow` square-and-multiply loop, so it
/// works uniformly for machine integers and `UnsignedInteger<N>`.
pub trait AsBits {
    fn num_bits(&self) -> usize;
    fn bit(&self, i: usize) -> bool;
}

impl AsBits for u128 {
    fn num_bits(&self) -> usize {
        128 - self.leading_zeros() as usize
    }
    fn bit(&self, i: usize) -> bool {
        (self >> i) & 1 == 1
    }
}

impl AsBits for u64 {
    fn num_bits(&self) -> usize {
        64 - self.leading_zeros() as usize
    }
    fn bit(&self, i: usize) -> bool {
        (self >> i) & 1 == 1
    }
}

impl AsBits for u16 {
    fn num_bits(&self) -> usize {
        16 - self.leading_zeros() as usize
    }
    fn bit(&self, i: usize) -> bool {
        (self >> i) & 1 == 1
    }
}

impl<const N: usize> AsBits for UnsignedInteger<N> {
    fn num_bits(&self) -> usize {
        self.bit_length()
    }
    fn bit(&self, i: usize) -> bool {
        UnsignedInteger::bit(self, i)
    }
}

macro_rules! impl_field_operator {
    ($trait:ident, $method:ident, $field_fn:path) => {
        impl<F: IsField> $trait for FieldElement<F> {
            type Output = Self;
            fn $method(self, rhs: Self) -> Self {
                Self::new($field_fn(&self.value, &rhs.value))
            }
        }

        impl<'a, F: IsField> $trait<&'a FieldElement<F>> for FieldElement<F> {
            type Output = Self;
            fn $method(self, rhs: &'a FieldElement<F>) -> Self {
                Self::new($field_fn(&self.value, &rhs.value))
            }
        }

        impl<'a, F: IsField> $trait<FieldElement<F>> for &'a FieldElement<F> {
            type Output = FieldElement<F>;
            fn $method(self, rhs: FieldElement<F>) -> FieldElement<F> {
                FieldElement::new($field_fn(&self.value, &rhs.value))
            }
        }

        impl<'a, 'b, F: IsField> $trait<&'b FieldElement<F>> for &'a FieldElement<F> {
            type Output = FieldElement<F>;
            fn $method(self, rhs: &'b FieldElement<F>) -> FieldElement<F> {
                FieldElement::new($field_fn(&self.value, &rhs.value))
            }
        }
    };
}

impl_field_operator!(Add, add, F::add);
impl_field_operator!(Sub, sub, F::sub);
impl_field_operator!(Mul, mul, F::mul);

impl<F: IsField> Div for FieldElement<F> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(F::div(&self.value, &rhs.value))
    }
}
impl<'a, 'b, F: IsField> Div<&'b FieldElement<F>> for &'a FieldElement<F> {
    type Output = FieldElement<F>;
    fn div(self, rhs: &'b FieldElement<F>) -> FieldElement<F> {
        FieldElement::new(F::div(&self.value, &rhs.value))
    }
}

impl<F: IsField> Neg for FieldElement<F> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(F::neg(&self.value))
    }
}
impl<'a, F: IsField> Neg for &'a FieldElement<F> {
    type Output = FieldElement<F>;
    fn neg(self) -> FieldElement<F> {
        FieldElement::new(F::neg(&self.value))
    }
}

impl<F: IsField> AddAssign for FieldElement<F> {
    fn add_assign(&mut self, rhs: Self) {
        self.value = F::add(&self.value, &rhs.value);
    }
}
impl<'a, F: IsField> AddAssign<&'a FieldElement<F>> for FieldElement<F> {
    fn add_assign(&mut self, rhs: &'a FieldElement<F>) {
        self.value = F::add(&self.value, &rhs.value);
    }
}
impl<F: IsField> SubAssign for FieldElement<F> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value = F::sub(&self.value, &rhs.value);
    }
}
impl<F: IsField> MulAssign for FieldElement<F> {
    fn mul_assign(&mut self, rhs: Self) {
        self.value = F::mul(&self.value, &rhs.value);
    }
}
impl<'a, F: IsField> MulAssign<&'a FieldElement<F>> for FieldElement<F> {
    fn mul_assign(&mut self, rhs: &'a FieldElement<F>) {
        self.value = F::mul(&self.value, &rhs.value);
    }
}

impl<F: IsField> Sum for FieldElement<F> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<F: IsField> ByteConversion for FieldElement<F>
where
    F::BaseType: ByteConversion,
{
    #[cfg(feature = "alloc")]
    fn to_bytes_be(&self) -> alloc::vec::Vec<u8> {
        self.value.to_bytes_be()
    }

    #[cfg(feature = "alloc")]
    fn to_bytes_le(&self) -> alloc::vec::Vec<u8> {
        self.value.to_bytes_le()
    }

    fn from_bytes_be(bytes: &[u8]) -> Result<Self, crate::errors::ByteConversionError> {
        Ok(Self::new(F::BaseType::from_bytes_be(bytes)?))
    }

    fn from_bytes_le(bytes: &[u8]) -> Result<Self, crate::errors::ByteConversionError> {
        Ok(Self::new(F::BaseType::from_bytes_le(bytes)?))
    }
}

/// Whether `x` is the lexicographically-largest of `{x, -x}`, reading an
/// extension field's coordinate list from the highest-degree coefficient
/// down to the constant term (spec.md 4.E serialization flag bit).
pub trait LexicographicallyLargest: IsField {
    fn is_largest(x: &Self::BaseType) -> bool;
}

impl<F: LexicographicallyLargest> FieldElement<F> {
    pub fn lexicographically_largest(&self) -> bool {
        F::is_largest(&self.value)
    }
}
