use crate::errors::ByteConversionError;
use crate::field::element::LexicographicallyLargest;
use crate::field::traits::{IsField, IsPrimeField};
use crate::traits::ByteConversion;
use crate::unsigned_integer::element::U384;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// `MODULUS = 0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab`,
/// the 381-bit base field modulus of BLS12-381.
pub const MODULUS: U384 = U384::from_hex_unchecked(
    "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab",
);

#[derive(Debug, Clone)]
pub struct BLS12381PrimeField;

impl IsField for BLS12381PrimeField {
    type BaseType = U384;

    fn add(a: &U384, b: &U384) -> U384 {
        a.add_mod(b, &MODULUS)
    }

    fn mul(a: &U384, b: &U384) -> U384 {
        a.mul_mod(b, &MODULUS)
    }

    fn sub(a: &U384, b: &U384) -> U384 {
        a.sub_mod(b, &MODULUS)
    }

    fn neg(a: &U384) -> U384 {
        if a.is_zero() {
            U384::zero()
        } else {
            MODULUS.sub_mod(a, &MODULUS)
        }
    }

    /// Fermat's little theorem: `a^(q-2) mod q`. Panics (via the caller's
    /// contract, spec.md 4.A) if `a` is zero.
    fn inv(a: &U384) -> U384 {
        let exponent = MODULUS.sub_with_borrow(&U384::from_u64(2)).0;
        a.pow_mod(&exponent, &MODULUS)
    }

    fn eq(a: &U384, b: &U384) -> bool {
        a == b
    }

    fn zero() -> U384 {
        U384::zero()
    }

    fn one() -> U384 {
        U384::one()
    }

    fn from_u64(x: u64) -> U384 {
        U384::from_u64(x)
    }

    /// Reduces an arbitrary `U384` into `[0, MODULUS)` by repeated
    /// subtraction. A single subtraction only suffices for values already
    /// known to be less than `2 * MODULUS`; this constructor makes no such
    /// assumption about its input (spec.md 4.A).
    fn from_base_type(mut x: U384) -> U384 {
        while &x >= &MODULUS {
            x = x.sub_with_borrow(&MODULUS).0;
        }
        x
    }
}

impl crate::field::element::FieldElement<BLS12381PrimeField> {
    /// Builds an element directly from a big-endian hex literal, skipping
    /// modular reduction -- the caller is responsible for passing an
    /// already-reduced representative (curve parameter tables, mostly).
    pub fn from_hex_unchecked(hex: &str) -> Self {
        Self::from_raw(U384::from_hex_unchecked(hex))
    }

    /// The two square roots of `self`, if any, via the `q = 3 (mod 4)`
    /// fast path `a^((q+1)/4)` (spec.md's compressed-point decompression
    /// needs this to recover `y` from `x`). Returns `None` when `self` is
    /// not a quadratic residue.
    pub fn sqrt(&self) -> Option<(Self, Self)> {
        let exponent = MODULUS
            .add_with_carry(&U384::one())
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

impl IsPrimeField for BLS12381PrimeField {
    type RepresentativeType = U384;

    fn representative(a: &U384) -> U384 {
        *a
    }

    /// `ceil((bitlen(q) + 8) / 8) = 48` bytes (spec.md 4.A: the arkworks
    /// convention reserves one extra byte beyond the tight bound).
    fn field_bit_size() -> usize {
        48
    }
}

/// `x` counts as lexicographically largest when `x > (q - 1) / 2`, the
/// arkworks convention for the serialization flag bit (spec.md 4.E).
impl LexicographicallyLargest for BLS12381PrimeField {
    fn is_largest(x: &U384) -> bool {
        let half = MODULUS.sub_with_borrow(&U384::one()).0.shift_right_one();
        x > &half
    }
}

impl ByteConversion for U384 {
    #[cfg(feature = "alloc")]
    fn to_bytes_be(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(48);
        for limb in self.limbs.iter() {
            bytes.extend_from_slice(&limb.to_be_bytes());
        }
        bytes
    }

    #[cfg(feature = "alloc")]
    fn to_bytes_le(&self) -> Vec<u8> {
        let mut bytes = <U384 as ByteConversion>::to_bytes_be(self);
        bytes.reverse();
        bytes
    }

    fn from_bytes_be(bytes: &[u8]) -> Result<Self, ByteConversionError> {
        U384::from_bytes_be(bytes).map_err(|_| ByteConversionError::FromBEBytesError)
    }

    fn from_bytes_le(bytes: &[u8]) -> Result<Self, ByteConversionError> {
        U384::from_bytes_le(bytes).map_err(|_| ByteConversionError::FromLEBytesError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::element::FieldElement;

    type FE = FieldElement<BLS12381PrimeField>;

    #[test]
    fn one_plus_one_is_two() {
        assert_eq!(FE::one() + FE::one(), FE::from(2));
    }

    #[test]
    fn neg_one_plus_one_is_zero() {
        assert_eq!(-FE::one() + FE::one(), FE::zero());
    }

    #[test]
    fn inverse_of_two_times_two_is_one() {
        let two = FE::from(2);
        assert_eq!(two.inv().unwrap() * two, FE::one());
    }

    #[test]
    fn modulus_reduces_back_to_zero() {
        assert_eq!(FE::new(MODULUS), FE::zero());
    }
}

#[cfg(test)]
mod field_axiom_properties {
    use super::*;
    use crate::field::element::FieldElement;
    use proptest::prelude::*;

    type FE = FieldElement<BLS12381PrimeField>;

    fn elem(x: u64) -> FE {
        FE::from(x)
    }

    proptest! {
        // spec.md 8.1: associativity, commutativity, distributivity.
        #[test]
        fn addition_is_commutative(a in any::<u64>(), b in any::<u64>()) {
            prop_assert_eq!(elem(a) + elem(b), elem(b) + elem(a));
        }

        #[test]
        fn addition_is_associative(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
            prop_assert_eq!((elem(a) + elem(b)) + elem(c), elem(a) + (elem(b) + elem(c)));
        }

        #[test]
        fn multiplication_is_commutative(a in any::<u64>(), b in any::<u64>()) {
            prop_assert_eq!(elem(a) * elem(b), elem(b) * elem(a));
        }

        #[test]
        fn multiplication_distributes_over_addition(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
            prop_assert_eq!(elem(a) * (elem(b) + elem(c)), elem(a) * elem(b) + elem(a) * elem(c));
        }

        // spec.md 8.1: x * x^-1 == 1 for x != 0.
        #[test]
        fn nonzero_element_times_its_inverse_is_one(a in 1..=u64::MAX) {
            let x = elem(a);
            prop_assert_eq!(x.inv().unwrap() * x, FE::one());
        }

        // spec.md 8.2: (x^a)^b == x^(ab); x^(a+b) == x^a * x^b.
        #[test]
        fn pow_respects_exponent_addition(a in any::<u64>(), e1 in 0u32..64, e2 in 0u32..64) {
            let x = elem(a);
            let lhs = x.pow(e1 as u128 + e2 as u128);
            let rhs = x.pow(e1 as u128) * x.pow(e2 as u128);
            prop_assert_eq!(lhs, rhs);
        }
    }
}
