use crate::errors::ByteConversionError;
use crate::traits::ByteConversion;
use core::fmt;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// A fixed-width unsigned integer made up of `NUM_LIMBS` big-endian 64-bit
/// limbs (`limbs[0]` is the most significant limb).
///
/// This is the big-integer type backing field moduli, field element
/// representatives and group-operation scalars. Arithmetic is implemented
/// with simple schoolbook algorithms rather than a Montgomery form: every
/// modular operation takes its modulus as an explicit parameter so the same
/// type works for every prime field in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnsignedInteger<const NUM_LIMBS: usize> {
    pub limbs: [u64; NUM_LIMBS],
}

pub type U256 = UnsignedInteger<4>;
pub type U384 = UnsignedInteger<6>;
pub type U768 = UnsignedInteger<12>;

impl<const NUM_LIMBS: usize> UnsignedInteger<NUM_LIMBS> {
    pub const fn from_limbs(limbs: [u64; NUM_LIMBS]) -> Self {
        Self { limbs }
    }

    pub const fn from_u64(value: u64) -> Self {
        let mut limbs = [0u64; NUM_LIMBS];
        limbs[NUM_LIMBS - 1] = value;
        Self { limbs }
    }

    pub const fn zero() -> Self {
        Self {
            limbs: [0u64; NUM_LIMBS],
        }
    }

    pub const fn one() -> Self {
        Self::from_u64(1)
    }

    pub const fn is_zero(&self) -> bool {
        let mut i = 0;
        while i < NUM_LIMBS {
            if self.limbs[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Parses a hexadecimal string (no `0x` prefix, upper or lower case)
    /// into an `UnsignedInteger`. Panics on malformed input or on overflow.
    /// This is meant for use with trusted, hardcoded constants.
    pub const fn from_hex_unchecked(hex: &str) -> Self {
        let bytes = hex.as_bytes();
        let mut limbs = [0u64; NUM_LIMBS];
        let total_hex_digits = bytes.len();
        let mut i = 0;
        while i < total_hex_digits {
            let c = bytes[total_hex_digits - 1 - i];
            let digit = match c {
                b'0'..=b'9' => (c - b'0') as u64,
                b'a'..=b'f' => (c - b'a' + 10) as u64,
                b'A'..=b'F' => (c - b'A' + 10) as u64,
                _ => panic!("invalid hex digit"),
            };
            let limb_index = NUM_LIMBS - 1 - (i / 16);
            let shift = (i % 16) * 4;
            limbs[limb_index] |= digit << shift;
            i += 1;
        }
        Self { limbs }
    }

    pub const fn const_ne(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < NUM_LIMBS {
            if self.limbs[i] != other.limbs[i] {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Returns the index (counting from zero, least significant first) of the
    /// most significant set bit, or `None` if `self` is zero.
    pub const fn bit_length(&self) -> usize {
        let mut i = 0;
        while i < NUM_LIMBS {
            let limb = self.limbs[i];
            if limb != 0 {
                let leading = limb.leading_zeros() as usize;
                return (NUM_LIMBS - i) * 64 - leading;
            }
            i += 1;
        }
        0
    }

    /// Returns the bit at position `pos` (0 = least significant bit).
    pub const fn bit(&self, pos: usize) -> bool {
        if pos >= NUM_LIMBS * 64 {
            return false;
        }
        let limb_index = NUM_LIMBS - 1 - pos / 64;
        let shift = pos % 64;
        (self.limbs[limb_index] >> shift) & 1 == 1
    }

    /// Adds `self` and `other`, returning the sum and a carry-out bit.
    pub fn add_with_carry(&self, other: &Self) -> (Self, bool) {
        let mut limbs = [0u64; NUM_LIMBS];
        let mut carry = 0u64;
        for i in (0..NUM_LIMBS).rev() {
            let (sum1, carry1) = self.limbs[i].overflowing_add(other.limbs[i]);
            let (sum2, carry2) = sum1.overflowing_add(carry);
            limbs[i] = sum2;
            carry = (carry1 as u64) + (carry2 as u64);
        }
        (Self { limbs }, carry != 0)
    }

    /// Subtracts `other` from `self`, returning the difference and a
    /// borrow-out bit (set when `self < other`).
    pub fn sub_with_borrow(&self, other: &Self) -> (Self, bool) {
        let mut limbs = [0u64; NUM_LIMBS];
        let mut borrow = 0i64;
        for i in (0..NUM_LIMBS).rev() {
            let a = self.limbs[i] as i128;
            let b = other.limbs[i] as i128;
            let mut diff = a - b - borrow as i128;
            if diff < 0 {
                diff += 1i128 << 64;
                borrow = 1;
            } else {
                borrow = 0;
            }
            limbs[i] = diff as u64;
        }
        (Self { limbs }, borrow != 0)
    }

    /// Shifts `self` left by one bit, returning the result and the bit
    /// shifted out of the top.
    pub fn shift_left_one(&self) -> (Self, bool) {
        let mut limbs = [0u64; NUM_LIMBS];
        let mut carry = 0u64;
        for i in (0..NUM_LIMBS).rev() {
            let new_carry = self.limbs[i] >> 63;
            limbs[i] = (self.limbs[i] << 1) | carry;
            carry = new_carry;
        }
        (Self { limbs }, carry != 0)
    }

    /// Shifts `self` right by one bit.
    pub fn shift_right_one(&self) -> Self {
        let mut limbs = [0u64; NUM_LIMBS];
        let mut carry = 0u64;
        for i in 0..NUM_LIMBS {
            let new_carry = self.limbs[i] & 1;
            limbs[i] = (self.limbs[i] >> 1) | (carry << 63);
            carry = new_carry;
        }
        Self { limbs }
    }

    /// Modular addition: `(self + other) mod modulus`. Assumes `self` and
    /// `other` are already reduced modulo `modulus`.
    pub fn add_mod(&self, other: &Self, modulus: &Self) -> Self {
        let (sum, carry) = self.add_with_carry(other);
        if carry {
            sum.sub_with_borrow(modulus).0
        } else if &sum >= modulus {
            sum.sub_with_borrow(modulus).0
        } else {
            sum
        }
    }

    /// Modular subtraction: `(self - other) mod modulus`.
    pub fn sub_mod(&self, other: &Self, modulus: &Self) -> Self {
        let (diff, borrow) = self.sub_with_borrow(other);
        if borrow {
            diff.add_with_carry(modulus).0
        } else {
            diff
        }
    }

    /// Modular multiplication via double-and-add, so it only relies on
    /// addition and comparison and works uniformly for any `NUM_LIMBS`.
    pub fn mul_mod(&self, other: &Self, modulus: &Self) -> Self {
        let mut result = Self::zero();
        let mut base = if self >= modulus {
            self.sub_with_borrow(modulus).0
        } else {
            *self
        };
        let bits = other.bit_length();
        for i in 0..bits {
            if other.bit(i) {
                result = result.add_mod(&base, modulus);
            }
            base = base.add_mod(&base, modulus);
        }
        result
    }

    /// Modular exponentiation via square-and-multiply.
    pub fn pow_mod(&self, exponent: &Self, modulus: &Self) -> Self {
        let mut result = Self::one();
        if modulus == &Self::one() {
            return Self::zero();
        }
        let mut base = if self >= modulus {
            self.sub_with_borrow(modulus).0
        } else {
            *self
        };
        let bits = exponent.bit_length();
        for i in 0..bits {
            if exponent.bit(i) {
                result = result.mul_mod(&base, modulus);
            }
            base = base.mul_mod(&base, modulus);
        }
        result
    }

    /// Multiplicative inverse modulo `modulus`, via Fermat's little theorem
    /// (`modulus` is assumed prime). Returns `None` if `self` is zero.
    pub fn inv_mod(&self, modulus: &Self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let two = Self::from_u64(2);
        let exponent = modulus.sub_with_borrow(&two).0;
        Some(self.pow_mod(&exponent, modulus))
    }

    #[cfg(feature = "alloc")]
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(NUM_LIMBS * 8);
        for limb in self.limbs.iter() {
            bytes.extend_from_slice(&limb.to_be_bytes());
        }
        bytes
    }

    #[cfg(feature = "alloc")]
    pub fn to_bytes_le(&self) -> Vec<u8> {
        let mut bytes = self.to_bytes_be();
        bytes.reverse();
        bytes
    }

    pub fn from_bytes_be(bytes: &[u8]) -> Result<Self, ByteConversionError> {
        if bytes.len() > NUM_LIMBS * 8 {
            return Err(ByteConversionError::FromBEBytesError);
        }
        let mut padded = [0u8; 64 * 8];
        let padded = &mut padded[..NUM_LIMBS * 8];
        let offset = NUM_LIMBS * 8 - bytes.len();
        padded[offset..].copy_from_slice(bytes);
        let mut limbs = [0u64; NUM_LIMBS];
        for i in 0..NUM_LIMBS {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(&padded[i * 8..i * 8 + 8]);
            limbs[i] = u64::from_be_bytes(buf);
        }
        Ok(Self { limbs })
    }

    pub fn from_bytes_le(bytes: &[u8]) -> Result<Self, ByteConversionError> {
        if bytes.len() > NUM_LIMBS * 8 {
            return Err(ByteConversionError::FromLEBytesError);
        }
        let mut reversed: [u8; 1024] = [0u8; 1024];
        let reversed = &mut reversed[..bytes.len()];
        reversed.copy_from_slice(bytes);
        reversed.reverse();
        Self::from_bytes_be(reversed)
    }
}

impl<const NUM_LIMBS: usize> From<u64> for UnsignedInteger<NUM_LIMBS> {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<const NUM_LIMBS: usize> UnsignedInteger<NUM_LIMBS> {
    /// Multiplies `self` by a small (`u64`-sized) constant, wrapping on
    /// overflow. Used only to parse decimal literals.
    fn mul_small(&self, x: u64) -> Self {
        let mut limbs = [0u64; NUM_LIMBS];
        let mut carry = 0u128;
        for i in (0..NUM_LIMBS).rev() {
            let prod = self.limbs[i] as u128 * x as u128 + carry;
            limbs[i] = prod as u64;
            carry = prod >> 64;
        }
        Self { limbs }
    }
}

impl<const NUM_LIMBS: usize> From<&str> for UnsignedInteger<NUM_LIMBS> {
    /// Parses a base-10 string into an `UnsignedInteger`. Panics on
    /// malformed input.
    fn from(decimal: &str) -> Self {
        let mut result = Self::zero();
        for c in decimal.chars() {
            let digit = c.to_digit(10).expect("invalid decimal digit");
            result = result.mul_small(10);
            let (sum, _) = result.add_with_carry(&Self::from_u64(digit as u64));
            result = sum;
        }
        result
    }
}

impl<const NUM_LIMBS: usize> fmt::Display for UnsignedInteger<NUM_LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for limb in self.limbs.iter() {
            write!(f, "{:016x}", limb)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type U = UnsignedInteger<4>;

    #[test]
    fn from_u64_roundtrips_through_display() {
        let x = U::from_u64(0xdead_beef);
        assert_eq!(
            format!("{x}"),
            "0x00000000000000000000000000000000000000000000000000000000deadbeef"
        );
    }

    #[test]
    fn hex_and_decimal_parsing_agree() {
        let from_hex = U::from_hex_unchecked("2a");
        let from_dec = U::from("42");
        assert_eq!(from_hex, from_dec);
    }

    #[test]
    fn add_with_carry_detects_overflow() {
        let max = U::from_limbs([u64::MAX; 4]);
        let (sum, carry) = max.add_with_carry(&U::one());
        assert!(carry);
        assert_eq!(sum, U::zero());
    }

    #[test]
    fn sub_with_borrow_detects_underflow() {
        let (diff, borrow) = U::zero().sub_with_borrow(&U::one());
        assert!(borrow);
        assert_eq!(diff, U::from_limbs([u64::MAX; 4]));
    }

    #[test]
    fn bit_length_matches_most_significant_set_bit() {
        assert_eq!(U::zero().bit_length(), 0);
        assert_eq!(U::one().bit_length(), 1);
        assert_eq!(U::from_u64(0b1000).bit_length(), 4);
    }

    #[test]
    fn shift_left_then_right_is_identity_without_overflow() {
        let x = U::from_u64(0x1234);
        let (shifted, carry) = x.shift_left_one();
        assert!(!carry);
        assert_eq!(shifted.shift_right_one(), x);
    }

    #[test]
    fn add_mod_reduces_into_range() {
        let modulus = U::from_u64(7);
        let a = U::from_u64(5);
        let b = U::from_u64(4);
        assert_eq!(a.add_mod(&b, &modulus), U::from_u64(2));
    }

    #[test]
    fn sub_mod_wraps_around_modulus() {
        let modulus = U::from_u64(7);
        let a = U::from_u64(2);
        let b = U::from_u64(5);
        assert_eq!(a.sub_mod(&b, &modulus), U::from_u64(4));
    }

    #[test]
    fn mul_mod_matches_schoolbook_multiplication() {
        let modulus = U::from_u64(97);
        let a = U::from_u64(11);
        let b = U::from_u64(13);
        assert_eq!(a.mul_mod(&b, &modulus), U::from_u64((11 * 13) % 97));
    }

    #[test]
    fn pow_mod_matches_repeated_multiplication() {
        let modulus = U::from_u64(101);
        let base = U::from_u64(3);
        let exponent = U::from_u64(10);
        assert_eq!(base.pow_mod(&exponent, &modulus), U::from_u64(3u64.pow(10) % 101));
    }

    #[test]
    fn inv_mod_of_zero_is_none() {
        let modulus = U::from_u64(13);
        assert!(U::zero().inv_mod(&modulus).is_none());
    }

    #[test]
    fn inv_mod_produces_multiplicative_inverse() {
        let modulus = U::from_u64(13);
        let a = U::from_u64(5);
        let inv = a.inv_mod(&modulus).unwrap();
        assert_eq!(a.mul_mod(&inv, &modulus), U::one());
    }

    #[test]
    fn byte_roundtrip_be_and_le() {
        let x = U::from_hex_unchecked("0102030405060708090a0b0c0d0e0f10");
        let be = x.to_bytes_be();
        assert_eq!(U::from_bytes_be(&be).unwrap(), x);
        let le = x.to_bytes_le();
        assert_eq!(U::from_bytes_le(&le).unwrap(), x);
    }
}
