use crate::elliptic_curve::short_weierstrass::curves::bls12_381::field_extension::BLS12381PrimeField;
use crate::elliptic_curve::short_weierstrass::point::ShortWeierstrassProjectivePoint;
use crate::elliptic_curve::short_weierstrass::traits::IsShortWeierstrass;
use crate::elliptic_curve::traits::{FromAffine, IsEllipticCurve};
use crate::field::element::FieldElement;
use crate::unsigned_integer::element::U256;

/// The BLS parameter `x`; also the Miller loop's bit length for BLS12
/// curves (the optimal ate pairing on a BLS12 curve loops over `x`
/// itself, not `6x + 2`, thanks to its sextic twist -- spec.md 4.G).
pub const MILLER_LOOP_CONSTANT: u64 = 0xd201000000010000;

/// `r`, the prime order of the subgroups `G1` and `G2` live in.
pub const SUBGROUP_ORDER: U256 =
    U256::from_hex_unchecked("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001");

#[derive(Clone, Debug)]
pub struct BLS12381Curve;

impl IsEllipticCurve for BLS12381Curve {
    type BaseField = BLS12381PrimeField;
    type PointRepresentation = ShortWeierstrassProjectivePoint<Self>;

    fn generator() -> Self::PointRepresentation {
        Self::PointRepresentation::from_affine(
            FieldElement::<Self::BaseField>::from_hex_unchecked(
                "17F1D3A73197D7942695638C4FA9AC0FC3688C4F9774B905A14E3A3F171BAC586C55E83FF97A1AEFFB3AF00ADB22C6BB",
            ),
            FieldElement::<Self::BaseField>::from_hex_unchecked(
                "8B3F481E3AAA0F1A09E30ED741D8AE4FCF5E095D5D00AF600DB18CB2C04B3EDD03CC744A2888AE40CAA232946C5E7E1",
            ),
        )
        .unwrap()
    }
}

impl IsShortWeierstrass for BLS12381Curve {
    fn a() -> FieldElement<Self::BaseField> {
        FieldElement::from(0)
    }

    fn b() -> FieldElement<Self::BaseField> {
        FieldElement::from(4)
    }
}

impl ShortWeierstrassProjectivePoint<BLS12381Curve> {
    /// Naive subgroup check: `r * self == infinity` (spec.md's non-goals
    /// exclude only the fancier cofactor-clearing-based checks, not this
    /// direct one).
    pub fn is_in_subgroup(&self) -> bool {
        self.operate_with_self_bigint(&SUBGROUP_ORDER)
            .is_neutral_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cyclic_group::IsGroup;

    #[test]
    fn generator_is_in_the_prime_order_subgroup() {
        assert!(BLS12381Curve::generator().is_in_subgroup());
    }

    #[test]
    fn generator_times_subgroup_order_is_the_neutral_element() {
        assert!(BLS12381Curve::generator()
            .operate_with_self_bigint(&SUBGROUP_ORDER)
            .is_neutral_element());
    }
}

#[cfg(test)]
mod group_law_properties {
    use super::*;
    use crate::cyclic_group::IsGroup;
    use proptest::prelude::*;

    fn p() -> ShortWeierstrassProjectivePoint<BLS12381Curve> {
        BLS12381Curve::generator()
    }

    proptest! {
        // spec.md 8.4: point addition is associative and commutative, and
        // the neutral element behaves as an identity.
        #[test]
        fn addition_is_commutative(a in 0u128..500, b in 0u128..500) {
            let g = p();
            let pa = g.operate_with_self(a);
            let pb = g.operate_with_self(b);
            prop_assert_eq!(pa.operate_with(&pb), pb.operate_with(&pa));
        }

        #[test]
        fn addition_is_associative(a in 0u128..500, b in 0u128..500, c in 0u128..500) {
            let g = p();
            let pa = g.operate_with_self(a);
            let pb = g.operate_with_self(b);
            let pc = g.operate_with_self(c);
            prop_assert_eq!(
                pa.operate_with(&pb).operate_with(&pc),
                pa.operate_with(&pb.operate_with(&pc))
            );
        }

        #[test]
        fn neutral_element_is_an_identity(a in 0u128..500) {
            let pa = p().operate_with_self(a);
            let neutral = ShortWeierstrassProjectivePoint::<BLS12381Curve>::neutral_element();
            prop_assert_eq!(pa.operate_with(&neutral), pa);
        }

        // spec.md 8.5: scalar multiplication distributes over scalar addition.
        #[test]
        fn scalar_multiplication_distributes_over_scalar_addition(a in 0u128..500, b in 0u128..500) {
            let g = p();
            let lhs = g.operate_with_self(a + b);
            let rhs = g
                .operate_with_self(a)
                .operate_with(&g.operate_with_self(b));
            prop_assert_eq!(lhs, rhs);
        }
    }
}
