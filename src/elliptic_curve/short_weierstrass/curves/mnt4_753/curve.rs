use crate::elliptic_curve::short_weierstrass::curves::mnt4_753::field_extension::MNT4753PrimeField;
use crate::elliptic_curve::short_weierstrass::point::ShortWeierstrassProjectivePoint;
use crate::elliptic_curve::short_weierstrass::traits::IsShortWeierstrass;
use crate::elliptic_curve::traits::{FromAffine, IsEllipticCurve};
use crate::field::element::FieldElement;
use crate::unsigned_integer::element::U768;

/// `r`, the prime order of the subgroups `G1` and `G2` are meant to live
/// in. `examples/original_source/instantiations/mnt4_753/mnt4_753.py`
/// reads this (and `q`, `h1`, `h2`, the Miller-loop value, and both
/// generators) from a sibling `parameters.py` that this crate's retrieval
/// pack does not include -- per spec.md 1's framing, parameter tables are
/// an external collaborator, out of scope for the algebraic core this
/// crate implements. `MNT4753PrimeField::MODULUS` carries the same
/// disclaimer. This value is a placeholder large odd number, not an
/// externally verified subgroup order; see DESIGN.md's Open Questions.
pub const SUBGROUP_ORDER: U768 = U768::from_hex_unchecked(
    "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff00000000000000000000000000000000000000000000000000000000000000000000000001b",
);

/// The MNT4-753 Miller-loop parameter (`t - 1` for the curve's Frobenius
/// trace `t`). Real MNT curves loop over a value close to `r`'s own bit
/// length, not a single machine word; this crate's generic
/// `bits_be_skip_leading_one` helper only takes a `u64`, so (consistent
/// with the rest of this module's placeholder posture) a 64-bit stand-in
/// is used here rather than the authentic ~753-bit loop count.
pub const MILLER_LOOP_CONSTANT: u64 = 0xa401000000000001;

#[derive(Clone, Debug)]
pub struct MNT4753Curve;

impl IsEllipticCurve for MNT4753Curve {
    type BaseField = MNT4753PrimeField;
    type PointRepresentation = ShortWeierstrassProjectivePoint<Self>;

    /// `(1, 1)`, chosen so that [`IsShortWeierstrass::b`] can be solved
    /// for directly rather than recalled from a published generator --
    /// same posture as the curve coefficients themselves.
    fn generator() -> Self::PointRepresentation {
        Self::PointRepresentation::from_affine(
            FieldElement::<Self::BaseField>::one(),
            FieldElement::<Self::BaseField>::one(),
        )
        .unwrap()
    }
}

impl IsShortWeierstrass for MNT4753Curve {
    fn a() -> FieldElement<Self::BaseField> {
        FieldElement::from(2)
    }

    /// Solved from `1 = 1^3 + 2*1 + b`, i.e. `b = -2`, so that `(1, 1)`
    /// (this curve's [`generator`]) satisfies the defining equation.
    fn b() -> FieldElement<Self::BaseField> {
        -FieldElement::from(2)
    }
}

impl ShortWeierstrassProjectivePoint<MNT4753Curve> {
    /// Naive subgroup check: `r * self == infinity` (spec.md's non-goals
    /// exclude only the fancier cofactor-clearing-based checks).
    pub fn is_in_subgroup(&self) -> bool {
        self.operate_with_self_bigint(&SUBGROUP_ORDER)
            .is_neutral_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_satisfies_defining_equation() {
        let g = MNT4753Curve::generator().to_affine();
        assert_eq!(
            MNT4753Curve::defining_equation(g.x(), g.y()),
            FieldElement::zero()
        );
    }

    #[test]
    fn curve_is_non_singular() {
        let a = MNT4753Curve::a();
        let b = MNT4753Curve::b();
        let discriminant = FieldElement::from(4) * a.pow(3_u16)
            + FieldElement::from(27) * b.pow(2_u16);
        assert!(!discriminant.is_zero());
    }
}
