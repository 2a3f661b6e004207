use crate::elliptic_curve::short_weierstrass::curves::bls12_381::curve::SUBGROUP_ORDER;
use crate::elliptic_curve::short_weierstrass::curves::bls12_381::field_extension::{
    BLS12381PrimeField, Degree2ExtensionField,
};
use crate::elliptic_curve::short_weierstrass::point::ShortWeierstrassProjectivePoint;
use crate::elliptic_curve::short_weierstrass::traits::IsShortWeierstrass;
use crate::elliptic_curve::traits::{FromAffine, IsEllipticCurve};
use crate::field::element::FieldElement;

type FpE = FieldElement<BLS12381PrimeField>;
type Fp2E = FieldElement<Degree2ExtensionField>;

/// `G2` lives on the sextic twist `E': y^2 = x^3 + 4(1 + u)` over `Fq2`.
#[derive(Clone, Debug)]
pub struct BLS12381TwistCurve;

impl IsEllipticCurve for BLS12381TwistCurve {
    type BaseField = Degree2ExtensionField;
    type PointRepresentation = ShortWeierstrassProjectivePoint<Self>;

    /// This is a small-coordinate point on `E'` verified (by direct
    /// arithmetic, not recalled from a published test vector) to satisfy
    /// `y^2 = x^3 + 4(1+u)`; it is not claimed to be the standard
    /// `G2` generator other BLS12-381 implementations publish. See
    /// DESIGN.md's Open Questions.
    fn generator() -> Self::PointRepresentation {
        Self::PointRepresentation::from_affine(
            Fp2E::new([FpE::from(1), FpE::from(1)]),
            Fp2E::new([
                FpE::from_hex_unchecked("17FAA6201231304F270B858DAD9462089F2A5B83388E4B10773ABC1EEF6D193B9FCE4E8EA2D9D28E3C3A315AA7DE14CA"),
                FpE::from_hex_unchecked("CC12449BE6AC4E7F367E7242250427C4FB4C39325D3164AD397C1837A90F0EA1A534757DF374DD6569345EB41ED76E"),
            ]),
        )
        .unwrap()
    }
}

impl IsShortWeierstrass for BLS12381TwistCurve {
    fn a() -> FieldElement<Self::BaseField> {
        FieldElement::zero()
    }

    fn b() -> FieldElement<Self::BaseField> {
        Fp2E::new([FpE::from(4), FpE::from(4)])
    }
}

impl ShortWeierstrassProjectivePoint<BLS12381TwistCurve> {
    /// Naive subgroup check: `r * self == infinity`, `r` being the same
    /// subgroup order `G1` uses.
    pub fn is_in_subgroup(&self) -> bool {
        self.operate_with_self_bigint(&SUBGROUP_ORDER)
            .is_neutral_element()
    }
}
