use super::curve::{MNT4753Curve, MILLER_LOOP_CONSTANT};
use super::field_extension::Degree4ExtensionField;
use super::twist::MNT4753TwistCurve;
use crate::elliptic_curve::short_weierstrass::point::{AffinePoint, ShortWeierstrassProjectivePoint};
use crate::elliptic_curve::traits::IsPairing;
use crate::errors::PairingError;
use crate::field::element::FieldElement;
use crate::pairing::bits_be_skip_leading_one;

type Fp4E = FieldElement<Degree4ExtensionField>;

#[derive(Clone)]
pub struct MNT4753AtePairing;

impl IsPairing for MNT4753AtePairing {
    type G1Point = ShortWeierstrassProjectivePoint<MNT4753Curve>;
    type G2Point = ShortWeierstrassProjectivePoint<MNT4753TwistCurve>;
    type OutputField = Degree4ExtensionField;

    /// Computes the product of the ate pairings for a list of point
    /// pairs, with a single final exponentiation at the end (spec.md
    /// 4.G), mirroring
    /// [`super::super::bls12_381::pairing::BLS12381AtePairing::compute_batch`].
    fn compute_batch(
        pairs: &[(&Self::G1Point, &Self::G2Point)],
    ) -> Result<FieldElement<Self::OutputField>, PairingError> {
        log::debug!("computing a batch of {} MNT4-753 ate pairings", pairs.len());
        let mut result = Fp4E::one();
        for (p, q) in pairs {
            if !p.is_in_subgroup() || !q.is_in_subgroup() {
                return Err(PairingError::PointNotInSubgroup);
            }
            if !p.is_neutral_element() && !q.is_neutral_element() {
                let p = p.to_affine();
                let q = q.to_affine();
                result = result * miller(&q, &p);
            }
        }
        Ok(final_exponentiation(&result))
    }
}

/// The MNT4-753 ate Miller loop, walked on the twisted curve: `Q` stays
/// on `E'`, `P`'s coordinates are embedded directly into `Fq4` by the
/// generic `line_evaluation` (spec.md 4.G's "loop on twisted curve").
fn miller(q: &AffinePoint<MNT4753TwistCurve>, p: &AffinePoint<MNT4753Curve>) -> Fp4E {
    let loop_bits = bits_be_skip_leading_one(MILLER_LOOP_CONSTANT);
    crate::pairing::miller_loop_on_twisted_curve::<MNT4753TwistCurve, MNT4753Curve, Degree4ExtensionField>(
        &loop_bits, q, p,
    )
}

/// The easy part of the final exponentiation (spec.md 4.H): `f -> f^{q^2
/// - 1} = f.frob(2) * f^{-1}`.
fn final_exponentiation_easy_part(f: &Fp4E) -> Fp4E {
    f.frob(2) * f.inv().unwrap()
}

/// The hard part (spec.md 4.H): `f -> f^{q + u + 1} = f.frob(1) * f^u *
/// f`, `u` being the curve's Miller-loop parameter -- literal translation
/// of `original_source/instantiations/mnt4_753/final_exponentiation.py`.
fn final_exponentiation_hard_part(f: &Fp4E) -> Fp4E {
    f.frob(1) * f.pow(MILLER_LOOP_CONSTANT) * f
}

/// The full final exponentiation `f^((q^4 - 1) / r)` (spec.md 4.H).
pub fn final_exponentiation(base: &Fp4E) -> Fp4E {
    log::trace!("running MNT4-753 final exponentiation");
    let easy = final_exponentiation_easy_part(base);
    final_exponentiation_hard_part(&easy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cyclic_group::IsGroup;
    use crate::elliptic_curve::traits::IsEllipticCurve;

    #[test]
    fn ate_pairing_returns_one_when_one_element_is_the_neutral_element() {
        let p = MNT4753Curve::generator().to_affine();
        let q = ShortWeierstrassProjectivePoint::neutral_element();
        let result = MNT4753AtePairing::compute_batch(&[(&p.to_affine(), &q)]).unwrap();
        assert_eq!(result, FieldElement::one());
    }

    #[test]
    fn easy_part_then_hard_part_is_deterministic_on_the_generator_pairing() {
        let p = MNT4753Curve::generator().to_affine();
        let q = MNT4753TwistCurve::generator().to_affine();
        let f = miller(&q, &p);
        let easy = final_exponentiation_easy_part(&f);
        let out_1 = final_exponentiation_hard_part(&easy);
        let out_2 = final_exponentiation(&f);
        assert_eq!(out_1, out_2);
    }
}
