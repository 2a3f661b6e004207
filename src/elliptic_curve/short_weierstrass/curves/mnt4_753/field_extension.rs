use crate::field::element::FieldElement;
use crate::field::extensions::quadratic::{HasQuadraticNonResidue, QuadraticExtensionField};
use crate::field::traits::{HasFrobenius, IsSubfieldOf};

pub use crate::field::fields::mnt4_753_prime_field::MNT4753PrimeField;

impl HasFrobenius for MNT4753PrimeField {
    /// `Fq`'s Frobenius is the identity.
    fn frobenius(
        a: &<Self as crate::field::traits::IsField>::BaseType,
        _n: usize,
    ) -> <Self as crate::field::traits::IsField>::BaseType {
        *a
    }

    fn extension_degree_over_fq() -> usize {
        1
    }
}

type FpE = FieldElement<MNT4753PrimeField>;
type Fp2E = FieldElement<Degree2ExtensionField>;

/// `Fq2 = Fq[u]/(u^2 - 13)`. `original_source/elliptic_curves/instantiations/
/// mnt4_753/mnt4_753.py`'s docstring names `13` directly as the constant
/// making the twist's quartic relation `omega^4 = 13` hold, so this is one
/// of the few MNT4-753 constants this crate didn't have to invent -- see
/// DESIGN.md's Open Questions for the ones that are still placeholders.
#[derive(Debug, Clone)]
pub struct Degree2NonResidue;
impl HasQuadraticNonResidue<MNT4753PrimeField> for Degree2NonResidue {
    fn residue() -> FpE {
        FpE::from(13)
    }
}
pub type Degree2ExtensionField = QuadraticExtensionField<MNT4753PrimeField, Degree2NonResidue>;

/// `Fq4 = Fq2[r]/(r^2 - u)`, `u` being `Fq2`'s own generator `(0, 1)` --
/// the same source names this relation directly (`F_q^4 = F_q[u,r] /
/// (r^2 - u, u^2 - 13)`), unlike BLS12-381's `Fq6`/`Fq12` this tower is
/// two quadratic extensions stacked, not a cubic then a quadratic one.
#[derive(Debug, Clone)]
pub struct Degree4NonResidue;
impl HasQuadraticNonResidue<Degree2ExtensionField> for Degree4NonResidue {
    fn residue() -> Fp2E {
        Fp2E::new([FpE::zero(), FpE::one()])
    }
}
pub type Degree4ExtensionField = QuadraticExtensionField<Degree2ExtensionField, Degree4NonResidue>;

impl IsSubfieldOf<Degree2ExtensionField> for MNT4753PrimeField {
    fn embed(a: &FpE) -> Fp2E {
        Fp2E::new([a.clone(), FpE::zero()])
    }
}

impl IsSubfieldOf<Degree4ExtensionField> for Degree2ExtensionField {
    fn embed(a: &Fp2E) -> FieldElement<Degree4ExtensionField> {
        FieldElement::new([a.clone(), Fp2E::zero()])
    }
}

impl IsSubfieldOf<Degree4ExtensionField> for MNT4753PrimeField {
    fn embed(a: &FpE) -> FieldElement<Degree4ExtensionField> {
        let fp2 = <MNT4753PrimeField as IsSubfieldOf<Degree2ExtensionField>>::embed(a);
        <Degree2ExtensionField as IsSubfieldOf<Degree4ExtensionField>>::embed(&fp2)
    }
}

/// `Fq2`'s Frobenius at odd `n` is conjugation (`q = 3 mod 4` here too,
/// same argument as BLS12-381's `Degree2ExtensionField`).
impl HasFrobenius for Degree2ExtensionField {
    fn frobenius(a: &[FpE; 2], n: usize) -> [FpE; 2] {
        if n % 2 == 0 {
            a.clone()
        } else {
            [a[0].clone(), -a[1].clone()]
        }
    }

    fn extension_degree_over_fq() -> usize {
        2
    }
}

/// `gamma_1 = u^{(q - 1)/2}`, the twist factor making `Fq2`-coordinatewise
/// conjugation into genuine `Fq4` Frobenius at `n = 1`.
fn gamma_1() -> Fp2E {
    let u = Fp2E::new([FpE::zero(), FpE::one()]);
    let exponent = modulus_minus_one_over_two();
    u.pow(exponent)
}

use crate::unsigned_integer::element::U768;

/// `(q - 1) / 2`.
fn modulus_minus_one_over_two() -> U768 {
    crate::field::fields::mnt4_753_prime_field::MODULUS
        .sub_with_borrow(&U768::one())
        .0
        .shift_right_one()
}

/// One step of `Fq4`'s Frobenius: conjugate the `Fq2` coordinate, then
/// twist the odd-degree part by `gamma_1`.
fn frob1_fp4(a: &[Fp2E; 2]) -> [Fp2E; 2] {
    let [a0, a1] = a;
    [a0.conjugate(), a1.conjugate() * gamma_1()]
}

impl HasFrobenius for Degree4ExtensionField {
    fn frobenius(a: &[Fp2E; 2], n: usize) -> [Fp2E; 2] {
        let mut result = a.clone();
        for _ in 0..(n % 4) {
            result = frob1_fp4(&result);
        }
        result
    }

    fn extension_degree_over_fq() -> usize {
        4
    }
}

/// `Fq2` square root via the standard "complex method" for `q = 3 mod 4`:
/// reduce to a norm-field (`Fq`) square root plus a sign search, rather
/// than the direct `a^((q+1)/4)` trick (that one only works when the
/// *extension's own* order is `3 mod 4`, which `Fq2`'s isn't). Used to
/// search for `G2`'s generator on the twist curve below.
pub fn sqrt_fp2(a: &Fp2E) -> Option<Fp2E> {
    let [a0, a1] = a.value();
    let beta = <Degree2NonResidue as HasQuadraticNonResidue<MNT4753PrimeField>>::residue();
    if a1 == &FpE::zero() {
        if let Some((s, _)) = a0.sqrt() {
            return Some(Fp2E::new([s, FpE::zero()]));
        }
        let (s, _) = (a0 / &beta).sqrt()?;
        return Some(Fp2E::new([FpE::zero(), s]));
    }
    let norm = a0.square() - &beta * a1.square();
    let (alpha, _) = norm.sqrt()?;
    let two = FpE::from(2);
    let two_inv = two.inv().ok()?;
    let mut x0 = (a0.clone() + &alpha) * &two_inv;
    if x0.sqrt().is_none() {
        x0 = (a0.clone() - &alpha) * &two_inv;
    }
    let (x0_sqrt, _) = x0.sqrt()?;
    let denom = (&x0_sqrt * &two).inv().ok()?;
    let a1_coeff = a1 * &denom;
    Some(Fp2E::new([x0_sqrt, a1_coeff]))
}

#[cfg(test)]
mod frobenius_tests {
    use super::*;

    #[test]
    fn frobenius_four_times_is_identity() {
        let f = FieldElement::<Degree4ExtensionField>::new([
            Fp2E::new([FpE::from(1), FpE::from(2)]),
            Fp2E::new([FpE::from(3), FpE::from(4)]),
        ]);
        assert_eq!(f.frob(4), f);
    }

    #[test]
    fn sqrt_fp2_roundtrips_on_a_square() {
        let a = Fp2E::new([FpE::from(5), FpE::from(7)]);
        let sq = a.square();
        let root = sqrt_fp2(&sq).unwrap();
        assert_eq!(root.square(), sq);
    }
}
