use core::fmt::Debug;

use crate::field::element::FieldElement;
use crate::field::extensions::cubic::{CubicExtensionField, HasCubicNonResidue};
use crate::field::extensions::quadratic::{HasQuadraticNonResidue, QuadraticExtensionField};
use crate::field::traits::{HasFrobenius, IsSubfieldOf};

pub use crate::field::fields::bls12_381_prime_field::BLS12381PrimeField;

impl HasFrobenius for BLS12381PrimeField {
    /// `Fq`'s Frobenius is the identity (spec.md 4.A).
    fn frobenius(a: &<Self as crate::field::traits::IsField>::BaseType, _n: usize) -> <Self as crate::field::traits::IsField>::BaseType {
        *a
    }

    fn extension_degree_over_fq() -> usize {
        1
    }
}

type FpE = FieldElement<BLS12381PrimeField>;
type Fp2E = FieldElement<Degree2ExtensionField>;
type Fp6E = FieldElement<Degree6ExtensionField>;
type Fp12E = FieldElement<Degree12ExtensionField>;

/// `Fq2 = Fq[u]/(u^2 + 1)`: `-1` is not a square modulo the BLS12-381 base
/// field modulus.
#[derive(Debug, Clone)]
pub struct Degree2NonResidue;
impl HasQuadraticNonResidue<BLS12381PrimeField> for Degree2NonResidue {
    fn residue() -> FpE {
        -FpE::one()
    }
}
pub type Degree2ExtensionField = QuadraticExtensionField<BLS12381PrimeField, Degree2NonResidue>;

/// The non-residue `1 + u` used both for `Fq6 = Fq2[v]/(v^3 - (1+u))` and,
/// reusing the same value, for the `Fq4` auxiliary tower the cyclotomic
/// squaring trick of `final_exponentiation.rs` builds on top of `Fq2`.
#[derive(Debug, Clone)]
pub struct LevelTwoResidue;
impl HasCubicNonResidue<Degree2ExtensionField> for LevelTwoResidue {
    fn residue() -> FieldElement<Degree2ExtensionField> {
        FieldElement::new([FpE::one(), FpE::one()])
    }
}
impl HasQuadraticNonResidue<Degree2ExtensionField> for LevelTwoResidue {
    fn residue() -> FieldElement<Degree2ExtensionField> {
        FieldElement::new([FpE::one(), FpE::one()])
    }
}

pub type Degree6ExtensionField = CubicExtensionField<Degree2ExtensionField, LevelTwoResidue>;
pub type Degree4ExtensionField = QuadraticExtensionField<Degree2ExtensionField, LevelTwoResidue>;

/// `Fq12 = Fq6[w]/(w^2 - v)`, `v` being the generator `(0, 1, 0)` of `Fq6`.
#[derive(Debug, Clone)]
pub struct Degree12NonResidue;
impl HasQuadraticNonResidue<Degree6ExtensionField> for Degree12NonResidue {
    fn residue() -> FieldElement<Degree6ExtensionField> {
        FieldElement::new([FieldElement::zero(), FieldElement::one(), FieldElement::zero()])
    }
}
pub type Degree12ExtensionField = QuadraticExtensionField<Degree6ExtensionField, Degree12NonResidue>;

impl IsSubfieldOf<Degree2ExtensionField> for BLS12381PrimeField {
    fn embed(a: &FpE) -> FieldElement<Degree2ExtensionField> {
        FieldElement::new([a.clone(), FpE::zero()])
    }
}

impl IsSubfieldOf<Degree6ExtensionField> for Degree2ExtensionField {
    fn embed(
        a: &FieldElement<Degree2ExtensionField>,
    ) -> FieldElement<Degree6ExtensionField> {
        FieldElement::new([a.clone(), FieldElement::zero(), FieldElement::zero()])
    }
}

impl IsSubfieldOf<Degree12ExtensionField> for Degree6ExtensionField {
    fn embed(
        a: &FieldElement<Degree6ExtensionField>,
    ) -> FieldElement<Degree12ExtensionField> {
        FieldElement::new([a.clone(), FieldElement::zero()])
    }
}

/// The two embeddings the Miller loop needs directly: `G2`'s `Fq2`
/// coordinates and `G1`'s `Fq` coordinates both land in `Fq12`
/// (spec.md 4.G), so both get a direct (non-chained) impl rather than
/// forcing every caller to compose `embed` three times.
impl IsSubfieldOf<Degree12ExtensionField> for Degree2ExtensionField {
    fn embed(
        a: &FieldElement<Degree2ExtensionField>,
    ) -> FieldElement<Degree12ExtensionField> {
        let fp6: FieldElement<Degree6ExtensionField> =
            FieldElement::new([a.clone(), FieldElement::zero(), FieldElement::zero()]);
        FieldElement::new([fp6, FieldElement::zero()])
    }
}

impl IsSubfieldOf<Degree12ExtensionField> for BLS12381PrimeField {
    fn embed(a: &FpE) -> FieldElement<Degree12ExtensionField> {
        let fp2: Fp2E = FieldElement::new([a.clone(), FpE::zero()]);
        <Degree2ExtensionField as IsSubfieldOf<Degree12ExtensionField>>::embed(&fp2)
    }
}

/// Multiplies an `Fq2` element by the `Fq6`/`Fq4` non-residue `1 + u`.
pub fn mul_fp2_by_nonresidue(
    a: &FieldElement<Degree2ExtensionField>,
) -> FieldElement<Degree2ExtensionField> {
    a * &<LevelTwoResidue as HasCubicNonResidue<Degree2ExtensionField>>::residue()
}

/// `Fq2`'s Frobenius at odd `n` is conjugation: `q = 3 (mod 4)` here, so
/// `u^q = -u`. At even `n` it's the identity.
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

/// `gamma_1,i = u^{(q^i - 1)/3}` for `i = 1..5`, i.e. the twist factors
/// that make `Fq2`-coordinatewise conjugation into genuine `Fq6`/`Fq12`
/// Frobenius. Plain functions rather than `const`s: building a generic
/// `FieldElement<F>` isn't a `const fn` here.
fn gamma_11() -> Fp2E {
    Fp2E::new([
        FpE::from_hex_unchecked("1904D3BF02BB0667C231BEB4202C0D1F0FD603FD3CBD5F4F7B2443D784BAB9C4F67EA53D63E7813D8D0775ED92235FB8"),
        FpE::from_hex_unchecked("FC3E2B36C4E03288E9E902231F9FB854A14787B6C7B36FEC0C8EC971F63C5F282D5AC14D6C7EC22CF78A126DDC4AF3"),
    ])
}

fn gamma_12() -> Fp2E {
    Fp2E::new([
        FpE::from_hex_unchecked("0"),
        FpE::from_hex_unchecked("1A0111EA397FE699EC02408663D4DE85AA0D857D89759AD4897D29650FB85F9B409427EB4F49FFFD8BFD00000000AAAC"),
    ])
}

fn gamma_13() -> Fp2E {
    Fp2E::new([
        FpE::from_hex_unchecked("6AF0E0437FF400B6831E36D6BD17FFE48395DABC2D3435E77F76E17009241C5EE67992F72EC05F4C81084FBEDE3CC09"),
        FpE::from_hex_unchecked("6AF0E0437FF400B6831E36D6BD17FFE48395DABC2D3435E77F76E17009241C5EE67992F72EC05F4C81084FBEDE3CC09"),
    ])
}

fn gamma_14() -> Fp2E {
    Fp2E::new([
        FpE::from_hex_unchecked("1A0111EA397FE699EC02408663D4DE85AA0D857D89759AD4897D29650FB85F9B409427EB4F49FFFD8BFD00000000AAAD"),
        FpE::from_hex_unchecked("0"),
    ])
}

fn gamma_15() -> Fp2E {
    Fp2E::new([
        FpE::from_hex_unchecked("5B2CFD9013A5FD8DF47FA6B48B1E045F39816240C0B8FEE8BEADF4D8E9C0566C63A3E6E257F87329B18FAE980078116"),
        FpE::from_hex_unchecked("144E4211384586C16BD3AD4AFA99CC9170DF3560E77982D0DB45F3536814F0BD5871C1908BD478CD1EE605167FF82995"),
    ])
}

/// `gamma_2,i = gamma_1,i * gamma_1,i.conjugate()`, used when `Fq6`'s
/// Frobenius at `n = 2` is composed from two applications of `n = 1`.
fn gamma_21() -> FpE {
    FpE::from_hex_unchecked("5F19672FDF76CE51BA69C6076A0F77EADDB3A93BE6F89688DE17D813620A00022E01FFFFFFFEFFFF")
}

fn gamma_22() -> FpE {
    FpE::from_hex_unchecked("5F19672FDF76CE51BA69C6076A0F77EADDB3A93BE6F89688DE17D813620A00022E01FFFFFFFEFFFE")
}

fn gamma_23() -> FpE {
    FpE::from_hex_unchecked("1A0111EA397FE69A4B1BA7B6434BACD764774B84F38512BF6730D2A0F6B0F6241EABFFFEB153FFFFB9FEFFFFFFFFAAAA")
}

fn gamma_24() -> FpE {
    FpE::from_hex_unchecked("1A0111EA397FE699EC02408663D4DE85AA0D857D89759AD4897D29650FB85F9B409427EB4F49FFFD8BFD00000000AAAC")
}

fn gamma_25() -> FpE {
    FpE::from_hex_unchecked("1A0111EA397FE699EC02408663D4DE85AA0D857D89759AD4897D29650FB85F9B409427EB4F49FFFD8BFD00000000AAAD")
}

/// One step of `Fq6`'s Frobenius: conjugate each `Fq2` coordinate, then
/// twist by the `gamma_1,i` that makes the result land back in `Fq6`
/// rather than merely in its `Fq2`-coordinatewise conjugate.
fn frob1_fp6(a: &[Fp2E; 3]) -> [Fp2E; 3] {
    let [a0, a1, a2] = a;
    [
        a0.conjugate(),
        a1.conjugate() * gamma_12(),
        a2.conjugate() * gamma_14(),
    ]
}

impl HasFrobenius for Degree6ExtensionField {
    fn frobenius(a: &[Fp2E; 3], n: usize) -> [Fp2E; 3] {
        let mut result = a.clone();
        for _ in 0..(n % 6) {
            result = frob1_fp6(&result);
        }
        result
    }

    fn extension_degree_over_fq() -> usize {
        6
    }
}

/// One step of `Fq12`'s Frobenius: `Fq12 = Fq6[w]/(w^2 - v)`, so
/// `f = a + b*w` maps to `a.frob(1) + gamma_1,1 * b.frob(1) * w`, with the
/// `gamma_1,i` distributed across `b`'s own `Fq6` coordinates.
fn frob1_fp12(a: &[Fp6E; 2]) -> [Fp6E; 2] {
    let [a, b] = a;
    let [a0, a1, a2] = a.value();
    let [b0, b1, b2] = b.value();
    let c1 = Fp6E::new([
        a0.conjugate(),
        a1.conjugate() * gamma_12(),
        a2.conjugate() * gamma_14(),
    ]);
    let c2 = Fp6E::new([
        b0.conjugate() * gamma_11(),
        b1.conjugate() * gamma_13(),
        b2.conjugate() * gamma_15(),
    ]);
    [c1, c2]
}

impl HasFrobenius for Degree12ExtensionField {
    fn frobenius(a: &[Fp6E; 2], n: usize) -> [Fp6E; 2] {
        let mut result = a.clone();
        for _ in 0..(n % 12) {
            result = frob1_fp12(&result);
        }
        result
    }

    fn extension_degree_over_fq() -> usize {
        12
    }
}

/// `Fq12`'s Frobenius squared, in closed form rather than composed from
/// two `n = 1` steps: `p^2 - 1` is divisible by 6, so each `Fq2`
/// coordinate of `a`/`b` is untouched by conjugation and only needs a
/// twist by the precomputed `gamma_2,i`.
pub fn frobenius_square(f: &Fp12E) -> Fp12E {
    let [a, b] = f.value();
    let omega_3 = gamma_24();
    let omega_3_squared = gamma_23();
    let w_to_p2_minus_1 = gamma_25();

    let [a0, a1, a2] = a.value();
    let [b0, b1, b2] = b.value();

    let f0 = Fp6E::new([a0.clone(), a1 * &omega_3, a2 * &omega_3_squared]);
    let f1 = Fp6E::new([b0.clone(), b1 * &omega_3, b2 * &omega_3_squared]);

    Fp12E::new([f0, w_to_p2_minus_1 * f1])
}

#[cfg(test)]
mod frobenius_tests {
    use super::*;

    #[test]
    fn frobenius_twelve_times_is_identity() {
        let f = Fp12E::new([
            Fp6E::new([
                Fp2E::new([FpE::from(1), FpE::from(2)]),
                Fp2E::new([FpE::from(3), FpE::from(4)]),
                Fp2E::new([FpE::from(5), FpE::from(6)]),
            ]),
            Fp6E::new([
                Fp2E::new([FpE::from(7), FpE::from(8)]),
                Fp2E::new([FpE::from(9), FpE::from(10)]),
                Fp2E::new([FpE::from(11), FpE::from(12)]),
            ]),
        ]);
        assert_eq!(f.frob(12), f);
    }

    #[test]
    fn frobenius_square_matches_two_single_steps() {
        let f = Fp12E::new([
            Fp6E::new([
                Fp2E::new([FpE::from(1), FpE::from(2)]),
                Fp2E::new([FpE::from(3), FpE::from(4)]),
                Fp2E::new([FpE::from(5), FpE::from(6)]),
            ]),
            Fp6E::new([
                Fp2E::new([FpE::from(7), FpE::from(8)]),
                Fp2E::new([FpE::from(9), FpE::from(10)]),
                Fp2E::new([FpE::from(11), FpE::from(12)]),
            ]),
        ]);
        assert_eq!(frobenius_square(&f), f.frob(2));
    }
}
