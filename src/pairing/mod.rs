//! The curve-family-agnostic half of a bilinear pairing: the Miller loop
//! and its line-evaluation primitive (spec.md 4.G). Curve-specific final
//! exponentiation and the `IsPairing` wiring live next to each curve's
//! other parameters, under `elliptic_curve::short_weierstrass::curves`.
use crate::cyclic_group::IsGroup;
use crate::elliptic_curve::short_weierstrass::point::AffinePoint;
use crate::elliptic_curve::short_weierstrass::traits::IsShortWeierstrass;
use crate::field::element::FieldElement;
use crate::field::traits::{IsField, IsSubfieldOf};

/// Whether (and how) the Miller loop's line-evaluation denominator is
/// cancelled instead of computed with a field inversion per step.
/// `None` is this crate's only implemented path: both BLS12-381 (k=12)
/// and MNT4-753 (k=4) have an even embedding degree, so the vertical
/// line's contribution is itself fixed by the final exponentiation and
/// can be dropped rather than divided out (spec.md 4.F/4.G).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenominatorElimination {
    None,
    Quadratic,
    Cubic,
}

impl DenominatorElimination {
    pub fn apply<K: IsField>(
        &self,
        value: FieldElement<K>,
    ) -> Result<FieldElement<K>, crate::errors::PairingError> {
        match self {
            Self::None | Self::Quadratic => Ok(value),
            Self::Cubic => Err(crate::errors::PairingError::DenominatorEliminationNotImplemented),
        }
    }
}

/// Evaluates the line through `t` and `other` (the tangent at `t` when
/// `t == other`, i.e. the doubling step; the secant otherwise, i.e. the
/// addition step) at `p`, embedding both operands' native fields into the
/// pairing's target field `K` (spec.md 4.G). `C` is the curve `t`/`other`
/// live on (the twisted curve, for the usual optimal-ate setup); `R` is
/// the curve `p` lives on.
pub fn line_evaluation<C, R, K>(
    t: &AffinePoint<C>,
    other: &AffinePoint<C>,
    p: &AffinePoint<R>,
) -> FieldElement<K>
where
    C: IsShortWeierstrass,
    R: IsShortWeierstrass,
    K: IsField,
    C::BaseField: IsSubfieldOf<K>,
    R::BaseField: IsSubfieldOf<K>,
{
    let px = <R::BaseField as IsSubfieldOf<K>>::embed(p.x());
    let py = <R::BaseField as IsSubfieldOf<K>>::embed(p.y());
    match t.lambda_fraction(other) {
        // t == -other: the line through them is vertical (spec.md 4.E).
        None => {
            let tx = <C::BaseField as IsSubfieldOf<K>>::embed(t.x());
            px - tx
        }
        Some((num, den)) => {
            let lambda = <C::BaseField as IsSubfieldOf<K>>::embed(&(num / den));
            let x1 = <C::BaseField as IsSubfieldOf<K>>::embed(t.x());
            let y1 = <C::BaseField as IsSubfieldOf<K>>::embed(t.y());
            (py - y1) - lambda * (px - x1)
        }
    }
}

/// The generic signed-binary Miller loop (spec.md 4.G): accumulates the
/// line-evaluation product over `loop_bits` (most significant bit first,
/// the top `1` already consumed by starting the accumulator point at `q`)
/// while doubling and conditionally adding `q` onto a running point on
/// `C`. Works for both BLS12-381 and MNT4-753 by varying `C`/`R`/`K`.
pub fn miller_loop<C, R, K>(
    loop_bits: &[bool],
    q: &AffinePoint<C>,
    p: &AffinePoint<R>,
) -> FieldElement<K>
where
    C: IsShortWeierstrass,
    R: IsShortWeierstrass,
    K: IsField,
    C::BaseField: IsSubfieldOf<K>,
    R::BaseField: IsSubfieldOf<K>,
{
    let mut t = q.clone();
    let mut f = FieldElement::<K>::one();
    for bit in loop_bits {
        f = f.square() * line_evaluation::<C, R, K>(&t, &t, p);
        t = t.operate_with(&t);
        if *bit {
            f = f * line_evaluation::<C, R, K>(&t, q, p);
            t = t.operate_with(q);
        }
    }
    f
}

/// `loop_constant`'s bits, most significant first, with the leading `1`
/// dropped (it is implicitly consumed by initializing the Miller loop's
/// accumulator point at `q` itself rather than at the identity).
#[cfg(feature = "alloc")]
pub fn bits_be_skip_leading_one(mut loop_constant: u64) -> alloc::vec::Vec<bool> {
    let mut bits = alloc::vec::Vec::new();
    while loop_constant > 0 {
        bits.insert(0, (loop_constant & 1) == 1);
        loop_constant >>= 1;
    }
    if !bits.is_empty() {
        bits.remove(0);
    }
    bits
}

/// The Miller loop, signed-binary-digit variant (spec.md 4.G): `digits` is
/// `[e_0, .., e_{m-1}]`, most significant digit last, each in `{-1, 0, 1}`
/// and `e_{m-1} in {-1, 1}`, representing `n = sum(e_i * 2^i)`. This is
/// the literal algorithm; [`miller_loop`] above is the `e_i in {0, 1}`
/// specialization both curves in this crate actually need (BLS12-381 and
/// MNT4-753 both have a positive loop parameter, so a signed expansion of
/// the negative digits is never required here, only the upfront "is the
/// whole loop run on `q` or `-q`" choice `e_{m-1}` already captures for the
/// unsigned case -- that case folds into `miller_loop` with no sign flips
/// inside the loop body).
pub fn miller_loop_signed<C, R, K>(
    digits: &[i8],
    q: &AffinePoint<C>,
    p: &AffinePoint<R>,
    elimination: DenominatorElimination,
) -> Result<FieldElement<K>, crate::errors::PairingError>
where
    C: IsShortWeierstrass,
    R: IsShortWeierstrass,
    K: IsField,
    C::BaseField: IsSubfieldOf<K>,
    R::BaseField: IsSubfieldOf<K>,
{
    if elimination == DenominatorElimination::Cubic {
        return Err(crate::errors::PairingError::DenominatorEliminationNotImplemented);
    }
    let m = digits.len();
    if m == 0 || digits[m - 1] == 0 {
        return Err(crate::errors::PairingError::MostSignificantDigitIsZero);
    }
    let neg_q = q.neg();
    let mut t = if digits[m - 1] == 1 { q.clone() } else { neg_q.clone() };
    let mut f = FieldElement::<K>::one();
    for i in (0..m - 1).rev() {
        f = f.square() * line_evaluation::<C, R, K>(&t, &t, p);
        t = t.operate_with(&t);
        match digits[i] {
            1 => {
                f = f * line_evaluation::<C, R, K>(&t, q, p);
                t = t.operate_with(q);
            }
            -1 => {
                f = f * line_evaluation::<C, R, K>(&t, &neg_q, p);
                t = t.operate_with(&neg_q);
            }
            _ => {}
        }
    }
    Ok(f)
}

/// "Loop on twisted curve" (spec.md 4.G): `Q` stays on the twist `E'`;
/// `P`'s coordinates are embedded directly into `Fqk` rather than carried
/// through the curve-specific twisting morphism `Phi`, since this crate's
/// generic `line_evaluation` already embeds both operands' fields into
/// `K` before combining them -- the two are mathematically equivalent
/// lifts of the same base-field element into `Fqk`.
pub fn miller_loop_on_twisted_curve<TwistCurve, BaseCurve, K>(
    loop_bits: &[bool],
    q: &AffinePoint<TwistCurve>,
    p: &AffinePoint<BaseCurve>,
) -> FieldElement<K>
where
    TwistCurve: IsShortWeierstrass,
    BaseCurve: IsShortWeierstrass,
    K: IsField,
    TwistCurve::BaseField: IsSubfieldOf<K>,
    BaseCurve::BaseField: IsSubfieldOf<K>,
{
    miller_loop::<TwistCurve, BaseCurve, K>(loop_bits, q, p)
}

/// "Loop on base curve" (spec.md 4.G): the symmetric counterpart of
/// [`miller_loop_on_twisted_curve`], with `P` staying on `E` and `Q`'s
/// coordinates embedded into `Fqk`.
pub fn miller_loop_on_base_curve<BaseCurve, TwistCurve, K>(
    loop_bits: &[bool],
    p: &AffinePoint<BaseCurve>,
    q: &AffinePoint<TwistCurve>,
) -> FieldElement<K>
where
    BaseCurve: IsShortWeierstrass,
    TwistCurve: IsShortWeierstrass,
    K: IsField,
    BaseCurve::BaseField: IsSubfieldOf<K>,
    TwistCurve::BaseField: IsSubfieldOf<K>,
{
    miller_loop::<BaseCurve, TwistCurve, K>(loop_bits, p, q)
}

/// `e(P, Q)`, the named top-level pairing API (spec.md 6): the identity
/// if either input is the point at infinity, `C::compute_batch` otherwise.
pub fn pairing<C: crate::elliptic_curve::traits::IsPairing>(
    p: &C::G1Point,
    q: &C::G2Point,
) -> Result<FieldElement<C::OutputField>, crate::errors::PairingError>
where
    C::G1Point: IsGroup + PartialEq,
    C::G2Point: IsGroup + PartialEq,
{
    if *p == C::G1Point::neutral_element() || *q == C::G2Point::neutral_element() {
        return Ok(FieldElement::one());
    }
    C::compute_batch(&[(p, q)])
}

/// `e(P1,Q1) * e(P2,Q2) * e(P3,Q3)` (spec.md 6). Unlike [`pairing`], an
/// infinity input is rejected outright rather than silently contributing
/// the identity factor (spec.md 7).
pub fn triple_pairing<C: crate::elliptic_curve::traits::IsPairing>(
    p1: &C::G1Point,
    q1: &C::G2Point,
    p2: &C::G1Point,
    q2: &C::G2Point,
    p3: &C::G1Point,
    q3: &C::G2Point,
) -> Result<FieldElement<C::OutputField>, crate::errors::PairingError>
where
    C::G1Point: IsGroup + PartialEq,
    C::G2Point: IsGroup + PartialEq,
{
    let points: [(&C::G1Point, &C::G2Point); 3] = [(p1, q1), (p2, q2), (p3, q3)];
    for (p, q) in points {
        if *p == C::G1Point::neutral_element() || *q == C::G2Point::neutral_element() {
            return Err(crate::errors::PairingError::InfinityInTriplePairing);
        }
    }
    C::compute_batch(&[(p1, q1), (p2, q2), (p3, q3)])
}

#[cfg(test)]
mod signed_miller_loop_tests {
    use super::*;
    use crate::elliptic_curve::short_weierstrass::curves::bls12_381::curve::BLS12381Curve;
    use crate::elliptic_curve::short_weierstrass::curves::bls12_381::field_extension::Degree12ExtensionField;
    use crate::elliptic_curve::short_weierstrass::curves::bls12_381::twist::BLS12381TwistCurve;
    use crate::elliptic_curve::traits::IsEllipticCurve;

    // spec.md 4.E/9: the most significant digit of the signed-binary
    // expansion must be +-1; a 0 there is an input-contract violation, not
    // a silent "treat as -1".
    #[test]
    fn rejects_a_most_significant_digit_of_zero() {
        let p = BLS12381Curve::generator().to_affine();
        let q = BLS12381TwistCurve::generator().to_affine();
        let digits = [1_i8, 0, 0];
        let result = miller_loop_signed::<BLS12381TwistCurve, BLS12381Curve, Degree12ExtensionField>(
            &digits,
            &q,
            &p,
            DenominatorElimination::None,
        );
        assert_eq!(
            result.unwrap_err(),
            crate::errors::PairingError::MostSignificantDigitIsZero
        );
    }

    #[test]
    fn rejects_an_empty_expansion() {
        let p = BLS12381Curve::generator().to_affine();
        let q = BLS12381TwistCurve::generator().to_affine();
        let result = miller_loop_signed::<BLS12381TwistCurve, BLS12381Curve, Degree12ExtensionField>(
            &[],
            &q,
            &p,
            DenominatorElimination::None,
        );
        assert_eq!(
            result.unwrap_err(),
            crate::errors::PairingError::MostSignificantDigitIsZero
        );
    }

    // All-{0,1} digits with a leading 1 is exactly the contract
    // `miller_loop`'s `loop_bits` already satisfies, so the two must agree:
    // both represent n = 0b1011 = 11, `digits` least-significant-digit
    // first (spec.md 4.E: `n = sum(e_i * 2^i)`), `loop_bits` most
    // significant bit first with the leading `1` already dropped.
    #[test]
    fn signed_digits_of_zero_and_one_match_the_unsigned_loop() {
        let p = BLS12381Curve::generator().to_affine();
        let q = BLS12381TwistCurve::generator().to_affine();
        let loop_bits = [false, true, true];
        let digits = [1_i8, 1, 0, 1];

        let unsigned = miller_loop::<BLS12381TwistCurve, BLS12381Curve, Degree12ExtensionField>(
            &loop_bits, &q, &p,
        );
        let signed = miller_loop_signed::<BLS12381TwistCurve, BLS12381Curve, Degree12ExtensionField>(
            &digits,
            &q,
            &p,
            DenominatorElimination::None,
        )
        .unwrap();
        assert_eq!(unsigned, signed);
    }
}
