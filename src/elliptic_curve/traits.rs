use crate::cyclic_group::IsGroup;
use crate::errors::PairingError;
use crate::field::element::FieldElement;
use crate::field::traits::IsField;

/// Common behaviour for elliptic curve groups, independent of the
/// coordinate system (affine, projective) used to represent points.
pub trait IsEllipticCurve {
    type BaseField: IsField;
    type PointRepresentation: IsGroup;

    /// A fixed generator of the group this curve's type parameterizes
    /// (e.g. `G1` or `G2` of a pairing configuration, spec.md 4.D).
    fn generator() -> Self::PointRepresentation;
}

/// Builds a point representation from two base-field coordinates,
/// checking the defining equation (spec.md 4.E: "constructor rejects
/// `(x, y)` that do not satisfy the curve equation").
pub trait FromAffine<F: IsField> {
    fn from_affine(
        x: FieldElement<F>,
        y: FieldElement<F>,
    ) -> Result<Self, crate::errors::CurveError>
    where
        Self: Sized;
}

/// A bilinear pairing `e: G1 x G2 -> GT` (spec.md 4.G/4.H), batched so
/// that `compute_batch` computes the product of several pairings with a
/// single final exponentiation -- the shape `triple_pairing` specializes
/// to three factors.
pub trait IsPairing {
    type G1Point: IsGroup;
    type G2Point: IsGroup;
    type OutputField: IsField;

    fn compute_batch(
        pairs: &[(&Self::G1Point, &Self::G2Point)],
    ) -> Result<FieldElement<Self::OutputField>, PairingError>;
}
