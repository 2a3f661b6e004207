/// Short-Weierstrass curve arithmetic: affine and projective points,
/// group law, line evaluation, and the concrete BLS12-381/MNT4-753
/// instantiations.
pub mod short_weierstrass;
/// Curve-family-agnostic traits (`IsEllipticCurve`, `FromAffine`, `IsPairing`).
pub mod traits;
