/// `G1`'s curve `E: y^2 = x^3 + 2x - 2` over `Fq`, and the Miller loop
/// constant.
pub mod curve;
/// The `Fq2`/`Fq4` tower and the subfield embeddings the pairing needs.
pub mod field_extension;
/// The ate pairing on MNT4-753: `IsPairing` and final exponentiation.
pub mod pairing;
/// `G2`'s curve `E'`, the quartic twist of `E`.
pub mod twist;
