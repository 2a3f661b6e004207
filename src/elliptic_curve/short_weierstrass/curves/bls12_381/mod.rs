/// `G1`'s curve `E: y^2 = x^3 + 4` over `Fq`, and the Miller loop constant.
pub mod curve;
/// Arkworks-compatible compressed point encoding for `G1`.
pub mod compression;
/// The `Fq2`/`Fq6`/`Fq12` tower and the subfield embeddings the pairing needs.
pub mod field_extension;
/// The optimal ate pairing: `IsPairing` and final exponentiation.
pub mod pairing;
/// `G2`'s curve `E': y^2 = x^3 + 4(1+u)` over `Fq2`, the sextic twist of `E`.
pub mod twist;
