/// The base field `Fq` of BLS12-381 (embedding degree 12).
pub mod bls12_381_prime_field;
/// The base field `Fq` of MNT4-753 (embedding degree 4).
pub mod mnt4_753_prime_field;
