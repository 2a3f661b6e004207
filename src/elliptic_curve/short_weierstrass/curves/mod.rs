/// BLS12-381: embedding degree 12, used by most production Groth16 deployments.
pub mod bls12_381;
/// MNT4-753: embedding degree 4, one half of an MNT4/MNT6 pairing-friendly cycle.
pub mod mnt4_753;
