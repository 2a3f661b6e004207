//! Groth16 verifying-key and proof parsing (spec.md 6): trivial byte-blob
//! deserialization, deliberately not the SNARK verifier itself (spec.md
//! 1's non-goals). Grounded on
//! `examples/original_source/elliptic_curves/models/curve.py`'s
//! `BilinearPairingCurve.deserialise_vk`/`deserialise_proof`.
pub mod data_structures;
