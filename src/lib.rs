#![cfg_attr(feature = "no_std", no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod cyclic_group;
pub mod errors;
pub mod field;
pub mod traits;
pub mod unsigned_integer;
pub mod elliptic_curve;
pub mod pairing;
pub mod groth16;
