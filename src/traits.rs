use crate::errors::ByteConversionError;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Serialization of field elements and curve points to and from their
/// fixed-size byte representation.
pub trait ByteConversion {
    /// Returns the big-endian byte representation of `self`.
    #[cfg(feature = "alloc")]
    fn to_bytes_be(&self) -> Vec<u8>;

    /// Returns the little-endian byte representation of `self`.
    #[cfg(feature = "alloc")]
    fn to_bytes_le(&self) -> Vec<u8>;

    /// Builds `Self` from a big-endian byte slice.
    fn from_bytes_be(bytes: &[u8]) -> Result<Self, ByteConversionError>
    where
        Self: Sized;

    /// Builds `Self` from a little-endian byte slice.
    fn from_bytes_le(bytes: &[u8]) -> Result<Self, ByteConversionError>
    where
        Self: Sized;
}
