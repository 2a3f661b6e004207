use thiserror::Error;

/// Errors that can occur when converting to or from a field element's byte
/// representation, or when deserializing encoded curve points.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ByteConversionError {
    #[error("Error trying to convert from big endian bytes")]
    FromBEBytesError,
    #[error("Error trying to convert from little endian bytes")]
    FromLEBytesError,
    #[error("Point is not in the expected subgroup")]
    PointNotInSubgroup,
    #[error("Value is not a valid compressed point")]
    ValueNotCompressed,
    #[error("Invalid value")]
    InvalidValue,
}

/// Errors produced by field arithmetic.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum FieldError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("The element has no multiplicative inverse")]
    InvZeroError,
    #[error("Value is out of range for this field")]
    InvalidValue,
}

/// Errors that can occur while computing or validating a bilinear pairing.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum PairingError {
    #[error("One of the points is not in the r-torsion subgroup")]
    PointNotInSubgroup,
    #[error("Denominator elimination mode is not implemented for this curve")]
    DenominatorEliminationNotImplemented,
    #[error("The point at infinity is not a valid input here")]
    InvalidInput,
    #[error("The Miller loop's signed-binary expansion has a most significant digit of 0")]
    MostSignificantDigitIsZero,
    #[error("triple_pairing rejects the point at infinity outright, rather than treating it as the identity factor")]
    InfinityInTriplePairing,
}

/// Errors produced by curve-point construction.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum CurveError {
    #[error("The given coordinates do not satisfy the curve equation")]
    InvalidPoint,
    #[error("Cannot convert the point at infinity to affine coordinates")]
    PointAtInfinity,
    #[error("The signed-binary exponent's most significant digit must be +-1, not 0")]
    MostSignificantDigitIsZero,
}

/// Errors produced while parsing a Groth16 verifying key or proof blob.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DeserializationError {
    #[error("Invalid amount of bytes")]
    InvalidAmountOfBytes,
    #[error("Error when creating a field element from bytes")]
    FieldFromBytesError,
    #[error("Error trying to load a pointer bigger than the supported architecture")]
    PointerSizeError,
    #[error("Invalid value")]
    InvalidValue,
}

impl From<ByteConversionError> for DeserializationError {
    fn from(error: ByteConversionError) -> Self {
        match error {
            ByteConversionError::FromBEBytesError => DeserializationError::FieldFromBytesError,
            ByteConversionError::FromLEBytesError => DeserializationError::FieldFromBytesError,
            ByteConversionError::InvalidValue => DeserializationError::InvalidValue,
            ByteConversionError::PointNotInSubgroup => DeserializationError::InvalidValue,
            ByteConversionError::ValueNotCompressed => DeserializationError::InvalidValue,
        }
    }
}

impl From<CurveError> for DeserializationError {
    fn from(_: CurveError) -> Self {
        DeserializationError::InvalidValue
    }
}
