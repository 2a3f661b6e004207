use crate::field::element::FieldElement;
use core::fmt::Debug;

/// Trait to add field behaviour to a struct. Implementors describe a field
/// purely in terms of operations on `BaseType` -- `FieldElement<F>` is the
/// user-facing wrapper that implements the operator traits on top of this.
pub trait IsField: Debug + Clone {
    /// The underlying type used to represent elements of the field.
    type BaseType: Clone + Debug;

    fn add(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType;

    fn mul(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType;

    fn sub(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        Self::add(a, &Self::neg(b))
    }

    fn neg(a: &Self::BaseType) -> Self::BaseType;

    /// Multiplicative inverse. Callers must not call this with `a == zero()`.
    fn inv(a: &Self::BaseType) -> Self::BaseType;

    fn div(a: &Self::BaseType, b: &Self::BaseType) -> Self::BaseType {
        Self::mul(a, &Self::inv(b))
    }

    fn eq(a: &Self::BaseType, b: &Self::BaseType) -> bool;

    fn zero() -> Self::BaseType;

    fn one() -> Self::BaseType;

    fn from_u64(x: u64) -> Self::BaseType;

    /// Takes as input an element of `BaseType` and returns the internal
    /// representation of that element in the field (e.g. reducing it modulo
    /// the field's modulus).
    fn from_base_type(x: Self::BaseType) -> Self::BaseType;
}

/// A field with a notion of "prime field order" -- a single modulus the
/// elements' canonical representative is reduced against, and a fixed byte
/// width used for serialization.
pub trait IsPrimeField: IsField {
    type RepresentativeType: Clone + Debug + PartialEq + Eq + PartialOrd + Ord;

    /// Returns the canonical representative of `a`, i.e. the unique integer
    /// in `[0, modulus)` congruent to `a`.
    fn representative(a: &Self::BaseType) -> Self::RepresentativeType;

    /// Number of bytes used by the big/little-endian byte encoding of an
    /// element's representative.
    fn field_bit_size() -> usize;
}

/// The Frobenius endomorphism `x -> x^(q^n)`, where `q` is the modulus of
/// the prime field at the bottom of the tower this field sits in.
///
/// `n` ranges over `0..extension_degree_over_fq()`; `frobenius(x, 0)` is the
/// identity and `frobenius(x, extension_degree_over_fq())` is again the
/// identity (spec.md 8.3). Prime fields fix `n` at the identity for every
/// `n`. Extension fields apply the base field's Frobenius coordinate-wise
/// and twist by a precomputed constant (the "gamma" table of spec.md 4.B
/// and 4.C) that depends on the concrete tower the field was built for --
/// this is why `frobenius` is implemented per concrete field rather than
/// derived generically from `HasQuadraticNonResidue`/`HasCubicNonResidue`.
pub trait HasFrobenius: IsField {
    fn frobenius(a: &Self::BaseType, n: usize) -> Self::BaseType;

    /// Extension degree of this field over the prime field at the bottom
    /// of its tower (not over its immediate base field). Used to reduce
    /// `n` modulo the Frobenius map's order.
    fn extension_degree_over_fq() -> usize;
}

/// A typed promotion from a smaller field in a tower into a larger one
/// containing it, by scalar-multiplying the larger field's identity
/// element (spec.md's design note on "mixed-field multiplication": the
/// Python source silently promotes on `__mul__`; here the caller invokes
/// `embed` explicitly before a cross-tower operation).
pub trait IsSubfieldOf<T: IsField>: IsField {
    fn embed(a: &FieldElement<Self>) -> FieldElement<T>;
}

/// The byte width of this field's serialized representation (spec.md 4.B:
/// "concatenation of coordinate serializations"). Prime fields get theirs
/// from `IsPrimeField::field_bit_size`; extension fields multiply their
/// base field's width by their own degree.
pub trait HasByteLen: IsField {
    fn byte_len() -> usize;
}

impl<F: IsPrimeField> HasByteLen for F {
    fn byte_len() -> usize {
        F::field_bit_size()
    }
}

