/// The `FieldElement<F>` wrapper and its operator overloads.
pub mod element;
/// Quadratic and cubic tower extensions, generic over a base field.
pub mod extensions;
/// Concrete prime field instantiations (BLS12-381's and MNT4-753's `Fq`).
pub mod fields;
/// `IsField`, `IsPrimeField` and the other field-level trait contracts.
pub mod traits;
