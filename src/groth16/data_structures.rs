use crate::elliptic_curve::short_weierstrass::point::{AffinePoint, ShortWeierstrassProjectivePoint};
use crate::elliptic_curve::short_weierstrass::traits::IsShortWeierstrass;
use crate::errors::DeserializationError;
use crate::field::element::{FieldElement, LexicographicallyLargest};
use crate::field::traits::HasByteLen;
use crate::traits::ByteConversion;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// A Groth16 verifying key, parameterized by the base curve (`alpha` and
/// `gamma_abc` live in `G1`) and the twisted curve (`beta`, `gamma`,
/// `delta` live in `G2`). Field layout and parsing order follow spec.md
/// 6: `alpha` (G1) `‖` `beta` (G2) `‖` `gamma` (G2) `‖` `delta` (G2) `‖`
/// an 8-byte little-endian length `‖` that many `G1` points.
#[derive(Debug, Clone)]
pub struct VerifyingKey<BaseCurve: IsShortWeierstrass, TwistCurve: IsShortWeierstrass> {
    pub alpha: ShortWeierstrassProjectivePoint<BaseCurve>,
    pub beta: ShortWeierstrassProjectivePoint<TwistCurve>,
    pub gamma: ShortWeierstrassProjectivePoint<TwistCurve>,
    pub delta: ShortWeierstrassProjectivePoint<TwistCurve>,
    #[cfg(feature = "alloc")]
    pub gamma_abc: Vec<ShortWeierstrassProjectivePoint<BaseCurve>>,
}

impl<BaseCurve, TwistCurve> VerifyingKey<BaseCurve, TwistCurve>
where
    BaseCurve: IsShortWeierstrass,
    TwistCurve: IsShortWeierstrass,
    BaseCurve::BaseField: HasByteLen + LexicographicallyLargest,
    TwistCurve::BaseField: HasByteLen + LexicographicallyLargest,
    FieldElement<BaseCurve::BaseField>: ByteConversion,
    FieldElement<TwistCurve::BaseField>: ByteConversion,
{
    #[cfg(feature = "alloc")]
    pub fn deserialize(bytes: &[u8]) -> Result<Self, DeserializationError> {
        log::trace!("deserializing a {}-byte Groth16 verifying key", bytes.len());
        let width_g1 = BaseCurve::BaseField::byte_len() * 2;
        let width_g2 = TwistCurve::BaseField::byte_len() * 2;

        let mut index = 0usize;
        let alpha = read_g1::<BaseCurve>(bytes, &mut index, width_g1)?;
        let beta = read_g2::<TwistCurve>(bytes, &mut index, width_g2)?;
        let gamma = read_g2::<TwistCurve>(bytes, &mut index, width_g2)?;
        let delta = read_g2::<TwistCurve>(bytes, &mut index, width_g2)?;

        let length_bytes = bytes
            .get(index..index + 8)
            .ok_or(DeserializationError::InvalidAmountOfBytes)?;
        let n_abc = u64::from_le_bytes(
            length_bytes
                .try_into()
                .map_err(|_| DeserializationError::PointerSizeError)?,
        );
        index += 8;

        let mut gamma_abc = Vec::with_capacity(n_abc as usize);
        for _ in 0..n_abc {
            gamma_abc.push(read_g1::<BaseCurve>(bytes, &mut index, width_g1)?);
        }

        if index != bytes.len() {
            return Err(DeserializationError::InvalidAmountOfBytes);
        }

        Ok(Self {
            alpha,
            beta,
            gamma,
            delta,
            gamma_abc,
        })
    }

    #[cfg(feature = "alloc")]
    pub fn serialize(&self) -> Vec<u8> {
        let mut bytes = self.alpha.to_affine().serialize_uncompressed();
        bytes.extend(self.beta.to_affine().serialize_uncompressed());
        bytes.extend(self.gamma.to_affine().serialize_uncompressed());
        bytes.extend(self.delta.to_affine().serialize_uncompressed());
        bytes.extend((self.gamma_abc.len() as u64).to_le_bytes());
        for point in &self.gamma_abc {
            bytes.extend(point.to_affine().serialize_uncompressed());
        }
        bytes
    }
}

/// A Groth16 proof: `A` and `C` live in `G1`, `B` lives in `G2` (spec.md
/// 6), in that order, each arkworks-uncompressed.
#[derive(Debug, Clone)]
pub struct Proof<BaseCurve: IsShortWeierstrass, TwistCurve: IsShortWeierstrass> {
    pub a: ShortWeierstrassProjectivePoint<BaseCurve>,
    pub b: ShortWeierstrassProjectivePoint<TwistCurve>,
    pub c: ShortWeierstrassProjectivePoint<BaseCurve>,
}

impl<BaseCurve, TwistCurve> Proof<BaseCurve, TwistCurve>
where
    BaseCurve: IsShortWeierstrass,
    TwistCurve: IsShortWeierstrass,
    BaseCurve::BaseField: HasByteLen + LexicographicallyLargest,
    TwistCurve::BaseField: HasByteLen + LexicographicallyLargest,
    FieldElement<BaseCurve::BaseField>: ByteConversion,
    FieldElement<TwistCurve::BaseField>: ByteConversion,
{
    #[cfg(feature = "alloc")]
    pub fn deserialize(bytes: &[u8]) -> Result<Self, DeserializationError> {
        let width_g1 = BaseCurve::BaseField::byte_len() * 2;
        let width_g2 = TwistCurve::BaseField::byte_len() * 2;

        let mut index = 0usize;
        let a = read_g1::<BaseCurve>(bytes, &mut index, width_g1)?;
        let b = read_g2::<TwistCurve>(bytes, &mut index, width_g2)?;
        let c = read_g1::<BaseCurve>(bytes, &mut index, width_g1)?;

        if index != bytes.len() {
            return Err(DeserializationError::InvalidAmountOfBytes);
        }

        Ok(Self { a, b, c })
    }

    #[cfg(feature = "alloc")]
    pub fn serialize(&self) -> Vec<u8> {
        let mut bytes = self.a.to_affine().serialize_uncompressed();
        bytes.extend(self.b.to_affine().serialize_uncompressed());
        bytes.extend(self.c.to_affine().serialize_uncompressed());
        bytes
    }
}

#[cfg(feature = "alloc")]
fn read_g1<C>(
    bytes: &[u8],
    index: &mut usize,
    width: usize,
) -> Result<ShortWeierstrassProjectivePoint<C>, DeserializationError>
where
    C: IsShortWeierstrass,
    C::BaseField: HasByteLen + LexicographicallyLargest,
    FieldElement<C::BaseField>: ByteConversion,
{
    let slice = bytes
        .get(*index..*index + width)
        .ok_or(DeserializationError::InvalidAmountOfBytes)?;
    let point = AffinePoint::<C>::deserialize_uncompressed(slice)?;
    *index += width;
    Ok(ShortWeierstrassProjectivePoint::from_affine_point(&point))
}

#[cfg(feature = "alloc")]
fn read_g2<C>(
    bytes: &[u8],
    index: &mut usize,
    width: usize,
) -> Result<ShortWeierstrassProjectivePoint<C>, DeserializationError>
where
    C: IsShortWeierstrass,
    C::BaseField: HasByteLen + LexicographicallyLargest,
    FieldElement<C::BaseField>: ByteConversion,
{
    read_g1::<C>(bytes, index, width)
}

#[cfg(test)]
#[cfg(feature = "alloc")]
mod tests {
    use super::*;
    use crate::elliptic_curve::short_weierstrass::curves::bls12_381::curve::BLS12381Curve;
    use crate::elliptic_curve::short_weierstrass::curves::bls12_381::twist::BLS12381TwistCurve;
    use crate::elliptic_curve::traits::IsEllipticCurve;

    type VK = VerifyingKey<BLS12381Curve, BLS12381TwistCurve>;
    type Pf = Proof<BLS12381Curve, BLS12381TwistCurve>;

    #[test]
    fn verifying_key_round_trips() {
        let g1 = BLS12381Curve::generator();
        let g2 = BLS12381TwistCurve::generator();
        let vk = VK {
            alpha: g1.clone(),
            beta: g2.clone(),
            gamma: g2.clone(),
            delta: g2.clone(),
            gamma_abc: alloc::vec![g1.clone(), g1.clone()],
        };
        let bytes = vk.serialize();
        let decoded = VK::deserialize(&bytes).unwrap();
        assert_eq!(decoded.serialize(), bytes);
    }

    #[test]
    fn proof_round_trips() {
        let g1 = BLS12381Curve::generator();
        let g2 = BLS12381TwistCurve::generator();
        let proof = Pf {
            a: g1.clone(),
            b: g2,
            c: g1,
        };
        let bytes = proof.serialize();
        let decoded = Pf::deserialize(&bytes).unwrap();
        assert_eq!(decoded.serialize(), bytes);
    }
}
