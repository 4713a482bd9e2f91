//! Pedersen commitment opening proof: "I know `x` and `r` such that
//! `C == x * G + r * H`".
//!
//! [`commit`] is a standalone helper for computing `C` in the first place —
//! kept separate from the proof machinery, mirroring
//! `examples/original_source/pedersen.c`'s split between `pedersen_commit`
//! and `pedersen_prove`/`pedersen_verify`.

use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use rand::{CryptoRng, RngCore};

use crate::codec::ShakeCodec;
use crate::errors::Error;
use crate::fiat_shamir::NISigmaProtocol;
use crate::group;
use crate::linear_relation::LinearRelation;

const LABEL: &[u8] = b"pedersen_repr";

/// Compute the Pedersen commitment `C = value * generator + blinding * blinding_generator`.
pub fn commit(
    generator: RistrettoPoint,
    blinding_generator: RistrettoPoint,
    value: &Scalar,
    blinding: &Scalar,
) -> RistrettoPoint {
    generator * value + blinding_generator * blinding
}

fn instance(
    generator: RistrettoPoint,
    blinding_generator: RistrettoPoint,
    commitment: RistrettoPoint,
) -> NISigmaProtocol<ShakeCodec> {
    let mut rel = LinearRelation::new();
    let value = rel.allocate_scalar();
    let blinding = rel.allocate_scalar();
    let g = rel.allocate_element();
    let h = rel.allocate_element();
    let c = rel.allocate_element();
    rel.set_element(g, generator);
    rel.set_element(h, blinding_generator);
    rel.set_element(c, commitment);
    rel.append_equation(c, vec![(value, g), (blinding, h)]);

    let public_inputs = [generator, blinding_generator, commitment]
        .iter()
        .flat_map(group::point_encode)
        .collect::<Vec<u8>>();
    NISigmaProtocol::new(LABEL, rel, &public_inputs)
}

/// Prove knowledge of an opening `(value, blinding)` of `commitment` under
/// `(generator, blinding_generator)`.
pub fn prove(
    generator: RistrettoPoint,
    blinding_generator: RistrettoPoint,
    commitment: RistrettoPoint,
    value: &Scalar,
    blinding: &Scalar,
    rng: &mut (impl RngCore + CryptoRng),
) -> Result<Vec<u8>, Error> {
    instance(generator, blinding_generator, commitment).prove(&[*value, *blinding], b"", rng)
}

/// Verify a proof produced by [`prove`] for the same commitment.
pub fn verify(
    generator: RistrettoPoint,
    blinding_generator: RistrettoPoint,
    commitment: RistrettoPoint,
    proof: &[u8],
) -> bool {
    instance(generator, blinding_generator, commitment).verify(proof, b"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    fn generators() -> (RistrettoPoint, RistrettoPoint) {
        (
            group::point_base_mul(&Scalar::from(5u8)),
            group::point_base_mul(&Scalar::from(7u8)),
        )
    }

    #[test]
    fn honest_opening_verifies() {
        let mut rng = OsRng;
        let (g, h) = generators();
        let value = Scalar::random(&mut rng);
        let blinding = Scalar::random(&mut rng);
        let c = commit(g, h, &value, &blinding);
        let proof = prove(g, h, c, &value, &blinding, &mut rng).unwrap();
        assert!(verify(g, h, c, &proof));
    }

    #[test]
    fn tampered_commitment_fails() {
        let mut rng = OsRng;
        let (g, h) = generators();
        let value = Scalar::random(&mut rng);
        let blinding = Scalar::random(&mut rng);
        let c = commit(g, h, &value, &blinding);
        let proof = prove(g, h, c, &value, &blinding, &mut rng).unwrap();
        let other_c = c + group::point_base_mul(&Scalar::ONE);
        assert!(!verify(g, h, other_c, &proof));
    }

    #[test]
    fn wrong_opening_fails() {
        let mut rng = OsRng;
        let (g, h) = generators();
        let value = Scalar::random(&mut rng);
        let blinding = Scalar::random(&mut rng);
        let c = commit(g, h, &value, &blinding);
        let wrong_value = value + Scalar::ONE;
        let proof = prove(g, h, c, &wrong_value, &blinding, &mut rng).unwrap();
        assert!(!verify(g, h, c, &proof));
    }
}
