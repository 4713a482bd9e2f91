//! Schnorr proof of knowledge of a discrete logarithm: "I know `x` such
//! that `Y = x * G`".

use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use rand::{CryptoRng, RngCore};

use crate::codec::ShakeCodec;
use crate::errors::Error;
use crate::fiat_shamir::NISigmaProtocol;
use crate::group;
use crate::linear_relation::LinearRelation;

const LABEL: &[u8] = b"schnorr";

fn instance(generator: RistrettoPoint, public: RistrettoPoint) -> NISigmaProtocol<ShakeCodec> {
    let mut rel = LinearRelation::new();
    let x = rel.allocate_scalar();
    let g = rel.allocate_element();
    let y = rel.allocate_element();
    rel.set_element(g, generator);
    rel.set_element(y, public);
    rel.add_equation_simple(y, x, g);

    let public_inputs = group::point_encode(&public).to_vec();
    NISigmaProtocol::new(LABEL, rel, &public_inputs)
}

/// Prove knowledge of `witness` such that `public == witness * generator`.
pub fn prove(
    generator: RistrettoPoint,
    public: RistrettoPoint,
    witness: &Scalar,
    rng: &mut (impl RngCore + CryptoRng),
) -> Result<Vec<u8>, Error> {
    instance(generator, public).prove(std::slice::from_ref(witness), b"", rng)
}

/// Verify a proof produced by [`prove`] for the same `generator`/`public`.
pub fn verify(generator: RistrettoPoint, public: RistrettoPoint, proof: &[u8]) -> bool {
    instance(generator, public).verify(proof, b"")
}
