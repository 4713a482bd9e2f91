//! DLEQ / Chaum-Pedersen proof of equality of discrete logarithms: "I know
//! `x` such that `h1 == x * g1` and `h2 == x * g2`", i.e. that the same
//! secret underlies two independent key pairs over the same group.

use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use rand::{CryptoRng, RngCore};

use crate::codec::ShakeCodec;
use crate::errors::Error;
use crate::fiat_shamir::NISigmaProtocol;
use crate::group;
use crate::linear_relation::LinearRelation;

const LABEL: &[u8] = b"dleq";

fn instance(
    g1: RistrettoPoint,
    h1: RistrettoPoint,
    g2: RistrettoPoint,
    h2: RistrettoPoint,
) -> NISigmaProtocol<ShakeCodec> {
    let mut rel = LinearRelation::new();
    let x = rel.allocate_scalar();
    let [g1_var, h1_var, g2_var, h2_var] = [
        rel.allocate_element(),
        rel.allocate_element(),
        rel.allocate_element(),
        rel.allocate_element(),
    ];
    rel.set_element(g1_var, g1);
    rel.set_element(h1_var, h1);
    rel.set_element(g2_var, g2);
    rel.set_element(h2_var, h2);
    rel.add_equation_simple(h1_var, x, g1_var);
    rel.add_equation_simple(h2_var, x, g2_var);

    let public_inputs = [g1, h1, g2, h2]
        .iter()
        .flat_map(group::point_encode)
        .collect::<Vec<u8>>();
    NISigmaProtocol::new(LABEL, rel, &public_inputs)
}

/// Prove that `h1 == witness * g1` and `h2 == witness * g2` for the same
/// `witness`.
pub fn prove(
    g1: RistrettoPoint,
    h1: RistrettoPoint,
    g2: RistrettoPoint,
    h2: RistrettoPoint,
    witness: &Scalar,
    rng: &mut (impl RngCore + CryptoRng),
) -> Result<Vec<u8>, Error> {
    instance(g1, h1, g2, h2).prove(std::slice::from_ref(witness), b"", rng)
}

/// Verify a proof produced by [`prove`] for the same four points.
pub fn verify(
    g1: RistrettoPoint,
    h1: RistrettoPoint,
    g2: RistrettoPoint,
    h2: RistrettoPoint,
    proof: &[u8],
) -> bool {
    instance(g1, h1, g2, h2).verify(proof, b"")
}
