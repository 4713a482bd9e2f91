//! The Sigma engine: commit / response / verify / simulate over a
//! [`LinearRelation`] (spec component E).
//!
//! This module knows nothing about hashing or byte encodings — it operates
//! purely on scalars, points, and relations. Fiat-Shamir challenge
//! derivation lives in `crate::fiat_shamir`; wire encoding lives in
//! `crate::serialization`.

use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::Error;
use crate::group;
use crate::linear_relation::LinearRelation;

/// The prover's secret state between `prover_commit` and `prover_response`:
/// the witness and the per-equation nonces sampled for this proof.
///
/// Both vectors are wiped on drop, including the early drop that happens if
/// a caller abandons a proof attempt between the two calls.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ProverState {
    witness: Vec<Scalar>,
    nonces: Vec<Scalar>,
}

/// Sample fresh nonces and evaluate the commitment `M(nonces)`.
///
/// Fails with [`Error::InvalidWitnessLength`] if `witness` does not have one
/// entry per scalar variable in `relation`, and propagates any
/// [`Error`] surfaced while evaluating the relation (an empty equation or an
/// unassigned element variable).
pub fn prover_commit(
    relation: &LinearRelation,
    witness: &[Scalar],
    rng: &mut (impl RngCore + CryptoRng),
) -> Result<(ProverState, Vec<RistrettoPoint>), Error> {
    if witness.len() != relation.map().num_scalars() {
        return Err(Error::InvalidWitnessLength);
    }
    let nonces: Vec<Scalar> = (0..relation.map().num_scalars())
        .map(|_| group::scalar_random(rng))
        .collect();
    let commitment = relation.map().evaluate(&nonces)?;
    let state = ProverState {
        witness: witness.to_vec(),
        nonces,
    };
    Ok((state, commitment))
}

/// Compute the response `response[i] = nonce[i] + witness[i] * challenge`.
///
/// Consumes `state`, so its witness and nonces are wiped as soon as the
/// response has been produced.
pub fn prover_response(state: ProverState, challenge: &Scalar) -> Vec<Scalar> {
    state
        .nonces
        .iter()
        .zip(state.witness.iter())
        .map(|(nonce, witness)| nonce + witness * challenge)
        .collect()
}

/// Check that `M(response) == image * challenge + commitment` row by row.
///
/// Collapses every failure mode — length mismatch, a malformed relation, an
/// unassigned element variable, or an outright wrong response — to `false`.
/// Point comparisons are constant-time; the early-return on a length
/// mismatch is on public, not secret, data and leaks nothing a verifier
/// doesn't already know.
pub fn verify(
    relation: &LinearRelation,
    challenge: &Scalar,
    commitment: &[RistrettoPoint],
    response: &[Scalar],
) -> bool {
    let Ok(image) = relation.image() else {
        return false;
    };
    if commitment.len() != image.len() || response.len() != relation.map().num_scalars() {
        return false;
    }
    let Ok(lhs) = relation.map().evaluate(response) else {
        return false;
    };
    lhs.iter()
        .zip(image.iter())
        .zip(commitment.iter())
        .all(|((l, img), com)| group::point_eq(l, &(img * challenge + com)))
}

/// Sample a uniformly random response vector, for use by the simulator.
pub fn simulate_response(
    num_scalars: usize,
    rng: &mut (impl RngCore + CryptoRng),
) -> Vec<Scalar> {
    (0..num_scalars).map(|_| group::scalar_random(rng)).collect()
}

/// Given a challenge and a (typically randomly sampled) response, compute
/// the unique commitment that makes the verification equation hold:
/// `commitment[i] = M(response)[i] - image[i] * challenge`.
///
/// Together with [`simulate_response`] this produces honest-verifier
/// zero-knowledge transcripts without knowledge of the witness.
pub fn simulate_commitment(
    relation: &LinearRelation,
    challenge: &Scalar,
    response: &[Scalar],
) -> Result<Vec<RistrettoPoint>, Error> {
    let image = relation.image()?;
    let lhs = relation.map().evaluate(response)?;
    Ok(lhs
        .iter()
        .zip(image.iter())
        .map(|(l, img)| l - img * challenge)
        .collect())
}

/// Produce a full `(commitment, challenge, response)` transcript without a
/// witness, sampling both the challenge and the response at random.
pub fn simulate_transcript(
    relation: &LinearRelation,
    rng: &mut (impl RngCore + CryptoRng),
) -> Result<(Vec<RistrettoPoint>, Scalar, Vec<Scalar>), Error> {
    let challenge = group::scalar_random(rng);
    let response = simulate_response(relation.map().num_scalars(), rng);
    let commitment = simulate_commitment(relation, &challenge, &response)?;
    Ok((commitment, challenge, response))
}
