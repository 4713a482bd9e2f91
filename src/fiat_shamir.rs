//! Non-interactive wrapper: turns the interactive commit/challenge/response
//! engine into `prove`/`verify` via Fiat-Shamir (spec section 4.5).
//!
//! The challenge is derived as `label || public_inputs || commitment ||
//! message`, exactly the formula in spec section 4.5.4 — no components
//! beyond the four it names, so that two implementations agreeing on the
//! label, the public-input ordering, and the point encoding interoperate
//! (spec section 6).

use curve25519_dalek::scalar::Scalar;
use rand::{CryptoRng, RngCore};

use crate::codec::Codec;
use crate::engine;
use crate::errors::Error;
use crate::linear_relation::LinearRelation;
use crate::serialization;

/// A non-interactive Sigma protocol instance bound to one relation and one
/// domain-separation label.
///
/// Constructing an instance absorbs the label and the public inputs once;
/// every subsequent `prove`/`verify` call replays that prefix by cloning the
/// primed codec, then diverges on the commitment and (optionally) a
/// per-proof message.
pub struct NISigmaProtocol<C: Codec> {
    relation: LinearRelation,
    primed_codec: C,
}

impl<C: Codec> NISigmaProtocol<C> {
    /// Build an instance for `relation`, under `label`, with `public_inputs`
    /// absorbed as context (e.g. the relation's public points, already
    /// encoded by the caller in a fixed order).
    pub fn new(label: &[u8], relation: LinearRelation, public_inputs: &[u8]) -> Self {
        let mut codec = C::new(label);
        codec.prover_message(public_inputs);
        Self {
            relation,
            primed_codec: codec,
        }
    }

    pub fn relation(&self) -> &LinearRelation {
        &self.relation
    }

    /// Produce a non-interactive proof over `message` (typically empty;
    /// non-empty binds the proof to associated data, e.g. a signed
    /// document).
    pub fn prove(
        &self,
        witness: &[Scalar],
        message: &[u8],
        rng: &mut (impl RngCore + CryptoRng),
    ) -> Result<Vec<u8>, Error> {
        let (state, commitment) = engine::prover_commit(&self.relation, witness, rng)?;
        let mut codec = self.primed_codec.clone();
        codec.prover_message(&serialization::serialize_points(&commitment));
        if !message.is_empty() {
            codec.prover_message(message);
        }
        let challenge = codec.verifier_challenge();
        let response = engine::prover_response(state, &challenge);
        Ok(serialization::serialize_proof(&commitment, &response))
    }

    /// Verify a proof produced by [`NISigmaProtocol::prove`] for the same
    /// relation, label, public inputs, and message.
    ///
    /// Returns `false` on any failure: malformed length, a non-canonical
    /// point or scalar, an unassigned image variable, or a genuinely wrong
    /// proof. The caller cannot distinguish these cases from the boolean
    /// alone (spec section 7).
    pub fn verify(&self, proof: &[u8], message: &[u8]) -> bool {
        let num_elements = self.relation.map().num_constraints();
        let num_scalars = self.relation.map().num_scalars();
        let Ok((commitment, response)) =
            serialization::deserialize_proof(proof, num_elements, num_scalars)
        else {
            return false;
        };
        let mut codec = self.primed_codec.clone();
        codec.prover_message(&serialization::serialize_points(&commitment));
        if !message.is_empty() {
            codec.prover_message(message);
        }
        let challenge = codec.verifier_challenge();
        engine::verify(&self.relation, &challenge, &commitment, &response)
    }
}
