//! Wire encoding for proofs (spec component F).
//!
//! A serialized proof is exactly `commitment || response`: `m` canonical
//! 32-byte Ristretto255 points followed by `n` 32-byte scalar slots (copied
//! verbatim, no canonicality check), no length prefix and no version byte.
//! The lengths `m` and `n` are implied by the relation the proof is checked
//! against, so a verifier must already know which relation it is verifying
//! before it can parse a proof.

use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;

use crate::errors::Error;
use crate::group;

const POINT_BYTES: usize = 32;
const SCALAR_BYTES: usize = 32;

/// The exact byte length of a serialized proof for `m` commitment elements
/// and `n` response scalars.
pub fn proof_size(num_elements: usize, num_scalars: usize) -> usize {
    num_elements * POINT_BYTES + num_scalars * SCALAR_BYTES
}

/// Serialize `m` points, one after another, with no separator.
pub fn serialize_points(points: &[RistrettoPoint]) -> Vec<u8> {
    let mut out = Vec::with_capacity(points.len() * POINT_BYTES);
    for point in points {
        out.extend_from_slice(&group::point_encode(point));
    }
    out
}

/// Serialize `n` scalars, one after another, with no separator.
pub fn serialize_scalars(scalars: &[Scalar]) -> Vec<u8> {
    let mut out = Vec::with_capacity(scalars.len() * SCALAR_BYTES);
    for scalar in scalars {
        out.extend_from_slice(scalar.as_bytes());
    }
    out
}

/// Serialize a full proof: `commitment || response`.
pub fn serialize_proof(commitment: &[RistrettoPoint], response: &[Scalar]) -> Vec<u8> {
    let mut out = serialize_points(commitment);
    out.extend_from_slice(&serialize_scalars(response));
    out
}

/// Parse `count` consecutive 32-byte canonical points out of `bytes`.
///
/// Fails with [`Error::InvalidPoint`] on the first non-canonical encoding,
/// before any later point is even read.
pub fn deserialize_points(bytes: &[u8], count: usize) -> Result<Vec<RistrettoPoint>, Error> {
    bytes
        .chunks_exact(POINT_BYTES)
        .take(count)
        .map(|chunk| {
            let array: [u8; POINT_BYTES] = chunk.try_into().expect("chunks_exact(32)");
            group::point_decode(&array)
        })
        .collect()
}

/// Parse `count` consecutive 32-byte scalars out of `bytes`.
///
/// Scalars are copied verbatim, with no canonicality check: the group
/// primitive guarantees canonicality at creation, and reduction on use is the
/// responsibility of later operations (spec section 4.6). Unlike
/// [`deserialize_points`], this cannot fail on well-sized input.
pub fn deserialize_scalars(bytes: &[u8], count: usize) -> Result<Vec<Scalar>, Error> {
    Ok(bytes
        .chunks_exact(SCALAR_BYTES)
        .take(count)
        .map(|chunk| {
            let array: [u8; SCALAR_BYTES] = chunk.try_into().expect("chunks_exact(32)");
            Scalar::from_bits(array)
        })
        .collect())
}

/// Parse a full proof against the expected `(num_elements, num_scalars)`
/// shape, rejecting anything whose length does not match exactly.
pub fn deserialize_proof(
    bytes: &[u8],
    num_elements: usize,
    num_scalars: usize,
) -> Result<(Vec<RistrettoPoint>, Vec<Scalar>), Error> {
    if bytes.len() != proof_size(num_elements, num_scalars) {
        return Err(Error::InvalidLength);
    }
    let split = num_elements * POINT_BYTES;
    let commitment = deserialize_points(&bytes[..split], num_elements)?;
    let response = deserialize_scalars(&bytes[split..], num_scalars)?;
    Ok((commitment, response))
}
