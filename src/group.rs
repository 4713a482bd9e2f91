//! Thin adapter over the Ristretto255 group primitives (spec component A).
//!
//! Everything in this module is a direct pass-through to `curve25519-dalek`;
//! it exists to give the rest of the crate a single place that states the
//! contract spec.md section 4.1 requires (canonical encode/decode, wide
//! reduction, constant-time equality) rather than scattering `dalek` calls
//! with ad-hoc error handling across the engine.

use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::Identity;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;

use crate::errors::Error;

/// Sample a scalar uniformly at random from Z/lZ.
pub fn scalar_random(rng: &mut (impl RngCore + CryptoRng)) -> Scalar {
    Scalar::random(rng)
}

/// Reduce a 64-byte wide value modulo the group order l.
///
/// Used by the Fiat-Shamir transform to turn a 64-byte hash output into a
/// uniformly-distributed scalar (spec section 4.5.4).
pub fn scalar_reduce(wide: &[u8; 64]) -> Scalar {
    Scalar::from_bytes_mod_order_wide(wide)
}

/// Multiply the fixed Ristretto255 generator by a scalar.
pub fn point_base_mul(scalar: &Scalar) -> RistrettoPoint {
    RISTRETTO_BASEPOINT_POINT * scalar
}

/// Decode a 32-byte string into a canonical Ristretto255 point.
///
/// Rejects any non-canonical encoding. The identity point's encoding
/// (32 zero bytes) is a valid input and decodes to [`RistrettoPoint::identity`].
pub fn point_decode(bytes: &[u8; 32]) -> Result<RistrettoPoint, Error> {
    CompressedRistretto(*bytes)
        .decompress()
        .ok_or(Error::InvalidPoint)
}

/// Encode a point into its canonical 32-byte representation.
pub fn point_encode(point: &RistrettoPoint) -> [u8; 32] {
    point.compress().to_bytes()
}

/// Constant-time point equality.
pub fn point_eq(a: &RistrettoPoint, b: &RistrettoPoint) -> bool {
    a.compress().ct_eq(&b.compress()).into()
}

/// Constant-time scalar equality.
pub fn scalar_eq(a: &Scalar, b: &Scalar) -> bool {
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn identity_round_trips() {
        let identity = RistrettoPoint::identity();
        let bytes = point_encode(&identity);
        assert_eq!(bytes, [0u8; 32]);
        let decoded = point_decode(&bytes).unwrap();
        assert!(point_eq(&identity, &decoded));
    }

    #[test]
    fn non_canonical_encoding_is_rejected() {
        // 2^255 - 19 + 1 .. is outside the canonical range for field elements;
        // all-0xFF is a simple non-canonical string.
        let bytes = [0xFFu8; 32];
        assert!(point_decode(&bytes).is_err());
    }

    #[test]
    fn base_mul_matches_generator_times_scalar() {
        let mut rng = OsRng;
        let x = scalar_random(&mut rng);
        let expected = RISTRETTO_BASEPOINT_POINT * x;
        assert!(point_eq(&point_base_mul(&x), &expected));
    }

    #[test]
    fn wide_reduce_is_deterministic() {
        let wide = [7u8; 64];
        assert_eq!(scalar_reduce(&wide), scalar_reduce(&wide));
    }
}
