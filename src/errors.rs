//! Error taxonomy for the Sigma engine and relation builder.
//!
//! `verify`-style entry points never return this type directly: they collapse
//! every variant to `false`, so that a verification outcome is not
//! distinguishable (to the caller) from a programmer error except by the
//! typed errors surfaced at construction time. See spec section 7.

use crate::linear_relation::GroupVar;
use thiserror::Error;

/// Errors surfaced by the relation builder and the low-level engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A relation is malformed: an empty equation, an out-of-range index, or
    /// a mismatch between the number of equations and the number of image
    /// variables.
    #[error("invalid relation")]
    InvalidRelation,

    /// A 32-byte string is not a canonical Ristretto255 encoding.
    #[error("invalid point encoding")]
    InvalidPoint,

    /// A serialized proof does not have the expected `32*(m+n)` length.
    #[error("invalid proof length")]
    InvalidLength,

    /// The underlying CSPRNG failed to produce nonces.
    #[error("random number generator failure")]
    RngFailure,

    /// All inputs were well-formed but the proof did not verify.
    #[error("verification failed")]
    VerificationFailed,

    /// A witness, nonce, or response vector did not match the relation's
    /// scalar count.
    #[error("witness or response length does not match the relation")]
    InvalidWitnessLength,

    /// An allocated element variable was read before it was assigned a
    /// concrete group element.
    #[error("group element variable {var:?} was never assigned")]
    UnassignedGroupVar { var: GroupVar },
}
