//! Concrete protocol wrappers (spec component G): the relation-builder
//! boilerplate a caller would otherwise have to write by hand for each of
//! the three named protocols.
//!
//! Each submodule exposes a `prove`/`verify` pair (and, where the original
//! C reference implementation separates it out, a standalone helper such as
//! [`pedersen::commit`]) built on top of [`crate::fiat_shamir::NISigmaProtocol`]
//! and [`crate::linear_relation::LinearRelation`]. None of them expose their
//! relation shape as public API beyond what is needed to prove/verify: a
//! caller who wants direct access to the relation builder should use
//! [`crate::linear_relation`] and [`crate::fiat_shamir`] directly.

pub mod dleq;
pub mod pedersen;
pub mod schnorr;
