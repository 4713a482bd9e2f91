//
// Authors:
// - Nugzari Uzoevi <nougzarm@icloud.com>
// - Michele Orrù <m@orru.net>
// - Lénaïck Gouriou <lg@leanear.io>

//! Non-interactive Sigma protocols (Schnorr, DLEQ, Pedersen openings) over
//! Ristretto255.
//!
//! The crate is organized around a single generic core — a sparse
//! [`linear_relation::LinearRelation`] together with the
//! [`engine`] that can commit/respond/verify/simulate over it — and three
//! thin, concrete wrappers in [`protocols`] that build the relation for a
//! named statement and hand it to [`fiat_shamir::NISigmaProtocol`] for the
//! non-interactive `prove`/`verify` pair. Unlike some Sigma-protocol
//! crates, this one does not generalize over the group: Ristretto255 is
//! baked in throughout (see DESIGN.md for why).

#![deny(unused_variables)]
#![deny(unused_mut)]

pub mod codec;
pub mod duplex_sponge;
pub mod engine;
pub mod errors;
pub mod fiat_shamir;
pub mod group;
pub mod linear_relation;
pub mod protocols;
pub mod serialization;

pub use errors::Error;
pub use linear_relation::LinearRelation;
