// -*- mode: rust; -*-
//
// This file is part of ristretto255.
// See LICENSE for licensing information.

#![deny(missing_docs)]
#![doc(html_root_url = "https://docs.rs/ristretto255/0.1.0")]

//! # ristretto255
//!
//! **A pure-Rust implementation of the ristretto255 prime-order group,
//! as specified in [RFC 9496][rfc9496], built on the twisted Edwards
//! form of Curve25519.**
//!
//! Ristretto constructs a prime-order group from a non-prime-order
//! Edwards curve by quotienting out the curve's cofactor, giving
//! higher-level protocols (zero-knowledge proofs, PAKEs, VRFs,
//! signatures) the abstraction they actually need: a group of prime
//! order \\(\ell\\), with canonical 32-byte encodings and no torsion
//! footguns.
//!
//! This crate exposes two types:
//!
//! * [`ristretto::RistrettoPoint`], an element of the group, together
//!   with its wire format [`ristretto::CompressedRistretto`];
//! * [`scalar::Scalar`], an integer modulo the group order \\(\ell\\).
//!
//! All operations on secret data are constant-time: conditional logic
//! is expressed with the [`subtle`] crate's `Choice` masks, table
//! lookups read every entry, and iteration counts depend only on input
//! lengths.  Entry points that deliberately trade this away for speed
//! on public inputs are named `vartime_*`.
//!
//! # Example
//!
//! ```
//! use ristretto255::constants::RISTRETTO_BASEPOINT_POINT;
//! use ristretto255::ristretto::{CompressedRistretto, RistrettoPoint};
//! use ristretto255::scalar::Scalar;
//!
//! // A point, its encoding, and back again.
//! let P = RistrettoPoint::mul_base(&Scalar::from(87u64));
//! let bytes: [u8; 32] = P.compress().to_bytes();
//! let Q = CompressedRistretto(bytes).decompress().unwrap();
//! assert_eq!(P, Q);
//! ```
//!
//! # Features
//!
//! * `zeroize` (default): wipe secrets from memory on drop request.
//! * `rand_core`: `Scalar::random` and `RistrettoPoint::random`.
//! * `digest`: hash-to-group and hash-to-scalar over any 512-bit digest.
//! * `serde`: serialization of scalars and (compressed) points.
//!
//! [rfc9496]: https://www.rfc-editor.org/rfc/rfc9496

//------------------------------------------------------------------------
// External dependencies:
//------------------------------------------------------------------------

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

//------------------------------------------------------------------------
// ristretto255 public modules
//------------------------------------------------------------------------

// Scalar arithmetic mod l = 2^252 + ..., the order of the group
pub mod scalar;

// Ristretto
pub mod ristretto;

// Useful constants, like the Ristretto basepoint
pub mod constants;

// External (and internal) traits.
pub mod traits;

// Errors for byte decoding.
pub mod errors;

//------------------------------------------------------------------------
// ristretto255 internal modules
//------------------------------------------------------------------------

// Finite field arithmetic mod p = 2^255 - 19
mod field;

// Unpacked scalar arithmetic backend
mod scalar52;

// Internal curve models which are not part of the public API.
mod curve_models;

// Arithmetic on the (internal) Edwards form of Curve25519
mod edwards;

// Window lookup tables for scalar multiplication
mod window;

// Scalar multiplication strategies
mod scalar_mul;
