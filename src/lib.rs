//! XChaCha20-Poly1305 authenticated encryption, Ed25519 signatures, and a
//! Tink-style keyset envelope around both.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All components
//! are dependency-free, explicit in their semantics, and suitable for
//! security-critical code.
//!
//! # Module overview
//!
//! - `aead`
//!   XChaCha20-Poly1305 authenticated encryption with associated data.
//!
//! - `signatures`
//!   Digital signature schemes; currently Ed25519 (RFC 8032).
//!
//! - `hash`, `chacha`, `rng`
//!   The hash function, stream cipher, and CSPRNG the primitives above are
//!   built from.
//!
//! - `keys`
//!   Typed key and parameter objects — a [`keys::Variant`], an optional key
//!   id, and the output prefix derived from them, wrapped around each
//!   primitive's raw key material.
//!
//! - `keyset`
//!   Ordered collections of keys with a designated primary, and the
//!   validation rules a keyset must satisfy before it can back a wrapper.
//!
//! - `registry`
//!   Process-wide mapping from key type URLs to the parse/serialize
//!   functions that translate between wire key data and typed key objects.
//!
//! - `wrapper`
//!   Prefix-dispatched [`wrapper::Aead`], [`wrapper::PublicKeySign`], and
//!   [`wrapper::PublicKeyVerify`] primitives, built once from a validated
//!   keyset.
//!
//! - `templates`
//!   Named `(Parameters, Variant)` pairs for generating fresh keys without
//!   hand-assembling parameter objects.
//!
//! - `error`
//!   The crate-level [`error::Error`] aggregating every layer's error enum.
//!
//! # Design goals
//!
//! - No third-party dependencies
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Clear separation between cryptographic code and supporting utilities

mod chacha;
mod os;
mod utils;

pub mod aead;
pub mod error;
pub mod hash;
pub mod keys;
pub mod keyset;
pub mod registry;
pub mod rng;
pub mod signatures;
pub mod templates;
pub mod wrapper;
