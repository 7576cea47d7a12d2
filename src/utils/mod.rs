//! Utility functions and helpers
//!
//! Hashing, base58 and Ed25519 primitives shared by the address codec and
//! key derivation.

pub mod crypto;

pub use crypto::{
    base58_decode, base58_encode, ed25519_public_key, random_bytes_32, sha256_digest,
    sha256d_digest,
};
