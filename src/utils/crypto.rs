use ring::digest::{Context, SHA256};
use ring::rand::{SecureRandom, SystemRandom};
use ring::signature::{Ed25519KeyPair, KeyPair};

use crate::error::{AddressError, Result};

pub fn sha256_digest(data: &[u8]) -> [u8; 32] {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    let mut out = [0u8; 32];
    out.copy_from_slice(digest.as_ref());
    out
}

/// SHA-256 applied twice, used for checksums and RCD hashes.
pub fn sha256d_digest(data: &[u8]) -> [u8; 32] {
    let first = sha256_digest(data);
    sha256_digest(&first)
}

pub fn base58_encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Decodes base58 text. A symbol outside the alphabet yields no bytes at all,
/// which the codec reports as a format error.
pub fn base58_decode(data: &str) -> Result<Vec<u8>> {
    bs58::decode(data).into_vec().map_err(|e| {
        log::debug!("Invalid base58 encoding: {e}");
        AddressError::InvalidFormat
    })
}

/// Fills a 32-byte buffer from the system CSPRNG.
pub fn random_bytes_32() -> Result<[u8; 32]> {
    let rng = SystemRandom::new();
    let mut buf = [0u8; 32];
    rng.fill(&mut buf)
        .map_err(|e| AddressError::Crypto(format!("Failed to draw random bytes: {e}")))?;
    Ok(buf)
}

/// Ed25519 public key for a 32-byte seed.
pub fn ed25519_public_key(seed: &[u8; 32]) -> [u8; 32] {
    // ring only rejects seeds of the wrong length, which the array type rules out
    let key_pair = Ed25519KeyPair::from_seed_unchecked(seed)
        .expect("32-byte ed25519 seed is always accepted");
    let mut public_key = [0u8; 32];
    public_key.copy_from_slice(key_pair.public_key().as_ref());
    public_key
}
