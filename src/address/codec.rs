//! Checksummed text codec
//!
//! Layout of the decoded bytes:
//!
//! ```text
//! | prefix (2) | payload (32) | checksum (4) |
//! ```
//!
//! The checksum is the first four bytes of sha256d(prefix || payload) and the
//! whole buffer is rendered with the Bitcoin base58 alphabet.

use crate::error::{AddressError, Result};
use crate::utils::{base58_decode, base58_encode, sha256d_digest};

pub const PREFIX_LEN: usize = 2;
pub const PAYLOAD_LEN: usize = 32;
pub const CHECKSUM_LEN: usize = 4;
pub const DECODED_LEN: usize = PREFIX_LEN + PAYLOAD_LEN + CHECKSUM_LEN;

/// Text length of every address produced with a registered prefix.
pub const ADDRESS_STRING_LEN: usize = 52;

pub type Prefix = [u8; PREFIX_LEN];
pub type Payload = [u8; PAYLOAD_LEN];

fn checksum(prefix: &Prefix, payload: &Payload) -> [u8; CHECKSUM_LEN] {
    let mut buf = [0u8; PREFIX_LEN + PAYLOAD_LEN];
    buf[..PREFIX_LEN].copy_from_slice(prefix);
    buf[PREFIX_LEN..].copy_from_slice(payload);
    let digest = sha256d_digest(&buf);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

pub fn encode(prefix: &Prefix, payload: &Payload) -> String {
    let mut buf = [0u8; DECODED_LEN];
    buf[..PREFIX_LEN].copy_from_slice(prefix);
    buf[PREFIX_LEN..PREFIX_LEN + PAYLOAD_LEN].copy_from_slice(payload);
    buf[PREFIX_LEN + PAYLOAD_LEN..].copy_from_slice(&checksum(prefix, payload));
    base58_encode(&buf)
}

/// Decodes text into its prefix and payload after verifying the checksum.
///
/// The source length is not checked here; callers that know the canonical
/// length reject mismatches with [`AddressError::InvalidLength`] first.
pub fn decode(text: &str) -> Result<(Prefix, Payload)> {
    let raw = base58_decode(text)?;
    if raw.len() != DECODED_LEN {
        return Err(AddressError::InvalidFormat);
    }

    let mut prefix = [0u8; PREFIX_LEN];
    prefix.copy_from_slice(&raw[..PREFIX_LEN]);
    let mut payload = [0u8; PAYLOAD_LEN];
    payload.copy_from_slice(&raw[PREFIX_LEN..PREFIX_LEN + PAYLOAD_LEN]);

    if raw[PREFIX_LEN + PAYLOAD_LEN..] != checksum(&prefix, &payload) {
        return Err(AddressError::Checksum);
    }
    Ok((prefix, payload))
}

/// Rejects text whose length differs from [`ADDRESS_STRING_LEN`].
pub fn check_length(text: &str) -> Result<()> {
    if text.len() != ADDRESS_STRING_LEN {
        return Err(AddressError::InvalidLength);
    }
    Ok(())
}
