//! Private to public key derivation
//!
//! Both address classes use Ed25519 keys expanded from the 32-byte seed. The
//! credit public address is the raw public key; the ledger public address is
//! the sha256d of the type 1 redeem condition (RCD): `0x01 || public key`.

use crate::address::codec::{Payload, PAYLOAD_LEN};
use crate::address::kind::AddressKind;
use crate::address::Address;
use crate::error::{AddressError, Result};
use crate::utils::{ed25519_public_key, random_bytes_32, sha256d_digest};
use zeroize::Zeroize;

pub const RCD_TYPE_1: u8 = 0x01;
pub const RCD_LEN: usize = 1 + PAYLOAD_LEN;

pub type Rcd = [u8; RCD_LEN];

pub fn rcd_from_public_key(public_key: &Payload) -> Rcd {
    let mut rcd = [0u8; RCD_LEN];
    rcd[0] = RCD_TYPE_1;
    rcd[1..].copy_from_slice(public_key);
    rcd
}

pub fn private_ledger_to_public(seed: &Payload) -> Payload {
    let rcd = rcd_from_public_key(&ed25519_public_key(seed));
    sha256d_digest(&rcd)
}

pub fn private_credit_to_public(seed: &Payload) -> Payload {
    ed25519_public_key(seed)
}

/// Draws a fresh seed for a private kind.
pub fn generate_private(kind: AddressKind) -> Result<Address> {
    if !kind.is_private() {
        return Err(AddressError::InvalidPrefix);
    }
    let mut seed = random_bytes_32()?;
    let address = Address::new(kind, seed);
    seed.zeroize();
    log::debug!("Generated new {kind} address");
    Ok(address)
}

impl Address {
    /// The public counterpart. Public addresses return themselves.
    pub fn public_address(&self) -> Address {
        match self.kind() {
            AddressKind::PrivateLedgerSeed => Address::new(
                AddressKind::PublicLedger,
                private_ledger_to_public(self.payload()),
            ),
            AddressKind::PrivateCreditSeed => Address::new(
                AddressKind::PublicCredit,
                private_credit_to_public(self.payload()),
            ),
            AddressKind::PublicLedger | AddressKind::PublicCredit => *self,
        }
    }

    /// Ed25519 public key. Not recoverable from a public ledger address,
    /// which only carries the RCD hash.
    pub fn public_key(&self) -> Option<Payload> {
        match self.kind() {
            AddressKind::PrivateLedgerSeed | AddressKind::PrivateCreditSeed => {
                Some(ed25519_public_key(self.payload()))
            }
            AddressKind::PublicCredit => Some(*self.payload()),
            AddressKind::PublicLedger => None,
        }
    }

    pub fn rcd(&self) -> Option<Rcd> {
        match self.kind() {
            AddressKind::PrivateLedgerSeed => self.public_key().map(|k| rcd_from_public_key(&k)),
            _ => None,
        }
    }

    pub fn rcd_hash(&self) -> Option<Payload> {
        match self.kind() {
            AddressKind::PublicLedger => Some(*self.payload()),
            AddressKind::PrivateLedgerSeed => Some(private_ledger_to_public(self.payload())),
            _ => None,
        }
    }
}
