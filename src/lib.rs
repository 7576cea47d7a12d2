//! # Ledger Address - Checksummed Address Codec and Key Derivation
//!
//! Human-readable, checksummed, type-tagged addresses for 32-byte keys and
//! hashes, plus deterministic derivation from private seeds to public
//! addresses.
//!
//! ## Address Kinds
//! - `FA` public ledger address: sha256d of the key's redeem condition
//! - `Fs` private ledger seed
//! - `EC` public credit address: the raw Ed25519 public key
//! - `Es` private credit seed
//!
//! ## Text Format
//! `base58(prefix[2] || payload[32] || checksum[4])`, where the checksum is
//! the first four bytes of sha256d(prefix || payload). Every registered
//! prefix yields a 52-character string.
//!
//! ## Modules
//! - `address/`: codec, prefix registry, value type, derivation, JSON and
//!   storage-column adapters
//! - `wallet/`: wallet and ledger-node interfaces plus a local Sled store
//! - `config/`: process settings
//! - `utils/`: hashing, base58 and Ed25519 primitives
//! - `cli/`: command-line interface
//!
//! All address operations are pure and need no locking. I/O only happens in
//! the wallet store.

pub mod address;
pub mod cli;
pub mod config;
pub mod error;
pub mod utils;
pub mod wallet;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use address::{
    generate_private, private_credit_to_public, private_ledger_to_public, Address, AddressClass,
    AddressKind, ColumnValue, Payload, Polarity, ADDRESS_STRING_LEN, PAYLOAD_LEN,
};
pub use cli::{Command, Opt};
pub use config::{Config, GLOBAL_CONFIG};
pub use error::{AddressError, Result};
pub use wallet::{AddressFilter, AddressStore, BalanceSource, WalletClient};
