//! Wallet and ledger-node collaborators
//!
//! `client` defines the narrow interfaces addresses are passed through;
//! `store` is the embedded Sled implementation used by the CLI.

pub mod client;
pub mod store;

pub use client::{AddressFilter, BalanceSource, WalletClient};
pub use store::AddressStore;
