//! Prefix registry
//!
//! Each address kind owns one two-byte prefix. The table below is the only
//! place kind metadata lives; every lookup in the crate goes through it.

use crate::address::codec::Prefix;
use crate::error::{AddressError, Result};
use std::fmt;
use std::str::FromStr;

/// The four address kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressKind {
    /// `FA`: hash of the redeem condition for a ledger key
    PublicLedger,
    /// `Fs`: ledger signing seed
    PrivateLedgerSeed,
    /// `EC`: credit public key
    PublicCredit,
    /// `Es`: credit signing seed
    PrivateCreditSeed,
}

/// Whether an address can be shared or carries a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Public,
    Private,
}

/// Which half of the ledger an address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressClass {
    Ledger,
    Credit,
}

/// Registry row.
#[derive(Debug)]
pub struct KindInfo {
    pub kind: AddressKind,
    pub prefix: Prefix,
    pub prefix_str: &'static str,
    pub polarity: Polarity,
    pub class: AddressClass,
}

static REGISTRY: [KindInfo; 4] = [
    KindInfo {
        kind: AddressKind::PublicLedger,
        prefix: [0x5f, 0xb1],
        prefix_str: "FA",
        polarity: Polarity::Public,
        class: AddressClass::Ledger,
    },
    KindInfo {
        kind: AddressKind::PrivateLedgerSeed,
        prefix: [0x64, 0x78],
        prefix_str: "Fs",
        polarity: Polarity::Private,
        class: AddressClass::Ledger,
    },
    KindInfo {
        kind: AddressKind::PublicCredit,
        prefix: [0x59, 0x2a],
        prefix_str: "EC",
        polarity: Polarity::Public,
        class: AddressClass::Credit,
    },
    KindInfo {
        kind: AddressKind::PrivateCreditSeed,
        prefix: [0x5d, 0xb6],
        prefix_str: "Es",
        polarity: Polarity::Private,
        class: AddressClass::Credit,
    },
];

/// Finds the registry row for a decoded prefix.
pub fn lookup_prefix(prefix: &Prefix) -> Option<&'static KindInfo> {
    REGISTRY.iter().find(|info| &info.prefix == prefix)
}

impl AddressKind {
    pub const ALL: [AddressKind; 4] = [
        AddressKind::PublicLedger,
        AddressKind::PrivateLedgerSeed,
        AddressKind::PublicCredit,
        AddressKind::PrivateCreditSeed,
    ];

    pub fn info(self) -> &'static KindInfo {
        // REGISTRY is ordered like the enum
        &REGISTRY[self as usize]
    }

    pub fn prefix(self) -> Prefix {
        self.info().prefix
    }

    pub fn prefix_str(self) -> &'static str {
        self.info().prefix_str
    }

    pub fn polarity(self) -> Polarity {
        self.info().polarity
    }

    pub fn class(self) -> AddressClass {
        self.info().class
    }

    pub fn is_public(self) -> bool {
        self.polarity() == Polarity::Public
    }

    pub fn is_private(self) -> bool {
        self.polarity() == Polarity::Private
    }

    /// The kind on the other side of the derivation relation.
    pub fn counterpart(self) -> AddressKind {
        match self {
            AddressKind::PublicLedger => AddressKind::PrivateLedgerSeed,
            AddressKind::PrivateLedgerSeed => AddressKind::PublicLedger,
            AddressKind::PublicCredit => AddressKind::PrivateCreditSeed,
            AddressKind::PrivateCreditSeed => AddressKind::PublicCredit,
        }
    }

    pub fn private_of(class: AddressClass) -> AddressKind {
        match class {
            AddressClass::Ledger => AddressKind::PrivateLedgerSeed,
            AddressClass::Credit => AddressKind::PrivateCreditSeed,
        }
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix_str())
    }
}

impl FromStr for AddressKind {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        REGISTRY
            .iter()
            .find(|info| info.prefix_str == s)
            .map(|info| info.kind)
            .ok_or(AddressError::UnrecognizedPrefix)
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Public => write!(f, "public"),
            Polarity::Private => write!(f, "private"),
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressClass::Ledger => write!(f, "ledger"),
            AddressClass::Credit => write!(f, "credit"),
        }
    }
}
