//! Error handling for address operations
//!
//! Every codec, factory and adapter returns one of these variants instead of
//! panicking. The first six variants are the address validation taxonomy; the
//! rest come from the local store and the crypto backend.

use std::fmt;

/// Result type alias for address operations
pub type Result<T> = std::result::Result<T, AddressError>;

/// Error types for address parsing, derivation and storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Input is not the expected text or byte-sequence scalar.
    /// Carries the kind of value that was found, e.g. `object`.
    InvalidType(String),
    /// Source text or byte buffer has the wrong length
    InvalidLength,
    /// Decoded byte length is not prefix + payload + checksum
    InvalidFormat,
    /// Trailing checksum bytes do not match
    Checksum,
    /// Prefix is known but not the one requested
    InvalidPrefix,
    /// Prefix is not in the registry
    UnrecognizedPrefix,
    /// Cryptographic backend errors
    Crypto(String),
    /// Database-related errors
    Database(String),
    /// Serialization/deserialization errors
    Serialization(String),
    /// Address store errors
    Wallet(String),
    /// File I/O errors
    Io(String),
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::InvalidType(found) if found.is_empty() => write!(f, "invalid type"),
            AddressError::InvalidType(found) => write!(f, "invalid type: {found}"),
            AddressError::InvalidLength => write!(f, "invalid length"),
            AddressError::InvalidFormat => {
                write!(f, "invalid format: version and/or checksum bytes missing")
            }
            AddressError::Checksum => write!(f, "checksum error"),
            AddressError::InvalidPrefix => write!(f, "invalid prefix"),
            AddressError::UnrecognizedPrefix => write!(f, "unrecognized prefix"),
            AddressError::Crypto(msg) => write!(f, "Cryptographic error: {msg}"),
            AddressError::Database(msg) => write!(f, "Database error: {msg}"),
            AddressError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            AddressError::Wallet(msg) => write!(f, "Wallet error: {msg}"),
            AddressError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for AddressError {}

impl From<std::io::Error> for AddressError {
    fn from(err: std::io::Error) -> Self {
        AddressError::Io(err.to_string())
    }
}

impl From<sled::Error> for AddressError {
    fn from(err: sled::Error) -> Self {
        AddressError::Database(err.to_string())
    }
}

impl From<bincode::error::EncodeError> for AddressError {
    fn from(err: bincode::error::EncodeError) -> Self {
        AddressError::Serialization(err.to_string())
    }
}

impl From<bincode::error::DecodeError> for AddressError {
    fn from(err: bincode::error::DecodeError) -> Self {
        AddressError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for AddressError {
    fn from(err: serde_json::Error) -> Self {
        AddressError::Serialization(err.to_string())
    }
}
