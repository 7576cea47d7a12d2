//! Raw-byte storage adapters
//!
//! A storage column holds only the 32-byte payload; the kind comes from the
//! column's declared type, i.e. from the address being scanned into.

use crate::address::codec::{Payload, PAYLOAD_LEN};
use crate::address::kind::AddressKind;
use crate::address::Address;
use crate::error::{AddressError, Result};

/// A dynamically typed value read from a storage column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl ColumnValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnValue::Null => "null",
            ColumnValue::Integer(_) => "integer",
            ColumnValue::Real(_) => "real",
            ColumnValue::Text(_) => "text",
            ColumnValue::Bytes(_) => "bytes",
        }
    }

    /// The byte view, if this value is a byte sequence.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ColumnValue::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl From<Vec<u8>> for ColumnValue {
    fn from(bytes: Vec<u8>) -> Self {
        ColumnValue::Bytes(bytes)
    }
}

impl From<&[u8]> for ColumnValue {
    fn from(bytes: &[u8]) -> Self {
        ColumnValue::Bytes(bytes.to_vec())
    }
}

impl From<sled::IVec> for ColumnValue {
    fn from(bytes: sled::IVec) -> Self {
        ColumnValue::Bytes(bytes.to_vec())
    }
}

impl From<i64> for ColumnValue {
    fn from(value: i64) -> Self {
        ColumnValue::Integer(value)
    }
}

impl From<f64> for ColumnValue {
    fn from(value: f64) -> Self {
        ColumnValue::Real(value)
    }
}

impl From<String> for ColumnValue {
    fn from(value: String) -> Self {
        ColumnValue::Text(value)
    }
}

impl From<&str> for ColumnValue {
    fn from(value: &str) -> Self {
        ColumnValue::Text(value.to_string())
    }
}

fn payload_from_column(value: &ColumnValue) -> Result<Payload> {
    let bytes = value
        .as_bytes()
        .ok_or_else(|| AddressError::InvalidType(value.type_name().to_string()))?;
    if bytes.len() != PAYLOAD_LEN {
        return Err(AddressError::InvalidLength);
    }
    let mut payload = [0u8; PAYLOAD_LEN];
    payload.copy_from_slice(bytes);
    Ok(payload)
}

impl Address {
    /// Overwrites the payload with a 32-byte column value. Either all bytes
    /// are written or the address is unchanged.
    pub fn scan(&mut self, value: &ColumnValue) -> Result<()> {
        let payload = payload_from_column(value)?;
        *self = Address::new(self.kind(), payload);
        Ok(())
    }

    pub fn from_column(kind: AddressKind, value: &ColumnValue) -> Result<Address> {
        Ok(Address::new(kind, payload_from_column(value)?))
    }

    pub fn value(&self) -> ColumnValue {
        ColumnValue::Bytes(self.payload().to_vec())
    }

    pub fn to_raw_bytes(&self) -> Payload {
        *self.payload()
    }
}
