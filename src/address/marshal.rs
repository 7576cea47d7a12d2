//! JSON representation
//!
//! Addresses serialize as a plain JSON string holding the canonical text.
//! Untyped deserialization accepts any registered kind; `unmarshal_json`
//! targets the kind of an existing value and only overwrites it on success.

use crate::address::kind::AddressKind;
use crate::address::Address;
use crate::error::{AddressError, Result};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct AddressVisitor;

impl<'de> Visitor<'de> for AddressVisitor {
    type Value = Address;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a checksummed address string")
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Address::parse_any(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(AddressVisitor)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Address {
    /// Canonical text wrapped in JSON quotes.
    pub fn marshal_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Replaces `self` with the address in `data`, which must be a JSON string
    /// of the same kind as `self`. On error `self` is left untouched.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<()> {
        let value: Value = serde_json::from_slice(data)?;
        let text = match value {
            Value::String(text) => text,
            other => return Err(AddressError::InvalidType(json_kind(&other).to_string())),
        };
        let parsed = Address::parse_as_kind(&text, self.kind())?;
        *self = parsed;
        Ok(())
    }

    /// Parses JSON into a fresh address of `kind`.
    pub fn from_json(data: &[u8], kind: AddressKind) -> Result<Address> {
        let mut address = Address::zeroed(kind);
        address.unmarshal_json(data)?;
        Ok(address)
    }
}
