use crate::address::codec::{self, Payload, PAYLOAD_LEN};
use crate::address::kind::{lookup_prefix, AddressKind, Polarity};
use crate::error::{AddressError, Result};
use std::fmt;
use std::str::FromStr;

/// A typed 32-byte address.
///
/// The text form is computed on every `Display` and never stored.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    kind: AddressKind,
    payload: Payload,
}

impl Address {
    pub fn new(kind: AddressKind, payload: Payload) -> Address {
        Address { kind, payload }
    }

    /// An all-zero payload of the given kind. Still a valid, encodable address.
    pub fn zeroed(kind: AddressKind) -> Address {
        Address::new(kind, [0u8; PAYLOAD_LEN])
    }

    pub fn from_slice(kind: AddressKind, payload: &[u8]) -> Result<Address> {
        let payload: Payload = payload
            .try_into()
            .map_err(|_| AddressError::InvalidLength)?;
        Ok(Address::new(kind, payload))
    }

    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn is_public(&self) -> bool {
        self.kind.is_public()
    }

    pub fn is_private(&self) -> bool {
        self.kind.is_private()
    }

    /// Two-character text prefix, e.g. `FA`.
    pub fn prefix_str(&self) -> &'static str {
        self.kind.prefix_str()
    }

    /// Parses any registered address kind.
    pub fn parse_any(text: &str) -> Result<Address> {
        let (prefix, payload) = decode_checked(text)?;
        let info = lookup_prefix(&prefix).ok_or(AddressError::UnrecognizedPrefix)?;
        log::debug!("Parsed {} address", info.prefix_str);
        Ok(Address::new(info.kind, payload))
    }

    pub fn parse_public(text: &str) -> Result<Address> {
        Self::parse_polarity(text, Polarity::Public)
    }

    pub fn parse_private(text: &str) -> Result<Address> {
        Self::parse_polarity(text, Polarity::Private)
    }

    fn parse_polarity(text: &str, polarity: Polarity) -> Result<Address> {
        let address = Self::parse_any(text)?;
        if address.kind.polarity() != polarity {
            return Err(AddressError::InvalidPrefix);
        }
        Ok(address)
    }

    /// Parses an address that must be exactly `kind`. Unknown prefixes are
    /// reported as `InvalidPrefix` since only one prefix is acceptable.
    pub fn parse_as_kind(text: &str, kind: AddressKind) -> Result<Address> {
        let (prefix, payload) = decode_checked(text)?;
        if prefix != kind.prefix() {
            return Err(AddressError::InvalidPrefix);
        }
        Ok(Address::new(kind, payload))
    }
}

// length, then format, then checksum
fn decode_checked(text: &str) -> Result<(codec::Prefix, Payload)> {
    codec::check_length(text)?;
    codec::decode(text)
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::encode(&self.kind.prefix(), &self.payload))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Address");
        s.field("kind", &self.kind);
        if self.is_public() {
            s.field("address", &self.to_string());
        } else {
            s.field("address", &"<redacted>");
        }
        s.finish()
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        Address::parse_any(s)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{EC_ADDRESS, ES_ADDRESS, FA_ADDRESS, FS_ADDRESS};

    const ALL: [&str; 4] = [FA_ADDRESS, FS_ADDRESS, EC_ADDRESS, ES_ADDRESS];

    fn with_last_char(text: &str, c: char) -> String {
        let mut out = text[..text.len() - 1].to_string();
        out.push(c);
        out
    }

    #[test]
    fn test_parse_any_round_trips_text() {
        for text in ALL {
            let address = Address::parse_any(text).unwrap();
            assert_eq!(address.to_string(), text);
            assert_eq!(&text[..2], address.prefix_str());
        }
    }

    #[test]
    fn test_parse_public_and_private() {
        for text in ALL {
            let private = text.as_bytes()[1] == b's';
            let public = Address::parse_public(text);
            let secret = Address::parse_private(text);
            if private {
                assert_eq!(public, Err(AddressError::InvalidPrefix));
                assert_eq!(secret.unwrap().to_string(), text);
            } else {
                assert_eq!(secret, Err(AddressError::InvalidPrefix));
                assert_eq!(public.unwrap().to_string(), text);
            }
        }
    }

    #[test]
    fn test_kind_exclusivity() {
        for text in ALL {
            let own = Address::parse_any(text).unwrap().kind();
            for kind in AddressKind::ALL {
                let result = Address::parse_as_kind(text, kind);
                if kind == own {
                    assert_eq!(result.unwrap().kind(), own);
                } else {
                    assert_eq!(result, Err(AddressError::InvalidPrefix));
                }
            }
        }
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            Address::parse_any("too short"),
            Err(AddressError::InvalidLength)
        );
        assert_eq!(
            Address::parse_public("too short"),
            Err(AddressError::InvalidLength)
        );
        assert_eq!(
            Address::parse_private("too short"),
            Err(AddressError::InvalidLength)
        );
    }

    #[test]
    fn test_length_checked_before_checksum() {
        let truncated = &FA_ADDRESS[..FA_ADDRESS.len() - 1];
        assert_eq!(
            Address::parse_any(truncated),
            Err(AddressError::InvalidLength)
        );
        let extended = format!("{FA_ADDRESS}Q");
        assert_eq!(
            Address::parse_any(&extended),
            Err(AddressError::InvalidLength)
        );
    }

    #[test]
    fn test_unrecognized_prefix() {
        let fa = Address::parse_any(FA_ADDRESS).unwrap();
        let text = codec::encode(&[0x50, 0x50], fa.payload());
        assert_eq!(
            Address::parse_any(&text),
            Err(AddressError::UnrecognizedPrefix)
        );
        assert_eq!(
            Address::parse_public(&text),
            Err(AddressError::UnrecognizedPrefix)
        );
        assert_eq!(
            Address::parse_private(&text),
            Err(AddressError::UnrecognizedPrefix)
        );
        assert_eq!(
            Address::parse_as_kind(&text, AddressKind::PublicLedger),
            Err(AddressError::InvalidPrefix)
        );
    }

    #[test]
    fn test_checksum_and_symbol_errors() {
        assert_eq!(
            Address::parse_any(&with_last_char(FA_ADDRESS, 'e')),
            Err(AddressError::Checksum)
        );
        assert_eq!(
            Address::parse_any(&with_last_char(FA_ADDRESS, '0')),
            Err(AddressError::InvalidFormat)
        );
    }

    #[test]
    fn test_checksum_reported_before_kind() {
        let bad = with_last_char(FS_ADDRESS, 'x');
        assert_eq!(
            Address::parse_as_kind(&bad, AddressKind::PublicLedger),
            Err(AddressError::Checksum)
        );
    }

    #[test]
    fn test_single_character_corruption_never_succeeds() {
        const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
        let original = Address::parse_any(FA_ADDRESS).unwrap();
        for pos in 0..FA_ADDRESS.len() {
            for c in ALPHABET.chars() {
                if FA_ADDRESS.as_bytes()[pos] == c as u8 {
                    continue;
                }
                let mut corrupted = FA_ADDRESS.to_string();
                corrupted.replace_range(pos..pos + 1, &c.to_string());
                match Address::parse_any(&corrupted) {
                    Ok(parsed) => panic!("{corrupted} parsed as {parsed:?}, was {original:?}"),
                    Err(e) => assert!(matches!(
                        e,
                        AddressError::Checksum
                            | AddressError::InvalidFormat
                            | AddressError::UnrecognizedPrefix
                    )),
                }
            }
        }
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        assert_eq!(
            Address::from_slice(AddressKind::PublicCredit, &[0u8; 31]),
            Err(AddressError::InvalidLength)
        );
        let address = Address::from_slice(AddressKind::PublicCredit, &[7u8; 32]).unwrap();
        assert_eq!(address.payload(), &[7u8; 32]);
    }

    #[test]
    fn test_zeroed_round_trips() {
        for kind in AddressKind::ALL {
            let zero = Address::zeroed(kind);
            assert_eq!(Address::parse_as_kind(&zero.to_string(), kind).unwrap(), zero);
        }
    }

    #[test]
    fn test_debug_redacts_private() {
        let fs = Address::parse_any(FS_ADDRESS).unwrap();
        assert!(!format!("{fs:?}").contains(FS_ADDRESS));
        let fa = Address::parse_any(FA_ADDRESS).unwrap();
        assert!(format!("{fa:?}").contains(FA_ADDRESS));
    }
}
