//! Address codec, prefix registry and key derivation
//!
//! Text flows through `codec` into a prefix and payload, `kind` resolves the
//! prefix, and the result is an [`Address`]. `derivation` maps private seeds
//! to their public addresses; `marshal` and `column` expose addresses to JSON
//! and storage boundaries.

#[allow(clippy::module_inception)]
pub mod address;
pub mod codec;
pub mod column;
pub mod derivation;
pub mod kind;
pub mod marshal;

pub use address::Address;
pub use codec::{Payload, Prefix, ADDRESS_STRING_LEN, PAYLOAD_LEN};
pub use column::ColumnValue;
pub use derivation::{
    generate_private, private_credit_to_public, private_ledger_to_public, Rcd, RCD_TYPE_1,
};
pub use kind::{lookup_prefix, AddressClass, AddressKind, KindInfo, Polarity};
