// Local address store backed by Sled
// Records are keyed by the canonical public address so a public address and
// its private seed always share one entry.

use crate::address::{Address, AddressKind, ColumnValue};
use crate::config::GLOBAL_CONFIG;
use crate::error::{AddressError, Result};
use crate::wallet::client::{AddressFilter, WalletClient};
use log::info;
use sled::{Db, Tree};
use std::path::{Path, PathBuf};

const ADDRESSES_TREE: &str = "addresses";

#[derive(bincode::Encode, bincode::Decode)]
struct AddressRecord {
    kind: String,
    payload: Vec<u8>,
    secret: Option<Vec<u8>>,
}

impl AddressRecord {
    fn public(&self) -> Result<Address> {
        let kind: AddressKind = self.kind.parse()?;
        Address::from_column(kind, &ColumnValue::from(self.payload.as_slice()))
    }

    fn private(&self) -> Result<Option<Address>> {
        let kind: AddressKind = self.kind.parse()?;
        match &self.secret {
            Some(secret) => Ok(Some(Address::from_column(
                kind.counterpart(),
                &ColumnValue::from(secret.as_slice()),
            )?)),
            None => Ok(None),
        }
    }
}

#[derive(Clone)]
pub struct AddressStore {
    db: Db,
    db_path: PathBuf,
}

impl AddressStore {
    /// Opens the store at the configured wallet path.
    pub fn open_default() -> Result<AddressStore> {
        Self::open(GLOBAL_CONFIG.get_wallet_path())
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<AddressStore> {
        let db_path = path.as_ref().to_path_buf();
        let db = sled::open(&db_path)
            .map_err(|e| AddressError::Database(format!("Failed to open database: {e}")))?;
        info!("Opened address store at {}", db_path.display());
        Ok(AddressStore { db, db_path })
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn tree(&self) -> Result<Tree> {
        self.db
            .open_tree(ADDRESSES_TREE)
            .map_err(|e| AddressError::Database(format!("Failed to open addresses tree: {e}")))
    }

    fn get_record(&self, tree: &Tree, key: &str) -> Result<Option<AddressRecord>> {
        let data = tree
            .get(key)
            .map_err(|e| AddressError::Database(format!("Failed to read address: {e}")))?;
        match data {
            Some(bytes) => {
                let (record, _) =
                    bincode::decode_from_slice(&bytes, bincode::config::standard())?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    fn put_record(&self, tree: &Tree, key: &str, record: &AddressRecord) -> Result<()> {
        let bytes = bincode::encode_to_vec(record, bincode::config::standard())?;
        tree.insert(key, bytes)
            .map_err(|e| AddressError::Database(format!("Failed to write address: {e}")))?;
        tree.flush()
            .map_err(|e| AddressError::Database(format!("Failed to flush addresses: {e}")))?;
        Ok(())
    }
}

impl WalletClient for AddressStore {
    fn save(&self, address: &Address) -> Result<()> {
        let public = address.public_address();
        let key = public.to_string();
        let tree = self.tree()?;

        let secret = if address.is_private() {
            Some(address.payload().to_vec())
        } else {
            // keep a seed saved earlier for the same public address
            self.get_record(&tree, &key)?.and_then(|r| r.secret)
        };
        let record = AddressRecord {
            kind: public.kind().prefix_str().to_string(),
            payload: public.payload().to_vec(),
            secret,
        };
        self.put_record(&tree, &key, &record)?;
        info!("Saved {} address {key}", address.kind());
        Ok(())
    }

    fn remove(&self, address: &Address) -> Result<()> {
        let key = address.public_address().to_string();
        let removed = self
            .tree()?
            .remove(&key)
            .map_err(|e| AddressError::Database(format!("Failed to remove address: {e}")))?;
        if removed.is_none() {
            return Err(AddressError::Wallet(format!("address not found: {key}")));
        }
        info!("Removed address {key}");
        Ok(())
    }

    fn list_addresses(&self, filter: AddressFilter) -> Result<Vec<Address>> {
        let tree = self.tree()?;
        let mut addresses = vec![];
        for item in tree.iter() {
            let (_, v) = item
                .map_err(|e| AddressError::Database(format!("Failed to iterate addresses: {e}")))?;
            let (record, _): (AddressRecord, usize) =
                bincode::decode_from_slice(&v, bincode::config::standard())?;

            let public = record.public()?;
            if filter.matches(&public) {
                addresses.push(public);
            }
            if let Some(private) = record.private()? {
                if filter.matches(&private) {
                    addresses.push(private);
                }
            }
        }
        Ok(addresses)
    }

    fn fetch_private_counterpart(&self, public: &Address) -> Result<Address> {
        if public.is_private() {
            return Ok(*public);
        }
        let key = public.to_string();
        let record = self
            .get_record(&self.tree()?, &key)?
            .ok_or_else(|| AddressError::Wallet(format!("address not found: {key}")))?;
        record
            .private()?
            .ok_or_else(|| AddressError::Wallet(format!("no private address stored for {key}")))
    }
}
