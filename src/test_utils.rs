//! Test fixtures shared by unit tests

use crate::error::{AddressError, Result};
use crate::wallet::AddressStore;
use tempfile::TempDir;

// Known-good addresses from a reference wallet. Never fund these.
pub const FA_ADDRESS: &str = "FA2PdKfzGP5XwoSbeW1k9QunCHwC8DY6d8xgEdfm57qfR31nTueb";
pub const FS_ADDRESS: &str = "Fs1ipNRjEXcWj8RUn1GRLMJYVoPFBL1yw9rn6sCxWGcxciC4HdPd";
pub const EC_ADDRESS: &str = "EC2Pawhv7uAiKFQeLgaqfRhzk5o9uPVY8Ehjh8DnLXENosvYTT26";
pub const ES_ADDRESS: &str = "Es2tFRhAqHnydaygVAR6zbpWTQXUDaXy1JHWJugQXnYavS8ssQQE";

/// Create a temporary directory for testing
pub fn create_temp_dir() -> Result<TempDir> {
    tempfile::tempdir().map_err(|e| AddressError::Io(e.to_string()))
}

/// Create an address store in a temporary directory
pub fn create_test_store() -> Result<(AddressStore, TempDir)> {
    let temp_dir = create_temp_dir()?;
    let store = AddressStore::open(temp_dir.path().join("test_wallet"))?;
    Ok((store, temp_dir))
}
