use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::sync::RwLock;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

static DEFAULT_WALLET_DIR: &str = "wallet_db";

const WALLET_DB_PATH_KEY: &str = "WALLET_DB_PATH";

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        let wallet_path = match env::var(WALLET_DB_PATH_KEY) {
            Ok(path) => path,
            Err(_) => default_wallet_path(),
        };

        let mut map = HashMap::new();
        map.insert(String::from(WALLET_DB_PATH_KEY), wallet_path);

        Config {
            inner: RwLock::new(map),
        }
    }

    pub fn get_wallet_path(&self) -> PathBuf {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        inner
            .get(WALLET_DB_PATH_KEY)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WALLET_DIR))
    }

    pub fn set_wallet_path(&self, path: String) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.insert(String::from(WALLET_DB_PATH_KEY), path);
    }
}

fn default_wallet_path() -> String {
    match env::current_dir() {
        Ok(dir) => dir.join(DEFAULT_WALLET_DIR).to_string_lossy().to_string(),
        Err(e) => {
            log::warn!("Could not resolve current directory: {e}");
            String::from(DEFAULT_WALLET_DIR)
        }
    }
}
