//! # Wallet Registry
//!
//! In-memory wallets for tests. Each wallet owns its own record table and
//! lock so operations on different wallets never contend.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use anyhow::{Result, anyhow, bail};
use did_metadata::WalletHandle;
use serde::{Deserialize, Serialize};

const STORAGE_TYPE: &str = "inmem";

/// Wallet configuration, supplied as JSON.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct WalletConfig {
    /// Unique wallet name.
    pub id: String,

    /// Storage backend. Only `inmem` is supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
}

impl WalletConfig {
    pub fn parse(config: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(config)?;
        if config.id.is_empty() {
            bail!("wallet id must not be empty");
        }
        if let Some(storage_type) = config.storage_type.as_deref().filter(|t| *t != STORAGE_TYPE) {
            bail!("unsupported storage type: {storage_type}");
        }
        Ok(config)
    }
}

// record table keyed by (record_type, id)
pub type Records = Arc<RwLock<HashMap<(String, String), Vec<u8>>>>;

#[derive(Default)]
pub struct Registry {
    wallets: HashMap<String, Records>,
    open: HashMap<WalletHandle, String>,
    last_handle: i32,
}

impl Registry {
    pub fn create(&mut self, config: &WalletConfig) -> Result<()> {
        if self.wallets.contains_key(&config.id) {
            bail!("wallet {} already exists", config.id);
        }
        self.wallets.insert(config.id.clone(), Records::default());
        Ok(())
    }

    pub fn open(&mut self, config: &WalletConfig) -> Result<WalletHandle> {
        if !self.wallets.contains_key(&config.id) {
            bail!("wallet {} not found", config.id);
        }
        if self.open.values().any(|id| id == &config.id) {
            bail!("wallet {} already open", config.id);
        }

        self.last_handle += 1;
        let handle = WalletHandle(self.last_handle);
        self.open.insert(handle, config.id.clone());
        Ok(handle)
    }

    pub fn close(&mut self, wallet: WalletHandle) -> Result<()> {
        self.open.remove(&wallet).map(|_| ()).ok_or_else(|| anyhow!("wallet {wallet} not open"))
    }

    pub fn delete(&mut self, config: &WalletConfig) -> Result<()> {
        if self.open.values().any(|id| id == &config.id) {
            bail!("cannot delete open wallet {}", config.id);
        }
        self.wallets
            .remove(&config.id)
            .map(|_| ())
            .ok_or_else(|| anyhow!("wallet {} not found", config.id))
    }

    pub fn is_open(&self, wallet: WalletHandle) -> bool {
        self.open.contains_key(&wallet)
    }

    // Record table behind an open handle.
    pub fn records(&self, wallet: WalletHandle) -> Result<Records> {
        let Some(id) = self.open.get(&wallet) else {
            bail!("wallet {wallet} not open");
        };
        self.wallets.get(id).cloned().ok_or_else(|| anyhow!("wallet {id} not found"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn config(id: &str) -> WalletConfig {
        WalletConfig::parse(&format!(r#"{{"id": "{id}"}}"#)).expect("should parse")
    }

    #[test]
    fn lifecycle() {
        let mut registry = Registry::default();
        let alice = config("alice");

        registry.create(&alice).expect("should create");
        assert!(registry.create(&alice).is_err());

        let handle = registry.open(&alice).expect("should open");
        assert_ne!(handle, WalletHandle::INVALID);
        assert!(registry.is_open(handle));
        assert!(registry.open(&alice).is_err());
        assert!(registry.delete(&alice).is_err());

        registry.close(handle).expect("should close");
        assert!(!registry.is_open(handle));
        assert!(registry.close(handle).is_err());

        // handles are not reused
        let reopened = registry.open(&alice).expect("should reopen");
        assert_ne!(reopened, handle);

        registry.close(reopened).expect("should close");
        registry.delete(&alice).expect("should delete");
        assert!(registry.open(&alice).is_err());
    }

    #[test]
    fn bad_config() {
        assert!(WalletConfig::parse(r#"{"id": ""}"#).is_err());
        assert!(WalletConfig::parse(r#"{"id": "w", "storage_type": "sqlite"}"#).is_err());
        assert!(WalletConfig::parse("not json").is_err());
        WalletConfig::parse(r#"{"id": "w", "storage_type": "inmem"}"#).expect("should parse");
    }
}
