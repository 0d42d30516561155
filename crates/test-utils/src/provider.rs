//! # Provider
//!
//! Implementation of the `Provider` trait for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use anyhow::{Result, anyhow};
use did_metadata::WalletHandle;
use did_metadata::provider::{Provider, RecordStore, WalletScope};

use crate::store::{Records, Registry, WalletConfig};

static WALLET_ID: AtomicUsize = AtomicUsize::new(0);

#[derive(Clone, Default)]
pub struct ProviderImpl {
    registry: Arc<RwLock<Registry>>,
}

impl ProviderImpl {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and open a wallet with a generated id.
    pub fn new_wallet(&self) -> Result<WalletHandle> {
        let n = WALLET_ID.fetch_add(1, Ordering::Relaxed);
        let config = format!(r#"{{"id": "wallet-{n}"}}"#);
        self.create_wallet(&config)?;
        self.open_wallet(&config)
    }

    pub fn create_wallet(&self, config: &str) -> Result<()> {
        let config = WalletConfig::parse(config)?;
        self.registry.write().map_err(|_| anyhow!("registry poisoned"))?.create(&config)
    }

    pub fn open_wallet(&self, config: &str) -> Result<WalletHandle> {
        let config = WalletConfig::parse(config)?;
        self.registry.write().map_err(|_| anyhow!("registry poisoned"))?.open(&config)
    }

    pub fn close_wallet(&self, wallet: WalletHandle) -> Result<()> {
        self.registry.write().map_err(|_| anyhow!("registry poisoned"))?.close(wallet)
    }

    pub fn delete_wallet(&self, config: &str) -> Result<()> {
        let config = WalletConfig::parse(config)?;
        self.registry.write().map_err(|_| anyhow!("registry poisoned"))?.delete(&config)
    }

    fn records(&self, wallet: WalletHandle) -> Result<Records> {
        self.registry.read().map_err(|_| anyhow!("registry poisoned"))?.records(wallet)
    }
}

impl Provider for ProviderImpl {}

impl WalletScope for ProviderImpl {
    async fn is_open(&self, wallet: WalletHandle) -> Result<bool> {
        Ok(self.registry.read().map_err(|_| anyhow!("registry poisoned"))?.is_open(wallet))
    }
}

impl RecordStore for ProviderImpl {
    async fn put(
        &self, wallet: WalletHandle, record_type: &str, id: &str, value: &[u8],
    ) -> Result<()> {
        let records = self.records(wallet)?;
        records
            .write()
            .map_err(|_| anyhow!("wallet {wallet} poisoned"))?
            .insert((record_type.to_string(), id.to_string()), value.to_vec());
        Ok(())
    }

    async fn get(
        &self, wallet: WalletHandle, record_type: &str, id: &str,
    ) -> Result<Option<Vec<u8>>> {
        let records = self.records(wallet)?;
        let table = records.read().map_err(|_| anyhow!("wallet {wallet} poisoned"))?;
        Ok(table.get(&(record_type.to_string(), id.to_string())).cloned())
    }
}
