//! # Provider
//!
//! The wallet subsystem is supplied by library users. [`WalletScope`]
//! reports whether a wallet handle is open and [`RecordStore`] persists
//! typed records inside a wallet.

use std::future::Future;

use crate::WalletHandle;

/// Provider trait.
pub trait Provider: WalletScope + RecordStore {}

/// The `WalletScope` trait is used by implementers to report on the state of
/// externally managed wallet handles.
pub trait WalletScope: Send + Sync {
    /// Returns `true` when `wallet` names a currently open wallet.
    ///
    /// The store never opens or closes wallets, it only asks.
    fn is_open(&self, wallet: WalletHandle) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

/// The `RecordStore` trait is used by implementers to provide durable
/// record storage scoped to a wallet.
///
/// A record is addressed by `(wallet, record_type, id)`. A `put` to a given
/// address must be atomic: concurrent puts to the same address leave exactly
/// one of the submitted values in place, in full.
pub trait RecordStore: Send + Sync {
    /// Insert or replace the record at the given address.
    fn put(
        &self, wallet: WalletHandle, record_type: &str, id: &str, value: &[u8],
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Fetches a single record from the underlying store, returning `None`
    /// if no record exists at the address.
    fn get(
        &self, wallet: WalletHandle, record_type: &str, id: &str,
    ) -> impl Future<Output = anyhow::Result<Option<Vec<u8>>>> + Send;
}
