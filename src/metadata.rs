//! # DID Metadata
//!
//! Associates an arbitrary metadata string with a DID inside a wallet.
//!
//! Each (wallet, DID) pair holds at most one value. A [`set`] on a DID that
//! already has metadata replaces it in full; there is no merge and no
//! history. Records are stored as JSON under [`RECORD_TYPE`], keyed by the
//! DID string exactly as supplied.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::provider::{Provider, RecordStore, WalletScope};
use crate::{Did, Error, Result, WalletHandle};

/// Record type under which DID metadata is stored.
pub const RECORD_TYPE: &str = "DidMetadata";

/// Stored representation of a DID's metadata.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct MetadataRecord {
    /// The metadata value. May be empty.
    pub value: String,
}

/// Set (or replace) the metadata associated with `did` in `wallet`.
///
/// # Errors
///
/// Returns [`Error::InvalidIdentifierFormat`] if `did` is not a valid DID,
/// and [`Error::InvalidWalletHandle`] if `wallet` is not open. In both cases
/// nothing is written. Provider failures are returned as [`Error::Server`].
#[instrument(level = "debug", skip(metadata, provider))]
pub async fn set(
    wallet: WalletHandle, did: &str, metadata: &str, provider: &impl Provider,
) -> Result<()> {
    let did = Did::parse(did).inspect_err(|e| tracing::debug!("rejected DID: {e}"))?;
    verify_wallet(wallet, provider).await?;

    let record = MetadataRecord {
        value: metadata.to_string(),
    };
    let bytes = serde_json::to_vec(&record)?;
    RecordStore::put(provider, wallet, RECORD_TYPE, did.as_str(), &bytes).await?;

    Ok(())
}

/// Get the metadata most recently set for `did` in `wallet`.
///
/// The DID is not validated: a malformed DID can never have been stored, so
/// looking one up yields [`Error::RecordNotFound`].
///
/// # Errors
///
/// Returns [`Error::InvalidWalletHandle`] if `wallet` is not open and
/// [`Error::RecordNotFound`] if no metadata has been set for `did`.
#[instrument(level = "debug", skip(provider))]
pub async fn get(wallet: WalletHandle, did: &str, provider: &impl Provider) -> Result<String> {
    verify_wallet(wallet, provider).await?;

    let Some(bytes) = RecordStore::get(provider, wallet, RECORD_TYPE, did).await? else {
        return Err(Error::RecordNotFound(format!("no metadata for {did}")));
    };
    let record: MetadataRecord = serde_json::from_slice(&bytes)?;

    Ok(record.value)
}

async fn verify_wallet(wallet: WalletHandle, provider: &impl WalletScope) -> Result<()> {
    if !provider.is_open(wallet).await? {
        return Err(Error::InvalidWalletHandle(format!("wallet {wallet} is not open")));
    }
    Ok(())
}
