//! # DID Metadata
//!
//! A wallet-scoped store associating an opaque metadata string with a
//! Decentralized Identifier (DID).
//!
//! Each wallet is an isolated storage scope owned by the caller. The store
//! validates DID syntax before persisting anything, and a subsequent write to
//! the same DID replaces the stored value in full.
//!
//! Storage and wallet lifecycle are provided by implementers of the
//! [`Provider`] trait; every operation takes the wallet handle and the
//! provider explicitly.
//!
//! ```rust,ignore
//! use did_metadata::{WalletHandle, metadata};
//!
//! metadata::set(wallet, "V4SGRU86Z58d6TV7PBUe6f", "metadata", &provider).await?;
//! let value = metadata::get(wallet, "V4SGRU86Z58d6TV7PBUe6f", &provider).await?;
//! assert_eq!(value, "metadata");
//! ```

pub mod did;
mod error;
pub mod metadata;
pub mod provider;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use crate::did::Did;
pub use crate::error::Error;
pub use crate::provider::Provider;

/// Result type for DID metadata operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Opaque handle identifying an open wallet scope.
///
/// Handles are issued and revoked by the wallet subsystem. The store only
/// ever asks the [`Provider`] whether a handle is currently open.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct WalletHandle(pub i32);

impl WalletHandle {
    /// A handle that is never issued for an open wallet.
    pub const INVALID: Self = Self(0);
}

impl fmt::Display for WalletHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for WalletHandle {
    fn from(value: i32) -> Self {
        Self(value)
    }
}
