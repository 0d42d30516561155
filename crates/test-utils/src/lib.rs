#![allow(missing_docs)]

//! # Mock Provider

mod provider;
mod store;

pub use self::provider::ProviderImpl;
pub use self::store::WalletConfig;
