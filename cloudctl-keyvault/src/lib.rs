//! # cloudctl-keyvault
//!
//! Key vault models for the cloudctl command layer.
//!
//! Currently this is the parameter bag a caller fills in to request
//! creation of a secrets vault. The vault-creation command handler maps
//! it onto the provider's creation request shape; nothing here talks to
//! the network or validates field contents.

mod vault;

pub use vault::VaultCreationParameters;
