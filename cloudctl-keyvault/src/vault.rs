//! Vault creation parameter types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Parameters for requesting creation of a secrets vault.
///
/// A flat parameter bag: constructed and read by the caller, carried
/// as-is to the vault-creation command handler. No field is validated or
/// defaulted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultCreationParameters {
    /// Name of the vault to create.
    pub vault_name: String,
    /// Resource group to create the vault in.
    pub resource_group_name: String,
    /// Region to create the vault in.
    pub location: String,
    /// Organizational tag sets. Each entry is an independent key/value
    /// map; the list shape is preserved, never merged.
    pub tags: Vec<HashMap<String, String>>,
    /// SKU name (e.g. `"standard"`).
    pub sku_name: String,
    /// SKU family name.
    pub sku_family_name: String,
    /// Whether compute deployments may retrieve certificates stored in
    /// the vault.
    pub enabled_for_deployment: bool,
    /// Tenant the vault belongs to.
    pub tenant_id: Uuid,
    /// Directory object granted the initial access policy.
    pub object_id: Uuid,
    /// Key operations granted to the initial access policy, in order.
    pub permissions_to_keys: Vec<String>,
    /// Secret operations granted to the initial access policy, in order.
    pub permissions_to_secrets: Vec<String>,
}
