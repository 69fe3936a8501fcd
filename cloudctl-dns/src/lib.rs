//! # cloudctl-dns
//!
//! DNS record set models for the cloudctl command layer, plus the
//! conversions between the user-facing model and the cloud DNS management
//! API wire shapes.
//!
//! Two representations of a record live here:
//!
//! - The **user model** — [`RecordSet`], the payload structs
//!   ([`ARecord`], [`MxRecord`], ...) and the [`RecordData`] union.
//!   This is what command handlers construct, display and hand back to
//!   callers.
//! - The **wire model** — the [`api`] module, mirroring the JSON the
//!   management API accepts and returns.
//!
//! The conversions copy fields verbatim in both directions; this layer
//! never validates, defaults or re-encodes record contents. Malformed
//! values pass through untouched and are the provider's to reject.
//!
//! A [`RecordSet`] is typed by its payload: the records-match-type
//! invariant holds by construction, not by runtime checks.
//!
//! ```
//! use cloudctl_dns::api::{ApiPtrRecord, ApiRecord};
//! use cloudctl_dns::{ARecord, RecordData, RecordSet};
//!
//! // Build a typed record set the way a command handler would.
//! let mut set = RecordSet::<ARecord>::new("www", "example.com", "prod-rg", 3600);
//! set.push(ARecord {
//!     ipv4_address: "203.0.113.5".to_string(),
//! });
//!
//! // Marshal to the wire shape for a create/update call.
//! let api_set = set.to_api();
//! assert_eq!(api_set.name, "www.example.com");
//! assert_eq!(api_set.properties.a_records.len(), 1);
//!
//! // Wire records of a kind the user model does not carry convert to
//! // no value, never an error.
//! let unknown = RecordData::from_api(ApiRecord::PTR(ApiPtrRecord {
//!     ptrdname: "host.example.com".to_string(),
//! }));
//! assert!(unknown.is_none());
//! ```

pub mod api;
mod error;
mod name;
mod record;
mod record_set;

// Re-export error types
pub use error::{ModelError, Result};

// Re-export the user-facing record model
pub use record::{
    ARecord, AaaaRecord, CnameRecord, MxRecord, NsRecord, Record, RecordData, RecordType,
    SoaRecord, SrvRecord, TxtRecord,
};
pub use record_set::RecordSet;

// Re-export name helpers
pub use name::{fqdn_to_relative, normalize_zone_name, relative_to_fqdn};
