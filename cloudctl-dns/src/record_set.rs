//! Typed DNS record set container.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::{ApiRecordSet, ApiRecordSetProperties};
use crate::error::{ModelError, Result};
use crate::name::{fqdn_to_relative, relative_to_fqdn};
use crate::record::{Record, RecordData, RecordType};

/// A set of DNS records sharing one name, one type and one zone.
///
/// The element type parameter *is* the record type: a `RecordSet<ARecord>`
/// can only ever hold [`ARecord`](crate::ARecord) values, so inserting a
/// record of another type is rejected by the compiler rather than by a
/// runtime check.
///
/// ```compile_fail
/// use cloudctl_dns::{ARecord, CnameRecord, RecordSet};
///
/// let mut set = RecordSet::<ARecord>::new("www", "example.com", "prod-rg", 3600);
/// // A CNAME payload cannot enter an A record set.
/// set.push(CnameRecord {
///     cname: "alias.example.com".to_string(),
/// });
/// ```
///
/// Record order is preserved as received; it carries no meaning but
/// round-trips faithfully through the wire conversions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSet<R: Record> {
    /// Record set name, relative to the zone, without a trailing dot.
    /// The zone apex is `"@"`.
    pub name: String,
    /// Name of the zone this record set belongs to.
    pub zone_name: String,
    /// Name of the resource group owning the zone.
    pub resource_group_name: String,
    /// TTL in seconds, shared by every record in the set.
    pub ttl: u32,
    /// Opaque concurrency token assigned by the provider.
    ///
    /// Surfaced to the caller for optimistic-concurrency checks on
    /// update; never interpreted here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Records in this set.
    pub records: Vec<R>,
    /// Organizational tag sets. Each entry is an independent key/value
    /// map; the list shape is preserved end to end, never merged.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<HashMap<String, String>>,
}

impl<R: Record> RecordSet<R> {
    /// Create an empty record set with no etag and no tags.
    pub fn new(name: &str, zone_name: &str, resource_group_name: &str, ttl: u32) -> Self {
        Self {
            name: name.to_string(),
            zone_name: zone_name.to_string(),
            resource_group_name: resource_group_name.to_string(),
            ttl,
            etag: None,
            records: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// The record type shared by every record in this set.
    pub fn record_type(&self) -> RecordType {
        R::TYPE
    }

    /// Append a record. The payload type guarantees it matches the set.
    pub fn push(&mut self, record: R) {
        self.records.push(record);
    }

    /// Fully qualified name of this record set within its zone.
    pub fn fqdn(&self) -> String {
        relative_to_fqdn(&self.name, &self.zone_name)
    }

    /// Assemble a typed set from dynamically typed record data.
    ///
    /// Every element must be an `R` payload; the first element of any
    /// other type fails with [`ModelError::RecordTypeMismatch`]. This is
    /// the construction-time guard for input that arrives as
    /// [`RecordData`] rather than as concrete payloads.
    pub fn try_from_records(
        name: &str,
        zone_name: &str,
        resource_group_name: &str,
        ttl: u32,
        records: Vec<RecordData>,
    ) -> Result<Self> {
        let mut set = Self::new(name, zone_name, resource_group_name, ttl);
        for data in records {
            set.records.push(Self::expect_typed(data)?);
        }
        Ok(set)
    }

    /// Build a typed set from a management API record set.
    ///
    /// The zone and resource group are not part of the wire shape and are
    /// supplied from request context; the wire name is converted to the
    /// zone-relative form. Wire records of a kind the user model does not
    /// support are skipped with a warning; supported records of a kind
    /// other than `R` fail with [`ModelError::RecordTypeMismatch`].
    pub fn from_api(
        api_set: ApiRecordSet,
        zone_name: &str,
        resource_group_name: &str,
    ) -> Result<Self> {
        let name = fqdn_to_relative(&api_set.name, zone_name);
        let mut set = Self::new(&name, zone_name, resource_group_name, api_set.properties.ttl);
        set.etag = api_set.etag;
        set.tags = api_set.tags;

        for api_record in api_set.properties.into_records() {
            let kind = api_record.kind();
            let Some(data) = RecordData::from_api(api_record) else {
                log::warn!(
                    "record set '{}': skipping unsupported {kind} record",
                    set.name
                );
                continue;
            };
            set.records.push(Self::expect_typed(data)?);
        }
        Ok(set)
    }

    /// Convert to the management API record set shape for create/update
    /// calls.
    ///
    /// The name is emitted fully qualified; `id` and the resource type
    /// are provider-assigned and stay absent. Records land in the typed
    /// wire collection matching their kind, in order.
    pub fn to_api(&self) -> ApiRecordSet {
        let mut properties = ApiRecordSetProperties::new(self.ttl);
        for record in &self.records {
            properties.push(record.clone().into_data().to_api());
        }
        ApiRecordSet {
            id: None,
            name: self.fqdn(),
            resource_type: None,
            etag: self.etag.clone(),
            tags: self.tags.clone(),
            properties,
        }
    }

    fn expect_typed(data: RecordData) -> Result<R> {
        let actual = data.record_type();
        R::from_data(data).ok_or(ModelError::RecordTypeMismatch {
            expected: R::TYPE,
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiCaaRecord, ApiMxRecord, ApiRecord};
    use crate::record::{ARecord, CnameRecord, MxRecord};

    fn mx(preference: u16, exchange: &str) -> MxRecord {
        MxRecord {
            preference,
            exchange: exchange.to_string(),
        }
    }

    #[test]
    fn new_set_is_empty_with_derived_type() {
        let set = RecordSet::<ARecord>::new("www", "example.com", "prod-rg", 3600);
        assert_eq!(set.record_type(), RecordType::A);
        assert!(set.records.is_empty());
        assert!(set.etag.is_none());
        assert!(set.tags.is_empty());
    }

    #[test]
    fn push_preserves_order() {
        let mut set = RecordSet::<MxRecord>::new("@", "example.com", "prod-rg", 300);
        set.push(mx(10, "mx1.example.com"));
        set.push(mx(20, "mx2.example.com"));
        let preferences: Vec<u16> = set.records.iter().map(|r| r.preference).collect();
        assert_eq!(preferences, vec![10, 20]);
    }

    #[test]
    fn fqdn_of_subdomain_and_apex() {
        let set = RecordSet::<ARecord>::new("www", "example.com", "prod-rg", 3600);
        assert_eq!(set.fqdn(), "www.example.com");
        let apex = RecordSet::<ARecord>::new("@", "example.com", "prod-rg", 3600);
        assert_eq!(apex.fqdn(), "example.com");
    }

    #[test]
    fn try_from_records_accepts_matching_data() {
        let records = vec![
            RecordData::MX(mx(10, "mx1.example.com")),
            RecordData::MX(mx(20, "mx2.example.com")),
        ];
        let set_res =
            RecordSet::<MxRecord>::try_from_records("@", "example.com", "prod-rg", 300, records);
        assert!(set_res.is_ok(), "expected Ok(..), got {set_res:?}");
        let Ok(set) = set_res else {
            return;
        };
        assert_eq!(set.records.len(), 2);
    }

    #[test]
    fn try_from_records_rejects_mismatched_data() {
        let records = vec![
            RecordData::MX(mx(10, "mx1.example.com")),
            RecordData::CNAME(CnameRecord {
                cname: "alias.example.com".to_string(),
            }),
        ];
        let set_res =
            RecordSet::<MxRecord>::try_from_records("@", "example.com", "prod-rg", 300, records);
        assert_eq!(
            set_res,
            Err(ModelError::RecordTypeMismatch {
                expected: RecordType::Mx,
                actual: RecordType::Cname,
            })
        );
    }

    #[test]
    fn from_api_copies_metadata_and_records() {
        let mut properties = ApiRecordSetProperties::new(300);
        properties.push(ApiRecord::MX(ApiMxRecord {
            preference: 10,
            exchange: "mx1.example.com".to_string(),
        }));
        let api_set = ApiRecordSet {
            id: Some("/zones/example.com/MX/mail".to_string()),
            name: "mail.example.com".to_string(),
            resource_type: None,
            etag: Some("abc123".to_string()),
            tags: vec![HashMap::from([("env".to_string(), "prod".to_string())])],
            properties,
        };

        let set_res = RecordSet::<MxRecord>::from_api(api_set, "example.com", "prod-rg");
        assert!(set_res.is_ok(), "expected Ok(..), got {set_res:?}");
        let Ok(set) = set_res else {
            return;
        };
        assert_eq!(set.name, "mail");
        assert_eq!(set.zone_name, "example.com");
        assert_eq!(set.resource_group_name, "prod-rg");
        assert_eq!(set.ttl, 300);
        assert_eq!(set.etag.as_deref(), Some("abc123"));
        assert_eq!(set.tags.len(), 1);
        assert_eq!(set.records, vec![mx(10, "mx1.example.com")]);
    }

    #[test]
    fn from_api_skips_unsupported_kinds() {
        let mut properties = ApiRecordSetProperties::new(3600);
        properties.push(ApiRecord::MX(ApiMxRecord {
            preference: 10,
            exchange: "mx1.example.com".to_string(),
        }));
        properties.push(ApiRecord::CAA(ApiCaaRecord {
            flags: 0,
            tag: "issue".to_string(),
            value: "ca.example.net".to_string(),
        }));
        let api_set = ApiRecordSet {
            id: None,
            name: "mail.example.com".to_string(),
            resource_type: None,
            etag: None,
            tags: vec![],
            properties,
        };

        let set_res = RecordSet::<MxRecord>::from_api(api_set, "example.com", "prod-rg");
        assert!(set_res.is_ok(), "expected Ok(..), got {set_res:?}");
        let Ok(set) = set_res else {
            return;
        };
        // The CAA record is dropped, not an error.
        assert_eq!(set.records.len(), 1);
    }

    #[test]
    fn from_api_rejects_mismatched_supported_kind() {
        let mut properties = ApiRecordSetProperties::new(3600);
        properties.push(ApiRecord::MX(ApiMxRecord {
            preference: 10,
            exchange: "mx1.example.com".to_string(),
        }));
        let api_set = ApiRecordSet {
            id: None,
            name: "mail.example.com".to_string(),
            resource_type: None,
            etag: None,
            tags: vec![],
            properties,
        };

        let set_res = RecordSet::<ARecord>::from_api(api_set, "example.com", "prod-rg");
        assert_eq!(
            set_res,
            Err(ModelError::RecordTypeMismatch {
                expected: RecordType::A,
                actual: RecordType::Mx,
            })
        );
    }

    #[test]
    fn to_api_emits_fqdn_and_typed_arrays() {
        let mut set = RecordSet::<MxRecord>::new("mail", "example.com", "prod-rg", 300);
        set.etag = Some("abc123".to_string());
        set.tags = vec![HashMap::from([("env".to_string(), "prod".to_string())])];
        set.push(mx(10, "mx1.example.com"));
        set.push(mx(20, "mx2.example.com"));

        let api_set = set.to_api();
        assert_eq!(api_set.name, "mail.example.com");
        assert!(api_set.id.is_none());
        assert_eq!(api_set.etag.as_deref(), Some("abc123"));
        assert_eq!(api_set.tags.len(), 1);
        assert_eq!(api_set.properties.ttl, 300);
        assert_eq!(api_set.properties.mx_records.len(), 2);
    }

    #[test]
    fn api_round_trip_preserves_records_and_metadata() {
        let mut set = RecordSet::<MxRecord>::new("mail", "example.com", "prod-rg", 300);
        set.etag = Some("abc123".to_string());
        set.push(mx(10, "mx1.example.com"));
        set.push(mx(20, "mx2.example.com"));

        let back_res = RecordSet::<MxRecord>::from_api(set.to_api(), "example.com", "prod-rg");
        assert!(back_res.is_ok(), "expected Ok(..), got {back_res:?}");
        let Ok(back) = back_res else {
            return;
        };
        assert_eq!(back, set);
    }

    #[test]
    fn serde_round_trip() {
        let mut set = RecordSet::<ARecord>::new("www", "example.com", "prod-rg", 3600);
        set.push(ARecord {
            ipv4_address: "203.0.113.5".to_string(),
        });
        let json_res = serde_json::to_string(&set);
        assert!(json_res.is_ok(), "serde_json::to_string failed: {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        assert!(json.contains("\"zoneName\":\"example.com\""));
        assert!(json.contains("\"resourceGroupName\":\"prod-rg\""));

        let back_res: serde_json::Result<RecordSet<ARecord>> = serde_json::from_str(&json);
        assert!(back_res.is_ok(), "serde_json::from_str failed: {back_res:?}");
        let Ok(back) = back_res else {
            return;
        };
        assert_eq!(back, set);
    }
}
