//! Management API wire types for DNS record sets.
//!
//! These shapes mirror the JSON the cloud DNS management API accepts and
//! returns. Inside a record set's properties, records are grouped by kind
//! into one typed array each (a single field for CNAME and SOA, which are
//! single-valued on the wire).
//!
//! The wire union carries two kinds the user model does not represent,
//! [`ApiRecord::CAA`] and [`ApiRecord::PTR`]; converting those to
//! [`RecordData`] yields no value rather than an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::{
    ARecord, AaaaRecord, CnameRecord, MxRecord, NsRecord, RecordData, SoaRecord, SrvRecord,
    TxtRecord,
};

// ============ Wire Record Payloads ============

/// Wire form of an A record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiARecord {
    pub ipv4_address: String,
}

/// Wire form of an AAAA record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAaaaRecord {
    pub ipv6_address: String,
}

/// Wire form of a CNAME record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCnameRecord {
    pub cname: String,
}

/// Wire form of an NS record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiNsRecord {
    pub nsdname: String,
}

/// Wire form of a TXT record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTxtRecord {
    pub value: String,
}

/// Wire form of an MX record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMxRecord {
    pub preference: u16,
    pub exchange: String,
}

/// Wire form of an SRV record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSrvRecord {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: String,
}

/// Wire form of an SOA record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSoaRecord {
    pub host: String,
    pub email: String,
    pub serial_number: u32,
    pub refresh_time: u32,
    pub retry_time: u32,
    pub expire_time: u32,
    pub minimum_ttl: u32,
}

/// Wire form of a CAA record.
///
/// The API returns these, but the user model has no CAA variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCaaRecord {
    pub flags: u8,
    pub tag: String,
    pub value: String,
}

/// Wire form of a PTR record.
///
/// The API returns these, but the user model has no PTR variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPtrRecord {
    pub ptrdname: String,
}

// ============ Wire Record Union ============

/// Wire record union across every kind the management API can return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ApiRecord {
    /// A record.
    A(ApiARecord),
    /// AAAA record.
    AAAA(ApiAaaaRecord),
    /// CNAME record.
    CNAME(ApiCnameRecord),
    /// NS record.
    NS(ApiNsRecord),
    /// MX record.
    MX(ApiMxRecord),
    /// SRV record.
    SRV(ApiSrvRecord),
    /// SOA record.
    SOA(ApiSoaRecord),
    /// TXT record.
    TXT(ApiTxtRecord),
    /// CAA record — no user model counterpart.
    CAA(ApiCaaRecord),
    /// PTR record — no user model counterpart.
    PTR(ApiPtrRecord),
}

impl ApiRecord {
    /// Uppercase wire name of this record's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::A(_) => "A",
            Self::AAAA(_) => "AAAA",
            Self::CNAME(_) => "CNAME",
            Self::NS(_) => "NS",
            Self::MX(_) => "MX",
            Self::SRV(_) => "SRV",
            Self::SOA(_) => "SOA",
            Self::TXT(_) => "TXT",
            Self::CAA(_) => "CAA",
            Self::PTR(_) => "PTR",
        }
    }
}

// ============ Payload Conversions ============

impl From<ARecord> for ApiARecord {
    fn from(record: ARecord) -> Self {
        Self {
            ipv4_address: record.ipv4_address,
        }
    }
}

impl From<ApiARecord> for ARecord {
    fn from(record: ApiARecord) -> Self {
        Self {
            ipv4_address: record.ipv4_address,
        }
    }
}

impl From<AaaaRecord> for ApiAaaaRecord {
    fn from(record: AaaaRecord) -> Self {
        Self {
            ipv6_address: record.ipv6_address,
        }
    }
}

impl From<ApiAaaaRecord> for AaaaRecord {
    fn from(record: ApiAaaaRecord) -> Self {
        Self {
            ipv6_address: record.ipv6_address,
        }
    }
}

impl From<CnameRecord> for ApiCnameRecord {
    fn from(record: CnameRecord) -> Self {
        Self {
            cname: record.cname,
        }
    }
}

impl From<ApiCnameRecord> for CnameRecord {
    fn from(record: ApiCnameRecord) -> Self {
        Self {
            cname: record.cname,
        }
    }
}

impl From<NsRecord> for ApiNsRecord {
    fn from(record: NsRecord) -> Self {
        Self {
            nsdname: record.nsdname,
        }
    }
}

impl From<ApiNsRecord> for NsRecord {
    fn from(record: ApiNsRecord) -> Self {
        Self {
            nsdname: record.nsdname,
        }
    }
}

impl From<TxtRecord> for ApiTxtRecord {
    fn from(record: TxtRecord) -> Self {
        Self {
            value: record.value,
        }
    }
}

impl From<ApiTxtRecord> for TxtRecord {
    fn from(record: ApiTxtRecord) -> Self {
        Self {
            value: record.value,
        }
    }
}

impl From<MxRecord> for ApiMxRecord {
    fn from(record: MxRecord) -> Self {
        Self {
            preference: record.preference,
            exchange: record.exchange,
        }
    }
}

impl From<ApiMxRecord> for MxRecord {
    fn from(record: ApiMxRecord) -> Self {
        Self {
            preference: record.preference,
            exchange: record.exchange,
        }
    }
}

impl From<SrvRecord> for ApiSrvRecord {
    fn from(record: SrvRecord) -> Self {
        Self {
            priority: record.priority,
            weight: record.weight,
            port: record.port,
            target: record.target,
        }
    }
}

impl From<ApiSrvRecord> for SrvRecord {
    fn from(record: ApiSrvRecord) -> Self {
        Self {
            priority: record.priority,
            weight: record.weight,
            port: record.port,
            target: record.target,
        }
    }
}

impl From<SoaRecord> for ApiSoaRecord {
    fn from(record: SoaRecord) -> Self {
        Self {
            host: record.host,
            email: record.email,
            serial_number: record.serial_number,
            refresh_time: record.refresh_time,
            retry_time: record.retry_time,
            expire_time: record.expire_time,
            minimum_ttl: record.minimum_ttl,
        }
    }
}

impl From<ApiSoaRecord> for SoaRecord {
    fn from(record: ApiSoaRecord) -> Self {
        Self {
            host: record.host,
            email: record.email,
            serial_number: record.serial_number,
            refresh_time: record.refresh_time,
            retry_time: record.retry_time,
            expire_time: record.expire_time,
            minimum_ttl: record.minimum_ttl,
        }
    }
}

// ============ Union Conversions ============

impl RecordData {
    /// Convert a wire record into user-facing record data.
    ///
    /// Fields are copied verbatim; nothing is validated, defaulted or
    /// re-encoded. Returns `None` for kinds the user model does not
    /// support (CAA, PTR) — that is an explicit absence, not an error,
    /// and the caller decides whether to skip or report such records.
    pub fn from_api(record: ApiRecord) -> Option<Self> {
        match record {
            ApiRecord::A(r) => Some(Self::A(r.into())),
            ApiRecord::AAAA(r) => Some(Self::AAAA(r.into())),
            ApiRecord::CNAME(r) => Some(Self::CNAME(r.into())),
            ApiRecord::NS(r) => Some(Self::NS(r.into())),
            ApiRecord::MX(r) => Some(Self::MX(r.into())),
            ApiRecord::SRV(r) => Some(Self::SRV(r.into())),
            ApiRecord::SOA(r) => Some(Self::SOA(r.into())),
            ApiRecord::TXT(r) => Some(Self::TXT(r.into())),
            ApiRecord::CAA(_) | ApiRecord::PTR(_) => None,
        }
    }

    /// Convert to the wire record form. Fields are copied verbatim.
    ///
    /// Total: every user variant has a wire counterpart, and
    /// [`from_api`](Self::from_api) inverts this exactly.
    pub fn to_api(&self) -> ApiRecord {
        ApiRecord::from(self.clone())
    }
}

impl From<RecordData> for ApiRecord {
    fn from(data: RecordData) -> Self {
        match data {
            RecordData::A(r) => Self::A(r.into()),
            RecordData::AAAA(r) => Self::AAAA(r.into()),
            RecordData::CNAME(r) => Self::CNAME(r.into()),
            RecordData::NS(r) => Self::NS(r.into()),
            RecordData::MX(r) => Self::MX(r.into()),
            RecordData::SRV(r) => Self::SRV(r.into()),
            RecordData::SOA(r) => Self::SOA(r.into()),
            RecordData::TXT(r) => Self::TXT(r.into()),
        }
    }
}

// ============ Wire Record Set ============

/// A DNS record set as carried by the management API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRecordSet {
    /// Provider-assigned resource identifier. Absent on requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Fully qualified record set name.
    pub name: String,
    /// Resource type path. Absent on requests.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Concurrency token assigned by the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Tag sets attached to the record set. Each entry is an independent
    /// key/value map; the API carries them as a list, never merged.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<HashMap<String, String>>,
    /// Shared TTL and the per-kind record payloads.
    pub properties: ApiRecordSetProperties,
}

/// Properties of a wire record set: the shared TTL plus one typed
/// collection per record kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiRecordSetProperties {
    /// TTL in seconds applied to every record in the set.
    pub ttl: u32,
    #[serde(rename = "ARecords", default, skip_serializing_if = "Vec::is_empty")]
    pub a_records: Vec<ApiARecord>,
    #[serde(rename = "AAAARecords", default, skip_serializing_if = "Vec::is_empty")]
    pub aaaa_records: Vec<ApiAaaaRecord>,
    #[serde(rename = "NSRecords", default, skip_serializing_if = "Vec::is_empty")]
    pub ns_records: Vec<ApiNsRecord>,
    #[serde(rename = "MXRecords", default, skip_serializing_if = "Vec::is_empty")]
    pub mx_records: Vec<ApiMxRecord>,
    #[serde(rename = "SRVRecords", default, skip_serializing_if = "Vec::is_empty")]
    pub srv_records: Vec<ApiSrvRecord>,
    #[serde(rename = "TXTRecords", default, skip_serializing_if = "Vec::is_empty")]
    pub txt_records: Vec<ApiTxtRecord>,
    #[serde(rename = "CAARecords", default, skip_serializing_if = "Vec::is_empty")]
    pub caa_records: Vec<ApiCaaRecord>,
    #[serde(rename = "PTRRecords", default, skip_serializing_if = "Vec::is_empty")]
    pub ptr_records: Vec<ApiPtrRecord>,
    /// CNAME sets carry at most one record on the wire.
    #[serde(rename = "CNAMERecord", default, skip_serializing_if = "Option::is_none")]
    pub cname_record: Option<ApiCnameRecord>,
    /// SOA sets carry exactly one record on the wire.
    #[serde(rename = "SOARecord", default, skip_serializing_if = "Option::is_none")]
    pub soa_record: Option<ApiSoaRecord>,
}

impl ApiRecordSetProperties {
    /// Empty properties with the given TTL.
    pub fn new(ttl: u32) -> Self {
        Self {
            ttl,
            ..Self::default()
        }
    }

    /// Append a wire record into the collection matching its kind.
    ///
    /// A CNAME or SOA record replaces any previous value, since those
    /// sets are single-valued on the wire.
    pub fn push(&mut self, record: ApiRecord) {
        match record {
            ApiRecord::A(r) => self.a_records.push(r),
            ApiRecord::AAAA(r) => self.aaaa_records.push(r),
            ApiRecord::NS(r) => self.ns_records.push(r),
            ApiRecord::MX(r) => self.mx_records.push(r),
            ApiRecord::SRV(r) => self.srv_records.push(r),
            ApiRecord::TXT(r) => self.txt_records.push(r),
            ApiRecord::CAA(r) => self.caa_records.push(r),
            ApiRecord::PTR(r) => self.ptr_records.push(r),
            ApiRecord::CNAME(r) => self.cname_record = Some(r),
            ApiRecord::SOA(r) => self.soa_record = Some(r),
        }
    }

    /// Flatten every typed collection into one ordered record list.
    ///
    /// Order within each kind is preserved exactly as received.
    pub fn into_records(self) -> Vec<ApiRecord> {
        let mut records = Vec::new();
        records.extend(self.a_records.into_iter().map(ApiRecord::A));
        records.extend(self.aaaa_records.into_iter().map(ApiRecord::AAAA));
        if let Some(r) = self.cname_record {
            records.push(ApiRecord::CNAME(r));
        }
        records.extend(self.ns_records.into_iter().map(ApiRecord::NS));
        records.extend(self.mx_records.into_iter().map(ApiRecord::MX));
        records.extend(self.srv_records.into_iter().map(ApiRecord::SRV));
        if let Some(r) = self.soa_record {
            records.push(ApiRecord::SOA(r));
        }
        records.extend(self.txt_records.into_iter().map(ApiRecord::TXT));
        records.extend(self.caa_records.into_iter().map(ApiRecord::CAA));
        records.extend(self.ptr_records.into_iter().map(ApiRecord::PTR));
        records
    }
}
