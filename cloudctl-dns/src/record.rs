//! DNS record payloads and the user-facing record union.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// DNS record type identifier.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"CNAME"`, etc.).
/// The set is closed: these are the only record types the user model
/// supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Name server record.
    Ns,
    /// Mail exchange record.
    Mx,
    /// Service locator record.
    Srv,
    /// Start of authority record.
    Soa,
    /// Text record.
    Txt,
}

impl RecordType {
    /// Uppercase name of this record type, as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Ns => "NS",
            Self::Mx => "MX",
            Self::Srv => "SRV",
            Self::Soa => "SOA",
            Self::Txt => "TXT",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ModelError;

    /// Case-insensitive parse of a record type name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::Aaaa),
            "CNAME" => Ok(Self::Cname),
            "NS" => Ok(Self::Ns),
            "MX" => Ok(Self::Mx),
            "SRV" => Ok(Self::Srv),
            "SOA" => Ok(Self::Soa),
            "TXT" => Ok(Self::Txt),
            _ => Err(ModelError::UnknownRecordType(s.to_string())),
        }
    }
}

// ============ Record Payloads ============

/// A record — maps a hostname to an IPv4 address.
///
/// Displays as the address literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ARecord {
    /// IPv4 address literal (e.g. `"203.0.113.5"`). Carried verbatim,
    /// never parsed or validated here.
    pub ipv4_address: String,
}

impl fmt::Display for ARecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ipv4_address)
    }
}

/// AAAA record — maps a hostname to an IPv6 address.
///
/// Displays as the address literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AaaaRecord {
    /// IPv6 address literal (e.g. `"2001:db8::1"`).
    pub ipv6_address: String,
}

impl fmt::Display for AaaaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ipv6_address)
    }
}

/// CNAME record — alias from one name to another.
///
/// Displays as the canonical name literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CnameRecord {
    /// Canonical (target) name.
    pub cname: String,
}

impl fmt::Display for CnameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cname)
    }
}

/// NS record — authoritative name server.
///
/// Displays as the nameserver literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NsRecord {
    /// Name server host name.
    pub nsdname: String,
}

impl fmt::Display for NsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.nsdname)
    }
}

/// TXT record — arbitrary text data.
///
/// Displays as the text value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxtRecord {
    /// Text content.
    pub value: String,
}

impl fmt::Display for TxtRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// MX record — mail exchange server.
///
/// Displays as `[preference,exchange]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MxRecord {
    /// Preference (lower values are preferred).
    pub preference: u16,
    /// Mail server host name.
    pub exchange: String,
}

impl fmt::Display for MxRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.preference, self.exchange)
    }
}

/// SRV record — service locator.
///
/// Displays as `[priority,weight,port,target]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SrvRecord {
    /// Priority (lower values are preferred).
    pub priority: u16,
    /// Weight for load balancing among same-priority targets.
    pub weight: u16,
    /// TCP/UDP port of the service.
    pub port: u16,
    /// Target host name providing the service.
    pub target: String,
}

impl fmt::Display for SrvRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{},{},{}]",
            self.priority, self.weight, self.port, self.target
        )
    }
}

/// SOA record — zone start of authority.
///
/// Displays as `[host,email,refreshTime,retryTime,expireTime,minimumTtl]`.
/// `serial_number` is not part of the display string; the omission is
/// long-standing list-output behavior and is kept as-is (pinned by a test)
/// so that changing it is a deliberate decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoaRecord {
    /// Primary name server for the zone.
    pub host: String,
    /// Responsible party mailbox, in domain-name form.
    pub email: String,
    /// Zone serial number.
    pub serial_number: u32,
    /// Refresh interval in seconds.
    pub refresh_time: u32,
    /// Retry interval in seconds.
    pub retry_time: u32,
    /// Expire time in seconds.
    pub expire_time: u32,
    /// Minimum TTL in seconds.
    pub minimum_ttl: u32,
}

impl fmt::Display for SoaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{},{},{},{},{}]",
            self.host,
            self.email,
            self.refresh_time,
            self.retry_time,
            self.expire_time,
            self.minimum_ttl
        )
    }
}

// ============ Record Union ============

/// Type-safe representation of DNS record data.
///
/// A closed union with one variant per supported record type. Use
/// [`record_type()`](Self::record_type) to get the [`RecordType`]
/// discriminant. Displaying a value renders the wrapped record's fixed
/// list form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum RecordData {
    /// A record — IPv4 address.
    A(ARecord),
    /// AAAA record — IPv6 address.
    AAAA(AaaaRecord),
    /// CNAME record — canonical name alias.
    CNAME(CnameRecord),
    /// NS record — authoritative name server.
    NS(NsRecord),
    /// MX record — mail exchange.
    MX(MxRecord),
    /// SRV record — service locator.
    SRV(SrvRecord),
    /// SOA record — zone start of authority.
    SOA(SoaRecord),
    /// TXT record — text data.
    TXT(TxtRecord),
}

impl RecordData {
    /// Returns the [`RecordType`] discriminant for this record data.
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::A(_) => RecordType::A,
            Self::AAAA(_) => RecordType::Aaaa,
            Self::CNAME(_) => RecordType::Cname,
            Self::NS(_) => RecordType::Ns,
            Self::MX(_) => RecordType::Mx,
            Self::SRV(_) => RecordType::Srv,
            Self::SOA(_) => RecordType::Soa,
            Self::TXT(_) => RecordType::Txt,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A(r) => r.fmt(f),
            Self::AAAA(r) => r.fmt(f),
            Self::CNAME(r) => r.fmt(f),
            Self::NS(r) => r.fmt(f),
            Self::MX(r) => r.fmt(f),
            Self::SRV(r) => r.fmt(f),
            Self::SOA(r) => r.fmt(f),
            Self::TXT(r) => r.fmt(f),
        }
    }
}

impl From<ARecord> for RecordData {
    fn from(record: ARecord) -> Self {
        Self::A(record)
    }
}

impl From<AaaaRecord> for RecordData {
    fn from(record: AaaaRecord) -> Self {
        Self::AAAA(record)
    }
}

impl From<CnameRecord> for RecordData {
    fn from(record: CnameRecord) -> Self {
        Self::CNAME(record)
    }
}

impl From<NsRecord> for RecordData {
    fn from(record: NsRecord) -> Self {
        Self::NS(record)
    }
}

impl From<MxRecord> for RecordData {
    fn from(record: MxRecord) -> Self {
        Self::MX(record)
    }
}

impl From<SrvRecord> for RecordData {
    fn from(record: SrvRecord) -> Self {
        Self::SRV(record)
    }
}

impl From<SoaRecord> for RecordData {
    fn from(record: SoaRecord) -> Self {
        Self::SOA(record)
    }
}

impl From<TxtRecord> for RecordData {
    fn from(record: TxtRecord) -> Self {
        Self::TXT(record)
    }
}

// ============ Typed Payload Trait ============

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::ARecord {}
    impl Sealed for super::AaaaRecord {}
    impl Sealed for super::CnameRecord {}
    impl Sealed for super::NsRecord {}
    impl Sealed for super::TxtRecord {}
    impl Sealed for super::MxRecord {}
    impl Sealed for super::SrvRecord {}
    impl Sealed for super::SoaRecord {}
}

/// A concrete record payload type.
///
/// Implemented by exactly the eight payload structs in this module; the
/// trait is sealed, so the union cannot be extended from outside the
/// crate. It ties each payload struct to its [`RecordType`] tag, which is
/// what lets [`RecordSet`](crate::RecordSet) enforce record/type agreement
/// through its type parameter.
pub trait Record: sealed::Sealed + Clone + fmt::Display {
    /// The record type tag for this payload type.
    const TYPE: RecordType;

    /// Wrap this record in the [`RecordData`] union.
    fn into_data(self) -> RecordData;

    /// Extract this record from the union.
    ///
    /// Returns `None` when the variant does not match `Self`.
    fn from_data(data: RecordData) -> Option<Self>
    where
        Self: Sized;
}

impl Record for ARecord {
    const TYPE: RecordType = RecordType::A;

    fn into_data(self) -> RecordData {
        RecordData::A(self)
    }

    fn from_data(data: RecordData) -> Option<Self> {
        match data {
            RecordData::A(record) => Some(record),
            _ => None,
        }
    }
}

impl Record for AaaaRecord {
    const TYPE: RecordType = RecordType::Aaaa;

    fn into_data(self) -> RecordData {
        RecordData::AAAA(self)
    }

    fn from_data(data: RecordData) -> Option<Self> {
        match data {
            RecordData::AAAA(record) => Some(record),
            _ => None,
        }
    }
}

impl Record for CnameRecord {
    const TYPE: RecordType = RecordType::Cname;

    fn into_data(self) -> RecordData {
        RecordData::CNAME(self)
    }

    fn from_data(data: RecordData) -> Option<Self> {
        match data {
            RecordData::CNAME(record) => Some(record),
            _ => None,
        }
    }
}

impl Record for NsRecord {
    const TYPE: RecordType = RecordType::Ns;

    fn into_data(self) -> RecordData {
        RecordData::NS(self)
    }

    fn from_data(data: RecordData) -> Option<Self> {
        match data {
            RecordData::NS(record) => Some(record),
            _ => None,
        }
    }
}

impl Record for MxRecord {
    const TYPE: RecordType = RecordType::Mx;

    fn into_data(self) -> RecordData {
        RecordData::MX(self)
    }

    fn from_data(data: RecordData) -> Option<Self> {
        match data {
            RecordData::MX(record) => Some(record),
            _ => None,
        }
    }
}

impl Record for SrvRecord {
    const TYPE: RecordType = RecordType::Srv;

    fn into_data(self) -> RecordData {
        RecordData::SRV(self)
    }

    fn from_data(data: RecordData) -> Option<Self> {
        match data {
            RecordData::SRV(record) => Some(record),
            _ => None,
        }
    }
}

impl Record for SoaRecord {
    const TYPE: RecordType = RecordType::Soa;

    fn into_data(self) -> RecordData {
        RecordData::SOA(self)
    }

    fn from_data(data: RecordData) -> Option<Self> {
        match data {
            RecordData::SOA(record) => Some(record),
            _ => None,
        }
    }
}

impl Record for TxtRecord {
    const TYPE: RecordType = RecordType::Txt;

    fn into_data(self) -> RecordData {
        RecordData::TXT(self)
    }

    fn from_data(data: RecordData) -> Option<Self> {
        match data {
            RecordData::TXT(record) => Some(record),
            _ => None,
        }
    }
}
