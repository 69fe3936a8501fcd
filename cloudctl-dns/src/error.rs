//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::record::RecordType;

/// Model layer error type.
///
/// The conversion functions between the user model and the wire model are
/// total and never produce one of these; errors arise only when parsing a
/// record type name or when assembling a typed record set from
/// dynamically typed input.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ModelError {
    /// The string does not name a supported record type
    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),

    /// A record of one type was supplied to a record set of another type
    #[error("Record type mismatch: expected {expected}, got {actual}")]
    RecordTypeMismatch {
        expected: RecordType,
        actual: RecordType,
    },
}

/// Convenience type alias for `Result<T, ModelError>`.
pub type Result<T> = std::result::Result<T, ModelError>;
