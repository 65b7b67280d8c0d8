//! Shortcuts that combine parsing with a protobuf conversion.
//!
//! Handy at API boundaries where a request carries a plain string and the response wants a
//! [`pb::Uuid`] (or the other way around). The `must_*` variants panic and are only for input
//! known to be valid, such as test fixtures.

use crate::proto::pb;
use crate::{UuidResult, ValidatedUuid};

/// Parses `input` and converts it to a [`pb::Uuid`].
pub fn string_to_proto(input: &str) -> UuidResult<pb::Uuid> {
    ValidatedUuid::parse(input)?.to_proto()
}

/// Like [`string_to_proto`], panicking on error.
#[track_caller]
pub fn must_string_to_proto(input: &str) -> pb::Uuid {
    string_to_proto(input).unwrap_or_else(|err| panic!("{err}"))
}

/// Validates a [`pb::Uuid`] and returns its canonical text.
pub fn proto_to_string(message: Option<&pb::Uuid>) -> UuidResult<String> {
    Ok(ValidatedUuid::from_proto(message)?.to_string())
}

/// Like [`proto_to_string`], panicking on error.
#[track_caller]
pub fn must_proto_to_string(message: Option<&pb::Uuid>) -> String {
    proto_to_string(message).unwrap_or_else(|err| panic!("{err}"))
}

/// Validates a [`pb::Uuid`] without converting it.
pub fn validate_proto_uuid(message: Option<&pb::Uuid>) -> UuidResult<()> {
    ValidatedUuid::from_proto(message).map(|_| ())
}

/// Like [`validate_proto_uuid`], panicking on error.
#[track_caller]
pub fn must_validate_proto_uuid(message: Option<&pb::Uuid>) {
    validate_proto_uuid(message).unwrap_or_else(|err| panic!("{err}"))
}

/// Validates a UUID string without converting it.
pub fn validate_string_uuid(input: &str) -> UuidResult<()> {
    ValidatedUuid::parse(input).map(|_| ())
}

/// Like [`validate_string_uuid`], panicking on error.
#[track_caller]
pub fn must_validate_string_uuid(input: &str) {
    validate_string_uuid(input).unwrap_or_else(|err| panic!("{err}"))
}
