//! Protobuf message conversions.
//!
//! Two message shapes are supported:
//! - [`pb::Uuid`], the dedicated identifier message (`vuuid.v1.Uuid`, one string field `val`).
//! - [`pb::StringValue`], wire-compatible with `google.protobuf.StringValue`, for APIs that carry
//!   identifiers in a generic wrapped string.
//!
//! Message-typed fields in prost-generated code are `Option<T>`, so the decoding functions take
//! `Option<&T>` and report an absent message as [`UuidError::NilMessage`].

use crate::{ConversionContext, UuidError, UuidResult, ValidatedUuid};

/// Protobuf message types.
pub mod pb {
    /// `vuuid.v1.Uuid`
    ///
    /// ```proto
    /// message Uuid {
    ///   string val = 1;
    /// }
    /// ```
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct Uuid {
        #[prost(string, tag = "1")]
        pub val: ::prost::alloc::string::String,
    }

    /// Wire-compatible with `google.protobuf.StringValue`.
    #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
    pub struct StringValue {
        #[prost(string, tag = "1")]
        pub value: ::prost::alloc::string::String,
    }

    impl From<String> for StringValue {
        fn from(value: String) -> Self {
            Self { value }
        }
    }
}

impl ValidatedUuid {
    /// Converts to a [`pb::Uuid`] message.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Conversion`] wrapping [`UuidError::ZeroValue`] for the nil value.
    pub fn to_proto(&self) -> UuidResult<pb::Uuid> {
        let val = self
            .to_validated_string()
            .map_err(|err| UuidError::during(ConversionContext::ProtobufMarshalling, err))?;
        Ok(pb::Uuid { val })
    }

    /// Converts to a [`pb::Uuid`] message, panicking for the nil value.
    ///
    /// # Panics
    ///
    /// Panics if this is the nil value.
    #[track_caller]
    pub fn must_to_proto(&self) -> pb::Uuid {
        self.to_proto().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Decodes from a [`pb::Uuid`] message.
    ///
    /// # Errors
    ///
    /// - [`UuidError::NilMessage`] if `message` is `None`.
    /// - Any [`ValidatedUuid::parse`] error on `val`, wrapped in
    ///   [`ConversionContext::ProtobufUnmarshalling`].
    pub fn from_proto(message: Option<&pb::Uuid>) -> UuidResult<Self> {
        let message = message.ok_or(UuidError::NilMessage("protobuf UUID"))?;
        Self::parse(&message.val)
            .map_err(|err| UuidError::during(ConversionContext::ProtobufUnmarshalling, err))
    }

    /// Decodes from a [`pb::Uuid`] message, panicking on error.
    ///
    /// # Panics
    ///
    /// Panics if [`ValidatedUuid::from_proto`] fails.
    #[track_caller]
    pub fn must_from_proto(message: Option<&pb::Uuid>) -> Self {
        Self::from_proto(message).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Converts to a [`pb::StringValue`] message.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Conversion`] wrapping [`UuidError::ZeroValue`] for the nil value.
    pub fn to_string_value(&self) -> UuidResult<pb::StringValue> {
        let text = self
            .to_validated_string()
            .map_err(|err| UuidError::during(ConversionContext::StringValueConversion, err))?;
        Ok(pb::StringValue::from(text))
    }

    /// Decodes from a [`pb::StringValue`] message.
    ///
    /// # Errors
    ///
    /// - [`UuidError::NilMessage`] if `message` is `None`.
    /// - Any [`ValidatedUuid::parse`] error on the wrapped value.
    pub fn from_string_value(message: Option<&pb::StringValue>) -> UuidResult<Self> {
        let message = message.ok_or(UuidError::NilMessage("StringValue"))?;
        Self::parse(&message.value)
            .map_err(|err| UuidError::during(ConversionContext::StringValueConversion, err))
    }
}
