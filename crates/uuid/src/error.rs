use std::fmt;

/// The conversion path an error was raised on.
///
/// Used as context by [`UuidError::Conversion`] so that a caller can tell a failed database
/// write apart from a failed protobuf marshal without losing the underlying cause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversionContext {
    Serialization,
    Deserialization,
    DatabaseWrite,
    DatabaseScan,
    ProtobufMarshalling,
    ProtobufUnmarshalling,
    StringValueConversion,
}

impl fmt::Display for ConversionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Serialization => "serialization",
            Self::Deserialization => "deserialization",
            Self::DatabaseWrite => "database write",
            Self::DatabaseScan => "database scan",
            Self::ProtobufMarshalling => "protobuf marshalling",
            Self::ProtobufUnmarshalling => "protobuf unmarshalling",
            Self::StringValueConversion => "StringValue conversion",
        };
        f.write_str(label)
    }
}

/// Error type for validated UUID operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// The input text was the empty string.
    #[error("UUID cannot be empty")]
    EmptyInput,
    /// The input text is not a UUID.
    #[error("invalid UUID format: {0}")]
    MalformedText(#[source] uuid::Error),
    /// The value is the all-zero (nil) UUID.
    #[error("UUID cannot be nil/zero value")]
    ZeroValue,
    /// The container expected to carry the UUID was absent.
    #[error("{0} cannot be nil")]
    NilMessage(&'static str),
    /// A storage column held a type that cannot be read as text.
    #[error("cannot scan {0} into UUID")]
    UnsupportedColumnType(String),
    /// A validation error raised while converting to or from an external representation.
    #[error("UUID validation failed during {context}: {source}")]
    Conversion {
        context: ConversionContext,
        #[source]
        source: Box<UuidError>,
    },
}

impl UuidError {
    pub(crate) fn during(context: ConversionContext, source: UuidError) -> Self {
        Self::Conversion {
            context,
            source: Box::new(source),
        }
    }

    /// Returns the innermost error kind, looking through any conversion context.
    pub fn root(&self) -> &UuidError {
        match self {
            Self::Conversion { source, .. } => source.root(),
            other => other,
        }
    }

    /// Returns the conversion context, if this error was raised on a conversion path.
    pub fn context(&self) -> Option<ConversionContext> {
        match self {
            Self::Conversion { context, .. } => Some(*context),
            _ => None,
        }
    }
}

/// Result type for validated UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_conversion_message_names_context_and_cause() {
        let err = UuidError::during(ConversionContext::DatabaseWrite, UuidError::ZeroValue);

        assert_eq!(
            err.to_string(),
            "UUID validation failed during database write: UUID cannot be nil/zero value"
        );
    }

    #[test]
    fn test_root_looks_through_nested_context() {
        let inner = UuidError::during(ConversionContext::DatabaseScan, UuidError::EmptyInput);
        let outer = UuidError::during(ConversionContext::Deserialization, inner);

        assert!(matches!(outer.root(), UuidError::EmptyInput));
        assert_eq!(outer.context(), Some(ConversionContext::Deserialization));
    }

    #[test]
    fn test_source_exposes_wrapped_cause() {
        let err = UuidError::during(ConversionContext::ProtobufMarshalling, UuidError::ZeroValue);
        let source = err.source().expect("conversion errors carry a source");

        assert_eq!(source.to_string(), "UUID cannot be nil/zero value");
    }

    #[test]
    fn test_plain_kind_has_no_context() {
        assert_eq!(UuidError::ZeroValue.context(), None);
        assert!(matches!(UuidError::ZeroValue.root(), UuidError::ZeroValue));
    }
}
