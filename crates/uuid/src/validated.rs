//! The [`ValidatedUuid`] type and its construction and text conversions.

use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// A UUID that is guaranteed not to be the nil (all-zero) value.
///
/// Every public constructor rejects the nil UUID, so a value obtained from [`ValidatedUuid::new`],
/// [`ValidatedUuid::parse`], [`ValidatedUuid::from_uuid`] or one of the decoding paths can be
/// relied on.
///
/// The one exception is [`Default`], which yields the nil value so that `ValidatedUuid` can sit
/// inside `#[derive(Default)]` structs. That value reports `true` from
/// [`ValidatedUuid::is_zero`] and is refused by every outbound conversion.
///
/// # Display format
/// Displays as canonical lowercase hyphenated text, for example
/// `550e8400-e29b-41d4-a716-446655440000`. Display never validates; use
/// [`ValidatedUuid::to_validated_string`] where the text must be a valid identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidatedUuid(Uuid);

impl ValidatedUuid {
    /// Generates a new random (version 4) identifier.
    ///
    /// The generator never yields the nil UUID, so this cannot fail.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Generates a new time-ordered (version 7) identifier.
    pub fn new_v7() -> Self {
        Self(Uuid::now_v7())
    }

    /// Parses and validates a UUID string.
    ///
    /// Any form accepted by [`Uuid::parse_str`] is allowed (hyphenated, simple, braced, URN).
    /// Canonical hyphenated input round-trips exactly through [`fmt::Display`].
    ///
    /// # Errors
    ///
    /// - [`UuidError::EmptyInput`] if `input` is the empty string.
    /// - [`UuidError::MalformedText`] if `input` is not a UUID.
    /// - [`UuidError::ZeroValue`] if `input` is the nil UUID.
    pub fn parse(input: &str) -> UuidResult<Self> {
        if input.is_empty() {
            return Err(UuidError::EmptyInput);
        }

        let parsed = Uuid::parse_str(input).map_err(UuidError::MalformedText)?;
        Self::from_uuid(parsed)
    }

    /// Parses a UUID string, panicking on error.
    ///
    /// Only for input known to be valid ahead of time, such as constants and test fixtures.
    /// Never call this on externally supplied text.
    ///
    /// # Panics
    ///
    /// Panics if [`ValidatedUuid::parse`] fails.
    #[track_caller]
    pub fn must_parse(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Wraps an existing [`Uuid`], rejecting the nil value.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::ZeroValue`] if `uuid` is nil.
    pub fn from_uuid(uuid: Uuid) -> UuidResult<Self> {
        let candidate = Self(uuid);
        candidate.validate()?;
        Ok(candidate)
    }

    /// Wraps an existing [`Uuid`], panicking if it is nil.
    ///
    /// # Panics
    ///
    /// Panics if `uuid` is nil.
    #[track_caller]
    pub fn must_from_uuid(uuid: Uuid) -> Self {
        Self::from_uuid(uuid).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Returns the inner [`Uuid`].
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns true if this is the nil value.
    pub fn is_zero(&self) -> bool {
        self.0.is_nil()
    }

    /// Checks that this is not the nil value.
    ///
    /// Every outbound conversion calls this before producing output.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::ZeroValue`] for the nil value.
    pub fn validate(&self) -> UuidResult<()> {
        if self.is_zero() {
            return Err(UuidError::ZeroValue);
        }
        Ok(())
    }

    /// Returns the canonical text form after validating.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::ZeroValue`] for the nil value.
    pub fn to_validated_string(&self) -> UuidResult<String> {
        self.validate()?;
        Ok(self.to_string())
    }
}

impl fmt::Display for ValidatedUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ValidatedUuid {
    type Err = UuidError;

    /// Equivalent to [`ValidatedUuid::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValidatedUuid::parse(s)
    }
}

impl TryFrom<Uuid> for ValidatedUuid {
    type Error = UuidError;

    fn try_from(value: Uuid) -> Result<Self, Self::Error> {
        ValidatedUuid::from_uuid(value)
    }
}

impl TryFrom<&str> for ValidatedUuid {
    type Error = UuidError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ValidatedUuid::parse(value)
    }
}

impl From<ValidatedUuid> for Uuid {
    fn from(value: ValidatedUuid) -> Self {
        value.0
    }
}
