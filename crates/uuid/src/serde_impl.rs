//! Serde support.
//!
//! A [`ValidatedUuid`] serializes as its canonical text form. Serializing the nil value is an
//! error rather than producing `"00000000-0000-0000-0000-000000000000"`, and deserializing runs
//! the same validation as [`ValidatedUuid::parse`].

use crate::{ConversionContext, UuidError, ValidatedUuid};

impl serde::Serialize for ValidatedUuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let text = self
            .to_validated_string()
            .map_err(|err| UuidError::during(ConversionContext::Serialization, err))
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        serializer.serialize_str(&text)
    }
}

impl<'de> serde::Deserialize<'de> for ValidatedUuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ValidatedUuid::parse(&s)
            .map_err(|err| UuidError::during(ConversionContext::Deserialization, err))
            .map_err(<D::Error as serde::de::Error>::custom)
    }
}
