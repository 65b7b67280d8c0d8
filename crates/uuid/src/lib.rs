//! Validated UUIDs.
//!
//! [`ValidatedUuid`] wraps a [`uuid::Uuid`] and refuses the nil (all-zero) value. The nil UUID
//! is syntactically valid, which makes it an easy value to persist by accident: an unset field,
//! a default-initialised struct or an empty protobuf message all end up as zeros. This crate
//! makes every way in and every way out check for it.
//!
//! ## Ways in
//! - [`ValidatedUuid::new`] / [`ValidatedUuid::new_v7`] generate a fresh identifier.
//! - [`ValidatedUuid::parse`] validates text.
//! - [`ValidatedUuid::from_uuid`] validates an existing [`Uuid`].
//! - Decoding from serde, protobuf or SQLite (behind the `serde`, `proto` and `sqlite` features).
//!
//! Every inbound path ends in [`ValidatedUuid::parse`] or [`ValidatedUuid::from_uuid`], so the
//! only validation outcomes are [`UuidError::EmptyInput`], [`UuidError::MalformedText`] and
//! [`UuidError::ZeroValue`]. Decoders add [`UuidError::NilMessage`] for an absent container and
//! [`UuidError::UnsupportedColumnType`] for a column that is not text.
//!
//! ## Ways out
//! Every outbound conversion calls [`ValidatedUuid::validate`] first, so
//! `ValidatedUuid::default()` (the nil value) cannot be serialized, written to a database or put
//! into a protobuf message. [`fmt::Display`](std::fmt::Display) is the one unchecked path and is
//! meant for logs and error messages.
//!
//! ## Errors
//! Conversion failures are wrapped in [`UuidError::Conversion`], which names the path (for
//! example "database write") and keeps the cause. Use [`UuidError::root`] to get at the
//! underlying kind.
//!
//! ## Panicking variants
//! Functions named `must_*` panic instead of returning an error. They are for constants and
//! test fixtures only and must never see externally supplied input.

mod error;
mod validated;

#[cfg(feature = "proto")]
pub mod helpers;
#[cfg(feature = "proto")]
pub mod proto;
#[cfg(feature = "serde")]
mod serde_impl;
#[cfg(feature = "sqlite")]
mod sqlite;

// Re-export public types
pub use error::{ConversionContext, UuidError, UuidResult};
#[cfg(feature = "proto")]
pub use proto::pb;
pub use validated::{Uuid, ValidatedUuid};
