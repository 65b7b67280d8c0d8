//! SQLite column support via `rusqlite`.
//!
//! A [`ValidatedUuid`] is stored as canonical `TEXT`. Reading accepts `TEXT` or `BLOB` columns,
//! treating blob bytes as text, so identifiers written by other tools as UTF-8 blobs still load.

use crate::{ConversionContext, UuidError, ValidatedUuid};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

impl ToSql for ValidatedUuid {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let text = self.to_validated_string().map_err(|err| {
            rusqlite::Error::ToSqlConversionFailure(Box::new(UuidError::during(
                ConversionContext::DatabaseWrite,
                err,
            )))
        })?;
        Ok(ToSqlOutput::from(text))
    }
}

impl FromSql for ValidatedUuid {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = match value {
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => String::from_utf8_lossy(bytes),
            ValueRef::Null => return Err(scan_error(UuidError::NilMessage("database value"))),
            other => {
                return Err(scan_error(UuidError::UnsupportedColumnType(
                    other.data_type().to_string(),
                )))
            }
        };

        ValidatedUuid::parse(&text).map_err(scan_error)
    }
}

fn scan_error(err: UuidError) -> FromSqlError {
    FromSqlError::Other(Box::new(UuidError::during(
        ConversionContext::DatabaseScan,
        err,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::{params, Connection};

    const VALID: &str = "550e8400-e29b-41d4-a716-446655440000";

    fn scan_root(result: FromSqlResult<ValidatedUuid>) -> UuidError {
        match result {
            Err(FromSqlError::Other(source)) => {
                let err = source
                    .downcast::<UuidError>()
                    .expect("scan errors carry a UuidError");
                assert_eq!(err.context(), Some(ConversionContext::DatabaseScan));
                match *err {
                    UuidError::Conversion { source, .. } => *source,
                    other => other,
                }
            }
            other => panic!("Expected FromSqlError::Other, got {other:?}"),
        }
    }

    fn memory_table() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE patients (id TEXT)").unwrap();
        conn
    }

    #[test]
    fn test_to_sql_emits_canonical_text() {
        let uuid = ValidatedUuid::must_parse(VALID);

        match uuid.to_sql().unwrap() {
            ToSqlOutput::Owned(rusqlite::types::Value::Text(text)) => assert_eq!(text, VALID),
            other => panic!("Expected owned text, got {other:?}"),
        }
    }

    #[test]
    fn test_to_sql_zero_fails() {
        match ValidatedUuid::default().to_sql() {
            Err(rusqlite::Error::ToSqlConversionFailure(source)) => {
                assert!(source.to_string().contains("during database write"));
                let err = source.downcast_ref::<UuidError>().unwrap();
                assert!(matches!(err.root(), UuidError::ZeroValue));
            }
            other => panic!("Expected ToSqlConversionFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_column_result_text_and_blob() {
        let from_text = ValidatedUuid::column_result(ValueRef::Text(VALID.as_bytes())).unwrap();
        let from_blob = ValidatedUuid::column_result(ValueRef::Blob(VALID.as_bytes())).unwrap();

        assert_eq!(from_text.to_string(), VALID);
        assert_eq!(from_blob, from_text);
    }

    #[test]
    fn test_column_result_null_fails() {
        let err = scan_root(ValidatedUuid::column_result(ValueRef::Null));

        assert!(matches!(err, UuidError::NilMessage(_)));
    }

    #[test]
    fn test_column_result_unsupported_types_fail() {
        let integer = scan_root(ValidatedUuid::column_result(ValueRef::Integer(42)));
        let real = scan_root(ValidatedUuid::column_result(ValueRef::Real(1.5)));

        assert!(matches!(integer, UuidError::UnsupportedColumnType(_)));
        assert!(matches!(real, UuidError::UnsupportedColumnType(_)));
    }

    #[test]
    fn test_column_result_invalid_text_fails() {
        let empty = scan_root(ValidatedUuid::column_result(ValueRef::Text(b"")));
        let malformed = scan_root(ValidatedUuid::column_result(ValueRef::Text(b"invalid")));
        let nil = scan_root(ValidatedUuid::column_result(ValueRef::Text(
            b"00000000-0000-0000-0000-000000000000",
        )));
        let not_utf8 = scan_root(ValidatedUuid::column_result(ValueRef::Blob(&[0xff, 0xfe])));

        assert!(matches!(empty, UuidError::EmptyInput));
        assert!(matches!(malformed, UuidError::MalformedText(_)));
        assert!(matches!(nil, UuidError::ZeroValue));
        assert!(matches!(not_utf8, UuidError::MalformedText(_)));
    }

    #[test]
    fn test_database_round_trip() {
        let conn = memory_table();
        let original = ValidatedUuid::new();

        conn.execute("INSERT INTO patients (id) VALUES (?1)", params![original])
            .unwrap();

        let stored: String = conn
            .query_row("SELECT id FROM patients", [], |row| row.get(0))
            .unwrap();
        let loaded: ValidatedUuid = conn
            .query_row("SELECT id FROM patients", [], |row| row.get(0))
            .unwrap();

        assert_eq!(stored, original.to_string());
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_database_write_of_zero_fails() {
        let conn = memory_table();
        let result = conn.execute(
            "INSERT INTO patients (id) VALUES (?1)",
            params![ValidatedUuid::default()],
        );

        assert!(matches!(
            result,
            Err(rusqlite::Error::ToSqlConversionFailure(_))
        ));
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_database_read_of_null_and_integer_fail() {
        let conn = Connection::open_in_memory().unwrap();

        let null = conn.query_row("SELECT NULL", [], |row| row.get::<_, ValidatedUuid>(0));
        let integer = conn.query_row("SELECT 7", [], |row| row.get::<_, ValidatedUuid>(0));

        assert!(null.is_err());
        match integer {
            Err(rusqlite::Error::FromSqlConversionFailure(_, _, source)) => {
                let err = source.downcast_ref::<UuidError>().unwrap();
                assert!(matches!(err.root(), UuidError::UnsupportedColumnType(_)));
            }
            other => panic!("Expected FromSqlConversionFailure, got {other:?}"),
        }
    }
}
