use crate::error::AppError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Utility for converting database errors to structured AppError variants.
///
/// Unique violations become `AppError::Duplicate` with the key extracted from
/// the PostgreSQL detail line; everything else is reported as a generic
/// database failure carrying the operation name.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    ///
    /// # Arguments
    /// * `error` - The Diesel error to convert
    /// * `operation` - Description of the database operation that failed
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                let entity = info.table_name().unwrap_or("usuarios").to_string();
                let key = info
                    .details()
                    .and_then(Self::extract_key_value)
                    .or_else(|| Self::extract_key_value(info.message()));

                match key {
                    Some((field, value)) => AppError::Duplicate {
                        entity,
                        field,
                        value,
                    },
                    None => AppError::Duplicate {
                        entity,
                        field: info.column_name().unwrap_or("id").to_string(),
                        value: "duplicate_value".to_string(),
                    },
                }
            }
            DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
                AppError::Database {
                    operation: operation.to_string(),
                    source: anyhow::Error::msg(format!(
                        "Connection closed: {}",
                        info.message()
                    )),
                }
            }
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    /// Extracts `(field, value)` from a `Key (field)=(value)` fragment.
    pub fn extract_key_value(text: &str) -> Option<(String, String)> {
        let start = text.find("Key (")? + "Key (".len();
        let rest = &text[start..];
        let field_end = rest.find(")=(")?;
        let field = &rest[..field_end];
        let value_part = &rest[field_end + ")=(".len()..];
        let value_end = value_part.find(')')?;
        Some((field.to_string(), value_part[..value_end].to_string()))
    }
}
