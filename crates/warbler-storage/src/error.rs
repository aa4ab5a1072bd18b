use sea_orm::{DbErr, SqlErr};

/// Errors that can occur within the storage layer.
///
/// Constraint violations reported by the database are classified as
/// [`StorageError::Integrity`] so callers can tell a duplicate username
/// apart from a broken connection.
///
/// # Examples
///
/// ```rust
/// use warbler_storage::error::StorageError;
///
/// let err = StorageError::NotFound {
///     entity: "user",
///     id: "42".to_string(),
/// };
/// assert!(err.to_string().contains("user"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Input rejected before anything was staged.
    #[error("Storage: invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// A unique, foreign-key or not-null constraint was violated.
    #[error("Storage: integrity violation: {0}")]
    Integrity(String),

    /// A required record was not found in the database.
    #[error("Storage: {entity} not found (id={id})")]
    NotFound { entity: &'static str, id: String },

    /// bcrypt failed to hash or verify a password.
    #[error("Storage: password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Any other database error.
    #[error("Storage: database error: {0}")]
    Database(DbErr),
}

impl StorageError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Returns true for unique / foreign-key / not-null violations.
    pub fn is_integrity(&self) -> bool {
        matches!(self, Self::Integrity(_))
    }
}

impl From<DbErr> for StorageError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::Integrity(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::Integrity(msg),
            _ => {
                // NOT NULL 违例没有独立的 SqlErr 分类，按引擎报错文本识别
                let msg = err.to_string();
                if is_not_null_violation(&msg) {
                    Self::Integrity(msg)
                } else {
                    Self::Database(err)
                }
            }
        }
    }
}

fn is_not_null_violation(msg: &str) -> bool {
    // SQLite: "NOT NULL constraint failed", PostgreSQL: "violates not-null constraint"
    msg.contains("NOT NULL constraint failed") || msg.contains("violates not-null constraint")
}

/// Convenience `Result` alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_null_messages_are_recognized() {
        assert!(is_not_null_violation(
            "Execution Error: error returned from database: (code: 1299) NOT NULL constraint failed: users.email"
        ));
        assert!(is_not_null_violation(
            "null value in column \"email\" of relation \"users\" violates not-null constraint"
        ));
        assert!(!is_not_null_violation("connection refused"));
    }

    #[test]
    fn unclassified_db_errors_stay_database_errors() {
        let err: StorageError = DbErr::Custom("pool timed out".into()).into();
        assert!(matches!(err, StorageError::Database(_)));
        assert!(!err.is_integrity());
    }
}
