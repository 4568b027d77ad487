use sea_orm::{DbErr, SqlErr};

use super::Error;

/// Strategy for handling errors in a retry context
#[derive(Debug, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                // Connection acquisition errors - transient, should retry
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                // Connection errors - transient, should retry
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // Unique violations come from two requests allocating the same employee
                // number, a fresh attempt reads the new maximum
                err if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                    ErrorRetryStrategy::Retry
                }

                _ => ErrorRetryStrategy::Fail,
            },

            // Not found & validation errors - the request itself is wrong
            Self::RecordError(_) => ErrorRetryStrategy::Fail,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // InternalError - permanent failures (internal error within StaffDesk's code)
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbErr, RuntimeErr};

    use super::ErrorRetryStrategy;
    use crate::server::error::{record::RecordError, Error};

    #[test]
    fn connection_errors_are_retried() {
        let err = Error::DbErr(DbErr::Conn(RuntimeErr::Internal("refused".to_string())));
        assert_eq!(err.to_retry_strategy(), ErrorRetryStrategy::Retry);
    }

    #[test]
    fn record_and_query_errors_fail() {
        let err = Error::from(RecordError::EmployeeNotFound(1));
        assert_eq!(err.to_retry_strategy(), ErrorRetryStrategy::Fail);

        let err = Error::DbErr(DbErr::Custom("syntax".to_string()));
        assert_eq!(err.to_retry_strategy(), ErrorRetryStrategy::Fail);
    }
}
