use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum StorageError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        // Given a StorageError with a Storage variant
        let error = StorageError::Storage("Connection failed".to_string());

        // When converting to a string
        let error_string = error.to_string();

        // Then it should format correctly
        assert_eq!(error_string, "Storage error: Connection failed");
    }

    #[test]
    fn test_config_error_display() {
        // Given a StorageError with a Config variant
        let error = StorageError::Config("DATA_STORE_TYPE must be set".to_string());

        // When converting to a string
        let error_string = error.to_string();

        // Then it should format correctly
        assert_eq!(
            error_string,
            "Configuration error: DATA_STORE_TYPE must be set"
        );
    }

    #[test]
    fn test_from_sqlx_error() {
        // Given a sqlx error
        let sqlx_error = sqlx::Error::PoolTimedOut;

        // When converting to StorageError
        let storage_error = StorageError::from(sqlx_error);

        // Then it should be a Storage variant carrying the engine message
        match storage_error {
            StorageError::Storage(msg) => {
                assert!(!msg.is_empty(), "Error message should not be empty");
            }
            _ => panic!("Expected Storage variant"),
        }
    }

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<StorageError>();
    }
}
