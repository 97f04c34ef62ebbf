use std::error::Error;
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage backends regardless of the underlying database.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {message}")]
    Unavailable {
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn unavailable_keeps_message_and_source() {
        let err = StorageError::unavailable(
            "failed to list games".into(),
            io::Error::new(io::ErrorKind::Other, "disk gone"),
        );

        assert_eq!(err.to_string(), "storage unavailable: failed to list games");
        let source = err.source().expect("source is kept");
        assert_eq!(source.to_string(), "disk gone");
    }
}
