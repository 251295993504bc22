//! Storage error type.

use std::path::PathBuf;

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Record does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Key contains characters outside `[A-Za-z0-9_-]`.
    InvalidKey,
    /// Record failed validation.
    Invalid,
    /// Stored data could not be decoded.
    Corrupt,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Key or file the error relates to.
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g. "Fs", "Memory").
    pub backend: Option<&'static str>,
    message: Option<String>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            message: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach a human-readable message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// A record failed validation.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(StorageErrorKind::Invalid).with_message(message)
    }

    /// A record with the given id does not exist.
    #[must_use]
    pub fn not_found(id: &str) -> Self {
        Self::new(StorageErrorKind::NotFound).with_message(format!("no record with id '{id}'"))
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            _ => StorageErrorKind::Other,
        };
        Self::new(kind).with_source(err).with_path(path)
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // "[Backend] Kind: message: source (path: data/weldifyJobs.json)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidKey => "Invalid key",
            StorageErrorKind::Invalid => "Invalid record",
            StorageErrorKind::Corrupt => "Corrupt data",
            StorageErrorKind::Other => "Error",
        };
        write!(f, "{kind_str}")?;

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display_full() {
        let err = StorageError::io(
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            "/data/weldifyJobs.json",
        )
        .with_backend("Fs");
        assert_eq!(err.kind, StorageErrorKind::PermissionDenied);
        assert_eq!(
            err.to_string(),
            "[Fs] Permission denied: denied (path: /data/weldifyJobs.json)"
        );
    }

    #[test]
    fn test_display_message_only() {
        let err = StorageError::invalid("job name is required");
        assert_eq!(err.to_string(), "Invalid record: job name is required");
    }

    #[test]
    fn test_source_exposed() {
        use std::error::Error;

        let err = StorageError::io(std::io::Error::other("boom"), "x");
        assert_eq!(err.kind, StorageErrorKind::Other);
        assert!(err.source().is_some());
        assert!(StorageError::not_found("42").source().is_none());
    }
}
