//! Application error types.
//!
//! Configuration problems and broken load data are distinct from queries
//! for unknown names: the latter are answered with "not found" and never
//! reach these types.

use crate::catalogue::CatalogueError;

/// Invalid or missing settings in the request document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A routing setting is out of range
    #[error("invalid routing settings: {0}")]
    InvalidRouting(String),

    /// A render setting is out of range
    #[error("invalid render settings: {0}")]
    InvalidRender(String),

    /// A request needs settings the document did not provide
    #[error("{settings} are required to answer {request} requests")]
    MissingSettings {
        settings: &'static str,
        request: &'static str,
    },
}

/// Top-level error for processing a request document.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed request document: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ConfigError::InvalidRender("width must be between 0 and 100000".into());
        assert_eq!(
            err.to_string(),
            "invalid render settings: width must be between 0 and 100000"
        );

        let err = ConfigError::MissingSettings {
            settings: "routing_settings",
            request: "Route",
        };
        assert_eq!(
            err.to_string(),
            "routing_settings are required to answer Route requests"
        );

        let err = AppError::from(CatalogueError::EmptyBus("14".into()));
        assert_eq!(err.to_string(), "bus \"14\" has no known stops");
    }

    #[test]
    fn json_errors_convert() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AppError::from(parse);
        assert!(err.to_string().starts_with("malformed request document"));
    }
}
