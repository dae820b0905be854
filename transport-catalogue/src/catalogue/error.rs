//! Catalogue error types.
//!
//! Every variant is a broken load phase rather than an unknown name in a
//! query: queries for unknown buses or stops return `None` instead.

/// Contract violations detected while loading or reading the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    /// A stop with this name was already added
    #[error("stop {0:?} is already in the catalogue")]
    DuplicateStop(String),

    /// A bus with this name was already added
    #[error("bus {0:?} is already in the catalogue")]
    DuplicateBus(String),

    /// A name that should refer to a loaded stop does not
    #[error("unknown stop {stop:?} referenced by {context}")]
    UnknownStop { stop: String, context: String },

    /// None of the stops listed for a bus could be resolved
    #[error("bus {0:?} has no known stops")]
    EmptyBus(String),

    /// Neither direction of a stop pair has a road distance
    #[error("no road distance between {from:?} and {to:?} in either direction")]
    MissingDistance { from: String, to: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogueError::DuplicateStop("Marushkino".into());
        assert_eq!(err.to_string(), "stop \"Marushkino\" is already in the catalogue");

        let err = CatalogueError::UnknownStop {
            stop: "Nowhere".into(),
            context: "bus \"750\"".into(),
        };
        assert_eq!(err.to_string(), "unknown stop \"Nowhere\" referenced by bus \"750\"");

        let err = CatalogueError::EmptyBus("828".into());
        assert_eq!(err.to_string(), "bus \"828\" has no known stops");

        let err = CatalogueError::MissingDistance {
            from: "A".into(),
            to: "C".into(),
        };
        assert_eq!(
            err.to_string(),
            "no road distance between \"A\" and \"C\" in either direction"
        );
    }
}
