//! Outcomes a query can end in besides a successful result.

use thiserror::Error;

/// Non-success outcomes shared by the query and recommendation engines.
///
/// `Ineligible` is a business outcome (the title exists but does not meet
/// the reporting threshold), not a failure; see `is_failure`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Title, actor or director is not in the catalog
    #[error("{entity} '{name}' not found")]
    NotFound { entity: String, name: String },

    /// Unrecognized month or weekday name
    #[error("Invalid {argument}: '{value}'")]
    InvalidArgument { argument: String, value: String },

    /// The movie has fewer votes than the reporting threshold
    #[error("'{title}' has {vote_count} votes, below the minimum of {threshold}")]
    Ineligible {
        title: String,
        vote_count: u32,
        threshold: u32,
    },

    /// The dataset lacks attributes the query structurally requires
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl QueryError {
    pub fn not_found(entity: &str, name: &str) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            name: name.trim().to_string(),
        }
    }

    pub fn invalid_argument(argument: &str, value: &str) -> Self {
        Self::InvalidArgument {
            argument: argument.to_string(),
            value: value.to_string(),
        }
    }

    /// `false` for outcomes that are a valid answer rather than a fault
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Ineligible { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ineligible_is_not_a_failure() {
        let outcome = QueryError::Ineligible {
            title: "Heat".to_string(),
            vote_count: 1999,
            threshold: 2000,
        };
        assert!(!outcome.is_failure());
        assert!(QueryError::not_found("Movie", "Heat").is_failure());
        assert!(QueryError::Configuration("no genres".to_string()).is_failure());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            QueryError::not_found("Actor", "  Tom Hanks ").to_string(),
            "Actor 'Tom Hanks' not found"
        );
        assert_eq!(
            QueryError::invalid_argument("month", "smarch").to_string(),
            "Invalid month: 'smarch'"
        );
    }
}
