//! Error types for the assessment core.
//!
//! [`AssessmentError`] covers rejected user input during a session. Every
//! variant is recoverable: the operation that produced it leaves state
//! untouched, so callers can re-render the previous state and re-prompt.
//!
//! [`CatalogError`] is raised only while building a catalog from
//! configuration.

use thiserror::Error;

/// Errors returned by session operations on the selector and the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// The group is not registered, or the value is not one of its options.
    #[error("invalid selection: group '{group}' has no option '{value}'")]
    InvalidSelection { group: String, value: String },

    /// No criterion with this name exists in the catalog.
    #[error("unknown criterion: {0}")]
    UnknownCriterion(String),

    /// The criterion exists but has no option with this value.
    #[error("invalid option '{value}' for criterion '{criterion}'")]
    InvalidOption { criterion: String, value: String },

    /// The engine was already initialized; use an explicit reinitialize.
    #[error("evaluation engine is already initialized")]
    AlreadyInitialized,
}

/// Errors found while validating catalog definitions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("{kind} identifier must not be empty")]
    EmptyIdentifier { kind: &'static str },

    #[error("criterion '{0}' has no options")]
    NoOptions(String),

    #[error("'{owner}' declares option '{value}' more than once")]
    DuplicateOption { owner: String, value: String },

    #[error("duplicate criterion name: {0}")]
    DuplicateCriterion(String),

    #[error("duplicate group id: {0}")]
    DuplicateGroup(String),

    #[error("score mapping has no tiers")]
    EmptyScoreMapping,

    #[error("score {score} for rank {rank} is outside 0..=100")]
    ScoreOutOfRange { rank: usize, score: f64 },

    /// Ranks run best to worst, so a later tier may not outscore an earlier one.
    #[error("score for rank {rank} is higher than the score for rank {}", .rank - 1)]
    ScoresNotMonotonic { rank: usize },

    #[error("criterion '{criterion}' has {options} options but the score mapping has only {tiers} tiers")]
    TooManyOptions {
        criterion: String,
        options: usize,
        tiers: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = AssessmentError::InvalidOption {
            criterion: "blockSize".into(),
            value: "value9".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid option 'value9' for criterion 'blockSize'"
        );

        let err = CatalogError::ScoresNotMonotonic { rank: 3 };
        assert_eq!(
            err.to_string(),
            "score for rank 3 is higher than the score for rank 2"
        );
    }
}
