//! Error types.
//!
//! The engine has deliberately few error surfaces: lookup misses are
//! `Option::None` and unsatisfied rule preconditions are reported as
//! plain failure, never raised. The one place a typed error exists is
//! the boolean expression evaluator, where malformed input and unknown
//! identifiers must be told apart.

use thiserror::Error;

/// Errors produced by the boolean expression evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An identifier token was not found in the fact store.
    #[error("unknown fact '{0}' in expression")]
    UnknownFact(String),

    /// A connective appeared where a fact identifier was expected.
    #[error("expected a fact identifier, found '{token}'")]
    UnexpectedToken {
        /// The offending token.
        token: String,
    },

    /// The expression ended mid-clause.
    #[error("expression ended where a fact identifier was expected")]
    UnexpectedEnd,

    /// A complete expression was followed by leftover tokens.
    #[error("unexpected trailing token '{token}'")]
    TrailingInput {
        /// The first leftover token.
        token: String,
    },

    /// The expression contained no tokens at all.
    #[error("empty expression")]
    Empty,
}
