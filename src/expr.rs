//! Boolean expression evaluation over stored facts.
//!
//! Expressions are whitespace-separated tokens: fact identifiers plus
//! the literal connectives `and`, `or`, `not`, with the usual
//! precedence `not` > `and` > `or` and no parentheses. Identifier
//! tokens are looked up in the store and thresholded to a boolean
//! directly; there is no textual substitution step, so identifiers
//! containing whitespace simply cannot appear in an expression, and an
//! unknown identifier is a typed error rather than a latent evaluation
//! fault.

use crate::error::EvalError;
use crate::fact;
use crate::store::FactStore;

/// Evaluates a boolean expression against the store.
///
/// # Errors
///
/// [`EvalError::UnknownFact`] if an identifier token is not in the
/// store; [`EvalError::UnexpectedToken`], [`EvalError::UnexpectedEnd`],
/// [`EvalError::TrailingInput`] or [`EvalError::Empty`] for malformed
/// input.
///
/// # Examples
///
/// ```
/// use credo::{evaluate, FactStore};
///
/// let mut store = FactStore::new();
/// store.tell("rain", 0.8);
/// store.tell("umbrella", 0.2);
///
/// assert_eq!(evaluate(&store, "rain and not umbrella"), Ok(true));
/// assert_eq!(evaluate(&store, "rain and umbrella"), Ok(false));
/// ```
pub fn evaluate(store: &FactStore, expression: &str) -> Result<bool, EvalError> {
    let tokens: Vec<&str> = expression.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser {
        store,
        tokens: &tokens,
        pos: 0,
    };
    let value = parser.or_clause()?;

    match parser.peek() {
        Some(token) => Err(EvalError::TrailingInput {
            token: token.to_string(),
        }),
        None => Ok(value),
    }
}

struct Parser<'a> {
    store: &'a FactStore,
    tokens: &'a [&'a str],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn or_clause(&mut self) -> Result<bool, EvalError> {
        let mut value = self.and_clause()?;
        while self.peek() == Some("or") {
            self.pos += 1;
            // No short-circuit: the right side must still be well formed.
            let rhs = self.and_clause()?;
            value = value || rhs;
        }
        Ok(value)
    }

    fn and_clause(&mut self) -> Result<bool, EvalError> {
        let mut value = self.not_clause()?;
        while self.peek() == Some("and") {
            self.pos += 1;
            let rhs = self.not_clause()?;
            value = value && rhs;
        }
        Ok(value)
    }

    fn not_clause(&mut self) -> Result<bool, EvalError> {
        if self.peek() == Some("not") {
            self.pos += 1;
            return Ok(!self.not_clause()?);
        }
        self.atom()
    }

    fn atom(&mut self) -> Result<bool, EvalError> {
        let Some(token) = self.advance() else {
            return Err(EvalError::UnexpectedEnd);
        };
        if token == "and" || token == "or" {
            return Err(EvalError::UnexpectedToken {
                token: token.to_string(),
            });
        }
        match self.store.ask(token) {
            Some(probability) => Ok(fact::is_true(probability)),
            None => Err(EvalError::UnknownFact(token.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> FactStore {
        let mut store = FactStore::new();
        store.tell("rain", 0.8);
        store.tell("wind", 0.9);
        store.tell("sun", 0.1);
        store
    }

    #[test]
    fn test_single_identifier() {
        let s = store();
        assert_eq!(evaluate(&s, "rain"), Ok(true));
        assert_eq!(evaluate(&s, "sun"), Ok(false));
    }

    #[test]
    fn test_connectives() {
        let s = store();
        assert_eq!(evaluate(&s, "rain and wind"), Ok(true));
        assert_eq!(evaluate(&s, "rain and sun"), Ok(false));
        assert_eq!(evaluate(&s, "rain or sun"), Ok(true));
        assert_eq!(evaluate(&s, "sun or sun"), Ok(false));
        assert_eq!(evaluate(&s, "not sun"), Ok(true));
        assert_eq!(evaluate(&s, "not not rain"), Ok(true));
    }

    #[test]
    fn test_precedence_not_and_or() {
        let s = store();
        // Parsed as sun or (rain and wind), not (sun or rain) and wind.
        assert_eq!(evaluate(&s, "sun or rain and wind"), Ok(true));
        // Parsed as (rain and sun) or wind.
        assert_eq!(evaluate(&s, "rain and sun or wind"), Ok(true));
        // not binds tightest: (not sun) and rain.
        assert_eq!(evaluate(&s, "not sun and rain"), Ok(true));
    }

    #[test]
    fn test_unknown_fact() {
        let s = store();
        assert_eq!(
            evaluate(&s, "rain and fog"),
            Err(EvalError::UnknownFact("fog".to_string()))
        );
    }

    #[test]
    fn test_unknown_fact_on_short_circuit_side() {
        let s = store();
        // Even when the left side decides the result, the right side
        // must still resolve.
        assert_eq!(
            evaluate(&s, "rain or fog"),
            Err(EvalError::UnknownFact("fog".to_string()))
        );
        assert_eq!(
            evaluate(&s, "sun and fog"),
            Err(EvalError::UnknownFact("fog".to_string()))
        );
    }

    #[test]
    fn test_malformed_input() {
        let s = store();
        assert_eq!(evaluate(&s, ""), Err(EvalError::Empty));
        assert_eq!(evaluate(&s, "   "), Err(EvalError::Empty));
        assert_eq!(evaluate(&s, "rain and"), Err(EvalError::UnexpectedEnd));
        assert_eq!(evaluate(&s, "not"), Err(EvalError::UnexpectedEnd));
        assert_eq!(
            evaluate(&s, "rain and or wind"),
            Err(EvalError::UnexpectedToken {
                token: "or".to_string()
            })
        );
        assert_eq!(
            evaluate(&s, "rain wind"),
            Err(EvalError::TrailingInput {
                token: "wind".to_string()
            })
        );
    }
}
