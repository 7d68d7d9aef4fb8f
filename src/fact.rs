//! Fact-identifier conventions.
//!
//! Facts are opaque string labels. Compound facts carry no parse tree:
//! they are built by concatenating identifiers with fixed connective
//! tokens, and the engine finds them again only by reconstructing the
//! exact label and looking it up. Callers and the engine must therefore
//! agree on the constructors in this module.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Connective token joining the antecedent and consequent of an implication.
pub const IMPLIES: &str = " implies ";

/// Connective token joining the two sides of a biconditional.
pub const IFF: &str = " iff ";

/// Connective token joining the two conjuncts of a conjunction.
pub const AND: &str = " and ";

/// Connective token joining the two disjuncts of a disjunction.
pub const OR: &str = " or ";

/// Prefix token negating a fact.
pub const NOT: &str = "not ";

/// Token joining a hypothesis to its conditioning evidence.
pub const GIVEN: &str = " given ";

/// The fixed truth threshold: a fact is treated as true when its
/// probability is strictly greater than this.
pub const TRUTH_THRESHOLD: f64 = 0.5;

/// Returns true if `probability` clears the truth threshold.
#[must_use]
pub fn is_true(probability: f64) -> bool {
    probability > TRUTH_THRESHOLD
}

/// Builds the label `"a implies b"`.
#[must_use]
pub fn implies(a: &str, b: &str) -> String {
    format!("{a}{IMPLIES}{b}")
}

/// Builds the label `"a iff b"`.
#[must_use]
pub fn iff(a: &str, b: &str) -> String {
    format!("{a}{IFF}{b}")
}

/// Builds the label `"a and b"`.
#[must_use]
pub fn conjunction(a: &str, b: &str) -> String {
    format!("{a}{AND}{b}")
}

/// Builds the label `"a or b"`.
#[must_use]
pub fn disjunction(a: &str, b: &str) -> String {
    format!("{a}{OR}{b}")
}

/// Builds the label `"not a"`.
#[must_use]
pub fn negation(a: &str) -> String {
    format!("{NOT}{a}")
}

/// Builds the label `"a given b"`.
#[must_use]
pub fn given(a: &str, b: &str) -> String {
    format!("{a}{GIVEN}{b}")
}

/// Toggles a leading `"not "` prefix: strips it if present, adds it
/// otherwise. Purely textual; double negation is not collapsed beyond
/// one toggle.
#[must_use]
pub fn opposite(id: &str) -> String {
    match id.strip_prefix(NOT) {
        Some(inner) => inner.to_string(),
        None => negation(id),
    }
}

/// The answer to a fact query: the stored probability together with its
/// thresholded truth value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// True when the probability clears the truth threshold.
    pub truth: bool,

    /// The raw stored probability.
    pub probability: f64,
}

impl Verdict {
    /// Creates a verdict from a stored probability.
    #[must_use]
    pub fn new(probability: f64) -> Self {
        Self {
            truth: is_true(probability),
            probability,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (p={})", self.truth, self.probability)
    }
}
