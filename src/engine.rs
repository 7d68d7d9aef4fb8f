//! The inference engine.
//!
//! The engine owns one [`FactStore`] and applies a fixed catalogue of
//! inference rules against it. Every rule follows the same shape: read
//! its operands, evaluate a precondition, and on success write exactly
//! one derived fact (biconditional elimination writes two) with a fixed
//! probability. On failure nothing is written, so a rule can be retried
//! once its preconditions are later satisfied.
//!
//! The truth threshold is `> 0.5` throughout. Rules never raise: an
//! unsatisfied precondition or a missing operand is reported as plain
//! failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EvalError;
use crate::expr;
use crate::fact::{self, Verdict};
use crate::store::FactStore;

/// The deduction rules the composite [`InferenceEngine::deduce`] driver
/// can report as having fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// `A`, `A implies B` ⊢ `B`.
    ModusPonens,

    /// `A or B`, `¬A` ⊢ `B`.
    DisjunctiveSyllogism,

    /// `A`, `A implies B`, `B implies C` ⊢ `C`.
    ImplicationChain,

    /// `A implies B`, `B implies C` ⊢ `A implies C`.
    HypotheticalSyllogism,

    /// `A iff B` ⊢ `A implies B` and `B implies A`.
    BiconditionalElimination,

    /// `A` ⊢ `not A` with probability zero.
    Contradiction,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ModusPonens => write!(f, "modus ponens"),
            Self::DisjunctiveSyllogism => write!(f, "disjunctive syllogism"),
            Self::ImplicationChain => write!(f, "implication chain"),
            Self::HypotheticalSyllogism => write!(f, "hypothetical syllogism"),
            Self::BiconditionalElimination => write!(f, "biconditional elimination"),
            Self::Contradiction => write!(f, "contradiction"),
        }
    }
}

/// A caller-owned rule-application engine over one fact store.
///
/// # Examples
///
/// ```
/// use credo::{FactStore, InferenceEngine};
///
/// let mut engine = InferenceEngine::new(FactStore::new());
/// engine.store_mut().tell("rain", 0.6);
/// engine.store_mut().tell("rain implies wet ground", 1.0);
///
/// assert!(engine.modus_ponens("rain", "wet ground"));
/// assert_eq!(engine.store().ask("wet ground"), Some(1.0));
/// ```
#[derive(Debug, Default, Clone)]
pub struct InferenceEngine {
    store: FactStore,
}

impl InferenceEngine {
    /// Creates an engine over the given store.
    #[must_use]
    pub fn new(store: FactStore) -> Self {
        Self { store }
    }

    /// Read access to the underlying store.
    #[must_use]
    pub fn store(&self) -> &FactStore {
        &self.store
    }

    /// Write access to the underlying store, for telling facts.
    pub fn store_mut(&mut self) -> &mut FactStore {
        &mut self.store
    }

    /// Consumes the engine and returns its store.
    #[must_use]
    pub fn into_store(self) -> FactStore {
        self.store
    }

    /// True if `id` is stored and its probability clears the threshold.
    fn holds(&self, id: &str) -> bool {
        self.store.ask(id).map_or(false, fact::is_true)
    }

    /// Looks up a fact and reports its thresholded truth value together
    /// with the raw probability.
    #[must_use]
    pub fn query(&self, id: &str) -> Option<Verdict> {
        self.store.ask(id).map(Verdict::new)
    }

    /// Direct rule: if `a` holds, derive `b` with probability 1.
    pub fn infer_rule(&mut self, a: &str, b: &str) -> bool {
        let fired = self.holds(a);
        if fired {
            self.store.tell(b, 1.0);
        }
        fired
    }

    /// If `a` and `b` both hold, derive `"a and b"`.
    pub fn conjunction(&mut self, a: &str, b: &str) -> bool {
        let fired = self.holds(a) && self.holds(b);
        if fired {
            self.store.tell(fact::conjunction(a, b), 1.0);
        }
        fired
    }

    /// If `a` holds or `b` holds, derive `"a or b"`.
    ///
    /// The precondition groups as `(a present ∧ true) ∨ (b present ∧
    /// true)`; a missing `a` with a true `b` still fires.
    pub fn disjunction(&mut self, a: &str, b: &str) -> bool {
        let fired = self.holds(a) || self.holds(b);
        if fired {
            self.store.tell(fact::disjunction(a, b), 1.0);
        }
        fired
    }

    /// If `a` holds, derive `"not a"` with probability 0.
    pub fn contradiction(&mut self, a: &str) -> bool {
        let fired = self.holds(a);
        if fired {
            self.store.tell(fact::negation(a), 0.0);
        }
        fired
    }

    /// Modus ponens: `a` and `"a implies b"` both hold, derive `b`.
    pub fn modus_ponens(&mut self, a: &str, b: &str) -> bool {
        let fired = self.holds(a) && self.holds(&fact::implies(a, b));
        if fired {
            self.store.tell(b, 1.0);
        }
        fired
    }

    /// Disjunctive syllogism: `"a or b"` holds and `a` is stored but
    /// does not clear the threshold, derive `b`.
    pub fn disjunctive_syllogism(&mut self, a: &str, b: &str) -> bool {
        let a_false = self
            .store
            .ask(a)
            .map_or(false, |p| !fact::is_true(p));
        let fired = self.holds(&fact::disjunction(a, b)) && a_false;
        if fired {
            self.store.tell(b, 1.0);
        }
        fired
    }

    /// Two-step implication chain: `a`, `"a implies b"` and
    /// `"b implies c"` all hold, derive `c`.
    pub fn implication_chain(&mut self, a: &str, b: &str, c: &str) -> bool {
        let fired = self.holds(a)
            && self.holds(&fact::implies(a, b))
            && self.holds(&fact::implies(b, c));
        if fired {
            self.store.tell(c, 1.0);
        }
        fired
    }

    /// Hypothetical syllogism: `"a implies b"` and `"b implies c"`
    /// hold, derive `"a implies c"`.
    pub fn hypothetical_syllogism(&mut self, a: &str, b: &str, c: &str) -> bool {
        let fired = self.holds(&fact::implies(a, b)) && self.holds(&fact::implies(b, c));
        if fired {
            self.store.tell(fact::implies(a, c), 1.0);
        }
        fired
    }

    /// Biconditional elimination: `"a iff b"` holds, derive both
    /// `"a implies b"` and `"b implies a"`.
    pub fn biconditional_elimination(&mut self, a: &str, b: &str) -> bool {
        let fired = self.holds(&fact::iff(a, b));
        if fired {
            self.store.tell(fact::implies(a, b), 1.0);
            self.store.tell(fact::implies(b, a), 1.0);
        }
        fired
    }

    /// Abduction: `b` and `"a implies b"` hold, derive `a` as plausible
    /// (probability 0.5), not certain.
    pub fn abduction(&mut self, a: &str, b: &str) -> bool {
        let fired = self.holds(b) && self.holds(&fact::implies(a, b));
        if fired {
            self.store.tell(a, 0.5);
        }
        fired
    }

    /// Bayesian update, named-fact form: writes `"a given b"` with
    /// posterior `likelihood * prior / P(b)` and returns it.
    ///
    /// Fails (writes nothing, returns `None`) when `b` is absent, its
    /// probability is zero, or the posterior is not finite.
    pub fn bayes_given(&mut self, a: &str, b: &str, prior: f64, likelihood: f64) -> Option<f64> {
        let evidence = self.store.ask(b)?;
        let posterior = bayes_posterior(evidence, prior, likelihood)?;
        self.store.tell(fact::given(a, b), posterior);
        Some(posterior)
    }

    /// Bayesian update, evidence form: writes `fact_id` itself with the
    /// posterior computed from the named evidence fact.
    ///
    /// Same failure conditions as [`Self::bayes_given`].
    pub fn bayes_update(
        &mut self,
        fact_id: &str,
        evidence: &str,
        prior: f64,
        likelihood: f64,
    ) -> Option<f64> {
        let evidence_probability = self.store.ask(evidence)?;
        let posterior = bayes_posterior(evidence_probability, prior, likelihood)?;
        self.store.tell(fact_id, posterior);
        Some(posterior)
    }

    /// Temporal succession: both `a` and `b` have temporal records, and
    /// the query time falls strictly after `a`'s window ends and
    /// strictly before `b`'s does. Promotes `b` into the atemporal
    /// store with probability 1.
    pub fn temporal_succession(&mut self, a: &str, b: &str, time: DateTime<Utc>) -> bool {
        let fired = match (self.store.lifetime(a), self.store.lifetime(b)) {
            (Some(fa), Some(fb)) => fa.window.ends_before(time) && time < fb.window.to,
            _ => false,
        };
        if fired {
            self.store.tell(b, 1.0);
        }
        fired
    }

    /// Induction: scans every stored identifier containing `a` as a
    /// substring; if a strict majority of the matches hold, derive `a`
    /// with probability 1. Fails when nothing matches. The only rule
    /// whose cost grows with the store.
    #[allow(clippy::cast_precision_loss)]
    pub fn induction(&mut self, a: &str) -> bool {
        let mut matches = 0usize;
        let mut held = 0usize;
        for (id, probability) in self.store.iter() {
            if id.contains(a) {
                matches += 1;
                if fact::is_true(probability) {
                    held += 1;
                }
            }
        }
        if matches == 0 {
            return false;
        }
        let fired = held as f64 / matches as f64 > fact::TRUTH_THRESHOLD;
        if fired {
            self.store.tell(a, 1.0);
        }
        fired
    }

    /// Composite deduction: tries the catalogue in a fixed order and
    /// stops at the first rule that fires, reporting which one did.
    pub fn deduce(&mut self, a: &str, b: &str, c: &str) -> Option<Rule> {
        if self.modus_ponens(a, b) {
            Some(Rule::ModusPonens)
        } else if self.disjunctive_syllogism(a, b) {
            Some(Rule::DisjunctiveSyllogism)
        } else if self.implication_chain(a, b, c) {
            Some(Rule::ImplicationChain)
        } else if self.hypothetical_syllogism(a, b, c) {
            Some(Rule::HypotheticalSyllogism)
        } else if self.biconditional_elimination(a, b) {
            Some(Rule::BiconditionalElimination)
        } else if self.contradiction(a) {
            Some(Rule::Contradiction)
        } else {
            None
        }
    }

    /// Resolves an identifier to whichever of itself or its negation is
    /// stored: `id` if present, else the label with a leading `"not "`
    /// toggled if that is present, else `None`. Presence only;
    /// probabilities are never inspected.
    #[must_use]
    pub fn resolve_ambiguity(&self, id: &str) -> Option<String> {
        if self.store.contains(id) {
            return Some(id.to_string());
        }
        let flipped = fact::opposite(id);
        self.store.contains(&flipped).then_some(flipped)
    }

    /// Evaluates a whitespace-tokenized boolean expression over stored
    /// facts. See [`expr::evaluate`].
    ///
    /// # Errors
    ///
    /// [`EvalError`] for unknown identifiers or malformed input.
    pub fn evaluate(&self, expression: &str) -> Result<bool, EvalError> {
        expr::evaluate(&self.store, expression)
    }
}

/// `likelihood * prior / evidence`, or `None` when the evidence
/// probability is zero or the result is not finite.
fn bayes_posterior(evidence: f64, prior: f64, likelihood: f64) -> Option<f64> {
    if evidence == 0.0 {
        return None;
    }
    let posterior = (likelihood * prior) / evidence;
    posterior.is_finite().then_some(posterior)
}
