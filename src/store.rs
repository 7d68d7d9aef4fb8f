//! The fact store.
//!
//! Two independent mappings over the same identifier namespace: an
//! atemporal map from identifier to truth-probability, and a temporal
//! map from identifier to a (value, window) record. An identifier may
//! live in either map, both, or neither; nothing synchronizes them.
//! Rules that want a temporal fact in the atemporal map promote it with
//! an explicit `tell`.
//!
//! Writes are upserts with no validation. Nothing is ever deleted; the
//! store lives as long as its owner.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time::Window;

/// A fact whose validity is bounded to a time window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemporalFact {
    /// The value carried by the fact, conventionally a probability.
    pub value: f64,

    /// The validity window.
    pub window: Window,
}

/// Caller-owned storage for probabilistic and temporal facts.
///
/// # Examples
///
/// ```
/// use credo::FactStore;
///
/// let mut store = FactStore::new();
/// store.tell("rain", 0.6);
/// assert_eq!(store.ask("rain"), Some(0.6));
/// assert_eq!(store.ask("snow"), None);
/// ```
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct FactStore {
    facts: HashMap<String, f64>,
    temporal: HashMap<String, TemporalFact>,
}

impl FactStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts an atemporal fact. The probability is stored as given;
    /// values outside [0, 1] are the caller's problem.
    pub fn tell(&mut self, id: impl Into<String>, probability: f64) {
        self.facts.insert(id.into(), probability);
    }

    /// Upserts a temporal fact valid over `[from, to]`. The ordering of
    /// the bounds is not checked.
    pub fn tell_lifetime(
        &mut self,
        id: impl Into<String>,
        value: f64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) {
        self.temporal.insert(
            id.into(),
            TemporalFact {
                value,
                window: Window::new(from, to),
            },
        );
    }

    /// Looks up an atemporal fact. `None` means the identifier was
    /// never told, which is distinct from a stored low probability.
    #[must_use]
    pub fn ask(&self, id: &str) -> Option<f64> {
        self.facts.get(id).copied()
    }

    /// Returns true if the atemporal map contains `id`, regardless of
    /// its probability.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.facts.contains_key(id)
    }

    /// Looks up a temporal fact that is alive at `time`.
    ///
    /// A single `None` covers both "never recorded" and "recorded but
    /// outside its window"; callers cannot tell the two apart.
    #[must_use]
    pub fn ask_alive(&self, id: &str, time: DateTime<Utc>) -> Option<&TemporalFact> {
        self.temporal
            .get(id)
            .filter(|fact| fact.window.contains(time))
    }

    /// Looks up a temporal fact's raw record, ignoring its window.
    #[must_use]
    pub fn lifetime(&self, id: &str) -> Option<&TemporalFact> {
        self.temporal.get(id)
    }

    /// Iterates over every atemporal (identifier, probability) pair, in
    /// no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.facts.iter().map(|(id, p)| (id.as_str(), *p))
    }

    /// Number of atemporal facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Returns true if no atemporal fact has been told.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Number of temporal facts.
    #[must_use]
    pub fn temporal_len(&self) -> usize {
        self.temporal.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn test_ask_absent_before_tell() {
        let store = FactStore::new();
        assert_eq!(store.ask("rain"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_ask_after_tell() {
        let mut store = FactStore::new();
        store.tell("rain", 0.6);
        assert_eq!(store.ask("rain"), Some(0.6));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_absent_is_not_false() {
        let mut store = FactStore::new();
        store.tell("snow", 0.1);
        // A stored low probability is present, not absent.
        assert_eq!(store.ask("snow"), Some(0.1));
        assert!(store.contains("snow"));
        assert_eq!(store.ask("hail"), None);
        assert!(!store.contains("hail"));
    }

    #[test]
    fn test_tell_overwrites_in_place() {
        let mut store = FactStore::new();
        store.tell("rain", 0.6);
        store.tell("rain", 0.9);
        assert_eq!(store.ask("rain"), Some(0.9));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_tell_idempotent() {
        let mut once = FactStore::new();
        once.tell("rain", 0.6);

        let mut twice = FactStore::new();
        twice.tell("rain", 0.6);
        twice.tell("rain", 0.6);

        assert_eq!(once.ask("rain"), twice.ask("rain"));
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn test_tell_accepts_out_of_range_values() {
        let mut store = FactStore::new();
        store.tell("weird", 1.5);
        assert_eq!(store.ask("weird"), Some(1.5));
    }

    #[test]
    fn test_ask_alive_within_window() {
        let mut store = FactStore::new();
        store.tell_lifetime("rain", 1.0, ts(0), ts(10));

        let fact = store.ask_alive("rain", ts(5)).unwrap();
        assert_eq!(fact.value, 1.0);
        assert_eq!(fact.window, Window::new(ts(0), ts(10)));

        // Inclusive at both bounds.
        assert!(store.ask_alive("rain", ts(0)).is_some());
        assert!(store.ask_alive("rain", ts(10)).is_some());
    }

    #[test]
    fn test_ask_alive_single_sentinel() {
        let mut store = FactStore::new();
        store.tell_lifetime("rain", 1.0, ts(0), ts(10));

        // Expired and never-recorded are indistinguishable.
        assert!(store.ask_alive("rain", ts(11)).is_none());
        assert!(store.ask_alive("snow", ts(5)).is_none());
    }

    #[test]
    fn test_lifetime_ignores_window() {
        let mut store = FactStore::new();
        store.tell_lifetime("rain", 1.0, ts(0), ts(10));
        assert!(store.lifetime("rain").is_some());
        assert!(store.lifetime("snow").is_none());
    }

    #[test]
    fn test_stores_are_independent() {
        let mut store = FactStore::new();
        store.tell_lifetime("rain", 1.0, ts(0), ts(10));

        // Telling the temporal map does not touch the atemporal one.
        assert_eq!(store.ask("rain"), None);

        store.tell("rain", 0.7);
        assert_eq!(store.ask("rain"), Some(0.7));
        assert_eq!(store.lifetime("rain").unwrap().value, 1.0);
    }

    #[test]
    fn test_iter_covers_all_facts() {
        let mut store = FactStore::new();
        store.tell("a", 0.1);
        store.tell("b", 0.9);

        let mut seen: Vec<_> = store.iter().collect();
        seen.sort_by(|x, y| x.0.cmp(y.0));
        assert_eq!(seen, vec![("a", 0.1), ("b", 0.9)]);
    }

    #[test]
    fn test_store_serialization_round_trip() {
        let mut store = FactStore::new();
        store.tell("rain", 0.6);
        store.tell_lifetime("wind", 0.8, ts(3), ts(9));

        let json = serde_json::to_string(&store).unwrap();
        let back: FactStore = serde_json::from_str(&json).unwrap();

        assert_eq!(back.ask("rain"), Some(0.6));
        let wind = back.lifetime("wind").unwrap();
        assert_eq!(wind.value, 0.8);
        assert_eq!(wind.window, Window::new(ts(3), ts(9)));
    }
}
