//! Validity windows for temporal facts.
//!
//! A temporal fact is "alive" only inside its window. Unlike the
//! atemporal store there is no open-endedness: every window has both
//! bounds, and both bounds are inclusive.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A closed validity interval `[from, to]`.
///
/// `from <= to` is assumed, not enforced: an inverted window simply
/// contains no instant.
///
/// # Examples
///
/// ```
/// use credo::Window;
/// use chrono::DateTime;
///
/// let ts = |s| DateTime::from_timestamp(s, 0).unwrap();
/// let window = Window::new(ts(0), ts(10));
/// assert!(window.contains(ts(10)));
/// assert!(!window.contains(ts(11)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    /// Start of the window (inclusive).
    pub from: DateTime<Utc>,

    /// End of the window (inclusive).
    pub to: DateTime<Utc>,
}

impl Window {
    /// Creates a window from two timestamps. No ordering check.
    #[must_use]
    pub const fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// Returns true if `time` falls within `[from, to]`.
    #[must_use]
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        self.from <= time && time <= self.to
    }

    /// Returns true if the window ends strictly before `time`.
    #[must_use]
    pub fn ends_before(&self, time: DateTime<Utc>) -> bool {
        self.to < time
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} → {}]", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn test_window_contains_inclusive_bounds() {
        let window = Window::new(ts(5), ts(15));

        assert!(window.contains(ts(5)));
        assert!(window.contains(ts(10)));
        assert!(window.contains(ts(15)));
        assert!(!window.contains(ts(4)));
        assert!(!window.contains(ts(16)));
    }

    #[test]
    fn test_window_inverted_contains_nothing() {
        let window = Window::new(ts(10), ts(5));
        assert!(!window.contains(ts(7)));
        assert!(!window.contains(ts(10)));
    }

    #[test]
    fn test_window_ends_before() {
        let window = Window::new(ts(0), ts(10));
        assert!(window.ends_before(ts(11)));
        assert!(!window.ends_before(ts(10)));
        assert!(!window.ends_before(ts(3)));
    }

    #[test]
    fn test_window_display() {
        let window = Window::new(ts(0), ts(10));
        let s = format!("{window}");
        assert!(s.contains('→'));
    }

    #[test]
    fn test_window_serialization() {
        let window = Window::new(ts(0), ts(10));
        let json = serde_json::to_string(&window).unwrap();
        let back: Window = serde_json::from_str(&json).unwrap();
        assert_eq!(window, back);
    }
}
