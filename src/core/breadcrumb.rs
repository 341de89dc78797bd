//! Route history tracking and direction inference.
//!
//! The breadcrumb is an append-only log of executed route actions. It is
//! the single source the core consults to decide whether the next
//! navigation is a forward or backward move, and when prior history can
//! be discarded.

use super::options::Direction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single executed route action and when it ran.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BreadcrumbEntry {
    /// The action identifier bound to the matched route.
    pub action: String,
    /// When the action executed.
    pub visited_at: DateTime<Utc>,
}

/// Ordered log of executed route actions.
///
/// The breadcrumb always begins at the root action: recording a non-root
/// action into an empty breadcrumb seeds the root entry first, so
/// direction inference stays correct when the application is entered
/// through a deep link.
///
/// # Example
///
/// ```rust
/// use pageflow::core::{Breadcrumb, Direction};
///
/// let mut breadcrumb = Breadcrumb::new("signin");
/// breadcrumb.record("index");
/// breadcrumb.record("about");
///
/// // Entered at "index", so "signin" was seeded in front of it.
/// assert_eq!(breadcrumb.actions(), vec!["signin", "index", "about"]);
///
/// // Returning to the parent of "about" is a backward move.
/// assert_eq!(breadcrumb.direction_of("index"), Direction::Back);
/// assert_eq!(breadcrumb.direction_of("contact"), Direction::Forward);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Breadcrumb {
    root: String,
    entries: Vec<BreadcrumbEntry>,
}

impl Breadcrumb {
    /// Create an empty breadcrumb anchored at the given root action.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    /// The root action this breadcrumb is anchored at.
    pub fn root_action(&self) -> &str {
        &self.root
    }

    /// Append an executed action.
    ///
    /// When the breadcrumb is empty and `action` is not the root action,
    /// the root is seeded first. Without this, entering the application
    /// at a deep link would invert every later direction inference.
    pub fn record(&mut self, action: &str) {
        let visited_at = Utc::now();
        if self.entries.is_empty() && action != self.root {
            self.entries.push(BreadcrumbEntry {
                action: self.root.clone(),
                visited_at,
            });
        }
        self.entries.push(BreadcrumbEntry {
            action: action.to_string(),
            visited_at,
        });
    }

    /// The most recently recorded action, if any.
    pub fn current_action(&self) -> Option<&str> {
        self.entries.last().map(|e| e.action.as_str())
    }

    /// Classify the navigation to `coming` relative to the recorded
    /// history.
    ///
    /// The current action's *first* occurrence anchors where this branch
    /// of navigation originated; the entry before it is the parent.
    /// Returning to the parent, or to the root from any depth, is a
    /// backward move. Everything else is forward. Must be called before
    /// `coming` is recorded.
    pub fn direction_of(&self, coming: &str) -> Direction {
        if coming == self.root {
            return Direction::Back;
        }

        let parent = self
            .current_action()
            .and_then(|current| self.entries.iter().position(|e| e.action == current))
            .and_then(|first| first.checked_sub(1))
            .map(|i| self.entries[i].action.as_str());

        if parent == Some(coming) {
            Direction::Back
        } else {
            Direction::Forward
        }
    }

    /// Discard the history when navigation returns to the root or to the
    /// action first reached from root.
    ///
    /// Once navigation funnels back through the near-root entries, the
    /// prior history is re-derivable and keeping it around only risks
    /// stale-ancestor artifacts. Returns whether the breadcrumb was
    /// cleared; an action with no recorded entry leaves it unchanged.
    pub fn try_truncate(&mut self, coming: &str) -> bool {
        match self.entries.iter().position(|e| e.action == coming) {
            Some(index) if index <= 1 => {
                self.entries.clear();
                true
            }
            _ => false,
        }
    }

    /// The recorded actions in chronological order.
    pub fn actions(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.action.as_str()).collect()
    }

    /// All recorded entries with their timestamps.
    pub fn entries(&self) -> &[BreadcrumbEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
