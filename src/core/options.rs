//! Navigation direction and per-navigation render options.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a navigation relative to the route history.
///
/// Derived fresh for every navigation by [`Breadcrumb::direction_of`];
/// never stored across navigations.
///
/// [`Breadcrumb::direction_of`]: crate::core::Breadcrumb::direction_of
///
/// # Example
///
/// ```rust
/// use pageflow::core::Direction;
///
/// assert_eq!(Direction::Forward.name(), "forward");
/// assert!(Direction::Back.is_back());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Navigation moves deeper into the application.
    Forward,
    /// Navigation returns to an ancestor in the route history.
    Back,
}

impl Direction {
    /// Get the direction's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Back => "back",
        }
    }

    /// Check if this is a backward navigation.
    pub fn is_back(&self) -> bool {
        matches!(self, Self::Back)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options describing a single page transition.
///
/// Computed once per navigation from the pre-navigation breadcrumb and
/// passed unmodified through the router to the presentation host and the
/// outgoing page's transition hook.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderPageOptions {
    /// Whether the navigation is a forward or backward move.
    pub direction: Direction,
    /// The action that was current when the navigation started, if any.
    pub current_action: Option<String>,
    /// The action about to execute.
    pub coming_action: String,
}

impl RenderPageOptions {
    pub fn new(
        direction: Direction,
        current_action: Option<String>,
        coming_action: impl Into<String>,
    ) -> Self {
        Self {
            direction,
            current_action,
            coming_action: coming_action.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_names_are_stable() {
        assert_eq!(Direction::Forward.name(), "forward");
        assert_eq!(Direction::Back.name(), "back");
        assert_eq!(Direction::Back.to_string(), "back");
    }

    #[test]
    fn direction_serializes_to_lowercase() {
        assert_eq!(
            serde_json::to_string(&Direction::Forward).unwrap(),
            "\"forward\""
        );
        assert_eq!(serde_json::to_string(&Direction::Back).unwrap(), "\"back\"");
    }

    #[test]
    fn options_roundtrip_serialization() {
        let options = RenderPageOptions::new(
            Direction::Back,
            Some("setting".to_string()),
            "index",
        );

        let json = serde_json::to_string(&options).unwrap();
        let deserialized: RenderPageOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(options, deserialized);
    }

    #[test]
    fn options_capture_missing_current_action() {
        let options = RenderPageOptions::new(Direction::Forward, None, "index");
        assert!(options.current_action.is_none());
        assert_eq!(options.coming_action, "index");
    }
}
