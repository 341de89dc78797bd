//! Transition decisions and cancellable deferred removals.

use std::cell::Cell;
use std::rc::Rc;

/// What the outgoing page wants done with itself when a new page takes
/// over.
///
/// The default is [`RemoveNow`](TransitionDecision::RemoveNow). A page
/// implementing an animated transition returns
/// [`Deferred`](TransitionDecision::Deferred) and removes itself once its
/// transition-out effect completes, via
/// [`AppView::complete_pending_removal`](crate::view::AppView::complete_pending_removal).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionDecision {
    /// Remove the outgoing page immediately.
    RemoveNow,
    /// Keep the outgoing page mounted until the transition effect ends.
    Deferred,
}

/// Cancellation handle for one deferred removal.
///
/// A fresh token is minted per deferral, never reused: a navigation that
/// starts before an older deferred removal fires cancels that token, so
/// the stale removal can never hit a page that has since been re-shown.
///
/// # Example
///
/// ```rust
/// use pageflow::page::RemovalToken;
///
/// let token = RemovalToken::new();
/// assert!(!token.is_cancelled());
///
/// let watcher = token.clone();
/// token.cancel();
/// assert!(watcher.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RemovalToken {
    cancelled: Rc<Cell<bool>>,
}

impl RemovalToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate the pending removal this token guards.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_live() {
        assert!(!RemovalToken::new().is_cancelled());
    }

    #[test]
    fn cancellation_is_visible_through_clones() {
        let token = RemovalToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn separate_tokens_are_independent() {
        let first = RemovalToken::new();
        let second = RemovalToken::new();
        first.cancel();
        assert!(!second.is_cancelled());
    }
}
