//! Lifecycle phases for page instances.

use serde::{Deserialize, Serialize};

/// Position of a page in its render/cache/dispose lifecycle.
///
/// Cacheable pages cycle `Unrendered -> Rendered -> Detached ->
/// Rendered -> ...`; non-cacheable pages end at `Destroyed` on their
/// first removal and are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderPhase {
    /// Constructed, render body not yet executed.
    Unrendered,
    /// Visible with its render body completed.
    Rendered,
    /// Lifted out of the visual tree with bound state preserved.
    Detached,
    /// Fully torn down; no further reuse is possible.
    Destroyed,
}

impl RenderPhase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unrendered => "unrendered",
            Self::Rendered => "rendered",
            Self::Detached => "detached",
            Self::Destroyed => "destroyed",
        }
    }

    /// Check if the page can be shown again without destroying it first.
    pub fn is_reusable(&self) -> bool {
        matches!(self, Self::Rendered | Self::Detached)
    }

    /// Check if this is the terminal phase.
    pub fn is_destroyed(&self) -> bool {
        matches!(self, Self::Destroyed)
    }
}
