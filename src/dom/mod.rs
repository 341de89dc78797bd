//! Boundary to the presentation layer.
//!
//! The navigation core never touches a real rendering tree. It speaks to
//! the host application through the `DomBackend` trait, addressing visual
//! elements by opaque `NodeId` handles. The host owns the mapping from
//! handles to whatever its rendering layer calls a node.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque handle to a visual element owned by the host application.
///
/// Handles are unique per process run. The core only ever passes them
/// back to the `DomBackend` that knows what they refer to.
///
/// # Example
///
/// ```rust
/// use pageflow::dom::NodeId;
///
/// let a = NodeId::new();
/// let b = NodeId::new();
/// assert_ne!(a, b);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Allocate a fresh handle.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Presentation primitives the host application must provide.
///
/// The distinction between `unmount` and `detach` is the load-bearing part
/// of this contract: `unmount` destroys the element together with its
/// bound event state, `detach` lifts it out of the visual tree while
/// preserving bound state so a cached page can be re-shown later without
/// re-rendering.
pub trait DomBackend {
    /// Insert `element` into `container`.
    fn mount(&mut self, container: NodeId, element: NodeId);

    /// Remove `element` and destroy its bound event state.
    fn unmount(&mut self, element: NodeId);

    /// Remove `element` from the visual tree, preserving bound state.
    fn detach(&mut self, element: NodeId);
}

/// In-memory backend recording every primitive call, for tests.
#[cfg(test)]
pub(crate) mod recording {
    use super::{DomBackend, NodeId};

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum DomEvent {
        Mounted { container: NodeId, element: NodeId },
        Unmounted(NodeId),
        Detached(NodeId),
    }

    #[derive(Default)]
    pub struct RecordingDom {
        pub events: Vec<DomEvent>,
    }

    impl RecordingDom {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn mounted(&self) -> Vec<NodeId> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    DomEvent::Mounted { element, .. } => Some(*element),
                    _ => None,
                })
                .collect()
        }

        pub fn unmounted(&self) -> Vec<NodeId> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    DomEvent::Unmounted(element) => Some(*element),
                    _ => None,
                })
                .collect()
        }

        pub fn detached(&self) -> Vec<NodeId> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    DomEvent::Detached(element) => Some(*element),
                    _ => None,
                })
                .collect()
        }
    }

    impl DomBackend for RecordingDom {
        fn mount(&mut self, container: NodeId, element: NodeId) {
            self.events.push(DomEvent::Mounted { container, element });
        }

        fn unmount(&mut self, element: NodeId) {
            self.events.push(DomEvent::Unmounted(element));
        }

        fn detach(&mut self, element: NodeId) {
            self.events.push(DomEvent::Detached(element));
        }
    }
}
