//! Page lifecycle: the render/cache/dispose state machine.
//!
//! Applications implement the [`Page`] trait for each full-screen view.
//! The core wraps every instance in a [`PageHandle`], which owns the
//! lifecycle state and guarantees the contract: a cacheable page's
//! expensive render body executes at most once across its cached
//! lifetime, and removal detaches rather than destroys it so bound state
//! (scroll position, input values, listeners) survives reuse.

mod phase;
mod removal;

pub use phase::RenderPhase;
pub use removal::{RemovalToken, TransitionDecision};

use crate::core::RenderPageOptions;
use crate::dom::{DomBackend, NodeId};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared ownership of a page between the cache and the presentation
/// host. The core is single-threaded by contract, so plain `Rc` suffices.
pub type SharedPage = Rc<RefCell<PageHandle>>;

/// Cacheability policy fixed at construction.
///
/// Always an instance-level value: two pages of the same type may carry
/// different policies, and nothing can flip a policy after the page
/// exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagePolicy {
    /// Whether the page survives removal for later reuse.
    pub cacheable: bool,
}

impl PagePolicy {
    /// Policy for pages whose render output and bound state are kept
    /// across navigations.
    pub const fn cacheable() -> Self {
        Self { cacheable: true }
    }

    /// Policy for pages destroyed on every removal.
    pub const fn transient() -> Self {
        Self { cacheable: false }
    }
}

impl Default for PagePolicy {
    fn default() -> Self {
        Self::cacheable()
    }
}

/// A full-screen view in a single-page application.
///
/// Only [`element`](Page::element) and [`render_view`](Page::render_view)
/// are required; the remaining hooks have no-op defaults.
///
/// # Example
///
/// ```rust
/// use pageflow::dom::{DomBackend, NodeId};
/// use pageflow::page::Page;
///
/// struct Home {
///     element: NodeId,
///     render_count: usize,
/// }
///
/// impl Page for Home {
///     fn element(&self) -> NodeId {
///         self.element
///     }
///
///     fn render_view(&mut self, _dom: &mut dyn DomBackend) {
///         self.render_count += 1;
///     }
/// }
/// ```
pub trait Page {
    /// Handle of the page's visual root.
    fn element(&self) -> NodeId;

    /// The render body: build the page's visual content.
    ///
    /// For cacheable pages this runs at most once; re-shows reuse the
    /// preserved content.
    fn render_view(&mut self, dom: &mut dyn DomBackend);

    /// Hook invoked before every render, including skipped ones.
    fn before_render(&mut self) {}

    /// Hook invoked after every render, including skipped ones.
    fn after_render(&mut self) {}

    /// Release resources that are not part of the visual/event state,
    /// such as timers. Runs on every removal regardless of cacheability.
    fn cleanup(&mut self) {}

    /// Invoked when `next` is about to replace this page.
    ///
    /// The default removes this page immediately. Override and return
    /// [`TransitionDecision::Deferred`] to keep it mounted until a
    /// transition-out effect finishes.
    fn transition_to(
        &mut self,
        next: &SharedPage,
        options: &RenderPageOptions,
    ) -> TransitionDecision {
        let _ = (next, options);
        TransitionDecision::RemoveNow
    }
}

/// Owns a page instance together with its lifecycle state.
pub struct PageHandle {
    body: Box<dyn Page>,
    policy: PagePolicy,
    phase: RenderPhase,
    rendered: bool,
}

impl PageHandle {
    pub fn new(body: Box<dyn Page>, policy: PagePolicy) -> Self {
        Self {
            body,
            policy,
            phase: RenderPhase::Unrendered,
            rendered: false,
        }
    }

    /// Wrap a handle for shared ownership.
    pub fn shared(body: Box<dyn Page>, policy: PagePolicy) -> SharedPage {
        Rc::new(RefCell::new(Self::new(body, policy)))
    }

    pub fn policy(&self) -> PagePolicy {
        self.policy
    }

    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    /// Whether the render body has completed at least once.
    pub fn rendered(&self) -> bool {
        self.rendered
    }

    pub fn element(&self) -> NodeId {
        self.body.element()
    }

    /// Render the page.
    ///
    /// The before/after hooks run on every call. The render body is
    /// skipped when a cacheable page has already rendered: its content
    /// and bound state still exist, re-running the body would discard
    /// them.
    pub fn render(&mut self, dom: &mut dyn DomBackend) {
        let skip_body = self.policy.cacheable && self.rendered;
        self.body.before_render();
        if !skip_body {
            self.body.render_view(dom);
        }
        self.body.after_render();
        self.rendered = true;
        self.phase = RenderPhase::Rendered;
    }

    /// Take the page off screen.
    ///
    /// Cacheable pages are detached with their `rendered` flag intact so
    /// a later render is a no-op; non-cacheable pages are destroyed. The
    /// `cleanup` hook runs on both paths.
    pub fn remove(&mut self, dom: &mut dyn DomBackend) {
        if self.policy.cacheable {
            dom.detach(self.body.element());
            self.phase = RenderPhase::Detached;
        } else {
            dom.unmount(self.body.element());
            self.phase = RenderPhase::Destroyed;
        }
        self.body.cleanup();
    }

    /// Ask the page how it wants to leave when `next` takes over.
    pub fn transition_to(
        &mut self,
        next: &SharedPage,
        options: &RenderPageOptions,
    ) -> TransitionDecision {
        self.body.transition_to(next, options)
    }
}
