//! Presentation host: owns the single currently-visible page.
//!
//! `AppView` performs the actual mount/unmount sequence when the router
//! hands it a page. The incoming page is mounted *before* the outgoing
//! one leaves, so the outgoing page is never visually obscured
//! mid-transition, and a page whose transition hook defers its removal is
//! parked here with a cancellable token until the effect completes.

use crate::core::RenderPageOptions;
use crate::dom::{DomBackend, NodeId};
use crate::page::{RemovalToken, SharedPage, TransitionDecision};
use log::{debug, trace};
use std::rc::Rc;

type RenderHook = Box<dyn FnMut(&RenderPageOptions)>;

struct PendingRemoval {
    page: SharedPage,
    token: RemovalToken,
}

/// App-level view coordinating page swaps inside one container node.
pub struct AppView {
    page_stack: NodeId,
    current: Option<SharedPage>,
    pending: Option<PendingRemoval>,
    before_render_page: Option<RenderHook>,
    after_render_page: Option<RenderHook>,
}

impl AppView {
    /// Create a view rendering into the given page-stack container.
    pub fn new(page_stack: NodeId) -> Self {
        Self {
            page_stack,
            current: None,
            pending: None,
            before_render_page: None,
            after_render_page: None,
        }
    }

    pub fn page_stack(&self) -> NodeId {
        self.page_stack
    }

    /// The page currently considered visible, if any.
    pub fn current_page(&self) -> Option<SharedPage> {
        self.current.as_ref().map(Rc::clone)
    }

    /// Token guarding the deferred removal still in flight, if any.
    pub fn pending_removal_token(&self) -> Option<RemovalToken> {
        self.pending.as_ref().map(|p| p.token.clone())
    }

    /// Hook run before each page swap, for cross-cutting effects such as
    /// a loading overlay.
    pub fn on_before_render_page<F>(&mut self, hook: F)
    where
        F: FnMut(&RenderPageOptions) + 'static,
    {
        self.before_render_page = Some(Box::new(hook));
    }

    /// Hook run after each page swap completes.
    pub fn on_after_render_page<F>(&mut self, hook: F)
    where
        F: FnMut(&RenderPageOptions) + 'static,
    {
        self.after_render_page = Some(Box::new(hook));
    }

    /// Show `next`, transitioning out the previous page.
    ///
    /// The incoming page is mounted and rendered first; only then does
    /// the outgoing page's transition hook run. A `RemoveNow` decision
    /// removes it on the spot, a `Deferred` decision parks it with a
    /// fresh [`RemovalToken`] until
    /// [`complete_pending_removal`](Self::complete_pending_removal).
    pub fn render_page(
        &mut self,
        next: SharedPage,
        options: &RenderPageOptions,
        dom: &mut dyn DomBackend,
    ) {
        if let Some(hook) = &mut self.before_render_page {
            hook(options);
        }

        // An older deferred removal must never fire against a page that
        // is being re-shown right now; everything else is removed before
        // the new transition starts.
        self.finalize_pending(Some(&next), dom);

        dom.mount(self.page_stack, next.borrow().element());
        next.borrow_mut().render(dom);

        if let Some(outgoing) = self.current.take() {
            if !Rc::ptr_eq(&outgoing, &next) {
                let decision = outgoing.borrow_mut().transition_to(&next, options);
                match decision {
                    TransitionDecision::RemoveNow => {
                        trace!("removing outgoing page immediately");
                        outgoing.borrow_mut().remove(dom);
                    }
                    TransitionDecision::Deferred => {
                        debug!("outgoing page deferred its removal");
                        self.pending = Some(PendingRemoval {
                            page: outgoing,
                            token: RemovalToken::new(),
                        });
                    }
                }
            }
        }
        self.current = Some(next);

        if let Some(hook) = &mut self.after_render_page {
            hook(options);
        }
    }

    /// Finish a deferred removal, typically from a transition effect's
    /// completion callback. A cancelled token makes this a no-op. Returns
    /// whether a page was actually removed.
    pub fn complete_pending_removal(&mut self, dom: &mut dyn DomBackend) -> bool {
        match self.pending.take() {
            Some(pending) if !pending.token.is_cancelled() => {
                pending.page.borrow_mut().remove(dom);
                true
            }
            _ => false,
        }
    }

    fn finalize_pending(&mut self, incoming: Option<&SharedPage>, dom: &mut dyn DomBackend) {
        if let Some(pending) = self.pending.take() {
            pending.token.cancel();
            let reshown = incoming
                .map(|next| Rc::ptr_eq(next, &pending.page))
                .unwrap_or(false);
            if !reshown {
                debug!("finalizing a deferred removal overtaken by navigation");
                pending.page.borrow_mut().remove(dom);
            }
        }
    }
}
