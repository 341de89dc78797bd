//! Deferred Transitions
//!
//! This example demonstrates an outgoing page deferring its own removal,
//! the shape an exit animation takes: the page stays mounted until the
//! effect's completion callback fires.
//!
//! Key concepts:
//! - `transition_to` deciding between immediate and deferred removal
//! - The removal token cancelling a deferral that was overtaken
//! - Mount-before-unmount ordering during the swap
//!
//! Run with: cargo run --example deferred_transitions

use pageflow::{
    AppView, Direction, DomBackend, NodeId, Page, PageHandle, PagePolicy, RenderPageOptions,
    SharedPage, TransitionDecision,
};
use std::rc::Rc;

struct PrintingDom;

impl DomBackend for PrintingDom {
    fn mount(&mut self, _container: NodeId, element: NodeId) {
        println!("  [dom] mount {element}");
    }

    fn unmount(&mut self, element: NodeId) {
        println!("  [dom] unmount {element}");
    }

    fn detach(&mut self, element: NodeId) {
        println!("  [dom] detach {element}");
    }
}

struct AnimatedPage {
    name: &'static str,
    element: NodeId,
}

impl AnimatedPage {
    fn shared(name: &'static str) -> SharedPage {
        PageHandle::shared(
            Box::new(Self {
                name,
                element: NodeId::new(),
            }),
            PagePolicy::cacheable(),
        )
    }
}

impl Page for AnimatedPage {
    fn element(&self) -> NodeId {
        self.element
    }

    fn render_view(&mut self, _dom: &mut dyn DomBackend) {
        println!("  [page] rendering '{}'", self.name);
    }

    fn transition_to(
        &mut self,
        _next: &SharedPage,
        options: &RenderPageOptions,
    ) -> TransitionDecision {
        println!(
            "  [page] '{}' slides out ({}), removal deferred",
            self.name, options.direction
        );
        TransitionDecision::Deferred
    }
}

fn options(coming: &str, current: Option<&str>) -> RenderPageOptions {
    RenderPageOptions::new(
        Direction::Forward,
        current.map(str::to_string),
        coming,
    )
}

fn main() {
    println!("=== Deferred Transitions ===\n");

    let mut view = AppView::new(NodeId::new());
    let mut dom = PrintingDom;

    let splash = AnimatedPage::shared("splash");
    let dashboard = AnimatedPage::shared("dashboard");

    println!("Showing 'splash':");
    view.render_page(Rc::clone(&splash), &options("splash", None), &mut dom);

    println!("\nNavigating to 'dashboard' while 'splash' animates out:");
    view.render_page(
        Rc::clone(&dashboard),
        &options("dashboard", Some("splash")),
        &mut dom,
    );
    println!(
        "Deferred removal pending: {}",
        view.pending_removal_token().is_some()
    );

    println!("\nAnimation finished, completing the removal:");
    let removed = view.complete_pending_removal(&mut dom);
    println!("Page removed: {removed}");

    println!("\nNavigating again while a new deferral is in flight:");
    let reports = AnimatedPage::shared("reports");
    view.render_page(Rc::clone(&reports), &options("reports", Some("dashboard")), &mut dom);
    let stale = view.pending_removal_token().unwrap();
    view.render_page(
        AnimatedPage::shared("profile"),
        &options("profile", Some("reports")),
        &mut dom,
    );
    println!("Stale deferral cancelled: {}", stale.is_cancelled());

    println!("\nOnly the newest deferral ('reports') is still completable:");
    println!("Removed anything: {}", view.complete_pending_removal(&mut dom));

    println!("\nKey Characteristics:");
    println!("- The incoming page mounts before the outgoing one leaves");
    println!("- A deferral parks the page with a cancellable token");
    println!("- Navigation overtaking a deferral finalizes it safely");

    println!("\n=== Example Complete ===");
}
