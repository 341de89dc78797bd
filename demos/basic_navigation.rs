//! Basic Navigation
//!
//! This example demonstrates the navigation pipeline end to end: routes,
//! the breadcrumb, and forward/back direction inference.
//!
//! Key concepts:
//! - Registering routes with a root action
//! - Deep-link entry seeding the root into the history
//! - Direction computed from the route history, not the browser
//!
//! Run with: cargo run --example basic_navigation

use pageflow::{
    DomBackend, NavigationError, NodeId, Page, PageHandle, PagePolicy, RouteEngine, Router,
    RouterBuilder,
};
use std::cell::RefCell;
use std::rc::Rc;

/// DOM backend that narrates every structural operation.
struct PrintingDom;

impl DomBackend for PrintingDom {
    fn mount(&mut self, container: NodeId, element: NodeId) {
        println!("  [dom] mount {element} into {container}");
    }

    fn unmount(&mut self, element: NodeId) {
        println!("  [dom] unmount {element}");
    }

    fn detach(&mut self, element: NodeId) {
        println!("  [dom] detach {element}");
    }
}

struct FakeAddressBar {
    fragment: RefCell<String>,
}

impl RouteEngine for FakeAddressBar {
    fn current_fragment(&self) -> String {
        self.fragment.borrow().clone()
    }
}

struct SimplePage {
    name: &'static str,
    element: NodeId,
}

impl SimplePage {
    fn handle(name: &'static str) -> PageHandle {
        PageHandle::new(
            Box::new(Self {
                name,
                element: NodeId::new(),
            }),
            PagePolicy::cacheable(),
        )
    }
}

impl Page for SimplePage {
    fn element(&self) -> NodeId {
        self.element
    }

    fn render_view(&mut self, _dom: &mut dyn DomBackend) {
        println!("  [page] rendering '{}'", self.name);
    }
}

fn show(name: &'static str) -> impl FnMut(&mut Router, &[String], &mut dyn DomBackend) -> Result<(), NavigationError>
{
    move |router, _args, dom| {
        let page = router.page(|| SimplePage::handle(name), None)?;
        router.render_page(page, None, dom);
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Basic Navigation ===\n");

    // Enter the application through a deep link, not the root.
    let address_bar = Rc::new(FakeAddressBar {
        fragment: RefCell::new("about".to_string()),
    });

    let mut router = RouterBuilder::new()
        .route("", "home", show("home"))
        .route("index", "index", show("index"))
        .route("about", "about", show("about"))
        .engine(Rc::clone(&address_bar) as Rc<dyn RouteEngine>)
        .build()?;

    router.view_mut().on_before_render_page(|options| {
        println!(
            "  [view] {} -> '{}' ({})",
            options.current_action.as_deref().unwrap_or("<start>"),
            options.coming_action,
            options.direction
        );
    });

    let mut dom = PrintingDom;

    println!("Starting at deep link '#about':");
    router.start(&mut dom)?;
    println!("History: {:?}\n", router.breadcrumb().actions());

    println!("Navigating forward to 'index':");
    *address_bar.fragment.borrow_mut() = "index".to_string();
    router.dispatch("index", &[], &mut dom)?;
    println!("History: {:?}\n", router.breadcrumb().actions());

    println!("Returning to 'about' (the parent of 'index'):");
    *address_bar.fragment.borrow_mut() = "about".to_string();
    router.dispatch("about", &[], &mut dom)?;
    println!("History: {:?}\n", router.breadcrumb().actions());

    println!("Key Characteristics:");
    println!("- The root action was seeded in front of the deep link");
    println!("- Direction comes from first-occurrence ancestry in the history");
    println!("- Returning near the root resets the history");

    println!("\n=== Example Complete ===");
    Ok(())
}
