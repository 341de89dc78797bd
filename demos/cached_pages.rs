//! Cached Pages
//!
//! This example demonstrates the page cache: cacheable pages survive
//! navigation and skip re-rendering, while invalidation evicts a key and
//! its parametrized subtree.
//!
//! Key concepts:
//! - Cacheable pages are constructed once per cache key
//! - A re-shown cached page runs its hooks but not its body render
//! - Flat-key invalidation sweeps `key` plus everything under `key/`
//!
//! Run with: cargo run --example cached_pages

use pageflow::{
    AppEvent, CacheKey, DomBackend, NavigationError, NodeId, Page, PageHandle, PagePolicy,
    RouteEngine, Router, RouterBuilder,
};
use std::cell::RefCell;
use std::rc::Rc;

struct QuietDom;

impl DomBackend for QuietDom {
    fn mount(&mut self, _container: NodeId, _element: NodeId) {}
    fn unmount(&mut self, _element: NodeId) {}
    fn detach(&mut self, _element: NodeId) {}
}

struct FakeAddressBar {
    fragment: RefCell<String>,
}

impl RouteEngine for FakeAddressBar {
    fn current_fragment(&self) -> String {
        self.fragment.borrow().clone()
    }
}

struct CountingPage {
    name: String,
    element: NodeId,
}

impl CountingPage {
    fn handle(name: &str, policy: PagePolicy) -> PageHandle {
        println!("  [page] constructing '{name}'");
        PageHandle::new(
            Box::new(Self {
                name: name.to_string(),
                element: NodeId::new(),
            }),
            policy,
        )
    }
}

impl Page for CountingPage {
    fn element(&self) -> NodeId {
        self.element
    }

    fn render_view(&mut self, _dom: &mut dyn DomBackend) {
        println!("  [page] rendering body of '{}'", self.name);
    }

    fn before_render(&mut self) {
        println!("  [page] before_render '{}'", self.name);
    }
}

fn show(
    name: &'static str,
    policy: PagePolicy,
) -> impl FnMut(&mut Router, &[String], &mut dyn DomBackend) -> Result<(), NavigationError> {
    move |router, _args, dom| {
        let page = router.page(|| CountingPage::handle(name, policy), None)?;
        router.render_page(page, None, dom);
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Cached Pages ===\n");

    let address_bar = Rc::new(FakeAddressBar {
        fragment: RefCell::new(String::new()),
    });

    // The root route runs while the fragment is still empty, so no cache
    // key can be derived for it; a transient page needs none.
    let mut router = RouterBuilder::new()
        .route("", "home", show("home", PagePolicy::transient()))
        .route("articles", "articles", show("articles", PagePolicy::cacheable()))
        .route("settings", "settings", show("settings", PagePolicy::cacheable()))
        .engine(Rc::clone(&address_bar) as Rc<dyn RouteEngine>)
        .build()?;

    let mut dom = QuietDom;
    router.start(&mut dom)?;

    let mut navigate = |router: &mut Router, action: &str| -> Result<(), NavigationError> {
        *address_bar.fragment.borrow_mut() = action.to_string();
        println!("Navigating to '{action}':");
        router.dispatch(action, &[], &mut dom)
    };

    navigate(&mut router, "articles")?;
    navigate(&mut router, "settings")?;

    println!("\nRevisiting 'articles' (cache hit, body render skipped):");
    navigate(&mut router, "articles")?;

    println!("\nCached keys: {}", router.cache().borrow().len());

    println!("\nPublishing a cache invalidation for 'articles':");
    router
        .event_bus()
        .publish(&AppEvent::CacheInvalidate(CacheKey::from("articles")));
    println!(
        "'articles' still cached: {}",
        router.cache().borrow().contains(&CacheKey::from("articles"))
    );

    println!("\nRevisiting 'articles' (evicted, so constructed again):");
    navigate(&mut router, "articles")?;

    println!("\nKey Characteristics:");
    println!("- One construction per cache key while the entry lives");
    println!("- before_render always runs; the body render does not repeat");
    println!("- Invalidation flows through the event bus, not direct coupling");

    println!("\n=== Example Complete ===");
    Ok(())
}
