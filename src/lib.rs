//! Pageflow: navigation-state core for single-page applications
//!
//! Pageflow keeps the stateful heart of an SPA shell in one place: a
//! breadcrumb of executed route actions with forward/back direction
//! inference, a keyed cache of page instances, a page lifecycle with
//! detach-vs-destroy removal, and a router that drives them all through
//! a swappable DOM backend.
//!
//! # Core Concepts
//!
//! - **Breadcrumb**: Append-only route history; infers navigation
//!   direction and discards itself when navigation returns near the root
//! - **PageCache**: Get-or-create store of page instances keyed by URL
//!   fragment, with prefix-aware invalidation
//! - **Page**: Lifecycle trait for a single screen; a cacheable page is
//!   detached on removal and skips re-rendering when shown again
//! - **Router**: Front controller wiring route actions to handlers, built
//!   with [`RouterBuilder`]
//!
//! # Example
//!
//! ```rust
//! use pageflow::{
//!     DomBackend, NodeId, Page, PageHandle, PagePolicy, Router, RouterBuilder,
//! };
//!
//! struct NoopDom;
//!
//! impl DomBackend for NoopDom {
//!     fn mount(&mut self, _container: NodeId, _element: NodeId) {}
//!     fn unmount(&mut self, _element: NodeId) {}
//!     fn detach(&mut self, _element: NodeId) {}
//! }
//!
//! struct HomePage {
//!     element: NodeId,
//! }
//!
//! impl Page for HomePage {
//!     fn element(&self) -> NodeId {
//!         self.element
//!     }
//!
//!     fn render_view(&mut self, _dom: &mut dyn DomBackend) {}
//! }
//!
//! let mut router = RouterBuilder::new()
//!     .route("", "home", |router: &mut Router, _args, dom| {
//!         let page = router.page(
//!             || {
//!                 PageHandle::new(
//!                     Box::new(HomePage {
//!                         element: NodeId::new(),
//!                     }),
//!                     PagePolicy::transient(),
//!                 )
//!             },
//!             None,
//!         )?;
//!         router.render_page(page, None, dom);
//!         Ok(())
//!     })
//!     .build()?;
//!
//! let mut dom = NoopDom;
//! router.start(&mut dom)?;
//!
//! assert_eq!(router.breadcrumb().actions(), vec!["home"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cache;
pub mod core;
pub mod dom;
pub mod events;
pub mod page;
pub mod router;
pub mod view;

// Re-export commonly used types
pub use cache::{CacheKey, PageCache};
pub use crate::core::{Breadcrumb, BreadcrumbEntry, Direction, RenderPageOptions};
pub use dom::{DomBackend, NodeId};
pub use events::{AppEvent, Channel, EventBus};
pub use page::{
    Page, PageHandle, PagePolicy, RemovalToken, RenderPhase, SharedPage, TransitionDecision,
};
pub use router::{
    NavigationError, Route, RouteEngine, RouteHandler, Router, RouterBuilder, RouterBuildError,
};
pub use view::AppView;
