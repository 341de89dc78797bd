//! Builder for constructing routers.

use crate::cache::PageCache;
use crate::core::Breadcrumb;
use crate::events::{AppEvent, Channel, EventBus};
use crate::dom::{DomBackend, NodeId};
use crate::router::error::{NavigationError, RouterBuildError};
use crate::router::{Route, RouteEngine, RouteHandler, Router};
use crate::view::AppView;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Builder assembling a [`Router`] with a fluent API.
///
/// The action↔handler mapping is validated and frozen at `build()` time:
/// a missing root route or a duplicated action name fails fast instead of
/// surfacing as a misrouted navigation later.
pub struct RouterBuilder {
    routes: Vec<(Route, RouteHandler)>,
    engine: Option<Rc<dyn RouteEngine>>,
    bus: Option<Rc<EventBus>>,
    view: Option<AppView>,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            engine: None,
            bus: None,
            view: None,
        }
    }

    /// Register a route. The route with the empty pattern is the root.
    ///
    /// Registration order matters: when a fragment structurally matches
    /// several patterns, the first registered wins.
    pub fn route<F>(mut self, pattern: &str, action: &str, handler: F) -> Self
    where
        F: FnMut(&mut Router, &[String], &mut dyn DomBackend) -> Result<(), NavigationError>
            + 'static,
    {
        self.routes.push((
            Route {
                pattern: pattern.to_string(),
                action: action.to_string(),
            },
            Rc::new(RefCell::new(handler)),
        ));
        self
    }

    /// Supply the URL-routing engine (defaults to an engine with no
    /// current fragment, which makes explicit cache keys mandatory for
    /// cacheable pages).
    pub fn engine(mut self, engine: Rc<dyn RouteEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Share an existing event bus instead of creating a fresh one.
    pub fn event_bus(mut self, bus: Rc<EventBus>) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Supply a configured presentation host.
    pub fn view(mut self, view: AppView) -> Self {
        self.view = Some(view);
        self
    }

    /// Build the router.
    pub fn build(self) -> Result<Router, RouterBuildError> {
        if self.routes.is_empty() {
            return Err(RouterBuildError::NoRoutes);
        }

        let mut routes = Vec::with_capacity(self.routes.len());
        let mut handlers: HashMap<String, RouteHandler> = HashMap::new();
        for (route, handler) in self.routes {
            if handlers.insert(route.action.clone(), handler).is_some() {
                return Err(RouterBuildError::DuplicateAction {
                    action: route.action,
                });
            }
            routes.push(route);
        }

        let root_action = routes
            .iter()
            .find(|r| r.pattern.is_empty())
            .map(|r| r.action.clone())
            .ok_or(RouterBuildError::MissingRootAction)?;

        let engine = self.engine.unwrap_or_else(|| Rc::new(NullEngine));
        let bus = self.bus.unwrap_or_default();
        let cache = Rc::new(RefCell::new(PageCache::new()));

        // Cache owners elsewhere in the app publish invalidation requests
        // on the bus; wire them straight into the cache.
        let bus_cache = Rc::clone(&cache);
        bus.subscribe(Channel::CacheInvalidate, move |event| {
            if let AppEvent::CacheInvalidate(key) = event {
                bus_cache.borrow_mut().invalidate(key);
            }
        });

        Ok(Router {
            breadcrumb: Breadcrumb::new(root_action.clone()),
            cache,
            bus,
            engine,
            view: self.view.unwrap_or_else(|| AppView::new(NodeId::new())),
            routes,
            handlers,
            root_action,
            coming_action: None,
            in_flight: None,
            app_ready_published: false,
        })
    }
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Engine used when none is supplied: no fragment is ever current.
struct NullEngine;

impl RouteEngine for NullEngine {
    fn current_fragment(&self) -> String {
        String::new()
    }
}
