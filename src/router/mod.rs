//! Navigation coordinator.
//!
//! The router is the front controller of the application: it maps route
//! actions to handlers, records the breadcrumb, resolves page instances
//! through the cache, and hands pages to the presentation host with the
//! computed direction metadata.
//!
//! The underlying URL-routing engine is an external collaborator; the
//! core only requires that it exposes the current fragment (the default
//! cache key) and that something invokes [`Router::dispatch`] when a
//! pattern matches. The action name is known before the handler runs, so
//! direction can be computed against the pre-navigation history — a
//! post-execution hook alone could not do this.

pub mod builder;
pub mod error;

pub use builder::RouterBuilder;
pub use error::{NavigationError, RouterBuildError};

use crate::cache::{CacheKey, PageCache};
use crate::core::{Breadcrumb, RenderPageOptions};
use crate::dom::DomBackend;
use crate::events::{AppEvent, EventBus};
use crate::page::{PageHandle, SharedPage};
use crate::view::AppView;
use log::debug;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Contract the external URL-routing engine must satisfy.
pub trait RouteEngine {
    /// The fragment currently shown in the address bar, without the
    /// leading separator (for example `profile/42`). Empty when nothing
    /// has been navigated to yet.
    fn current_fragment(&self) -> String;
}

/// One registered route: a URL pattern bound to an action name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub pattern: String,
    pub action: String,
}

/// Handler executed when a route action is dispatched.
pub type RouteHandler =
    Rc<RefCell<dyn FnMut(&mut Router, &[String], &mut dyn DomBackend) -> Result<(), NavigationError>>>;

/// Front controller composing breadcrumb, page cache, and presentation
/// host. Built with [`RouterBuilder`].
pub struct Router {
    pub(crate) breadcrumb: Breadcrumb,
    pub(crate) cache: Rc<RefCell<PageCache>>,
    pub(crate) bus: Rc<EventBus>,
    pub(crate) engine: Rc<dyn RouteEngine>,
    pub(crate) view: AppView,
    pub(crate) routes: Vec<Route>,
    pub(crate) handlers: HashMap<String, RouteHandler>,
    pub(crate) root_action: String,
    pub(crate) coming_action: Option<String>,
    pub(crate) in_flight: Option<String>,
    pub(crate) app_ready_published: bool,
}

impl Router {
    /// Dispatch the initial route and publish `AppReady`.
    ///
    /// The engine's current fragment selects the starting action; a
    /// fragment matching no registered pattern starts at the root.
    pub fn start(&mut self, dom: &mut dyn DomBackend) -> Result<(), NavigationError> {
        let fragment = self.engine.current_fragment();
        let action = self
            .action_for_fragment(&fragment)
            .unwrap_or_else(|| self.root_action.clone());
        self.dispatch(&action, &[], dom)?;

        if !self.app_ready_published {
            self.app_ready_published = true;
            self.bus.publish(&AppEvent::AppReady);
        }
        Ok(())
    }

    /// Execute the navigation pipeline for a matched route action.
    ///
    /// Sets the coming action, runs the registered handler (which
    /// resolves its page and calls [`render_page`](Self::render_page)),
    /// then records the breadcrumb entry. Direction metadata is computed
    /// inside the handler's `render_page` call, against the history as it
    /// was before this navigation.
    ///
    /// Re-entrant dispatch — a handler or lifecycle hook navigating again
    /// while this navigation is still on the stack — is rejected, since
    /// it would interleave breadcrumb updates of two navigations.
    pub fn dispatch(
        &mut self,
        action: &str,
        args: &[String],
        dom: &mut dyn DomBackend,
    ) -> Result<(), NavigationError> {
        if let Some(current) = &self.in_flight {
            return Err(NavigationError::ReentrantNavigation {
                current: current.clone(),
                attempted: action.to_string(),
            });
        }
        let handler = self
            .handlers
            .get(action)
            .cloned()
            .ok_or_else(|| NavigationError::UnknownAction {
                action: action.to_string(),
            })?;

        debug!("dispatching '{action}'");
        self.in_flight = Some(action.to_string());
        self.coming_action = Some(action.to_string());

        let result = {
            let mut handler = handler.borrow_mut();
            (&mut *handler)(self, args, dom)
        };

        if result.is_ok() {
            self.breadcrumb.record(action);
        }
        self.in_flight = None;
        result
    }

    /// Resolve a page instance through the cache.
    ///
    /// The cache key defaults to the engine's current fragment. A
    /// cacheable page constructed while no key can be derived is a
    /// configuration error, not a silent cache entry under `""`.
    pub fn page<F>(
        &mut self,
        construct: F,
        cache_key: Option<CacheKey>,
    ) -> Result<SharedPage, NavigationError>
    where
        F: FnOnce() -> PageHandle,
    {
        let key =
            cache_key.unwrap_or_else(|| CacheKey::from(self.engine.current_fragment()));

        if key.is_empty() {
            let handle = construct();
            if handle.policy().cacheable {
                return Err(NavigationError::MissingCacheKey {
                    action: self.coming_action.clone().unwrap_or_default(),
                });
            }
            return Ok(Rc::new(RefCell::new(handle)));
        }

        Ok(self.cache.borrow_mut().get_or_create(&key, construct))
    }

    /// Render a page through the presentation host.
    ///
    /// When `options` is `None` they are computed from the breadcrumb via
    /// [`render_page_options`](Self::render_page_options). After the swap
    /// the history is truncated if this navigation returned near the
    /// root.
    pub fn render_page(
        &mut self,
        page: SharedPage,
        options: Option<RenderPageOptions>,
        dom: &mut dyn DomBackend,
    ) {
        let options = options.unwrap_or_else(|| self.render_page_options());
        self.view.render_page(page, &options, dom);
        if self.breadcrumb.try_truncate(&options.coming_action) {
            debug!(
                "route history truncated at '{}'",
                options.coming_action
            );
        }
    }

    /// Compute the render options for the navigation in flight.
    pub fn render_page_options(&self) -> RenderPageOptions {
        let coming = self.coming_action.clone().unwrap_or_default();
        RenderPageOptions {
            direction: self.breadcrumb.direction_of(&coming),
            current_action: self.breadcrumb.current_action().map(str::to_string),
            coming_action: coming,
        }
    }

    /// Evict cached pages, honoring the flat/composite key distinction.
    pub fn invalidate(&mut self, key: &CacheKey) -> usize {
        self.cache.borrow_mut().invalidate(key)
    }

    /// First registered route whose pattern matches `fragment` exactly.
    /// Pattern syntax beyond literal matching belongs to the engine.
    pub fn action_for_fragment(&self, fragment: &str) -> Option<String> {
        self.routes
            .iter()
            .find(|r| r.pattern == fragment)
            .map(|r| r.action.clone())
    }

    pub fn root_action(&self) -> &str {
        &self.root_action
    }

    /// The action of the navigation currently or most recently
    /// dispatched.
    pub fn coming_action(&self) -> Option<&str> {
        self.coming_action.as_deref()
    }

    pub fn breadcrumb(&self) -> &Breadcrumb {
        &self.breadcrumb
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Shared handle to the page cache.
    pub fn cache(&self) -> Rc<RefCell<PageCache>> {
        Rc::clone(&self.cache)
    }

    /// Shared handle to the event bus.
    pub fn event_bus(&self) -> Rc<EventBus> {
        Rc::clone(&self.bus)
    }

    pub fn view(&self) -> &AppView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut AppView {
        &mut self.view
    }
}
