//! Errors for router construction and navigation.

use thiserror::Error;

/// Errors that can occur when building a [`Router`](crate::router::Router).
#[derive(Debug, Error)]
pub enum RouterBuildError {
    #[error("No routes defined. Register at least one route")]
    NoRoutes,

    #[error("No root route registered. Add a route with the empty pattern before .build()")]
    MissingRootAction,

    #[error("Action '{action}' is bound to more than one route")]
    DuplicateAction { action: String },
}

/// Errors that can occur while dispatching a navigation.
///
/// Missing cache entries and an empty breadcrumb are normal control flow,
/// not errors; everything here is a real misuse of the core.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("No route action named '{action}' is registered")]
    UnknownAction { action: String },

    #[error("Cacheable page for action '{action}' has no cache key; supply one or navigate to a fragment first")]
    MissingCacheKey { action: String },

    #[error("Navigation to '{attempted}' started while '{current}' is still dispatching")]
    ReentrantNavigation { current: String, attempted: String },
}
