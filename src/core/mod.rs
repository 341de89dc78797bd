//! Pure navigation-state core.
//!
//! This module contains the algorithmic heart of the crate:
//! - Route history tracking via [`Breadcrumb`]
//! - Direction inference ([`Direction`])
//! - Per-navigation render options ([`RenderPageOptions`])
//!
//! Everything here is pure bookkeeping over plain values; nothing in this
//! module touches the presentation layer.

mod breadcrumb;
mod options;

pub use breadcrumb::{Breadcrumb, BreadcrumbEntry};
pub use options::{Direction, RenderPageOptions};
