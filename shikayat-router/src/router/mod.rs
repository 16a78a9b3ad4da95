//! Router module.
//!
//! Compiles path patterns, matches paths against them in registration order,
//! and keeps the history model in step with navigation.

pub mod core;
pub mod navigator;
pub mod pattern;
pub mod route;

pub use self::core::{Router, RouterState};
pub use navigator::{NavRequest, Navigator};
pub use pattern::Matcher;
pub use route::{Route, RouteMatch};
