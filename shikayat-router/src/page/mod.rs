//! Page module.
//!
//! Defines the `Page` trait, the parameters a page is invoked with, and the
//! `View` a page renders into the outlet.

pub mod traits;
pub mod view;

pub use traits::{Context, Navigation, Page, Params};
pub use view::{Link, Outlet, View};
