pub mod application;
pub mod page;
pub mod state;
pub mod router;
pub mod history;
pub mod error;

pub use error::{Error, Result};

// Re-export common types for convenience
pub use application::{AppConfig, Application};
pub use page::{Context, Link, Navigation, Outlet, Page, Params, View};
pub use state::Entity;
pub use router::{Navigator, Route, RouteMatch, Router, RouterState};
pub use history::{History, MemoryHistory};
