//! Router implementation: route table, matching, and history synchronization.

use snafu::prelude::*;
use tokio::sync::mpsc;

use super::navigator::{NavRequest, Navigator};
use super::route::{Route, RouteMatch};
use crate::error::{DuplicatePatternSnafu, Result};
use crate::history::{path_of, History, MemoryHistory};
use crate::page::{Context, Navigation, Outlet, Page, Params};

/// Upper bound on queued requests handled in one pass; stops redirect loops.
const MAX_QUEUED_NAVIGATIONS: usize = 64;

/// Lifecycle of a router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
    /// Routes may be registered; popstate notifications are ignored.
    Uninitialized,
    /// `init` has run; popstate notifications are dispatched.
    Active,
}

/// Maps paths to pages and keeps history in step with navigation.
///
/// Routes are matched in registration order and the first structural match
/// wins; there is no specificity ranking. `navigate` pushes a history entry,
/// while `pop_state` (back/forward) dispatches without pushing.
///
/// # Example
/// ```ignore
/// let mut router = Router::new(MemoryHistory::new("/"));
/// router.register("/", HomePage::default())?;
/// router.register("/authorities/:id", AuthorityDetailPage::new(directory))?;
/// router.init();
/// router.navigate("/authorities/police");
/// assert_eq!(router.current_path(), Some("/authorities/police"));
/// ```
pub struct Router<H: History = MemoryHistory> {
    routes: Vec<Route>,
    current_path: Option<String>,
    state: RouterState,
    history: H,
    outlet: Outlet,
    navigator: Navigator,
    requests: mpsc::UnboundedReceiver<NavRequest>,
}

impl<H: History> Router<H> {
    /// Create an empty router on top of the given history.
    pub fn new(history: H) -> Self {
        let (navigator, requests) = Navigator::channel();
        Self {
            routes: Vec::new(),
            current_path: None,
            state: RouterState::Uninitialized,
            history,
            outlet: Outlet::default(),
            navigator,
            requests,
        }
    }

    /// Append a route. Registering the same pattern twice is rejected, since
    /// the second entry could never be reached.
    pub fn register(&mut self, pattern: impl Into<String>, page: impl Page) -> Result<()> {
        let pattern = pattern.into();
        ensure!(
            !self.routes.iter().any(|r| r.pattern() == pattern),
            DuplicatePatternSnafu { pattern }
        );
        if !pattern.starts_with('/') {
            tracing::warn!(%pattern, "route pattern does not start with '/' and will never match");
        }
        tracing::debug!(%pattern, "registered route");
        self.routes.push(Route::new(pattern, page));
        Ok(())
    }

    /// Find the first route matching `path` (no query string or fragment).
    pub fn match_route(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.find(path).map(|(index, params)| RouteMatch {
            route: &self.routes[index],
            params,
        })
    }

    /// Activate the route matching `path` and push it onto history.
    ///
    /// Returns false (after logging) when nothing matches; history, the
    /// current path and the outlet are then left untouched. Navigation
    /// requested by the page while rendering is dispatched before returning.
    pub fn navigate(&mut self, path: &str) -> bool {
        let activated = self.push_route(path);
        self.dispatch_pending();
        activated
    }

    /// Like [`navigate`](Self::navigate), but overwrites the current history
    /// entry instead of pushing a new one.
    pub fn replace(&mut self, path: &str) -> bool {
        let activated = self.replace_route(path);
        self.dispatch_pending();
        activated
    }

    /// Start routing: begin honouring popstate and activate the load-time
    /// location, falling back to `/` when it matches nothing.
    pub fn init(&mut self) {
        if self.state == RouterState::Active {
            tracing::warn!("router already initialized");
            return;
        }
        self.state = RouterState::Active;

        let location = self.history.location().to_string();
        if !self.push_route(&location) {
            tracing::info!(%location, "initial location has no route, falling back to /");
            if !self.push_route("/") {
                tracing::error!("no route registered for /");
            }
        }
        self.dispatch_pending();
    }

    /// Dispatch the current history entry without pushing. Call this after the
    /// history pointer has moved (back/forward).
    pub fn pop_state(&mut self) -> bool {
        let activated = self.pop_route();
        self.dispatch_pending();
        activated
    }

    /// Step back through history and dispatch the entry landed on.
    ///
    /// Does nothing before `init`, so history and the current path stay in step.
    pub fn back(&mut self) -> bool {
        let activated = self.step_back();
        if activated {
            self.dispatch_pending();
        }
        activated
    }

    /// Step forward through history and dispatch the entry landed on.
    pub fn forward(&mut self) -> bool {
        let activated = self.step_forward();
        if activated {
            self.dispatch_pending();
        }
        activated
    }

    /// Path of the most recently activated route.
    pub fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }

    pub fn state(&self) -> RouterState {
        self.state
    }

    /// Registered routes, in priority order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// The container pages render into.
    pub fn outlet(&self) -> &Outlet {
        &self.outlet
    }

    /// A handle pages can keep for requesting navigation.
    pub fn navigator(&self) -> Navigator {
        self.navigator.clone()
    }

    fn find(&self, path: &str) -> Option<(usize, Params)> {
        self.routes
            .iter()
            .enumerate()
            .find_map(|(index, route)| route.match_path(path).map(|params| (index, params)))
    }

    fn push_route(&mut self, location: &str) -> bool {
        self.commit_route(location, Navigation::Push)
    }

    fn replace_route(&mut self, location: &str) -> bool {
        self.commit_route(location, Navigation::Replace)
    }

    fn commit_route(&mut self, location: &str, navigation: Navigation) -> bool {
        let path = path_of(location);
        let Some((index, params)) = self.find(path) else {
            tracing::warn!(%location, "route not found");
            return false;
        };
        self.current_path = Some(path.to_string());
        match navigation {
            Navigation::Replace => self.history.replace(location.to_string()),
            _ => self.history.push(location.to_string()),
        }
        self.activate(index, &params, location.to_string(), navigation);
        true
    }

    fn step_back(&mut self) -> bool {
        if self.state != RouterState::Active {
            tracing::debug!("back before init ignored");
            return false;
        }
        self.history.back() && self.pop_route()
    }

    fn step_forward(&mut self) -> bool {
        if self.state != RouterState::Active {
            tracing::debug!("forward before init ignored");
            return false;
        }
        self.history.forward() && self.pop_route()
    }

    fn pop_route(&mut self) -> bool {
        if self.state != RouterState::Active {
            tracing::debug!("popstate before init ignored");
            return false;
        }
        let location = self.history.location().to_string();
        let path = path_of(&location);
        let Some((index, params)) = self.find(path) else {
            tracing::warn!(%location, "route not found on popstate");
            return false;
        };
        self.current_path = Some(path.to_string());
        self.activate(index, &params, location, Navigation::Pop);
        true
    }

    fn activate(&mut self, index: usize, params: &Params, location: String, navigation: Navigation) {
        let mut cx = Context::new(location, self.outlet.clone(), self.navigator.clone())
            .with_navigation(navigation);
        let route = &mut self.routes[index];
        tracing::debug!(
            pattern = route.pattern(),
            location = cx.location(),
            ?navigation,
            "activating route"
        );
        route.page_mut().render(params, &mut cx);
    }

    /// Dispatch navigation requests queued through the [`Navigator`], in order.
    pub fn dispatch_pending(&mut self) {
        let mut handled = 0;
        while let Ok(request) = self.requests.try_recv() {
            if handled == MAX_QUEUED_NAVIGATIONS {
                tracing::error!(?request, "too many chained navigations, dropping the rest");
                while self.requests.try_recv().is_ok() {}
                return;
            }
            handled += 1;
            match request {
                NavRequest::Push(path) => {
                    self.push_route(&path);
                }
                NavRequest::Replace(path) => {
                    self.replace_route(&path);
                }
                NavRequest::Back => {
                    self.step_back();
                }
                NavRequest::Forward => {
                    self.step_forward();
                }
            }
        }
    }
}

impl Default for Router<MemoryHistory> {
    fn default() -> Self {
        Self::new(MemoryHistory::default())
    }
}
