//! Route definitions.

use super::pattern::Matcher;
use crate::page::{Page, Params};

/// A registered pattern and the page it activates. Immutable once registered.
pub struct Route {
    pattern: String,
    matcher: Matcher,
    page: Box<dyn Page>,
}

impl Route {
    pub fn new(pattern: impl Into<String>, page: impl Page) -> Self {
        let pattern = pattern.into();
        let matcher = Matcher::compile(&pattern);
        Self {
            pattern,
            matcher,
            page: Box::new(page),
        }
    }

    /// The pattern as authored.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Parameter names declared by the pattern, left to right.
    pub fn param_names(&self) -> &[String] {
        self.matcher.param_names()
    }

    pub(crate) fn match_path(&self, path: &str) -> Option<Params> {
        self.matcher
            .matches(path)
            .map(|values| values.into_iter().collect())
    }

    pub(crate) fn page_mut(&mut self) -> &mut dyn Page {
        self.page.as_mut()
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("param_names", &self.param_names())
            .finish_non_exhaustive()
    }
}

/// Outcome of a successful lookup.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: Params,
}
