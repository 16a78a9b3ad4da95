use crate::page::view::{Outlet, View};
use crate::router::Navigator;

/// Path parameters bound by a route match, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Value bound to `name`, if the matched pattern declared it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(name, value)` pairs in the order the pattern declared them.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// How the location being rendered was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Navigation {
    /// A new history entry was pushed (link, `navigate`, initial load).
    #[default]
    Push,
    /// The current history entry was overwritten by a redirect.
    Replace,
    /// An existing entry was revisited through back/forward.
    Pop,
}

/// What a page gets to work with while it renders.
pub struct Context {
    location: String,
    navigation: Navigation,
    outlet: Outlet,
    navigator: Navigator,
}

impl Context {
    pub fn new(location: impl Into<String>, outlet: Outlet, navigator: Navigator) -> Self {
        Self {
            location: location.into(),
            navigation: Navigation::Push,
            outlet,
            navigator,
        }
    }

    pub fn with_navigation(mut self, navigation: Navigation) -> Self {
        self.navigation = navigation;
        self
    }

    pub fn navigation(&self) -> Navigation {
        self.navigation
    }

    /// True when the entry is being revisited through back/forward. Pages
    /// that act on a submission in the query string must not act again.
    pub fn is_pop(&self) -> bool {
        self.navigation == Navigation::Pop
    }

    /// The raw location being activated, query string and fragment included.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The query string of the location, without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        let (_, rest) = self.location.split_once('?')?;
        Some(rest.split('#').next().unwrap_or(rest))
    }

    /// Replace whatever the outlet currently shows.
    pub fn show(&mut self, view: View) -> crate::Result<()> {
        self.outlet.set(view)
    }

    pub fn outlet(&self) -> &Outlet {
        &self.outlet
    }

    /// Handle for requesting navigation; dispatched once this page returns.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }
}

/// A screen the router can activate.
///
/// `render` is called synchronously every time a route bound to this page
/// matches, whether by `navigate` or by back/forward. Anything asynchronous
/// the page starts is its own business.
pub trait Page: Send + Sync + 'static {
    fn render(&mut self, params: &Params, cx: &mut Context);
}

impl<F> Page for F
where
    F: FnMut(&Params, &mut Context) + Send + Sync + 'static,
{
    fn render(&mut self, params: &Params, cx: &mut Context) {
        self(params, cx)
    }
}
